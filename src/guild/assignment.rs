//! Planning parties for board quests, by hand or automatically.

use super::types::{Guild, GuildEvent};
use crate::adventurer::{AdventurerId, AdventurerState};
use crate::core::AssignmentError;
use crate::quest::{QuestAssignment, QuestId, QuestService};
use rand::Rng;
use std::collections::BTreeSet;
use tracing::debug;

/// Validates and plans quest assignments against a guild's roster.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssignmentService;

impl AssignmentService {
    /// Plan a hand-picked party. On error the guild is left untouched.
    ///
    /// Manual parties pay the guild a smaller cut.
    pub fn assign_manual(
        guild: &mut Guild,
        quest_id: QuestId,
        member_ids: &[AdventurerId],
    ) -> Result<(), AssignmentError> {
        let quest = guild
            .quest(quest_id)
            .map_err(|_| AssignmentError::UnknownQuest(quest_id.0))?;
        if quest.is_tournament && guild.in_tournament() {
            return Err(AssignmentError::TournamentEntered);
        }

        let mut seen = BTreeSet::new();
        for id in member_ids {
            if !seen.insert(*id) {
                return Err(AssignmentError::DuplicateMember(id.0));
            }
            let adventurer = guild
                .roster
                .get(id)
                .ok_or(AssignmentError::UnknownAdventurer(id.0))?;
            if !adventurer.is_available() {
                return Err(AssignmentError::Unavailable {
                    name: adventurer.name.clone(),
                });
            }
        }
        if member_ids.len() != quest.party_size {
            return Err(AssignmentError::PartySize {
                required: quest.party_size,
                given: member_ids.len(),
            });
        }

        plan(guild, quest_id, member_ids.to_vec(), true);
        Ok(())
    }

    /// Fill every open non-manual quest the roster can staff with its
    /// highest-scoring available members.
    pub fn auto_assign<R: Rng>(guild: &mut Guild, service: &QuestService<R>) -> Vec<GuildEvent> {
        let mut events = Vec::new();
        let open: Vec<QuestId> = guild
            .board
            .iter()
            .filter(|q| !q.manual_only)
            .map(|q| q.id)
            .collect();

        for quest_id in open {
            let Ok(quest) = guild.quest(quest_id) else {
                continue;
            };
            let mut candidates: Vec<(AdventurerId, f64)> = guild
                .available_members()
                .map(|a| (a.id, service.calculate_score(quest, a)))
                .collect();
            if candidates.len() < quest.party_size || quest.party_size == 0 {
                continue;
            }
            candidates.sort_by(|a, b| b.1.total_cmp(&a.1));
            let members: Vec<AdventurerId> = candidates
                .into_iter()
                .take(quest.party_size)
                .map(|(id, _)| id)
                .collect();

            debug!(quest = %quest_id, party = members.len(), "auto-assigned party");
            plan(guild, quest_id, members.clone(), false);
            events.push(GuildEvent::PartyPlanned {
                quest_id,
                members,
                manual: false,
            });
        }
        events
    }
}

/// Move a quest off the board into a planned assignment and reserve its
/// members.
fn plan(guild: &mut Guild, quest_id: QuestId, members: Vec<AdventurerId>, manual: bool) {
    let Some(quest) = guild.take_quest(quest_id) else {
        return;
    };
    for id in &members {
        if let Some(adventurer) = guild.roster.get_mut(id) {
            adventurer.state = AdventurerState::Planning;
        }
    }
    guild.planned.push(QuestAssignment::new(quest, members, manual));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adventurer::RankLabel;
    use crate::core::constants::{GUILD_BASE_CUT, GUILD_MANUAL_CUT_SHIFT};
    use crate::quest::{Quest, QuestType};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn guild_with_quest(party_size: usize) -> Guild {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut guild = Guild::new("Test");
        for _ in 0..4 {
            guild.recruit(Some(200.0), &mut rng);
        }
        let mut quest = Quest::new(QuestId(1), "Eastern Caravan Escort", QuestType::Escort, RankLabel::E);
        quest.party_size = party_size;
        guild.board.push(quest);
        guild
    }

    #[test]
    fn test_manual_assignment_plans_party() {
        let mut guild = guild_with_quest(2);
        AssignmentService::assign_manual(&mut guild, QuestId(1), &[AdventurerId(1), AdventurerId(2)])
            .unwrap();
        assert!(guild.board.is_empty());
        assert_eq!(guild.planned.len(), 1);
        let planned = &guild.planned[0];
        assert!(planned.manual);
        assert!((planned.guild_cut_rate - (GUILD_BASE_CUT - GUILD_MANUAL_CUT_SHIFT)).abs() < 1e-9);
        assert_eq!(guild.roster[&AdventurerId(1)].state, AdventurerState::Planning);
        assert_eq!(guild.roster[&AdventurerId(3)].state, AdventurerState::Idle);
    }

    #[test]
    fn test_manual_assignment_rejections_leave_guild_untouched() {
        let mut guild = guild_with_quest(2);
        let before = guild.clone();

        let err = AssignmentService::assign_manual(&mut guild, QuestId(9), &[AdventurerId(1)]);
        assert_eq!(err, Err(AssignmentError::UnknownQuest(9)));

        let err = AssignmentService::assign_manual(&mut guild, QuestId(1), &[AdventurerId(1)]);
        assert_eq!(err, Err(AssignmentError::PartySize { required: 2, given: 1 }));

        let err = AssignmentService::assign_manual(&mut guild, QuestId(1), &[AdventurerId(1), AdventurerId(1)]);
        assert_eq!(err, Err(AssignmentError::DuplicateMember(1)));

        let err = AssignmentService::assign_manual(&mut guild, QuestId(1), &[AdventurerId(1), AdventurerId(77)]);
        assert_eq!(err, Err(AssignmentError::UnknownAdventurer(77)));

        assert_eq!(guild, before);
    }

    #[test]
    fn test_injured_member_is_unavailable() {
        let mut guild = guild_with_quest(1);
        guild.roster.get_mut(&AdventurerId(2)).unwrap().recovery_days = 3;
        let name = guild.roster[&AdventurerId(2)].name.clone();
        let err = AssignmentService::assign_manual(&mut guild, QuestId(1), &[AdventurerId(2)]);
        assert_eq!(err, Err(AssignmentError::Unavailable { name }));
    }

    #[test]
    fn test_second_tournament_entry_rejected() {
        let mut guild = guild_with_quest(1);
        let mut first = Quest::new(QuestId(2), "Central Grand Tournament", QuestType::Tournament, RankLabel::D);
        first.party_size = 1;
        let mut second = first.clone();
        second.id = QuestId(3);
        guild.board.push(first);
        guild.board.push(second);

        AssignmentService::assign_manual(&mut guild, QuestId(2), &[AdventurerId(1)]).unwrap();
        let err = AssignmentService::assign_manual(&mut guild, QuestId(3), &[AdventurerId(2)]);
        assert_eq!(err, Err(AssignmentError::TournamentEntered));
    }

    #[test]
    fn test_auto_assign_skips_manual_only_and_reserves_members() {
        let mut guild = guild_with_quest(3);
        let mut special = Quest::new(QuestId(2), "Eastern Free Hunt", QuestType::FreeHunt, RankLabel::E);
        special.manual_only = true;
        special.party_size = 1;
        guild.board.push(special);
        let mut second = Quest::new(QuestId(3), "Western Caravan Escort", QuestType::Escort, RankLabel::E);
        second.party_size = 2;
        guild.board.push(second);

        let service = QuestService::new(ChaCha8Rng::seed_from_u64(12));
        let events = AssignmentService::auto_assign(&mut guild, &service);

        // Three of four go on the escort; one left is too few for the second
        assert_eq!(events.len(), 1);
        assert_eq!(guild.planned.len(), 1);
        assert!(!guild.planned[0].manual);
        assert!((guild.planned[0].guild_cut_rate - GUILD_BASE_CUT).abs() < 1e-9);
        assert_eq!(guild.members_in_state(AdventurerState::Planning), 3);
        assert_eq!(guild.board.len(), 2);
        assert!(guild.board.iter().any(|q| q.id == QuestId(2)));
    }
}
