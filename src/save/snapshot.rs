use crate::adventurer::AdventurerState;
use crate::guild::Guild;
use crate::quest::QuestAssignment;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::warn;

/// Everything written to a save file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuildSnapshot {
    pub guild: Guild,
    /// Unix timestamp of when the snapshot was taken
    pub saved_at: i64,
}

impl GuildSnapshot {
    pub fn capture(guild: &Guild) -> Self {
        Self {
            guild: guild.clone(),
            saved_at: Utc::now().timestamp(),
        }
    }

    /// Rebuild the guild, re-resolving every assignment's member ids against
    /// the roster.
    pub fn into_guild(self) -> Guild {
        let mut guild = self.guild;
        reconcile(&mut guild);
        guild
    }
}

/// Drop assignment members that no longer resolve, drop assignments left with
/// nobody, and bring member states in line with where they actually are.
pub fn reconcile(guild: &mut Guild) {
    let roster_ids: BTreeSet<_> = guild.roster.keys().copied().collect();
    let retain = |list: &mut Vec<QuestAssignment>| {
        list.retain_mut(|assignment| {
            let before = assignment.members.len();
            assignment.members.retain(|id| roster_ids.contains(id));
            if assignment.members.len() != before {
                warn!(
                    quest = %assignment.quest.id,
                    dropped = before - assignment.members.len(),
                    "assignment members missing from roster"
                );
            }
            !assignment.members.is_empty()
        });
    };
    retain(&mut guild.planned);
    retain(&mut guild.ongoing);

    let planning: BTreeSet<_> = guild.planned.iter().flat_map(|a| a.members.iter().copied()).collect();
    let questing: BTreeSet<_> = guild.ongoing.iter().flat_map(|a| a.members.iter().copied()).collect();
    for (id, adventurer) in guild.roster.iter_mut() {
        adventurer.state = if questing.contains(id) {
            AdventurerState::Questing
        } else if planning.contains(id) {
            AdventurerState::Planning
        } else {
            AdventurerState::Idle
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adventurer::{AdventurerId, RankLabel};
    use crate::quest::{Quest, QuestId, QuestType};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn assignment(id: u32, members: &[u32]) -> QuestAssignment {
        let quest = Quest::new(QuestId(id), "Eastern Free Hunt", QuestType::FreeHunt, RankLabel::E);
        QuestAssignment::new(quest, members.iter().map(|m| AdventurerId(*m)).collect(), false)
    }

    #[test]
    fn test_reconcile_drops_missing_members() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut guild = Guild::found("Test", &mut rng);
        guild.planned.push(assignment(1, &[1, 99]));
        guild.ongoing.push(assignment(2, &[2]));
        guild.ongoing.push(assignment(3, &[42, 43]));

        reconcile(&mut guild);
        assert_eq!(guild.planned[0].members, vec![AdventurerId(1)]);
        assert_eq!(guild.ongoing.len(), 1);
        assert_eq!(guild.roster[&AdventurerId(1)].state, AdventurerState::Planning);
        assert_eq!(guild.roster[&AdventurerId(2)].state, AdventurerState::Questing);
        assert_eq!(guild.roster[&AdventurerId(3)].state, AdventurerState::Idle);
    }

    #[test]
    fn test_stray_questing_state_is_reset() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut guild = Guild::found("Test", &mut rng);
        if let Some(adv) = guild.roster.get_mut(&AdventurerId(4)) {
            adv.state = AdventurerState::Questing;
        }
        let guild = GuildSnapshot::capture(&guild).into_guild();
        assert_eq!(guild.roster[&AdventurerId(4)].state, AdventurerState::Idle);
    }
}
