use crate::adventurer::recruit::random_recruit;
use crate::adventurer::{Adventurer, AdventurerId, AdventurerState, RankLabel};
use crate::core::constants::{STARTING_GUILD_MONEY, STARTING_ROSTER_RANK_CAP, STARTING_ROSTER_SIZE};
use crate::core::{Facilities, GuildError, QuestModifiers};
use crate::quest::{Quest, QuestAssignment, QuestId, QuestOutcome};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// The guild: single owner of every adventurer. Quests and assignments refer
/// to members by id only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guild {
    pub id: Uuid,
    pub name: String,
    pub day: u32,
    pub money: i64,
    pub reputation: i64,
    pub facilities: Facilities,
    pub roster: BTreeMap<AdventurerId, Adventurer>,
    /// Quests waiting for a party
    pub board: Vec<Quest>,
    pub planned: Vec<QuestAssignment>,
    pub ongoing: Vec<QuestAssignment>,
    /// Ids of quests that have been resolved, oldest first
    pub archive: Vec<QuestId>,
    pub next_quest_id: u32,
    pub next_adventurer_id: u32,
}

impl Guild {
    /// An empty guild with starting funds.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            day: 0,
            money: STARTING_GUILD_MONEY,
            reputation: 0,
            facilities: Facilities::default(),
            roster: BTreeMap::new(),
            board: Vec::new(),
            planned: Vec::new(),
            ongoing: Vec::new(),
            archive: Vec::new(),
            next_quest_id: 1,
            next_adventurer_id: 1,
        }
    }

    /// A new guild with its founding roster of low-rank recruits.
    pub fn found(name: impl Into<String>, rng: &mut impl Rng) -> Self {
        let mut guild = Self::new(name);
        for _ in 0..STARTING_ROSTER_SIZE {
            guild.recruit(Some(STARTING_ROSTER_RANK_CAP), rng);
        }
        guild
    }

    /// Roll a random recruit and add them to the roster.
    pub fn recruit(&mut self, rank_cap: Option<f64>, rng: &mut impl Rng) -> AdventurerId {
        let id = self.allocate_adventurer_id();
        self.roster.insert(id, random_recruit(id, rank_cap, rng));
        id
    }

    /// Add an existing adventurer. The id counter is moved past their id so
    /// later recruits never collide.
    pub fn add_adventurer(&mut self, adventurer: Adventurer) -> AdventurerId {
        let id = adventurer.id;
        self.next_adventurer_id = self.next_adventurer_id.max(id.0 + 1);
        self.roster.insert(id, adventurer);
        id
    }

    pub fn allocate_adventurer_id(&mut self) -> AdventurerId {
        let id = AdventurerId(self.next_adventurer_id);
        self.next_adventurer_id += 1;
        id
    }

    pub fn adventurer(&self, id: AdventurerId) -> Result<&Adventurer, GuildError> {
        self.roster.get(&id).ok_or(GuildError::AdventurerNotFound(id.0))
    }

    pub fn adventurer_mut(&mut self, id: AdventurerId) -> Result<&mut Adventurer, GuildError> {
        self.roster.get_mut(&id).ok_or(GuildError::AdventurerNotFound(id.0))
    }

    pub fn quest(&self, id: QuestId) -> Result<&Quest, GuildError> {
        self.board
            .iter()
            .find(|q| q.id == id)
            .ok_or(GuildError::QuestNotFound(id.0))
    }

    /// Remove a quest from the board.
    pub fn take_quest(&mut self, id: QuestId) -> Option<Quest> {
        let idx = self.board.iter().position(|q| q.id == id)?;
        Some(self.board.remove(idx))
    }

    /// Members free to be sent out, in id order.
    pub fn available_members(&self) -> impl Iterator<Item = &Adventurer> {
        self.roster.values().filter(|a| a.is_available())
    }

    pub fn members_in_state(&self, state: AdventurerState) -> usize {
        self.roster.values().filter(|a| a.state == state).count()
    }

    /// Whether the guild already has a party planned or out for a tournament.
    pub fn in_tournament(&self) -> bool {
        self.planned
            .iter()
            .chain(self.ongoing.iter())
            .any(|a| a.quest.is_tournament)
    }

    /// Modifiers handed to quest resolution: neutral apart from facilities.
    pub fn modifiers(&self) -> QuestModifiers {
        QuestModifiers::with_facilities(self.facilities)
    }

    /// Head count per rank label, E first.
    pub fn rank_distribution(&self) -> [usize; 6] {
        let mut counts = [0; 6];
        for adventurer in self.roster.values() {
            counts[adventurer.rank_label().bucket()] += 1;
        }
        counts
    }

    pub fn strongest(&self) -> Option<&Adventurer> {
        self.roster
            .values()
            .max_by(|a, b| a.rank_value().total_cmp(&b.rank_value()))
    }

    pub fn has_rank(&self, label: RankLabel) -> bool {
        self.roster.values().any(|a| a.rank_label() >= label)
    }
}

/// Why an adventurer left the roster outside of combat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DepartureReason {
    /// Trust fell below zero
    LostTrust,
    /// A veteran hung up their sword
    Retired,
    /// A wanderer moved on without a word
    Disappeared,
}

impl DepartureReason {
    pub fn verb(&self) -> &'static str {
        match self {
            DepartureReason::LostTrust => "left the guild in discontent",
            DepartureReason::Retired => "retired from adventuring",
            DepartureReason::Disappeared => "vanished without a word",
        }
    }
}

/// Events emitted while advancing a day.
#[derive(Debug, Clone, PartialEq)]
pub enum GuildEvent {
    // ── Board ───────────────────────────────────────────────────
    /// A new quest was posted.
    QuestPosted { quest_id: QuestId, title: String },

    /// A quest sat on the board too long and was taken down.
    QuestExpired { quest_id: QuestId, title: String },

    /// A grand tournament opened for entries.
    TournamentAnnounced { quest_id: QuestId, message: String },

    // ── Assignments ─────────────────────────────────────────────
    /// A party was planned for a quest.
    PartyPlanned {
        quest_id: QuestId,
        members: Vec<AdventurerId>,
        manual: bool,
    },

    /// A planned party set out.
    QuestDeparted { quest_id: QuestId, message: String },

    /// A quest finished and was settled.
    QuestResolved {
        quest_id: QuestId,
        success: bool,
        /// Net change to guild funds: cut on success, minus any penalty
        guild_income: i64,
        reputation_delta: i32,
        message: String,
    },

    // ── Members ─────────────────────────────────────────────────
    /// A walk-in recruit joined a short-handed guild.
    AdventurerJoined { id: AdventurerId, message: String },

    /// A member came back hurt.
    AdventurerInjured {
        id: AdventurerId,
        recovery_days: u32,
        message: String,
    },

    /// A member died on a quest and was removed from the roster.
    AdventurerDied { id: AdventurerId, name: String, message: String },

    /// A member left the roster.
    AdventurerDeparted {
        id: AdventurerId,
        name: String,
        reason: DepartureReason,
        message: String,
    },

    /// A member moved to a new rank label.
    RankChanged {
        id: AdventurerId,
        label: RankLabel,
        message: String,
    },

    /// A member learned an art.
    ArtLearned { id: AdventurerId, art: String, message: String },

    /// A member earned a title.
    TitleGranted { id: AdventurerId, title: String, message: String },

    /// A member finished recovering.
    Recovered { id: AdventurerId, message: String },
}

/// Everything that happened on one day.
#[derive(Debug, Clone, Default)]
pub struct DayReport {
    pub day: u32,
    /// Events in the order they happened
    pub events: Vec<GuildEvent>,
    /// Full results for every quest resolved today
    pub outcomes: Vec<QuestOutcome>,
}

impl DayReport {
    pub fn deaths(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, GuildEvent::AdventurerDied { .. }))
            .count()
    }

    pub fn departures(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, GuildEvent::AdventurerDeparted { .. }))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_found_guild() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let guild = Guild::found("Silver Hearth", &mut rng);
        assert_eq!(guild.roster.len(), STARTING_ROSTER_SIZE);
        assert_eq!(guild.money, STARTING_GUILD_MONEY);
        assert_eq!(guild.next_adventurer_id, STARTING_ROSTER_SIZE as u32 + 1);
        for adv in guild.roster.values() {
            assert!(adv.rank_value() <= STARTING_ROSTER_RANK_CAP);
            assert!(adv.is_available());
        }
    }

    #[test]
    fn test_add_adventurer_moves_counter() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut guild = Guild::new("Test");
        let adv = random_recruit(AdventurerId(40), None, &mut rng);
        guild.add_adventurer(adv);
        assert_eq!(guild.allocate_adventurer_id(), AdventurerId(41));
    }

    #[test]
    fn test_lookups_report_missing_ids() {
        let guild = Guild::new("Test");
        assert!(matches!(
            guild.adventurer(AdventurerId(9)),
            Err(GuildError::AdventurerNotFound(9))
        ));
        assert!(matches!(guild.quest(QuestId(3)), Err(GuildError::QuestNotFound(3))));
    }

    #[test]
    fn test_rank_distribution_counts_everyone() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut guild = Guild::new("Test");
        for _ in 0..12 {
            guild.recruit(None, &mut rng);
        }
        assert_eq!(guild.rank_distribution().iter().sum::<usize>(), 12);
        assert!(guild.strongest().is_some());
    }
}
