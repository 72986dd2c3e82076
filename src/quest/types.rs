use super::catalog::{difficulty_for, quest_spec};
use crate::adventurer::{AdventurerId, Job, RankLabel, StatType};
use crate::core::constants::{GUILD_BASE_CUT, GUILD_MANUAL_CUT_SHIFT, QUEST_PENALTY_RATIO};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct QuestId(pub u32);

impl fmt::Display for QuestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestType {
    Subjugation,
    Gathering,
    Escort,
    Investigation,
    BossRaid,
    FreeHunt,
    Dungeon,
    Tournament,
}

impl QuestType {
    pub const ALL: [QuestType; 8] = [
        QuestType::Subjugation,
        QuestType::Gathering,
        QuestType::Escort,
        QuestType::Investigation,
        QuestType::BossRaid,
        QuestType::FreeHunt,
        QuestType::Dungeon,
        QuestType::Tournament,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestCategory {
    Combat,
    Gathering,
    Support,
    Exploration,
    Competition,
}

/// A per-day event rate: either fixed or drawn uniformly from a range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rate {
    Fixed(f64),
    Range { min: f64, max: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rates {
    pub battle: Rate,
    pub gather: Rate,
}

/// A day on which the boss is guaranteed to appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BossDay {
    /// The last day of the quest, whatever its length
    Final,
    /// A specific 1-based day
    Day(u32),
}

/// Static definition of a quest type.
#[derive(Debug, Clone, Copy)]
pub struct QuestSpec {
    pub label: &'static str,
    pub category: QuestCategory,
    pub rates: Rates,
    pub boss_days: &'static [BossDay],
    /// Independent per-day chance of a boss appearing
    pub boss_modifier: Option<f64>,
    pub weights: &'static [(StatType, f64)],
    pub ranks: &'static [RankLabel],
    /// Inclusive duration range in days
    pub days: (u32, u32),
    /// Inclusive party size range
    pub party_size: (usize, usize),
    /// Jobs that get a small success bonus on this quest type
    pub advantaged_jobs: &'static [Job],
}

impl QuestSpec {
    pub fn has_job_advantage(&self, job: Job) -> bool {
        self.advantaged_jobs.contains(&job)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Difficulty {
    pub rank: RankLabel,
    pub power_req: f64,
    pub base_reward: u32,
    pub base_rep: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rewards {
    pub money: u32,
    pub reputation: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Penalty {
    pub money: u32,
    pub reputation: i32,
}

/// How the guild's cut of a reward is computed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GuildShare {
    pub base_cut: f64,
    /// Subtracted from the cut when members were assigned by hand
    pub manual_shift: f64,
}

impl Default for GuildShare {
    fn default() -> Self {
        Self {
            base_cut: GUILD_BASE_CUT,
            manual_shift: GUILD_MANUAL_CUT_SHIFT,
        }
    }
}

impl GuildShare {
    pub fn cut_rate(&self, manual: bool) -> f64 {
        if manual {
            (self.base_cut - self.manual_shift).max(0.0)
        } else {
            self.base_cut
        }
    }
}

/// A dispatchable task on the quest board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quest {
    pub id: QuestId,
    pub title: String,
    pub quest_type: QuestType,
    pub difficulty: Difficulty,
    pub weights: Vec<(StatType, f64)>,

    pub rewards: Rewards,
    pub penalty: Penalty,
    pub share: GuildShare,

    pub party_size: usize,
    pub days: u32,
    /// Display danger, 0-100
    pub danger: u32,
    pub created_day: u32,
    /// `None` never expires
    pub expires_in_days: Option<u32>,

    pub target: Option<String>,
    pub boss_target: Option<String>,
    pub description: String,

    pub is_special: bool,
    pub manual_only: bool,
    pub is_tournament: bool,
}

impl Quest {
    /// A plain quest of the given type and rank with catalog defaults.
    pub fn new(id: QuestId, title: impl Into<String>, quest_type: QuestType, rank: RankLabel) -> Self {
        let spec = quest_spec(quest_type);
        let difficulty = difficulty_for(rank);
        Self {
            id,
            title: title.into(),
            quest_type,
            difficulty,
            weights: spec.weights.to_vec(),
            rewards: Rewards {
                money: difficulty.base_reward,
                reputation: difficulty.base_rep,
            },
            penalty: Penalty {
                money: (difficulty.base_reward as f64 * QUEST_PENALTY_RATIO) as u32,
                reputation: (difficulty.base_rep / 2).max(1),
            },
            share: GuildShare::default(),
            party_size: spec.party_size.0,
            days: spec.days.0,
            danger: difficulty.power_req.min(100.0) as u32,
            created_day: 0,
            expires_in_days: None,
            target: None,
            boss_target: None,
            description: String::new(),
            is_special: false,
            manual_only: false,
            is_tournament: quest_type == QuestType::Tournament,
        }
    }

    pub fn rank(&self) -> RankLabel {
        self.difficulty.rank
    }

    pub fn spec(&self) -> QuestSpec {
        quest_spec(self.quest_type)
    }

    /// Whether success requires a boss kill.
    pub fn has_mandatory_boss(&self) -> bool {
        !self.spec().boss_days.is_empty() || self.boss_target.is_some()
    }

    /// Whether this is a scheduled boss day (not counting the random boss roll).
    pub fn is_scheduled_boss_day(&self, day_index: u32, total_days: u32) -> bool {
        self.spec().boss_days.iter().any(|d| match d {
            BossDay::Final => day_index == total_days,
            BossDay::Day(n) => *n == day_index,
        })
    }

    /// Last day this quest can still be taken, if it expires.
    pub fn expiry_day(&self) -> Option<u32> {
        self.expires_in_days.map(|d| self.created_day + d)
    }

    pub fn weight(&self, stat: StatType) -> f64 {
        self.weights
            .iter()
            .filter(|(s, _)| *s == stat)
            .map(|(_, w)| *w)
            .sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssignmentStatus {
    Planned,
    Ongoing,
    Completed,
}

/// Binds a quest to the members sent on it. Members are referenced by id; the
/// guild roster owns the adventurers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestAssignment {
    pub quest: Quest,
    pub members: Vec<AdventurerId>,
    pub remaining_days: u32,
    pub guild_cut_rate: f64,
    pub status: AssignmentStatus,
    pub manual: bool,
}

impl QuestAssignment {
    pub fn new(quest: Quest, members: Vec<AdventurerId>, manual: bool) -> Self {
        let guild_cut_rate = quest.share.cut_rate(manual);
        let remaining_days = quest.days;
        Self {
            quest,
            members,
            remaining_days,
            guild_cut_rate,
            status: AssignmentStatus::Planned,
            manual,
        }
    }
}
