use super::stats::Stats;
use crate::core::constants::{
    CONTRACT_RANK_RANGE, CONTRACT_TRUST_BONUS, LOCAL_RANK_RANGE, LOCAL_TRUST_BONUS,
    WANDERER_RANK_RANGE, WANDERER_TRUST_BONUS,
};
use serde::{Deserialize, Serialize};

/// Where an adventurer hails from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Origin {
    Central,
    Northern,
    Southern,
    Eastern,
    Western,
    Foreign,
}

impl Origin {
    pub const ALL: [Origin; 6] = [
        Origin::Central,
        Origin::Northern,
        Origin::Southern,
        Origin::Eastern,
        Origin::Western,
        Origin::Foreign,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Origin::Central => "Central",
            Origin::Northern => "Northern",
            Origin::Southern => "Southern",
            Origin::Eastern => "Eastern",
            Origin::Western => "Western",
            Origin::Foreign => "Foreign",
        }
    }

    pub fn is_foreign(&self) -> bool {
        matches!(self, Origin::Foreign)
    }

    /// Flat bonus added to the initial rank value.
    pub fn rank_bonus(&self) -> f64 {
        match self {
            Origin::Central => 30.0,
            Origin::Foreign => -40.0,
            _ => 10.0,
        }
    }

    /// Trust an adventurer starts with before the join-type bonus.
    pub fn base_trust(&self) -> i32 {
        match self {
            Origin::Foreign => 0,
            _ => 10,
        }
    }

    /// Flat stat modifiers applied during stat generation.
    pub fn stat_modifiers(&self) -> Stats {
        match self {
            Origin::Central => Stats::new(0.0, 0.0, 0.0, 0.0, 1.0, 1.0),
            Origin::Northern => Stats::new(0.0, 2.0, 0.0, 0.0, 0.0, 0.0),
            Origin::Southern => Stats::new(0.0, 0.0, 0.0, 2.0, 0.0, 0.0),
            Origin::Eastern => Stats::new(0.0, 0.0, 2.0, 0.0, 0.0, 0.0),
            Origin::Western => Stats::new(2.0, 0.0, 0.0, 0.0, 0.0, 0.0),
            Origin::Foreign => Stats::default(),
        }
    }
}

/// How an adventurer came to the guild.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JoinType {
    Local,
    Wanderer,
    Contract,
}

impl JoinType {
    pub const ALL: [JoinType; 3] = [JoinType::Local, JoinType::Wanderer, JoinType::Contract];

    pub fn name(&self) -> &'static str {
        match self {
            JoinType::Local => "Local",
            JoinType::Wanderer => "Wanderer",
            JoinType::Contract => "Contract",
        }
    }

    /// Range the initial rank value is drawn from.
    pub fn rank_range(&self) -> (f64, f64) {
        match self {
            JoinType::Local => LOCAL_RANK_RANGE,
            JoinType::Wanderer => WANDERER_RANK_RANGE,
            JoinType::Contract => CONTRACT_RANK_RANGE,
        }
    }

    pub fn trust_bonus(&self) -> i32 {
        match self {
            JoinType::Local => LOCAL_TRUST_BONUS,
            JoinType::Wanderer => WANDERER_TRUST_BONUS,
            JoinType::Contract => CONTRACT_TRUST_BONUS,
        }
    }
}
