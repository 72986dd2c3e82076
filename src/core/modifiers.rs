//! Modifier surfaces handed to quest resolution by the facility, policy and
//! advisor layers.

use serde::{Deserialize, Serialize};

/// Guild facility levels. Level 0 means not built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facilities {
    /// Lowers the death chance of badly hurt members
    pub infirmary: u8,
    /// Raises the sale value of brought-back items
    pub warehouse: u8,
    /// Boosts rank and stat growth of low-rank members
    pub training: u8,
    /// Posts extra quests on the board each day
    pub notice_board: u8,
}

impl Facilities {
    /// Growth multiplier from the training hall: +10% per level.
    pub fn training_multiplier(&self) -> f64 {
        1.0 + self.training as f64 * crate::core::constants::TRAINING_BONUS_PER_LEVEL
    }
}

/// Multipliers and bonuses applied to a single quest attempt.
///
/// Every field defaults to its neutral value, so `QuestModifiers::default()`
/// changes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuestModifiers {
    /// Multiplies the final battle win rate
    pub win_rate: f64,
    /// Multiplies battle damage
    pub danger: f64,
    /// Multiplies battle damage (injury prevention policies)
    pub injury: f64,
    /// Multiplies the money penalty on failure
    pub penalty: f64,
    /// Multiplies stat growth
    pub exp: f64,
    /// Multiplies stat growth (advisor bonus)
    pub growth: f64,
    /// Added to the estimated success chance
    pub success: f64,
    /// Multiplies the total reward
    pub reward: f64,
    /// Multiplies item sale values
    pub market: f64,
    /// Multiplies the daily battle count
    pub battle_rate: f64,
    /// Multiplies the daily gather count
    pub gather_rate: f64,
    pub facilities: Facilities,
}

impl Default for QuestModifiers {
    fn default() -> Self {
        Self {
            win_rate: 1.0,
            danger: 1.0,
            injury: 1.0,
            penalty: 1.0,
            exp: 1.0,
            growth: 1.0,
            success: 0.0,
            reward: 1.0,
            market: 1.0,
            battle_rate: 1.0,
            gather_rate: 1.0,
            facilities: Facilities::default(),
        }
    }
}

impl QuestModifiers {
    pub fn with_facilities(facilities: Facilities) -> Self {
        Self {
            facilities,
            ..Default::default()
        }
    }
}
