//! Simulation configuration.

use crate::adventure::{CombatFormula, FormulaKind, FormulaParams, StandardFormula};
use crate::core::GuildError;
use crate::quest::QuestType;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for a balance run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Quest attempts per quest-rank × party-rank cell
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Members per simulated party
    pub party_size: usize,

    /// Quest type used for matrix attempts
    pub quest_type: QuestType,

    /// Combat formula preset
    pub formula: FormulaKind,

    /// Overrides the preset's parameters when set
    pub formula_params: Option<FormulaParams>,

    /// Days per season run
    pub season_days: u32,

    /// Number of independent guilds per season run
    pub season_runs: u32,

    /// Log verbosity (0 = silent, 1 = summary, 2 = detailed)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 500,
            seed: None,
            party_size: 3,
            quest_type: QuestType::Subjugation,
            formula: FormulaKind::Standard,
            formula_params: None,
            season_days: 180,
            season_runs: 10,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Small, fast matrix for smoke checks
    pub fn quick() -> Self {
        Self {
            num_runs: 50,
            season_days: 60,
            season_runs: 3,
            ..Default::default()
        }
    }

    /// Long-running guild seasons
    pub fn long_season(days: u32) -> Self {
        Self {
            season_days: days,
            season_runs: 20,
            ..Default::default()
        }
    }

    /// Same run with the flat party formula, for A/B against the standard one
    pub fn flat_party(&self) -> Self {
        Self {
            formula: FormulaKind::Flat,
            formula_params: None,
            ..self.clone()
        }
    }

    /// Load a config from JSON. Missing fields keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, GuildError> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    pub fn formula_params(&self) -> FormulaParams {
        self.formula_params.unwrap_or_else(|| self.formula.params())
    }

    pub fn build_formula(&self) -> Box<dyn CombatFormula> {
        Box::new(StandardFormula::new(self.formula_params()))
    }
}
