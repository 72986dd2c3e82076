//! Day-by-day quest simulation.

pub mod encounter;
pub mod formula;
pub mod narrative;
pub mod rates;
pub mod simulator;

pub use encounter::{generate_encounter, Encounter, PLACEHOLDER_MONSTER};
pub use formula::{CombatFormula, FormulaKind, FormulaParams, StandardFormula};
pub use rates::{apply_probabilistic_mod, resolve_rate};
pub use simulator::{
    AdventureSimulator, BattleOutcome, DayOutcome, DayResults, FoundItem, ItemSource, KilledMonster,
};
