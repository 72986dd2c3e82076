//! Quests: catalog tables, board generation, scoring, growth and resolution.

pub mod catalog;
pub mod generation;
pub mod growth;
pub mod scoring;
pub mod service;
pub mod types;

pub use catalog::{difficulty_for, quest_spec, rank_power};
pub use scoring::{calculate_score, calculate_success_chance};
pub use service::{MemberResult, MemberStatus, QuestOutcome, QuestService};
pub use types::*;
