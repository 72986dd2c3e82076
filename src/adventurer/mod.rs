//! Guild members: stat generation, rank model, traits and recruitment.

pub mod jobs;
pub mod origin;
pub mod rank;
pub mod recruit;
pub mod stats;
pub mod traits;
pub mod types;

pub use jobs::Job;
pub use origin::{JoinType, Origin};
pub use rank::RankLabel;
pub use stats::{generate_stats, StatType, Stats};
pub use traits::{AutoPick, TraitHooks, TraitId};
pub use types::*;
