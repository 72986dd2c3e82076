//! Shared constants, error types and modifier surfaces.

pub mod constants;
pub mod error;
pub mod modifiers;

pub use constants::*;
pub use error::{AssignmentError, GuildError};
pub use modifiers::{Facilities, QuestModifiers};
