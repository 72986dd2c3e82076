//! The guild arena, party assignment and the daily game loop.

pub mod assignment;
pub mod game_loop;
pub mod types;

pub use assignment::AssignmentService;
pub use game_loop::GameLoop;
pub use types::{DayReport, DepartureReason, Guild, GuildEvent};
