//! Guild persistence.

pub mod manager;
pub mod snapshot;

pub use manager::{decode, encode, load_from, save_to, SaveManager};
pub use snapshot::GuildSnapshot;
