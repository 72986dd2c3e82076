//! Guildhall - Adventurers' Guild Idle Game Core
//!
//! Adventurer stats and ranks, day-by-day quest simulation, quest resolution
//! and economy, the guild's daily loop, persistence, and a balance simulator.

pub mod adventure;
pub mod adventurer;
pub mod bestiary;
pub mod core;
pub mod guild;
pub mod quest;
pub mod save;
pub mod simulator;
pub mod titles;
