//! Game balance simulator for Monte Carlo analysis.
//!
//! Two kinds of run:
//! - a matrix of quest rank × party rank attempts (success, damage, deaths,
//!   rank movement, reward)
//! - whole guild seasons driven day by day through the game loop
//!
//! Both accept a combat formula preset so runs can be compared A/B.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{MatrixCell, MatrixReport, SeasonReport, SeasonRun};
pub use runner::{build_party, party_rank_value, run_matrix, run_season};
