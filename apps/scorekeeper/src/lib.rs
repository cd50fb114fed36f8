#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod repos;
pub mod services;

// Re-exports for public API
pub use adapters::{FileMatchStore, InMemoryMatchStore};
pub use config::Config;
pub use domain::{
    MatchEngine, MatchState, MatchStatus, Player, PlayerTichuCall, RoundDraft, RoundResult,
    ScoreDelta, Seat, Team, TichuCall,
};
pub use error::AppError;
pub use errors::{DomainError, ErrorCode};
pub use repos::{MatchStore, DEFAULT_MATCH_KEY};
pub use services::MatchService;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    scorekeeper_test_support::logging::init();
}
