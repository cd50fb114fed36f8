//! Domain layer: pure scoring and match-state logic.
//!
//! Nothing in here touches storage, the clock or randomness; every
//! operation is a function of the current state and its input.

pub mod engine;
pub mod history;
pub mod round;
pub mod round_entry;
pub mod rules;
pub mod scoring;
pub mod setup;
pub mod state;

#[cfg(test)]
mod tests_scoring;

// Re-exports for ergonomics
pub use engine::{rebuild, winner_for, MatchEngine};
pub use history::{round_history, CallSummary, RoundSummary};
pub use round::{PlayerTichuCall, RoundResult, TichuCall};
pub use round_entry::{RoundDraft, SeatCall};
pub use scoring::{score_round, score_rounds, ScoreDelta};
pub use setup::seat_players;
pub use state::{MatchState, MatchStatus, Player, Seat, Team};
