//! Match engine: the only owner of `MatchState` transitions.
//!
//! ```text
//! NotStarted --start--> InProgress --record (>= target)--> Finished
//!                        ^    |                               |
//!                        +----+ record / undo                 |
//!                        +-------------- undo ----------------+
//! any --reset--> NotStarted
//! ```

use tracing::{debug, info};

use crate::domain::round::RoundResult;
use crate::domain::rules::{PLAYERS, TARGET_SCORE};
use crate::domain::scoring::{score_round, score_rounds, ScoreDelta};
use crate::domain::state::{
    dealer_after, next_seat, prev_seat, MatchState, MatchStatus, Player, Team,
};
use crate::errors::domain::DomainError;

/// First team at or above the target, checked TeamA then TeamB.
pub fn winner_for(team_a_score: i32, team_b_score: i32) -> Option<Team> {
    Team::ALL.into_iter().find(|team| {
        let score = match team {
            Team::TeamA => team_a_score,
            Team::TeamB => team_b_score,
        };
        score >= TARGET_SCORE
    })
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchEngine {
    state: MatchState,
}

impl MatchEngine {
    /// Engine over the empty, not-started state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine over a snapshot, after reconciling it against its round log.
    pub fn restore(snapshot: MatchState) -> Result<Self, DomainError> {
        Ok(Self {
            state: rebuild(snapshot)?,
        })
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn into_state(self) -> MatchState {
        self.state
    }

    pub fn status(&self) -> MatchStatus {
        self.state.status
    }

    /// Begin a new match, discarding any previous one.
    pub fn start(&mut self, players: impl Into<Vec<Player>>) -> Result<(), DomainError> {
        let players = players.into();
        if players.len() != PLAYERS {
            return Err(DomainError::InvalidPlayerCount {
                expected: PLAYERS,
                got: players.len(),
            });
        }

        self.state = MatchState {
            players,
            status: MatchStatus::InProgress,
            ..MatchState::default()
        };
        info!(dealer = 0, "match started");
        Ok(())
    }

    /// Validate, score and append a round. Returns the round's contribution.
    pub fn record_round(&mut self, round: RoundResult) -> Result<ScoreDelta, DomainError> {
        if self.state.status != MatchStatus::InProgress {
            return Err(DomainError::NotInProgress(self.state.status));
        }
        round.validate()?;

        let delta = score_round(&round, &self.state.players);
        let state = &mut self.state;
        state.rounds.push(round);
        state.team_a_score = state.team_a_score.saturating_add(delta.team_a);
        state.team_b_score = state.team_b_score.saturating_add(delta.team_b);
        state.dealer_index = next_seat(state.dealer_index);
        state.winner = winner_for(state.team_a_score, state.team_b_score);
        state.status = if state.winner.is_some() {
            MatchStatus::Finished
        } else {
            MatchStatus::InProgress
        };

        info!(
            round = state.rounds.len(),
            delta_a = delta.team_a,
            delta_b = delta.team_b,
            team_a = state.team_a_score,
            team_b = state.team_b_score,
            dealer = state.dealer_index,
            "round recorded"
        );
        if let Some(winner) = state.winner {
            info!(?winner, "match finished");
        }
        Ok(delta)
    }

    /// Drop the latest round and refold the rest of the log.
    ///
    /// Always leaves the match `InProgress` with no winner, even when the
    /// remaining rounds still reach the target. Returns the removed round.
    pub fn undo_last_round(&mut self) -> Option<RoundResult> {
        let removed = self.state.rounds.pop()?;

        let totals = score_rounds(&self.state.rounds, &self.state.players);
        let state = &mut self.state;
        state.team_a_score = totals.team_a;
        state.team_b_score = totals.team_b;
        state.dealer_index = prev_seat(state.dealer_index);
        state.status = MatchStatus::InProgress;
        state.winner = None;

        info!(
            rounds = state.rounds.len(),
            team_a = state.team_a_score,
            team_b = state.team_b_score,
            dealer = state.dealer_index,
            "last round undone"
        );
        Some(removed)
    }

    /// Back to the empty state. Irreversible and idempotent.
    pub fn reset(&mut self) {
        self.state = MatchState::default();
        debug!("match reset");
    }

    pub fn current_dealer(&self) -> Option<&Player> {
        self.state.player(self.state.dealer_index)
    }

    /// Players of `team` in seating order.
    pub fn team_roster(&self, team: Team) -> Vec<&Player> {
        self.state
            .players
            .iter()
            .filter(|p| p.team == team)
            .collect()
    }

    pub fn can_undo(&self) -> bool {
        !self.state.rounds.is_empty()
    }

    /// 1-based number of the round about to be played.
    pub fn round_number(&self) -> usize {
        self.state.rounds.len() + 1
    }
}

/// Reconcile a snapshot with its own round log.
///
/// Cached totals and the dealer are recomputed from the log and never
/// trusted. A `Finished` snapshot stays finished only if the refolded totals
/// still produce a winner; otherwise it reopens. Snapshots whose shape
/// cannot come from the engine are rejected.
pub fn rebuild(snapshot: MatchState) -> Result<MatchState, DomainError> {
    let player_count = snapshot.players.len();
    match (snapshot.status, player_count) {
        (MatchStatus::NotStarted, 0) => {
            if !snapshot.rounds.is_empty() {
                return Err(DomainError::corrupt_snapshot(format!(
                    "{} rounds logged for a match that never started",
                    snapshot.rounds.len()
                )));
            }
            return Ok(MatchState::default());
        }
        (MatchStatus::NotStarted, n) => {
            return Err(DomainError::corrupt_snapshot(format!(
                "{n} players seated for a match that never started"
            )));
        }
        (_, PLAYERS) => {}
        (_, n) => {
            return Err(DomainError::corrupt_snapshot(format!(
                "expected {PLAYERS} players, found {n}"
            )));
        }
    }

    let totals = score_rounds(&snapshot.rounds, &snapshot.players);
    let dealer_index = dealer_after(snapshot.rounds.len());
    let winner = match snapshot.status {
        MatchStatus::Finished => winner_for(totals.team_a, totals.team_b),
        _ => None,
    };

    if totals.team_a != snapshot.team_a_score
        || totals.team_b != snapshot.team_b_score
        || dealer_index != snapshot.dealer_index
        || winner != snapshot.winner
    {
        debug!(
            cached_a = snapshot.team_a_score,
            cached_b = snapshot.team_b_score,
            cached_dealer = snapshot.dealer_index,
            team_a = totals.team_a,
            team_b = totals.team_b,
            dealer = dealer_index,
            "snapshot drifted from its round log; using recomputed values"
        );
    }

    Ok(MatchState {
        team_a_score: totals.team_a,
        team_b_score: totals.team_b,
        dealer_index,
        status: if winner.is_some() {
            MatchStatus::Finished
        } else {
            MatchStatus::InProgress
        },
        winner,
        ..snapshot
    })
}
