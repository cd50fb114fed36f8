//! Match service: the engine plus its persisted snapshot.

use tracing::{debug, info, warn};

use crate::domain::engine::MatchEngine;
use crate::domain::history::{round_history, RoundSummary};
use crate::domain::round::RoundResult;
use crate::domain::scoring::ScoreDelta;
use crate::domain::state::{MatchState, MatchStatus, Player, Team};
use crate::error::AppError;
use crate::repos::matches::MatchStore;

/// Match domain service.
///
/// Persistence policy:
/// - on open, a missing, unparsable or unreconcilable snapshot yields the
///   empty match and is never reported as an error;
/// - after each successful start / record / undo the full state is written,
///   except that a not-started state is never written;
/// - a failed write or delete leaves the in-memory match unchanged;
/// - reset deletes the key.
pub struct MatchService<S: MatchStore> {
    store: S,
    key: String,
    engine: MatchEngine,
}

impl<S: MatchStore> MatchService<S> {
    /// Load the match stored under `key`, falling back to the empty match.
    pub fn open(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let engine = load_engine(&store, &key);
        Self { store, key, engine }
    }

    pub fn state(&self) -> &MatchState {
        self.engine.state()
    }

    pub fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn start(&mut self, players: impl Into<Vec<Player>>) -> Result<(), AppError> {
        let mut next = self.engine.clone();
        next.start(players)?;
        self.commit(next)
    }

    pub fn record_round(&mut self, round: RoundResult) -> Result<ScoreDelta, AppError> {
        let mut next = self.engine.clone();
        let delta = next.record_round(round)?;
        self.commit(next)?;
        Ok(delta)
    }

    /// Undo the latest round. `Ok(None)` (and no write) when the log is empty.
    pub fn undo_last_round(&mut self) -> Result<Option<RoundResult>, AppError> {
        let mut next = self.engine.clone();
        let Some(removed) = next.undo_last_round() else {
            debug!("nothing to undo");
            return Ok(None);
        };
        self.commit(next)?;
        Ok(Some(removed))
    }

    /// Delete the snapshot, then clear the match. A failed delete keeps both.
    pub fn reset(&mut self) -> Result<(), AppError> {
        self.store.delete(&self.key)?;
        self.engine.reset();
        info!(key = %self.key, "match reset; snapshot deleted");
        Ok(())
    }

    pub fn current_dealer(&self) -> Option<&Player> {
        self.engine.current_dealer()
    }

    pub fn team_roster(&self, team: Team) -> Vec<&Player> {
        self.engine.team_roster(team)
    }

    pub fn history(&self) -> Vec<RoundSummary> {
        round_history(self.engine.state())
    }

    /// Persist `next` and adopt it. The current engine is kept if the write fails.
    fn commit(&mut self, next: MatchEngine) -> Result<(), AppError> {
        self.persist(next.state())?;
        self.engine = next;
        Ok(())
    }

    fn persist(&self, state: &MatchState) -> Result<(), AppError> {
        if state.status == MatchStatus::NotStarted {
            return Ok(());
        }
        let payload = serde_json::to_string(state)?;
        self.store.save(&self.key, &payload)?;
        debug!(
            key = %self.key,
            rounds = state.rounds.len(),
            status = ?state.status,
            "snapshot saved"
        );
        Ok(())
    }
}

fn load_engine<S: MatchStore>(store: &S, key: &str) -> MatchEngine {
    let payload = match store.load(key) {
        Ok(Some(payload)) => payload,
        Ok(None) => {
            debug!(key, "no stored match");
            return MatchEngine::new();
        }
        Err(e) => {
            warn!(key, error = %e, "failed to read stored match; starting empty");
            return MatchEngine::new();
        }
    };

    let snapshot = match serde_json::from_str::<MatchState>(&payload) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            warn!(key, error = %e, "failed to parse stored match; starting empty");
            return MatchEngine::new();
        }
    };

    match MatchEngine::restore(snapshot) {
        Ok(engine) => {
            let state = engine.state();
            info!(
                key,
                rounds = state.rounds.len(),
                team_a = state.team_a_score,
                team_b = state.team_b_score,
                status = ?state.status,
                "stored match loaded"
            );
            engine
        }
        Err(e) => {
            warn!(key, error = %e, "stored match is inconsistent; starting empty");
            MatchEngine::new()
        }
    }
}
