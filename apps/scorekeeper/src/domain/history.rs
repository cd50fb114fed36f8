//! Read-only round history with running totals.

use serde::Serialize;

use crate::domain::round::TichuCall;
use crate::domain::scoring::{score_round, ScoreDelta};
use crate::domain::state::{MatchState, Seat, Team};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallSummary {
    pub seat: Seat,
    pub player: String,
    pub team: Team,
    pub call: TichuCall,
    pub success: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundSummary {
    /// 1-based.
    pub round_number: usize,
    pub delta: ScoreDelta,
    /// Totals after this round.
    pub running: ScoreDelta,
    pub double_victory: Option<Team>,
    pub calls: Vec<CallSummary>,
}

impl RoundSummary {
    pub fn calls_for(&self, team: Team) -> impl Iterator<Item = &CallSummary> + '_ {
        self.calls.iter().filter(move |c| c.team == team)
    }
}

/// Per-round deltas recomputed from the log, oldest first.
///
/// Calls for seats without a player are left out, as they score nothing.
pub fn round_history(state: &MatchState) -> Vec<RoundSummary> {
    let mut running = ScoreDelta::ZERO;
    state
        .rounds
        .iter()
        .enumerate()
        .map(|(i, round)| {
            let delta = score_round(round, &state.players);
            running += delta;
            let calls = round
                .tichu_calls
                .iter()
                .filter(|c| c.call.is_declared())
                .filter_map(|c| {
                    let player = state.player(c.player_index)?;
                    Some(CallSummary {
                        seat: c.player_index,
                        player: player.name.clone(),
                        team: player.team,
                        call: c.call,
                        success: c.success,
                    })
                })
                .collect();
            RoundSummary {
                round_number: i + 1,
                delta,
                running,
                double_victory: round.double_victory_winner(),
                calls,
            }
        })
        .collect()
}
