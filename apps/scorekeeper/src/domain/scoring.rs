use std::ops::{Add, AddAssign};

use serde::Serialize;

use crate::domain::round::{PlayerTichuCall, RoundResult};
use crate::domain::rules::DOUBLE_VICTORY_POINTS;
use crate::domain::state::{Player, Team};

/// Signed per-team score contribution. Never clamped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreDelta {
    pub team_a: i32,
    pub team_b: i32,
}

impl ScoreDelta {
    pub const ZERO: ScoreDelta = ScoreDelta::new(0, 0);

    pub const fn new(team_a: i32, team_b: i32) -> Self {
        Self { team_a, team_b }
    }

    pub const fn get(&self, team: Team) -> i32 {
        match team {
            Team::TeamA => self.team_a,
            Team::TeamB => self.team_b,
        }
    }

    fn credit(&mut self, team: Team, points: i32) {
        let slot = match team {
            Team::TeamA => &mut self.team_a,
            Team::TeamB => &mut self.team_b,
        };
        *slot = slot.saturating_add(points);
    }
}

impl Add for ScoreDelta {
    type Output = ScoreDelta;

    fn add(self, rhs: ScoreDelta) -> ScoreDelta {
        ScoreDelta::new(
            self.team_a.saturating_add(rhs.team_a),
            self.team_b.saturating_add(rhs.team_b),
        )
    }
}

impl AddAssign for ScoreDelta {
    fn add_assign(&mut self, rhs: ScoreDelta) {
        *self = *self + rhs;
    }
}

/// Base points before calls: the card split, or the flat double-victory award.
fn base_points(round: &RoundResult) -> ScoreDelta {
    if round.double_victory {
        match round.double_victory_team {
            Some(Team::TeamA) => return ScoreDelta::new(DOUBLE_VICTORY_POINTS, 0),
            Some(Team::TeamB) => return ScoreDelta::new(0, DOUBLE_VICTORY_POINTS),
            // Rejected by validation; stored logs fall back to card points.
            None => {}
        }
    }
    ScoreDelta::new(round.team_a_card_points, round.team_b_card_points)
}

/// Points a single call moves for its team: +bonus, -bonus, or 0 while unresolved.
pub fn call_adjustment(entry: &PlayerTichuCall) -> i32 {
    match entry.success {
        Some(true) => entry.call.bonus(),
        Some(false) => -entry.call.bonus(),
        None => 0,
    }
}

/// Score one round for both teams.
///
/// Calls whose seat has no player, and unresolved calls, contribute nothing,
/// so a partially corrupted log can still be folded.
pub fn score_round(round: &RoundResult, players: &[Player]) -> ScoreDelta {
    let mut delta = base_points(round);
    for entry in &round.tichu_calls {
        let Some(player) = players.get(entry.player_index as usize) else {
            continue;
        };
        delta.credit(player.team, call_adjustment(entry));
    }
    delta
}

/// Fold the scorer over a round log, in order.
pub fn score_rounds<'a, I>(rounds: I, players: &[Player]) -> ScoreDelta
where
    I: IntoIterator<Item = &'a RoundResult>,
{
    rounds
        .into_iter()
        .fold(ScoreDelta::ZERO, |acc, round| acc + score_round(round, players))
}
