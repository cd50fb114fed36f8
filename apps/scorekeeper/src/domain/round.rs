//! Raw declarations for one round, as entered at the table.

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::rules::{CARD_POINTS_TOTAL, GRAND_TICHU_BONUS, PLAYERS, TICHU_BONUS};
use crate::domain::state::{Seat, Team};
use crate::errors::domain::DomainError;

/// A player's pre-play wager.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum TichuCall {
    #[default]
    None,
    Tichu,
    GrandTichu,
}

impl TichuCall {
    /// Points won on success and lost on failure.
    pub const fn bonus(self) -> i32 {
        match self {
            TichuCall::None => 0,
            TichuCall::Tichu => TICHU_BONUS,
            TichuCall::GrandTichu => GRAND_TICHU_BONUS,
        }
    }

    pub const fn is_declared(self) -> bool {
        !matches!(self, TichuCall::None)
    }
}

/// One seat's declared call and, once the round is over, whether it held.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerTichuCall {
    #[serde(deserialize_with = "lenient_seat")]
    pub player_index: Seat,
    pub call: TichuCall,
    /// `None` while the round is still being entered.
    pub success: Option<bool>,
}

/// Stored seat index that cannot name a seat (negative, fractional or
/// beyond `u8`). Like any index without a player it scores nothing.
pub const OFF_TABLE: Seat = Seat::MAX;

/// Read a seat index without failing the whole snapshot on a bad one.
fn lenient_seat<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Seat, D::Error> {
    let raw = f64::deserialize(deserializer)?;
    if raw.fract() == 0.0 && (0.0..=f64::from(Seat::MAX)).contains(&raw) {
        Ok(raw as Seat)
    } else {
        Ok(OFF_TABLE)
    }
}

impl PlayerTichuCall {
    pub const fn won(player_index: Seat, call: TichuCall) -> Self {
        Self {
            player_index,
            call,
            success: Some(true),
        }
    }

    pub const fn lost(player_index: Seat, call: TichuCall) -> Self {
        Self {
            player_index,
            call,
            success: Some(false),
        }
    }

    pub const fn pending(player_index: Seat, call: TichuCall) -> Self {
        Self {
            player_index,
            call,
            success: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundResult {
    pub team_a_card_points: i32,
    pub team_b_card_points: i32,
    #[serde(default)]
    pub tichu_calls: Vec<PlayerTichuCall>,
    #[serde(default)]
    pub double_victory: bool,
    #[serde(default)]
    pub double_victory_team: Option<Team>,
}

impl RoundResult {
    /// A regular round split by card points.
    pub fn card_points(team_a: i32, team_b: i32) -> Self {
        Self {
            team_a_card_points: team_a,
            team_b_card_points: team_b,
            ..Self::default()
        }
    }

    /// A double victory for `team`; card points are left at zero.
    pub fn double_victory_for(team: Team) -> Self {
        Self {
            double_victory: true,
            double_victory_team: Some(team),
            ..Self::default()
        }
    }

    pub fn with_call(mut self, call: PlayerTichuCall) -> Self {
        self.tichu_calls.push(call);
        self
    }

    /// Winning team of a double victory, if this round was one.
    pub fn double_victory_winner(&self) -> Option<Team> {
        if self.double_victory {
            self.double_victory_team
        } else {
            None
        }
    }

    /// Reject rounds that break the RoundResult invariants.
    ///
    /// Structural problems are reported as `InvalidRound` before any
    /// unresolved call is reported as `UnresolvedTichuCall`.
    pub fn validate(&self) -> Result<(), DomainError> {
        match (self.double_victory, self.double_victory_team) {
            (true, None) => {
                return Err(DomainError::invalid_round(
                    "double victory needs a winning team",
                ));
            }
            (false, Some(team)) => {
                return Err(DomainError::invalid_round(format!(
                    "double victory team {team:?} given without a double victory"
                )));
            }
            (false, None) => {
                let total =
                    i64::from(self.team_a_card_points) + i64::from(self.team_b_card_points);
                if total != i64::from(CARD_POINTS_TOTAL) {
                    return Err(DomainError::invalid_round(format!(
                        "card points must sum to {CARD_POINTS_TOTAL} (got {total})"
                    )));
                }
            }
            (true, Some(_)) => {}
        }

        let mut seen = [false; PLAYERS];
        for entry in &self.tichu_calls {
            let seat = entry.player_index as usize;
            if seat >= PLAYERS {
                return Err(DomainError::invalid_round(format!(
                    "tichu call for seat {seat}; seats are 0..={}",
                    PLAYERS - 1
                )));
            }
            if !entry.call.is_declared() {
                return Err(DomainError::invalid_round(format!(
                    "tichu call entry for seat {seat} declares nothing"
                )));
            }
            if std::mem::replace(&mut seen[seat], true) {
                return Err(DomainError::invalid_round(format!(
                    "seat {seat} has more than one tichu call"
                )));
            }
        }

        if let Some(entry) = self.tichu_calls.iter().find(|c| c.success.is_none()) {
            return Err(DomainError::UnresolvedTichuCall {
                seat: entry.player_index,
                call: entry.call,
            });
        }

        Ok(())
    }
}
