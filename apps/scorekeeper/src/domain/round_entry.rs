//! Transient state of the round-entry workflow.
//!
//! Calls are recorded per seat at the start of a round, results and card
//! points once it is over. Nothing here is persisted; `build` hands a
//! validated `RoundResult` to the engine.

use crate::domain::round::{PlayerTichuCall, RoundResult, TichuCall};
use crate::domain::rules::{complementary_card_points, PLAYERS};
use crate::domain::state::{Seat, Team};
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeatCall {
    pub call: TichuCall,
    pub success: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundDraft {
    seats: [SeatCall; PLAYERS],
    team_a_points: Option<i32>,
    team_b_points: Option<i32>,
    double_victory: Option<Team>,
}

fn seat_slot(seat: Seat) -> Result<usize, DomainError> {
    let idx = seat as usize;
    if idx < PLAYERS {
        Ok(idx)
    } else {
        Err(DomainError::invalid_round(format!(
            "no seat {seat}; seats are 0..={}",
            PLAYERS - 1
        )))
    }
}

impl RoundDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seat(&self, seat: Seat) -> Option<SeatCall> {
        self.seats.get(seat as usize).copied()
    }

    /// Declare (or withdraw, with `TichuCall::None`) a seat's call.
    ///
    /// Any previously entered result for the seat is cleared.
    pub fn set_call(&mut self, seat: Seat, call: TichuCall) -> Result<(), DomainError> {
        let idx = seat_slot(seat)?;
        self.seats[idx] = SeatCall {
            call,
            success: None,
        };
        Ok(())
    }

    /// Mark whether a declared call held.
    pub fn set_success(&mut self, seat: Seat, success: bool) -> Result<(), DomainError> {
        let idx = seat_slot(seat)?;
        let slot = &mut self.seats[idx];
        if !slot.call.is_declared() {
            return Err(DomainError::invalid_round(format!(
                "seat {seat} made no call"
            )));
        }
        slot.success = Some(success);
        Ok(())
    }

    /// Seats with a declared call, in seat order.
    pub fn declared(&self) -> impl Iterator<Item = (Seat, SeatCall)> + '_ {
        self.seats
            .iter()
            .enumerate()
            .filter(|(_, s)| s.call.is_declared())
            .map(|(i, s)| (i as Seat, *s))
    }

    /// Set TeamA's card points and fill in TeamB's complement.
    ///
    /// TeamB is cleared when TeamA's value cannot be complemented. Ignored
    /// during a double victory, where card points do not count.
    pub fn set_team_a_points(&mut self, points: i32) {
        if self.double_victory.is_some() {
            return;
        }
        self.team_a_points = Some(points);
        self.team_b_points = complementary_card_points(points);
    }

    pub fn set_team_b_points(&mut self, points: i32) {
        if self.double_victory.is_some() {
            return;
        }
        self.team_b_points = Some(points);
    }

    pub fn card_points(&self) -> (Option<i32>, Option<i32>) {
        (self.team_a_points, self.team_b_points)
    }

    /// Flag a double victory; entered card points are discarded.
    pub fn set_double_victory(&mut self, team: Team) {
        self.double_victory = Some(team);
        self.team_a_points = None;
        self.team_b_points = None;
    }

    pub fn clear_double_victory(&mut self) {
        self.double_victory = None;
    }

    /// Assemble and validate the round.
    ///
    /// Missing card points count as zero, so a half-filled form fails the
    /// sum check instead of being recorded.
    pub fn build(&self) -> Result<RoundResult, DomainError> {
        let round = RoundResult {
            team_a_card_points: self.team_a_points.unwrap_or(0),
            team_b_card_points: self.team_b_points.unwrap_or(0),
            tichu_calls: self
                .declared()
                .map(|(seat, s)| PlayerTichuCall {
                    player_index: seat,
                    call: s.call,
                    success: s.success,
                })
                .collect(),
            double_victory: self.double_victory.is_some(),
            double_victory_team: self.double_victory,
        };
        round.validate()?;
        Ok(round)
    }
}
