use serde::{Deserialize, Serialize};

use crate::domain::round::RoundResult;
use crate::domain::rules::PLAYERS;

pub type Seat = u8; // 0..=3, index into `MatchState::players`

/// One of the two fixed partnerships.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Team {
    TeamA,
    TeamB,
}

impl Team {
    /// Check order for win detection: TeamA wins a simultaneous crossing.
    pub const ALL: [Team; 2] = [Team::TeamA, Team::TeamB];

    pub const fn opponent(self) -> Team {
        match self {
            Team::TeamA => Team::TeamB,
            Team::TeamB => Team::TeamA,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Team::TeamA => "Team A",
            Team::TeamB => "Team B",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub team: Team,
}

impl Player {
    pub fn new(name: impl Into<String>, team: Team) -> Self {
        Self {
            name: name.into(),
            team,
        }
    }
}

/// Overall match progression.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchStatus {
    /// No players yet.
    #[default]
    NotStarted,
    /// Rounds are being recorded.
    InProgress,
    /// A team reached the target score with the latest round.
    Finished,
}

/// Everything the engine owns. This is also the persisted snapshot.
///
/// The round log is the source of truth: the cached totals and dealer are
/// always reproducible from `players` + `rounds`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchState {
    /// Fixed seating order: [TeamA#1, TeamB#1, TeamA#2, TeamB#2]. Empty before start.
    pub players: Vec<Player>,
    pub team_a_score: i32,
    pub team_b_score: i32,
    pub rounds: Vec<RoundResult>,
    pub dealer_index: Seat,
    pub status: MatchStatus,
    /// Present iff `status == Finished`.
    pub winner: Option<Team>,
}

impl MatchState {
    pub fn score(&self, team: Team) -> i32 {
        match team {
            Team::TeamA => self.team_a_score,
            Team::TeamB => self.team_b_score,
        }
    }

    pub fn player(&self, seat: Seat) -> Option<&Player> {
        self.players.get(seat as usize)
    }

    pub fn team_of(&self, seat: Seat) -> Option<Team> {
        self.player(seat).map(|p| p.team)
    }
}

/// Seat rotation helpers (4 fixed seats: 0..=3).
///
/// The dealer moves clockwise (+1) after each recorded round and back (-1)
/// when a round is undone.
#[inline]
pub fn seat_offset(seat: Seat, delta: i8) -> Seat {
    let seat_i = seat as i16;
    let delta_i = delta as i16;
    ((seat_i + delta_i).rem_euclid(PLAYERS as i16)) as Seat
}

/// Returns the next seat clockwise (0 → 1 → 2 → 3 → 0).
#[inline]
pub fn next_seat(seat: Seat) -> Seat {
    seat_offset(seat, 1)
}

/// Returns the previous seat counter-clockwise (0 ← 1 ← 2 ← 3 ← 0).
#[inline]
pub fn prev_seat(seat: Seat) -> Seat {
    seat_offset(seat, -1)
}

/// Dealer after `rounds_played` rounds, starting from seat 0.
#[inline]
pub fn dealer_after(rounds_played: usize) -> Seat {
    (rounds_played % PLAYERS) as Seat
}
