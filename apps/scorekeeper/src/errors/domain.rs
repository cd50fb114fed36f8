//! Domain-level error type used across services and adapters.
//!
//! This error type is IO-agnostic. The host converts it into
//! `crate::error::AppError` through the provided `From` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::domain::round::TichuCall;
use crate::domain::state::{MatchStatus, Seat};
use crate::errors::ErrorCode;

/// Central domain error type.
///
/// Every variant is detected before any state is touched, so a rejected
/// operation leaves the match exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// `start` needs exactly four players.
    InvalidPlayerCount { expected: usize, got: usize },
    /// A player name is blank after trimming.
    InvalidPlayerName(String),
    /// Two players share a name after normalization.
    DuplicatePlayerName(String),
    /// Card points / double victory / call entries are inconsistent.
    InvalidRound(String),
    /// A declared call was submitted without success or failure.
    UnresolvedTichuCall { seat: Seat, call: TichuCall },
    /// A mutation that needs a running match.
    NotInProgress(MatchStatus),
    /// A stored snapshot that cannot be rebuilt from its own round log.
    CorruptSnapshot(String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::InvalidPlayerCount { expected, got } => {
                write!(f, "expected {expected} players, got {got}")
            }
            DomainError::InvalidPlayerName(d) => write!(f, "invalid player name: {d}"),
            DomainError::DuplicatePlayerName(name) => {
                write!(f, "player names must be unique: {name:?} is used twice")
            }
            DomainError::InvalidRound(d) => write!(f, "invalid round: {d}"),
            DomainError::UnresolvedTichuCall { seat, call } => {
                write!(f, "{call:?} call for seat {seat} has no result")
            }
            DomainError::NotInProgress(status) => {
                write!(f, "match is not in progress (status {status:?})")
            }
            DomainError::CorruptSnapshot(d) => write!(f, "corrupt snapshot: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn invalid_round(detail: impl Into<String>) -> Self {
        Self::InvalidRound(detail.into())
    }

    pub fn invalid_player_name(detail: impl Into<String>) -> Self {
        Self::InvalidPlayerName(detail.into())
    }

    pub fn corrupt_snapshot(detail: impl Into<String>) -> Self {
        Self::CorruptSnapshot(detail.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::InvalidPlayerCount { .. } => ErrorCode::InvalidPlayerCount,
            DomainError::InvalidPlayerName(_) => ErrorCode::InvalidPlayerName,
            DomainError::DuplicatePlayerName(_) => ErrorCode::DuplicatePlayerName,
            DomainError::InvalidRound(_) => ErrorCode::InvalidRound,
            DomainError::UnresolvedTichuCall { .. } => ErrorCode::UnresolvedTichuCall,
            DomainError::NotInProgress(_) => ErrorCode::NotInProgress,
            DomainError::CorruptSnapshot(_) => ErrorCode::DataCorruption,
        }
    }
}
