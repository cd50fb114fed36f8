//! Error codes reported by the scorekeeper.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! Codes are SCREAMING_SNAKE_CASE and are what the CLI prints.

use core::fmt;

/// Centralized error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Match setup
    /// `start` called without exactly four players
    InvalidPlayerCount,
    /// Blank player name
    InvalidPlayerName,
    /// Two players share a name (case-insensitive)
    DuplicatePlayerName,

    // Round entry
    /// Card points or double-victory fields are inconsistent
    InvalidRound,
    /// A declared call has no success/failure resolution
    UnresolvedTichuCall,

    // Match lifecycle
    /// Mutation attempted outside `InProgress`
    NotInProgress,

    // System
    /// Key-value store failure
    StorageError,
    /// Snapshot could not be encoded or decoded
    SerializationError,
    /// Configuration error
    ConfigError,
    /// Persisted snapshot cannot be reconciled with its round log
    DataCorruption,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidPlayerCount => "INVALID_PLAYER_COUNT",
            Self::InvalidPlayerName => "INVALID_PLAYER_NAME",
            Self::DuplicatePlayerName => "DUPLICATE_PLAYER_NAME",

            Self::InvalidRound => "INVALID_ROUND",
            Self::UnresolvedTichuCall => "UNRESOLVED_TICHU_CALL",

            Self::NotInProgress => "NOT_IN_PROGRESS",

            Self::StorageError => "STORAGE_ERROR",
            Self::SerializationError => "SERIALIZATION_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
            Self::DataCorruption => "DATA_CORRUPTION",
        }
    }

    /// True for errors the user can fix by changing their input.
    pub const fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidPlayerCount
                | Self::InvalidPlayerName
                | Self::DuplicatePlayerName
                | Self::InvalidRound
                | Self::UnresolvedTichuCall
                | Self::NotInProgress
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
