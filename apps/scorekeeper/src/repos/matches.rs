//! Match snapshot repository.
//!
//! The store is an opaque key-value map of JSON strings; encoding and the
//! persistence policy live in `services::matches`.

use crate::error::AppError;

/// Key the match snapshot is stored under unless configured otherwise.
pub const DEFAULT_MATCH_KEY: &str = "tichu-game-state";

/// Key-value storage for serialized match snapshots.
pub trait MatchStore {
    /// Stored payload, or `None` when the key is absent.
    fn load(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Replace the payload stored under `key`.
    fn save(&self, key: &str, payload: &str) -> Result<(), AppError>;

    /// Remove `key`. Removing an absent key succeeds.
    fn delete(&self, key: &str) -> Result<(), AppError>;
}

impl<S: MatchStore + ?Sized> MatchStore for &S {
    fn load(&self, key: &str) -> Result<Option<String>, AppError> {
        (**self).load(key)
    }

    fn save(&self, key: &str, payload: &str) -> Result<(), AppError> {
        (**self).save(key, payload)
    }

    fn delete(&self, key: &str) -> Result<(), AppError> {
        (**self).delete(key)
    }
}

impl<S: MatchStore + ?Sized> MatchStore for Box<S> {
    fn load(&self, key: &str) -> Result<Option<String>, AppError> {
        (**self).load(key)
    }

    fn save(&self, key: &str, payload: &str) -> Result<(), AppError> {
        (**self).save(key, payload)
    }

    fn delete(&self, key: &str) -> Result<(), AppError> {
        (**self).delete(key)
    }
}

/// Keys are 1-64 characters of ASCII letters, digits, `-`, `_` or `.`,
/// and may not start with `.`. File-backed stores use them as file names.
pub fn validate_key(key: &str) -> Result<(), AppError> {
    let well_formed = !key.is_empty()
        && key.len() <= 64
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if well_formed {
        Ok(())
    } else {
        Err(AppError::config(format!("invalid match key {key:?}")))
    }
}
