//! Where the match snapshot lives.
//!
//! Read from the environment:
//! - `SCOREKEEPER_STATE_DIR`: directory of the file store (default `.scorekeeper`)
//! - `SCOREKEEPER_STATE_KEY`: key the match is stored under (default `tichu-game-state`)

use std::env;
use std::path::PathBuf;

use crate::error::AppError;
use crate::repos::matches::{validate_key, DEFAULT_MATCH_KEY};

pub const STATE_DIR_VAR: &str = "SCOREKEEPER_STATE_DIR";
pub const STATE_KEY_VAR: &str = "SCOREKEEPER_STATE_KEY";
pub const DEFAULT_STATE_DIR: &str = ".scorekeeper";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub state_dir: PathBuf,
    pub state_key: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            state_dir: PathBuf::from(DEFAULT_STATE_DIR),
            state_key: DEFAULT_MATCH_KEY.to_string(),
        }
    }
}

impl Config {
    /// Build from the environment. Unset or blank variables take defaults.
    pub fn from_env() -> Result<Self, AppError> {
        let state_dir = optional_var(STATE_DIR_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_DIR));
        let state_key =
            optional_var(STATE_KEY_VAR).unwrap_or_else(|| DEFAULT_MATCH_KEY.to_string());

        Self {
            state_dir,
            state_key,
        }
        .validated()
    }

    /// Apply command-line overrides on top of this config.
    pub fn with_overrides(
        mut self,
        state_dir: Option<PathBuf>,
        state_key: Option<String>,
    ) -> Result<Self, AppError> {
        if let Some(dir) = state_dir {
            self.state_dir = dir;
        }
        if let Some(key) = state_key {
            self.state_key = key;
        }
        self.validated()
    }

    fn validated(self) -> Result<Self, AppError> {
        if self.state_dir.as_os_str().is_empty() {
            return Err(AppError::config("state directory must not be empty"));
        }
        validate_key(&self.state_key)?;
        Ok(self)
    }
}

fn optional_var(name: &str) -> Option<String> {
    let value = env::var(name).ok()?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
