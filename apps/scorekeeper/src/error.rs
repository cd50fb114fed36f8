use std::process::ExitCode;

use thiserror::Error;

use crate::errors::{DomainError, ErrorCode};

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("Storage error: {detail}")]
    Storage { detail: String },
    #[error("Serialization error: {detail}")]
    Serialization { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    /// Error code for this variant; domain errors keep their own code.
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Domain(e) => e.code(),
            AppError::Storage { .. } => ErrorCode::StorageError,
            AppError::Serialization { .. } => ErrorCode::SerializationError,
            AppError::Config { .. } => ErrorCode::ConfigError,
        }
    }

    /// Process exit status the CLI reports for this error.
    pub fn exit_code(&self) -> ExitCode {
        if self.code().is_user_error() {
            ExitCode::from(2)
        } else {
            ExitCode::FAILURE
        }
    }

    pub fn storage(detail: impl Into<String>) -> Self {
        Self::Storage {
            detail: detail.into(),
        }
    }

    pub fn serialization(detail: impl Into<String>) -> Self {
        Self::Serialization {
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    /// The domain error behind this one, if any.
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            AppError::Domain(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::serialization(format!("json error: {e}"))
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::storage(format!("io error: {e}"))
    }
}
