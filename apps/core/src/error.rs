use std::io;
use thiserror::Error;

use crate::brain::Category;

/// Application-wide error type, consolidating all possible errors into a single enum.
///
/// Classification itself never produces one of these: every classification-time condition
/// falls back to [`Category::Default`]. Errors only surface from construction-time checks,
/// configuration, persistence and the emotion monitor.
#[derive(Debug, Error)]
pub enum AppError {
    /// A category has no response in the catalog. This is a programming error and must be
    /// caught by the construction-time completeness check.
    #[error("No catalog entry for category '{0}'")]
    MissingCatalogEntry(Category),

    /// Represents standard input/output errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Represents data validation errors (e.g., empty input, out-of-range mood level).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g., unparseable environment variables).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents errors from the emotion monitor actor, such as a closed channel.
    #[error("Actor error: {0}")]
    Actor(String),

    /// Represents unexpected internal errors that indicate a bug.
    #[error("Internal error: {0}")]
    Internal(String),

    /// Represents errors from operations that did not complete in time.
    #[error("Operation timed out: {0}")]
    Timeout(String),
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        match self {
            AppError::MissingCatalogEntry(c) => AppError::MissingCatalogEntry(*c),
            AppError::Io(e) => AppError::Io(io::Error::new(e.kind(), e.to_string())),
            AppError::Validation(s) => AppError::Validation(s.clone()),
            AppError::Config(s) => AppError::Config(s.clone()),
            AppError::Actor(s) => AppError::Actor(s.clone()),
            AppError::Internal(s) => AppError::Internal(s.clone()),
            AppError::Timeout(s) => AppError::Timeout(s.clone()),
        }
    }
}

impl From<tokio::time::error::Elapsed> for AppError {
    fn from(err: tokio::time::error::Elapsed) -> Self {
        AppError::Timeout(format!("Operation timed out: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Validation(format!("JSON error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(format!("Validation errors: {}", err))
    }
}

impl From<chrono::ParseError> for AppError {
    fn from(err: chrono::ParseError) -> Self {
        AppError::Validation(format!("Date parse error: {}", err))
    }
}
