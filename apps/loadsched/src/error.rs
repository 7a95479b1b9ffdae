//! # Application Errors
//!
//! Every failure in the binary ends the run: the error is printed and the
//! process exits non-zero. There are no retries.

use loadsched_core::ScheduleError;
use thiserror::Error;

/// Errors that can occur while running a loadsched command.
#[derive(Debug, Error)]
pub enum AppError {
    /// Loading or parsing the schedule file failed.
    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    /// The status endpoint reported that stage data is unavailable.
    #[error("Load shedding status is unavailable")]
    StatusUnavailable,

    /// The status request could not be completed.
    #[error("Network error: {0}")]
    NetworkError(String),

    /// The status endpoint answered with something that is not a status code.
    #[error("Invalid status response: {0}")]
    InvalidStatus(String),

    /// The configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Writing command output failed.
    #[error("Output error: {0}")]
    OutputError(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::OutputError(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::OutputError(err.to_string())
    }
}
