//! Error types for the schedule subsystem.

use thiserror::Error;

/// Errors that can occur while computing or fetching a week of schedule data.
#[derive(Debug, Error, Clone)]
pub enum ScheduleError {
    /// A date string did not match the canonical `YYYY-MM-DD` form, or its
    /// components named a day that does not exist.
    #[error("malformed calendar date {input:?} (expected YYYY-MM-DD)")]
    MalformedDate { input: String },

    /// Network/HTTP request to the schedule API failed
    #[error("network error: {message}")]
    Network { message: String },

    /// The schedule API rejected our credentials
    #[error("schedule API rejected the session (status {status})")]
    SessionExpired { status: u16 },

    /// The schedule API returned a status we did not expect
    #[error("schedule API returned unexpected status {status}")]
    UnexpectedStatus { status: u16 },

    /// The response body could not be decoded as schedule entries
    #[error("could not decode schedule payload: {message}")]
    Decode { message: String },

    /// All retry attempts were exhausted
    #[error("giving up after {attempts} attempts: {last_error}")]
    RetriesExhausted { attempts: u32, last_error: String },
}

impl ScheduleError {
    /// Returns true if this error indicates the injected credentials need
    /// to be refreshed.
    pub fn needs_reauth(&self) -> bool {
        matches!(self, ScheduleError::SessionExpired { .. })
    }

    /// Returns true if this error is potentially transient and retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            ScheduleError::Network { .. } => true,
            ScheduleError::UnexpectedStatus { status } => *status >= 500,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for ScheduleError {
    fn from(err: reqwest::Error) -> Self {
        ScheduleError::Network {
            message: err.to_string(),
        }
    }
}

impl From<url::ParseError> for ScheduleError {
    fn from(err: url::ParseError) -> Self {
        ScheduleError::Network {
            message: format!("invalid schedule API URL: {err}"),
        }
    }
}
