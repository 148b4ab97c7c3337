//! Core error types for teachshift-core.
//!
//! Domain outcomes of a lookup ([`SelectionError`]) are kept apart from
//! failures of the remote scheduling API ([`SourceError`]) so callers can tell
//! "the remote service is down" from "there is no session right now".

use chrono::NaiveTime;
use std::path::PathBuf;
use thiserror::Error;

use crate::shift::ShiftNumber;

/// Core error type for teachshift-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The remote scheduling API could not deliver jobs
    #[error("Job source error: {0}")]
    Source(#[from] SourceError),

    /// No job could be selected for the current time
    #[error(transparent)]
    Selection(#[from] SelectionError),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CoreError {
    /// Whether this error came from the remote job source rather than from
    /// the selection logic.
    pub fn is_transport(&self) -> bool {
        matches!(self, CoreError::Source(_))
    }
}

/// Terminal outcomes of a single next-job resolution.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    /// `now` is inside the final shift or past the end of the last one.
    #[error("No upcoming shift available today")]
    NoUpcomingShift,

    /// A shift is desired but no teaching job starts in it today.
    #[error("No teaching job found for the upcoming shift ({shift}) today")]
    NoMatchingSession { shift: ShiftNumber },
}

/// Failures talking to the remote scheduling API.
#[derive(Error, Debug)]
pub enum SourceError {
    /// Transport-level failure (connect, timeout, TLS, body read)
    #[error("Request to scheduling API failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("Scheduling API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The API answered with a payload we could not decode
    #[error("Failed to parse scheduling API response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Token issuance failed or returned no token
    #[error("Token issuance failed: {0}")]
    Auth(String),

    /// The active semester lookup returned no semester
    #[error("Failed to get active semester")]
    MissingSemester,

    /// Base URL or endpoint could not be built
    #[error("Invalid scheduling API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Key does not exist in the configuration tree
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A shift calendar needs at least one window
    #[error("Shift calendar has no windows")]
    EmptyCalendar,

    /// Window does not end after it starts
    #[error("Shift {shift}: end ({end}) must be after start ({start})")]
    InvalidWindow {
        shift: ShiftNumber,
        start: NaiveTime,
        end: NaiveTime,
    },

    /// Window starts before the previous one ended
    #[error("Shift {shift} starts at {start}, before the previous shift ends at {previous_end}")]
    OverlappingWindows {
        shift: ShiftNumber,
        start: NaiveTime,
        previous_end: NaiveTime,
    },

    /// Too many windows to number
    #[error("Shift calendar has {0} windows, at most 255 are supported")]
    TooManyWindows(usize),

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
