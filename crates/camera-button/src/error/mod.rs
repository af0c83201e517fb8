use std::{panic::Location, result::Result as StdResult};

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors produced by the camera-button widget.
///
/// All variants include `ErrorLocation` for call-site tracking. The
/// gesture and recording state machines themselves are infallible;
/// only configuration handling can fail.
#[derive(Error, Debug)]
pub enum ButtonError {
    /// Configuration loading, saving, or validation error.
    #[error("Configuration error: {reason} {location}")]
    ConfigError {
        /// Human-readable reason for failure.
        reason: String,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// IO error from filesystem operations.
    #[error("IO error: {source} {location}")]
    IoError {
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
        /// Location where this error was created.
        location: ErrorLocation,
    },
}

impl From<std::io::Error> for ButtonError {
    #[track_caller]
    fn from(source: std::io::Error) -> Self {
        ButtonError::IoError {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convenience type alias for Results using `ButtonError`.
pub type Result<T> = StdResult<T, ButtonError>;
