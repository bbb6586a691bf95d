//! Error types for detector configuration.

use thiserror::Error;

/// Errors raised while configuring a [`Detector`](crate::Detector).
///
/// Only configuration problems are surfaced. Failures encountered while
/// walking the filesystem (permission denied, vanished files, broken
/// symlinks) are logged and skipped, never returned.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error types
/// in future versions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DetectorError {
    /// The platform identifier is not one of `darwin`, `win32` or `linux`.
    #[error("Platform {0} is not supported")]
    UnsupportedPlatform(String),

    /// The variant identifier is not one of `electron` or `nwjs`.
    #[error("Variant {0} is not supported")]
    UnsupportedVariant(String),

    /// A marker or secondary file-name pattern failed to compile.
    #[error("Invalid file name pattern {pattern:?}: {message}")]
    InvalidPattern {
        /// The pattern as supplied.
        pattern: String,
        /// Why the pattern was rejected.
        message: String,
    },

    /// The Windows default roots need the login name and none was found.
    #[error("Cannot resolve the current login name for the default search paths")]
    LoginNameUnavailable,
}

impl DetectorError {
    /// Human-readable description of the error kind.
    ///
    /// # Example
    ///
    /// ```rust
    /// use electron_search::DetectorError;
    ///
    /// let error = DetectorError::UnsupportedVariant("cef".to_string());
    /// assert_eq!(error.description(), "Unsupported variant");
    /// ```
    pub fn description(&self) -> &'static str {
        match self {
            Self::UnsupportedPlatform(_) => "Unsupported platform",
            Self::UnsupportedVariant(_) => "Unsupported variant",
            Self::InvalidPattern { .. } => "Invalid file name pattern",
            Self::LoginNameUnavailable => "Login name unavailable",
        }
    }
}
