//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
///
/// Domain crates keep their own error enums and convert into this one at the
/// plugin boundary, so a host only has to deal with a single type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Settings or application configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The query was not understood.
    #[error("Parse error: {0}")]
    Parse(String),

    /// A rate could not be obtained from the rate source.
    #[error("Rate unavailable: {0}")]
    RateUnavailable(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the stable error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::Parse(_) => "PARSE_ERROR",
            Self::RateUnavailable(_) => "RATE_UNAVAILABLE",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Returns true if the error is caused by user input rather than the environment.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}
