//! Rate lookup error types.

use std::path::PathBuf;

use cambio_shared::{AppError, CurrencyCode};
use thiserror::Error;

/// Errors from a rate source.
#[derive(Debug, Error)]
pub enum RateError {
    /// The source has no rate for this pair.
    #[error("No exchange rate from {from} to {to}")]
    Unavailable {
        /// Source currency.
        from: CurrencyCode,
        /// Target currency.
        to: CurrencyCode,
    },

    /// Rate data could not be read.
    #[error("Failed to read rate data {}: {source}", .path.display())]
    Io {
        /// Path of the rate data.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Rate data is not in the expected format.
    #[error("Malformed rate data: {0}")]
    Malformed(String),
}

impl From<RateError> for AppError {
    fn from(err: RateError) -> Self {
        match err {
            RateError::Unavailable { .. } => Self::RateUnavailable(err.to_string()),
            RateError::Io { .. } | RateError::Malformed(_) => Self::Internal(err.to_string()),
        }
    }
}
