//! Settings error types.

use std::path::PathBuf;

use cambio_shared::AppError;
use thiserror::Error;

/// Settings-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The settings file does not exist.
    #[error("Settings file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The settings file exists but could not be read.
    #[error("Failed to read settings file {}: {source}", .path.display())]
    Io {
        /// Path of the settings file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The settings file is not JSON of the expected shape.
    #[error("Malformed settings: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
