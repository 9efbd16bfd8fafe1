//! Query parse error types.

use cambio_shared::AppError;
use thiserror::Error;

/// Reasons a query is not understood.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The query contains no tokens.
    #[error("Empty query")]
    Empty,

    /// The first token is not a number.
    #[error("Invalid amount: {0:?}")]
    InvalidAmount(String),

    /// A token is neither an alias nor a three-letter code.
    #[error("Unknown currency: {0:?}")]
    UnknownCurrency(String),

    /// A marker such as `to` is not followed by a currency.
    #[error("Expected a currency after {0:?}")]
    MissingCurrency(String),

    /// A token appears where the query grammar does not allow it.
    #[error("Unexpected token: {0:?}")]
    UnexpectedToken(String),
}

impl From<ParseError> for AppError {
    fn from(err: ParseError) -> Self {
        Self::Parse(err.to_string())
    }
}
