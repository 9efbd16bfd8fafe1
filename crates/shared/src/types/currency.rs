//! ISO 4217 style currency codes.
//!
//! A code is exactly three ASCII letters and is always stored uppercase, so two
//! codes compare equal regardless of how the user typed them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Currency code used when nothing else is configured.
pub const FALLBACK_CURRENCY: &str = "USD";

/// A validated, uppercase three-letter currency code (e.g. "USD", "EUR").
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

/// Error returned when a string is not a three-letter currency code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid currency code: {0:?}")]
pub struct InvalidCurrencyCode(pub String);

impl CurrencyCode {
    /// Parses a currency code, accepting any letter case.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCurrencyCode` unless the input is exactly three ASCII letters.
    pub fn parse(s: &str) -> Result<Self, InvalidCurrencyCode> {
        if Self::is_code_like(s) {
            Ok(Self(s.to_ascii_uppercase()))
        } else {
            Err(InvalidCurrencyCode(s.to_string()))
        }
    }

    /// Returns true if `s` has the shape of a currency code.
    #[must_use]
    pub fn is_code_like(s: &str) -> bool {
        s.len() == 3 && s.bytes().all(|b| b.is_ascii_alphabetic())
    }

    /// The built-in fallback currency (USD).
    #[must_use]
    pub fn fallback() -> Self {
        Self(FALLBACK_CURRENCY.to_string())
    }

    /// Returns the code as an uppercase string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for CurrencyCode {
    type Err = InvalidCurrencyCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = InvalidCurrencyCode;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
