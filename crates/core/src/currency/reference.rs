//! Reference rate table.
//!
//! Central banks publish reference rates as "units of each currency per one
//! unit of a base currency" (the ECB uses EUR). Any pair of listed currencies
//! can be priced by going through the base:
//!
//! ```text
//! from -> to = per_base[to] / per_base[from]
//! ```

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::Path;
use std::str::FromStr;

use cambio_shared::CurrencyCode;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{info, warn};

use super::error::RateError;
use super::exchange::ExchangeRate;
use super::source::RateSource;

/// Shape of a reference rate file.
///
/// ```json
/// { "base": "EUR", "date": "2026-10-16", "rates": { "USD": "1.0812", "JPY": 161.2 } }
/// ```
#[derive(Debug, Deserialize)]
struct RawReferenceRates {
    base: String,
    #[serde(default)]
    date: Option<NaiveDate>,
    rates: Map<String, Value>,
}

/// Reference rates relative to one base currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceRates {
    base: CurrencyCode,
    effective_date: Option<NaiveDate>,
    per_base: HashMap<CurrencyCode, Decimal>,
}

impl ReferenceRates {
    /// Creates an empty table for `base`.
    #[must_use]
    pub fn new(base: CurrencyCode, effective_date: Option<NaiveDate>) -> Self {
        Self {
            base,
            effective_date,
            per_base: HashMap::new(),
        }
    }

    /// Builder form of [`ReferenceRates::insert`].
    #[must_use]
    pub fn with_rate(mut self, currency: CurrencyCode, units_per_base: Decimal) -> Self {
        self.insert(currency, units_per_base);
        self
    }

    /// Records how many units of `currency` one unit of the base buys.
    ///
    /// Non-positive rates and rates for the base itself are ignored and
    /// return `false`.
    pub fn insert(&mut self, currency: CurrencyCode, units_per_base: Decimal) -> bool {
        if currency == self.base || units_per_base <= Decimal::ZERO {
            return false;
        }
        self.per_base.insert(currency, units_per_base);
        true
    }

    /// Reads a reference rate file.
    ///
    /// # Errors
    ///
    /// Returns `RateError::Io` if the file cannot be read, or
    /// `RateError::Malformed` if it is not in the expected format.
    pub fn from_path(path: &Path) -> Result<Self, RateError> {
        let text = std::fs::read_to_string(path).map_err(|source| RateError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let rates = Self::from_json(&text)?;
        info!(
            path = %path.display(),
            base = %rates.base,
            currencies = rates.per_base.len(),
            "Loaded reference rates"
        );
        Ok(rates)
    }

    /// Like [`ReferenceRates::from_path`], but returns an empty EUR table when
    /// the file cannot be used, so every lookup reports the rate unavailable.
    pub fn from_path_or_empty(path: &Path) -> Self {
        match Self::from_path(path) {
            Ok(rates) => rates,
            Err(RateError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
                warn!(path = %path.display(), "No reference rate file, no conversions available");
                Self::new(default_base(), None)
            }
            Err(e) => {
                warn!(error = %e, "Unusable reference rate file, no conversions available");
                Self::new(default_base(), None)
            }
        }
    }

    /// Parses reference rates from JSON text.
    ///
    /// Entries with a malformed currency code or a rate that is not a
    /// positive number are skipped.
    ///
    /// # Errors
    ///
    /// Returns `RateError::Malformed` if the text is not JSON of the expected
    /// shape or the base currency is not a valid code.
    pub fn from_json(text: &str) -> Result<Self, RateError> {
        let raw: RawReferenceRates =
            serde_json::from_str(text).map_err(|e| RateError::Malformed(e.to_string()))?;
        let base = CurrencyCode::parse(&raw.base)
            .map_err(|e| RateError::Malformed(e.to_string()))?;

        let mut rates = Self::new(base, raw.date);
        for (key, value) in &raw.rates {
            let Ok(currency) = CurrencyCode::parse(key) else {
                warn!(currency = %key, "Skipping rate for malformed currency code");
                continue;
            };
            let accepted = decimal_from_json(value)
                .is_some_and(|rate| rates.insert(currency.clone(), rate));
            if !accepted {
                warn!(currency = %currency, rate = %value, "Skipping unusable rate");
            }
        }
        Ok(rates)
    }

    /// Base currency of the table.
    #[must_use]
    pub const fn base(&self) -> &CurrencyCode {
        &self.base
    }

    /// Publication date of the rates, if known.
    #[must_use]
    pub const fn effective_date(&self) -> Option<NaiveDate> {
        self.effective_date
    }

    /// Returns true if `currency` can be priced.
    #[must_use]
    pub fn contains(&self, currency: &CurrencyCode) -> bool {
        *currency == self.base || self.per_base.contains_key(currency)
    }

    /// Number of listed currencies, excluding the base.
    #[must_use]
    pub fn len(&self) -> usize {
        self.per_base.len()
    }

    /// Returns true if only the base is known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.per_base.is_empty()
    }

    fn units_per_base(&self, currency: &CurrencyCode) -> Option<Decimal> {
        if *currency == self.base {
            Some(Decimal::ONE)
        } else {
            self.per_base.get(currency).copied()
        }
    }
}

impl RateSource for ReferenceRates {
    fn rate(&self, from: &CurrencyCode, to: &CurrencyCode) -> Result<ExchangeRate, RateError> {
        if from == to {
            return Ok(ExchangeRate::identity(from.clone()));
        }

        let unavailable = || RateError::Unavailable {
            from: from.clone(),
            to: to.clone(),
        };
        let from_rate = self.units_per_base(from).ok_or_else(unavailable)?;
        let to_rate = self.units_per_base(to).ok_or_else(unavailable)?;
        let rate = to_rate.checked_div(from_rate).ok_or_else(unavailable)?;

        Ok(ExchangeRate::new(
            from.clone(),
            to.clone(),
            rate,
            self.effective_date,
        ))
    }
}

fn default_base() -> CurrencyCode {
    CurrencyCode::parse("EUR").unwrap_or_else(|_| CurrencyCode::fallback())
}

/// Reads a decimal from a JSON string or number without going through `f64`.
fn decimal_from_json(value: &Value) -> Option<Decimal> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
}
