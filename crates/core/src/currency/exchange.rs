//! Exchange rate types and logic.

use cambio_shared::CurrencyCode;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Exchange rate between two currencies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRate {
    /// Source currency code.
    pub from_currency: CurrencyCode,
    /// Target currency code.
    pub to_currency: CurrencyCode,
    /// Exchange rate (1 from_currency = rate to_currency).
    pub rate: Decimal,
    /// Date this rate is effective, if the source publishes one.
    pub effective_date: Option<NaiveDate>,
}

impl ExchangeRate {
    /// Creates a new exchange rate.
    #[must_use]
    pub const fn new(
        from_currency: CurrencyCode,
        to_currency: CurrencyCode,
        rate: Decimal,
        effective_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            from_currency,
            to_currency,
            rate,
            effective_date,
        }
    }

    /// Rate of a currency to itself.
    #[must_use]
    pub fn identity(currency: CurrencyCode) -> Self {
        Self {
            from_currency: currency.clone(),
            to_currency: currency,
            rate: Decimal::ONE,
            effective_date: None,
        }
    }
}
