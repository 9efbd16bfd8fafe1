//! Conversion request type.

use cambio_shared::{CurrencyCode, Money};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A normalized conversion request built from one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRequest {
    /// Amount to convert, in units of `source`.
    pub amount: Decimal,
    /// Currency the amount is expressed in.
    pub source: CurrencyCode,
    /// Currencies to convert into, in display order, without repeats.
    pub targets: Vec<CurrencyCode>,
}

impl ConversionRequest {
    /// The amount as money in the source currency.
    #[must_use]
    pub fn source_money(&self) -> Money {
        Money::new(self.amount, self.source.clone())
    }
}
