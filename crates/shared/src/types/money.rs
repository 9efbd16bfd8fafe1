//! Money type with decimal precision and currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::currency::CurrencyCode;

/// Number of fraction digits shown when a money amount is displayed.
pub const DISPLAY_DECIMAL_PLACES: u32 = 2;

/// Represents a monetary amount with currency.
///
/// Uses `Decimal` internally to avoid floating-point precision errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// The amount in major units (e.g., dollars, not cents).
    pub amount: Decimal,
    /// Currency of the amount.
    pub currency: CurrencyCode,
}

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub const fn new(amount: Decimal, currency: CurrencyCode) -> Self {
        Self { amount, currency }
    }

    /// Returns the amount rounded for display with banker's rounding.
    #[must_use]
    pub fn display_amount(&self) -> Decimal {
        self.amount
            .round_dp_with_strategy(DISPLAY_DECIMAL_PLACES, RoundingStrategy::MidpointNearestEven)
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} {}", self.display_amount(), self.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn usd() -> CurrencyCode {
        CurrencyCode::parse("USD").unwrap()
    }

    #[test]
    fn test_money_new() {
        let amount = dec!(100.00);
        let money = Money::new(amount, usd());
        assert_eq!(money.amount, amount);
        assert_eq!(money.currency, usd());
    }

    #[test]
    fn test_display_pads_to_two_places() {
        assert_eq!(Money::new(dec!(12), usd()).to_string(), "12.00 USD");
        assert_eq!(Money::new(dec!(-3.5), usd()).to_string(), "-3.50 USD");
    }

    #[test]
    fn test_display_uses_bankers_rounding() {
        // 0.125 -> 0.12 (nearest even), 0.135 -> 0.14
        assert_eq!(Money::new(dec!(0.125), usd()).to_string(), "0.12 USD");
        assert_eq!(Money::new(dec!(0.135), usd()).to_string(), "0.14 USD");
    }

    #[test]
    fn test_display_large_amount_has_no_grouping() {
        assert_eq!(
            Money::new(dec!(1234567.891), usd()).to_string(),
            "1234567.89 USD"
        );
    }
}
