//! Currency conversion logic.
//!
//! CRITICAL: Rounding strategy for multi-currency:
//! - Always round to the target's decimal places
//! - Use banker's rounding (round half to even)

use cambio_shared::Money;
use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;

use super::exchange::ExchangeRate;

/// Converts `amount` of `rate.from_currency` into `rate.to_currency`.
///
/// Uses banker's rounding (round half to even) to minimize cumulative errors.
/// Returns `None` if the product overflows a `Decimal`.
#[must_use]
pub fn convert(amount: Decimal, rate: &ExchangeRate, decimal_places: u32) -> Option<Money> {
    let converted = amount
        .checked_mul(rate.rate)?
        .round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointNearestEven);
    Some(Money::new(converted, rate.to_currency.clone()))
}
