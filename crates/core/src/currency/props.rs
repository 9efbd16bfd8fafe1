//! Property-based tests for currency operations.
//!
//! - Banker's rounding of converted amounts
//! - Consistency of cross rates derived from a reference table

use cambio_shared::CurrencyCode;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::conversion::convert;
use super::exchange::ExchangeRate;
use super::reference::ReferenceRates;
use super::source::RateSource;

/// Strategy to generate positive decimal amounts (0.01 to 1,000,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate positive exchange rates (0.0001 to 10000.0000).
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Strategy to generate decimal places (0 to 4).
fn decimal_places() -> impl Strategy<Value = u32> {
    0u32..=4
}

fn code(s: &str) -> CurrencyCode {
    CurrencyCode::parse(s).unwrap()
}

fn convert_usd_to_eur(amount: Decimal, rate: Decimal, dp: u32) -> Decimal {
    let rate = ExchangeRate::new(code("USD"), code("EUR"), rate, None);
    convert(amount, &rate, dp).unwrap().amount
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Converted amounts never carry more decimal places than requested.
    #[test]
    fn prop_convert_respects_decimal_places(
        amount in positive_amount(),
        rate in positive_rate(),
        dp in decimal_places(),
    ) {
        let result = convert_usd_to_eur(amount, rate, dp);
        prop_assert!(result.scale() <= dp, "{} has more than {} places", result, dp);
    }

    /// Rounding never moves a result by more than half a unit in the last place.
    #[test]
    fn prop_convert_error_bounded(
        amount in positive_amount(),
        rate in positive_rate(),
        dp in decimal_places(),
    ) {
        let exact = amount * rate;
        let rounded = convert_usd_to_eur(amount, rate, dp);
        let half_unit = Decimal::new(5, dp + 1);
        prop_assert!((exact - rounded).abs() <= half_unit);
    }

    /// Converting there and back through a reference table returns (almost) 1.
    #[test]
    fn prop_cross_rates_are_reciprocal(
        usd in positive_rate(),
        gbp in positive_rate(),
    ) {
        let table = ReferenceRates::new(code("EUR"), None)
            .with_rate(code("USD"), usd)
            .with_rate(code("GBP"), gbp);

        let there = table.rate(&code("USD"), &code("GBP")).unwrap().rate;
        let back = table.rate(&code("GBP"), &code("USD")).unwrap().rate;

        prop_assert!((there * back - Decimal::ONE).abs() < dec!(0.000000000001));
    }

    /// A cross rate equals going to the base and then out of it.
    #[test]
    fn prop_cross_rate_matches_path_through_base(
        usd in positive_rate(),
        jpy in positive_rate(),
    ) {
        let table = ReferenceRates::new(code("EUR"), None)
            .with_rate(code("USD"), usd)
            .with_rate(code("JPY"), jpy);

        let direct = table.rate(&code("USD"), &code("JPY")).unwrap().rate;
        let to_base = table.rate(&code("USD"), &code("EUR")).unwrap().rate;
        let from_base = table.rate(&code("EUR"), &code("JPY")).unwrap().rate;

        prop_assert!((direct - to_base * from_base).abs() < dec!(0.000000000001) * direct.max(Decimal::ONE));
    }
}
