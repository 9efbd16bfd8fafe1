//! The rate source abstraction.

use std::collections::HashMap;

use cambio_shared::CurrencyCode;
use tracing::debug;

use super::error::RateError;
use super::exchange::ExchangeRate;

/// Rates for one source currency against several targets.
///
/// Targets the source could not price are absent from `rates`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Quote {
    /// Rates keyed by target currency.
    pub rates: HashMap<CurrencyCode, ExchangeRate>,
}

impl Quote {
    /// Rate for `target`, if one was found.
    #[must_use]
    pub fn get(&self, target: &CurrencyCode) -> Option<&ExchangeRate> {
        self.rates.get(target)
    }

    /// Number of priced targets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns true if no target was priced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

/// Provider of exchange rates.
pub trait RateSource: Send + Sync {
    /// Rate converting one unit of `from` into `to`.
    ///
    /// # Errors
    ///
    /// Returns `RateError::Unavailable` if the pair cannot be priced, or
    /// another `RateError` if the source itself failed.
    fn rate(&self, from: &CurrencyCode, to: &CurrencyCode) -> Result<ExchangeRate, RateError>;

    /// Rates from `from` into each of `targets`.
    ///
    /// Targets that cannot be priced are left out of the quote. Converting a
    /// currency into itself never consults the source.
    ///
    /// # Errors
    ///
    /// Returns an error only when the source as a whole failed, never for a
    /// single missing pair.
    fn quote(&self, from: &CurrencyCode, targets: &[CurrencyCode]) -> Result<Quote, RateError> {
        let mut quote = Quote::default();
        for target in targets {
            if target == from {
                quote
                    .rates
                    .insert(target.clone(), ExchangeRate::identity(target.clone()));
                continue;
            }
            match self.rate(from, target) {
                Ok(rate) => {
                    quote.rates.insert(target.clone(), rate);
                }
                Err(e @ RateError::Unavailable { .. }) => {
                    debug!(error = %e, "Leaving target out of quote");
                }
                Err(e) => return Err(e),
            }
        }
        Ok(quote)
    }
}

impl<S: RateSource + ?Sized> RateSource for Box<S> {
    fn rate(&self, from: &CurrencyCode, to: &CurrencyCode) -> Result<ExchangeRate, RateError> {
        (**self).rate(from, to)
    }

    fn quote(&self, from: &CurrencyCode, targets: &[CurrencyCode]) -> Result<Quote, RateError> {
        (**self).quote(from, targets)
    }
}
