//! Exchange rates, rate sources and currency conversion.

pub mod cache;
pub mod conversion;
pub mod error;
pub mod exchange;
pub mod reference;
pub mod source;

#[cfg(test)]
mod props;

pub use cache::CachedRateSource;
pub use conversion::convert;
pub use error::RateError;
pub use exchange::ExchangeRate;
pub use reference::ReferenceRates;
pub use source::{Quote, RateSource};
