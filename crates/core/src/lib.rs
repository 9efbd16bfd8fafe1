//! Core conversion logic for Cambio.
//!
//! This crate contains pure logic with ZERO launcher or network dependencies.
//!
//! # Modules
//!
//! - `settings` - Settings file loading, alias table and defaults
//! - `query` - Parsing launcher queries into conversion requests
//! - `currency` - Exchange rates, rate sources and conversion

pub mod currency;
pub mod query;
pub mod settings;

pub use currency::{CachedRateSource, ExchangeRate, Quote, RateError, RateSource, ReferenceRates};
pub use query::{ConversionRequest, ParseError, QueryParser};
pub use settings::{AliasTable, ConfigError, ConfigStore, Settings};
