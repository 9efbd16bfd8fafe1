//! Exchange rate caching using Moka.
//!
//! Wraps any [`RateSource`] and keeps successful pair lookups for a fixed
//! time, so repeated keystrokes in the launcher do not hit the source again.

use std::time::Duration;

use cambio_shared::CurrencyCode;
use moka::sync::Cache;
use tracing::trace;

use super::error::RateError;
use super::exchange::ExchangeRate;
use super::source::RateSource;

/// Default cache capacity (number of currency pairs).
const DEFAULT_CACHE_CAPACITY: u64 = 1000;

/// Default time-to-live for cache entries (3 hours).
const DEFAULT_TTL_SECS: u64 = 10800;

/// Rate source decorator caching successful lookups.
///
/// Failed lookups are never cached. Thread-safe and cheap to share.
#[derive(Clone)]
pub struct CachedRateSource<S> {
    inner: S,
    cache: Cache<(CurrencyCode, CurrencyCode), ExchangeRate>,
}

impl<S: RateSource> CachedRateSource<S> {
    /// Creates a cache with default settings.
    ///
    /// Default: 1000 pairs max, 3 hour TTL.
    #[must_use]
    pub fn new(inner: S) -> Self {
        Self::with_config(inner, DEFAULT_CACHE_CAPACITY, DEFAULT_TTL_SECS)
    }

    /// Creates a cache with custom configuration.
    ///
    /// # Arguments
    ///
    /// * `inner` - The source to consult on a miss
    /// * `max_capacity` - Maximum number of pairs to cache
    /// * `ttl_secs` - Time-to-live in seconds for each entry
    #[must_use]
    pub fn with_config(inner: S, max_capacity: u64, ttl_secs: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { inner, cache }
    }

    /// The wrapped source.
    pub const fn inner(&self) -> &S {
        &self.inner
    }

    /// Invalidates all cached entries.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }

    /// Returns the number of entries currently in the cache.
    #[must_use]
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Runs cache maintenance tasks.
    pub fn run_pending_tasks(&self) {
        self.cache.run_pending_tasks();
    }
}

impl<S: RateSource> RateSource for CachedRateSource<S> {
    fn rate(&self, from: &CurrencyCode, to: &CurrencyCode) -> Result<ExchangeRate, RateError> {
        let key = (from.clone(), to.clone());

        if let Some(cached) = self.cache.get(&key) {
            trace!(from = %from, to = %to, "Rate cache hit");
            return Ok(cached);
        }

        let rate = self.inner.rate(from, to)?;
        self.cache.insert(key, rate.clone());
        Ok(rate)
    }
}
