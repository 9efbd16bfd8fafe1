//! Launcher-facing surface of the currency converter.
//!
//! This crate provides:
//! - The query handler the launcher calls on every keystroke
//! - Result item types
//! - The settings handle with atomic reload

pub mod handle;
pub mod item;

use cambio_core::currency::{RateError, RateSource, convert};
use cambio_core::query::QueryParser;
use cambio_shared::config::PluginConfig;
use cambio_shared::types::money::DISPLAY_DECIMAL_PLACES;
use cambio_shared::AppResult;
use tracing::{debug, warn};

pub use handle::SettingsHandle;
pub use item::{ItemAction, ResultItem};

/// Trigger the launcher uses unless configured otherwise.
pub const DEFAULT_TRIGGER: &str = "cc ";

/// Usage hint shown by the launcher.
pub const SYNOPSIS: &str = "<amount> [from] [<src>] [to <dest>...]";

/// The currency converter plugin.
pub struct CurrencyPlugin<R> {
    settings: SettingsHandle,
    rates: R,
    icon_url: String,
}

impl<R: RateSource> CurrencyPlugin<R> {
    /// Creates the plugin with the default icon.
    #[must_use]
    pub fn new(settings: SettingsHandle, rates: R) -> Self {
        Self {
            settings,
            rates,
            icon_url: PluginConfig::default().icon_url,
        }
    }

    /// Creates the plugin from application configuration, loading the
    /// settings file it names.
    #[must_use]
    pub fn from_config(config: &PluginConfig, rates: R) -> Self {
        Self::new(SettingsHandle::open(&config.settings_path), rates)
            .with_icon_url(config.icon_url.clone())
    }

    /// Sets the icon shown on result items.
    #[must_use]
    pub fn with_icon_url(mut self, icon_url: impl Into<String>) -> Self {
        self.icon_url = icon_url.into();
        self
    }

    /// Trigger the launcher should route to this plugin by default.
    #[must_use]
    pub const fn default_trigger() -> &'static str {
        DEFAULT_TRIGGER
    }

    /// Usage hint for the launcher.
    #[must_use]
    pub const fn synopsis() -> &'static str {
        SYNOPSIS
    }

    /// Settings handle, for host-driven reloads.
    #[must_use]
    pub const fn settings(&self) -> &SettingsHandle {
        &self.settings
    }

    /// The rate source.
    #[must_use]
    pub const fn rates(&self) -> &R {
        &self.rates
    }

    /// Host hook: the settings file changed on disk.
    pub fn on_settings_changed(&self) {
        if let Err(e) = self.settings.reload() {
            warn!(error = %e, "Settings reload failed");
        }
    }

    /// Handles one query. Never fails: anything that goes wrong yields
    /// fewer (or no) items.
    pub fn handle_query(&self, query: &str) -> Vec<ResultItem> {
        match self.try_handle_query(query) {
            Ok(items) => items,
            Err(e) if e.is_user_error() => {
                debug!(query = %query, error = %e, "Query not understood");
                Vec::new()
            }
            Err(e) => {
                warn!(query = %query, error = %e, code = e.error_code(), "Query failed");
                Vec::new()
            }
        }
    }

    /// Handles one query, reporting why no items could be produced.
    ///
    /// Targets without a rate are skipped individually; the remaining targets
    /// still produce items.
    ///
    /// # Errors
    ///
    /// - `AppError::Parse` if the query is not understood
    /// - another `AppError` if the rate source failed as a whole
    pub fn try_handle_query(&self, query: &str) -> AppResult<Vec<ResultItem>> {
        let settings = self.settings.snapshot();
        let request = QueryParser::parse(query, &settings)?;
        let quote = self.rates.quote(&request.source, &request.targets)?;
        let source = request.source_money();

        let mut items = Vec::with_capacity(request.targets.len());
        for target in &request.targets {
            let Some(rate) = quote.get(target) else {
                let missing = RateError::Unavailable {
                    from: request.source.clone(),
                    to: target.clone(),
                };
                warn!(error = %missing, "Skipping target");
                continue;
            };
            match convert(request.amount, rate, DISPLAY_DECIMAL_PLACES) {
                Some(converted) => {
                    items.push(ResultItem::conversion(&source, &converted, &self.icon_url));
                }
                None => warn!(amount = %request.amount, target = %target, "Conversion overflowed"),
            }
        }
        Ok(items)
    }
}
