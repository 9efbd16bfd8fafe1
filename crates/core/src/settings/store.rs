//! Loading and validation of the settings file.
//!
//! The file is edited by hand, so only its overall shape is strict. Individual
//! entries that do not make sense are skipped with a warning and the rest of
//! the file still applies.

use std::io::ErrorKind;
use std::path::Path;

use cambio_shared::CurrencyCode;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use super::alias::AliasTable;
use super::error::ConfigError;
use super::types::Settings;

/// Shape of the settings file.
///
/// ```json
/// {
///   "aliases": { "EUR": ["eu", "euro"], "GBP": ["quid"] },
///   "defaults": ["EUR", "GBP", "JPY"],
///   "home": "USD"
/// }
/// ```
#[derive(Debug, Deserialize)]
struct RawSettings {
    #[serde(default)]
    aliases: Map<String, Value>,
    #[serde(default)]
    defaults: Option<Vec<Value>>,
    #[serde(default)]
    home: Option<String>,
    #[serde(flatten)]
    unknown: Map<String, Value>,
}

/// Settings loader.
pub struct ConfigStore;

impl ConfigStore {
    /// Reads and validates the settings file at `path`.
    ///
    /// # Errors
    ///
    /// - `ConfigError::NotFound` if the file does not exist
    /// - `ConfigError::Io` if it cannot be read
    /// - `ConfigError::Malformed` if it is not JSON of the expected shape
    pub fn load(path: &Path) -> Result<Settings, ConfigError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let settings = Self::parse(&text)?;
        info!(
            path = %path.display(),
            aliases = settings.aliases().len(),
            defaults = settings.defaults().len(),
            home = %settings.home(),
            "Loaded settings"
        );
        Ok(settings)
    }

    /// Like [`ConfigStore::load`], but falls back to the built-in settings on
    /// any error. A missing file is expected and logged at `info`.
    pub fn load_or_default(path: &Path) -> Settings {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(ConfigError::NotFound(_)) => {
                info!(path = %path.display(), "No settings file, using built-in defaults");
                Settings::default()
            }
            Err(e) => {
                warn!(error = %e, path = %path.display(), "Invalid settings file, using built-in defaults");
                Settings::default()
            }
        }
    }

    /// Validates settings from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Malformed` if the text is not JSON of the expected shape.
    pub fn parse(text: &str) -> Result<Settings, ConfigError> {
        let raw: RawSettings = serde_json::from_str(text)?;

        for key in raw.unknown.keys() {
            warn!(key = %key, "Ignoring unknown settings key");
        }

        let aliases = Self::build_aliases(&raw.aliases);
        let defaults = Self::resolve_defaults(raw.defaults.as_deref(), &aliases);
        let home = Self::resolve_home(raw.home.as_deref(), &aliases);

        Ok(Settings::new(aliases, defaults, home))
    }

    fn build_aliases(raw: &Map<String, Value>) -> AliasTable {
        let mut table = AliasTable::new();
        let mut canonical = Vec::with_capacity(raw.len());

        // Object order is preserved, so a later code claiming the same alias wins.
        for (key, value) in raw {
            let Ok(code) = CurrencyCode::parse(key) else {
                warn!(code = %key, "Skipping aliases of malformed currency code");
                continue;
            };
            let Value::Array(list) = value else {
                warn!(code = %code, "Skipping aliases that are not a list");
                continue;
            };

            for alias in list {
                match alias.as_str().map(str::trim) {
                    Some(a) if !a.is_empty() && !a.contains(char::is_whitespace) => {
                        table.insert(a, code.clone());
                    }
                    _ => warn!(code = %code, alias = %alias, "Skipping malformed alias"),
                }
            }
            canonical.push(code);
        }

        for code in &canonical {
            table.insert_canonical(code);
        }
        table
    }

    fn resolve_defaults(raw: Option<&[Value]>, aliases: &AliasTable) -> Vec<CurrencyCode> {
        let Some(raw) = raw else {
            debug!("No defaults configured");
            return Vec::new();
        };

        let defaults: Vec<CurrencyCode> = raw
            .iter()
            .filter_map(|value| {
                let code = value.as_str().and_then(|s| aliases.resolve(s));
                if code.is_none() {
                    warn!(value = %value, "Skipping malformed default currency");
                }
                code
            })
            .collect();

        if defaults.is_empty() {
            warn!("No usable default currency, falling back to built-in default");
        }
        defaults
    }

    fn resolve_home(raw: Option<&str>, aliases: &AliasTable) -> CurrencyCode {
        match raw {
            None => CurrencyCode::fallback(),
            Some(home) => aliases.resolve(home).unwrap_or_else(|| {
                warn!(home = %home, "Unknown home currency, falling back to built-in default");
                CurrencyCode::fallback()
            }),
        }
    }
}
