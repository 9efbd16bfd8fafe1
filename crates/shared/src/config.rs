//! Application configuration management.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Plugin configuration.
    #[serde(default)]
    pub plugin: PluginConfig,
    /// Exchange rate configuration.
    #[serde(default)]
    pub rates: RatesConfig,
}

/// Plugin configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PluginConfig {
    /// Prefix the launcher uses to route queries to this plugin.
    #[serde(default = "default_trigger")]
    pub trigger: String,
    /// Path of the user-editable settings file (aliases and defaults).
    #[serde(default = "default_settings_path")]
    pub settings_path: PathBuf,
    /// Icon shown next to every result item.
    #[serde(default = "default_icon_url")]
    pub icon_url: String,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            trigger: default_trigger(),
            settings_path: default_settings_path(),
            icon_url: default_icon_url(),
        }
    }
}

fn default_trigger() -> String {
    "cc ".to_string()
}

fn default_settings_path() -> PathBuf {
    PathBuf::from("settings.json")
}

fn default_icon_url() -> String {
    "file:/usr/share/icons/elementary/apps/128/accessories-calculator.svg".to_string()
}

/// Exchange rate configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RatesConfig {
    /// Path of the reference rate file.
    #[serde(default = "default_rates_path")]
    pub path: PathBuf,
    /// How long a looked-up rate stays cached, in seconds.
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_secs: u64,
    /// Maximum number of currency pairs kept in the cache.
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: u64,
}

impl Default for RatesConfig {
    fn default() -> Self {
        Self {
            path: default_rates_path(),
            cache_ttl_secs: default_cache_ttl(),
            cache_capacity: default_cache_capacity(),
        }
    }
}

fn default_rates_path() -> PathBuf {
    PathBuf::from("rates.json")
}

fn default_cache_ttl() -> u64 {
    10800 // 3 hours
}

fn default_cache_capacity() -> u64 {
    1000
}

impl AppConfig {
    /// Loads configuration from the `config/` directory and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(Path::new("config"))
    }

    /// Loads configuration from `dir/default.*`, `dir/{RUN_MODE}.*` and
    /// `CAMBIO__`-prefixed environment variables, later sources winning.
    ///
    /// # Errors
    ///
    /// Returns an error if a present file cannot be parsed or a value has the wrong type.
    pub fn load_from(dir: &Path) -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let default_file = dir.join("default");
        let mode_file = dir.join(&run_mode);

        let config = config::Config::builder()
            .add_source(config::File::with_name(&default_file.to_string_lossy()).required(false))
            .add_source(config::File::with_name(&mode_file.to_string_lossy()).required(false))
            .add_source(config::Environment::with_prefix("CAMBIO").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENV_VARS: [&str; 4] = [
        "RUN_MODE",
        "CAMBIO__PLUGIN__TRIGGER",
        "CAMBIO__RATES__CACHE_TTL_SECS",
        "CAMBIO__RATES__PATH",
    ];

    fn cleared_env() -> Vec<(&'static str, Option<&'static str>)> {
        ENV_VARS.iter().map(|k| (*k, None)).collect()
    }

    #[test]
    fn test_defaults_without_sources() {
        let dir = tempfile::tempdir().unwrap();
        temp_env::with_vars(cleared_env(), || {
            let config = AppConfig::load_from(dir.path()).unwrap();
            assert_eq!(config.plugin.trigger, "cc ");
            assert_eq!(config.plugin.settings_path, PathBuf::from("settings.json"));
            assert_eq!(config.rates.path, PathBuf::from("rates.json"));
            assert_eq!(config.rates.cache_ttl_secs, 10800);
            assert_eq!(config.rates.cache_capacity, 1000);
        });
    }

    #[test]
    fn test_default_file_and_run_mode_overlay() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("default.toml"),
            "[plugin]\ntrigger = \"fx \"\n\n[rates]\ncache_ttl_secs = 60\n",
        )
        .unwrap();
        std::fs::write(
            dir.path().join("testing.toml"),
            "[rates]\ncache_ttl_secs = 5\n",
        )
        .unwrap();

        let mut vars = cleared_env();
        vars[0] = ("RUN_MODE", Some("testing"));
        temp_env::with_vars(vars, || {
            let config = AppConfig::load_from(dir.path()).unwrap();
            assert_eq!(config.plugin.trigger, "fx ");
            assert_eq!(config.rates.cache_ttl_secs, 5);
        });
    }

    #[test]
    fn test_environment_overrides_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("default.toml"),
            "[rates]\ncache_ttl_secs = 60\n",
        )
        .unwrap();

        let mut vars = cleared_env();
        vars[2] = ("CAMBIO__RATES__CACHE_TTL_SECS", Some("120"));
        vars[3] = ("CAMBIO__RATES__PATH", Some("/tmp/ecb.json"));
        temp_env::with_vars(vars, || {
            let config = AppConfig::load_from(dir.path()).unwrap();
            assert_eq!(config.rates.cache_ttl_secs, 120);
            assert_eq!(config.rates.path, PathBuf::from("/tmp/ecb.json"));
        });
    }

    #[test]
    fn test_wrong_type_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("default.toml"),
            "[rates]\ncache_ttl_secs = \"soon\"\n",
        )
        .unwrap();

        temp_env::with_vars(cleared_env(), || {
            assert!(AppConfig::load_from(dir.path()).is_err());
        });
    }
}
