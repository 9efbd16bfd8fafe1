//! Shared settings snapshot with atomic reload.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use std::time::SystemTime;

use cambio_core::settings::{ConfigError, ConfigStore, Settings};
use tracing::{info, warn};

/// Holds the current settings snapshot and swaps it on reload.
///
/// Readers clone the inner `Arc`, so a query being handled keeps the
/// snapshot it started with even if a reload happens meanwhile.
#[derive(Debug)]
pub struct SettingsHandle {
    path: Option<PathBuf>,
    current: RwLock<Arc<Settings>>,
    loaded_modified: Mutex<Option<SystemTime>>,
}

impl SettingsHandle {
    /// Loads the settings file at `path`, falling back to the built-in
    /// settings if it is missing or invalid.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let modified = modified_time(&path);
        let settings = ConfigStore::load_or_default(&path);

        Self {
            path: Some(path),
            current: RwLock::new(Arc::new(settings)),
            loaded_modified: Mutex::new(modified),
        }
    }

    /// Wraps fixed settings that are not backed by a file.
    #[must_use]
    pub fn fixed(settings: Settings) -> Self {
        Self {
            path: None,
            current: RwLock::new(Arc::new(settings)),
            loaded_modified: Mutex::new(None),
        }
    }

    /// Path of the backing settings file, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Returns the current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Settings> {
        let current = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*current)
    }

    /// Replaces the current snapshot as a whole.
    pub fn replace(&self, settings: Settings) {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(settings);
    }

    /// Re-reads the settings file.
    ///
    /// A missing file resets to the built-in settings. An invalid file keeps
    /// the current snapshot.
    ///
    /// # Errors
    ///
    /// Returns the load error if the file exists but cannot be used.
    pub fn reload(&self) -> Result<(), ConfigError> {
        let Some(path) = self.path.as_deref() else {
            return Ok(());
        };

        *self
            .loaded_modified
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = modified_time(path);

        match ConfigStore::load(path) {
            Ok(settings) => {
                self.replace(settings);
                Ok(())
            }
            Err(ConfigError::NotFound(_)) => {
                info!(path = %path.display(), "Settings file removed, using built-in defaults");
                self.replace(Settings::default());
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, path = %path.display(), "Keeping previous settings");
                Err(e)
            }
        }
    }

    /// Reloads only if the file's modification time changed since the last
    /// load. Returns whether a reload happened.
    ///
    /// # Errors
    ///
    /// Returns the load error if the changed file cannot be used.
    pub fn reload_if_changed(&self) -> Result<bool, ConfigError> {
        let Some(path) = self.path.as_deref() else {
            return Ok(false);
        };

        let modified = modified_time(path);
        let unchanged = *self
            .loaded_modified
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            == modified;
        if unchanged {
            return Ok(false);
        }

        self.reload()?;
        Ok(true)
    }
}

fn modified_time(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|m| m.modified()).ok()
}
