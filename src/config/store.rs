// fmm-mod-creator: FMM x MOD Creator build core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings persistence port.
//!
//! ```text
//! SettingsStore
//!   JsonSettingsStore    app_config.json on disk (settings UI / `config set`)
//!   MemorySettingsStore  in-process, for tests and embedders
//! ```

use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use super::Config;
use super::loader::ConfigLoader;
use super::paths;
use crate::error::ConfigError;

/// Load and save the user-editable settings.
pub trait SettingsStore: Send + Sync {
    /// Loads the saved settings, or defaults when nothing was saved yet.
    ///
    /// # Errors
    ///
    /// Returns an error if saved settings exist but cannot be parsed.
    fn load(&self) -> Result<Config, ConfigError>;

    /// Persists the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings cannot be written.
    fn save(&self, config: &Config) -> Result<(), ConfigError>;
}

/// Settings stored as a pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct JsonSettingsStore {
    path: PathBuf,
}

impl JsonSettingsStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the per-user configuration location.
    #[must_use]
    pub fn default_location() -> Self {
        Self::new(paths::default_settings_file())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Removes the saved settings so defaults apply again.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be removed.
    pub fn reset(&self) -> Result<(), ConfigError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.store_error(e)),
        }
    }

    fn store_error(&self, err: impl std::fmt::Display) -> ConfigError {
        ConfigError::Store {
            path: self.path.clone(),
            message: err.to_string(),
        }
    }
}

impl SettingsStore for JsonSettingsStore {
    fn load(&self) -> Result<Config, ConfigError> {
        if !self.path.exists() {
            return Ok(Config::default());
        }
        ConfigLoader::new()
            .add_json_file(&self.path)
            .build()
            .map_err(|e| ConfigError::ParseError {
                message: format!("{}: {e:#}", self.path.display()),
            })
    }

    fn save(&self, config: &Config) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| self.store_error(e))?;
        }
        let json = serde_json::to_string_pretty(config).map_err(|e| self.store_error(e))?;
        std::fs::write(&self.path, json).map_err(|e| self.store_error(e))?;
        tracing::debug!(path = %self.path.display(), "Settings saved");
        Ok(())
    }
}

/// Settings held in memory only.
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    config: Mutex<Config>,
}

impl MemorySettingsStore {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config: Mutex::new(config),
        }
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self) -> Result<Config, ConfigError> {
        Ok(self
            .config
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn save(&self, config: &Config) -> Result<(), ConfigError> {
        *self.config.lock().unwrap_or_else(PoisonError::into_inner) = config.clone();
        Ok(())
    }
}
