// fmm-mod-creator: FMM x MOD Creator build core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults (desktop output, per-user cache, zip)
//! 2. saved settings (app_config.json, written by `config set`)
//! 3. local fmmc.toml (cwd)
//! 4. --config
//! 5. FMMC_* env vars
//! 6. CLI overrides (--output, --cache, --format)
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! FMMC_BUILD__ARCHIVE_FORMAT=7z        → build.archive_format = "7z"
//! FMMC_BUILD__OUTPUT_DIRECTORY=/out    → build.output_directory = "/out"
//! FMMC_GLOBAL__OUTPUT_LOG_LEVEL=4      → global.output_log_level = 4
//! ```

pub mod loader;
pub mod paths;
pub mod store;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
use types::{ArchiveFormat, BuildSettings, GlobalConfig};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging options.
    pub global: GlobalConfig,
    /// Build pipeline settings.
    pub build: BuildSettings,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use fmm_mod_creator::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("fmmc.toml")
    ///     .with_env_prefix("FMMC")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Updates one user-facing build setting by key.
    ///
    /// Keys accept an optional `build.` prefix and either `_` or `-`
    /// separators (`output-directory`, `build.archive_format`).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownKey` for unsupported keys and
    /// `ConfigError::InvalidValue` for an unknown archive format.
    pub fn set_setting(&mut self, key: &str, value: &str) -> std::result::Result<(), ConfigError> {
        let normalized = key.trim().trim_start_matches("build.").replace('-', "_");
        match normalized.as_str() {
            "output_directory" => self.build.output_directory = Some(PathBuf::from(value)),
            "cache_directory" => self.build.cache_directory = Some(PathBuf::from(value)),
            "archive_format" => self.build.archive_format = value.parse::<ArchiveFormat>()?,
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let fmt = |p: &Option<PathBuf>| {
            p.as_ref()
                .map_or_else(String::new, |p| p.display().to_string())
        };

        let mut options = BTreeMap::new();
        options.insert(
            "global.output_log_level",
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level",
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert("global.log_file", fmt(&self.global.log_file));
        options.insert("build.output_directory", fmt(&self.build.output_directory));
        options.insert("build.cache_directory", fmt(&self.build.cache_directory));
        options.insert(
            "build.archive_format",
            self.build.archive_format.to_string(),
        );
        options.insert(
            "build.record_file",
            self.build.record_file().display().to_string(),
        );

        let max_key_len = options.keys().map(|k| k.len()).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
