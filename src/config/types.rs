// fmm-mod-creator: FMM x MOD Creator build core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig (logging), BuildSettings (output/cache/format)
//! ArchiveFormat: zip (default) | rar | 7z
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::path::{Path, PathBuf};

use super::paths;
use crate::error::ConfigError;
use crate::logging::LogLevel;
use crate::record::store::RECORD_FILE_NAME;

/// Container format of the final build artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArchiveFormat {
    #[default]
    Zip,
    /// Written as a zip container and given the `.rar` extension.
    Rar,
    SevenZ,
}

impl ArchiveFormat {
    /// File extension without the leading dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Zip => "zip",
            Self::Rar => "rar",
            Self::SevenZ => "7z",
        }
    }

    /// Lenient parse used for stored settings: unknown or blank tags fall
    /// back to zip.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        tag.parse().unwrap_or_else(|_| {
            if !tag.trim().is_empty() {
                tracing::warn!(format = tag, "Unknown archive format, using zip");
            }
            Self::Zip
        })
    }
}

impl std::fmt::Display for ArchiveFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

impl std::str::FromStr for ArchiveFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "zip" => Ok(Self::Zip),
            "rar" => Ok(Self::Rar),
            "7z" => Ok(Self::SevenZ),
            _ => Err(ConfigError::InvalidValue {
                section: "build".to_string(),
                key: "archive_format".to_string(),
                message: format!("expected 'zip', 'rar', or '7z', got '{s}'"),
            }),
        }
    }
}

impl Serialize for ArchiveFormat {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.extension())
    }
}

impl<'de> Deserialize<'de> for ArchiveFormat {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from_tag(&tag))
    }
}

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Log level for console output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file.
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::DEBUG,
            log_file: None,
        }
    }
}

/// Settings consumed by the build pipeline.
///
/// Passed explicitly into the pipeline; nothing reads it from a global.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSettings {
    /// Where finished archives are moved to. Blank falls back to
    /// `output/` beside the executable.
    pub output_directory: Option<PathBuf>,
    /// Working directories, intermediate archives and the record file.
    pub cache_directory: Option<PathBuf>,
    /// Container format of the artifact.
    pub archive_format: ArchiveFormat,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            output_directory: Some(paths::default_output_directory()),
            cache_directory: Some(paths::default_cache_directory()),
            archive_format: ArchiveFormat::Zip,
        }
    }
}

impl BuildSettings {
    /// Settings rooted in explicit directories, used by tests and embedders.
    #[must_use]
    pub fn with_dirs(output: impl AsRef<Path>, cache: impl AsRef<Path>) -> Self {
        Self {
            output_directory: Some(output.as_ref().to_path_buf()),
            cache_directory: Some(cache.as_ref().to_path_buf()),
            archive_format: ArchiveFormat::Zip,
        }
    }

    #[must_use]
    pub const fn with_format(mut self, format: ArchiveFormat) -> Self {
        self.archive_format = format;
        self
    }

    /// Resolved output directory.
    #[must_use]
    pub fn output_dir(&self) -> PathBuf {
        non_blank(self.output_directory.as_deref())
            .map_or_else(paths::app_output_fallback, Path::to_path_buf)
    }

    /// Resolved cache directory.
    #[must_use]
    pub fn cache_dir(&self) -> PathBuf {
        non_blank(self.cache_directory.as_deref())
            .map_or_else(paths::default_cache_directory, Path::to_path_buf)
    }

    /// Location of the build-record JSON file.
    #[must_use]
    pub fn record_file(&self) -> PathBuf {
        self.cache_dir().join(RECORD_FILE_NAME)
    }
}

fn non_blank(path: Option<&Path>) -> Option<&Path> {
    path.filter(|p| !p.as_os_str().to_string_lossy().trim().is_empty())
}
