// fmm-mod-creator: FMM x MOD Creator build core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Platform default locations.
//!
//! ```text
//! output   <desktop>                          (UserDirs)
//! cache    <data_dir>/FMM x MOD Creator/.cache (BaseDirs)
//! settings <config_dir>/FMM x MOD Creator/app_config.json
//! fallback <exe dir>/output                   (blank output setting)
//! ```

use directories::{BaseDirs, UserDirs};
use std::path::PathBuf;

/// Application directory name under the per-user data/config roots.
pub const APP_NAME: &str = "FMM x MOD Creator";

/// File name of the persisted settings.
pub const SETTINGS_FILE_NAME: &str = "app_config.json";

/// The user's desktop, or `~/Desktop` when the platform does not report one.
#[must_use]
pub fn default_output_directory() -> PathBuf {
    UserDirs::new().map_or_else(
        || PathBuf::from("."),
        |dirs| {
            dirs.desktop_dir()
                .map_or_else(|| dirs.home_dir().join("Desktop"), PathBuf::from)
        },
    )
}

#[must_use]
pub fn default_cache_directory() -> PathBuf {
    BaseDirs::new().map_or_else(
        || PathBuf::from(".cache"),
        |dirs| dirs.data_dir().join(APP_NAME).join(".cache"),
    )
}

#[must_use]
pub fn default_settings_file() -> PathBuf {
    BaseDirs::new().map_or_else(
        || PathBuf::from(SETTINGS_FILE_NAME),
        |dirs| dirs.config_dir().join(APP_NAME).join(SETTINGS_FILE_NAME),
    )
}

/// `output/` next to the running executable.
#[must_use]
pub fn app_output_fallback() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("output")))
        .unwrap_or_else(|| PathBuf::from("output"))
}
