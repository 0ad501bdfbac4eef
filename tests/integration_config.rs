// fmm-mod-creator: FMM x MOD Creator build core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for configuration loading.
//!
//! Tests layering of saved settings, TOML files and overrides.

use std::path::PathBuf;

use fmm_mod_creator::config::Config;
use fmm_mod_creator::config::loader::ConfigLoader;
use fmm_mod_creator::config::store::{JsonSettingsStore, SettingsStore};
use fmm_mod_creator::config::types::{ArchiveFormat, BuildSettings};
use tempfile::TempDir;

fn saved_settings(dir: &TempDir) -> JsonSettingsStore {
    let store = JsonSettingsStore::new(dir.path().join("app_config.json"));
    let mut config = Config::default();
    config.build = BuildSettings::with_dirs("/saved/out", "/saved/cache").with_format(ArchiveFormat::Rar);
    store.save(&config).unwrap();
    store
}

// =============================================================================
// Layering
// =============================================================================

#[test]
fn config_saved_settings_are_the_base_layer() {
    let dir = TempDir::new().unwrap();
    let store = saved_settings(&dir);

    let config = ConfigLoader::new()
        .add_json_file_optional(store.path())
        .build()
        .unwrap();

    assert_eq!(config.build.archive_format, ArchiveFormat::Rar);
    assert_eq!(config.build.output_dir(), PathBuf::from("/saved/out"));
}

#[test]
fn config_toml_overrides_saved_settings() {
    let dir = TempDir::new().unwrap();
    let store = saved_settings(&dir);
    let toml = dir.path().join("fmmc.toml");
    std::fs::write(&toml, "[build]\narchive_format = \"7z\"\n").unwrap();

    let loader = ConfigLoader::new()
        .add_json_file_optional(store.path())
        .add_toml_file_optional(&toml);
    assert_eq!(loader.loaded_files().len(), 2);
    let config = loader.build().unwrap();

    assert_eq!(config.build.archive_format, ArchiveFormat::SevenZ);
    assert_eq!(config.build.cache_dir(), PathBuf::from("/saved/cache"));
}

#[test]
fn config_set_beats_every_file() {
    let dir = TempDir::new().unwrap();
    let store = saved_settings(&dir);

    let config = ConfigLoader::new()
        .add_json_file_optional(store.path())
        .add_toml_str("[build]\noutput_directory = \"/toml/out\"")
        .set("build.output_directory", "/cli/out")
        .unwrap()
        .set("global.output_log_level", "5")
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.build.output_dir(), PathBuf::from("/cli/out"));
    assert_eq!(config.global.output_log_level.as_u8(), 5);
}

#[test]
fn config_missing_required_file_fails() {
    let dir = TempDir::new().unwrap();
    let result = ConfigLoader::new()
        .add_toml_file(dir.path().join("absent.toml"))
        .build();
    assert!(result.is_err());
}

// =============================================================================
// Settings store
// =============================================================================

#[test]
fn config_saved_file_is_readable_json() {
    let dir = TempDir::new().unwrap();
    let store = saved_settings(&dir);

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();

    assert_eq!(raw["build"]["archive_format"], "rar");
    assert_eq!(raw["build"]["output_directory"], "/saved/out");
    assert_eq!(raw["global"]["output_log_level"], 3);
}

#[test]
fn config_reset_restores_defaults() {
    let dir = TempDir::new().unwrap();
    let store = saved_settings(&dir);

    store.reset().unwrap();

    let config = store.load().unwrap();
    assert_eq!(config.build.archive_format, ArchiveFormat::Zip);
}
