// fmm-mod-creator: FMM x MOD Creator build core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::*;
use crate::project::{ContentBlock, CoverBlock, FileEntry, ModFileBlock, ModInfo};
use chrono::TimeZone;
use tempfile::TempDir;

struct Fixture {
    _root: TempDir,
    settings: BuildSettings,
    project: ModProject,
}

fn fixture() -> Fixture {
    let root = TempDir::new().unwrap();
    let payload = root.path().join("core.pak");
    std::fs::write(&payload, b"payload").unwrap();
    let settings = BuildSettings::with_dirs(root.path().join("out"), root.path().join("cache"));
    let project = ModProject {
        mod_info: ModInfo::new("TestMod", "v1.0", "Dev"),
        cover: Some(CoverBlock::default()),
        blocks: vec![
            ContentBlock::separator("Core"),
            ContentBlock::ModFile(ModFileBlock {
                module_name: "Main".to_string(),
                files: vec![FileEntry::from_path(payload)],
                ..ModFileBlock::default()
            }),
        ],
    };
    Fixture {
        _root: root,
        settings,
        project,
    }
}

#[test]
fn test_checkpoints() {
    let checkpoints: Vec<_> = BuildStage::SEQUENCE
        .iter()
        .filter_map(|s| s.checkpoint())
        .collect();
    assert_eq!(checkpoints, [10, 20, 40, 70, 90, 100]);
    assert_eq!(BuildStage::Idle.checkpoint(), None);
    assert!(BuildStage::Failed.is_terminal());
}

#[test]
fn test_stage_tokens() {
    let tokens: Vec<_> = BuildStage::SEQUENCE.iter().map(ToString::to_string).collect();
    insta::assert_debug_snapshot!(tokens, @r#"
    [
        "creating_temp_dir",
        "creating_cover_folder",
        "creating_block_folders",
        "creating_archive_file",
        "moving_to_output",
        "build_completed",
    ]
    "#);
}

#[test]
fn test_temp_dir_name() {
    let at = Local.with_ymd_and_hms(2026, 3, 9, 7, 5, 59).unwrap();
    assert_eq!(temp_dir_name(" My/Mod ", &at), "My_Mod-20260309_0705");
}

#[test]
fn test_run_emits_stages_in_order() {
    let fx = fixture();
    let (tx, rx) = flume::unbounded();

    let outcome = run(&fx.project, &fx.settings, &tx).unwrap();
    drop(tx);

    let events: Vec<_> = rx.iter().collect();
    let expected: Vec<_> = BuildStage::SEQUENCE
        .iter()
        .flat_map(|&s| {
            [
                BuildEvent::Status(s),
                BuildEvent::Progress(s.checkpoint().unwrap()),
            ]
        })
        .collect();
    assert_eq!(events, expected);

    assert_eq!(outcome.output_path, fx.settings.output_dir().join("TestMod.zip"));
    assert!(outcome.output_path.is_file());
    assert!(outcome.temp_dir.join("00-cover/modinfo.ini").is_file());
    assert!(outcome.temp_dir.join("01-separator-Core").is_dir());
    assert!(outcome.temp_dir.join("02-Main/core.pak").is_file());
    // Moved, not copied.
    let leftover = fx.settings.cache_dir().join(format!(
        "{}.zip",
        outcome.temp_dir.file_name().unwrap().to_string_lossy()
    ));
    assert!(!leftover.exists());
}

#[test]
fn test_run_overwrites_existing_artifact() {
    let fx = fixture();
    let out = fx.settings.output_dir();
    std::fs::create_dir_all(&out).unwrap();
    std::fs::write(out.join("TestMod.zip"), b"stale").unwrap();

    let (tx, _rx) = flume::unbounded();
    let outcome = run(&fx.project, &fx.settings, &tx).unwrap();

    let bytes = std::fs::read(outcome.output_path).unwrap();
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn test_run_rejects_invalid_project() {
    let mut fx = fixture();
    fx.project.cover = None;
    let (tx, rx) = flume::unbounded();

    let err = run(&fx.project, &fx.settings, &tx).unwrap_err();

    assert!(matches!(err, BuildError::Invalid(ValidationError::MissingCover)));
    drop(tx);
    assert_eq!(rx.iter().count(), 0);
    assert!(!fx.settings.cache_dir().exists());
}

#[test]
fn test_failure_keeps_partial_output() {
    let fx = fixture();
    // Output "directory" is a file, so relocation fails.
    std::fs::create_dir_all(fx.settings.output_dir().parent().unwrap()).unwrap();
    std::fs::write(fx.settings.output_dir(), b"").unwrap();
    let (tx, rx) = flume::unbounded();

    let err = run(&fx.project, &fx.settings, &tx).unwrap_err();
    drop(tx);

    assert!(matches!(err, BuildError::Io { operation: "create directory", .. }));
    let events: Vec<_> = rx.iter().collect();
    assert_eq!(events.last(), Some(&BuildEvent::Progress(90)));

    let cache_entries: Vec<_> = std::fs::read_dir(fx.settings.cache_dir())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert!(cache_entries.iter().any(|n| n.ends_with(".zip")));
    assert!(cache_entries.iter().any(|n| n.starts_with("TestMod-") && !n.ends_with(".zip")));
}

#[test]
fn test_rebuild_starts_from_clean_working_directory() {
    let mut fx = fixture();
    let (tx, _rx) = flume::unbounded();
    let rename = |project: &mut ModProject, name: &str| {
        if let ContentBlock::ModFile(module) = &mut project.blocks[1] {
            module.module_name = name.to_string();
        }
    };

    rename(&mut fx.project, "Alpha");
    let first = run(&fx.project, &fx.settings, &tx).unwrap();
    rename(&mut fx.project, "Beta");
    let second = run(&fx.project, &fx.settings, &tx).unwrap();

    assert!(first.output_path.is_file());
    assert!(!second.temp_dir.join("02-Alpha").exists());

    let mut archive =
        zip::ZipArchive::new(std::fs::File::open(&second.output_path).unwrap()).unwrap();
    let mut names: Vec<_> = (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .filter(|n| !n.ends_with('/'))
        .collect();
    names.sort();
    insta::assert_debug_snapshot!(names, @r#"
    [
        "00-cover/modinfo.ini",
        "01-separator-Core/modinfo.ini",
        "02-Beta/core.pak",
        "02-Beta/modinfo.ini",
    ]
    "#);
}
