// fmm-mod-creator: FMM x MOD Creator build core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::*;
use crate::error::ValidationError;
use crate::project::{ContentBlock, CoverBlock, FileEntry, ModFileBlock, ModInfo};
use tempfile::TempDir;

fn project(root: &TempDir) -> ModProject {
    let payload = root.path().join("core.pak");
    std::fs::write(&payload, b"payload").unwrap();
    ModProject {
        mod_info: ModInfo::new("TestMod", "v1.0", "Dev"),
        cover: Some(CoverBlock::default()),
        blocks: vec![ContentBlock::ModFile(ModFileBlock {
            module_name: "Main".to_string(),
            files: vec![FileEntry::from_path(payload)],
            ..ModFileBlock::default()
        })],
    }
}

fn service(root: &TempDir) -> BuildService {
    BuildService::new(BuildSettings::with_dirs(
        root.path().join("out"),
        root.path().join("cache"),
    ))
}

#[tokio::test]
async fn test_successful_build_is_recorded() {
    let root = TempDir::new().unwrap();
    let service = service(&root);

    let handle = service.start(project(&root)).unwrap();
    let events = handle.events().clone();
    let outcome = handle.wait().await.unwrap();

    assert_eq!(outcome.output_path, root.path().join("out").join("TestMod.zip"));
    assert!(!service.is_running());

    let received: Vec<_> = events.drain().collect();
    assert_eq!(
        received.last(),
        Some(&BuildEvent::Completed(outcome.output_path.clone()))
    );

    let records = service.store().list_all();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].mod_info.name, "TestMod");
    assert_eq!(
        records[0].build_info.output_path,
        outcome.output_path.display().to_string()
    );
}

#[tokio::test]
async fn test_invalid_project_never_starts() {
    let root = TempDir::new().unwrap();
    let service = service(&root);
    let mut invalid = project(&root);
    invalid.cover = None;

    let err = service.start(invalid).err().unwrap();

    assert!(matches!(
        err,
        BuildError::Invalid(ValidationError::MissingCover)
    ));
    assert!(!service.is_running());
    assert!(!root.path().join("cache").exists());
}

#[tokio::test]
async fn test_second_start_is_rejected_while_running() {
    let root = TempDir::new().unwrap();
    let service = service(&root);
    service.running.store(true, Ordering::Release);

    let err = service.start(project(&root)).err().unwrap();
    assert!(matches!(err, BuildError::AlreadyRunning));

    service.running.store(false, Ordering::Release);
    let handle = service.start(project(&root)).unwrap();
    handle.wait().await.unwrap();
    assert!(!service.is_running());
}

#[tokio::test]
async fn test_builds_can_run_back_to_back() {
    let root = TempDir::new().unwrap();
    let service = service(&root);

    service.start(project(&root)).unwrap().wait().await.unwrap();
    service.start(project(&root)).unwrap().wait().await.unwrap();

    assert_eq!(service.store().list_all().len(), 2);
}

#[tokio::test]
async fn test_failure_is_reported_as_event() {
    let root = TempDir::new().unwrap();
    // A file where the cache directory should be makes the first stage fail.
    std::fs::write(root.path().join("cache"), b"").unwrap();
    let service = service(&root);

    let handle = service.start(project(&root)).unwrap();
    let events = handle.events().clone();
    let err = handle.wait().await.unwrap_err();

    assert!(matches!(err, BuildError::Io { .. }));
    let last = events.drain().last().unwrap();
    assert!(matches!(last, BuildEvent::Failed(_)));
    assert!(!service.is_running());
}
