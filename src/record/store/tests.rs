// fmm-mod-creator: FMM x MOD Creator build core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::*;
use crate::record::BuildInfo;
use crate::project::ModInfo;
use tempfile::TempDir;

fn record(name: &str, author: &str, build_time: &str) -> BuildRecord {
    BuildRecord {
        build_info: BuildInfo {
            build_time: build_time.to_string(),
            ..BuildInfo::default()
        },
        mod_info: ModInfo::new(name, "1.0", author),
        ..BuildRecord::default()
    }
}

fn names(store: &BuildRecordStore) -> Vec<String> {
    store
        .list_all()
        .into_iter()
        .map(|r| r.mod_info.name)
        .collect()
}

fn store_with(dir: &TempDir, records: &[BuildRecord]) -> BuildRecordStore {
    let store = BuildRecordStore::in_dir(dir.path());
    for r in records {
        store.append(r).unwrap();
    }
    store
}

#[test]
fn test_append_creates_array() {
    let dir = TempDir::new().unwrap();
    let store = BuildRecordStore::in_dir(&dir.path().join("cache"));

    assert_eq!(store.append(&record("A", "x", "2026-01-01T10:00:00")).unwrap(), 1);
    let first: Value = serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
    assert_eq!(first.as_array().unwrap().len(), 1);

    assert_eq!(store.append(&record("B", "y", "2026-01-02T10:00:00")).unwrap(), 2);
    let both: Value = serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
    assert_eq!(both[0], first[0]);
    assert_eq!(names(&store), ["A", "B"]);
}

#[test]
fn test_file_is_pretty_and_keeps_unicode() {
    let dir = TempDir::new().unwrap();
    let store = store_with(&dir, &[record("模组", "作者", "")]);
    let text = std::fs::read_to_string(store.path()).unwrap();
    assert!(text.starts_with("[\n  {\n    \"build_info\""));
    assert!(text.contains("\"name\": \"模组\""));
}

#[test]
fn test_missing_and_corrupt_files_read_as_empty() {
    let dir = TempDir::new().unwrap();
    let store = BuildRecordStore::in_dir(dir.path());
    assert!(store.list_all().is_empty());

    std::fs::write(store.path(), "{ broken").unwrap();
    assert!(store.list_all().is_empty());
    assert!(matches!(
        store.delete_by_index(0),
        Err(RecordError::Corrupt { .. })
    ));

    assert_eq!(store.append(&record("A", "x", "")).unwrap(), 1);
}

#[test]
fn test_single_object_is_one_element_array() {
    let dir = TempDir::new().unwrap();
    let store = BuildRecordStore::in_dir(dir.path());
    let single = serde_json::to_string(&record("Old", "x", "")).unwrap();
    std::fs::write(store.path(), single).unwrap();

    assert_eq!(names(&store), ["Old"]);
    assert_eq!(store.append(&record("New", "y", "")).unwrap(), 2);
    assert_eq!(names(&store), ["Old", "New"]);
}

#[test]
fn test_delete_by_index_preserves_order() {
    let dir = TempDir::new().unwrap();
    let store = store_with(
        &dir,
        &[record("A", "", ""), record("B", "", ""), record("C", "", "")],
    );

    let removed = store.delete_by_index(1).unwrap();

    assert_eq!(removed.mod_info.name, "B");
    assert_eq!(names(&store), ["A", "C"]);
    assert!(matches!(
        store.delete_by_index(2),
        Err(RecordError::IndexOutOfRange { index: 2, len: 2 })
    ));
}

#[test]
fn test_update_patches_only_given_fields() {
    let dir = TempDir::new().unwrap();
    let store = store_with(
        &dir,
        &[
            record("A", "x", "2026-01-01T10:00:00"),
            record("B", "y", "2026-01-02T10:00:00"),
        ],
    );

    let patch = ModInfoPatch {
        name: Some("B2".to_string()),
        category: Some("UI".to_string()),
        ..ModInfoPatch::default()
    };
    store
        .update_fields_by_match("2026-01-02T10:00:00", &patch)
        .unwrap();

    let records = store.list_all();
    assert_eq!(records[0].mod_info.name, "A");
    assert_eq!(records[1].mod_info.name, "B2");
    assert_eq!(records[1].mod_info.author, "y");
    assert_eq!(records[1].mod_info.category, "UI");

    let err = store
        .update_fields_by_match("1999-01-01T00:00:00", &patch)
        .unwrap_err();
    assert!(matches!(err, RecordError::RecordNotFound(_)));
}

#[test]
fn test_unknown_fields_survive_rewrites() {
    let dir = TempDir::new().unwrap();
    let store = BuildRecordStore::in_dir(dir.path());
    std::fs::write(
        store.path(),
        r#"[{"build_info": {"build_time": "t1"}, "mod_info": {"name": "A"}, "extra": {"k": 1}}]"#,
    )
    .unwrap();

    store
        .update_fields_by_match(
            "t1",
            &ModInfoPatch {
                author: Some("me".to_string()),
                ..ModInfoPatch::default()
            },
        )
        .unwrap();

    let raw: Value = serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
    assert_eq!(raw[0]["extra"]["k"], 1);
    assert_eq!(raw[0]["mod_info"]["author"], "me");
}

#[test]
fn test_sort_by_name_case_insensitive_and_stable() {
    let dir = TempDir::new().unwrap();
    let store = store_with(
        &dir,
        &[
            record("beta", "1", ""),
            record("Alpha", "2", ""),
            record("BETA", "3", ""),
        ],
    );

    store.sort(SortKey::Name, SortDirection::Ascending).unwrap();
    let authors: Vec<_> = store.list_all().into_iter().map(|r| r.mod_info.author).collect();
    assert_eq!(authors, ["2", "1", "3"]);

    store.sort(SortKey::Name, SortDirection::Descending).unwrap();
    let authors: Vec<_> = store.list_all().into_iter().map(|r| r.mod_info.author).collect();
    assert_eq!(authors, ["1", "3", "2"]);
}

#[test]
fn test_sort_by_date_unparseable_first() {
    let dir = TempDir::new().unwrap();
    let store = store_with(
        &dir,
        &[
            record("late", "", "2026-05-01T08:00:00.123456"),
            record("bad", "", "not a date"),
            record("early", "", "2025-12-31T23:59:59+02:00"),
        ],
    );

    store.sort(SortKey::Date, SortDirection::Ascending).unwrap();
    assert_eq!(names(&store), ["bad", "early", "late"]);

    store.sort(SortKey::Date, SortDirection::Descending).unwrap();
    assert_eq!(names(&store), ["late", "early", "bad"]);
}

#[test]
fn test_sort_key_parse() {
    assert_eq!("Author".parse::<SortKey>(), Ok(SortKey::Author));
    assert_eq!("date".parse::<SortKey>(), Ok(SortKey::Date));
    assert!("size".parse::<SortKey>().is_err());
}

#[test]
fn test_backup_and_import() {
    let dir = TempDir::new().unwrap();
    let store = store_with(&dir, &[record("A", "", ""), record("B", "", "")]);

    let backup = store.backup(&dir.path().join("backups")).unwrap();
    let file_name = backup.file_name().unwrap().to_string_lossy().into_owned();
    assert!(file_name.starts_with("FMMxMOD-Creator_build-record-"));
    assert!(file_name.ends_with(".zip"));

    let other = TempDir::new().unwrap();
    let restored = BuildRecordStore::in_dir(other.path());
    assert_eq!(restored.import(&backup).unwrap(), 2);
    assert_eq!(names(&restored), ["A", "B"]);
}

#[test]
fn test_backup_without_records() {
    let dir = TempDir::new().unwrap();
    let store = BuildRecordStore::in_dir(dir.path());
    assert!(matches!(
        store.backup(dir.path()),
        Err(RecordError::NoRecordFile(_))
    ));
}

#[test]
fn test_import_requires_root_entry() {
    let dir = TempDir::new().unwrap();
    let zip_path = dir.path().join("other.zip");
    let mut zip = ZipWriter::new(File::create(&zip_path).unwrap());
    zip.start_file("nested/FMMxMOD-Creator_build-record.json", SimpleFileOptions::default())
        .unwrap();
    zip.write_all(b"[]").unwrap();
    zip.finish().unwrap();

    let store = BuildRecordStore::in_dir(dir.path());
    assert!(matches!(
        store.import(&zip_path),
        Err(RecordError::MissingBackupEntry(_))
    ));
    assert!(!store.path().exists());
}

#[test]
fn test_parse_build_time() {
    assert!(parse_build_time("2026-01-02T03:04:05.123456").is_some());
    assert!(parse_build_time("2026-01-02T03:04:05").is_some());
    assert!(parse_build_time("2026-01-02T03:04:05Z").is_some());
    assert!(parse_build_time("yesterday").is_none());
}
