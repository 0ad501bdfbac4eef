// fmm-mod-creator: FMM x MOD Creator build core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::*;
use crate::project::{ModFileBlock, WarningBlock};
use tempfile::TempDir;

fn module(name: &str) -> ContentBlock {
    ContentBlock::ModFile(ModFileBlock {
        module_name: name.to_string(),
        ..ModFileBlock::default()
    })
}

fn read_ini(dir: &Path) -> String {
    fs::read_to_string(dir.join("modinfo.ini")).unwrap()
}

#[test]
fn test_positional_numbering() {
    let blocks = vec![
        ContentBlock::Warning(WarningBlock::default()),
        ContentBlock::separator("Core"),
        module("Textures"),
    ];
    insta::assert_debug_snapshot!(plan_folders(&blocks), @r#"
    [
        "00-cover",
        "01-warning",
        "02-separator-Core",
        "03-Textures",
    ]
    "#);
}

#[test]
fn test_blank_and_unsafe_names() {
    let blocks = vec![
        ContentBlock::separator("   "),
        module(""),
        module(" a/b\\c "),
        ContentBlock::separator(" Phase 1 "),
    ];
    assert_eq!(
        plan_folders(&blocks)[1..],
        [
            "01-separator-separator",
            "02-module",
            "03-a_b_c",
            "04-separator-Phase 1"
        ]
    );
}

#[test]
fn test_banners() {
    let banners: Vec<_> = [
        ContentBlock::Warning(WarningBlock::default()),
        ContentBlock::separator("Core"),
        module("Textures"),
    ]
    .iter()
    .enumerate()
    .map(|(i, b)| content_plan(i + 1, b).banner)
    .collect();
    insta::assert_debug_snapshot!(banners, @r#"
    [
        "01 --------------Warning--------------",
        "02 ----------------Separator Core----------------",
        "03 Textures",
    ]
    "#);
    assert_eq!(cover_plan().banner, "00 --------------Cover--------------");
}

#[test]
fn test_write_cover_with_image() {
    let src = TempDir::new().unwrap();
    let root = TempDir::new().unwrap();
    let image = src.path().join("art.PNG");
    fs::write(&image, b"png").unwrap();

    let cover = CoverBlock {
        image_path: Some(image),
        description: "Hello".to_string(),
        cover_tag: String::new(),
    };
    let dir = write_cover(root.path(), &cover, &ModInfo::new("M", "1", "A")).unwrap();

    assert_eq!(dir, root.path().join("00-cover"));
    assert!(dir.join("cover.PNG").is_file());
    let ini = read_ini(&dir);
    assert!(ini.contains("screenshot=cover.PNG\n"));
    assert!(ini.contains("description=Hello\n"));
}

#[test]
fn test_write_cover_without_image() {
    let root = TempDir::new().unwrap();
    let dir = write_cover(root.path(), &CoverBlock::default(), &ModInfo::new("M", "1", "A")).unwrap();
    assert!(read_ini(&dir).contains("screenshot=\n"));
}

#[test]
fn test_write_blocks_copies_payload() {
    let src = TempDir::new().unwrap();
    let root = TempDir::new().unwrap();
    fs::write(src.path().join("core.pak"), b"pak").unwrap();
    fs::create_dir_all(src.path().join("textures/ui")).unwrap();
    fs::write(src.path().join("textures/ui/a.dds"), b"dds").unwrap();
    fs::write(src.path().join("shot.jpg"), b"jpg").unwrap();

    let blocks = vec![
        ContentBlock::separator("Core"),
        ContentBlock::ModFile(ModFileBlock {
            module_name: "Main".to_string(),
            image_path: Some(src.path().join("shot.jpg")),
            description: "Main files".to_string(),
            files: vec![
                FileEntry {
                    source_path: src.path().join("core.pak"),
                    display_name: "renamed.pak".to_string(),
                },
                FileEntry::from_path(src.path().join("textures")),
            ],
            ..ModFileBlock::default()
        }),
    ];

    let dirs = write_blocks(root.path(), &blocks, &ModInfo::new("M", "1", "A")).unwrap();
    assert_eq!(dirs.len(), 2);

    let separator = read_ini(&dirs[0]);
    assert!(separator.contains("description=This is a separator.\n"));

    let main = &dirs[1];
    assert_eq!(fs::read(main.join("renamed.pak")).unwrap(), b"pak");
    assert_eq!(fs::read(main.join("textures/ui/a.dds")).unwrap(), b"dds");
    assert!(main.join("screenshot.jpg").is_file());
    assert!(read_ini(main).contains("name=02 Main\n"));
}

#[test]
fn test_missing_payload_is_skipped() {
    let root = TempDir::new().unwrap();
    let blocks = vec![ContentBlock::ModFile(ModFileBlock {
        files: vec![FileEntry::from_path("/nonexistent/file.pak")],
        image_path: Some(PathBuf::from("/nonexistent/shot.png")),
        ..ModFileBlock::default()
    })];
    let dirs = write_blocks(root.path(), &blocks, &ModInfo::new("M", "1", "A")).unwrap();
    let entries: Vec<_> = fs::read_dir(&dirs[0]).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn test_io_failure_names_path() {
    let root = TempDir::new().unwrap();
    // A file where the folder should go.
    fs::write(root.path().join("01-warning"), b"").unwrap();
    let err = write_blocks(
        root.path(),
        &[ContentBlock::Warning(WarningBlock::default())],
        &ModInfo::new("M", "1", "A"),
    )
    .unwrap_err();
    assert!(
        matches!(err, BuildError::Io { ref path, .. } if path.ends_with("01-warning")),
        "{err}"
    );
}

#[test]
fn test_dot_display_names_stay_inside_module() {
    let src = TempDir::new().unwrap();
    let root = TempDir::new().unwrap();
    fs::write(src.path().join("core.pak"), b"pak").unwrap();
    fs::write(src.path().join("extra.pak"), b"extra").unwrap();

    let blocks = vec![ContentBlock::ModFile(ModFileBlock {
        module_name: "Main".to_string(),
        files: vec![
            FileEntry {
                source_path: src.path().join("core.pak"),
                display_name: "..".to_string(),
            },
            FileEntry {
                source_path: src.path().join("extra.pak"),
                display_name: " . ".to_string(),
            },
        ],
        ..ModFileBlock::default()
    })];

    let dirs = write_blocks(root.path(), &blocks, &ModInfo::new("M", "1", "A")).unwrap();

    assert_eq!(fs::read(dirs[0].join("core.pak")).unwrap(), b"pak");
    assert_eq!(fs::read(dirs[0].join("extra.pak")).unwrap(), b"extra");
    assert!(!root.path().join("core.pak").exists());
}
