//! Integration tests for project materialization.

use std::fs;

use ginforge_scaffold::{create_project, EntryKind, EntryStatus, ScaffoldError, DIRECTORIES, FILES};
use tempfile::tempdir;

#[test]
fn test_creates_full_skeleton() {
    let base = tempdir().unwrap();
    let result = create_project(base.path(), "shop").unwrap();

    assert!(result.success);
    assert!(result.failure.is_none());

    let root = base.path().join("shop");
    for dir in DIRECTORIES {
        assert!(root.join(dir).is_dir(), "missing directory {dir}");
    }
    for spec in &FILES {
        assert!(root.join(spec.rel_path).is_file(), "missing file {}", spec.rel_path);
    }

    // project root + 8 subdirectories + 7 files, in creation order
    assert_eq!(result.entries.len(), 1 + DIRECTORIES.len() + FILES.len());
    assert!(result
        .entries
        .iter()
        .all(|e| e.status == EntryStatus::Created));
}

#[test]
fn test_substitutes_project_name_everywhere() {
    let base = tempdir().unwrap();
    create_project(base.path(), "shop").unwrap();
    let root = base.path().join("shop");

    let app_ini = fs::read_to_string(root.join("conf/app.ini")).unwrap();
    assert!(app_ini.contains("app_name = shop"));

    let main_go = fs::read_to_string(root.join("main.go")).unwrap();
    assert!(main_go.contains("\"shop/model\""));
    assert!(main_go.contains("\"shop/routers\""));

    let controller = fs::read_to_string(root.join("controller/default.go")).unwrap();
    assert!(controller.contains("\"shop/model\""));

    let bootstrap = fs::read_to_string(root.join("config.go")).unwrap();
    assert!(bootstrap.contains("\"shop/model\""));
    assert!(bootstrap.contains("\"shop/service\""));

    // no placeholder survives rendering
    for spec in &FILES {
        let content = fs::read_to_string(root.join(spec.rel_path)).unwrap();
        assert!(!content.contains("{{"), "unrendered placeholder in {}", spec.rel_path);
    }
}

#[test]
fn test_backtick_placeholder_renders_to_backtick() {
    let base = tempdir().unwrap();
    create_project(base.path(), "shop").unwrap();
    let root = base.path().join("shop");

    let model = fs::read_to_string(root.join("model/res.go")).unwrap();
    assert!(model.contains("`json:\"ret\"`"));
    assert!(model.contains("`json:\"data\"`"));

    let bootstrap = fs::read_to_string(root.join("config.go")).unwrap();
    assert!(bootstrap.contains("`{\"filename\":\"logs/run.log\"}`"));
}

#[test]
fn test_rerun_is_idempotent_for_directories_and_overwrites_files() {
    let base = tempdir().unwrap();
    create_project(base.path(), "shop").unwrap();

    // Scribble over a generated file, then re-create.
    let main_go = base.path().join("shop/main.go");
    fs::write(&main_go, "garbage").unwrap();

    let result = create_project(base.path(), "shop").unwrap();
    assert!(result.success, "pre-existing directories must not fail: {:?}", result.failure);
    assert!(fs::read_to_string(&main_go).unwrap().contains("\"shop/routers\""));
}

#[test]
fn test_file_where_directory_expected_aborts_before_any_write() {
    let base = tempdir().unwrap();
    let root = base.path().join("shop");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("conf"), "not a directory").unwrap();

    let result = create_project(base.path(), "shop").unwrap();
    assert!(!result.success);

    let failed = result
        .entries
        .iter()
        .find(|e| e.status == EntryStatus::Failed)
        .expect("a step must be marked failed");
    assert_eq!(failed.path, root.join("conf"));
    assert_eq!(failed.kind, EntryKind::Directory);
    assert!(
        result.entries.last().unwrap().path == failed.path,
        "nothing may be attempted after the failed step"
    );
    assert!(result.failure.as_deref().unwrap().contains("conf"));

    // no file content was written anywhere
    for spec in &FILES {
        assert!(!root.join(spec.rel_path).exists(), "{} must not exist", spec.rel_path);
    }
}

#[test]
fn test_directory_where_file_expected_is_a_conflict() {
    let base = tempdir().unwrap();
    let root = base.path().join("shop");
    fs::create_dir_all(root.join("main.go")).unwrap();

    let result = create_project(base.path(), "shop").unwrap();
    assert!(!result.success);

    let failed = result.entries.last().unwrap();
    assert_eq!(failed.path, root.join("main.go"));
    assert_eq!(failed.kind, EntryKind::File);
    assert_eq!(failed.status, EntryStatus::Failed);

    // earlier files were written and stay on disk (no rollback)
    assert!(root.join("conf/app.ini").is_file());
    assert!(root.join("config.go").is_file());
}

#[test]
fn test_invalid_names_rejected_before_any_mutation() {
    let base = tempdir().unwrap();

    assert!(matches!(
        create_project(base.path(), ""),
        Err(ScaffoldError::EmptyName)
    ));
    assert!(matches!(
        create_project(base.path(), "../escape"),
        Err(ScaffoldError::InvalidName { .. })
    ));

    assert_eq!(
        fs::read_dir(base.path()).unwrap().count(),
        0,
        "rejection must not touch the filesystem"
    );
}

#[test]
fn test_rendering_is_deterministic_across_runs() {
    let first = tempdir().unwrap();
    let second = tempdir().unwrap();
    create_project(first.path(), "shop").unwrap();
    create_project(second.path(), "shop").unwrap();

    for spec in &FILES {
        let a = fs::read(first.path().join("shop").join(spec.rel_path)).unwrap();
        let b = fs::read(second.path().join("shop").join(spec.rel_path)).unwrap();
        assert_eq!(a, b, "{} differs between runs", spec.rel_path);
    }
}
