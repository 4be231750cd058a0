// Tests for the directory scanner

use spotlight_excluder::marker::{ExclusionNames, MarkOutcome, Scanner, MARKER_FILE_NAME};
use std::fs;
use std::path::{Path, PathBuf};

fn names() -> ExclusionNames {
    ExclusionNames::from_names(["node_modules", "dist"])
}

fn marker(dir: &Path) -> PathBuf {
    dir.join(MARKER_FILE_NAME)
}

fn count_files(dir: &Path) -> usize {
    fs::read_dir(dir).unwrap().count()
}

#[test]
fn test_marks_matching_directory() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path().join("devA");
    let target = root.join("pkg/node_modules");
    fs::create_dir_all(&target).unwrap();
    fs::create_dir_all(root.join("pkg/src")).unwrap();

    let results = Scanner::new(names()).apply(&[&root]);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].path, target);
    assert!(matches!(results[0].outcome, MarkOutcome::Marked));
    assert!(marker(&target).is_file());
    assert_eq!(fs::metadata(marker(&target)).unwrap().len(), 0);
    assert_eq!(count_files(&target), 1);
    assert!(!marker(&root.join("pkg/src")).exists());
}

#[test]
fn test_second_run_reports_already_marked() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path().join("devA");
    let target = root.join("pkg/node_modules");
    fs::create_dir_all(&target).unwrap();

    let scanner = Scanner::new(names());
    let first = scanner.apply(&[&root]);
    let second = scanner.apply(&[&root]);

    assert!(matches!(first[0].outcome, MarkOutcome::Marked));
    assert_eq!(second.len(), 1);
    assert!(matches!(second[0].outcome, MarkOutcome::AlreadyMarked));
    assert_eq!(count_files(&target), 1);
}

#[test]
fn test_nested_match_is_pruned() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path();
    let outer = root.join("a/node_modules");
    let inner = outer.join("b/node_modules");
    fs::create_dir_all(&inner).unwrap();

    let results = Scanner::new(names()).apply(&[root]);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].path, outer);
    assert!(marker(&outer).exists());
    assert!(!marker(&inner).exists());
}

#[test]
fn test_dry_run_writes_nothing() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path();
    let fresh = root.join("web/dist");
    let done = root.join("api/node_modules");
    fs::create_dir_all(&fresh).unwrap();
    fs::create_dir_all(&done).unwrap();
    fs::write(marker(&done), b"").unwrap();

    let results = Scanner::new(names()).with_dry_run(true).apply(&[root.to_path_buf(), root.join("missing")]);

    assert_eq!(results.len(), 3);
    for result in &results {
        assert!(matches!(
            result.outcome,
            MarkOutcome::WouldMark | MarkOutcome::AlreadyMarked | MarkOutcome::SkippedMissing
        ));
    }
    assert!(!marker(&fresh).exists());
    assert_eq!(count_files(&fresh), 0);
}

#[test]
fn test_missing_root_does_not_stop_other_roots() {
    let temp = tempfile::tempdir().unwrap();
    let missing = temp.path().join("does-not-exist");
    let present = temp.path().join("present");
    fs::create_dir_all(present.join("dist")).unwrap();

    let results = Scanner::new(names()).apply(&[&missing, &present]);

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].path, missing);
    assert!(matches!(results[0].outcome, MarkOutcome::SkippedMissing));
    assert!(matches!(results[1].outcome, MarkOutcome::Marked));
    assert!(!missing.exists());
}

#[test]
fn test_relative_root_is_rejected() {
    let results = Scanner::new(names()).apply(&["relative/root"]);

    assert_eq!(results.len(), 1);
    assert!(results[0].outcome.is_warning());
}

#[test]
fn test_root_that_is_itself_a_match() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path().join("node_modules");
    fs::create_dir_all(root.join("dep/node_modules")).unwrap();

    let results = Scanner::new(names()).apply(&[&root]);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].path, root);
    assert!(marker(&root).exists());
    assert!(!marker(&root.join("dep/node_modules")).exists());
}

#[test]
fn test_files_with_matching_names_are_ignored() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path();
    fs::create_dir_all(root.join("pkg")).unwrap();
    fs::write(root.join("pkg/dist"), b"not a directory").unwrap();

    let results = Scanner::new(names()).apply(&[root]);

    assert!(results.is_empty());
}

#[test]
fn test_results_in_name_order() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path();
    for project in ["zeta", "alpha", "mid"] {
        fs::create_dir_all(root.join(project).join("dist")).unwrap();
    }

    let results = Scanner::new(names()).apply(&[root]);

    let paths: Vec<PathBuf> = results.into_iter().map(|r| r.path).collect();
    assert_eq!(
        paths,
        vec![root.join("alpha/dist"), root.join("mid/dist"), root.join("zeta/dist")]
    );
}

#[test]
fn test_duplicate_roots_are_walked_twice() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path();
    fs::create_dir_all(root.join("dist")).unwrap();

    let results = Scanner::new(names()).apply(&[root, root]);

    assert_eq!(results.len(), 2);
    assert!(matches!(results[0].outcome, MarkOutcome::Marked));
    assert!(matches!(results[1].outcome, MarkOutcome::AlreadyMarked));
}

#[cfg(unix)]
#[test]
fn test_symlinked_directories_are_not_followed() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path().join("root");
    let elsewhere = temp.path().join("elsewhere");
    fs::create_dir_all(elsewhere.join("node_modules")).unwrap();
    fs::create_dir_all(&root).unwrap();
    std::os::unix::fs::symlink(&elsewhere, root.join("link")).unwrap();

    let results = Scanner::new(names()).apply(&[&root]);

    assert!(results.is_empty());
    assert!(!marker(&elsewhere.join("node_modules")).exists());
}

#[cfg(unix)]
#[test]
fn test_unreadable_directory_warns_and_walk_continues() {
    use spotlight_excluder::marker::MarkerError;
    use std::os::unix::fs::PermissionsExt;

    let temp = tempfile::tempdir().unwrap();
    let root = temp.path();
    let locked = root.join("a/locked");
    fs::create_dir_all(locked.join("dist")).unwrap();
    fs::create_dir_all(root.join("b/dist")).unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Permission bits do not stop root
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let results = Scanner::new(names()).apply(&[root]);
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    let warnings: Vec<_> = results.iter().filter(|r| r.outcome.is_warning()).collect();
    assert_eq!(warnings.len(), 1);
    assert!(matches!(warnings[0].outcome, MarkOutcome::Warned(MarkerError::WalkFailed { .. })));
    assert!(results
        .iter()
        .any(|r| r.path == root.join("b/dist") && matches!(r.outcome, MarkOutcome::Marked)));
    assert!(!marker(&locked.join("dist")).exists());
}
