//! Working directory restoration
//!
//! `WorkingDirGuard` and the submodule step must leave the process where they
//! found it on every exit path.

mod common;

use std::env;
use std::fs;
use std::panic;
use std::path::Path;

use common::{cwd_lock, FakeRunner};
use gdext_bootstrap::vcs::vendor_bindings;
use gdext_bootstrap::{BootstrapError, BootstrapRequest, Result, WorkingDirGuard};
use tempfile::TempDir;

fn scratch() -> (TempDir, std::path::PathBuf) {
    let tmp = TempDir::new().unwrap();
    let inner = tmp.path().join("inner");
    fs::create_dir(&inner).unwrap();
    let inner = inner.canonicalize().unwrap();
    (tmp, inner)
}

#[test]
fn test_guard_restores_on_drop() {
    let _lock = cwd_lock();
    let (_tmp, inner) = scratch();
    let original = env::current_dir().unwrap();

    {
        let guard = WorkingDirGuard::change_to(&inner).unwrap();
        assert_eq!(guard.previous(), original);
        assert_eq!(env::current_dir().unwrap(), inner);
    }

    assert_eq!(env::current_dir().unwrap(), original);
}

#[test]
fn test_guard_explicit_restore() {
    let _lock = cwd_lock();
    let (_tmp, inner) = scratch();
    let original = env::current_dir().unwrap();

    let guard = WorkingDirGuard::change_to(&inner).unwrap();
    guard.restore().unwrap();

    assert_eq!(env::current_dir().unwrap(), original);
}

#[test]
fn test_guard_failed_change_leaves_directory() {
    let _lock = cwd_lock();
    let (tmp, _inner) = scratch();
    let original = env::current_dir().unwrap();

    let result = WorkingDirGuard::change_to(tmp.path().join("does-not-exist"));
    assert!(matches!(result, Err(BootstrapError::Io(_))));
    assert_eq!(env::current_dir().unwrap(), original);
}

fn fails_inside(dir: &Path) -> Result<()> {
    let _guard = WorkingDirGuard::change_to(dir)?;
    Err(BootstrapError::invalid_request("early return"))
}

#[test]
fn test_guard_restores_on_early_return() {
    let _lock = cwd_lock();
    let (_tmp, inner) = scratch();
    let original = env::current_dir().unwrap();

    assert!(fails_inside(&inner).is_err());
    assert_eq!(env::current_dir().unwrap(), original);
}

#[test]
fn test_guard_restores_on_panic() {
    let _lock = cwd_lock();
    let (_tmp, inner) = scratch();
    let original = env::current_dir().unwrap();

    let result = panic::catch_unwind(|| {
        let _guard = WorkingDirGuard::change_to(&inner).unwrap();
        panic!("step blew up");
    });

    assert!(result.is_err());
    assert_eq!(env::current_dir().unwrap(), original);
}

#[test]
fn test_vendor_bindings_restores_directory() {
    let _lock = cwd_lock();
    let (_tmp, project) = scratch();
    let _restore = WorkingDirGuard::change_to(&project).unwrap();
    let request = BootstrapRequest::new(&project, "4.2", None).unwrap();

    // Success path
    let mut runner = FakeRunner::default();
    let dir = vendor_bindings(&mut runner, "git", &request).unwrap();
    assert_eq!(dir, Path::new("godot-cpp"));
    assert_eq!(env::current_dir().unwrap(), project);
    assert_eq!(runner.commands[1].1, project.join("godot-cpp"));

    // Failure inside the checkout
    let mut runner = FakeRunner::failing_on("submodule update");
    let err = vendor_bindings(&mut runner, "git", &request).unwrap_err();
    assert!(matches!(err, BootstrapError::CommandFailed { .. }));
    assert_eq!(env::current_dir().unwrap(), project);
}

#[test]
fn test_vendor_bindings_add_failure_never_changes_directory() {
    let _lock = cwd_lock();
    let (_tmp, project) = scratch();
    let _restore = WorkingDirGuard::change_to(&project).unwrap();
    let request = BootstrapRequest::new(&project, "4.2", None).unwrap();

    let mut runner = FakeRunner::failing_on("submodule add");
    assert!(vendor_bindings(&mut runner, "git", &request).is_err());
    assert_eq!(runner.commands.len(), 1);
    assert_eq!(env::current_dir().unwrap(), project);
}
