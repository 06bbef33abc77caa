//! Shared helpers for integration tests.
//!
//! The process working directory is global, so every test that changes it
//! takes `cwd_lock()` first and keeps a `WorkingDirGuard` alive to put it back.

#![allow(dead_code)]

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use gdext_bootstrap::request::submodule_name_from_url;
use gdext_bootstrap::{BootstrapError, CommandRunner, Result, ToolCommand};

static CWD_LOCK: Mutex<()> = Mutex::new(());

/// Serialize tests that touch the working directory
pub fn cwd_lock() -> MutexGuard<'static, ()> {
    CWD_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Create `<parent>/<name>` laid out as a Godot project
pub fn godot_project(parent: &Path, name: &str) -> PathBuf {
    let dir = parent.join(name);
    fs::create_dir_all(dir.join(".godot")).unwrap();
    fs::write(dir.join("project.godot"), "config_version=5\n").unwrap();
    dir
}

/// Stand-in for git/pip that records each command with the directory it ran in.
///
/// `git submodule add` creates the checkout directory so later steps can enter it.
#[derive(Debug, Default)]
pub struct FakeRunner {
    pub commands: Vec<(ToolCommand, PathBuf)>,
    /// Fail the first command whose rendered form contains this text
    pub fail_on: Option<&'static str>,
}

impl FakeRunner {
    pub fn failing_on(pattern: &'static str) -> Self {
        Self {
            commands: Vec::new(),
            fail_on: Some(pattern),
        }
    }

    /// Rendered command lines, in run order
    pub fn lines(&self) -> Vec<String> {
        self.commands.iter().map(|(cmd, _)| cmd.to_string()).collect()
    }
}

impl CommandRunner for FakeRunner {
    fn run(&mut self, command: &ToolCommand) -> Result<()> {
        self.commands.push((command.clone(), env::current_dir()?));

        let rendered = command.to_string();
        if self.fail_on.is_some_and(|pattern| rendered.contains(pattern)) {
            return Err(BootstrapError::CommandFailed {
                command: rendered,
                code: Some(1),
            });
        }

        if command.args.starts_with(&["submodule".to_string(), "add".to_string()]) {
            if let Some(url) = command.args.last() {
                let name = submodule_name_from_url(url)?;
                fs::create_dir_all(name)?;
                fs::write(Path::new(name).join("SConstruct"), "# bindings\n")?;
            }
        }

        Ok(())
    }
}
