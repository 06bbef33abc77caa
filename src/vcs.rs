//! Version control steps: repository init and godot-cpp submodule vendoring.
//!
//! Both steps run in the process's current directory, which the pipeline has
//! already moved into the project root.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::command_runner::{CommandRunner, ToolCommand};
use crate::error::Result;
use crate::request::BootstrapRequest;
use crate::workdir::WorkingDirGuard;

/// `git init`
pub fn init_command(git: &str) -> ToolCommand {
    ToolCommand::new(git, ["init"])
}

/// `git submodule add -b <version> -- <url>`
///
/// `--` keeps a user-supplied URL from being parsed as a git option.
pub fn submodule_add_command(git: &str, request: &BootstrapRequest) -> ToolCommand {
    ToolCommand::new(
        git,
        [
            "submodule",
            "add",
            "-b",
            request.godot_version(),
            "--",
            request.godot_repo_url(),
        ],
    )
}

/// `git submodule update --init`, run inside the bindings checkout
pub fn submodule_update_command(git: &str) -> ToolCommand {
    ToolCommand::new(git, ["submodule", "update", "--init"])
}

/// Initialize a repository in the current directory.
///
/// Re-running on an existing repository is left to git, which reinitializes
/// without touching history.
pub fn init_repository(runner: &mut dyn CommandRunner, git: &str) -> Result<()> {
    runner.run(&init_command(git))
}

/// Add the bindings repository as a submodule and pull its nested submodules.
///
/// Returns the submodule directory relative to the project root. An existing,
/// non-empty checkout is reused rather than re-added. The working directory is
/// restored after the nested update whether it succeeds or not.
pub fn vendor_bindings(
    runner: &mut dyn CommandRunner,
    git: &str,
    request: &BootstrapRequest,
) -> Result<PathBuf> {
    let submodule_dir = PathBuf::from(request.submodule_name());

    if is_populated_dir(&submodule_dir) {
        info!(
            "Submodule directory {} already populated, skipping add",
            submodule_dir.display()
        );
    } else {
        runner.run(&submodule_add_command(git, request))?;
    }

    let guard = WorkingDirGuard::change_to(&submodule_dir)?;
    runner.run(&submodule_update_command(git))?;
    guard.restore()?;

    info!(
        "Vendored {} at {} into {}",
        request.godot_repo_url(),
        request.godot_version(),
        submodule_dir.display()
    );
    Ok(submodule_dir)
}

fn is_populated_dir(path: &Path) -> bool {
    fs::read_dir(path)
        .map(|mut entries| entries.next().is_some())
        .unwrap_or(false)
}
