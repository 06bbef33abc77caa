//! Godot project detection.
//!
//! A directory counts as a Godot project when it holds a `project.godot`
//! descriptor and the editor's hidden `.godot/` state directory. Only presence
//! is checked; a corrupt descriptor passes.

use std::path::Path;

use tracing::debug;

use crate::error::{BootstrapError, Result};

/// Project descriptor file name
pub const PROJECT_DESCRIPTOR: &str = "project.godot";

/// Hidden engine state directory
pub const ENGINE_STATE_DIR: &str = ".godot";

/// Returns true if `path` looks like a Godot project
pub fn is_godot_project(path: &Path) -> bool {
    validate_project(path).is_ok()
}

/// Verify that `path` is an existing Godot project.
///
/// # Errors
///
/// - `ProjectNotFound` if the path does not exist
/// - `NotAGodotProject` naming the first missing marker
pub fn validate_project(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(BootstrapError::ProjectNotFound(path.to_path_buf()));
    }

    if !path.join(PROJECT_DESCRIPTOR).is_file() {
        return Err(BootstrapError::NotAGodotProject {
            path: path.to_path_buf(),
            missing: PROJECT_DESCRIPTOR,
        });
    }

    if !path.join(ENGINE_STATE_DIR).is_dir() {
        return Err(BootstrapError::NotAGodotProject {
            path: path.to_path_buf(),
            missing: ENGINE_STATE_DIR,
        });
    }

    debug!("Validated Godot project at {}", path.display());
    Ok(())
}
