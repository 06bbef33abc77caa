//! Working directory management
//!
//! The process working directory is the one piece of shared mutable state the
//! bootstrap touches. Entering the project is a one-way change; every other
//! change goes through [`WorkingDirGuard`], which puts the previous directory
//! back when dropped.

use std::env;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::Result;

/// Change the process working directory into the validated project.
pub fn enter_project(path: &Path) -> Result<()> {
    env::set_current_dir(path)?;
    info!("Entered project directory {}", path.display());
    Ok(())
}

/// Scoped working-directory change.
///
/// Captures the current directory, changes into the target, and restores the
/// captured directory on drop. Restoration therefore happens on success, on
/// `?` early returns and while unwinding from a panic.
///
/// # Example
///
/// ```no_run
/// use gdext_bootstrap::workdir::WorkingDirGuard;
///
/// let guard = WorkingDirGuard::change_to("godot-cpp")?;
/// // ... run commands inside godot-cpp ...
/// guard.restore()?;
/// # Ok::<(), gdext_bootstrap::BootstrapError>(())
/// ```
#[derive(Debug)]
pub struct WorkingDirGuard {
    previous: PathBuf,
    restored: bool,
}

impl WorkingDirGuard {
    /// Capture the current directory and change into `path`.
    ///
    /// If the change fails nothing needs restoring and no guard is returned.
    pub fn change_to(path: impl AsRef<Path>) -> Result<Self> {
        let previous = env::current_dir()?;
        env::set_current_dir(path.as_ref())?;
        debug!(
            "Changed working directory {} -> {}",
            previous.display(),
            path.as_ref().display()
        );
        Ok(Self {
            previous,
            restored: false,
        })
    }

    /// Directory that will be restored
    pub fn previous(&self) -> &Path {
        &self.previous
    }

    /// Restore eagerly, surfacing any error instead of only logging it.
    pub fn restore(mut self) -> Result<()> {
        self.restored = true;
        env::set_current_dir(&self.previous)?;
        debug!("Restored working directory {}", self.previous.display());
        Ok(())
    }
}

impl Drop for WorkingDirGuard {
    fn drop(&mut self) {
        if self.restored {
            return;
        }
        if let Err(e) = env::set_current_dir(&self.previous) {
            warn!(
                "Failed to restore working directory {}: {}",
                self.previous.display(),
                e
            );
        } else {
            debug!("Restored working directory {}", self.previous.display());
        }
    }
}
