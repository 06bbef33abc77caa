//! gdext-bootstrap library
//!
//! Turns an existing Godot project into a GDExtension C++ project: checks for
//! git and python, initializes a repository, vendors godot-cpp as a submodule
//! and writes the extension skeleton and build scripts.

pub mod assets;
pub mod build_scripts;
pub mod cli;
pub mod command_runner;
pub mod config_file;
pub mod error;
pub mod pipeline;
pub mod platform;
pub mod project;
pub mod request;
pub mod sanity;
pub mod scaffold;
pub mod vcs;
pub mod workdir;

// Re-export main types for convenience
pub use assets::AssetStore;
pub use command_runner::{CommandRunner, SystemRunner, ToolCommand};
pub use config_file::{BootstrapConfig, ToolSettings};
pub use error::{BootstrapError, Result};
pub use pipeline::{BootstrapReport, BootstrapStage, Bootstrapper};
pub use platform::HostPlatform;
pub use request::{BootstrapRequest, DEFAULT_GODOT_REPO_URL};
pub use workdir::WorkingDirGuard;
