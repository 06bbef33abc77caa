//! Build script generation
//!
//! Installs SCons through pip, then writes one-line debug and release
//! invocation scripts into the project root. The scripts are plain text and
//! are never executed here.

use std::fs;
use std::path::{Path, PathBuf};

use strum::{Display, EnumIter, IntoEnumIterator};
use tracing::info;

use crate::command_runner::{CommandRunner, ToolCommand};
use crate::error::Result;
use crate::platform::HostPlatform;

/// Python package providing the SCons build system
pub const BUILD_TOOL_PACKAGE: &str = "SCons";

/// godot-cpp export template targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum BuildTarget {
    TemplateDebug,
    TemplateRelease,
}

impl BuildTarget {
    /// Prefix of the generated script file name
    pub const fn script_prefix(self) -> &'static str {
        match self {
            Self::TemplateDebug => "debug",
            Self::TemplateRelease => "release",
        }
    }

    /// Script file name for `platform`, e.g. `debug-build.sh`
    pub fn script_file_name(self, platform: HostPlatform) -> String {
        format!("{}-build{}", self.script_prefix(), platform.script_extension())
    }
}

/// `pip install SCons`
pub fn install_command(pip: &str) -> ToolCommand {
    ToolCommand::new(pip, ["install", BUILD_TOOL_PACKAGE])
}

/// Install SCons into the host interpreter.
pub fn install_build_tool(runner: &mut dyn CommandRunner, pip: &str) -> Result<()> {
    runner.run(&install_command(pip))
}

/// The single invocation line written into a build script.
pub fn build_script_line(python: &str, platform: HostPlatform, target: BuildTarget) -> String {
    format!("{python} -m {BUILD_TOOL_PACKAGE} platform={platform} target={target}")
}

/// Write the debug and release scripts under `root`.
pub fn write_build_scripts(
    root: &Path,
    python: &str,
    platform: HostPlatform,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for target in BuildTarget::iter() {
        let path = root.join(target.script_file_name(platform));
        fs::write(&path, build_script_line(python, platform, target))?;
        info!("Wrote build script {}", path.display());
        written.push(path);
    }
    Ok(written)
}
