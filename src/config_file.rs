//! Optional configuration file and tool name resolution.
//!
//! Precedence for every value: command-line flag, then the JSON config file,
//! then the environment, then the built-in default.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BootstrapError, Result};

/// Environment variable overriding the default bindings repository URL
pub const REPO_URL_ENV: &str = "GDEXT_BOOTSTRAP_REPO_URL";

pub const DEFAULT_GIT: &str = "git";
pub const DEFAULT_PYTHON: &str = "python";
pub const DEFAULT_PIP: &str = "pip";

/// Settings that can be stored in a JSON config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BootstrapConfig {
    /// Bindings repository URL
    pub godot_repo_url: Option<String>,
    /// Version control executable
    pub git: Option<String>,
    /// Interpreter used by the generated build scripts
    pub python: Option<String>,
    /// Package installer used to install SCons
    pub pip: Option<String>,
}

impl BootstrapConfig {
    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            BootstrapError::config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            BootstrapError::config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Repository URL from the flag, the file, then [`REPO_URL_ENV`].
    ///
    /// `None` leaves the built-in default to the request.
    pub fn resolve_repo_url(&self, cli: Option<String>) -> Option<String> {
        self.resolve_repo_url_with(cli, |key| std::env::var(key).ok())
    }

    /// Same as [`Self::resolve_repo_url`] with an explicit environment lookup.
    /// Blank values at any level fall through to the next one.
    pub fn resolve_repo_url_with(
        &self,
        cli: Option<String>,
        env: impl FnOnce(&str) -> Option<String>,
    ) -> Option<String> {
        let present = |url: &String| !url.trim().is_empty();

        cli.filter(present)
            .or_else(|| self.godot_repo_url.clone().filter(present))
            .or_else(|| env(REPO_URL_ENV).filter(present))
    }

    /// Concrete executable names with defaults applied
    pub fn tool_settings(&self) -> ToolSettings {
        ToolSettings {
            git: self.git.clone().unwrap_or_else(|| DEFAULT_GIT.to_string()),
            python: self.python.clone().unwrap_or_else(|| DEFAULT_PYTHON.to_string()),
            pip: self.pip.clone().unwrap_or_else(|| DEFAULT_PIP.to_string()),
        }
    }
}

/// Resolved names of the external programs the pipeline invokes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolSettings {
    pub git: String,
    pub python: String,
    pub pip: String,
}

impl Default for ToolSettings {
    fn default() -> Self {
        BootstrapConfig::default().tool_settings()
    }
}

impl ToolSettings {
    /// Binaries the dependency check requires up front
    pub fn required_binaries(&self) -> [&str; 2] {
        [self.git.as_str(), self.python.as_str()]
    }
}
