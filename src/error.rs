//! Error handling module for gdext-bootstrap
//!
//! Every bootstrap step returns these typed errors instead of terminating the
//! process. The binary owns the single top-level handler that decides to exit.

use std::path::PathBuf;
use thiserror::Error;

use crate::pipeline::BootstrapStage;

/// Main error type for the bootstrapper
#[derive(Error, Debug)]
pub enum BootstrapError {
    /// IO errors (directory changes, file writes, process spawning)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Request values rejected before any step runs
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// A required executable could not be found on PATH
    #[error("Missing dependency: `{binary}` was not found on PATH")]
    MissingDependency { binary: String },

    /// The target project path does not exist
    #[error("Project path does not exist: {}", .0.display())]
    ProjectNotFound(PathBuf),

    /// The target path exists but lacks the Godot project layout
    #[error("Not a Godot project: {} (missing {missing})", .path.display())]
    NotAGodotProject { path: PathBuf, missing: &'static str },

    /// An external command exited unsuccessfully
    #[error("Command `{command}` failed with exit code {}", .code.map(|c| c.to_string()).unwrap_or_else(|| "none (terminated by signal)".to_string()))]
    CommandFailed { command: String, code: Option<i32> },

    /// The binding repository URL has no usable final path segment
    #[error("Invalid repository URL `{0}`: cannot derive a submodule directory name")]
    InvalidRepoUrl(String),

    /// Requested asset is not part of the bundle
    #[error("Missing asset: {0}")]
    MissingAsset(String),

    /// Asset content could not be rendered
    #[error("Asset error: {0}")]
    Asset(String),

    /// The host operating system has no build script mapping
    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),

    /// Configuration file errors (loading, parsing)
    #[error("Configuration error: {0}")]
    Config(String),

    /// A pipeline stage failed; the cause is the error source
    #[error("{stage} failed")]
    StageFailed {
        stage: BootstrapStage,
        #[source]
        source: Box<BootstrapError>,
    },
}

/// Result type alias for bootstrap operations
pub type Result<T> = std::result::Result<T, BootstrapError>;

impl BootstrapError {
    /// Create an invalid request error
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    /// Create a missing dependency error
    pub fn missing_dependency(binary: impl Into<String>) -> Self {
        Self::MissingDependency {
            binary: binary.into(),
        }
    }

    /// Create an asset error
    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Wrap an error with the stage it occurred in
    pub fn at_stage(self, stage: BootstrapStage) -> Self {
        Self::StageFailed {
            stage,
            source: Box::new(self),
        }
    }

    /// The innermost error, unwrapping any stage context
    pub fn root_cause(&self) -> &BootstrapError {
        match self {
            Self::StageFailed { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// The stage this error was raised in, if known
    pub fn stage(&self) -> Option<BootstrapStage> {
        match self {
            Self::StageFailed { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}
