//! External command execution
//!
//! All external programs (git, pip) are launched through the [`CommandRunner`]
//! trait. The production [`SystemRunner`] connects the child's streams to the
//! operator's terminal so progress and errors show up live; nothing is
//! captured beyond the exit status.
//!
//! # Failure Modes
//!
//! - Program not on PATH: `MissingDependency`
//! - Spawn/wait failure: `Io`
//! - Non-zero exit or signal: `CommandFailed`
//!
//! There are no timeouts and no retries. A stalled child blocks the run.

use std::fmt;
use std::process::{Command, Stdio};

use tracing::{debug, info};

use crate::error::{BootstrapError, Result};

/// A program plus its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ToolCommand {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Runs external commands to completion.
///
/// # Contract
///
/// - Returns `Ok(())` only if the command exited with status 0.
/// - Runs in the process's current working directory.
pub trait CommandRunner {
    fn run(&mut self, command: &ToolCommand) -> Result<()>;
}

/// Runs commands on the host with inherited stdio.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&mut self, command: &ToolCommand) -> Result<()> {
        let program = which::which(&command.program)
            .map_err(|_| BootstrapError::missing_dependency(command.program.clone()))?;
        debug!("Resolved {} to {}", command.program, program.display());

        info!("Running: {}", command);

        let status = Command::new(&program)
            .args(&command.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;

        if status.success() {
            debug!("Command `{}` succeeded", command);
            Ok(())
        } else {
            Err(BootstrapError::CommandFailed {
                command: command.to_string(),
                code: status.code(),
            })
        }
    }
}
