//! Bootstrap pipeline
//!
//! Runs the provisioning steps in a fixed order and stops at the first
//! failure. There is no rollback: whatever earlier stages created stays.
//!
//! # Stage Flow
//!
//! ```text
//! NotStarted
//!     ↓
//! CheckingDependencies      git + python on PATH
//!     ↓
//! ValidatingProject         project.godot + .godot/
//!     ↓
//! EnteringProject           chdir into the project
//!     ↓
//! InitializingRepository    git init
//!     ↓
//! VendoringBindings         git submodule add / update --init
//!     ↓
//! WritingScaffold           ext/, bin/, templates, manifest
//!     ↓
//! GeneratingScripts         pip install SCons, debug/release scripts
//!     ↓
//! Completed
//!
//! (Any stage can transition to Failed)
//! ```

use std::env;
use std::fmt;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::assets::AssetStore;
use crate::build_scripts;
use crate::command_runner::CommandRunner;
use crate::config_file::ToolSettings;
use crate::error::Result;
use crate::platform::HostPlatform;
use crate::project;
use crate::request::BootstrapRequest;
use crate::sanity;
use crate::scaffold;
use crate::vcs;
use crate::workdir;

/// Pipeline stages in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum BootstrapStage {
    NotStarted = 0,
    CheckingDependencies = 1,
    ValidatingProject = 2,
    EnteringProject = 3,
    InitializingRepository = 4,
    VendoringBindings = 5,
    WritingScaffold = 6,
    GeneratingScripts = 7,
    Completed = 8,
    /// Terminal failure state
    Failed = 255,
}

impl BootstrapStage {
    /// Stages that do work, in order
    pub const STEPS: &'static [Self] = &[
        Self::CheckingDependencies,
        Self::ValidatingProject,
        Self::EnteringProject,
        Self::InitializingRepository,
        Self::VendoringBindings,
        Self::WritingScaffold,
        Self::GeneratingScripts,
    ];

    /// Returns true if this is a terminal state (Completed or Failed)
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }

    /// Returns the next stage in the sequence, or None if at a terminal state
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::NotStarted => Some(Self::CheckingDependencies),
            Self::CheckingDependencies => Some(Self::ValidatingProject),
            Self::ValidatingProject => Some(Self::EnteringProject),
            Self::EnteringProject => Some(Self::InitializingRepository),
            Self::InitializingRepository => Some(Self::VendoringBindings),
            Self::VendoringBindings => Some(Self::WritingScaffold),
            Self::WritingScaffold => Some(Self::GeneratingScripts),
            Self::GeneratingScripts => Some(Self::Completed),
            Self::Completed | Self::Failed => None,
        }
    }

    /// Returns a human-readable description of this stage
    pub const fn description(self) -> &'static str {
        match self {
            Self::NotStarted => "Not started",
            Self::CheckingDependencies => "Checking dependencies",
            Self::ValidatingProject => "Validating Godot project",
            Self::EnteringProject => "Entering project directory",
            Self::InitializingRepository => "Initializing git repository",
            Self::VendoringBindings => "Vendoring godot-cpp submodule",
            Self::WritingScaffold => "Writing extension scaffold",
            Self::GeneratingScripts => "Generating build scripts",
            Self::Completed => "Bootstrap complete",
            Self::Failed => "Bootstrap failed",
        }
    }
}

impl fmt::Display for BootstrapStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// What a successful run produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BootstrapReport {
    /// Absolute project root the run operated in
    pub project_root: PathBuf,
    /// Checked-out bindings submodule
    pub submodule_dir: PathBuf,
    /// Every file written, in write order
    pub files: Vec<PathBuf>,
    /// Platform the build scripts were generated for
    pub platform: Option<HostPlatform>,
}

/// Drives a [`BootstrapRequest`] through every stage.
///
/// # Example
///
/// ```no_run
/// use gdext_bootstrap::{Bootstrapper, BootstrapRequest, SystemRunner};
///
/// let request = BootstrapRequest::new("./demo", "4.2", None)?;
/// let report = Bootstrapper::new(request, SystemRunner).run()?;
/// println!("wrote {} files", report.files.len());
/// # Ok::<(), gdext_bootstrap::BootstrapError>(())
/// ```
pub struct Bootstrapper<R: CommandRunner> {
    request: BootstrapRequest,
    tools: ToolSettings,
    assets: AssetStore,
    runner: R,
    host_os: String,
    binary_lookup: fn(&str) -> bool,
    current: BootstrapStage,
    failed_at: Option<BootstrapStage>,
    completed: Vec<BootstrapStage>,
}

impl<R: CommandRunner> Bootstrapper<R> {
    /// Pipeline with default tools, the embedded assets and the host OS.
    pub fn new(request: BootstrapRequest, runner: R) -> Self {
        Self {
            request,
            tools: ToolSettings::default(),
            assets: AssetStore::embedded(),
            runner,
            host_os: env::consts::OS.to_string(),
            binary_lookup: sanity::binary_exists,
            current: BootstrapStage::NotStarted,
            failed_at: None,
            completed: Vec::with_capacity(BootstrapStage::STEPS.len()),
        }
    }

    pub fn with_tools(mut self, tools: ToolSettings) -> Self {
        self.tools = tools;
        self
    }

    pub fn with_assets(mut self, assets: AssetStore) -> Self {
        self.assets = assets;
        self
    }

    /// Override the OS name used to pick the build script flavour
    pub fn with_host_os(mut self, os: impl Into<String>) -> Self {
        self.host_os = os.into();
        self
    }

    /// Override how the dependency check resolves executables
    pub fn with_binary_lookup(mut self, lookup: fn(&str) -> bool) -> Self {
        self.binary_lookup = lookup;
        self
    }

    #[inline]
    pub fn current_stage(&self) -> BootstrapStage {
        self.current
    }

    /// Stage at which the run failed, if any
    #[inline]
    pub fn failed_at(&self) -> Option<BootstrapStage> {
        self.failed_at
    }

    /// Stages that finished successfully, in order
    pub fn completed_stages(&self) -> &[BootstrapStage] {
        &self.completed
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Run every stage in order.
    ///
    /// # Errors
    ///
    /// `StageFailed` wrapping the first error; no later stage runs. Calling
    /// `run` again after it finished (either way) is an `InvalidRequest`.
    /// Nothing is logged above `debug` for the failure itself.
    pub fn run(&mut self) -> Result<BootstrapReport> {
        if self.current != BootstrapStage::NotStarted {
            return Err(crate::BootstrapError::invalid_request(format!(
                "pipeline already ran (state: {})",
                self.current
            )));
        }

        let mut report = BootstrapReport::default();

        while let Some(stage) = self.current.next() {
            if stage == BootstrapStage::Completed {
                self.current = stage;
                break;
            }

            self.current = stage;
            info!("[{}/{}] {}", stage as u8, BootstrapStage::STEPS.len(), stage);

            if let Err(e) = self.execute(stage, &mut report) {
                // Reported once by the caller, which owns the final error line
                debug!("{} failed: {}", stage, e);
                self.failed_at = Some(stage);
                self.current = BootstrapStage::Failed;
                return Err(e.at_stage(stage));
            }
            self.completed.push(stage);
        }

        info!("Godot C++ extension bootstrapped successfully!");
        Ok(report)
    }

    fn execute(&mut self, stage: BootstrapStage, report: &mut BootstrapReport) -> Result<()> {
        match stage {
            BootstrapStage::CheckingDependencies => {
                sanity::check_dependencies_with(&self.tools.required_binaries(), self.binary_lookup)
            }
            BootstrapStage::ValidatingProject => {
                project::validate_project(self.request.project_path())
            }
            BootstrapStage::EnteringProject => {
                workdir::enter_project(self.request.project_path())?;
                report.project_root = env::current_dir()?;
                Ok(())
            }
            BootstrapStage::InitializingRepository => {
                vcs::init_repository(&mut self.runner, &self.tools.git)
            }
            BootstrapStage::VendoringBindings => {
                let dir = vcs::vendor_bindings(&mut self.runner, &self.tools.git, &self.request)?;
                report.submodule_dir = report.project_root.join(dir);
                Ok(())
            }
            BootstrapStage::WritingScaffold => {
                let written = scaffold::write_scaffold(
                    &report.project_root,
                    &self.assets,
                    self.request.godot_version(),
                )?;
                report.files.extend(written);
                Ok(())
            }
            BootstrapStage::GeneratingScripts => {
                build_scripts::install_build_tool(&mut self.runner, &self.tools.pip)?;
                let platform = HostPlatform::from_os(&self.host_os)?;
                let written = build_scripts::write_build_scripts(
                    &report.project_root,
                    &self.tools.python,
                    platform,
                )?;
                report.files.extend(written);
                report.platform = Some(platform);
                Ok(())
            }
            BootstrapStage::NotStarted | BootstrapStage::Completed | BootstrapStage::Failed => {
                Ok(())
            }
        }
    }
}
