//! gdext-bootstrap - Main entry point
//!
//! Parses arguments, sets up logging and hands the request to the pipeline.
//! This is the only place that decides to terminate the process on failure.

use std::process::ExitCode;

use anyhow::Context;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use gdext_bootstrap::cli::Cli;
use gdext_bootstrap::{BootstrapConfig, BootstrapReport, BootstrapRequest, Bootstrapper, SystemRunner};

/// Initialize the tracing subscriber. RUST_LOG overrides `default_level`.
fn init_logger(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_logger(cli.log_level());
    info!("gdext-bootstrap {} starting up", env!("CARGO_PKG_VERSION"));

    match run(cli) {
        Ok(report) => {
            println!("✓ Bootstrapped {}", report.project_root.display());
            println!("  submodule: {}", report.submodule_dir.display());
            for file in &report.files {
                println!("  wrote:     {}", file.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("✗ Bootstrap failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<BootstrapReport> {
    let config = match &cli.config {
        Some(path) => BootstrapConfig::load_from_file(path)
            .with_context(|| format!("Failed to load configuration {}", path.display()))?,
        None => BootstrapConfig::default(),
    };

    let request = BootstrapRequest::new(
        cli.project,
        cli.godot_version,
        config.resolve_repo_url(cli.godot_repo_url),
    )?;
    info!(
        "Bootstrapping {} (godot-cpp {} from {})",
        request.project_path().display(),
        request.godot_version(),
        request.godot_repo_url()
    );

    let mut pipeline = Bootstrapper::new(request, SystemRunner).with_tools(config.tool_settings());
    Ok(pipeline.run()?)
}
