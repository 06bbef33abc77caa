use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// gdext-bootstrap - Set up a Godot project for C++ GDExtension development
#[derive(Parser, Debug)]
#[command(name = "gdext-bootstrap")]
#[command(about = "Initializes git, vendors godot-cpp and writes a GDExtension skeleton into a Godot project")]
#[command(version)]
pub struct Cli {
    /// The Godot project directory (must contain project.godot and .godot/)
    #[arg(long)]
    pub project: PathBuf,

    /// Godot version; used as the godot-cpp branch and the compatibility minimum
    #[arg(long = "godot-version")]
    pub godot_version: String,

    /// godot-cpp repository URL [default: https://github.com/godotengine/godot-cpp]
    #[arg(long = "godot-repo-url")]
    pub godot_repo_url: Option<String>,

    /// JSON configuration file with repository URL and tool overrides
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }

    /// Default tracing filter directive for the chosen verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_required_args() {
        let cli = Cli::try_parse_from([
            "gdext-bootstrap",
            "--project",
            "./demo",
            "--godot-version",
            "4.2",
        ])
        .unwrap();
        assert_eq!(cli.project, PathBuf::from("./demo"));
        assert_eq!(cli.godot_version, "4.2");
        assert!(cli.godot_repo_url.is_none());
        assert!(cli.config.is_none());
        assert_eq!(cli.log_level(), "info");
    }

    #[test]
    fn test_cli_missing_project() {
        let result = Cli::try_parse_from(["gdext-bootstrap", "--godot-version", "4.2"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_missing_version() {
        let result = Cli::try_parse_from(["gdext-bootstrap", "--project", "./demo"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_optional_args() {
        let cli = Cli::try_parse_from([
            "gdext-bootstrap",
            "--project",
            "./demo",
            "--godot-version",
            "4.3",
            "--godot-repo-url",
            "https://example.com/fork/godot-cpp",
            "--config",
            "bootstrap.json",
            "-vv",
        ])
        .unwrap();
        assert_eq!(
            cli.godot_repo_url.as_deref(),
            Some("https://example.com/fork/godot-cpp")
        );
        assert_eq!(cli.config, Some(PathBuf::from("bootstrap.json")));
        assert_eq!(cli.log_level(), "trace");
    }
}
