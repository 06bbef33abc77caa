//! Pre-flight dependency checks
//!
//! Verifies that the external programs the bootstrap shells out to can be
//! resolved on PATH. Presence only: versions are not inspected.

use tracing::{debug, info};

use crate::error::{BootstrapError, Result};

/// Required runtime binaries (default names; see [`crate::config_file::ToolSettings`])
pub const REQUIRED_BINARIES: &[&str] = &[
    "git",    // repository init and submodules
    "python", // SCons host interpreter
];

/// Result of environment verification
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SanityCheckResult {
    pub missing_binaries: Vec<String>,
}

impl SanityCheckResult {
    /// Returns true if all checks passed
    pub fn is_ok(&self) -> bool {
        self.missing_binaries.is_empty()
    }
}

/// Check if a binary is available in PATH
pub fn binary_exists(name: &str) -> bool {
    which::which(name).is_ok()
}

/// Look up every binary and collect the ones that are missing
pub fn verify_environment(binaries: &[&str]) -> SanityCheckResult {
    verify_environment_with(binaries, binary_exists)
}

/// [`verify_environment`] with a caller-supplied lookup
pub fn verify_environment_with(binaries: &[&str], exists: fn(&str) -> bool) -> SanityCheckResult {
    let missing_binaries = binaries
        .iter()
        .filter(|binary| {
            let found = exists(binary);
            debug!(binary = **binary, found, "dependency lookup");
            !found
        })
        .map(|binary| (*binary).to_string())
        .collect();

    SanityCheckResult { missing_binaries }
}

/// Fail with `MissingDependency` naming the first binary that cannot be found
pub fn check_dependencies(binaries: &[&str]) -> Result<()> {
    check_dependencies_with(binaries, binary_exists)
}

/// [`check_dependencies`] with a caller-supplied lookup
pub fn check_dependencies_with(binaries: &[&str], exists: fn(&str) -> bool) -> Result<()> {
    let result = verify_environment_with(binaries, exists);

    if let Some(binary) = result.missing_binaries.first() {
        return Err(BootstrapError::missing_dependency(binary.clone()));
    }

    info!("Dependency check passed: {}", binaries.join(", "));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONEXISTENT: &str = "this_binary_definitely_does_not_exist_12345";

    #[test]
    fn test_binary_exists_nonexistent() {
        assert!(!binary_exists(NONEXISTENT));
    }

    #[test]
    fn test_verify_environment_reports_missing() {
        let result = verify_environment(&[NONEXISTENT]);
        assert_eq!(result.missing_binaries, vec![NONEXISTENT.to_string()]);
        assert!(!result.is_ok());
    }

    #[test]
    fn test_empty_requirement_list_passes() {
        assert!(verify_environment(&[]).is_ok());
        assert!(check_dependencies(&[]).is_ok());
    }

    #[test]
    fn test_check_dependencies_names_missing_binary() {
        let err = check_dependencies(&[NONEXISTENT]).unwrap_err();
        match err {
            BootstrapError::MissingDependency { binary } => assert_eq!(binary, NONEXISTENT),
            other => panic!("Expected MissingDependency, got {other:?}"),
        }
    }

    #[test]
    fn test_custom_lookup_reports_first_missing() {
        let result = verify_environment_with(&["git", "python"], |_| false);
        assert_eq!(result.missing_binaries, vec!["git".to_string(), "python".to_string()]);

        let err = check_dependencies_with(&["git", "python"], |b| b == "git").unwrap_err();
        assert!(matches!(err, BootstrapError::MissingDependency { ref binary } if binary == "python"));

        assert!(check_dependencies_with(&["git", "python"], |_| true).is_ok());
    }

    #[test]
    fn test_sanity_result_is_ok() {
        let ok_result = SanityCheckResult {
            missing_binaries: vec![],
        };
        assert!(ok_result.is_ok());

        let missing_binary = SanityCheckResult {
            missing_binaries: vec!["git".to_string()],
        };
        assert!(!missing_binary.is_ok());
    }
}
