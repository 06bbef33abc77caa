//! The bootstrap request: which project, which Godot version, which bindings.

use std::path::{Path, PathBuf};

use crate::error::{BootstrapError, Result};

/// Upstream C++ bindings repository used when no URL is supplied.
pub const DEFAULT_GODOT_REPO_URL: &str = "https://github.com/godotengine/godot-cpp";

/// A validated request to bootstrap one Godot project.
///
/// Constructed once from process input and consumed by the pipeline. Blank
/// values are rejected for both the project path and the version; the version
/// is also trimmed, while a non-blank path is kept as given. Whether it is a real
/// Godot project is decided by [`crate::project::validate_project`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapRequest {
    project_path: PathBuf,
    godot_version: String,
    godot_repo_url: String,
}

impl BootstrapRequest {
    /// Build a request, applying [`DEFAULT_GODOT_REPO_URL`] when `repo_url` is
    /// absent or blank.
    ///
    /// # Errors
    ///
    /// - `InvalidRequest` if the project path or version is empty or blank
    /// - `InvalidRepoUrl` if no submodule directory name can be derived from the URL
    pub fn new(
        project_path: impl Into<PathBuf>,
        godot_version: impl Into<String>,
        repo_url: Option<String>,
    ) -> Result<Self> {
        let project_path = project_path.into();
        if project_path.to_string_lossy().trim().is_empty() {
            return Err(BootstrapError::invalid_request(
                "Godot project directory is required",
            ));
        }

        let godot_version = godot_version.into().trim().to_string();
        if godot_version.is_empty() {
            return Err(BootstrapError::invalid_request("Godot version is required"));
        }

        let godot_repo_url = repo_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_GODOT_REPO_URL.to_string());

        // Reject URLs we cannot map to a directory before any step runs
        submodule_name_from_url(&godot_repo_url)?;

        Ok(Self {
            project_path,
            godot_version,
            godot_repo_url,
        })
    }

    pub fn project_path(&self) -> &Path {
        &self.project_path
    }

    /// The version/branch token, used both as the submodule branch and the
    /// manifest's compatibility minimum.
    pub fn godot_version(&self) -> &str {
        &self.godot_version
    }

    pub fn godot_repo_url(&self) -> &str {
        &self.godot_repo_url
    }

    /// Local directory the bindings submodule is checked out into.
    pub fn submodule_name(&self) -> &str {
        // Validated in `new`
        submodule_name_from_url(&self.godot_repo_url).unwrap_or_default()
    }
}

/// Derive the submodule directory from the last path segment of a URL.
///
/// Trailing slashes and a `.git` suffix are ignored, which is the same name
/// `git submodule add` chooses.
///
/// # Errors
///
/// `InvalidRepoUrl` if the URL has no `/` separator or the final segment is empty.
pub fn submodule_name_from_url(url: &str) -> Result<&str> {
    let trimmed = url.trim_end_matches('/');
    let Some(idx) = trimmed.rfind('/') else {
        return Err(BootstrapError::InvalidRepoUrl(url.to_string()));
    };

    let segment = &trimmed[idx + 1..];
    let segment = segment.strip_suffix(".git").unwrap_or(segment);

    if segment.is_empty() || segment == "." || segment == ".." {
        return Err(BootstrapError::InvalidRepoUrl(url.to_string()));
    }

    Ok(segment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_repo_url_applied() {
        let request = BootstrapRequest::new("./demo", "4.2", None).unwrap();
        assert_eq!(request.godot_repo_url(), DEFAULT_GODOT_REPO_URL);
        assert_eq!(request.submodule_name(), "godot-cpp");

        let request = BootstrapRequest::new("./demo", "4.2", Some("   ".to_string())).unwrap();
        assert_eq!(request.godot_repo_url(), DEFAULT_GODOT_REPO_URL);
    }

    #[test]
    fn test_required_fields() {
        for blank in ["", " ", "\t \n"] {
            let err = BootstrapRequest::new(blank, "4.2", None).unwrap_err();
            assert!(matches!(err, BootstrapError::InvalidRequest(_)), "{blank:?}");
        }

        let err = BootstrapRequest::new("./demo", "  ", None).unwrap_err();
        assert!(matches!(err, BootstrapError::InvalidRequest(_)));
    }

    #[test]
    fn test_version_is_trimmed() {
        let request = BootstrapRequest::new("./demo", " 4.3 ", None).unwrap();
        assert_eq!(request.godot_version(), "4.3");
    }

    #[test]
    fn test_submodule_name_derivation() {
        assert_eq!(
            submodule_name_from_url("https://github.com/godotengine/godot-cpp").unwrap(),
            "godot-cpp"
        );
        assert_eq!(
            submodule_name_from_url("https://github.com/godotengine/godot-cpp.git").unwrap(),
            "godot-cpp"
        );
        assert_eq!(
            submodule_name_from_url("https://github.com/godotengine/godot-cpp/").unwrap(),
            "godot-cpp"
        );
        assert_eq!(
            submodule_name_from_url("git@github.com:me/my-bindings.git").unwrap(),
            "my-bindings"
        );
    }

    #[test]
    fn test_submodule_name_rejects_unsegmented_urls() {
        for url in ["godot-cpp", "https://", "/", "https://example.com/.git"] {
            assert!(
                matches!(submodule_name_from_url(url), Err(BootstrapError::InvalidRepoUrl(_))),
                "{url} should be rejected"
            );
        }

        let err = BootstrapRequest::new("./demo", "4.2", Some("godot-cpp".to_string())).unwrap_err();
        assert!(matches!(err, BootstrapError::InvalidRepoUrl(_)));
    }
}
