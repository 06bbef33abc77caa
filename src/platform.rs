//! Build host platforms supported by the generated scripts.

use strum::{Display, EnumIter, EnumString};

use crate::error::{BootstrapError, Result};

/// Host operating system the build scripts target.
///
/// The display form is the SCons `platform=` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum HostPlatform {
    #[strum(serialize = "macos")]
    MacOs,
    Linux,
    Windows,
}

impl HostPlatform {
    /// Map a `std::env::consts::OS` value to a platform.
    pub fn from_os(os: &str) -> Result<Self> {
        match os {
            "macos" => Ok(Self::MacOs),
            "linux" => Ok(Self::Linux),
            "windows" => Ok(Self::Windows),
            other => Err(BootstrapError::UnsupportedPlatform(other.to_string())),
        }
    }

    /// The platform this binary is running on.
    pub fn current() -> Result<Self> {
        Self::from_os(std::env::consts::OS)
    }

    /// File extension for build scripts, including the dot
    pub const fn script_extension(self) -> &'static str {
        match self {
            Self::MacOs | Self::Linux => ".sh",
            Self::Windows => ".bat",
        }
    }
}
