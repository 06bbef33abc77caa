//! Scaffold writer
//!
//! Lays the GDExtension skeleton over a project root: the `ext/` and `bin/`
//! directories, the C++ stubs, the SConstruct build definition and the
//! `.gdextension` manifest.
//!
//! # Invariants
//!
//! - Existing directories are left untouched; missing ones are created.
//! - Existing files are overwritten.
//! - Writes are not atomic. A failure partway leaves earlier files in place.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::assets::{self, AssetStore};
use crate::error::Result;

/// Placeholder in the manifest template replaced by the Godot version
pub const VERSION_SENTINEL: &str = "COMPATIBILITY_MINIMUM";

/// Top-level output directories
pub const SCAFFOLD_DIRS: &[&str] = &["ext", "bin"];

/// How an asset becomes a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Render {
    /// Bytes copied verbatim
    Copy,
    /// Text with every [`VERSION_SENTINEL`] replaced by the version
    SubstituteVersion,
}

/// One entry of the scaffold manifest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaffoldFile {
    pub asset: &'static str,
    pub destination: &'static str,
    pub render: Render,
}

/// Files written by [`write_scaffold`], in write order
pub const SCAFFOLD_FILES: &[ScaffoldFile] = &[
    ScaffoldFile {
        asset: assets::REGISTER_TYPES_H,
        destination: "ext/register_types.h",
        render: Render::Copy,
    },
    ScaffoldFile {
        asset: assets::REGISTER_TYPES_CPP,
        destination: "ext/register_types.cpp",
        render: Render::Copy,
    },
    ScaffoldFile {
        asset: assets::GDEXAMPLE_H,
        destination: "ext/example/gdexample.h",
        render: Render::Copy,
    },
    ScaffoldFile {
        asset: assets::GDEXAMPLE_CPP,
        destination: "ext/example/gdexample.cpp",
        render: Render::Copy,
    },
    ScaffoldFile {
        asset: assets::SCONSTRUCT,
        destination: "SConstruct",
        render: Render::Copy,
    },
    ScaffoldFile {
        asset: assets::GDEXTENSION,
        destination: "bin/gd.gdextension",
        render: Render::SubstituteVersion,
    },
];

/// Replace every occurrence of [`VERSION_SENTINEL`] with `version`.
///
/// Plain, case-sensitive string replacement with no escaping.
pub fn substitute_version(template: &str, version: &str) -> String {
    template.replace(VERSION_SENTINEL, version)
}

/// Create `path` if it does not exist yet. Returns true if it was created.
pub fn ensure_dir(path: &Path) -> Result<bool> {
    if path.is_dir() {
        debug!("Directory {} already exists, skipping", path.display());
        return Ok(false);
    }
    fs::create_dir_all(path)?;
    debug!("Created directory {}", path.display());
    Ok(true)
}

/// Write the full scaffold under `root` and return the written file paths.
pub fn write_scaffold(root: &Path, assets: &AssetStore, version: &str) -> Result<Vec<PathBuf>> {
    for dir in SCAFFOLD_DIRS {
        ensure_dir(&root.join(dir))?;
    }

    let mut written = Vec::with_capacity(SCAFFOLD_FILES.len());
    for file in SCAFFOLD_FILES {
        written.push(write_file(root, assets, file, version)?);
    }

    info!("Wrote {} scaffold files under {}", written.len(), root.display());
    Ok(written)
}

fn write_file(
    root: &Path,
    assets: &AssetStore,
    file: &ScaffoldFile,
    version: &str,
) -> Result<PathBuf> {
    let destination = root.join(file.destination);
    if let Some(parent) = destination.parent() {
        ensure_dir(parent)?;
    }

    match file.render {
        Render::Copy => fs::write(&destination, assets.get(file.asset)?)?,
        Render::SubstituteVersion => {
            let text = assets.get_text(file.asset)?;
            fs::write(&destination, substitute_version(text, version))?
        }
    }

    debug!("Wrote {}", destination.display());
    Ok(destination)
}
