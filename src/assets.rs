//! Bundled template files.
//!
//! Templates live under `assets/` and are compiled into the binary with
//! [`include_bytes!`]. They are opaque payloads; the only rendering done on
//! any of them is the version substitution in [`crate::scaffold`].
//!
//! The store is an immutable value handed to the writers, so tests can inject
//! their own bundle.

use std::collections::BTreeMap;

use crate::error::{BootstrapError, Result};

pub const REGISTER_TYPES_H: &str = "register_types.h";
pub const REGISTER_TYPES_CPP: &str = "register_types.cpp";
pub const GDEXAMPLE_H: &str = "gdexample.h";
pub const GDEXAMPLE_CPP: &str = "gdexample.cpp";
pub const SCONSTRUCT: &str = "SConstruct";
pub const GDEXTENSION: &str = "gd.gdextension";

macro_rules! embedded_asset {
    ($name:literal) => {
        include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/", $name)).as_slice()
    };
}

/// Read-only asset bundle keyed by relative path.
#[derive(Debug, Clone, Default)]
pub struct AssetStore {
    files: BTreeMap<&'static str, &'static [u8]>,
}

impl AssetStore {
    /// The templates shipped with the binary.
    pub fn embedded() -> Self {
        Self::from_entries([
            (REGISTER_TYPES_H, embedded_asset!("register_types.h")),
            (REGISTER_TYPES_CPP, embedded_asset!("register_types.cpp")),
            (GDEXAMPLE_H, embedded_asset!("gdexample.h")),
            (GDEXAMPLE_CPP, embedded_asset!("gdexample.cpp")),
            (SCONSTRUCT, embedded_asset!("SConstruct")),
            (GDEXTENSION, embedded_asset!("gd.gdextension")),
        ])
    }

    /// Build a store from explicit entries. Later duplicates win.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, &'static [u8])>,
    {
        Self {
            files: entries.into_iter().collect(),
        }
    }

    /// Look up an asset by key.
    pub fn get(&self, key: &str) -> Result<&'static [u8]> {
        self.files
            .get(key)
            .copied()
            .ok_or_else(|| BootstrapError::MissingAsset(key.to_string()))
    }

    /// Look up an asset and decode it as UTF-8 text.
    pub fn get_text(&self, key: &str) -> Result<&'static str> {
        let bytes = self.get(key)?;
        std::str::from_utf8(bytes)
            .map_err(|e| BootstrapError::asset(format!("{key} is not valid UTF-8: {e}")))
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.files.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
