//! # Type Locator — Source Location Scanning
//!
//! The boundary through which discovery learns which classes exist under
//! the configured source locations. [`TypeLocator`] is the injectable
//! trait; [`FsTypeLocator`] is the shipped default, which scans for type
//! manifests — `*.types.json` files holding a JSON array of class names,
//! emitted alongside the code by an out-of-scope codegen step.
//!
//! ## Determinism
//!
//! Manifest files are visited in sorted path order and names are taken in
//! file order, so a fixed set of source locations always yields the same
//! class sequence. Unreadable or unparsable manifests fail the scan; they
//! are never silently skipped.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::DiscoveryError;

/// Filename suffix that marks a type manifest.
pub const TYPE_MANIFEST_SUFFIX: &str = ".types.json";

/// Produces the class identifiers found under a set of source locations.
pub trait TypeLocator {
    /// Find all class names under `paths`, in a deterministic order.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError::Io`] when a location cannot be read and
    /// [`DiscoveryError::Manifest`] when a manifest exists but does not
    /// parse.
    fn find_all_types(
        &self,
        paths: &[PathBuf],
        recursive: bool,
    ) -> Result<Vec<String>, DiscoveryError>;
}

/// Default locator backed by type manifests on the filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsTypeLocator;

impl FsTypeLocator {
    /// Create the default locator.
    pub fn new() -> Self {
        Self
    }
}

impl TypeLocator for FsTypeLocator {
    fn find_all_types(
        &self,
        paths: &[PathBuf],
        recursive: bool,
    ) -> Result<Vec<String>, DiscoveryError> {
        let mut types = Vec::new();
        for path in paths {
            let mut manifests = if recursive {
                collect_recursive(path)?
            } else {
                collect_flat(path)?
            };
            manifests.sort();
            for manifest in &manifests {
                types.extend(read_manifest(manifest)?);
            }
        }
        Ok(types)
    }
}

fn is_manifest(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(TYPE_MANIFEST_SUFFIX))
}

fn collect_flat(dir: &Path) -> Result<Vec<PathBuf>, DiscoveryError> {
    let mut manifests = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_manifest(&path) {
            manifests.push(path);
        }
    }
    Ok(manifests)
}

fn collect_recursive(dir: &Path) -> Result<Vec<PathBuf>, DiscoveryError> {
    let mut manifests = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry = entry.map_err(std::io::Error::from)?;
        if entry.file_type().is_file() && is_manifest(entry.path()) {
            manifests.push(entry.into_path());
        }
    }
    Ok(manifests)
}

fn read_manifest(path: &Path) -> Result<Vec<String>, DiscoveryError> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|err| DiscoveryError::Manifest {
        path: path.display().to_string(),
        reason: err.to_string(),
    })
}
