//! # Registry Cache — File-Backed Persistence
//!
//! Persists a built [`ConstraintRegistry`] so later processes can skip
//! discovery. [`RegistryCache`] is the narrow boundary; [`FileRegistryCache`]
//! stores the registry as a JSON envelope at a single configured path.
//!
//! ## Envelope
//!
//! The on-disk blob is `{ format_version, payload_digest, registry }`. The
//! digest is the SHA-256 of the registry's canonical JSON bytes, recomputed
//! and compared on every read — a truncated or hand-edited file surfaces as
//! corruption rather than as a silently different registry. The version tag
//! keeps old processes from misreading an envelope written by a newer one.
//!
//! ## Crash Tolerance
//!
//! `set` writes to a temporary sibling file, syncs it, and renames it over
//! the target, so a reader never observes a torn blob. `flush` swallows
//! deletion failures: cache absence is always a safe state to fall back to.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::debug;

use verity_constraints::ConstraintRegistry;

use crate::error::CacheError;

/// Version of the on-disk cache encoding. Bumped whenever the envelope or
/// the registry encoding changes shape.
pub const CACHE_FORMAT_VERSION: u32 = 1;

/// Narrow persistence boundary for a built constraint registry.
pub trait RegistryCache {
    /// True iff a persisted registry currently exists. Never errors on
    /// absence.
    fn has(&self) -> bool;

    /// The persisted registry, `None` when no cache entry exists.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Corruption`] when an entry exists but cannot
    /// be decoded — absence and corruption are distinct conditions — and
    /// [`CacheError::Io`] for other storage failures.
    fn get(&self) -> Result<Option<ConstraintRegistry>, CacheError>;

    /// Persist the registry, replacing any prior entry atomically.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Io`] when the blob cannot be written.
    fn set(&self, registry: &ConstraintRegistry) -> Result<(), CacheError>;

    /// Remove the persisted entry if present. Deletion failures are
    /// swallowed: absence is the safe fallback state either way.
    fn flush(&self);
}

/// On-disk representation: version tag, payload digest, payload.
#[derive(Debug, Serialize, Deserialize)]
struct CacheEnvelope {
    format_version: u32,
    payload_digest: String,
    registry: ConstraintRegistry,
}

/// Registry cache backed by a single file.
#[derive(Debug, Clone)]
pub struct FileRegistryCache {
    /// Path of the cache file.
    path: PathBuf,
}

impl FileRegistryCache {
    /// Create a cache over the given file path. The file need not exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The configured cache file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling path used for the write-then-rename swap.
    fn tmp_path(&self) -> PathBuf {
        let mut os = self.path.clone().into_os_string();
        os.push(".tmp");
        PathBuf::from(os)
    }
}

impl RegistryCache for FileRegistryCache {
    fn has(&self) -> bool {
        self.path.is_file()
    }

    fn get(&self) -> Result<Option<ConstraintRegistry>, CacheError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(CacheError::Io(err)),
        };

        let envelope: CacheEnvelope =
            serde_json::from_slice(&bytes).map_err(|err| CacheError::Corruption {
                path: self.path.display().to_string(),
                reason: format!("cannot decode cache envelope: {err}"),
            })?;

        if envelope.format_version != CACHE_FORMAT_VERSION {
            return Err(CacheError::Corruption {
                path: self.path.display().to_string(),
                reason: format!(
                    "unsupported cache format version {} (expected {CACHE_FORMAT_VERSION})",
                    envelope.format_version
                ),
            });
        }

        let digest = registry_digest(&envelope.registry)?;
        if digest != envelope.payload_digest {
            return Err(CacheError::Corruption {
                path: self.path.display().to_string(),
                reason: "payload digest mismatch".to_string(),
            });
        }

        debug!(
            path = %self.path.display(),
            classes = envelope.registry.len(),
            "registry cache hit"
        );
        Ok(Some(envelope.registry))
    }

    fn set(&self, registry: &ConstraintRegistry) -> Result<(), CacheError> {
        let envelope = CacheEnvelope {
            format_version: CACHE_FORMAT_VERSION,
            payload_digest: registry_digest(registry)?,
            registry: registry.clone(),
        };
        let bytes = serde_json::to_vec(&envelope).map_err(io::Error::from)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp = self.tmp_path();
        {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(&bytes)?;
            file.sync_all()?;
        }

        // Platforms without atomic replace fall back to remove-then-rename;
        // single-writer is assumed throughout.
        if let Err(err) = fs::rename(&tmp, &self.path) {
            if err.kind() == io::ErrorKind::AlreadyExists {
                fs::remove_file(&self.path)?;
                fs::rename(&tmp, &self.path)?;
            } else {
                return Err(CacheError::Io(err));
            }
        }

        debug!(
            path = %self.path.display(),
            classes = registry.len(),
            "registry cache written"
        );
        Ok(())
    }

    fn flush(&self) {
        if let Err(err) = fs::remove_file(&self.path) {
            if err.kind() != io::ErrorKind::NotFound {
                debug!(
                    path = %self.path.display(),
                    error = %err,
                    "cache flush failed; entry treated as absent"
                );
            }
        }
    }
}

/// SHA-256 of the registry's canonical JSON bytes, as lowercase hex.
///
/// Registry maps are `BTreeMap`, so re-encoding a decoded registry yields
/// the same bytes and the digest check is stable across round trips.
fn registry_digest(registry: &ConstraintRegistry) -> Result<String, CacheError> {
    let bytes = serde_json::to_vec(registry).map_err(io::Error::from)?;
    let hash = Sha256::digest(&bytes);
    Ok(hash.iter().map(|b| format!("{b:02x}")).collect())
}
