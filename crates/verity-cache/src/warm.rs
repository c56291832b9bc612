//! # Cache-First Build Flow
//!
//! The canonical consumption pattern for the cache: serve the persisted
//! registry when one exists, otherwise run discovery and persist the
//! result for the next process.
//!
//! ## Corruption Policy
//!
//! A corrupt cache entry is logged, rebuilt from source, and overwritten
//! with the fresh result — the rebuild-and-repair policy the cache layer
//! itself deliberately does not hardcode. Cache I/O failures and discovery
//! failures propagate unchanged; nothing is retried.

use tracing::{debug, warn};

use verity_constraints::{ConstraintDiscoverer, ConstraintRegistry, MetadataTable, TypeLocator};

use crate::cache::RegistryCache;
use crate::error::{CacheError, WarmupError};

/// Return the cached registry, or discover one and cache it.
///
/// # Errors
///
/// Returns [`WarmupError::Cache`] for cache I/O failures (a corrupt entry
/// is recovered from, an unreadable one is not) and
/// [`WarmupError::Discovery`] when the rebuild itself fails.
pub fn load_or_discover<C, L>(
    cache: &C,
    discoverer: &ConstraintDiscoverer<L>,
    table: &MetadataTable,
) -> Result<ConstraintRegistry, WarmupError>
where
    C: RegistryCache,
    L: TypeLocator,
{
    match cache.get() {
        Ok(Some(registry)) => {
            debug!(classes = registry.len(), "using cached constraint registry");
            return Ok(registry);
        }
        Ok(None) => {}
        Err(CacheError::Corruption { path, reason }) => {
            warn!(%path, %reason, "registry cache is corrupt; rebuilding from source");
        }
        Err(err) => return Err(err.into()),
    }

    let registry = discoverer.discover(table)?;
    cache.set(&registry)?;
    Ok(registry)
}
