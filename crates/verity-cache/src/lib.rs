//! # verity-cache — Registry Persistence
//!
//! Persists a built [`ConstraintRegistry`] so later processes can skip the
//! discovery scan. The cache is a pure byte boundary: it stores the
//! registry's explicit serde encoding inside a versioned, digest-checked
//! envelope and guarantees readers never observe a torn file.
//!
//! ## Key Design Principles
//!
//! 1. **Absence is not corruption.** A missing cache file is a normal
//!    `Ok(None)`; a file that exists but does not decode is a hard
//!    [`CacheError::Corruption`]. Callers decide how to recover —
//!    [`load_or_discover`] implements the recommended rebuild-and-repair
//!    policy.
//!
//! 2. **Atomic replacement.** `set` writes a temporary sibling and renames
//!    it over the target; concurrent readers see the old blob or the new
//!    one, never a partial write. Last write wins at whole-blob
//!    granularity.
//!
//! 3. **Flush never fails.** Deleting the entry is best-effort by design:
//!    cache absence is always a safe state to fall back to.
//!
//! ## Crate Policy
//!
//! - Depends only on `verity-constraints` internally.
//! - Synchronous, bounded operations; no retry or backoff anywhere.
//! - No `unsafe` code, no `panic!()` or `.unwrap()` outside tests.
//!
//! [`ConstraintRegistry`]: verity_constraints::ConstraintRegistry

pub mod cache;
pub mod error;
pub mod warm;

// Re-export primary types for ergonomic imports.
pub use cache::{FileRegistryCache, RegistryCache, CACHE_FORMAT_VERSION};
pub use error::{CacheError, WarmupError};
pub use warm::load_or_discover;
