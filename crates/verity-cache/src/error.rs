//! # Error Types — Cache Failures
//!
//! Structured errors for registry persistence. The central distinction is
//! corruption versus absence: a missing cache file is a normal `Ok(None)`
//! outcome of `get`, while a file that exists but cannot be decoded is a
//! [`CacheError::Corruption`] the caller must see. The two are never
//! conflated.

use thiserror::Error;
use verity_constraints::DiscoveryError;

/// Errors from reading or writing the registry cache.
#[derive(Error, Debug)]
pub enum CacheError {
    /// The cache file exists but does not decode into a valid registry.
    #[error("cache file \"{path}\" is corrupt: {reason}")]
    Corruption {
        /// Path of the corrupt cache file.
        path: String,
        /// Why decoding failed.
        reason: String,
    },

    /// Underlying storage failed for reasons unrelated to corruption.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from the cache-first build flow.
#[derive(Error, Debug)]
pub enum WarmupError {
    /// Rebuilding the registry from source failed.
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    /// The cache failed in a way the flow does not recover from.
    #[error(transparent)]
    Cache(#[from] CacheError),
}
