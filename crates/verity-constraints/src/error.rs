//! # Error Types — Discovery and Registry Failures
//!
//! Structured errors for constraint discovery. All errors use `thiserror`
//! for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Resolution failures name the type that could not be resolved and fail
//!   the whole discovery run; partial registries are never returned.
//! - Duplicate registrations are rejected, not overwritten. A registry that
//!   has rejected a registration is in an unreliable state and callers must
//!   discard it.
//! - Nothing here is retried; retry policy belongs to the embedding
//!   application.

use thiserror::Error;

/// Errors from registering constraints into a [`ConstraintRegistry`].
///
/// [`ConstraintRegistry`]: crate::ConstraintRegistry
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Constraints for the same class were registered twice.
    #[error("constraints for class \"{class}\" are already registered")]
    DuplicateRegistration {
        /// The class whose registration collided.
        class: String,
    },
}

/// Errors from building a [`MetadataTable`].
///
/// [`MetadataTable`]: crate::MetadataTable
#[derive(Error, Debug)]
pub enum MetadataError {
    /// Metadata for the same type name was registered twice.
    #[error("metadata for type \"{name}\" is already registered")]
    DuplicateType {
        /// The type name whose registration collided.
        name: String,
    },
}

/// Errors from a constraint discovery run.
#[derive(Error, Debug)]
pub enum DiscoveryError {
    /// A located class has no metadata and cannot be walked.
    #[error("cannot resolve type \"{type_name}\": {reason}")]
    TypeResolution {
        /// The class identifier that failed to resolve.
        type_name: String,
        /// Why resolution failed.
        reason: String,
    },

    /// A type manifest file exists but does not parse.
    #[error("type manifest \"{path}\" is invalid: {reason}")]
    Manifest {
        /// Path to the offending manifest file.
        path: String,
        /// Why the manifest could not be parsed.
        reason: String,
    },

    /// The same class was registered twice during one run.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// I/O error while scanning the configured source locations.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
