//! # ConstraintRegistry — Immutable-After-Build Constraint Lookup
//!
//! The full collection of [`ObjectConstraints`] across all discovered
//! classes. Populated once by discovery (or restored whole from cache),
//! then read many times by the validation engine.
//!
//! ## Lifecycle
//!
//! There is no incremental mutation after the initial build: callers that
//! need fresh data run discovery again and replace the registry. A registry
//! that has rejected a duplicate registration is in an unreliable state and
//! must be discarded.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::RegistryError;
use crate::object::ObjectConstraints;

/// Registry of per-class constraints, keyed by class name.
///
/// Implements `PartialEq` so a cached registry can be compared for content
/// equality against a freshly discovered one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConstraintRegistry {
    /// Per-class records. Key order carries no meaning; `BTreeMap` keeps
    /// the serde encoding deterministic for the cache digest.
    classes: BTreeMap<String, ObjectConstraints>,
}

impl ConstraintRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the constraints for one class.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateRegistration`] if the class is
    /// already present. Duplicates are rejected rather than overwritten;
    /// after a rejection the registry contents are not to be relied upon.
    pub fn register(&mut self, constraints: ObjectConstraints) -> Result<(), RegistryError> {
        let class = constraints.class().to_string();
        if self.classes.contains_key(&class) {
            return Err(RegistryError::DuplicateRegistration { class });
        }
        self.classes.insert(class, constraints);
        Ok(())
    }

    /// Look up the constraints for a class.
    pub fn get(&self, class: &str) -> Option<&ObjectConstraints> {
        self.classes.get(class)
    }

    /// True when the class has an entry in this registry.
    pub fn contains(&self, class: &str) -> bool {
        self.classes.contains_key(class)
    }

    /// Number of classes in the registry.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// True when no class has been registered.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Names of all registered classes.
    pub fn class_names(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(String::as_str)
    }

    /// All per-class records.
    pub fn iter(&self) -> impl Iterator<Item = &ObjectConstraints> {
        self.classes.values()
    }
}
