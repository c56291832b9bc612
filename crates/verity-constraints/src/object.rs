//! # ObjectConstraints — Per-Class Constraint Record
//!
//! The compiled set of property- and method-level constraints for one
//! class, as assembled by discovery and consumed by the (out-of-scope)
//! validation engine.
//!
//! ## Invariants
//!
//! - A member name appears as a key only if at least one constraint was
//!   recorded for it; the append-style mutators create an entry on first
//!   use, so empty sequences cannot be constructed through this API.
//! - Within a member, constraints keep declaration-encounter order. No
//!   sorting, no deduplication — declaring the same kind twice keeps both.
//! - Member maps are `BTreeMap` so the serde encoding is deterministic;
//!   key order carries no meaning.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constraint::Constraint;

/// Property- and method-level constraints for a single class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectConstraints {
    /// The class this record describes.
    class: String,
    /// Constraints per property, in declaration order.
    property_constraints: BTreeMap<String, Vec<Constraint>>,
    /// Constraints per method, in declaration order.
    method_constraints: BTreeMap<String, Vec<Constraint>>,
}

impl ObjectConstraints {
    /// Create an empty record for the given class.
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            property_constraints: BTreeMap::new(),
            method_constraints: BTreeMap::new(),
        }
    }

    /// The class this record describes.
    pub fn class(&self) -> &str {
        &self.class
    }

    /// Append a constraint to a property, creating the entry on first use.
    pub fn add_property_constraint(
        &mut self,
        property: impl Into<String>,
        constraint: Constraint,
    ) {
        self.property_constraints
            .entry(property.into())
            .or_default()
            .push(constraint);
    }

    /// Append a constraint to a method, creating the entry on first use.
    pub fn add_method_constraint(&mut self, method: impl Into<String>, constraint: Constraint) {
        self.method_constraints
            .entry(method.into())
            .or_default()
            .push(constraint);
    }

    /// Constraints declared on a property, in declaration order.
    /// Empty for properties with no constraints.
    pub fn property_constraints(&self, property: &str) -> &[Constraint] {
        self.property_constraints
            .get(property)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Constraints declared on a method, in declaration order.
    /// Empty for methods with no constraints.
    pub fn method_constraints(&self, method: &str) -> &[Constraint] {
        self.method_constraints
            .get(method)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Names of all properties that carry at least one constraint.
    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.property_constraints.keys().map(String::as_str)
    }

    /// Names of all methods that carry at least one constraint.
    pub fn method_names(&self) -> impl Iterator<Item = &str> {
        self.method_constraints.keys().map(String::as_str)
    }

    /// True when any member of this class carries a constraint.
    pub fn has_constraints(&self) -> bool {
        !self.property_constraints.is_empty() || !self.method_constraints.is_empty()
    }

    /// Total number of constraints across all members.
    pub fn constraint_count(&self) -> usize {
        self.property_constraints
            .values()
            .chain(self.method_constraints.values())
            .map(Vec::len)
            .sum()
    }
}
