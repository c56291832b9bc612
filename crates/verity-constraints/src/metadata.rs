//! # Metadata Table — Explicit Constraint Declarations
//!
//! The registration-table replacement for attribute reflection: a
//! statically enumerable mapping from class name to an ordered record of
//! members and the attributes declared on them. Deployments populate the
//! table in code, either by hand or from a codegen step; discovery only
//! reads it.
//!
//! ## Ordering
//!
//! `Vec`s carry declaration order end to end: properties and methods are
//! walked in the order they were added to [`TypeMetadata`], and attributes
//! in the order they were added to [`MemberMetadata`]. Discovery inherits
//! that order without sorting.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::constraint::Constraint;
use crate::error::MetadataError;

/// A declared constraint attribute: the blueprint from which discovery
/// builds one [`Constraint`] per declaration.
#[derive(Debug, Clone)]
pub struct ConstraintDecl {
    kind: String,
    params: Value,
    error_message_id: String,
}

impl ConstraintDecl {
    /// Declare a parameterless constraint of the given kind.
    pub fn new(kind: impl Into<String>, error_message_id: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            params: Value::Object(serde_json::Map::new()),
            error_message_id: error_message_id.into(),
        }
    }

    /// Declare a constraint carrying kind-specific parameters.
    pub fn with_params(
        kind: impl Into<String>,
        params: Value,
        error_message_id: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            params,
            error_message_id: error_message_id.into(),
        }
    }

    /// The factory capability: produce one constraint from this declaration.
    /// Each call yields a fresh instance equal in value to every other.
    pub fn build(&self) -> Constraint {
        Constraint::with_params(
            self.kind.clone(),
            self.params.clone(),
            self.error_message_id.clone(),
        )
    }
}

/// One attribute recorded against a member.
///
/// Only the `Constraint` variant participates in discovery; `Marker`
/// attributes (anything else a codegen step may record) are skipped.
#[derive(Debug, Clone)]
pub enum AttributeDecl {
    /// An attribute that declares a validation constraint.
    Constraint(ConstraintDecl),
    /// Any other attribute, identified by name and ignored by discovery.
    Marker(String),
}

impl AttributeDecl {
    /// Shorthand for a parameterless constraint attribute.
    pub fn constraint(kind: impl Into<String>, error_message_id: impl Into<String>) -> Self {
        Self::Constraint(ConstraintDecl::new(kind, error_message_id))
    }

    /// Shorthand for a parameterized constraint attribute.
    pub fn constraint_with_params(
        kind: impl Into<String>,
        params: Value,
        error_message_id: impl Into<String>,
    ) -> Self {
        Self::Constraint(ConstraintDecl::with_params(kind, params, error_message_id))
    }

    /// Shorthand for a non-constraint attribute.
    pub fn marker(name: impl Into<String>) -> Self {
        Self::Marker(name.into())
    }

    /// The capability probe: constraint-declaring attributes return their
    /// declaration, all others return `None`.
    pub fn as_constraint(&self) -> Option<&ConstraintDecl> {
        match self {
            Self::Constraint(decl) => Some(decl),
            Self::Marker(_) => None,
        }
    }
}

/// Metadata for one property or method: its name and the attributes
/// declared on it, in declaration order.
#[derive(Debug, Clone)]
pub struct MemberMetadata {
    name: String,
    attributes: Vec<AttributeDecl>,
}

impl MemberMetadata {
    /// Create a member record with no attributes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
        }
    }

    /// Append an attribute declaration.
    pub fn with_attribute(mut self, attribute: AttributeDecl) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// The member name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All attributes in declaration order.
    pub fn attributes(&self) -> &[AttributeDecl] {
        &self.attributes
    }
}

/// Metadata for one class: its declared properties and methods, each in
/// declaration order.
#[derive(Debug, Clone)]
pub struct TypeMetadata {
    name: String,
    properties: Vec<MemberMetadata>,
    methods: Vec<MemberMetadata>,
}

impl TypeMetadata {
    /// Create a type record with no members.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Append a declared property.
    pub fn with_property(mut self, property: MemberMetadata) -> Self {
        self.properties.push(property);
        self
    }

    /// Append a declared method.
    pub fn with_method(mut self, method: MemberMetadata) -> Self {
        self.methods.push(method);
        self
    }

    /// The class name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared properties in declaration order.
    pub fn properties(&self) -> &[MemberMetadata] {
        &self.properties
    }

    /// Declared methods in declaration order.
    pub fn methods(&self) -> &[MemberMetadata] {
        &self.methods
    }
}

/// The full registration table: class name → type metadata.
#[derive(Debug, Clone, Default)]
pub struct MetadataTable {
    types: BTreeMap<String, TypeMetadata>,
}

impl MetadataTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register metadata for one type.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError::DuplicateType`] if the type name is already
    /// present.
    pub fn register(&mut self, metadata: TypeMetadata) -> Result<(), MetadataError> {
        let name = metadata.name().to_string();
        if self.types.contains_key(&name) {
            return Err(MetadataError::DuplicateType { name });
        }
        self.types.insert(name, metadata);
        Ok(())
    }

    /// Look up the metadata for a type name.
    pub fn resolve(&self, name: &str) -> Option<&TypeMetadata> {
        self.types.get(name)
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// True when no type has been registered.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
