//! # Constraint Discovery — Compiling the Registry
//!
//! [`ConstraintDiscoverer`] orchestrates the type locator and the metadata
//! table into a [`ConstraintRegistry`]: locate classes under the configured
//! source locations, resolve each one's metadata, walk its properties and
//! methods in declaration order, and build one constraint per qualifying
//! attribute.
//!
//! ## Failure Semantics
//!
//! Discovery is all-or-nothing. A class the locator yields but the table
//! cannot resolve, a duplicate class name, or an unreadable source
//! location each fail the whole run — a partial registry is never
//! returned. Runs are idempotent: fixed paths and a fixed table produce
//! registries equal in content on every run.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::error::DiscoveryError;
use crate::locator::{FsTypeLocator, TypeLocator};
use crate::metadata::{AttributeDecl, ConstraintDecl, MemberMetadata, MetadataTable, TypeMetadata};
use crate::object::ObjectConstraints;
use crate::registry::ConstraintRegistry;

/// Builds a [`ConstraintRegistry`] from a set of source locations.
///
/// Scanning is recursive by default, matching how source trees are
/// normally laid out; use [`recursive`](Self::recursive) to restrict the
/// scan to the configured directories themselves.
#[derive(Debug)]
pub struct ConstraintDiscoverer<L = FsTypeLocator> {
    paths: Vec<PathBuf>,
    recursive: bool,
    locator: L,
}

impl ConstraintDiscoverer<FsTypeLocator> {
    /// Create a discoverer over the given source locations, using the
    /// default filesystem locator.
    pub fn new(paths: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        Self::with_locator(paths, FsTypeLocator::new())
    }
}

impl<L: TypeLocator> ConstraintDiscoverer<L> {
    /// Create a discoverer with an injected locator.
    pub fn with_locator(paths: impl IntoIterator<Item = impl Into<PathBuf>>, locator: L) -> Self {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
            recursive: true,
            locator,
        }
    }

    /// Set whether the locator descends into subdirectories.
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Run discovery and return the compiled registry.
    ///
    /// Every located class is registered, including classes with no
    /// constraints on any member — their record simply has empty maps.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError::TypeResolution`] for a located class
    /// missing from the table, [`DiscoveryError::Registry`] when the same
    /// class is located twice, and locator errors unchanged.
    pub fn discover(&self, table: &MetadataTable) -> Result<ConstraintRegistry, DiscoveryError> {
        let mut registry = ConstraintRegistry::new();
        let types = self.locator.find_all_types(&self.paths, self.recursive)?;

        for type_name in &types {
            let metadata =
                table
                    .resolve(type_name)
                    .ok_or_else(|| DiscoveryError::TypeResolution {
                        type_name: type_name.clone(),
                        reason: "type has no entry in the metadata table".to_string(),
                    })?;
            let constraints = compile_type(metadata);
            debug!(
                class = %type_name,
                constraints = constraints.constraint_count(),
                "compiled object constraints"
            );
            registry.register(constraints)?;
        }

        info!(classes = registry.len(), "constraint discovery complete");
        Ok(registry)
    }
}

/// Walk one class's members and assemble its constraint record.
fn compile_type(metadata: &TypeMetadata) -> ObjectConstraints {
    let mut object = ObjectConstraints::new(metadata.name());
    for property in metadata.properties() {
        for decl in constraint_decls(property) {
            object.add_property_constraint(property.name(), decl.build());
        }
    }
    for method in metadata.methods() {
        for decl in constraint_decls(method) {
            object.add_method_constraint(method.name(), decl.build());
        }
    }
    object
}

/// The qualifying attributes of a member, in declaration order.
fn constraint_decls(member: &MemberMetadata) -> impl Iterator<Item = &ConstraintDecl> {
    member
        .attributes()
        .iter()
        .filter_map(AttributeDecl::as_constraint)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Locator stub that returns a fixed class list without touching the
    /// filesystem.
    struct FixedLocator(Vec<String>);

    impl TypeLocator for FixedLocator {
        fn find_all_types(
            &self,
            _paths: &[PathBuf],
            _recursive: bool,
        ) -> Result<Vec<String>, DiscoveryError> {
            Ok(self.0.clone())
        }
    }

    fn user_metadata() -> TypeMetadata {
        TypeMetadata::new("User")
            .with_property(
                MemberMetadata::new("email")
                    .with_attribute(AttributeDecl::constraint("required", "user.email.required"))
                    .with_attribute(AttributeDecl::constraint("email", "user.email.invalid")),
            )
            .with_property(MemberMetadata::new("display_name"))
            .with_method(
                MemberMetadata::new("validate_password").with_attribute(
                    AttributeDecl::constraint_with_params(
                        "min_length",
                        json!({"len": 8}),
                        "user.password.too_short",
                    ),
                ),
            )
    }

    fn discoverer(classes: &[&str]) -> ConstraintDiscoverer<FixedLocator> {
        ConstraintDiscoverer::with_locator(
            ["src"],
            FixedLocator(classes.iter().map(ToString::to_string).collect()),
        )
    }

    #[test]
    fn annotated_members_get_exactly_their_declared_constraints() {
        let mut table = MetadataTable::new();
        table.register(user_metadata()).unwrap();

        let registry = discoverer(&["User"]).discover(&table).unwrap();
        let user = registry.get("User").unwrap();

        let email = user.property_constraints("email");
        assert_eq!(email.len(), 2);
        assert_eq!(email[0].kind, "required");
        assert_eq!(email[1].kind, "email");

        let password = user.method_constraints("validate_password");
        assert_eq!(password.len(), 1);
        assert_eq!(password[0].kind, "min_length");
        assert_eq!(password[0].params, json!({"len": 8}));

        // Unannotated members never appear as keys.
        assert!(user.property_constraints("display_name").is_empty());
        assert_eq!(user.property_names().collect::<Vec<_>>(), vec!["email"]);
    }

    #[test]
    fn marker_attributes_are_skipped() {
        let mut table = MetadataTable::new();
        table
            .register(
                TypeMetadata::new("Account").with_property(
                    MemberMetadata::new("iban")
                        .with_attribute(AttributeDecl::marker("indexed"))
                        .with_attribute(AttributeDecl::constraint("required", "account.iban")),
                ),
            )
            .unwrap();

        let registry = discoverer(&["Account"]).discover(&table).unwrap();
        let account = registry.get("Account").unwrap();
        assert_eq!(account.property_constraints("iban").len(), 1);
    }

    #[test]
    fn constraint_free_classes_are_still_registered() {
        let mut table = MetadataTable::new();
        table.register(user_metadata()).unwrap();
        table.register(TypeMetadata::new("Order")).unwrap();

        let registry = discoverer(&["User", "Order"]).discover(&table).unwrap();
        assert_eq!(registry.len(), 2);
        let order = registry.get("Order").unwrap();
        assert!(!order.has_constraints());
    }

    #[test]
    fn unresolvable_class_fails_the_whole_run() {
        let mut table = MetadataTable::new();
        table.register(user_metadata()).unwrap();

        let err = discoverer(&["User", "Ghost"]).discover(&table).unwrap_err();
        assert!(matches!(
            err,
            DiscoveryError::TypeResolution { type_name, .. } if type_name == "Ghost"
        ));
    }

    #[test]
    fn duplicate_class_from_locator_is_rejected() {
        let mut table = MetadataTable::new();
        table.register(user_metadata()).unwrap();

        let err = discoverer(&["User", "User"]).discover(&table).unwrap_err();
        assert!(matches!(err, DiscoveryError::Registry(_)));
    }

    #[test]
    fn discovery_is_idempotent_in_content() {
        let mut table = MetadataTable::new();
        table.register(user_metadata()).unwrap();
        table.register(TypeMetadata::new("Order")).unwrap();

        let discoverer = discoverer(&["User", "Order"]);
        let first = discoverer.discover(&table).unwrap();
        let second = discoverer.discover(&table).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_location_set_yields_an_empty_registry() {
        let table = MetadataTable::new();
        let registry = discoverer(&[]).discover(&table).unwrap();
        assert!(registry.is_empty());
    }
}
