//! End-to-end discovery over real type manifests on disk: filesystem
//! locator, metadata table, and registry working together.

use serde_json::json;
use verity_constraints::{
    AttributeDecl, ConstraintDiscoverer, DiscoveryError, MemberMetadata, MetadataTable,
    TypeMetadata,
};

fn domain_table() -> MetadataTable {
    let mut table = MetadataTable::new();
    table
        .register(
            TypeMetadata::new("User")
                .with_property(
                    MemberMetadata::new("email")
                        .with_attribute(AttributeDecl::constraint("required", "user.email.required"))
                        .with_attribute(AttributeDecl::constraint("email", "user.email.invalid")),
                )
                .with_method(MemberMetadata::new("validate_password").with_attribute(
                    AttributeDecl::constraint_with_params(
                        "min_length",
                        json!({"len": 8}),
                        "user.password.too_short",
                    ),
                )),
        )
        .unwrap();
    table.register(TypeMetadata::new("Order")).unwrap();
    table
}

#[test]
fn discovers_from_manifests_across_nested_directories() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("root.types.json"), r#"["User"]"#).unwrap();
    let nested = dir.path().join("orders");
    std::fs::create_dir(&nested).unwrap();
    std::fs::write(nested.join("orders.types.json"), r#"["Order"]"#).unwrap();

    let table = domain_table();
    let registry = ConstraintDiscoverer::new([dir.path()])
        .discover(&table)
        .unwrap();

    assert_eq!(registry.len(), 2);
    let user = registry.get("User").unwrap();
    assert_eq!(user.property_constraints("email").len(), 2);
    assert_eq!(user.method_constraints("validate_password").len(), 1);
    assert!(!registry.get("Order").unwrap().has_constraints());
}

#[test]
fn non_recursive_discovery_ignores_nested_manifests() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("root.types.json"), r#"["User"]"#).unwrap();
    let nested = dir.path().join("orders");
    std::fs::create_dir(&nested).unwrap();
    std::fs::write(nested.join("orders.types.json"), r#"["Order"]"#).unwrap();

    let table = domain_table();
    let registry = ConstraintDiscoverer::new([dir.path()])
        .recursive(false)
        .discover(&table)
        .unwrap();

    assert_eq!(registry.class_names().collect::<Vec<_>>(), vec!["User"]);
}

#[test]
fn rerunning_discovery_over_unchanged_sources_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("all.types.json"), r#"["User", "Order"]"#).unwrap();

    let table = domain_table();
    let discoverer = ConstraintDiscoverer::new([dir.path()]);
    let first = discoverer.discover(&table).unwrap();
    let second = discoverer.discover(&table).unwrap();

    assert_eq!(first, second);
}

#[test]
fn manifest_naming_an_unknown_class_fails_discovery() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("bad.types.json"), r#"["Unmapped"]"#).unwrap();

    let err = ConstraintDiscoverer::new([dir.path()])
        .discover(&domain_table())
        .unwrap_err();
    assert!(matches!(err, DiscoveryError::TypeResolution { .. }));
}
