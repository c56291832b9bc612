//! # verity-constraints — Constraint Model and Discovery
//!
//! Compiles declarative validation rules attached to class properties and
//! methods into an immutable-after-build [`ConstraintRegistry`]. Classes
//! declare their constraints through an explicit [`MetadataTable`] — a
//! statically enumerable registration table populated in code or by a
//! codegen step — and [`ConstraintDiscoverer`] turns the table plus a set
//! of scanned source locations into per-class [`ObjectConstraints`].
//!
//! ## Key Design Principles
//!
//! 1. **Explicit declarations over reflection.** There is no runtime
//!    attribute scanning; the metadata table is the single source of truth
//!    and its `Vec`s carry declaration order end to end.
//!
//! 2. **Constraints are inert data.** A [`Constraint`] is a tagged,
//!    serialization-safe value (`kind` + JSON params + error message id).
//!    Evaluation lives in a separate engine outside this workspace.
//!
//! 3. **All-or-nothing discovery.** An unresolvable class or a duplicate
//!    registration fails the whole run; partial registries are never
//!    returned.
//!
//! 4. **Build once, read everywhere.** A built registry is never mutated;
//!    consumers that need fresh data rebuild and replace it. All public
//!    types are `Send + Sync` with no interior mutability.
//!
//! ## Crate Policy
//!
//! - Leaf crate of the workspace DAG; no internal dependencies.
//! - No `unsafe` code, no `panic!()` or `.unwrap()` outside tests.
//! - Public data-model types derive `Debug`, `Clone`, `PartialEq`, and
//!   implement `Serialize`/`Deserialize`.

pub mod constraint;
pub mod discovery;
pub mod error;
pub mod locator;
pub mod metadata;
pub mod object;
pub mod registry;

// Re-export primary types for ergonomic imports.
pub use constraint::Constraint;
pub use discovery::ConstraintDiscoverer;
pub use error::{DiscoveryError, MetadataError, RegistryError};
pub use locator::{FsTypeLocator, TypeLocator, TYPE_MANIFEST_SUFFIX};
pub use metadata::{AttributeDecl, ConstraintDecl, MemberMetadata, MetadataTable, TypeMetadata};
pub use object::ObjectConstraints;
pub use registry::ConstraintRegistry;
