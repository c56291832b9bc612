//! # verity-messages — Error Message Templates
//!
//! Resolves opaque error-message identifiers to display text. Constraints
//! carry an `error_message_id`; when the validation engine reports a
//! failure, this crate turns that id (plus an optional locale) into the
//! template the application renders.
//!
//! ## Key Design Principles
//!
//! 1. **Resolution is a strategy, not a hidden default.** The
//!    [`MessageTemplateResolver`] trait is the seam; [`IdentityResolver`]
//!    is merely one injectable variant that keeps the system total with
//!    zero configuration.
//!
//! 2. **Resolution never fails.** Every resolver is total over its
//!    domain — the worst case is the identifier itself.
//!
//! 3. **No shared mutable state.** Resolvers hold nothing mutable after
//!    construction and are safe to consult from concurrent call sites
//!    without synchronization.
//!
//! ## Crate Policy
//!
//! - Independent of the other `verity-*` crates; couples to them only
//!   through the message-id convention.
//! - No `unsafe` code, no `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod resolver;

// Re-export primary types for ergonomic imports.
pub use error::TemplateLoadError;
pub use resolver::{IdentityResolver, MessageTemplateResolver, TableResolver};
