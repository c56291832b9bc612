//! # Constraint — Serialized Validation Rule
//!
//! Defines [`Constraint`], the value produced by discovery for every
//! constraint declaration it encounters. The evaluation engine that applies
//! a constraint to a value lives outside this workspace; here a constraint
//! is an inert, serialization-safe payload.
//!
//! ## Serialization Contract
//!
//! A constraint encodes as a tagged record: the `kind` names the constraint
//! type, `params` carries its kind-specific parameters as a JSON object,
//! and `error_message_id` links a failure of this constraint to a message
//! template. This explicit encoding is what makes the registry cache safe —
//! no constraint ever round-trips through opaque whole-object bytes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single validation rule attached to a class property or method.
///
/// Equality is by value: two constraints are equal when kind, parameters,
/// and error message id all match. Discovery never inspects `params`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constraint {
    /// Identifier of the constraint kind, e.g. `"required"` or `"min_length"`.
    pub kind: String,
    /// Kind-specific parameters as a JSON object. Empty object when the
    /// kind takes no parameters.
    pub params: Value,
    /// Identifier of the error message template rendered when this
    /// constraint fails.
    pub error_message_id: String,
}

impl Constraint {
    /// Create a parameterless constraint of the given kind.
    pub fn new(kind: impl Into<String>, error_message_id: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            params: Value::Object(serde_json::Map::new()),
            error_message_id: error_message_id.into(),
        }
    }

    /// Create a constraint carrying kind-specific parameters.
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
}
