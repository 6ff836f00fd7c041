//! Model container for the SDK

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Attribute;

/// A read-only mapping from attribute name to attribute definition.
///
/// The model is owned and lifecycle-managed by the external collaborator
/// that loads or constructs it; this crate only reads it. Iteration order
/// of the map is deterministic, so repeated schema builds over the same
/// model produce structurally identical output.
///
/// # Example
///
/// ```rust
/// use model_schema::models::{Attribute, Model};
///
/// let model = Model::new()
///     .with_attribute("id", Attribute::new("INTEGER").not_null())
///     .with_attribute("name", Attribute::new("STRING"));
/// assert_eq!(model.attributes.len(), 2);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Model {
    /// Attribute definitions keyed by attribute name
    #[serde(default)]
    pub attributes: BTreeMap<String, Attribute>,
}

impl Model {
    /// Create an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an attribute under the given name, replacing any existing one.
    pub fn with_attribute(mut self, name: &str, attribute: Attribute) -> Self {
        self.attributes.insert(name.to_string(), attribute);
        self
    }
}
