//! Models module for the SDK
//!
//! Defines the attribute metadata structures consumed by the schema
//! exporter. These are simplified, read-only views of a model as provided
//! by the external model collaborator.

pub mod attribute;
pub mod model;

pub use attribute::{Attribute, AttributeType, StringLength};
pub use model::Model;
