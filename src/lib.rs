//! Model Schema - generate JSON Schema descriptors from attribute metadata
//!
//! Provides:
//! - Read-only attribute/model types as supplied by an external model collaborator
//! - A JSON Schema exporter producing a constrained schema subset
//!   (type, format, maxLength, contentEncoding, items, values, required, properties)
//!
//! Schema generation never fails: unknown or missing type information
//! degrades to a permissive "any" fragment, and stale allow-list names are
//! dropped silently.

pub mod export;
pub mod models;

// Re-export commonly used types
pub use export::{ExportError, ExportResult, JSONSchemaExporter, SchemaOptions};
pub use models::{Attribute, AttributeType, Model, StringLength};
