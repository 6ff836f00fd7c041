//! Export functionality
//!
//! Provides the JSON Schema exporter that turns a model's attribute
//! metadata into a JSON-Schema-subset descriptor.

pub mod json_schema;

/// Result of an export operation.
///
/// Contains the exported content and format identifier.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
#[must_use = "export results contain the exported content and should be used"]
pub struct ExportResult {
    /// Exported content as a string
    pub content: String,
    /// Format identifier
    pub format: String,
}

/// Error during export
#[derive(Debug, thiserror::Error, serde::Serialize, serde::Deserialize)]
pub enum ExportError {
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

// Re-export for convenience
pub use json_schema::{JSONSchemaExporter, SchemaOptions};
