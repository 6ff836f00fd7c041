//! JSON Schema exporter for generating schema descriptors from attribute metadata.

use super::{ExportError, ExportResult};
use crate::models::{Attribute, AttributeType, Model, StringLength};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::debug;

/// Known canonical type keys.
///
/// Unknown keys deliberately have no variant; `from_key` returns `None` for
/// them and the resolver degrades to the permissive "any" fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    BigInt,
    Integer,
    SmallInt,
    MediumInt,
    TinyInt,
    Number,
    Decimal,
    Real,
    Float,
    DoublePrecision,
    Boolean,
    Char,
    Cidr,
    MacAddr,
    CiText,
    Text,
    String,
    Date,
    DateOnly,
    Time,
    Blob,
    Inet,
    Uuid,
    UuidV1,
    UuidV4,
    Json,
    Jsonb,
    Enum,
    Array,
    Virtual,
}

impl TypeKind {
    /// Look up a canonical type key, returning `None` for unrecognized keys.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "BIGINT" => Some(Self::BigInt),
            "INTEGER" => Some(Self::Integer),
            "SMALLINT" => Some(Self::SmallInt),
            "MEDIUMINT" => Some(Self::MediumInt),
            "TINYINT" => Some(Self::TinyInt),
            "NUMBER" => Some(Self::Number),
            "DECIMAL" => Some(Self::Decimal),
            "REAL" => Some(Self::Real),
            "FLOAT" => Some(Self::Float),
            "DOUBLE PRECISION" => Some(Self::DoublePrecision),
            "BOOLEAN" => Some(Self::Boolean),
            "CHAR" => Some(Self::Char),
            "CIDR" => Some(Self::Cidr),
            "MACADDR" => Some(Self::MacAddr),
            "CITEXT" => Some(Self::CiText),
            "TEXT" => Some(Self::Text),
            "STRING" => Some(Self::String),
            "DATE" => Some(Self::Date),
            "DATEONLY" => Some(Self::DateOnly),
            "TIME" => Some(Self::Time),
            "BLOB" => Some(Self::Blob),
            "INET" => Some(Self::Inet),
            "UUID" => Some(Self::Uuid),
            "UUIDV1" => Some(Self::UuidV1),
            "UUIDV4" => Some(Self::UuidV4),
            "JSON" => Some(Self::Json),
            "JSONB" => Some(Self::Jsonb),
            "ENUM" => Some(Self::Enum),
            "ARRAY" => Some(Self::Array),
            "VIRTUAL" => Some(Self::Virtual),
            _ => None,
        }
    }
}

/// Options recognized by the schema builder.
///
/// Unknown fields in a deserialized options document are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaOptions {
    /// Mark every included attribute as required regardless of nullability
    #[serde(default)]
    pub always_required: bool,
    /// Explicit ordered allow-list of attribute names to include;
    /// defaults to every attribute in the model
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<String>>,
    /// Attribute names to remove from the candidate set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<String>>,
    /// Alternative exclusion list; `exclude` takes precedence when both are given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private: Option<Vec<String>>,
}

/// Exporter for JSON Schema format.
pub struct JSONSchemaExporter;

impl JSONSchemaExporter {
    /// Export a model to JSON Schema format (SDK interface).
    ///
    /// # Arguments
    ///
    /// * `model` - The model whose attributes to export
    /// * `options` - Attribute selection and required-field options
    ///
    /// # Returns
    ///
    /// An `ExportResult` containing the pretty-printed object schema.
    ///
    /// # Example
    ///
    /// ```rust
    /// use model_schema::export::json_schema::{JSONSchemaExporter, SchemaOptions};
    /// use model_schema::models::{Attribute, Model};
    ///
    /// let model = Model::new().with_attribute("id", Attribute::new("INTEGER").not_null());
    ///
    /// let exporter = JSONSchemaExporter;
    /// let result = exporter.export(&model, &SchemaOptions::default()).unwrap();
    /// assert_eq!(result.format, "json_schema");
    /// assert!(result.content.contains("\"properties\""));
    /// ```
    pub fn export(
        &self,
        model: &Model,
        options: &SchemaOptions,
    ) -> Result<ExportResult, ExportError> {
        let schema = Self::build_schema(model, options);
        Ok(ExportResult {
            content: serde_json::to_string_pretty(&schema)
                .map_err(|e| ExportError::SerializationError(e.to_string()))?,
            format: "json_schema".to_string(),
        })
    }

    /// Build the object schema for a model.
    ///
    /// Computes the candidate attribute set (explicit allow-list or the full
    /// model, minus exclusions), resolves each attribute to a schema
    /// fragment, and collects the required-field list. Allow-list names
    /// missing from the model are skipped silently.
    ///
    /// # Arguments
    ///
    /// * `model` - The model whose attributes to export
    /// * `options` - Attribute selection and required-field options
    ///
    /// # Returns
    ///
    /// A `serde_json::Value` of the form
    /// `{"type": "object", "properties": {...}, "required": [...]}`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use model_schema::export::json_schema::{JSONSchemaExporter, SchemaOptions};
    /// use model_schema::models::{Attribute, Model};
    ///
    /// let model = Model::new()
    ///     .with_attribute("id", Attribute::new("INTEGER").not_null())
    ///     .with_attribute("name", Attribute::new("STRING"));
    ///
    /// let schema = JSONSchemaExporter::build_schema(&model, &SchemaOptions::default());
    /// assert_eq!(schema["type"], "object");
    /// assert_eq!(schema["required"], serde_json::json!(["id"]));
    /// ```
    pub fn build_schema(model: &Model, options: &SchemaOptions) -> Value {
        let excluded = options.exclude.as_deref().or(options.private.as_deref());

        let candidates: Vec<&String> = match &options.attributes {
            Some(names) => names.iter().collect(),
            None => model.attributes.keys().collect(),
        };

        let mut properties = serde_json::Map::new();
        let mut required: Vec<String> = Vec::new();

        for name in candidates {
            if excluded.is_some_and(|names| names.contains(name)) {
                continue;
            }
            let Some(attribute) = model.attributes.get(name) else {
                debug!("Skipping attribute '{}' not present in the model", name);
                continue;
            };
            properties.insert(name.clone(), Self::resolve_attribute(attribute));
            if options.always_required || !attribute.allow_null {
                required.push(name.clone());
            }
        }

        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }

    /// Resolve a single attribute to a schema fragment.
    ///
    /// Missing or unrecognized type information degrades to the permissive
    /// "any" fragment rather than an error. When the attribute permits null,
    /// the fragment's `type` is widened to additionally accept `"null"`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use model_schema::export::json_schema::JSONSchemaExporter;
    /// use model_schema::models::Attribute;
    ///
    /// let fragment = JSONSchemaExporter::resolve_attribute(&Attribute::new("BIGINT").not_null());
    /// assert_eq!(fragment, serde_json::json!({"type": "integer", "format": "int64"}));
    /// ```
    pub fn resolve_attribute(attribute: &Attribute) -> Value {
        let mut fragment = Self::resolve_type(attribute.type_def.as_ref());
        if attribute.allow_null {
            Self::push_null_type(&mut fragment);
        }
        fragment
    }

    /// Resolve a bare type descriptor, without nullability expansion.
    fn resolve_type(type_def: Option<&AttributeType>) -> Value {
        let Some(ty) = type_def else {
            return Self::any_fragment();
        };
        match TypeKind::from_key(&ty.key) {
            Some(kind) => Self::type_fragment(kind, ty),
            None => Self::any_fragment(),
        }
    }

    /// Map a known type kind to its schema fragment.
    fn type_fragment(kind: TypeKind, ty: &AttributeType) -> Value {
        match kind {
            TypeKind::BigInt => json!({"type": "integer", "format": "int64"}),
            TypeKind::Integer => json!({"type": "integer", "format": "int32"}),
            TypeKind::SmallInt | TypeKind::MediumInt => json!({"type": "integer"}),
            TypeKind::TinyInt | TypeKind::Number | TypeKind::Decimal | TypeKind::Real => {
                json!({"type": "number"})
            }
            TypeKind::Float => json!({"type": "number", "format": "float"}),
            TypeKind::DoublePrecision => json!({"type": "number", "format": "double"}),
            TypeKind::Boolean => json!({"type": "boolean"}),
            TypeKind::Char | TypeKind::Cidr | TypeKind::MacAddr => json!({"type": "string"}),
            TypeKind::CiText | TypeKind::Text | TypeKind::String => Self::string_fragment(ty),
            TypeKind::Date => json!({"type": "string", "format": "date-time"}),
            TypeKind::DateOnly => json!({"type": "string", "format": "date"}),
            TypeKind::Time => json!({"type": "string", "format": "time"}),
            TypeKind::Blob => json!({"type": "string", "contentEncoding": "base64"}),
            TypeKind::Inet => json!({
                "type": [
                    {"type": "string", "format": "ipv4"},
                    {"type": "string", "format": "ipv6"},
                ]
            }),
            TypeKind::Uuid | TypeKind::UuidV1 | TypeKind::UuidV4 => {
                json!({"type": "string", "format": "uuid"})
            }
            TypeKind::Json | TypeKind::Jsonb => Self::any_fragment(),
            TypeKind::Enum => json!({"type": "enum", "values": ty.values.clone()}),
            TypeKind::Array => {
                let items = ty
                    .items
                    .as_deref()
                    .map(Self::resolve_attribute)
                    .unwrap_or_else(Self::any_fragment);
                json!({"type": "array", "items": items})
            }
            TypeKind::Virtual => Self::resolve_type(ty.returns.as_deref()),
        }
    }

    /// Build a string fragment, resolving the length option into `maxLength`.
    fn string_fragment(ty: &AttributeType) -> Value {
        let mut fragment = json!({"type": "string"});
        if let Some(max_length) = ty.length.as_ref().and_then(Self::resolve_length) {
            fragment["maxLength"] = json!(max_length);
        }
        fragment
    }

    /// Resolve a length option to a concrete bound.
    ///
    /// Named storage tiers have no canonical numeric meaning to schema
    /// consumers, so they are resolved to literal byte-length bounds.
    /// Unrecognized tier names resolve to no bound at all.
    fn resolve_length(length: &StringLength) -> Option<u64> {
        match length {
            StringLength::Chars(chars) => Some(*chars),
            StringLength::Named(tier) => match tier.as_str() {
                "tiny" => Some(255),
                "medium" => Some(16_777_215),
                "long" => Some(4_294_967_295),
                _ => None,
            },
        }
    }

    /// The permissive fallback fragment for unknown or missing types.
    fn any_fragment() -> Value {
        json!({"type": ["object", "array", "boolean", "number", "string"]})
    }

    /// Widen a fragment's `type` to additionally accept null.
    fn push_null_type(fragment: &mut Value) {
        let Some(type_field) = fragment.get_mut("type") else {
            return;
        };
        match type_field {
            Value::Array(types) => types.push(json!("null")),
            single => {
                let previous = single.take();
                *single = json!([previous, "null"]);
            }
        }
    }
}
