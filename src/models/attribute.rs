//! Attribute model for the SDK

use serde::{Deserialize, Serialize};

/// Length option for string-like types.
///
/// Either a literal character count or a named storage tier
/// ("tiny", "medium", "long") that the schema exporter resolves
/// to a concrete byte-length bound.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum StringLength {
    /// Literal maximum length
    Chars(u64),
    /// Named storage tier (e.g. "tiny", "medium", "long")
    Named(String),
}

/// Type descriptor carried by an attribute.
///
/// Holds the canonical type key plus the type-specific parameters used by
/// composite and parameterized types: a length option for strings, permitted
/// values for enumerations, an element attribute for arrays, and a return
/// type for virtual (computed) attributes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AttributeType {
    /// Canonical uppercase type key (e.g. "STRING", "ARRAY", "ENUM")
    pub key: String,
    /// Length option for string types
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<StringLength>,
    /// Permitted values for enumeration types (order preserved)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
    /// Element attribute for array types; carries its own nullability
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Attribute>>,
    /// Declared return type for virtual (computed) attributes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub returns: Option<Box<AttributeType>>,
}

impl AttributeType {
    /// Create a type descriptor with the given type key.
    ///
    /// The key is normalized to its canonical uppercase form, so
    /// `AttributeType::new("string")` and `AttributeType::new("STRING")`
    /// are equivalent.
    ///
    /// # Example
    ///
    /// ```rust
    /// use model_schema::models::AttributeType;
    ///
    /// let ty = AttributeType::new("string");
    /// assert_eq!(ty.key, "STRING");
    /// ```
    pub fn new(key: &str) -> Self {
        Self {
            key: normalize_type_key(key),
            length: None,
            values: Vec::new(),
            items: None,
            returns: None,
        }
    }

    /// Set the length option for a string type.
    pub fn with_length(mut self, length: StringLength) -> Self {
        self.length = Some(length);
        self
    }

    /// Create an ENUM type descriptor over the given permitted values.
    pub fn enumeration(values: Vec<String>) -> Self {
        Self {
            values,
            ..Self::new("ENUM")
        }
    }

    /// Create an ARRAY type descriptor over the given element attribute.
    pub fn array(element: Attribute) -> Self {
        Self {
            items: Some(Box::new(element)),
            ..Self::new("ARRAY")
        }
    }

    /// Create a VIRTUAL type descriptor with the given return type.
    pub fn virtual_returning(returns: AttributeType) -> Self {
        Self {
            returns: Some(Box::new(returns)),
            ..Self::new("VIRTUAL")
        }
    }
}

/// Attribute model representing a named column or field of a model
///
/// An attribute pairs a type descriptor with a nullability flag. A missing
/// type descriptor is valid input and resolves to the permissive "any"
/// schema fragment rather than an error.
///
/// # Example
///
/// ```rust
/// use model_schema::models::Attribute;
///
/// let attribute = Attribute::new("STRING");
/// assert!(attribute.allow_null);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Attribute {
    /// Type descriptor; absent types resolve to the permissive fallback
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_def: Option<AttributeType>,
    /// Whether the attribute permits a null value (default: true)
    #[serde(default = "default_true")]
    pub allow_null: bool,
}

fn default_true() -> bool {
    true
}

impl Attribute {
    /// Create a nullable attribute with the given type key.
    pub fn new(key: &str) -> Self {
        Self::of(AttributeType::new(key))
    }

    /// Create a nullable attribute with the given type descriptor.
    pub fn of(type_def: AttributeType) -> Self {
        Self {
            type_def: Some(type_def),
            allow_null: true,
        }
    }

    /// Create an attribute with no type information at all.
    pub fn untyped() -> Self {
        Self {
            type_def: None,
            allow_null: true,
        }
    }

    /// Mark the attribute as not nullable.
    pub fn not_null(mut self) -> Self {
        self.allow_null = false;
        self
    }
}

fn normalize_type_key(key: &str) -> String {
    key.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_key_normalization() {
        assert_eq!(AttributeType::new(" bigint ").key, "BIGINT");
        assert_eq!(AttributeType::new("double precision").key, "DOUBLE PRECISION");
    }

    #[test]
    fn test_attribute_defaults_to_nullable() {
        let attribute = Attribute::new("INTEGER");
        assert!(attribute.allow_null);
        assert!(!attribute.not_null().allow_null);
    }

    #[test]
    fn test_attribute_deserializes_with_defaults() {
        let attribute: Attribute = serde_json::from_str(r#"{"type_def":{"key":"STRING"}}"#).unwrap();
        assert!(attribute.allow_null);
        assert_eq!(attribute.type_def.unwrap().key, "STRING");
    }

    #[test]
    fn test_string_length_untagged_forms() {
        let literal: StringLength = serde_json::from_str("50").unwrap();
        assert_eq!(literal, StringLength::Chars(50));
        let named: StringLength = serde_json::from_str(r#""tiny""#).unwrap();
        assert_eq!(named, StringLength::Named("tiny".to_string()));
    }
}
