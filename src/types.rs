//! Schema type definitions.
//!
//! Supported field types:
//! - string: UTF-8 string
//! - number: any JSON number
//! - boolean: true or false
//! - array: JSON array (elements are not inspected)
//! - object: JSON object
//!
//! Runtime type inspection is a closed tag set over `serde_json::Value`;
//! there is no type coercion and no `null` field type, so an explicit null
//! never satisfies a type check.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::SchemaError;

/// Supported field types as a closed enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// UTF-8 string
    String,
    /// Any JSON number
    Number,
    /// Boolean
    Boolean,
    /// JSON array
    Array,
    /// JSON object
    Object,
}

impl FieldType {
    /// Returns the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Number => "number",
            FieldType::Boolean => "boolean",
            FieldType::Array => "array",
            FieldType::Object => "object",
        }
    }

    /// Returns true if the value's runtime tag matches this type
    pub fn matches(&self, value: &Value) -> bool {
        matches!(
            (self, value),
            (FieldType::String, Value::String(_))
                | (FieldType::Number, Value::Number(_))
                | (FieldType::Boolean, Value::Bool(_))
                | (FieldType::Array, Value::Array(_))
                | (FieldType::Object, Value::Object(_))
        )
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

/// Returns the runtime type tag of a JSON value
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Outcome of a custom field check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomOutcome {
    /// Value accepted
    Pass,
    /// Value rejected; the message (if any) is reported verbatim,
    /// otherwise a generic message is reported for the field
    Fail(Option<String>),
}

impl CustomOutcome {
    /// Rejection carrying a diagnostic message
    pub fn fail(message: impl Into<String>) -> Self {
        CustomOutcome::Fail(Some(message.into()))
    }

    /// Rejection without a diagnostic; the caller sees the generic message
    pub fn fail_silent() -> Self {
        CustomOutcome::Fail(None)
    }
}

/// Caller-supplied predicate for a single field's value.
///
/// Runs only when the field is present and its type check passed. A
/// validator that panics propagates the panic to the `validate` caller;
/// panicking validators are a contract violation, not a reportable
/// validation failure.
pub trait CustomValidator: Send + Sync {
    /// Checks one field value
    fn check(&self, value: &Value) -> CustomOutcome;
}

impl<F> CustomValidator for F
where
    F: Fn(&Value) -> CustomOutcome + Send + Sync,
{
    fn check(&self, value: &Value) -> CustomOutcome {
        self(value)
    }
}

/// Field definition: expected type, requiredness, optional custom check
#[derive(Clone, Serialize, Deserialize)]
pub struct FieldSchema {
    /// Field data type
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Whether the field must be present and non-null
    #[serde(default)]
    pub required: bool,
    /// Optional custom predicate, run after the type check passes
    #[serde(skip)]
    pub custom: Option<Arc<dyn CustomValidator>>,
}

impl FieldSchema {
    /// Create a required field of the given type
    pub fn required(field_type: FieldType) -> Self {
        Self {
            field_type,
            required: true,
            custom: None,
        }
    }

    /// Create an optional field of the given type
    pub fn optional(field_type: FieldType) -> Self {
        Self {
            field_type,
            required: false,
            custom: None,
        }
    }

    /// Create a required string field
    pub fn required_string() -> Self {
        Self::required(FieldType::String)
    }

    /// Create an optional string field
    pub fn optional_string() -> Self {
        Self::optional(FieldType::String)
    }

    /// Create a required number field
    pub fn required_number() -> Self {
        Self::required(FieldType::Number)
    }

    /// Create an optional number field
    pub fn optional_number() -> Self {
        Self::optional(FieldType::Number)
    }

    /// Create a required boolean field
    pub fn required_boolean() -> Self {
        Self::required(FieldType::Boolean)
    }

    /// Create an optional boolean field
    pub fn optional_boolean() -> Self {
        Self::optional(FieldType::Boolean)
    }

    /// Create a required array field
    pub fn required_array() -> Self {
        Self::required(FieldType::Array)
    }

    /// Create an optional array field
    pub fn optional_array() -> Self {
        Self::optional(FieldType::Array)
    }

    /// Create a required object field
    pub fn required_object() -> Self {
        Self::required(FieldType::Object)
    }

    /// Create an optional object field
    pub fn optional_object() -> Self {
        Self::optional(FieldType::Object)
    }

    /// Attach a custom check, run only after the type check passes
    pub fn with_custom(mut self, custom: impl CustomValidator + 'static) -> Self {
        self.custom = Some(Arc::new(custom));
        self
    }
}

impl fmt::Debug for FieldSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSchema")
            .field("field_type", &self.field_type)
            .field("required", &self.required)
            .field("custom", &self.custom.as_ref().map(|_| "<custom>"))
            .finish()
    }
}

/// Ordered field-name to definition mapping.
///
/// Insertion order is the order errors are reported in. Immutable once
/// handed to a `Validator`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Schema {
    fields: Vec<(String, FieldSchema)>,
}

impl Schema {
    /// Create an empty schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field definition, preserving insertion order.
    ///
    /// Redefining an existing name replaces the definition in place, so
    /// the field keeps its original position in error reports.
    pub fn field(mut self, name: impl Into<String>, def: FieldSchema) -> Self {
        let name = name.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = def,
            None => self.fields.push((name, def)),
        }
        self
    }

    /// Build a schema from a list of field definitions.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::DuplicateField` if a name appears twice.
    pub fn try_from_fields(fields: Vec<(String, FieldSchema)>) -> Result<Self, SchemaError> {
        for (i, (name, _)) in fields.iter().enumerate() {
            if fields[..i].iter().any(|(n, _)| n == name) {
                return Err(SchemaError::DuplicateField(name.clone()));
            }
        }
        Ok(Self { fields })
    }

    /// Look up a field definition by name
    pub fn get(&self, name: &str) -> Option<&FieldSchema> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, def)| def)
    }

    /// Iterate field definitions in declaration order
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldSchema)> {
        self.fields.iter().map(|(n, d)| (n.as_str(), d))
    }

    /// Number of declared fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no fields are declared
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
