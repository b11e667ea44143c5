//! Object-shape validation against a field schema.
//!
//! Semantics:
//! - Fields are checked in schema declaration order
//! - Errors accumulate; validation never stops at the first failure
//! - At most one error per field per call: required, type, and custom
//!   checks are mutually exclusive
//! - Keys absent from the schema are ignored
//!
//! The validator holds no per-call state, so one instance can serve
//! concurrent callers.

use serde_json::{Map, Value};

use crate::errors::{ValidationError, ValidationResult};
use crate::types::{kind_of, CustomOutcome, FieldSchema, Schema};

/// Key reported when the top-level value itself is not an object
const ROOT_KEY: &str = "$root";

/// Validator owning an immutable schema, reused across many calls
pub struct Validator {
    schema: Schema,
}

impl Validator {
    /// Creates a validator for the given schema
    pub fn new(schema: Schema) -> Self {
        Self { schema }
    }

    /// Returns the schema this validator enforces
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Validates an object against the schema.
    ///
    /// Pure function of (schema, object): same inputs always produce the
    /// same result, and nothing is mutated.
    pub fn validate(&self, object: &Map<String, Value>) -> ValidationResult {
        let mut errors = Vec::new();

        for (key, field) in self.schema.fields() {
            if let Some(error) = check_field(key, field, object.get(key)) {
                errors.push(error);
            }
        }

        ValidationResult::from_errors(errors)
    }

    /// Validates an arbitrary JSON value.
    ///
    /// Non-object values fail with a single type-mismatch error for the
    /// `$root` key rather than a panic or an Err.
    pub fn validate_value(&self, document: &Value) -> ValidationResult {
        match document.as_object() {
            Some(object) => self.validate(object),
            None => ValidationResult::from_errors(vec![ValidationError::type_mismatch(
                ROOT_KEY,
                crate::types::FieldType::Object,
                kind_of(document),
            )]),
        }
    }
}

/// Checks one field, producing at most one error.
///
/// `value` is `None` when the key is absent from the object; absence is
/// distinct from an explicit null. Evaluation order:
/// 1. required and absent-or-null: missing-required, nothing else runs
/// 2. absent and not required: skipped entirely, custom never runs
/// 3. wrong runtime type: type-mismatch, custom never runs
/// 4. custom check, only on a present value of the declared type
fn check_field(key: &str, field: &FieldSchema, value: Option<&Value>) -> Option<ValidationError> {
    let absent_or_null = value.map_or(true, Value::is_null);

    if field.required && absent_or_null {
        return Some(ValidationError::missing_required(key, field.field_type));
    }

    let value = value?;

    // An explicit null on an optional field is present, so it reaches the
    // type check and reports actual type "null".
    if !field.field_type.matches(value) {
        return Some(ValidationError::type_mismatch(
            key,
            field.field_type,
            kind_of(value),
        ));
    }

    if let Some(custom) = &field.custom {
        if let CustomOutcome::Fail(message) = custom.check(value) {
            return Some(ValidationError::custom_failed(
                key,
                field.field_type,
                kind_of(value),
                message,
            ));
        }
    }

    None
}
