//! Validation error taxonomy and result types.
//!
//! Validation never throws: every outcome is reported through the
//! returned `ValidationResult`. The three error kinds are mutually
//! exclusive per field per call:
//! - MissingRequired: required field absent or null
//! - TypeMismatch: field present, runtime type differs from declared type
//! - CustomValidationFailed: field present, type correct, custom check
//!   rejected the value

use serde::Serialize;
use thiserror::Error;

use crate::types::FieldType;

/// Kind of validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Required field absent or null
    MissingRequired,
    /// Field present but with the wrong runtime type
    TypeMismatch,
    /// Custom predicate rejected the value
    CustomValidationFailed,
}

impl ErrorKind {
    /// Returns the stable string code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::MissingRequired => "MISSING_REQUIRED",
            ErrorKind::TypeMismatch => "TYPE_MISMATCH",
            ErrorKind::CustomValidationFailed => "CUSTOM_VALIDATION_FAILED",
        }
    }
}

/// One field's validation failure.
///
/// Pure value with no identity. `actual_type` is `None` when the field
/// was absent or null. Serializes as
/// `{key, expectedType, actualType, message}`.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{message}")]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    /// Failure kind; exposed through `ErrorKind::code`, not serialized
    #[serde(skip)]
    pub kind: ErrorKind,
    /// Field name from the schema
    pub key: String,
    /// Declared type for the field
    pub expected_type: FieldType,
    /// Runtime tag of the value found, or `None` when absent-or-null
    pub actual_type: Option<&'static str>,
    /// Human-readable message
    pub message: String,
}

impl ValidationError {
    /// Required field absent or null
    pub(crate) fn missing_required(key: &str, expected_type: FieldType) -> Self {
        Self {
            kind: ErrorKind::MissingRequired,
            key: key.to_string(),
            expected_type,
            actual_type: None,
            message: format!("The field '{}' is required but was not provided.", key),
        }
    }

    /// Field present with the wrong runtime type
    pub(crate) fn type_mismatch(key: &str, expected_type: FieldType, actual: &'static str) -> Self {
        Self {
            kind: ErrorKind::TypeMismatch,
            key: key.to_string(),
            expected_type,
            actual_type: Some(actual),
            message: format!(
                "Expected type '{}' but found type '{}' for key '{}'.",
                expected_type.type_name(),
                actual,
                key
            ),
        }
    }

    /// Custom check rejected the value; `message` is reported verbatim
    /// when present, otherwise the generic fallback is used
    pub(crate) fn custom_failed(
        key: &str,
        expected_type: FieldType,
        actual: &'static str,
        message: Option<String>,
    ) -> Self {
        Self {
            kind: ErrorKind::CustomValidationFailed,
            key: key.to_string(),
            expected_type,
            actual_type: Some(actual),
            message: message
                .unwrap_or_else(|| format!("Custom validation failed for key '{}'.", key)),
        }
    }
}

/// Outcome of one validation call.
///
/// Fields are private so `valid == errors.is_empty()` holds by
/// construction. Serializes as `{"valid": true}` when clean and
/// `{"valid": false, "errors": [...]}` otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    valid: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// Build a result from the accumulated error sequence
    pub(crate) fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    /// A clean result with no errors
    pub fn ok() -> Self {
        Self::from_errors(Vec::new())
    }

    /// Returns true if the object conformed to the schema
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Errors in schema declaration order; empty when valid
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Consumes the result, yielding the error sequence
    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }
}

/// Error constructing a schema definition
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The same field name was declared more than once
    #[error("field '{0}' is declared more than once")]
    DuplicateField(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes() {
        assert_eq!(ErrorKind::MissingRequired.code(), "MISSING_REQUIRED");
        assert_eq!(ErrorKind::TypeMismatch.code(), "TYPE_MISMATCH");
        assert_eq!(
            ErrorKind::CustomValidationFailed.code(),
            "CUSTOM_VALIDATION_FAILED"
        );
    }

    #[test]
    fn test_missing_required_message() {
        let err = ValidationError::missing_required("name", FieldType::String);
        assert_eq!(
            err.message,
            "The field 'name' is required but was not provided."
        );
        assert_eq!(err.actual_type, None);
    }

    #[test]
    fn test_type_mismatch_message() {
        let err = ValidationError::type_mismatch("age", FieldType::Number, "string");
        assert_eq!(
            err.message,
            "Expected type 'number' but found type 'string' for key 'age'."
        );
    }

    #[test]
    fn test_custom_failed_generic_fallback() {
        let err = ValidationError::custom_failed("email", FieldType::String, "string", None);
        assert_eq!(err.message, "Custom validation failed for key 'email'.");

        let err =
            ValidationError::custom_failed("email", FieldType::String, "string", Some("bad".into()));
        assert_eq!(err.message, "bad");
    }

    #[test]
    fn test_valid_result_serializes_without_errors_member() {
        let text = serde_json::to_string(&ValidationResult::ok()).unwrap();
        assert_eq!(text, r#"{"valid":true}"#);
    }

    #[test]
    fn test_invalid_result_wire_shape() {
        let result = ValidationResult::from_errors(vec![ValidationError::type_mismatch(
            "age",
            FieldType::Number,
            "string",
        )]);
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["valid"], false);
        assert_eq!(value["errors"][0]["key"], "age");
        assert_eq!(value["errors"][0]["expectedType"], "number");
        assert_eq!(value["errors"][0]["actualType"], "string");
        assert!(value["errors"][0]["message"]
            .as_str()
            .unwrap()
            .contains("age"));
    }
}
