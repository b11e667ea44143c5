//! shapecheck - a strict, synchronous object-shape validator
//!
//! Given a declarative field-level schema and an input object, reports
//! whether the object conforms and, if not, which fields failed and why.
//!
//! # Design Principles
//!
//! - Accumulate all errors in one pass, never fail fast
//! - At most one error per field: required, type, and custom checks are
//!   mutually exclusive
//! - Errors report in schema declaration order
//! - No coercion: runtime tags must match declared types exactly
//! - Validation is a pure function of (schema, object); no I/O, no
//!   hidden state
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use shapecheck::{FieldSchema, Schema, Validator};
//!
//! let schema = Schema::new()
//!     .field("name", FieldSchema::required_string())
//!     .field("age", FieldSchema::required_number());
//! let validator = Validator::new(schema);
//!
//! let object = json!({ "name": "Alice", "age": 25 });
//! assert!(validator.validate_value(&object).is_valid());
//! ```

mod errors;
mod types;
mod validator;

pub use errors::{ErrorKind, SchemaError, ValidationError, ValidationResult};
pub use types::{kind_of, CustomOutcome, CustomValidator, FieldSchema, FieldType, Schema};
pub use validator::Validator;
