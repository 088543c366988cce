//! JSON Schema validation for configuration documents.
//!
//! Validates a decoded configuration document against a JSON schema and
//! reports every structural problem as a field error with a dotted path. A
//! structurally invalid document is a normal, representable outcome here;
//! the only failure this module can raise is a malformed schema.

use jsonschema::Validator;
use serde_json::Value;
use thiserror::Error;

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;

/// Errors raised while preparing a schema for validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaError {
    /// The schema document itself is not a valid JSON schema.
    #[error("Schema compilation failed: {message}")]
    Compilation { message: String },
}

/// A single problem found while validating a document.
///
/// The path is dotted (`installations.0.id`) with the document root
/// rendered as the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Dotted path to the offending field; empty for the document root
    pub path: String,
    /// Human-readable description of the problem
    pub message: String,
}

/// The outcome of validating one document: either valid, or an ordered
/// list of field errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<FieldError>,
}

impl ValidationResult {
    /// Returns true when no errors were found.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The errors, in the order the validator reported them.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Consumes the result, yielding the error list.
    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }
}

/// A compiled JSON schema ready to validate documents.
pub struct SchemaValidator {
    compiled: Validator,
}

impl SchemaValidator {
    /// Compiles a schema.
    ///
    /// # Errors
    /// Returns `SchemaError::Compilation` when the schema document is not a
    /// valid JSON schema. A failing *document* is never an error; see
    /// [`SchemaValidator::validate`].
    pub fn new(schema: &Value) -> Result<Self, SchemaError> {
        let compiled =
            jsonschema::validator_for(schema).map_err(|e| SchemaError::Compilation {
                message: e.to_string(),
            })?;

        Ok(Self { compiled })
    }

    /// Validates a document against the compiled schema.
    ///
    /// Collects every violation, not just the first. Stateless and
    /// idempotent: the same document always yields the same outcome.
    pub fn validate(&self, document: &Value) -> ValidationResult {
        let errors = self
            .compiled
            .iter_errors(document)
            .map(|error| FieldError {
                path: dotted_path(&error.instance_path().to_string()),
                message: error.to_string(),
            })
            .collect();

        ValidationResult { errors }
    }
}

/// Renders an ordered error list as a newline-joined bullet list.
///
/// Each line reads `- 'field.path' message`; the quoted path segment is
/// omitted entirely for errors that apply to the document root.
pub fn format_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|error| {
            if error.path.is_empty() {
                format!("- {}", error.message)
            } else {
                format!("- '{}' {}", error.path, error.message)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// Instance paths arrive as JSON pointers (`/installations/0/id`); the
// reported paths are dotted with the root stripped.
fn dotted_path(pointer: &str) -> String {
    pointer.trim_start_matches('/').replace('/', ".")
}
