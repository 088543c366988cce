//! Configuration system error types.
//!
//! Domain-specific errors for configuration source resolution, decoding,
//! validation, and property access.

use thiserror::Error;

use crate::schema::{format_errors, FieldError, SchemaError};

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Configuration system errors.
///
/// These errors occur when resolving, decoding, or validating a
/// configuration document, or when reading properties from the loaded
/// document. Every failure is terminal for the current command.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("No configuration source specified")]
    MissingSource,

    #[error("No configuration schema specified")]
    MissingSchema,

    #[error("Could not find configuration at {location}")]
    NotFound { location: String },

    #[error("Failed to fetch configuration from URL '{url}': {reason}")]
    Fetch { url: String, reason: String },

    #[error("Failed to access configuration file: {path} - {reason}")]
    FileAccess { path: String, reason: String },

    #[error("Failed to decode configuration from {source_description}: {reason}")]
    Decode {
        source_description: String,
        reason: String,
    },

    /// The document decoded but failed schema validation. Carries the full
    /// ordered list of field errors, never just the first.
    #[error("The configuration is invalid:\n\n{}", format_errors(.errors))]
    Invalid { errors: Vec<FieldError> },

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("Cannot read configuration properties before the configuration has been loaded")]
    NotLoaded,

    #[error("The configuration property '{property}' does not exist")]
    PropertyNotFound { property: String },
}
