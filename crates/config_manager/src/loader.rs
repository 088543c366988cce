//! Stateful configuration loading.
//!
//! [`Config`] ties source resolution, decoding, and schema validation
//! together behind a small state machine: an instance starts unloaded,
//! `load` moves it to loaded on success, and a failed load leaves it
//! permanently unusable for property access. One instance serves one
//! command invocation; `load` is single-call-at-a-time by convention, not
//! enforced with locks.

use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::errors::ConfigurationError;
use crate::schema::SchemaValidator;
use crate::source::ConfigSource;

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;

/// A configuration document and the state needed to load it.
#[derive(Debug)]
pub struct Config {
    source: String,
    schema: Value,
    document: Option<Map<String, Value>>,
    source_description: Option<String>,
    loaded: bool,
}

impl Config {
    /// Creates an unloaded configuration.
    ///
    /// # Arguments
    ///
    /// * `source` - A URL or a local filesystem path naming the document.
    /// * `schema` - The JSON schema the document must conform to.
    ///
    /// # Errors
    /// Returns `ConfigurationError::MissingSource` for a blank source and
    /// `ConfigurationError::MissingSchema` for a null schema. A schema that
    /// is present but malformed is only detected during [`Config::load`].
    pub fn new(source: &str, schema: Value) -> Result<Self, ConfigurationError> {
        if source.trim().is_empty() {
            return Err(ConfigurationError::MissingSource);
        }

        if schema.is_null() {
            return Err(ConfigurationError::MissingSchema);
        }

        Ok(Self {
            source: source.to_string(),
            schema,
            document: None,
            source_description: None,
            loaded: false,
        })
    }

    /// Resolves, decodes, and validates the configuration document.
    ///
    /// On success the instance transitions to loaded and the document
    /// becomes readable through [`Config::get`]. On any failure the
    /// instance stays unloaded.
    ///
    /// # Errors
    ///
    /// - source resolution failures propagate from [`ConfigSource::resolve`]
    /// - `ConfigurationError::Decode` when the payload is not valid JSON or
    ///   not a JSON object
    /// - `ConfigurationError::Schema` when the schema itself is malformed
    /// - `ConfigurationError::Invalid` when the document fails validation,
    ///   carrying every field error
    pub async fn load(&mut self) -> Result<(), ConfigurationError> {
        let (bytes, description) = ConfigSource::classify(&self.source).resolve().await?;

        let document: Value =
            serde_json::from_slice(&bytes).map_err(|e| ConfigurationError::Decode {
                source_description: description.clone(),
                reason: e.to_string(),
            })?;

        let object = match document.as_object() {
            Some(object) => object.clone(),
            None => {
                return Err(ConfigurationError::Decode {
                    source_description: description,
                    reason: "the document root is not a JSON object".to_string(),
                })
            }
        };

        let validator = SchemaValidator::new(&self.schema)?;
        let outcome = validator.validate(&document);
        if !outcome.is_valid() {
            debug!(
                error_count = outcome.errors().len(),
                "Configuration failed schema validation"
            );
            return Err(ConfigurationError::Invalid {
                errors: outcome.into_errors(),
            });
        }

        // No await point between these assignments: the document, the
        // provenance string, and the loaded flag become visible together.
        self.document = Some(object);
        self.source_description = Some(description);
        self.loaded = true;

        info!(source = self.source, "Configuration loaded");
        Ok(())
    }

    /// Reads a top-level property from the loaded document.
    ///
    /// Presence is an explicit key check, so legitimately falsy values
    /// (`0`, `false`, an empty array) are retrievable. The value is
    /// returned as-is; the document is immutable after load.
    ///
    /// # Errors
    /// Returns `ConfigurationError::NotLoaded` when the configuration has
    /// not been loaded (regardless of the property named) and
    /// `ConfigurationError::PropertyNotFound` for an absent key.
    pub fn get(&self, property: &str) -> Result<&Value, ConfigurationError> {
        if !self.loaded {
            return Err(ConfigurationError::NotLoaded);
        }

        let document = self
            .document
            .as_ref()
            .ok_or(ConfigurationError::NotLoaded)?;

        document
            .get(property)
            .ok_or_else(|| ConfigurationError::PropertyNotFound {
                property: property.to_string(),
            })
    }

    /// Whether the configuration has been loaded. Pure state query.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// The provenance of the loaded document (`URL: …` / `local file: …`),
    /// available once loaded.
    pub fn source_description(&self) -> Option<&str> {
        self.source_description.as_deref()
    }

    /// The source string this configuration was constructed with.
    pub fn source(&self) -> &str {
        &self.source
    }
}
