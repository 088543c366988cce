//! Configuration loading and validation for RepoLinker.
//!
//! This crate resolves an operator-supplied configuration document from a
//! URL or a local file, validates it against a JSON schema, and exposes the
//! loaded document behind a small stateful accessor. It knows nothing about
//! the document's meaning; the schema and the typed records live with the
//! workflow that owns them.

pub mod errors;
pub use errors::ConfigurationError;

pub mod loader;
pub use loader::Config;

pub mod schema;
pub use schema::{format_errors, FieldError, SchemaError, SchemaValidator, ValidationResult};

pub mod source;
pub use source::ConfigSource;
