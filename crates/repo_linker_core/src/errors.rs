//! Error types for the linking workflow.

use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur while adding a repository to the configured
/// installations.
///
/// Nothing is retried: every variant aborts the whole command. Errors from
/// the configuration and GitHub layers pass through unchanged; the owner
/// gate is the one failure this crate raises itself.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration could not be resolved, decoded, or validated.
    #[error(transparent)]
    Config(#[from] config_manager::ConfigurationError),

    /// The repository reference string was not recognized.
    #[error(transparent)]
    Reference(#[from] github_client::ParseReferenceError),

    /// The owner declared by the configuration differs from the owner of
    /// the referenced repository.
    ///
    /// This is a deliberate safety check: a configuration written for one
    /// organization must never link repositories that belong to another.
    #[error(
        "The owner specified by the config ({config_owner}) and the owner of the repo \
         ({repository_owner}) do not match. It is not possible to add the repo to the \
         installations specified by the config."
    )]
    OwnerMismatch {
        /// The owner the configuration declares
        config_owner: String,
        /// The owner parsed from the repository reference
        repository_owner: String,
    },

    /// A GitHub API call failed.
    #[error(transparent)]
    GitHub(#[from] github_client::Error),

    /// The validated document could not be decoded into the typed records.
    #[error("The configuration document does not match the expected shape: {0}")]
    Record(serde_json::Error),
}
