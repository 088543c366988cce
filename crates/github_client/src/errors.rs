//! Error types for GitHub client operations.
//!
//! This module defines the error types that can occur when interacting with
//! the GitHub API through the github_client crate.

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur during GitHub client operations.
///
/// Each variant provides specific context about what went wrong. All
/// failures are terminal for the current command; nothing in this crate
/// retries.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A generic API request failure.
    ///
    /// This error occurs when a GitHub API request fails for unspecified
    /// reasons. Check the GitHub API status and ensure your request
    /// parameters are correct.
    #[error("API request failed")]
    ApiError(),

    /// Authentication or GitHub client initialization failure.
    ///
    /// This error occurs when:
    /// - The personal access token is blank or malformed
    /// - GitHub rejects the token
    /// - The underlying client cannot be constructed
    ///
    /// The contained string provides specific details about the failure.
    #[error("Failed to authenticate or initialize GitHub client: {0}")]
    AuthError(String),

    /// The requested repository does not exist or is not accessible.
    ///
    /// This error occurs when a repository lookup returns a 404 status code.
    /// The repository may not exist, or the authenticated user may not have
    /// access to it.
    #[error("GitHub repository {owner}/{name} could not be found")]
    RepositoryNotFound {
        /// The owner segment of the repository that was requested
        owner: String,
        /// The name segment of the repository that was requested
        name: String,
    },

    /// A request to link a repository to an installation failed.
    ///
    /// This error occurs when GitHub returns any non-success response for
    /// the linking call. Common causes include:
    /// - The installation id does not exist
    /// - The authenticated user lacks admin access to the repository
    /// - The installation belongs to a different account
    #[error("Failed to add the repository to installation {installation_id}")]
    InstallationLink {
        /// The numeric id of the installation the repository could not be
        /// added to
        installation_id: u64,
    },
}
