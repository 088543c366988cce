//! Crate for interacting with the GitHub REST API.
//!
//! This crate provides a client for making authenticated requests to GitHub
//! on behalf of a user, authenticating with a personal access token. It also
//! contains the parser that turns free-form repository reference strings into
//! normalized `(owner, name)` pairs.

use async_trait::async_trait;
use octocrab::Octocrab;
use tracing::{error, info, instrument};

pub mod errors;
pub use errors::Error;

pub mod models;

pub mod repo_reference;
pub use repo_reference::{ParseReferenceError, RepoReference};

// Reference the tests module in the separate file
#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// The GitHub API capabilities consumed by the linking workflow.
///
/// Implemented by [`GitHubClient`]; kept as a trait so that orchestration
/// code can be exercised against test doubles.
#[async_trait]
pub trait RepositoryClient {
    /// Returns the user the configured credential resolves to.
    async fn get_authenticated_user(&self) -> Result<models::User, Error>;

    /// Fetches metadata for a single repository.
    async fn get_repository(&self, owner: &str, name: &str)
        -> Result<models::Repository, Error>;

    /// Adds a repository to a GitHub App installation.
    async fn add_repository_to_installation(
        &self,
        installation_id: u64,
        repository_id: u64,
    ) -> Result<(), Error>;
}

/// A client for interacting with the GitHub API, authenticated as a user.
#[derive(Debug)]
pub struct GitHubClient {
    client: Octocrab,
}

impl GitHubClient {
    /// Creates a new `GitHubClient` from a pre-built octocrab instance.
    ///
    /// Used by tests to point the client at a mock server; production code
    /// goes through [`GitHubClient::for_token`].
    pub fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Creates a new `GitHubClient` authenticated with a personal access token.
    ///
    /// # Arguments
    ///
    /// * `token` - A GitHub personal access token with repo scopes.
    ///
    /// # Errors
    /// Returns an `Error::AuthError` if the token is blank or the underlying
    /// client cannot be constructed.
    pub fn for_token(token: &str) -> Result<Self, Error> {
        if token.trim().is_empty() {
            return Err(Error::AuthError(
                "No personal access token specified".to_string(),
            ));
        }

        let client = Octocrab::builder()
            .personal_token(token.to_string())
            .build()
            .map_err(|e| Error::AuthError(e.to_string()))?;

        Ok(Self { client })
    }

    /// Returns the user the personal access token resolves to.
    ///
    /// # Errors
    /// Returns an `Error::AuthError` if the token is rejected or the call
    /// fails.
    #[instrument(skip(self))]
    pub async fn get_authenticated_user(&self) -> Result<models::User, Error> {
        let result: octocrab::Result<models::User> = self.client.get("/user", None::<&()>).await;
        match result {
            Ok(user) => {
                info!(login = user.login, "Authenticated against the GitHub API");
                Ok(user)
            }
            Err(e) => {
                log_octocrab_error("Failed to fetch the authenticated user", e);
                Err(Error::AuthError(
                    "The personal access token was not accepted by GitHub".to_string(),
                ))
            }
        }
    }

    /// Fetches details for a specific repository.
    ///
    /// # Arguments
    ///
    /// * `owner` - The owner of the repository (user or organization name).
    /// * `name` - The name of the repository.
    ///
    /// # Errors
    /// Returns `Error::RepositoryNotFound` when GitHub reports a missing
    /// repository and `Error::ApiError` for any other failure.
    #[instrument(skip(self), fields(owner = %owner, name = %name))]
    pub async fn get_repository(
        &self,
        owner: &str,
        name: &str,
    ) -> Result<models::Repository, Error> {
        let result = self.client.repos(owner, name).get().await;
        match result {
            Ok(r) => Ok(models::Repository::from(r)),
            Err(e) => {
                if is_not_found(&e) {
                    return Err(Error::RepositoryNotFound {
                        owner: owner.to_string(),
                        name: name.to_string(),
                    });
                }

                log_octocrab_error("Failed to get repository", e);
                Err(Error::ApiError())
            }
        }
    }

    /// Adds a repository to a GitHub App installation.
    ///
    /// Issues `PUT /user/installations/{installation_id}/repositories/{repository_id}`,
    /// the endpoint behind octokit's `apps.addRepoToInstallation`. The
    /// authenticated user must have admin access to the repository.
    ///
    /// # Errors
    /// Returns `Error::InstallationLink` on any non-success response.
    #[instrument(skip(self))]
    pub async fn add_repository_to_installation(
        &self,
        installation_id: u64,
        repository_id: u64,
    ) -> Result<(), Error> {
        let route = format!(
            "/user/installations/{}/repositories/{}",
            installation_id, repository_id
        );

        let response = self
            .client
            ._put(route, None::<&()>)
            .await
            .map_err(|e| {
                log_octocrab_error("Failed to send the installation link request", e);
                Error::InstallationLink { installation_id }
            })?;

        match octocrab::map_github_error(response).await {
            Ok(_) => {
                info!(
                    installation_id,
                    repository_id, "Added repository to installation"
                );
                Ok(())
            }
            Err(e) => {
                log_octocrab_error("GitHub rejected the installation link request", e);
                Err(Error::InstallationLink { installation_id })
            }
        }
    }
}

#[async_trait]
impl RepositoryClient for GitHubClient {
    async fn get_authenticated_user(&self) -> Result<models::User, Error> {
        // Delegate to the existing implementation
        self.get_authenticated_user().await
    }

    async fn get_repository(
        &self,
        owner: &str,
        name: &str,
    ) -> Result<models::Repository, Error> {
        self.get_repository(owner, name).await
    }

    async fn add_repository_to_installation(
        &self,
        installation_id: u64,
        repository_id: u64,
    ) -> Result<(), Error> {
        self.add_repository_to_installation(installation_id, repository_id)
            .await
    }
}

fn is_not_found(e: &octocrab::Error) -> bool {
    matches!(
        e,
        octocrab::Error::GitHub { source, .. }
            if source.status_code == http::StatusCode::NOT_FOUND
    )
}

fn log_octocrab_error(message: &str, e: octocrab::Error) {
    match e {
        octocrab::Error::GitHub { source, backtrace } => {
            let err = source;
            error!(
                error_message = err.message,
                backtrace = backtrace.to_string(),
                "{}. Received an error from GitHub",
                message
            )
        }
        octocrab::Error::UriParse { source, backtrace } => error!(
            error_message = source.to_string(),
            backtrace = backtrace.to_string(),
            "{}. Failed to parse URI.",
            message
        ),

        octocrab::Error::Uri { source, backtrace } => error!(
            error_message = source.to_string(),
            backtrace = backtrace.to_string(),
            "{}, Failed to parse URI.",
            message
        ),
        octocrab::Error::InvalidHeaderValue { source, backtrace } => error!(
            error_message = source.to_string(),
            backtrace = backtrace.to_string(),
            "{}. One of the header values was invalid.",
            message
        ),
        octocrab::Error::InvalidUtf8 { source, backtrace } => error!(
            error_message = source.to_string(),
            backtrace = backtrace.to_string(),
            "{}. The message wasn't valid UTF-8.",
            message,
        ),
        _ => error!(error_message = e.to_string(), message),
    };
}
