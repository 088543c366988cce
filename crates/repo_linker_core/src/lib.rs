//! Core workflows for RepoLinker.
//!
//! This crate orchestrates adding an existing GitHub repository to a set of
//! GitHub App installations: load and validate the operator's configuration
//! document, parse the repository reference, verify the configured owner
//! matches the reference, then issue one linking request per installation
//! against the GitHub API.

use futures::future::join_all;
use tracing::{info, instrument};

use config_manager::Config;
use github_client::{repo_reference, GitHubClient, RepositoryClient};

pub mod configuration;
pub use configuration::Installation;

pub mod errors;
pub use errors::Error;

// Reference the tests module in the separate file
#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// Everything needed to run the `add` workflow.
#[derive(Debug, Clone)]
pub struct AddRequest {
    /// The repository reference string supplied by the operator
    pub repository: String,
    /// URL or local path of the configuration document
    pub config_source: String,
    /// GitHub personal access token
    pub token: String,
}

/// The outcome of a successful `add` run, for presentation by the caller.
#[derive(Debug, Clone)]
pub struct AddReport {
    /// The owner of the repository that was linked
    pub owner: String,
    /// The name of the repository that was linked
    pub repository: String,
    /// The numeric id GitHub uses for the repository
    pub repository_id: u64,
    /// The login the personal access token resolved to
    pub authenticated_login: String,
    /// Provenance of the configuration document
    pub config_description: String,
    /// The installations the repository was added to, in document order
    pub installations: Vec<Installation>,
    /// The repository's installed-apps settings page
    pub settings_url: String,
}

/// Adds the referenced repository to every installation named by the
/// configuration document.
///
/// Builds a token-authenticated GitHub client and delegates to
/// [`add_repository_with_client`].
///
/// # Errors
/// Returns the first failure of any stage; nothing is retried.
pub async fn add_repository_to_installations(request: AddRequest) -> Result<AddReport, Error> {
    let client = GitHubClient::for_token(&request.token)?;
    add_repository_with_client(&request, &client).await
}

/// Runs the `add` workflow against a caller-supplied client.
///
/// Stages, in order:
///
/// 1. Load and validate the configuration document.
/// 2. Parse the repository reference into an `(owner, name)` pair.
/// 3. Verify the configured owner matches the reference's owner. A mismatch
///    fails here, before any API call is made.
/// 4. Resolve the authenticated user and the repository's numeric id.
/// 5. Dispatch one linking request per installation, concurrently. The
///    batch succeeds only if every request succeeds; the first failure in
///    document order is returned and already-dispatched siblings run to
///    completion.
///
/// # Errors
/// Returns the first failure of any stage; nothing is retried.
#[instrument(skip(request, client), fields(repository = %request.repository))]
pub async fn add_repository_with_client(
    request: &AddRequest,
    client: &impl RepositoryClient,
) -> Result<AddReport, Error> {
    let mut config = Config::new(&request.config_source, configuration::config_schema())?;
    config.load().await?;

    let config_description = config
        .source_description()
        .unwrap_or(config.source())
        .to_string();
    info!(config = config_description, "Configuration loaded");

    let reference = repo_reference::parse(&request.repository)?;
    info!(
        owner = reference.owner,
        repository = reference.name,
        "Parsed repository reference"
    );

    let config_owner = configuration::expected_owner(&config)?;
    if config_owner != reference.owner {
        return Err(Error::OwnerMismatch {
            config_owner,
            repository_owner: reference.owner,
        });
    }

    let user = client.get_authenticated_user().await?;
    let repository = client
        .get_repository(&reference.owner, &reference.name)
        .await?;
    info!(
        repository = repository.full_name(),
        repository_id = repository.id(),
        "Repository exists"
    );

    let installations = configuration::installations(&config)?;

    let link_requests = installations
        .iter()
        .map(|installation| {
            info!(
                installation_id = installation.id,
                comment = installation.comment,
                "Adding repository to installation"
            );
            client.add_repository_to_installation(installation.id, repository.id())
        })
        .collect::<Vec<_>>();

    for result in join_all(link_requests).await {
        result?;
    }

    Ok(AddReport {
        owner: reference.owner,
        repository: reference.name,
        repository_id: repository.id(),
        authenticated_login: user.login,
        config_description,
        installations,
        settings_url: repository.installations_settings_url().to_string(),
    })
}

/// Loads and validates a configuration document without touching the
/// GitHub API.
///
/// Returns the document's provenance description on success.
///
/// # Errors
/// Propagates any resolution, decoding, or validation failure.
pub async fn validate_configuration(config_source: &str) -> Result<String, Error> {
    let mut config = Config::new(config_source, configuration::config_schema())?;
    config.load().await?;

    Ok(config
        .source_description()
        .unwrap_or(config.source())
        .to_string())
}
