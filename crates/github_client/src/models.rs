//! Domain types for GitHub API payloads.
//!
//! This module contains the projections of GitHub API responses that the
//! linking workflow needs: the authenticated user and the target repository.

use serde::{Deserialize, Serialize};
use url::Url;

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;

/// Represents a GitHub user account.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct User {
    /// The unique numeric ID of the user
    pub id: u64,
    /// The login name of the user
    pub login: String,
}

/// Represents a GitHub repository.
///
/// This struct contains the repository information the linking workflow
/// needs, most importantly the numeric id that the installation API expects.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Repository {
    /// The unique numeric ID of the repository
    id: u64,
    /// The name of the repository
    name: String,
    /// The full name of the repository (owner/name)
    full_name: String,
    /// Whether the repository is private
    private: bool,
}

impl Repository {
    /// Creates a new Repository instance.
    pub fn new(id: u64, name: String, full_name: String, private: bool) -> Self {
        Self {
            id,
            name,
            full_name,
            private,
        }
    }

    /// Returns the unique numeric ID of the repository.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the name of the repository (without owner).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the full name of the repository (owner/name).
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Returns whether the repository is private.
    pub fn is_private(&self) -> bool {
        self.private
    }

    /// Returns the web URL of the repository's installed-apps settings page.
    ///
    /// # Panics
    ///
    /// Panics if the repository full name cannot be formatted into a valid
    /// URL. This should not happen with valid GitHub repository names.
    pub fn installations_settings_url(&self) -> Url {
        Url::parse(&format!(
            "https://github.com/{}/settings/installations",
            self.full_name
        ))
        .expect("Valid GitHub repository URL")
    }
}

impl From<octocrab::models::Repository> for Repository {
    fn from(value: octocrab::models::Repository) -> Self {
        Self {
            id: *value.id,
            name: value.name.clone(),
            full_name: value.full_name.unwrap_or(value.name),
            private: value.private.unwrap_or(false),
        }
    }
}
