//! Configuration source classification and resolution.
//!
//! A configuration source is either a remote URL or a local filesystem
//! path. Classification is a pure string-level decision: a string that
//! parses as an absolute URL with a host is remote, everything else is a
//! local path resolved against the process working directory. No network
//! probe or filesystem check is involved in classifying.

use std::path::PathBuf;

use tracing::debug;
use url::Url;

use crate::errors::ConfigurationError;

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;

/// Where a configuration document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// An absolute URL fetched over HTTP(S)
    Remote(Url),
    /// A filesystem path, resolved relative to the working directory when
    /// not absolute
    Local(PathBuf),
}

impl ConfigSource {
    /// Classifies a source string as remote or local.
    ///
    /// Remote requires a well-formed absolute URL with both a scheme and a
    /// host; anything else (relative paths, bare filenames, Windows drive
    /// paths whose drive letter would otherwise parse as a scheme) is
    /// treated as a local path. Total: never fails.
    pub fn classify(path_or_url: &str) -> ConfigSource {
        match Url::parse(path_or_url) {
            Ok(url) if url.has_host() => ConfigSource::Remote(url),
            _ => ConfigSource::Local(PathBuf::from(path_or_url)),
        }
    }

    /// Resolves the source into raw bytes plus a human-readable provenance
    /// string.
    ///
    /// Performs exactly one network request or one filesystem
    /// existence-check + read. The provenance string is informational only
    /// (`URL: …` / `local file: …`).
    ///
    /// # Errors
    ///
    /// - `ConfigurationError::NotFound` when the file does not exist or the
    ///   URL answers with a non-success status
    /// - `ConfigurationError::Fetch` when the HTTP request itself fails
    /// - `ConfigurationError::FileAccess` when the file cannot be read
    pub async fn resolve(&self) -> Result<(Vec<u8>, String), ConfigurationError> {
        match self {
            ConfigSource::Remote(url) => {
                debug!(url = %url, "Fetching configuration from URL");

                let response =
                    reqwest::get(url.clone())
                        .await
                        .map_err(|e| ConfigurationError::Fetch {
                            url: url.to_string(),
                            reason: e.to_string(),
                        })?;

                if !response.status().is_success() {
                    return Err(ConfigurationError::NotFound {
                        location: format!("URL '{}'", url),
                    });
                }

                let bytes = response
                    .bytes()
                    .await
                    .map_err(|e| ConfigurationError::Fetch {
                        url: url.to_string(),
                        reason: e.to_string(),
                    })?;

                Ok((bytes.to_vec(), format!("URL: {}", url)))
            }
            ConfigSource::Local(path) => {
                let absolute = if path.is_absolute() {
                    path.clone()
                } else {
                    std::env::current_dir()
                        .map_err(|e| ConfigurationError::FileAccess {
                            path: path.display().to_string(),
                            reason: e.to_string(),
                        })?
                        .join(path)
                };

                debug!(path = %absolute.display(), "Reading configuration from local file");

                if !absolute.exists() {
                    return Err(ConfigurationError::NotFound {
                        location: format!("local file '{}'", absolute.display()),
                    });
                }

                let bytes =
                    tokio::fs::read(&absolute)
                        .await
                        .map_err(|e| ConfigurationError::FileAccess {
                            path: absolute.display().to_string(),
                            reason: e.to_string(),
                        })?;

                Ok((bytes, format!("local file: {}", absolute.display())))
            }
        }
    }
}
