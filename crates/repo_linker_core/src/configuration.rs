//! The configuration contract for the linking workflow.
//!
//! This module owns the JSON schema an operator's configuration document
//! must conform to, and the typed records read out of the document once
//! validation has succeeded.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use config_manager::Config;

use crate::errors::Error;

#[cfg(test)]
#[path = "configuration_tests.rs"]
mod tests;

/// The JSON schema for the installations configuration document.
///
/// A document names the owning organization and at least one installation;
/// each installation carries its positive numeric id and a human-readable
/// comment. Unknown extra properties at the root are tolerated.
pub fn config_schema() -> Value {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "required": ["owner", "installations"],
        "properties": {
            "owner": {
                "type": "string"
            },
            "installations": {
                "type": "array",
                "minItems": 1,
                "items": {
                    "type": "object",
                    "required": ["id", "comment"],
                    "properties": {
                        "id": {
                            "type": "integer",
                            "exclusiveMinimum": 0
                        },
                        "comment": {
                            "type": "string"
                        }
                    }
                }
            }
        }
    })
}

/// One target GitHub App installation from the configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Installation {
    /// The numeric identifier of the installation
    pub id: u64,
    /// Free-text description of the installation for humans
    pub comment: String,
}

impl Installation {
    /// Returns the web URL of the installation's settings page within the
    /// owning organization.
    pub fn settings_url(&self, owner: &str) -> String {
        format!(
            "https://github.com/organizations/{}/settings/installations/{}",
            owner, self.id
        )
    }
}

/// Reads the owner the configuration declares for the target repository.
pub fn expected_owner(config: &Config) -> Result<String, Error> {
    let value = config.get("owner")?.clone();
    serde_json::from_value(value).map_err(Error::Record)
}

/// Reads the installations the repository should be added to, in document
/// order.
pub fn installations(config: &Config) -> Result<Vec<Installation>, Error> {
    let value = config.get("installations")?.clone();
    serde_json::from_value(value).map_err(Error::Record)
}
