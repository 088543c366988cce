//! Command modules for the RepoLinker CLI.
//!
//! This module contains all the command implementations for the CLI
//! application. Each submodule handles one subcommand:
//!
//! - `add_cmd`: Add a repository to the configured installations
//! - `validate_config_cmd`: Validate a configuration document without
//!   touching the GitHub API

pub mod add_cmd;
pub mod validate_config_cmd;
