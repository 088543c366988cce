//! The `validate-config` command: check a configuration document without
//! touching the GitHub API.

use clap::Args;
use tracing::instrument;

use repo_linker_core::{validate_configuration, Error};

/// Arguments for the `validate-config` command.
#[derive(Args, Debug)]
pub struct ValidateConfigArgs {
    /// Path to JSON configuration (URL or local filepath)
    #[arg(short = 'c', long = "config")]
    pub config: String,
}

/// Execute the validate-config command.
#[instrument(skip(args))]
pub async fn execute(args: &ValidateConfigArgs) -> Result<(), Error> {
    let description = validate_configuration(&args.config).await?;

    println!("Config: read from {}", description);
    println!("Config is valid");

    Ok(())
}
