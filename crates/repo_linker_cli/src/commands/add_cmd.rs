//! The `add` command: link a repository to the configured installations.

use clap::Args;
use tracing::instrument;

use repo_linker_core::{add_repository_to_installations, AddRequest, Error};

#[cfg(test)]
#[path = "add_cmd_tests.rs"]
mod tests;

/// Arguments for the `add` command.
#[derive(Args, Debug)]
pub struct AddArgs {
    /// GitHub repository e.g. https://github.com/github-organization/github-repo-name
    #[arg(short = 'r', long = "repo")]
    pub repo: String,

    /// Path to JSON configuration (URL or local filepath)
    #[arg(short = 'c', long = "config")]
    pub config: String,

    /// GitHub Personal Access Token (must have all repo scopes)
    #[arg(short = 't', long = "token")]
    pub token: String,
}

/// Execute the add command.
#[instrument(skip(args))]
pub async fn execute(args: &AddArgs) -> Result<(), Error> {
    let request = AddRequest {
        repository: args.repo.clone(),
        config_source: args.config.clone(),
        token: args.token.clone(),
    };

    let report = add_repository_to_installations(request).await?;

    println!("Config: read from {}", report.config_description);
    println!();
    println!("The options you have specified have been parsed as:");
    println!("- GitHub organisation: {}", report.owner);
    println!("- GitHub repo: {}", report.repository);
    println!();
    println!(
        "Authenticated as GitHub user {}",
        report.authenticated_login
    );
    println!("GitHub repo {}/{} exists", report.owner, report.repository);
    println!();
    for installation in &report.installations {
        println!(
            "Added repo to installation {} ({})",
            installation.comment,
            installation.settings_url(&report.owner)
        );
    }
    println!();
    println!(
        "Go to {} to see the installed GitHub apps for this repo.",
        report.settings_url
    );

    Ok(())
}
