use clap::{Parser, Subcommand};

mod commands;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::commands::{add_cmd::AddArgs, validate_config_cmd::ValidateConfigArgs};

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;

/// RepoLinker CLI: Add a GitHub repository to GitHub App installations
#[derive(Parser)]
#[command(name = "repo-linker")]
#[command(about = "Add a GitHub repository to GitHub App installations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a GitHub repository to the GitHub App installations named by the
    /// configuration
    #[command()]
    Add(AddArgs),

    /// Validate a JSON configuration against the installations schema
    ValidateConfig(ValidateConfigArgs),
}

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().pretty())
        .with(EnvFilter::from_env("REPO_LINKER_LOG"))
        .init();

    let cli = Cli::parse();
    match &cli.command {
        Commands::Add(args) => {
            if let Err(e) = commands::add_cmd::execute(args).await {
                eprintln!("ERROR: {e}");
                std::process::exit(1);
            }
        }
        Commands::ValidateConfig(args) => {
            if let Err(e) = commands::validate_config_cmd::execute(args).await {
                eprintln!("ERROR: {e}");
                std::process::exit(1);
            }
        }
    }
}
