// idcheck/src/main.rs

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout only carries reports.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { project_dir } => commands::run::execute(project_dir).await,
        Commands::Person {
            project_dir,
            person_id,
            documents,
        } => commands::person::execute(project_dir, person_id, documents).await,
        Commands::Verify {
            input,
            format,
            check,
        } => commands::verify::execute(input, format, check),
        Commands::Normalize { input } => commands::normalize::execute(input),
    }
}
