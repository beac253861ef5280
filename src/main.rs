mod cli;
mod commands;
mod mcp;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use pagecut::selection::RetentionMode;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Mcp => {
            mcp::run_server().await?;
        }
        Commands::Info { path } => {
            commands::info::run(&path)?;
        }
        Commands::Preview { path, pages, keep } => {
            commands::preview::run(&path, &pages, retention_mode(keep))?;
        }
        Commands::Remove {
            path,
            pages,
            output,
            keep,
        } => {
            commands::remove::run(&path, &pages, &output, retention_mode(keep))?;
        }
        Commands::Merge {
            inputs,
            output,
            sort,
        } => {
            commands::merge::run(&inputs, &output, sort)?;
        }
        Commands::Compress { path, output } => {
            commands::compress::run(&path, &output)?;
        }
    }

    Ok(())
}

fn retention_mode(keep: bool) -> RetentionMode {
    if keep {
        RetentionMode::KeepSelected
    } else {
        RetentionMode::RemoveSelected
    }
}
