//! Trailhead CLI Application
//!
//! Command-line interface for generating and tracking learning roadmaps.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use trailhead_core::MentorBuilder;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        catalog_file,
        no_color,
        basic,
        command,
    } = Args::parse();

    let mentor = MentorBuilder::new()
        .with_database_path(database_file)
        .with_catalog_file(catalog_file)
        .with_enhanced(!basic)
        .build()
        .await
        .context("Failed to initialize mentor")?;

    info!("Trailhead started with store {}", mentor.database_path().display());

    let cli = Cli::new(mentor, TerminalRenderer::new(!no_color));
    match command {
        Some(command) => cli.run(command).await,
        None => cli.list_plans().await,
    }
}
