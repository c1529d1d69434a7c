//! siteforge CLI — deterministic static affiliate-site generator.
//!
//! Renders a complete static site (articles, listings, policy pages,
//! sitemaps, deployment metadata) from one CSV and one JSON config.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli).await
}
