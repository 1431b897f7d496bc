//! Binary crate for the `weather-dash` terminal dashboard.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive prompting
//! - Human-friendly output formatting

use clap::Parser;

mod cli;
mod logger;
mod render;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logger::init()?;
    let cmd = cli::Cli::parse();
    cmd.run().await
}
