//! Binary crate for the weather archive job.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Logging and environment bootstrap
//! - Handing one run to `archiver-core`

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    cmd.run().await
}
