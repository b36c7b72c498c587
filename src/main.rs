//! code-grouper - Static code-organization advisor
//!
//! Consumes a pre-computed file inventory, builds a module import graph,
//! clusters files into proposed groups, flags files whose import
//! relationships suggest they live in the wrong directory, and writes a
//! machine-applyable reorganization plan with migration scripts.
//!
//! The advisor never touches the analyzed file system: it only produces
//! plans and scripts for a downstream mover to apply.

mod cli;
mod config;
mod detectors;
mod errors;
mod graph;
mod grouping;
mod inventory;
mod loader;
mod migration;
mod models;
mod paths;
mod pipeline;
mod plan;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // RUST_LOG wins when set; otherwise honor --log-level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level.clone()));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    cli::run(cli)
}
