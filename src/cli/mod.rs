//! CLI surface
//!
//! One operation: read an inventory document, analyze it, write a
//! grouping plan. Exit code 0 with the plan on disk, exit code 1 with a
//! message on stderr and nothing written on any fatal error.

use crate::pipeline::{self, RunOptions};
use anyhow::Result;
use clap::Parser;
use console::style;
use std::path::PathBuf;

/// code-grouper - Static code-organization advisor
///
/// Analyzes a scanned file inventory and proposes a reorganization plan.
/// Never moves anything itself.
#[derive(Parser, Debug)]
#[command(name = "code-grouper")]
#[command(
    version,
    about = "Propose code reorganization from a scanned file inventory",
    long_about = "code-grouper consumes a scanner-produced file inventory, builds an import \
graph, clusters files by functional and layered strategies, flags files whose \
imports suggest they live in the wrong directory, and writes a reviewable plan \
with forward and rollback migration scripts.\n\n\
The analyzed project is never modified; applying the plan is a separate tool's job.",
    after_help = "\
Examples:
  code-grouper scan.json                         Analyze, write grouping.json
  code-grouper scan.json -o plan.json            Custom output path
  code-grouper scan.json -c grouper.config.json  Explicit config
  RUST_LOG=debug code-grouper scan.json          Verbose stage logging"
)]
pub struct Cli {
    /// Path to the inventory document produced by the upstream scanner
    pub input: PathBuf,

    /// Output path for the grouping plan
    #[arg(long, short = 'o', default_value = "grouping.json")]
    pub output: PathBuf,

    /// Config document path (default: grouper.config.json if present)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,
}

pub fn run(cli: Cli) -> Result<()> {
    let plan = pipeline::run(&RunOptions {
        input: cli.input,
        output: cli.output.clone(),
        config: cli.config,
    })?;

    println!("{}", style("Grouping plan").bold());
    println!("{}", style("──────────────────────────").dim());
    println!("  Files analyzed:   {}", plan.summary.files_analyzed);
    println!("  Groups suggested: {}", plan.summary.groups_suggested);
    println!("  Misplaced files:  {}", plan.summary.misplaced_files);
    println!("  Migrations:       {}", plan.summary.migrations_needed);
    println!("\n  Plan written to {}", style(cli.output.display()).green());
    Ok(())
}
