//! Run orchestration
//!
//! One invocation, one logical thread, strictly sequential stages:
//! config -> inventory -> load -> import graph -> {grouping, misplaced
//! detection} -> structure + scripts -> assemble -> validate -> write.
//! Fatal errors abort before any output exists; a per-file read failure
//! inside the loader is the only recoverable granularity.

use crate::config::{self, GroupingConfig};
use crate::detectors::detect_misplaced;
use crate::graph::ImportGraph;
use crate::grouping::scoring::FixedConfidence;
use crate::grouping::GroupingEngine;
use crate::inventory;
use crate::loader;
use crate::migration;
use crate::models::GroupingPlan;
use crate::plan;
use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub struct RunOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    /// User-supplied config path; `None` probes the default filename.
    pub config: Option<PathBuf>,
}

/// Execute a full advisory run and write the plan. Returns the plan so
/// the caller can present a summary.
pub fn run(opts: &RunOptions) -> Result<GroupingPlan> {
    let config = load_config(opts.config.as_deref())?;
    debug!("running as ion {} v{}", config.ion_name, config.version);
    let inventory = inventory::load_inventory(&opts.input)?;
    debug!("inventory workflow_version {}", inventory.workflow_version);
    info!(
        "analyzing {} inventoried files under {}",
        inventory.findings.files.len(),
        inventory.project_root
    );

    let ignore = loader::build_globset(&config.ignore_patterns)?;
    let preserve = loader::build_globset(&config.preserve_patterns)?;
    let loaded = loader::load_files(
        Path::new(&inventory.project_root),
        &inventory.findings.files,
        &ignore,
    );

    let graph = ImportGraph::build(&loaded);
    debug!("graph covers {} files", graph.len());

    let engine = GroupingEngine::new(&config, Box::new(FixedConfidence));
    let file_groups = engine.run(&graph);
    let misplaced = detect_misplaced(
        &graph,
        config.analysis.confidence_threshold,
        &preserve,
        &FixedConfidence,
    );

    let scripts = migration::generate_scripts(&misplaced, &config.git);
    let plan = plan::assemble(
        &inventory.project_root,
        loaded.len(),
        file_groups,
        misplaced,
        scripts,
    );

    // nothing is written unless the plan passes its own schema check
    plan::validate(&plan, &config)?;
    plan::write_plan(&plan, &opts.output)?;
    info!(
        "plan written: {} groups, {} misplaced files",
        plan.summary.groups_suggested, plan.summary.misplaced_files
    );
    Ok(plan)
}

fn load_config(explicit: Option<&Path>) -> Result<GroupingConfig> {
    let config = match explicit {
        Some(path) => config::load_config(path, true)?,
        None => config::load_config(Path::new(config::DEFAULT_CONFIG_FILE), false)?,
    };
    Ok(config)
}
