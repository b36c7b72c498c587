//! Core data models for code-grouper
//!
//! These models mirror the three documents the advisor exchanges with the
//! outside world: the file inventory it consumes, and the grouping plan it
//! produces for a downstream file-moving tool.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One inventoried file, as reported by the upstream scanner.
///
/// `path` is project-relative with `/` separators and is the unique key
/// for the file throughout a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileRecord {
    pub path: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub lines: usize,
    #[serde(default)]
    pub extension: String,
}

/// Clustering strategy that produced a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Functional,
    Layered,
    Domain,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Functional => write!(f, "functional"),
            Strategy::Layered => write!(f, "layered"),
            Strategy::Domain => write!(f, "domain"),
        }
    }
}

/// A proposed cluster of files that belong together.
///
/// Invariant: `files.len()` meets the configured minimum group size at
/// creation time, and `confidence` is in [0, 1].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileGroup {
    pub id: String,
    pub name: String,
    pub strategy: Strategy,
    pub files: Vec<String>,
    pub suggested_location: String,
    pub confidence: f64,
    pub reason: String,
}

/// A file whose dominant import-target directory differs from where it
/// currently lives.
///
/// Invariant: `suggested_location != current_location` and `confidence`
/// meets the configured threshold, else the finding is not emitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MisplacedFile {
    pub file: String,
    pub current_location: String,
    pub suggested_location: String,
    pub confidence: f64,
    pub reason: String,
}

/// Counters summarizing a run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanSummary {
    pub files_analyzed: usize,
    pub groups_suggested: usize,
    pub misplaced_files: usize,
    pub migrations_needed: usize,
}

/// Generated move scripts in two shell dialects. Rollback fields are
/// absent (not empty) when rollback generation is disabled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MigrationScripts {
    pub bash: String,
    pub powershell: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rollback_bash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rollback_powershell: Option<String>,
}

/// Priority tag for a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub priority: Priority,
    pub description: String,
}

/// The terminal artifact of a run. Written once, consumed by an external
/// file-moving tool; this core never applies it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupingPlan {
    pub generated_at: String,
    pub project_root: String,
    pub summary: PlanSummary,
    pub file_groups: Vec<FileGroup>,
    pub misplaced_files: Vec<MisplacedFile>,
    pub proposed_structure: IndexMap<String, Vec<String>>,
    pub migration_scripts: MigrationScripts,
    pub recommendations: Vec<Recommendation>,
}
