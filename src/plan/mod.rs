//! Plan assembly: proposed structure, recommendations, validation, write
//!
//! The assembled plan is validated against its own schema before anything
//! touches disk. A plan that fails validation is a fatal error and leaves
//! no output behind.

use crate::config::GroupingConfig;
use crate::errors::GrouperError;
use crate::models::{
    FileGroup, GroupingPlan, MigrationScripts, MisplacedFile, PlanSummary, Priority,
    Recommendation,
};
use anyhow::{Context, Result};
use indexmap::IndexMap;
use std::path::Path;
use tracing::debug;

/// Map each group to its suggested directory. Groups are visited in
/// emission order (functional before layered); when two groups propose the
/// same directory their file lists merge, order-preserving and
/// deduplicated.
pub fn propose_structure(groups: &[FileGroup]) -> IndexMap<String, Vec<String>> {
    let mut structure: IndexMap<String, Vec<String>> = IndexMap::new();
    for group in groups {
        let entry = structure
            .entry(group.suggested_location.clone())
            .or_default();
        for file in &group.files {
            if !entry.contains(file) {
                entry.push(file.clone());
            }
        }
    }
    structure
}

/// Deterministic, count-derived recommendations.
pub fn recommendations(summary: &PlanSummary) -> Vec<Recommendation> {
    let mut recs = Vec::new();
    if summary.misplaced_files > 0 {
        recs.push(Recommendation {
            priority: Priority::High,
            description: format!(
                "Move {} misplaced file(s) toward their dominant import directories",
                summary.misplaced_files
            ),
        });
    }
    if summary.groups_suggested > 0 {
        recs.push(Recommendation {
            priority: Priority::Medium,
            description: format!(
                "Review {} suggested file group(s) for consolidation",
                summary.groups_suggested
            ),
        });
    }
    if summary.misplaced_files > 0 || summary.groups_suggested > 0 {
        recs.push(Recommendation {
            priority: Priority::Low,
            description: "Apply migrations on a clean branch and run the test suite before merging"
                .to_string(),
        });
    }
    recs
}

/// Assemble the terminal artifact for a run.
pub fn assemble(
    project_root: &str,
    files_analyzed: usize,
    file_groups: Vec<FileGroup>,
    misplaced_files: Vec<MisplacedFile>,
    migration_scripts: MigrationScripts,
) -> GroupingPlan {
    let summary = PlanSummary {
        files_analyzed,
        groups_suggested: file_groups.len(),
        misplaced_files: misplaced_files.len(),
        migrations_needed: misplaced_files.len(),
    };
    let proposed_structure = propose_structure(&file_groups);
    let recommendations = recommendations(&summary);
    GroupingPlan {
        generated_at: chrono::Utc::now().to_rfc3339(),
        project_root: project_root.to_string(),
        summary,
        file_groups,
        misplaced_files,
        proposed_structure,
        migration_scripts,
        recommendations,
    }
}

/// Output-schema check, run before the single write. Guards against ever
/// emitting a structurally invalid plan.
pub fn validate(plan: &GroupingPlan, config: &GroupingConfig) -> Result<(), GrouperError> {
    let fail = |msg: String| Err(GrouperError::OutputValidation(msg));

    if plan.summary.groups_suggested != plan.file_groups.len() {
        return fail("summary.groups_suggested does not match file_groups".to_string());
    }
    if plan.summary.misplaced_files != plan.misplaced_files.len() {
        return fail("summary.misplaced_files does not match misplaced_files".to_string());
    }

    let min = config.analysis.min_group_size;
    for group in &plan.file_groups {
        if group.files.len() < min {
            return fail(format!(
                "group {} has {} member(s), below the minimum of {min}",
                group.id,
                group.files.len()
            ));
        }
        if !(0.0..=1.0).contains(&group.confidence) {
            return fail(format!(
                "group {} confidence {} outside [0, 1]",
                group.id, group.confidence
            ));
        }
    }

    for m in &plan.misplaced_files {
        if m.suggested_location == m.current_location {
            return fail(format!(
                "misplaced file {} suggests its current directory",
                m.file
            ));
        }
        if m.confidence < config.analysis.confidence_threshold {
            return fail(format!(
                "misplaced file {} confidence {} below threshold",
                m.file, m.confidence
            ));
        }
    }

    for (dir, files) in &plan.proposed_structure {
        if files.is_empty() {
            return fail(format!("proposed directory {dir} has no files"));
        }
    }

    let rollback = config.git.generate_rollback;
    if rollback != plan.migration_scripts.rollback_bash.is_some()
        || rollback != plan.migration_scripts.rollback_powershell.is_some()
    {
        return fail("rollback script presence does not match config".to_string());
    }

    Ok(())
}

/// Serialize and write the validated plan in one shot.
pub fn write_plan(plan: &GroupingPlan, output: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(plan).context("serialize plan")?;
    std::fs::write(output, json)
        .with_context(|| format!("write plan to {}", output.display()))?;
    debug!("plan written to {}", output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Strategy;

    fn group(id: &str, location: &str, files: &[&str]) -> FileGroup {
        FileGroup {
            id: id.to_string(),
            name: id.to_string(),
            strategy: Strategy::Functional,
            files: files.iter().map(|f| f.to_string()).collect(),
            suggested_location: location.to_string(),
            confidence: 0.8,
            reason: String::new(),
        }
    }

    fn empty_scripts(rollback: bool) -> MigrationScripts {
        MigrationScripts {
            bash: String::new(),
            powershell: String::new(),
            rollback_bash: rollback.then(String::new),
            rollback_powershell: rollback.then(String::new),
        }
    }

    #[test]
    fn test_structure_merges_directory_collisions() {
        let groups = vec![
            group("functional-1", "src/auth", &["a.ts", "b.ts"]),
            group("layered-utils", "src/auth", &["b.ts", "c.ts"]),
        ];
        let structure = propose_structure(&groups);

        assert_eq!(structure.len(), 1);
        assert_eq!(
            structure["src/auth"],
            vec!["a.ts".to_string(), "b.ts".to_string(), "c.ts".to_string()]
        );
    }

    #[test]
    fn test_recommendations_track_counts() {
        let summary = PlanSummary {
            files_analyzed: 10,
            groups_suggested: 2,
            misplaced_files: 3,
            migrations_needed: 3,
        };
        let recs = recommendations(&summary);
        assert_eq!(recs.len(), 3);
        assert_eq!(recs[0].priority, Priority::High);
        assert!(recs[0].description.contains('3'));

        let empty = recommendations(&PlanSummary::default());
        assert!(empty.is_empty());
    }

    #[test]
    fn test_validate_accepts_consistent_plan() {
        let config = GroupingConfig::default();
        let plan = assemble(
            "/p",
            5,
            vec![group("functional-1", "src/auth", &["a", "b", "c"])],
            vec![],
            empty_scripts(true),
        );
        assert!(validate(&plan, &config).is_ok());
    }

    #[test]
    fn test_validate_rejects_undersized_group() {
        let config = GroupingConfig::default(); // min_group_size 3
        let plan = assemble(
            "/p",
            5,
            vec![group("functional-1", "src/auth", &["a"])],
            vec![],
            empty_scripts(true),
        );
        assert!(matches!(
            validate(&plan, &config),
            Err(GrouperError::OutputValidation(_))
        ));
    }

    #[test]
    fn test_validate_rejects_self_suggestion() {
        let config = GroupingConfig::default();
        let plan = assemble(
            "/p",
            5,
            vec![],
            vec![MisplacedFile {
                file: "src/a/x.ts".to_string(),
                current_location: "src/a".to_string(),
                suggested_location: "src/a".to_string(),
                confidence: 0.7,
                reason: String::new(),
            }],
            empty_scripts(true),
        );
        assert!(matches!(
            validate(&plan, &config),
            Err(GrouperError::OutputValidation(_))
        ));
    }

    #[test]
    fn test_validate_rejects_rollback_mismatch() {
        let mut config = GroupingConfig::default();
        config.git.generate_rollback = false;
        let plan = assemble("/p", 0, vec![], vec![], empty_scripts(true));
        assert!(matches!(
            validate(&plan, &config),
            Err(GrouperError::OutputValidation(_))
        ));
    }
}
