//! Misplaced-file detection
//!
//! A file is misplaced when the directory most of its resolved imports
//! point into differs from the directory it currently lives in. Runs over
//! the full import graph, independent of grouping. Ties between equally
//! dominant directories break toward the one encountered first, which the
//! insertion-ordered tally makes deterministic.

use crate::graph::ImportGraph;
use crate::grouping::scoring::ConfidenceModel;
use crate::models::MisplacedFile;
use crate::paths;
use globset::GlobSet;
use indexmap::IndexMap;
use tracing::debug;

pub fn detect_misplaced(
    graph: &ImportGraph,
    confidence_threshold: f64,
    preserve: &GlobSet,
    scoring: &dyn ConfidenceModel,
) -> Vec<MisplacedFile> {
    let mut findings = Vec::new();

    for file in graph.files() {
        if preserve.is_match(file) {
            debug!("{} matches a preserve pattern, never flagged", file);
            continue;
        }

        // tally target directories in first-encounter order
        let targets = graph.resolved_targets(file);
        let mut tally: IndexMap<String, usize> = IndexMap::new();
        for target in &targets {
            *tally.entry(paths::parent_dir(target).to_string()).or_insert(0) += 1;
        }
        if tally.is_empty() {
            continue;
        }

        // only a strictly greater count replaces the leader, so ties keep
        // the first-encountered directory
        let mut dominant = ("", 0usize);
        for (dir, count) in &tally {
            if *count > dominant.1 {
                dominant = (dir.as_str(), *count);
            }
        }
        let (dominant, count) = (dominant.0.to_string(), dominant.1);

        let current = paths::parent_dir(file);
        if dominant == current {
            continue;
        }

        let confidence = scoring.misplaced_confidence(count, targets.len());
        if confidence < confidence_threshold {
            continue;
        }

        findings.push(MisplacedFile {
            file: file.to_string(),
            current_location: current.to_string(),
            reason: format!(
                "{count} of {} resolved imports point into {dominant}",
                targets.len()
            ),
            suggested_location: dominant,
            confidence,
        });
    }

    findings
}
