//! Layered strategy: keyword-bucket classification
//!
//! Independent of the functional pass and blind to its visited set, so a
//! file may belong to both a functional and a layered group. Buckets are
//! an ordered (label, keywords) table with first-match-wins semantics on
//! the path, so layers can be added or reordered without touching the
//! classifier.

use crate::graph::ImportGraph;
use crate::grouping::scoring::ConfidenceModel;
use crate::models::{FileGroup, Strategy};
use indexmap::IndexMap;

/// Priority-ordered layer buckets. Earlier entries win.
const LAYER_BUCKETS: &[(&str, &[&str])] = &[
    ("ui", &["component", "view", "ui"]),
    ("services", &["service", "api"]),
    ("models", &["model", "schema"]),
    ("utils", &["util", "helper"]),
];

fn classify(path: &str) -> Option<&'static str> {
    let lowered = path.to_lowercase();
    LAYER_BUCKETS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lowered.contains(kw)))
        .map(|(bucket, _)| *bucket)
}

pub fn layered_groups(
    graph: &ImportGraph,
    min_group_size: usize,
    scoring: &dyn ConfidenceModel,
) -> Vec<FileGroup> {
    let mut buckets: IndexMap<&'static str, Vec<String>> = LAYER_BUCKETS
        .iter()
        .map(|(bucket, _)| (*bucket, Vec::new()))
        .collect();

    for file in graph.files() {
        if let Some(bucket) = classify(file) {
            buckets[bucket].push(file.to_string());
        }
    }

    buckets
        .into_iter()
        .filter(|(_, files)| files.len() >= min_group_size)
        .map(|(bucket, files)| {
            let confidence = scoring.group_confidence(Strategy::Layered, &files);
            FileGroup {
                id: format!("layered-{bucket}"),
                name: bucket.to_string(),
                strategy: Strategy::Layered,
                suggested_location: format!("src/{bucket}"),
                reason: format!(
                    "{} files match the '{bucket}' layer keywords",
                    files.len()
                ),
                files,
                confidence,
            }
        })
        .collect()
}
