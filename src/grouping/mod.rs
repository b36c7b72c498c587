//! Grouping engine: strategy-gated file clustering
//!
//! Two independent classifiers run over the import graph: functional
//! (one-hop import proximity) and layered (keyword buckets). The config
//! `strategies` list gates which passes run; `domain` is accepted in
//! config for forward compatibility but has no classifier yet.

mod functional;
mod layered;
pub mod scoring;

pub use functional::functional_groups;
pub use layered::layered_groups;

use crate::config::GroupingConfig;
use crate::graph::ImportGraph;
use crate::models::{FileGroup, Strategy};
use scoring::ConfidenceModel;
use tracing::debug;

pub struct GroupingEngine<'a> {
    config: &'a GroupingConfig,
    scoring: Box<dyn ConfidenceModel>,
}

impl<'a> GroupingEngine<'a> {
    pub fn new(config: &'a GroupingConfig, scoring: Box<dyn ConfidenceModel>) -> Self {
        Self { config, scoring }
    }

    /// Run every configured strategy, functional first. Dual membership
    /// across strategies is intentional and preserved.
    pub fn run(&self, graph: &ImportGraph) -> Vec<FileGroup> {
        let min = self.config.analysis.min_group_size;
        let mut groups = Vec::new();

        for strategy in &self.config.strategies {
            match strategy {
                Strategy::Functional => {
                    groups.extend(functional_groups(graph, min, self.scoring.as_ref()));
                }
                Strategy::Layered => {
                    groups.extend(layered_groups(graph, min, self.scoring.as_ref()));
                }
                Strategy::Domain => {
                    debug!("domain strategy has no classifier yet; skipping");
                }
            }
        }

        debug!("grouping produced {} groups", groups.len());
        groups
    }
}
