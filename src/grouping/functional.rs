//! Functional strategy: one-hop import-proximity clustering
//!
//! Walks graph files in natural key order. An unvisited file seeds a
//! related set: the file itself plus every relative-import target that
//! resolves into the loaded-file set. One hop only; transitive closure is
//! an explicit non-goal. Sets meeting the minimum group size become
//! groups, and their members are marked visited so they cannot seed or
//! join a second functional group. The visited set is owned by the pass,
//! scoped to a single run.

use crate::graph::ImportGraph;
use crate::grouping::scoring::ConfidenceModel;
use crate::models::{FileGroup, Strategy};
use crate::paths;
use std::collections::HashSet;

pub fn functional_groups(
    graph: &ImportGraph,
    min_group_size: usize,
    scoring: &dyn ConfidenceModel,
) -> Vec<FileGroup> {
    let mut groups = Vec::new();
    let mut visited: HashSet<String> = HashSet::new();

    for file in graph.files() {
        if visited.contains(file) {
            continue;
        }

        // seed first, then one-hop resolved targets in specifier order
        let mut related: Vec<String> = vec![file.to_string()];
        for target in graph.resolved_targets(file) {
            if visited.contains(&target) || related.contains(&target) {
                continue;
            }
            related.push(target);
        }

        if related.len() < min_group_size {
            continue;
        }

        let dir = paths::parent_dir(&related[0]);
        let name = paths::dir_base_name(dir).to_string();
        let confidence = scoring.group_confidence(Strategy::Functional, &related);
        visited.extend(related.iter().cloned());
        groups.push(FileGroup {
            id: format!("functional-{}", groups.len() + 1),
            suggested_location: format!("src/{name}"),
            reason: format!(
                "{} files linked by direct imports around {}",
                related.len(),
                related[0]
            ),
            name,
            strategy: Strategy::Functional,
            files: related,
            confidence,
        });
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grouping::scoring::FixedConfidence;
    use std::collections::BTreeMap;

    fn graph_of(files: &[(&str, &str)]) -> ImportGraph {
        let map: BTreeMap<String, String> = files
            .iter()
            .map(|(p, c)| (p.to_string(), c.to_string()))
            .collect();
        ImportGraph::build(&map)
    }

    #[test]
    fn test_mutual_import_trio_forms_one_group() {
        let graph = graph_of(&[
            ("src/auth/a.ts", "import './b';\nimport './c';\n"),
            ("src/auth/b.ts", "import './a';\nimport './c';\n"),
            ("src/auth/c.ts", "import './a';\nimport './b';\n"),
        ]);
        let groups = functional_groups(&graph, 3, &FixedConfidence);

        assert_eq!(groups.len(), 1);
        let group = &groups[0];
        assert_eq!(group.strategy, Strategy::Functional);
        assert_eq!(group.confidence, 0.8);
        assert_eq!(group.files.len(), 3);
        assert_eq!(group.name, "auth");
        assert_eq!(group.suggested_location, "src/auth");
    }

    #[test]
    fn test_visited_members_cannot_join_second_group() {
        // d imports the already-grouped trio; its related set shrinks to
        // itself and stays below the minimum
        let graph = graph_of(&[
            ("src/auth/a.ts", "import './b';\nimport './c';\n"),
            ("src/auth/b.ts", "import './a';\n"),
            ("src/auth/c.ts", "import './a';\n"),
            ("src/auth/d.ts", "import './a';\nimport './b';\n"),
        ]);
        let groups = functional_groups(&graph, 3, &FixedConfidence);

        assert_eq!(groups.len(), 1);
        assert!(!groups[0].files.contains(&"src/auth/d.ts".to_string()));
    }

    #[test]
    fn test_small_related_sets_stay_ungrouped() {
        let graph = graph_of(&[
            ("src/a.ts", "import './b';\n"),
            ("src/b.ts", ""),
        ]);
        assert!(functional_groups(&graph, 3, &FixedConfidence).is_empty());
    }

    #[test]
    fn test_group_meets_min_size_invariant() {
        let graph = graph_of(&[
            ("src/x/a.ts", "import './b';\nimport './c';\nimport './d';\n"),
            ("src/x/b.ts", ""),
            ("src/x/c.ts", ""),
            ("src/x/d.ts", ""),
        ]);
        let groups = functional_groups(&graph, 2, &FixedConfidence);
        for group in &groups {
            assert!(group.files.len() >= 2);
            assert!((0.0..=1.0).contains(&group.confidence));
        }
    }
}
