//! Sorted unique distances per node.

use crate::graph::Graph;

/// For each node, the ascending sequence of unique distances to every
/// node in the graph, self-distance 0 first.
///
/// Computed once per graph and read-only thereafter. Invariants:
/// each row is strictly increasing, starts at 0, and has at most `n`
/// entries.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceIndex {
    levels: Vec<Vec<f64>>,
}

impl DistanceIndex {
    /// Compute the index for a graph.
    pub fn build(graph: &Graph) -> Self {
        let levels = graph
            .nodes()
            .map(|i| {
                let mut row: Vec<f64> = graph.nodes().map(|j| graph.distance(i, j)).collect();
                row.sort_by(f64::total_cmp);
                row.dedup();
                row
            })
            .collect();
        Self { levels }
    }

    /// Number of nodes covered by the index.
    pub fn num_nodes(&self) -> usize {
        self.levels.len()
    }

    /// The full distance ladder of a node.
    pub fn levels(&self, node: usize) -> &[f64] {
        &self.levels[node]
    }

    /// Number of distinct distance levels of a node (level 0 included).
    pub fn num_levels(&self, node: usize) -> usize {
        self.levels[node].len()
    }

    /// The distance at a given level of a node.
    pub fn distance(&self, node: usize, level: usize) -> f64 {
        self.levels[node][level]
    }
}
