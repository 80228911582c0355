//! Complete weighted graph instances and depot allocation.
//!
//! The solver only needs node enumeration and a distance defined for
//! every node pair, so instances are stored as a dense symmetric
//! distance matrix with a zero diagonal. Constructors cover explicit
//! matrices, point sets under the Manhattan metric, and seeded random
//! instances.

use crate::error::PMedianError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A complete graph over nodes `0..n` with non-negative pairwise
/// distances.
#[derive(Debug, Clone)]
pub struct Graph {
    n: usize,
    dist: Vec<f64>,
}

impl Graph {
    /// Build a graph from a dense distance matrix.
    ///
    /// The matrix must be square and symmetric with a zero diagonal
    /// and finite non-negative entries.
    ///
    /// # Errors
    ///
    /// `InvalidDistanceMatrix` naming the offending entry when any of
    /// those conditions fails; nothing is constructed on failure.
    pub fn from_matrix(matrix: &[Vec<f64>]) -> Result<Self, PMedianError> {
        let n = matrix.len();
        let mut dist = vec![0.0; n * n];
        for (i, row) in matrix.iter().enumerate() {
            if row.len() != n {
                return Err(PMedianError::InvalidDistanceMatrix {
                    row: i,
                    column: row.len(),
                    reason: "row length differs from the node count",
                });
            }
            for (j, &d) in row.iter().enumerate() {
                if !d.is_finite() || d < 0.0 {
                    return Err(PMedianError::InvalidDistanceMatrix {
                        row: i,
                        column: j,
                        reason: "must be finite and non-negative",
                    });
                }
                if i == j && d != 0.0 {
                    return Err(PMedianError::InvalidDistanceMatrix {
                        row: i,
                        column: j,
                        reason: "must be zero on the diagonal",
                    });
                }
                dist[i * n + j] = d;
            }
        }
        for i in 0..n {
            for j in (i + 1)..n {
                if dist[i * n + j] != dist[j * n + i] {
                    return Err(PMedianError::InvalidDistanceMatrix {
                        row: i,
                        column: j,
                        reason: "differs from its transposed entry",
                    });
                }
            }
        }
        Ok(Self { n, dist })
    }

    /// Build a complete graph from 2-D points under the Manhattan
    /// metric.
    pub fn from_points(points: &[(f64, f64)]) -> Self {
        let n = points.len();
        let mut dist = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = (points[i].0 - points[j].0).abs() + (points[i].1 - points[j].1).abs();
                dist[i * n + j] = d;
                dist[j * n + i] = d;
            }
        }
        Self { n, dist }
    }

    /// Generate a random instance: `n` nodes with integer coordinates
    /// uniform on `[0, mapsize]`, Manhattan distances between them.
    ///
    /// The seed is an explicit parameter so instances are reproducible.
    pub fn random(n: usize, mapsize: u32, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let points: Vec<(f64, f64)> = (0..n)
            .map(|_| {
                (
                    rng.random_range(0..=mapsize) as f64,
                    rng.random_range(0..=mapsize) as f64,
                )
            })
            .collect();
        Self::from_points(&points)
    }

    /// Number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.n
    }

    /// Iterate over node indices.
    pub fn nodes(&self) -> std::ops::Range<usize> {
        0..self.n
    }

    /// Distance between two nodes; `distance(i, i)` is 0.
    pub fn distance(&self, i: usize, j: usize) -> f64 {
        self.dist[i * self.n + j]
    }
}

/// Assign every node to its nearest depot, ties going to the depot
/// with the lower index. Returns one depot index per node; an empty
/// depot slice yields an empty assignment.
///
/// `depots` must contain valid node indices.
pub fn allocate(graph: &Graph, depots: &[usize]) -> Vec<usize> {
    let Some((&first, rest)) = depots.split_first() else {
        return Vec::new();
    };
    graph
        .nodes()
        .map(|i| {
            let mut best = first;
            let mut best_dist = graph.distance(i, best);
            for &depot in rest {
                let d = graph.distance(i, depot);
                if d < best_dist {
                    best = depot;
                    best_dist = d;
                }
            }
            best
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn from_points_manhattan() {
        let graph = Graph::from_points(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
        assert_eq!(graph.num_nodes(), 3);
        assert_eq!(graph.distance(0, 1), 1.0);
        assert_eq!(graph.distance(0, 2), 2.0);
        assert_eq!(graph.distance(2, 0), 2.0);
        assert_eq!(graph.distance(1, 1), 0.0);
    }

    #[test]
    fn from_matrix_roundtrip() {
        let graph = Graph::from_matrix(&[
            vec![0.0, 3.0],
            vec![3.0, 0.0],
        ])
        .unwrap();
        assert_eq!(graph.distance(0, 1), 3.0);
        assert_eq!(graph.distance(1, 0), 3.0);
    }

    #[test]
    fn from_matrix_rejects_asymmetry() {
        let err = Graph::from_matrix(&[vec![0.0, 3.0], vec![7.0, 0.0]]).unwrap_err();
        assert_eq!(err.code(), "GRAPH_INVALID_MATRIX");
        assert!(matches!(
            err,
            PMedianError::InvalidDistanceMatrix { row: 0, column: 1, .. }
        ));
    }

    #[test]
    fn from_matrix_rejects_nonzero_diagonal() {
        let err = Graph::from_matrix(&[vec![1.0, 3.0], vec![3.0, 0.0]]).unwrap_err();
        assert!(matches!(
            err,
            PMedianError::InvalidDistanceMatrix { row: 0, column: 0, .. }
        ));
    }

    #[test]
    fn from_matrix_rejects_ragged_rows() {
        let err = Graph::from_matrix(&[vec![0.0, 1.0], vec![1.0]]).unwrap_err();
        assert!(matches!(
            err,
            PMedianError::InvalidDistanceMatrix { row: 1, .. }
        ));
    }

    #[test]
    fn from_matrix_rejects_negative_and_nan_entries() {
        let err = Graph::from_matrix(&[vec![0.0, -1.0], vec![-1.0, 0.0]]).unwrap_err();
        assert_eq!(err.code(), "GRAPH_INVALID_MATRIX");

        let err = Graph::from_matrix(&[vec![0.0, f64::NAN], vec![1.0, 0.0]]).unwrap_err();
        assert_eq!(err.code(), "GRAPH_INVALID_MATRIX");
    }

    #[test]
    fn random_is_reproducible_for_a_seed() {
        let a = Graph::random(10, 50, 42);
        let b = Graph::random(10, 50, 42);
        for i in a.nodes() {
            for j in a.nodes() {
                assert_eq!(a.distance(i, j), b.distance(i, j));
            }
        }
    }

    #[test]
    fn allocate_picks_nearest_depot() {
        let graph = Graph::from_points(&[(0.0, 0.0), (1.0, 0.0), (10.0, 0.0), (11.0, 0.0)]);
        let assignment = allocate(&graph, &[0, 3]);
        assert_eq!(assignment, vec![0, 0, 3, 3]);
    }

    #[test]
    fn allocate_with_no_depots_is_empty() {
        let graph = Graph::from_points(&[(0.0, 0.0), (1.0, 0.0)]);
        assert!(allocate(&graph, &[]).is_empty());
    }

    #[test]
    fn allocate_breaks_ties_toward_lower_depot_index() {
        let graph = Graph::from_points(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        // Node 1 is equidistant from depots 0 and 2.
        let assignment = allocate(&graph, &[0, 2]);
        assert_eq!(assignment[1], 0);
    }
}
