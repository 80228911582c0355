//! Radius formulation of the p-median model.
//!
//! One depot variable `y[i]` per node, and per (node, level) pair a
//! coverage variable `z[i][k]` whose objective coefficient is the
//! marginal distance increment `D[i][k] − D[i][k−1]`. The coverage
//! constraint at threshold `d = D[i][k]`,
//!
//! ```text
//! z[i][k] + Σ_{j : dist(i,j) < d} y[j] ≥ 1
//! ```
//!
//! forces either a depot strictly closer than `d` or the coverage
//! variable to pay for the increment, so the `z` chain telescopes to
//! the distance from `i` to its nearest depot. With every level
//! materialized the model is exact; a truncated horizon is the seed
//! completed by column generation.

use crate::distance::DistanceIndex;
use crate::error::PMedianError;
use crate::graph::Graph;
use tracing::debug;
use zebra_model::{Bounds, Model, Variable, VariableId};

/// The variable layout of one radius model: depot variables, per-node
/// coverage chains, and the highest materialized level per node.
#[derive(Debug)]
pub struct RadiusModel {
    y: Vec<VariableId>,
    // z[i] holds levels 1..=kmax[i]; slot k-1 is level k. Level 0 is
    // never materialized (its increment would be 0).
    z: Vec<Vec<VariableId>>,
    kmax: Vec<usize>,
}

impl RadiusModel {
    /// Build the radius model into `model`, materializing coverage
    /// levels `1..=min(maxk, len(D[i])−1)` for every node, plus the
    /// cardinality constraint `Σ y[i] = p`.
    ///
    /// Depot variables are created binary; relax them with
    /// [`RadiusModel::relax_depots`] before column generation.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if `p` is not in `1..=n` or `maxk ≥ n`;
    /// raised before anything is added to the model.
    pub fn build(
        model: &mut Model,
        index: &DistanceIndex,
        graph: &Graph,
        p: usize,
        maxk: usize,
    ) -> Result<Self, PMedianError> {
        let n = index.num_nodes();
        if p == 0 || p > n {
            return Err(PMedianError::InvalidParameter {
                name: "p",
                value: p,
                limit: n,
            });
        }
        if maxk >= n {
            return Err(PMedianError::InvalidParameter {
                name: "maxk",
                value: maxk,
                limit: n.saturating_sub(1),
            });
        }

        let y = model.add_binaries(n);
        let mut z = Vec::with_capacity(n);
        let mut kmax = Vec::with_capacity(n);

        for i in 0..n {
            let last = maxk.min(index.num_levels(i) - 1);
            let mut chain = Vec::with_capacity(last);
            for k in 1..=last {
                let increment = index.distance(i, k) - index.distance(i, k - 1);
                let z_ik =
                    model.add_variable(Variable::continuous(Bounds::new(0.0, 1.0), increment))?;
                model.add_constraint(
                    Bounds::at_least(1.0),
                    coverage_terms(graph, &y, Some(z_ik), i, index.distance(i, k)),
                )?;
                chain.push(z_ik);
            }
            z.push(chain);
            kmax.push(last);
        }

        let cardinality: Vec<(VariableId, f64)> = y.iter().map(|&var| (var, 1.0)).collect();
        model.add_constraint(Bounds::exactly(p as f64), cardinality)?;

        debug!(
            component = "radius",
            operation = "build",
            status = "success",
            nodes = n,
            p,
            maxk,
            variables = model.num_variables(),
            constraints = model.num_constraints(),
            "Built radius model"
        );

        Ok(Self { y, z, kmax })
    }

    /// Depot variables, one per node in node order.
    pub fn depots(&self) -> &[VariableId] {
        &self.y
    }

    /// Highest materialized coverage level of a node.
    pub fn level(&self, node: usize) -> usize {
        self.kmax[node]
    }

    /// The coverage variable at the node's highest materialized level,
    /// or `None` if no level is materialized yet.
    pub fn top_variable(&self, node: usize) -> Option<VariableId> {
        self.z[node].last().copied()
    }

    /// Materialize the next coverage level of `node`: one variable
    /// with its marginal-distance coefficient and one coverage
    /// constraint at the new threshold.
    ///
    /// # Errors
    ///
    /// `LevelsExhausted` if every distance level of the node is
    /// already materialized.
    pub fn extend(
        &mut self,
        model: &mut Model,
        index: &DistanceIndex,
        graph: &Graph,
        node: usize,
    ) -> Result<(), PMedianError> {
        let next = self.kmax[node] + 1;
        if next >= index.num_levels(node) {
            return Err(PMedianError::LevelsExhausted { node });
        }

        let increment = index.distance(node, next) - index.distance(node, next - 1);
        let z_var = model.add_variable(Variable::continuous(Bounds::new(0.0, 1.0), increment))?;
        model.add_constraint(
            Bounds::at_least(1.0),
            coverage_terms(graph, &self.y, Some(z_var), node, index.distance(node, next)),
        )?;

        self.z[node].push(z_var);
        self.kmax[node] = next;
        Ok(())
    }

    /// Move every depot variable into the continuous domain.
    pub fn relax_depots(&self, model: &mut Model) -> Result<(), PMedianError> {
        for &var in &self.y {
            model.set_continuous(var)?;
        }
        Ok(())
    }

    /// Restore the binary domain on every depot variable.
    pub fn restore_depots(&self, model: &mut Model) -> Result<(), PMedianError> {
        for &var in &self.y {
            model.set_integer(var)?;
        }
        Ok(())
    }
}

/// Left-hand side of a coverage row at `threshold`: the optional
/// coverage variable plus every depot strictly closer than the
/// threshold. `dist(i, i) = 0`, so the node's own depot variable is
/// included whenever the threshold is positive.
pub(crate) fn coverage_terms(
    graph: &Graph,
    y: &[VariableId],
    z_var: Option<VariableId>,
    node: usize,
    threshold: f64,
) -> Vec<(VariableId, f64)> {
    let mut terms = Vec::new();
    if let Some(z) = z_var {
        terms.push((z, 1.0));
    }
    for j in graph.nodes() {
        if graph.distance(node, j) < threshold {
            terms.push((y[j], 1.0));
        }
    }
    terms
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_graph() -> Graph {
        Graph::from_points(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)])
    }

    #[test]
    fn full_model_counts() {
        let graph = line_graph();
        let index = DistanceIndex::build(&graph);
        let mut model = Model::new();
        let radius = RadiusModel::build(&mut model, &index, &graph, 1, 2).unwrap();

        // Ladders: node 0 and 2 have [0, 1, 2], node 1 has [0, 1],
        // so 2 + 1 + 2 coverage variables on top of 3 depot variables.
        assert_eq!(model.num_variables(), 8);
        // One coverage row per z variable plus the cardinality row.
        assert_eq!(model.num_constraints(), 6);
        assert_eq!(radius.level(0), 2);
        assert_eq!(radius.level(1), 1);
    }

    #[test]
    fn truncated_horizon() {
        let graph = line_graph();
        let index = DistanceIndex::build(&graph);
        let mut model = Model::new();
        let radius = RadiusModel::build(&mut model, &index, &graph, 1, 1).unwrap();

        for i in graph.nodes() {
            assert_eq!(radius.level(i), 1);
        }
        assert_eq!(model.num_variables(), 6);
    }

    #[test]
    fn rejects_out_of_range_p() {
        let graph = line_graph();
        let index = DistanceIndex::build(&graph);
        let mut model = Model::new();

        let err = RadiusModel::build(&mut model, &index, &graph, 0, 1).unwrap_err();
        assert_eq!(err.code(), "PARAM_INVALID");

        let err = RadiusModel::build(&mut model, &index, &graph, 4, 1).unwrap_err();
        assert_eq!(err.code(), "PARAM_INVALID");
    }

    #[test]
    fn rejects_out_of_range_maxk() {
        let graph = line_graph();
        let index = DistanceIndex::build(&graph);
        let mut model = Model::new();

        let err = RadiusModel::build(&mut model, &index, &graph, 1, 3).unwrap_err();
        assert_eq!(err.code(), "PARAM_INVALID");
    }

    #[test]
    fn extend_materializes_one_level() {
        let graph = line_graph();
        let index = DistanceIndex::build(&graph);
        let mut model = Model::new();
        let mut radius = RadiusModel::build(&mut model, &index, &graph, 1, 1).unwrap();

        let vars_before = model.num_variables();
        let rows_before = model.num_constraints();
        radius.extend(&mut model, &index, &graph, 0).unwrap();

        assert_eq!(radius.level(0), 2);
        assert_eq!(model.num_variables(), vars_before + 1);
        assert_eq!(model.num_constraints(), rows_before + 1);

        // Node 0 is now at its last level; extending again must fail.
        let err = radius.extend(&mut model, &index, &graph, 0).unwrap_err();
        assert!(matches!(err, PMedianError::LevelsExhausted { node: 0 }));
    }

    #[test]
    fn coverage_row_includes_self_for_positive_threshold() {
        let graph = line_graph();
        let y: Vec<VariableId> = (0..3).map(|i| VariableId::new(i as u32)).collect();
        let terms = coverage_terms(&graph, &y, None, 0, 1.0);
        // Only node 0 itself lies strictly within distance 1 of node 0.
        assert_eq!(terms, vec![(y[0], 1.0)]);

        let terms = coverage_terms(&graph, &y, None, 0, 2.0);
        assert_eq!(terms.len(), 2);
    }

    #[test]
    fn depot_domain_roundtrip() {
        let graph = line_graph();
        let index = DistanceIndex::build(&graph);
        let mut model = Model::new();
        let radius = RadiusModel::build(&mut model, &index, &graph, 1, 1).unwrap();

        radius.relax_depots(&mut model).unwrap();
        assert!(!model.has_integer_variables());

        radius.restore_depots(&mut model).unwrap();
        for &var in radius.depots() {
            assert!(model.get_variable(var).unwrap().is_integer);
        }
    }
}
