//! Column generation over the truncated radius model.
//!
//! Starting from a truncated horizon, the loop alternates between
//! solving the LP relaxation and extending the nodes that are pressing
//! against their horizon. A node is *saturated* when the coverage
//! variable at its highest materialized level is active beyond a small
//! tolerance: the relaxation wants a tighter threshold than the model
//! can currently represent. Extending exactly those nodes by one level
//! can only lower the objective or keep it equal, and distance ladders
//! are finite and strictly increasing, so the loop reaches a fixed
//! point in at most n·(n−1) extensions; in practice far fewer, which
//! is the whole point of not materializing the O(n²) model upfront.

use crate::distance::DistanceIndex;
use crate::error::PMedianError;
use crate::graph::Graph;
use crate::radius::RadiusModel;
use tracing::debug;
use zebra_highs::{Solution, SolverConfig};
use zebra_model::Model;

/// A coverage variable above this value is treated as active.
pub(crate) const SATURATION_TOLERANCE: f64 = 1e-6;

/// Defensive cap on solve/extend iterations; reaching it means a
/// tolerance misconfiguration or an incomplete distance table.
const ITERATION_CAP: usize = 100_000;

/// Run the column-generation loop until no node is saturated.
///
/// Must be called with depot variables already relaxed to the
/// continuous domain. On convergence the relaxation's optimum equals
/// the full formulation's, and the returned vector is the saturated
/// set from the final extending iteration (empty if the seed model was
/// already sufficient) for the finalizer to close.
///
/// # Errors
///
/// `Solver` on any non-optimal LP status, `ConvergenceFailure` if the
/// iteration cap is reached.
pub fn generate(
    model: &mut Model,
    radius: &mut RadiusModel,
    index: &DistanceIndex,
    graph: &Graph,
    config: &SolverConfig,
) -> Result<Vec<usize>, PMedianError> {
    let mut last_saturated: Vec<usize> = Vec::new();

    for iteration in 0..ITERATION_CAP {
        let solution = zebra_highs::solve(model, config)?;

        let saturated: Vec<usize> = graph
            .nodes()
            .filter(|&i| is_saturated(radius, index, &solution, i))
            .collect();

        if saturated.is_empty() {
            debug!(
                component = "colgen",
                operation = "generate",
                status = "success",
                iterations = iteration,
                objective = solution.objective_value(),
                variables = model.num_variables(),
                "Column generation converged"
            );
            return Ok(last_saturated);
        }

        for &node in &saturated {
            radius.extend(model, index, graph, node)?;
        }

        debug!(
            component = "colgen",
            operation = "extend",
            status = "success",
            iteration,
            extended = saturated.len(),
            objective = solution.objective_value(),
            "Extended saturated nodes by one level"
        );

        last_saturated = saturated;
    }

    Err(PMedianError::ConvergenceFailure {
        iterations: ITERATION_CAP,
    })
}

/// A node is saturated when it still has a distance level left to
/// materialize and its highest materialized coverage variable is
/// active. A `maxk = 0` seed has no coverage variable yet; any node
/// with levels remaining counts as saturated then. A node whose full
/// ladder is materialized is exact as-is, so a positive top variable
/// there (its nearest depot sits at its maximum distance) is a
/// legitimate cost, not a truncation artifact.
fn is_saturated(
    radius: &RadiusModel,
    index: &DistanceIndex,
    solution: &Solution,
    node: usize,
) -> bool {
    if radius.level(node) + 1 >= index.num_levels(node) {
        return false;
    }
    match radius.top_variable(node) {
        Some(z_var) => solution
            .value(z_var)
            .is_some_and(|value| value > SATURATION_TOLERANCE),
        None => true,
    }
}
