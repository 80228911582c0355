//! Entry points: the lazy zebra path and the full one-shot path.

use crate::colgen;
use crate::distance::DistanceIndex;
use crate::error::PMedianError;
use crate::graph::Graph;
use crate::radius::{coverage_terms, RadiusModel};
use tracing::debug;
use zebra_highs::{Solution, SolverConfig};
use zebra_model::{Bounds, Model};

/// A depot variable above this value is read as selected; rounding
/// tolerance absorbs solver noise on binary variables.
const SELECTION_TOLERANCE: f64 = 1e-2;

/// Result of a p-median solve.
#[derive(Debug, Clone, PartialEq)]
pub struct PMedianSolution {
    /// Selected depot nodes, in node-index order.
    pub depots: Vec<usize>,
    /// Total distance from every node to its nearest depot.
    pub objective: f64,
}

/// Solve the p-median problem with the zebra procedure: seed the
/// radius model with `maxk` levels per node (`None` materializes every
/// level, mirroring the full model), converge the LP relaxation by
/// column generation, close the horizon, and re-solve as a MIP.
///
/// # Errors
///
/// `InvalidParameter` for out-of-range `p` or `maxk`; `Solver` for a
/// non-optimal status on any solve; `LevelsExhausted` or
/// `ConvergenceFailure` from the column-generation loop.
pub fn solve_zebra(
    graph: &Graph,
    p: usize,
    maxk: Option<usize>,
    config: &SolverConfig,
) -> Result<PMedianSolution, PMedianError> {
    let n = graph.num_nodes();
    let maxk = maxk.unwrap_or(n.saturating_sub(1));

    let index = DistanceIndex::build(graph);
    let mut model = Model::new();
    let mut radius = RadiusModel::build(&mut model, &index, graph, p, maxk)?;

    radius.relax_depots(&mut model)?;
    let last_saturated = colgen::generate(&mut model, &mut radius, &index, graph, config)?;

    // Close the horizon for the nodes extended last: enforce coverage
    // at the next distance level without adding another coverage
    // variable, so the integer resolve cannot exploit the truncation.
    let mut closed = 0usize;
    for &node in &last_saturated {
        let next = radius.level(node) + 1;
        if next < index.num_levels(node) {
            model.add_constraint(
                Bounds::at_least(1.0),
                coverage_terms(graph, radius.depots(), None, node, index.distance(node, next)),
            )?;
            closed += 1;
        }
        // A node already at the top of its ladder is covered at every
        // depot placement; no closing constraint is needed.
    }

    radius.restore_depots(&mut model)?;
    let solution = zebra_highs::solve(&model, config)?;

    debug!(
        component = "solve",
        operation = "zebra",
        status = "success",
        nodes = n,
        p,
        closed,
        objective = solution.objective_value(),
        "Zebra solve completed"
    );

    Ok(extract(&solution, &radius))
}

/// Solve the p-median problem with the full radius model: every
/// distance level materialized for every node, one MIP solve, no
/// column generation. Ground-truth path for the lazy one.
pub fn solve_full(
    graph: &Graph,
    p: usize,
    config: &SolverConfig,
) -> Result<PMedianSolution, PMedianError> {
    let n = graph.num_nodes();
    let index = DistanceIndex::build(graph);
    let mut model = Model::new();
    let radius = RadiusModel::build(&mut model, &index, graph, p, n.saturating_sub(1))?;

    let solution = zebra_highs::solve(&model, config)?;

    debug!(
        component = "solve",
        operation = "full",
        status = "success",
        nodes = n,
        p,
        objective = solution.objective_value(),
        "Full MIP solve completed"
    );

    Ok(extract(&solution, &radius))
}

fn extract(solution: &Solution, radius: &RadiusModel) -> PMedianSolution {
    let depots = radius
        .depots()
        .iter()
        .enumerate()
        .filter(|&(_, &var)| {
            solution
                .value(var)
                .is_some_and(|value| value > SELECTION_TOLERANCE)
        })
        .map(|(node, _)| node)
        .collect();

    PMedianSolution {
        depots,
        objective: solution.objective_value(),
    }
}
