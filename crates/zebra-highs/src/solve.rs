//! Translation of a model session into HiGHS and back.

use crate::config::SolverConfig;
use crate::error::SolverError;
use crate::solution::Solution;
use crate::status::SolverStatus;
use highs::{Col, RowProblem, Sense as HighsSense};
use std::time::Instant;
use tracing::{debug, warn};
use zebra_model::{Model, Sense};

/// Solve the model and return its optimal solution.
///
/// The model session is rebuilt into a fresh HiGHS problem: one column
/// per variable (with its current bounds, objective coefficient, and
/// integrality) and one row per constraint. The call blocks until the
/// solver reaches a terminal status.
///
/// # Errors
///
/// Returns [`SolverError::EmptyModel`] if the model has no variables,
/// and [`SolverError::SolveFailure`] for any non-optimal terminal
/// status. No partial result is returned on failure.
pub fn solve(model: &Model, config: &SolverConfig) -> Result<Solution, SolverError> {
    if model.num_variables() == 0 {
        return Err(SolverError::EmptyModel);
    }

    let started = Instant::now();
    debug!(
        component = "solver",
        operation = "solve",
        status = "started",
        solver = "highs",
        variables = model.num_variables(),
        constraints = model.num_constraints(),
        mip = model.has_integer_variables(),
        "Starting solve"
    );

    let mut problem = RowProblem::new();

    // Column order matches variable handle order, so primal values can
    // be looked up by VariableId afterwards.
    let cols: Vec<Col> = model
        .variables()
        .map(|var| {
            problem.add_column_with_integrality(
                var.objective,
                var.bounds.lower..=var.bounds.upper,
                var.is_integer,
            )
        })
        .collect();

    for constraint in model.constraints() {
        let terms: Vec<(Col, f64)> = constraint
            .terms
            .iter()
            .map(|&(var_id, coefficient)| (cols[var_id.inner() as usize], coefficient))
            .collect();

        let lower = constraint.bounds.lower;
        let upper = constraint.bounds.upper;
        match (lower.is_finite(), upper.is_finite()) {
            (true, true) => {
                problem.add_row(lower..=upper, terms);
            }
            (true, false) => {
                problem.add_row(lower.., terms);
            }
            (false, true) => {
                problem.add_row(..=upper, terms);
            }
            (false, false) => {
                problem.add_row(f64::NEG_INFINITY..=f64::INFINITY, terms);
            }
        }
    }

    let sense = match model.sense() {
        Sense::Minimize => HighsSense::Minimise,
        Sense::Maximize => HighsSense::Maximise,
    };
    let mut highs_model = problem.optimise(sense);
    apply_config(&mut highs_model, config);

    let solved = highs_model.solve();
    let status = SolverStatus::from(solved.status());
    let solve_time_seconds = started.elapsed().as_secs_f64();

    if !status.is_optimal() {
        warn!(
            component = "solver",
            operation = "solve",
            status = "warn",
            solver = "highs",
            solver_status = status.as_str(),
            duration_ms = solve_time_seconds * 1000.0,
            "Solver did not find an optimal solution"
        );
        return Err(SolverError::SolveFailure { status });
    }

    let highs_solution = solved.get_solution();
    let primal_values: Vec<f64> = cols.iter().map(|&col| highs_solution[col]).collect();
    let objective_value = solved.objective_value();

    debug!(
        component = "solver",
        operation = "solve",
        status = "success",
        solver = "highs",
        solver_status = status.as_str(),
        objective_value,
        duration_ms = solve_time_seconds * 1000.0,
        "Solve completed"
    );

    Ok(Solution {
        primal_values,
        objective_value,
        status,
        solve_time_seconds,
    })
}

fn apply_config(highs_model: &mut highs::Model, config: &SolverConfig) {
    highs_model.set_option("output_flag", config.log_to_console.unwrap_or(false));

    if let Some(limit) = config.time_limit {
        highs_model.set_option("time_limit", limit);
    }
    if let Some(gap) = config.mip_gap {
        highs_model.set_option("mip_rel_gap", gap);
    }
    if let Some(threads) = config.threads {
        highs_model.set_option("threads", threads as i32);
    }
    if let Some(tolerance) = config.tolerance {
        highs_model.set_option("primal_feasibility_tolerance", tolerance);
        highs_model.set_option("dual_feasibility_tolerance", tolerance);
    }
    if let Some(presolve) = config.presolve {
        highs_model.set_option("presolve", if presolve { "on" } else { "off" });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_model_is_rejected() {
        let model = Model::new();
        let result = solve(&model, &SolverConfig::new());
        assert_eq!(result.unwrap_err(), SolverError::EmptyModel);
    }
}
