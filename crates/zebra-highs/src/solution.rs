//! Solution type returned by a successful solve.

use crate::status::SolverStatus;
use zebra_model::VariableId;

/// Solution of an optimal solve.
///
/// Primal values are indexed by variable handle order, which matches
/// the column order the backend created them in.
#[derive(Debug, Clone)]
pub struct Solution {
    pub(crate) primal_values: Vec<f64>,
    pub(crate) objective_value: f64,
    pub(crate) status: SolverStatus,
    pub(crate) solve_time_seconds: f64,
}

impl Solution {
    /// Get the solved value of a variable.
    pub fn value(&self, id: VariableId) -> Option<f64> {
        self.primal_values.get(id.inner() as usize).copied()
    }

    /// Get all primal values in variable handle order.
    pub fn primal_values(&self) -> &[f64] {
        &self.primal_values
    }

    /// Get the objective value.
    pub fn objective_value(&self) -> f64 {
        self.objective_value
    }

    /// Get the terminal status.
    pub fn status(&self) -> SolverStatus {
        self.status
    }

    /// Check if the solution is optimal.
    pub fn is_optimal(&self) -> bool {
        self.status.is_optimal()
    }

    /// Get the solve time in seconds.
    pub fn solve_time_seconds(&self) -> f64 {
        self.solve_time_seconds
    }
}
