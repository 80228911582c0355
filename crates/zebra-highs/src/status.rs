//! Solver status types and HiGHS status mapping.

use highs::HighsModelStatus;

/// Terminal status of a solve, independent of the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolverStatus {
    /// Optimal solution found.
    Optimal,
    /// Problem is infeasible.
    Infeasible,
    /// Problem is unbounded.
    Unbounded,
    /// Solver reached its time limit.
    ReachedTimeLimit,
    /// Solver reached its iteration limit.
    ReachedIterationLimit,
    /// Status is unknown or solver did not complete.
    Unknown,
}

impl SolverStatus {
    /// Check if the status indicates an optimal solution.
    pub fn is_optimal(self) -> bool {
        matches!(self, SolverStatus::Optimal)
    }

    /// Check if the status indicates infeasibility.
    pub fn is_infeasible(self) -> bool {
        matches!(self, SolverStatus::Infeasible)
    }

    /// Check if the status indicates unboundedness.
    pub fn is_unbounded(self) -> bool {
        matches!(self, SolverStatus::Unbounded)
    }

    /// Get a human-readable string representation.
    pub fn as_str(self) -> &'static str {
        match self {
            SolverStatus::Optimal => "optimal",
            SolverStatus::Infeasible => "infeasible",
            SolverStatus::Unbounded => "unbounded",
            SolverStatus::ReachedTimeLimit => "time_limit",
            SolverStatus::ReachedIterationLimit => "iteration_limit",
            SolverStatus::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for SolverStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<HighsModelStatus> for SolverStatus {
    fn from(status: HighsModelStatus) -> Self {
        match status {
            HighsModelStatus::Optimal => SolverStatus::Optimal,
            HighsModelStatus::Infeasible => SolverStatus::Infeasible,
            HighsModelStatus::Unbounded => SolverStatus::Unbounded,
            HighsModelStatus::UnboundedOrInfeasible => SolverStatus::Unknown,
            HighsModelStatus::ReachedTimeLimit => SolverStatus::ReachedTimeLimit,
            HighsModelStatus::ReachedIterationLimit => SolverStatus::ReachedIterationLimit,
            _ => SolverStatus::Unknown,
        }
    }
}
