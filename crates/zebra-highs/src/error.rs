//! Solver error types.

use crate::status::SolverStatus;

/// Error type for solve operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// Model has no variables.
    EmptyModel,
    /// Solver returned a non-optimal terminal status.
    SolveFailure {
        /// The solver status that caused the failure.
        status: SolverStatus,
    },
}

impl SolverError {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            SolverError::EmptyModel => "MODEL_EMPTY",
            SolverError::SolveFailure { status } => match status {
                SolverStatus::Infeasible => "SOLVER_INFEASIBLE",
                SolverStatus::Unbounded => "SOLVER_UNBOUNDED",
                SolverStatus::ReachedTimeLimit => "SOLVER_TIME_LIMIT",
                SolverStatus::ReachedIterationLimit => "SOLVER_ITERATION_LIMIT",
                _ => "SOLVER_INTERNAL",
            },
        }
    }
}

impl std::fmt::Display for SolverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverError::EmptyModel => write!(f, "[{}] Model has no variables", self.code()),
            SolverError::SolveFailure { status } => write!(
                f,
                "[{}] Solver returned non-optimal status: {}",
                self.code(),
                status
            ),
        }
    }
}

impl std::error::Error for SolverError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_empty_model() {
        let err = SolverError::EmptyModel;
        let msg = format!("{}", err);
        assert!(msg.contains("MODEL_EMPTY"));
        assert!(msg.contains("no variables"));
    }

    #[test]
    fn error_display_solve_failure_infeasible() {
        let err = SolverError::SolveFailure {
            status: SolverStatus::Infeasible,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("SOLVER_INFEASIBLE"));
        assert!(msg.contains("infeasible"));
    }

    #[test]
    fn error_codes() {
        assert_eq!(SolverError::EmptyModel.code(), "MODEL_EMPTY");
        assert_eq!(
            SolverError::SolveFailure {
                status: SolverStatus::Unbounded
            }
            .code(),
            "SOLVER_UNBOUNDED"
        );
        assert_eq!(
            SolverError::SolveFailure {
                status: SolverStatus::ReachedTimeLimit
            }
            .code(),
            "SOLVER_TIME_LIMIT"
        );
        assert_eq!(
            SolverError::SolveFailure {
                status: SolverStatus::Unknown
            }
            .code(),
            "SOLVER_INTERNAL"
        );
    }
}
