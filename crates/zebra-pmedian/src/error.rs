//! Error types for the p-median solve pipeline.

use zebra_highs::SolverError;
use zebra_model::ModelError;

/// Errors that can abort a p-median solve.
///
/// Any of these aborts the solve and propagates to the caller; there
/// is no partial or best-effort depot set on failure.
#[derive(Debug, Clone)]
pub enum PMedianError {
    /// A parameter is outside the valid range for the instance.
    /// Raised before any solver interaction.
    InvalidParameter {
        name: &'static str,
        value: usize,
        limit: usize,
    },
    /// A distance matrix entry violates the symmetric-complete-graph
    /// contract (square, symmetric, non-negative, zero diagonal).
    InvalidDistanceMatrix {
        row: usize,
        column: usize,
        reason: &'static str,
    },
    /// A model-building operation failed.
    Model(ModelError),
    /// The solver returned a non-optimal terminal status.
    Solver(SolverError),
    /// A saturated node has no further distance level to extend to.
    /// Indicates a modeling or tolerance bug, not a recoverable state.
    LevelsExhausted { node: usize },
    /// The column-generation loop exceeded its iteration cap.
    ConvergenceFailure { iterations: usize },
}

impl PMedianError {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            PMedianError::InvalidParameter { .. } => "PARAM_INVALID",
            PMedianError::InvalidDistanceMatrix { .. } => "GRAPH_INVALID_MATRIX",
            PMedianError::Model(_) => "MODEL_FAILURE",
            PMedianError::Solver(_) => "SOLVER_FAILURE",
            PMedianError::LevelsExhausted { .. } => "COLGEN_EXHAUSTED",
            PMedianError::ConvergenceFailure { .. } => "COLGEN_LIMIT",
        }
    }
}

impl std::fmt::Display for PMedianError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PMedianError::InvalidParameter { name, value, limit } => write!(
                f,
                "[{}] Parameter {} = {} is out of range (limit {})",
                self.code(),
                name,
                value,
                limit
            ),
            PMedianError::InvalidDistanceMatrix { row, column, reason } => write!(
                f,
                "[{}] Distance matrix entry ({}, {}) {}",
                self.code(),
                row,
                column,
                reason
            ),
            PMedianError::Model(err) => write!(f, "[{}] {}", self.code(), err),
            PMedianError::Solver(err) => write!(f, "[{}] {}", self.code(), err),
            PMedianError::LevelsExhausted { node } => write!(
                f,
                "[{}] Node {} is saturated but has no distance level left to extend",
                self.code(),
                node
            ),
            PMedianError::ConvergenceFailure { iterations } => write!(
                f,
                "[{}] Column generation did not converge within {} iterations",
                self.code(),
                iterations
            ),
        }
    }
}

impl std::error::Error for PMedianError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PMedianError::Model(err) => Some(err),
            PMedianError::Solver(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ModelError> for PMedianError {
    fn from(err: ModelError) -> Self {
        PMedianError::Model(err)
    }
}

impl From<SolverError> for PMedianError {
    fn from(err: SolverError) -> Self {
        PMedianError::Solver(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zebra_highs::SolverStatus;

    #[test]
    fn error_display_invalid_parameter() {
        let err = PMedianError::InvalidParameter {
            name: "maxk",
            value: 10,
            limit: 9,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("PARAM_INVALID"));
        assert!(msg.contains("maxk"));
        assert!(msg.contains("10"));
    }

    #[test]
    fn error_display_invalid_matrix() {
        let err = PMedianError::InvalidDistanceMatrix {
            row: 0,
            column: 1,
            reason: "differs from its transposed entry",
        };
        let msg = format!("{}", err);
        assert!(msg.contains("GRAPH_INVALID_MATRIX"));
        assert!(msg.contains("(0, 1)"));
    }

    #[test]
    fn error_display_exhausted() {
        let err = PMedianError::LevelsExhausted { node: 3 };
        let msg = format!("{}", err);
        assert!(msg.contains("COLGEN_EXHAUSTED"));
        assert!(msg.contains("Node 3"));
    }

    #[test]
    fn error_display_convergence() {
        let err = PMedianError::ConvergenceFailure { iterations: 100_000 };
        let msg = format!("{}", err);
        assert!(msg.contains("COLGEN_LIMIT"));
        assert!(msg.contains("100000"));
    }

    #[test]
    fn solver_error_is_wrapped_with_source() {
        use std::error::Error;

        let err = PMedianError::from(SolverError::SolveFailure {
            status: SolverStatus::Infeasible,
        });
        assert_eq!(err.code(), "SOLVER_FAILURE");
        assert!(err.source().is_some());
        assert!(format!("{}", err).contains("infeasible"));
    }
}
