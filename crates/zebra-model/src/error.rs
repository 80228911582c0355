//! Model error types.

use crate::ids::VariableId;

/// Errors that can occur during model operations.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Invalid variable ID.
    InvalidVariableId(VariableId),
    /// Invalid variable bounds.
    InvalidVariableBounds { lower: f64, upper: f64 },
    /// Invalid constraint bounds.
    InvalidConstraintBounds { lower: f64, upper: f64 },
    /// Non-finite coefficient in an objective or constraint row.
    InvalidCoefficient { coefficient: f64 },
}

impl ModelError {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            ModelError::InvalidVariableId(_) => "VARIABLE_INVALID_ID",
            ModelError::InvalidVariableBounds { .. } => "VARIABLE_INVALID_BOUNDS",
            ModelError::InvalidConstraintBounds { .. } => "CONSTRAINT_INVALID_BOUNDS",
            ModelError::InvalidCoefficient { .. } => "COEFFICIENT_INVALID",
        }
    }
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::InvalidVariableId(id) => write!(
                f,
                "[{}] Variable ID {} does not exist",
                self.code(),
                id.inner()
            ),
            ModelError::InvalidVariableBounds { lower, upper } => write!(
                f,
                "[{}] Variable bounds invalid: lower ({}) > upper ({})",
                self.code(),
                lower,
                upper
            ),
            ModelError::InvalidConstraintBounds { lower, upper } => write!(
                f,
                "[{}] Constraint bounds invalid: lower ({}) > upper ({})",
                self.code(),
                lower,
                upper
            ),
            ModelError::InvalidCoefficient { coefficient } => write!(
                f,
                "[{}] Coefficient must be finite (got {})",
                self.code(),
                coefficient
            ),
        }
    }
}

impl std::error::Error for ModelError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_invalid_variable_id() {
        let err = ModelError::InvalidVariableId(VariableId::new(42));
        let msg = format!("{}", err);
        assert!(msg.contains("VARIABLE_INVALID_ID"));
        assert!(msg.contains("42"));
    }

    #[test]
    fn error_display_invalid_bounds() {
        let err = ModelError::InvalidVariableBounds {
            lower: 5.0,
            upper: 1.0,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("VARIABLE_INVALID_BOUNDS"));
        assert!(msg.contains("5"));
    }

    #[test]
    fn error_display_invalid_coefficient() {
        let err = ModelError::InvalidCoefficient {
            coefficient: f64::NAN,
        };
        assert!(format!("{}", err).contains("COEFFICIENT_INVALID"));
    }

    #[test]
    fn error_codes() {
        assert_eq!(
            ModelError::InvalidVariableId(VariableId::new(0)).code(),
            "VARIABLE_INVALID_ID"
        );
        assert_eq!(
            ModelError::InvalidConstraintBounds {
                lower: 1.0,
                upper: 0.0
            }
            .code(),
            "CONSTRAINT_INVALID_BOUNDS"
        );
    }
}
