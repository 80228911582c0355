//! Building blocks for model construction.

use crate::ids::VariableId;

/// Optimization sense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sense {
    #[default]
    Minimize,
    Maximize,
}

/// Lower and upper bounds for a variable or constraint row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub lower: f64,
    pub upper: f64,
}

impl Bounds {
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Bounds for `expr >= rhs`.
    pub fn at_least(rhs: f64) -> Self {
        Self::new(rhs, f64::INFINITY)
    }

    /// Bounds for `expr <= rhs`.
    pub fn at_most(rhs: f64) -> Self {
        Self::new(f64::NEG_INFINITY, rhs)
    }

    /// Bounds for `expr == rhs`.
    pub fn exactly(rhs: f64) -> Self {
        Self::new(rhs, rhs)
    }
}

/// A decision variable with bounds, an objective coefficient, and an
/// integrality flag that can be toggled after creation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variable {
    pub bounds: Bounds,
    pub objective: f64,
    pub is_integer: bool,
}

impl Variable {
    /// A binary variable with bounds [0, 1] and no objective weight.
    pub fn binary() -> Self {
        Self {
            bounds: Bounds::new(0.0, 1.0),
            objective: 0.0,
            is_integer: true,
        }
    }

    /// A continuous variable with the given bounds and objective
    /// coefficient.
    pub fn continuous(bounds: Bounds, objective: f64) -> Self {
        Self {
            bounds,
            objective,
            is_integer: false,
        }
    }
}

/// A linear constraint row: bounds on a linear combination of variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    pub bounds: Bounds,
    pub terms: Vec<(VariableId, f64)>,
}
