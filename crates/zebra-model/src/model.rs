//! The mutable model session.

use crate::error::ModelError;
use crate::ids::{ConstraintId, VariableId};
use crate::types::{Bounds, Constraint, Sense, Variable};

/// A lazy model builder for linear and mixed-integer programs.
///
/// Variables and constraints can be added at any time; constraints are
/// stored row-wise so the backend can rebuild the solver problem from
/// scratch on every solve. Whether a solve is an LP or a MIP is
/// determined by the current variable domains, which can be toggled
/// with [`Model::set_integer`] and [`Model::set_continuous`].
#[derive(Debug, Clone, Default)]
pub struct Model {
    variables: Vec<Variable>,
    constraints: Vec<Constraint>,
    sense: Sense,
}

impl Model {
    /// Create a new empty minimization model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the objective sense.
    pub fn sense(&self) -> Sense {
        self.sense
    }

    /// Set the objective sense.
    pub fn set_sense(&mut self, sense: Sense) {
        self.sense = sense;
    }

    /// Add a variable to the model.
    pub fn add_variable(&mut self, variable: Variable) -> Result<VariableId, ModelError> {
        if variable.bounds.lower.is_nan()
            || variable.bounds.upper.is_nan()
            || variable.bounds.lower > variable.bounds.upper
        {
            return Err(ModelError::InvalidVariableBounds {
                lower: variable.bounds.lower,
                upper: variable.bounds.upper,
            });
        }
        if !variable.objective.is_finite() {
            return Err(ModelError::InvalidCoefficient {
                coefficient: variable.objective,
            });
        }

        let id = VariableId::new(self.variables.len() as u32);
        self.variables.push(variable);
        Ok(id)
    }

    /// Add a batch of binary variables with no objective weight.
    pub fn add_binaries(&mut self, count: usize) -> Vec<VariableId> {
        let first = self.variables.len();
        self.variables
            .extend(std::iter::repeat(Variable::binary()).take(count));

        tracing::debug!(
            component = "model",
            operation = "add_binaries",
            status = "success",
            count,
            total_variables = self.variables.len(),
            "Added binary variable batch"
        );

        (first..first + count)
            .map(|index| VariableId::new(index as u32))
            .collect()
    }

    /// Add a constraint row over a linear combination of variables.
    pub fn add_constraint(
        &mut self,
        bounds: Bounds,
        terms: Vec<(VariableId, f64)>,
    ) -> Result<ConstraintId, ModelError> {
        if bounds.lower.is_nan() || bounds.upper.is_nan() || bounds.lower > bounds.upper {
            return Err(ModelError::InvalidConstraintBounds {
                lower: bounds.lower,
                upper: bounds.upper,
            });
        }
        for (var_id, coefficient) in &terms {
            self.ensure_variable_exists(*var_id)?;
            if !coefficient.is_finite() {
                return Err(ModelError::InvalidCoefficient {
                    coefficient: *coefficient,
                });
            }
        }

        let id = ConstraintId::new(self.constraints.len() as u32);
        self.constraints.push(Constraint { bounds, terms });
        Ok(id)
    }

    /// Move a variable into the integer domain without removing it.
    pub fn set_integer(&mut self, id: VariableId) -> Result<(), ModelError> {
        self.ensure_variable_exists(id)?;
        self.variables[id.index()].is_integer = true;
        Ok(())
    }

    /// Move a variable into the continuous domain without removing it.
    pub fn set_continuous(&mut self, id: VariableId) -> Result<(), ModelError> {
        self.ensure_variable_exists(id)?;
        self.variables[id.index()].is_integer = false;
        Ok(())
    }

    /// Get a variable by handle.
    pub fn get_variable(&self, id: VariableId) -> Result<&Variable, ModelError> {
        self.variables
            .get(id.index())
            .ok_or(ModelError::InvalidVariableId(id))
    }

    /// Number of variables in the model.
    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    /// Number of constraint rows in the model.
    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Iterate over all variables in handle order.
    pub fn variables(&self) -> impl Iterator<Item = &Variable> {
        self.variables.iter()
    }

    /// Iterate over all constraint rows in handle order.
    pub fn constraints(&self) -> impl Iterator<Item = &Constraint> {
        self.constraints.iter()
    }

    /// Whether any variable currently has an integer domain.
    pub fn has_integer_variables(&self) -> bool {
        self.variables.iter().any(|var| var.is_integer)
    }

    fn ensure_variable_exists(&self, id: VariableId) -> Result<(), ModelError> {
        if id.index() < self.variables.len() {
            Ok(())
        } else {
            Err(ModelError::InvalidVariableId(id))
        }
    }
}
