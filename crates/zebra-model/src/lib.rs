//! Model-building core for the zebra p-median solver.
//!
//! This crate provides the mutable model session that the solver
//! backend consumes:
//!
//! - [`Model`]: variables, row constraints, and objective sense
//! - [`VariableId`] / [`ConstraintId`]: opaque handles into a model
//! - [`Bounds`], [`Variable`], [`Constraint`], [`Sense`]: building blocks
//! - [`ModelError`]: error type for model operations
//!
//! A model is owned by exactly one solve operation at a time; variables
//! and constraints can be added at any point between solves, and
//! variable domains can be toggled between continuous and integer
//! without removing them from the model.

mod error;
mod ids;
mod model;
mod types;

pub use error::ModelError;
pub use ids::{ConstraintId, VariableId};
pub use model::Model;
pub use types::{Bounds, Constraint, Sense, Variable};
