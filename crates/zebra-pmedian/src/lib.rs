//! Lazy radius-formulation p-median solver.
//!
//! Selects exactly `p` depot nodes on a weighted complete graph so
//! that the total distance from every node to its nearest depot is
//! minimized. Instead of the classic per-pair assignment model, the
//! *radius formulation* gives each node a monotone chain of coverage
//! variables indexed by increasing candidate distance; the objective
//! telescopes to the distance from each node to its nearest depot.
//!
//! The zebra procedure avoids materializing all O(n²) coverage
//! variables up front:
//!
//! 1. build a partial model with only the first few distance levels
//!    per node ([`radius::RadiusModel`]);
//! 2. solve the LP relaxation and extend exactly the nodes that are
//!    pressing against their level horizon ([`colgen::generate`]);
//! 3. once no node is saturated, close the horizon, restore integer
//!    depot variables, and re-solve as a MIP ([`solve::solve_zebra`]).
//!
//! [`solve::solve_full`] builds the untruncated model and solves it in
//! one shot; it is the ground-truth path the lazy one is checked
//! against.

pub mod colgen;
pub mod distance;
pub mod error;
pub mod graph;
pub mod radius;
pub mod solve;

pub use distance::DistanceIndex;
pub use error::PMedianError;
pub use graph::{allocate, Graph};
pub use radius::RadiusModel;
pub use solve::{solve_full, solve_zebra, PMedianSolution};
