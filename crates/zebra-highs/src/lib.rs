//! HiGHS backend for the zebra p-median solver.
//!
//! Translates a [`zebra_model::Model`] session into a HiGHS problem and
//! solves it as an LP or MIP depending on the current variable domains:
//!
//! - [`solve`]: build, configure, and run one blocking solve
//! - [`SolverConfig`]: options forwarded to HiGHS
//! - [`SolverStatus`]: solver-agnostic terminal status
//! - [`Solution`]: primal values and objective of an optimal solve
//! - [`SolverError`]: error type for solve operations
//!
//! The model session is rebuilt into a fresh `RowProblem` on every call,
//! so incremental variable and constraint additions between solves need
//! no solver-side bookkeeping. Only an `Optimal` terminal status yields
//! a [`Solution`]; any other status is surfaced as
//! [`SolverError::SolveFailure`].

mod config;
mod error;
mod solution;
mod solve;
mod status;

pub use config::SolverConfig;
pub use error::SolverError;
pub use solution::Solution;
pub use solve::solve;
pub use status::SolverStatus;
