//! Solver port for linear programs.
//!
//! The optimizer treats the LP solver as a black box behind [`Solver`]. Any
//! backend that handles continuous bounded variables with equality and
//! inequality constraints satisfies the contract. [`GoodLpSolver`] is the
//! default implementation.

mod backend;

pub use backend::GoodLpSolver;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::LinearModel;

/// A linear programming solver.
///
/// Implementations must be reentrant: each call receives its own model and
/// must not keep per-solve state, so concurrent requests can share a solver.
pub trait Solver: Send + Sync {
    /// Solver name for logging.
    fn name(&self) -> &'static str;

    /// Solves `model` in a single synchronous call.
    ///
    /// Infeasible and unbounded programs are reported through
    /// [`SolverResponse::status`]; `Err` is reserved for backend faults.
    fn solve(&self, model: &LinearModel) -> Result<SolverResponse, SolverError>;
}

/// Terminal status of a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolveStatus {
    /// An optimal solution was found.
    Optimal,
    /// No assignment satisfies all constraints.
    Infeasible,
    /// The objective can be improved without limit.
    Unbounded,
}

/// What a solver returns for a model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverResponse {
    /// Terminal status.
    pub status: SolveStatus,
    /// Objective value; meaningful only when optimal.
    pub objective_value: f64,
    /// One value per model variable, in model order; empty unless optimal.
    pub values: Vec<f64>,
}

impl SolverResponse {
    /// An optimal response.
    #[must_use]
    pub fn optimal(objective_value: f64, values: Vec<f64>) -> Self {
        Self {
            status: SolveStatus::Optimal,
            objective_value,
            values,
        }
    }

    /// An infeasible response.
    #[must_use]
    pub fn infeasible() -> Self {
        Self {
            status: SolveStatus::Infeasible,
            objective_value: 0.0,
            values: Vec::new(),
        }
    }

    /// An unbounded response.
    #[must_use]
    pub fn unbounded() -> Self {
        Self {
            status: SolveStatus::Unbounded,
            objective_value: 0.0,
            values: Vec::new(),
        }
    }
}

/// Backend faults that prevent a definitive status.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// The backend reported an error other than infeasible or unbounded.
    #[error("{solver} backend error: {reason}")]
    Backend {
        /// Backend name.
        solver: &'static str,
        /// Backend-provided description.
        reason: String,
    },
}

impl SolverError {
    /// Create a backend error.
    #[must_use]
    pub fn backend(solver: &'static str, reason: impl Into<String>) -> Self {
        Self::Backend {
            solver,
            reason: reason.into(),
        }
    }
}
