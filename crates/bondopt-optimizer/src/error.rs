//! Error types for the optimizer.
//!
//! An infeasible constraint set is not an error: it is returned as
//! [`Optimization::Infeasible`](crate::Optimization::Infeasible). Errors are
//! reserved for rejected inputs and solver faults.

use bondopt_core::BondoptError;
use thiserror::Error;

use crate::solver::SolverError;

/// Result type for optimizer operations.
pub type OptimizerResult<T> = Result<T, OptimizerError>;

/// Errors that abort an optimization request.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OptimizerError {
    /// Parameters or bond records were rejected before model construction.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Why the input was rejected.
        reason: String,
    },

    /// The solver backend could not produce a definitive status.
    #[error("Solver failure: {reason}")]
    SolverFailure {
        /// Backend-provided description.
        reason: String,
    },
}

impl OptimizerError {
    /// Create an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Create a solver failure error.
    #[must_use]
    pub fn solver_failure(reason: impl Into<String>) -> Self {
        Self::SolverFailure {
            reason: reason.into(),
        }
    }

    /// Returns true for faults that may succeed on a retry.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::SolverFailure { .. })
    }
}

impl From<BondoptError> for OptimizerError {
    fn from(err: BondoptError) -> Self {
        Self::invalid_input(err.to_string())
    }
}

impl From<SolverError> for OptimizerError {
    fn from(err: SolverError) -> Self {
        Self::solver_failure(err.to_string())
    }
}
