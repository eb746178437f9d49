//! Optimization entry points.

use bondopt_core::{OptimizationParameters, SectorBonds};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::aggregate::{aggregate, PortfolioAllocation};
use crate::builder::build_allocation_model;
use crate::error::OptimizerResult;
use crate::extract::{extract, OptimizationResult};
use crate::solver::{GoodLpSolver, Solver};

/// Outcome of an optimization request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Optimization {
    /// Optimal weights with their sector breakdown.
    Optimal(PortfolioAllocation),
    /// The constraints cannot all be met.
    Infeasible,
}

impl Optimization {
    /// Returns true for the optimal variant.
    #[must_use]
    pub fn is_optimal(&self) -> bool {
        matches!(self, Self::Optimal(_))
    }

    /// Returns true for the infeasible variant.
    #[must_use]
    pub fn is_infeasible(&self) -> bool {
        matches!(self, Self::Infeasible)
    }

    /// Returns the allocation if optimal.
    #[must_use]
    pub fn allocation(&self) -> Option<&PortfolioAllocation> {
        match self {
            Self::Optimal(allocation) => Some(allocation),
            Self::Infeasible => None,
        }
    }
}

/// Optimizes with the default [`GoodLpSolver`].
///
/// # Errors
///
/// - [`OptimizerError::InvalidInput`](crate::OptimizerError::InvalidInput) for
///   out-of-range parameters, duplicate CUSIPs or unusable bond values
/// - [`OptimizerError::SolverFailure`](crate::OptimizerError::SolverFailure)
///   when the backend cannot reach a definitive status
pub fn optimize(
    bonds: &SectorBonds,
    params: &OptimizationParameters,
) -> OptimizerResult<Optimization> {
    optimize_with(&GoodLpSolver, bonds, params)
}

/// Optimizes with a caller-supplied solver.
///
/// Runs model building, the solve, result extraction and sector aggregation
/// in sequence. Nothing is retained between calls.
pub fn optimize_with<S: Solver + ?Sized>(
    solver: &S,
    bonds: &SectorBonds,
    params: &OptimizationParameters,
) -> OptimizerResult<Optimization> {
    params.validate()?;
    bonds.validate()?;
    for hint in params.hint_warnings() {
        warn!("{hint}");
    }

    let result = solve_with(solver, bonds, params)?;

    match result {
        OptimizationResult::Infeasible => {
            info!(
                candidates = bonds.len(),
                duration_target = params.duration_target,
                "optimization infeasible"
            );
            Ok(Optimization::Infeasible)
        }
        OptimizationResult::Optimal(solution) => {
            let allocation = aggregate(&solution, bonds);
            info!(
                candidates = bonds.len(),
                holdings = allocation.holding_count(),
                objective = allocation.objective_value,
                cash_weight = allocation.cash_weight,
                "optimization complete"
            );
            Ok(Optimization::Optimal(allocation))
        }
    }
}

/// Builds and solves the model without aggregating, returning raw weights.
pub fn solve_with<S: Solver + ?Sized>(
    solver: &S,
    bonds: &SectorBonds,
    params: &OptimizationParameters,
) -> OptimizerResult<OptimizationResult> {
    let model = build_allocation_model(bonds, params)?;
    debug!(
        solver = solver.name(),
        variables = model.num_variables(),
        constraints = model.constraints().len(),
        metric = %params.metric,
        "allocation model built"
    );

    let response = solver.solve(&model)?;
    Ok(extract(&model, response))
}
