//! Interpretation of solver responses.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::LinearModel;
use crate::solver::{SolveStatus, SolverResponse};

/// Weight assigned to one bond.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightAssignment {
    /// Bond CUSIP.
    pub cusip: String,
    /// Portfolio weight as a fraction.
    pub weight: f64,
}

/// Objective value and per-bond weights of an optimal solve.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptimalSolution {
    /// Value of the maximized metric.
    pub objective_value: f64,
    /// Weight per CUSIP, one entry per model variable.
    pub weights: BTreeMap<String, f64>,
}

impl OptimalSolution {
    /// Weight of a bond, or 0 if it was not part of the model.
    #[must_use]
    pub fn weight(&self, cusip: &str) -> f64 {
        self.weights.get(cusip).copied().unwrap_or(0.0)
    }

    /// Sum of all weights.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.weights.values().fold(0.0, |acc, w| acc + w)
    }

    /// Iterates the weights as assignments, ordered by CUSIP.
    pub fn assignments(&self) -> impl Iterator<Item = WeightAssignment> + '_ {
        self.weights.iter().map(|(cusip, &weight)| WeightAssignment {
            cusip: cusip.clone(),
            weight,
        })
    }
}

/// Outcome of a solve as seen by the allocation domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OptimizationResult {
    /// The constraints admit a solution; this is the best one found.
    Optimal(OptimalSolution),
    /// No weighting satisfies every constraint.
    Infeasible,
}

impl OptimizationResult {
    /// Returns true for the optimal variant.
    #[must_use]
    pub fn is_optimal(&self) -> bool {
        matches!(self, Self::Optimal(_))
    }

    /// Returns the solution if optimal.
    #[must_use]
    pub fn solution(&self) -> Option<&OptimalSolution> {
        match self {
            Self::Optimal(solution) => Some(solution),
            Self::Infeasible => None,
        }
    }
}

/// Maps a solver response onto the model's variables.
///
/// Unbounded collapses into [`OptimizationResult::Infeasible`]; it cannot
/// arise for allocation models (every weight is capped) but must never pass
/// as a success. Optimal values are copied verbatim, paired with the variable
/// names in model order.
#[must_use]
pub fn extract(model: &LinearModel, response: SolverResponse) -> OptimizationResult {
    match response.status {
        SolveStatus::Infeasible | SolveStatus::Unbounded => OptimizationResult::Infeasible,
        SolveStatus::Optimal => {
            let weights = model
                .variables()
                .iter()
                .zip(response.values)
                .map(|(variable, value)| (variable.name.clone(), value))
                .collect();
            OptimizationResult::Optimal(OptimalSolution {
                objective_value: response.objective_value,
                weights,
            })
        }
    }
}
