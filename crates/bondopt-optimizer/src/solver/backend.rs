//! `good_lp` backed solver.

use std::time::Instant;

use good_lp::{
    default_solver, variable, variables, Expression, ResolutionError, Solution, SolverModel,
    Variable,
};
use tracing::debug;

use super::{Solver, SolverError, SolverResponse};
use crate::model::{LinearModel, ObjectiveSense, Relation};

/// Tolerance for evaluating constraints that have no variable terms.
const CONSTANT_TOLERANCE: f64 = 1e-9;

/// Solver built on the `good_lp` modelling layer and its default
/// (pure-Rust `microlp`) engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoodLpSolver;

impl GoodLpSolver {
    /// Creates the solver.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Solver for GoodLpSolver {
    fn name(&self) -> &'static str {
        "microlp"
    }

    fn solve(&self, model: &LinearModel) -> Result<SolverResponse, SolverError> {
        // Nothing to allocate: the empty portfolio is the answer.
        if model.is_empty() {
            return Ok(SolverResponse::optimal(0.0, Vec::new()));
        }

        // Constant rows never reach the backend; a violated one settles the solve.
        for constraint in model.constraints().iter().filter(|c| c.is_constant()) {
            if !constraint
                .relation
                .holds(0.0, constraint.rhs, CONSTANT_TOLERANCE)
            {
                debug!(
                    constraint = %constraint.name,
                    rhs = constraint.rhs,
                    "constant constraint violated"
                );
                return Ok(SolverResponse::infeasible());
            }
        }

        let mut vars = variables!();
        let handles: Vec<Variable> = model
            .variables()
            .iter()
            .map(|v| vars.add(variable().min(v.lower).max(v.upper)))
            .collect();

        let mut objective = Expression::with_capacity(handles.len());
        for (&coefficient, &handle) in model.objective().iter().zip(&handles) {
            objective.add_mul(coefficient, handle);
        }

        let unsolved = match model.sense() {
            ObjectiveSense::Maximize => vars.maximise(objective),
            ObjectiveSense::Minimize => vars.minimise(objective),
        };
        let mut problem = unsolved.using(default_solver);

        for constraint in model.constraints().iter().filter(|c| !c.is_constant()) {
            let mut lhs = Expression::with_capacity(constraint.terms.len());
            for &(id, coefficient) in &constraint.terms {
                lhs.add_mul(coefficient, handles[id.index()]);
            }
            problem = problem.with(match constraint.relation {
                Relation::LessEq => lhs.leq(constraint.rhs),
                Relation::Equal => lhs.eq(constraint.rhs),
                Relation::GreaterEq => lhs.geq(constraint.rhs),
            });
        }

        let started = Instant::now();
        let outcome = problem.solve();
        debug!(
            solver = self.name(),
            variables = handles.len(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "solve finished"
        );

        match outcome {
            Ok(solution) => {
                let values: Vec<f64> = handles.iter().map(|&h| solution.value(h)).collect();
                let objective_value = model.objective_value(&values);
                Ok(SolverResponse::optimal(objective_value, values))
            }
            Err(ResolutionError::Infeasible) => Ok(SolverResponse::infeasible()),
            Err(ResolutionError::Unbounded) => Ok(SolverResponse::unbounded()),
            Err(err) => Err(SolverError::backend(self.name(), err.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LinearConstraint, LinearModelBuilder};
    use crate::solver::SolveStatus;
    use approx::assert_relative_eq;

    #[test]
    fn test_empty_model_is_optimal_zero() {
        let model = LinearModelBuilder::new(ObjectiveSense::Maximize).build();
        let response = GoodLpSolver.solve(&model).unwrap();
        assert_eq!(response.status, SolveStatus::Optimal);
        assert_eq!(response.objective_value, 0.0);
        assert!(response.values.is_empty());
    }

    #[test]
    fn test_small_lp() {
        // max 3x + 2y  s.t.  x + y <= 4,  x + 3y = 6,  0 <= x, y <= 3
        let mut builder = LinearModelBuilder::new(ObjectiveSense::Maximize);
        let x = builder.add_variable("x", 0.0, 3.0, 3.0);
        let y = builder.add_variable("y", 0.0, 3.0, 2.0);
        builder.add_constraint(LinearConstraint::new(
            "cap",
            vec![(x, 1.0), (y, 1.0)],
            Relation::LessEq,
            4.0,
        ));
        builder.add_constraint(LinearConstraint::new(
            "mix",
            vec![(x, 1.0), (y, 3.0)],
            Relation::Equal,
            6.0,
        ));
        let model = builder.build();

        let response = GoodLpSolver.solve(&model).unwrap();
        assert_eq!(response.status, SolveStatus::Optimal);
        assert_relative_eq!(response.values[0], 3.0, epsilon = 1e-6);
        assert_relative_eq!(response.values[1], 1.0, epsilon = 1e-6);
        assert_relative_eq!(response.objective_value, 11.0, epsilon = 1e-6);
    }

    #[test]
    fn test_minimize_sense() {
        // min x + 2y  s.t.  x + y >= 1,  0 <= x, y <= 1
        let mut builder = LinearModelBuilder::new(ObjectiveSense::Minimize);
        let x = builder.add_variable("x", 0.0, 1.0, 1.0);
        let y = builder.add_variable("y", 0.0, 1.0, 2.0);
        builder.add_constraint(LinearConstraint::new(
            "floor",
            vec![(x, 1.0), (y, 1.0)],
            Relation::GreaterEq,
            1.0,
        ));
        let model = builder.build();
        assert_eq!(model.sense(), ObjectiveSense::Minimize);

        let response = GoodLpSolver.solve(&model).unwrap();
        assert_eq!(response.status, SolveStatus::Optimal);
        assert_relative_eq!(response.values[0], 1.0, epsilon = 1e-6);
        assert_relative_eq!(response.values[1], 0.0, epsilon = 1e-6);
        assert_relative_eq!(response.objective_value, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_infeasible_lp() {
        let mut builder = LinearModelBuilder::new(ObjectiveSense::Maximize);
        let x = builder.add_variable("x", 0.0, 1.0, 1.0);
        builder.add_constraint(LinearConstraint::new(
            "unreachable",
            vec![(x, 2.0)],
            Relation::Equal,
            5.0,
        ));
        let response = GoodLpSolver.solve(&builder.build()).unwrap();
        assert_eq!(response.status, SolveStatus::Infeasible);
    }

    #[test]
    fn test_violated_constant_constraint_is_infeasible() {
        let mut builder = LinearModelBuilder::new(ObjectiveSense::Maximize);
        builder.add_variable("x", 0.0, 1.0, 1.0);
        builder.add_constraint(LinearConstraint::new(
            "impossible",
            Vec::new(),
            Relation::Equal,
            4.0,
        ));
        let response = GoodLpSolver.solve(&builder.build()).unwrap();
        assert_eq!(response.status, SolveStatus::Infeasible);
    }

    #[test]
    fn test_satisfied_constant_constraint_is_skipped() {
        let mut builder = LinearModelBuilder::new(ObjectiveSense::Maximize);
        let x = builder.add_variable("x", 0.0, 0.5, 2.0);
        builder.add_constraint(LinearConstraint::new(
            "empty sector",
            Vec::new(),
            Relation::LessEq,
            0.3,
        ));
        builder.add_constraint(LinearConstraint::new(
            "cap",
            vec![(x, 1.0)],
            Relation::LessEq,
            1.0,
        ));
        let response = GoodLpSolver.solve(&builder.build()).unwrap();
        assert_eq!(response.status, SolveStatus::Optimal);
        assert_relative_eq!(response.values[0], 0.5, epsilon = 1e-6);
        assert_relative_eq!(response.objective_value, 1.0, epsilon = 1e-6);
    }
}
