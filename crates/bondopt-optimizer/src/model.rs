//! Solver-independent linear program representation.
//!
//! A [`LinearModel`] is assembled through a [`LinearModelBuilder`] and is
//! immutable once built: the builder is consumed by [`LinearModelBuilder::build`],
//! so a partially assembled model can never be handed to a solver.

use serde::{Deserialize, Serialize};

/// Index of a decision variable within its model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VariableId(usize);

impl VariableId {
    /// Position of the variable in [`LinearModel::variables`].
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A continuous decision variable with box bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    /// Name of the variable (the bond CUSIP for allocation models).
    pub name: String,
    /// Lower bound.
    pub lower: f64,
    /// Upper bound.
    pub upper: f64,
}

/// Direction of optimization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectiveSense {
    /// Maximize the objective.
    Maximize,
    /// Minimize the objective.
    Minimize,
}

/// Relation between a constraint's left-hand side and its right-hand side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Relation {
    /// `lhs <= rhs`
    LessEq,
    /// `lhs == rhs`
    Equal,
    /// `lhs >= rhs`
    GreaterEq,
}

impl Relation {
    /// Evaluates the relation for concrete values within `tolerance`.
    #[must_use]
    pub fn holds(self, lhs: f64, rhs: f64, tolerance: f64) -> bool {
        match self {
            Self::LessEq => lhs <= rhs + tolerance,
            Self::Equal => (lhs - rhs).abs() <= tolerance,
            Self::GreaterEq => lhs + tolerance >= rhs,
        }
    }
}

/// A named linear constraint `Σ coefficient·x ⋈ rhs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearConstraint {
    /// Constraint name.
    pub name: String,
    /// Non-zero terms as `(variable, coefficient)`.
    pub terms: Vec<(VariableId, f64)>,
    /// Relation to the right-hand side.
    pub relation: Relation,
    /// Right-hand side.
    pub rhs: f64,
}

impl LinearConstraint {
    /// Creates a constraint.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        terms: Vec<(VariableId, f64)>,
        relation: Relation,
        rhs: f64,
    ) -> Self {
        Self {
            name: name.into(),
            terms,
            relation,
            rhs,
        }
    }

    /// Returns true if the constraint has no variable terms, so its
    /// left-hand side is the constant 0.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        self.terms.is_empty()
    }

    /// Evaluates the left-hand side for a full assignment of variable values.
    #[must_use]
    pub fn lhs(&self, values: &[f64]) -> f64 {
        self.terms
            .iter()
            .map(|&(id, coefficient)| coefficient * values[id.index()])
            .sum()
    }
}

/// A complete linear program ready for a [`Solver`](crate::Solver).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    sense: ObjectiveSense,
    variables: Vec<Variable>,
    objective: Vec<f64>,
    constraints: Vec<LinearConstraint>,
}

impl LinearModel {
    /// Optimization direction.
    #[must_use]
    pub fn sense(&self) -> ObjectiveSense {
        self.sense
    }

    /// Decision variables in creation order.
    #[must_use]
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Objective coefficients, aligned with [`variables`](Self::variables).
    #[must_use]
    pub fn objective(&self) -> &[f64] {
        &self.objective
    }

    /// Constraints in creation order.
    #[must_use]
    pub fn constraints(&self) -> &[LinearConstraint] {
        &self.constraints
    }

    /// Looks up a constraint by name.
    #[must_use]
    pub fn constraint(&self, name: &str) -> Option<&LinearConstraint> {
        self.constraints.iter().find(|c| c.name == name)
    }

    /// Number of decision variables.
    #[must_use]
    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    /// Returns true if the model has no decision variables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Evaluates the objective for a full assignment of variable values.
    #[must_use]
    pub fn objective_value(&self, values: &[f64]) -> f64 {
        self.objective.iter().zip(values).map(|(c, v)| c * v).sum()
    }
}

/// Accumulates variables and constraints for a [`LinearModel`].
#[derive(Debug, Clone)]
pub struct LinearModelBuilder {
    sense: ObjectiveSense,
    variables: Vec<Variable>,
    objective: Vec<f64>,
    constraints: Vec<LinearConstraint>,
}

impl LinearModelBuilder {
    /// Starts an empty model.
    #[must_use]
    pub fn new(sense: ObjectiveSense) -> Self {
        Self {
            sense,
            variables: Vec::new(),
            objective: Vec::new(),
            constraints: Vec::new(),
        }
    }

    /// Starts an empty model with room for `variables` decision variables.
    #[must_use]
    pub fn with_capacity(sense: ObjectiveSense, variables: usize) -> Self {
        Self {
            sense,
            variables: Vec::with_capacity(variables),
            objective: Vec::with_capacity(variables),
            constraints: Vec::new(),
        }
    }

    /// Adds a bounded variable with its objective coefficient.
    pub fn add_variable(
        &mut self,
        name: impl Into<String>,
        lower: f64,
        upper: f64,
        objective_coefficient: f64,
    ) -> VariableId {
        let id = VariableId(self.variables.len());
        self.variables.push(Variable {
            name: name.into(),
            lower,
            upper,
        });
        self.objective.push(objective_coefficient);
        id
    }

    /// Adds a constraint over previously added variables.
    pub fn add_constraint(&mut self, constraint: LinearConstraint) {
        debug_assert!(
            constraint
                .terms
                .iter()
                .all(|(id, _)| id.index() < self.variables.len()),
            "constraint '{}' references an unknown variable",
            constraint.name
        );
        self.constraints.push(constraint);
    }

    /// Finishes the model.
    #[must_use]
    pub fn build(self) -> LinearModel {
        LinearModel {
            sense: self.sense,
            variables: self.variables,
            objective: self.objective,
            constraints: self.constraints,
        }
    }
}
