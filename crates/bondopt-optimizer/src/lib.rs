//! # Bondopt Optimizer
//!
//! Constrained portfolio-weight optimization for corporate bond universes.
//!
//! Given candidate bonds split into industrial, financial and utility buckets,
//! the optimizer finds the weights that maximize the portfolio's OAS or YTM
//! subject to:
//!
//! - a full-investment cap: `Σ w <= 1`
//! - an exact duration target: `Σ w·duration = target`
//! - a per-security cap: `0 <= w <= security_bound`
//! - per-sector caps: `Σ_{sector} w <= sector_bound`
//!
//! It then produces ordered per-sector holding tables and the residual cash
//! weight.
//!
//! ## Pipeline
//!
//! 1. [`build_allocation_model`]: bonds + parameters → immutable [`LinearModel`]
//! 2. [`Solver::solve`]: model → [`SolverResponse`]
//! 3. [`extract`]: response → [`OptimizationResult`]
//! 4. [`aggregate`]: weights → [`PortfolioAllocation`]
//!
//! [`optimize`] runs all four steps with the default [`GoodLpSolver`].
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bondopt_core::prelude::*;
//! use bondopt_optimizer::{optimize, Optimization};
//!
//! let bonds = SectorBonds::new(industrials, financials, utilities);
//! let params = OptimizationParameters::default().with_duration_target(4.5);
//!
//! match optimize(&bonds, &params)? {
//!     Optimization::Optimal(allocation) => println!("cash: {}", allocation.cash_weight),
//!     Optimization::Infeasible => println!("no feasible allocation"),
//! }
//! ```
//!
//! ## Outcomes
//!
//! Infeasibility is an ordinary result ([`Optimization::Infeasible`]). Errors
//! ([`OptimizerError`]) mean the request was rejected or the solver failed.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod aggregate;
pub mod builder;
pub mod error;
pub mod extract;
pub mod model;
pub mod optimize;
pub mod solver;

pub use aggregate::{
    aggregate, AllocationRow, PortfolioAllocation, SectorAllocation, TableRow, TOTAL_ROW_LABEL,
};
pub use builder::{
    build_allocation_model, sector_constraint_name, DURATION_CONSTRAINT, TOTAL_WEIGHT_CONSTRAINT,
};
pub use error::{OptimizerError, OptimizerResult};
pub use extract::{extract, OptimalSolution, OptimizationResult, WeightAssignment};
pub use model::{
    LinearConstraint, LinearModel, LinearModelBuilder, ObjectiveSense, Relation, Variable,
    VariableId,
};
pub use optimize::{optimize, optimize_with, solve_with, Optimization};
pub use solver::{GoodLpSolver, SolveStatus, Solver, SolverError, SolverResponse};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::aggregate::{PortfolioAllocation, SectorAllocation, TableRow};
    pub use crate::error::{OptimizerError, OptimizerResult};
    pub use crate::optimize::{optimize, optimize_with, Optimization};
    pub use crate::solver::{GoodLpSolver, Solver};
    pub use bondopt_core::prelude::*;
}
