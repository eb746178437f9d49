//! Allocation model construction.
//!
//! One weight variable per candidate bond, bounded by `[0, security_bound]`,
//! with the objective `max Σ w·metric` and these constraints:
//!
//! | Name | Form |
//! |------|------|
//! | [`TOTAL_WEIGHT_CONSTRAINT`] | `Σ w <= 1` |
//! | [`DURATION_CONSTRAINT`] | `Σ w·duration = duration_target` |
//! | `"<Sector> sector bound"` | `Σ_{sector} w <= sector_bound` |
//!
//! A sector without candidates still gets its cap, as the constant constraint
//! `0 <= sector_bound`.

use bondopt_core::{OptimizationParameters, Sector, SectorBonds};

use crate::error::OptimizerResult;
use crate::model::{LinearConstraint, LinearModel, LinearModelBuilder, ObjectiveSense, Relation};

/// Name of the full-investment constraint.
pub const TOTAL_WEIGHT_CONSTRAINT: &str = "Total weight bound";

/// Name of the portfolio duration constraint.
pub const DURATION_CONSTRAINT: &str = "Portfolio duration bound";

/// Name of the exposure cap for `sector`.
#[must_use]
pub fn sector_constraint_name(sector: Sector) -> String {
    format!("{} sector bound", sector.name())
}

/// Builds the allocation linear program for one request.
///
/// Variables are created industrial first, then financial, then utility, each
/// named by its bond's CUSIP. The inputs are only read.
///
/// # Errors
///
/// Returns [`OptimizerError::InvalidInput`](crate::OptimizerError::InvalidInput)
/// if a metric or duration value cannot be represented as a finite `f64`.
pub fn build_allocation_model(
    bonds: &SectorBonds,
    params: &OptimizationParameters,
) -> OptimizerResult<LinearModel> {
    let mut builder = LinearModelBuilder::with_capacity(ObjectiveSense::Maximize, bonds.len());

    let mut total_terms = Vec::with_capacity(bonds.len());
    let mut duration_terms = Vec::with_capacity(bonds.len());
    let mut sector_caps = Vec::with_capacity(Sector::all().len());

    for (sector, candidates) in bonds.iter() {
        let mut sector_terms = Vec::with_capacity(candidates.len());
        for bond in candidates {
            let metric = bond.metric_coefficient(params.metric)?;
            let duration = bond.duration_coefficient()?;

            let weight = builder.add_variable(&bond.cusip, 0.0, params.security_bound, metric);
            total_terms.push((weight, 1.0));
            duration_terms.push((weight, duration));
            sector_terms.push((weight, 1.0));
        }
        sector_caps.push(LinearConstraint::new(
            sector_constraint_name(sector),
            sector_terms,
            Relation::LessEq,
            params.sector_bound,
        ));
    }

    builder.add_constraint(LinearConstraint::new(
        TOTAL_WEIGHT_CONSTRAINT,
        total_terms,
        Relation::LessEq,
        1.0,
    ));
    builder.add_constraint(LinearConstraint::new(
        DURATION_CONSTRAINT,
        duration_terms,
        Relation::Equal,
        params.duration_target,
    ));
    for cap in sector_caps {
        builder.add_constraint(cap);
    }

    Ok(builder.build())
}
