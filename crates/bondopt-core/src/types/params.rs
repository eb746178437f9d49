//! Optimization request parameters.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::Metric;
use crate::error::{BondoptError, BondoptResult};

/// Duration targets offered by the selection controls.
pub const DURATION_TARGET_HINT: RangeInclusive<f64> = 3.0..=7.0;

/// Sector limits offered by the selection controls.
pub const SECTOR_BOUND_HINT: RangeInclusive<f64> = 0.20..=0.50;

/// Parameters of one optimization request.
///
/// Bounds are fractions of the portfolio (0.01 = 1%).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptimizationParameters {
    /// Maximum weight in any single bond, in (0, 1].
    pub security_bound: f64,

    /// Required portfolio effective duration.
    pub duration_target: f64,

    /// Maximum aggregate weight per sector, in (0, 1].
    pub sector_bound: f64,

    /// Metric to maximize.
    pub metric: Metric,
}

impl Default for OptimizationParameters {
    fn default() -> Self {
        Self {
            security_bound: 0.01,
            duration_target: 5.0,
            sector_bound: 0.35,
            metric: Metric::Oas,
        }
    }
}

impl OptimizationParameters {
    /// Creates parameters from explicit values.
    #[must_use]
    pub fn new(
        security_bound: f64,
        duration_target: f64,
        sector_bound: f64,
        metric: Metric,
    ) -> Self {
        Self {
            security_bound,
            duration_target,
            sector_bound,
            metric,
        }
    }

    /// Sets the per-security bound.
    #[must_use]
    pub fn with_security_bound(mut self, bound: f64) -> Self {
        self.security_bound = bound;
        self
    }

    /// Sets the duration target.
    #[must_use]
    pub fn with_duration_target(mut self, target: f64) -> Self {
        self.duration_target = target;
        self
    }

    /// Sets the per-sector bound.
    #[must_use]
    pub fn with_sector_bound(mut self, bound: f64) -> Self {
        self.sector_bound = bound;
        self
    }

    /// Sets the objective metric.
    #[must_use]
    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    /// Validates the hard ranges of each parameter.
    pub fn validate(&self) -> BondoptResult<()> {
        check_fraction("security_bound", self.security_bound)?;
        check_fraction("sector_bound", self.sector_bound)?;
        if !self.duration_target.is_finite() {
            return Err(BondoptError::invalid_parameter(
                "duration_target",
                self.duration_target,
                "must be finite",
            ));
        }
        Ok(())
    }

    /// Describes values that are valid but outside the ranges the selection
    /// controls offer.
    #[must_use]
    pub fn hint_warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if !DURATION_TARGET_HINT.contains(&self.duration_target) {
            warnings.push(format!(
                "duration target {} is outside the usual range [{}, {}]",
                self.duration_target,
                DURATION_TARGET_HINT.start(),
                DURATION_TARGET_HINT.end()
            ));
        }
        if !SECTOR_BOUND_HINT.contains(&self.sector_bound) {
            warnings.push(format!(
                "sector bound {} is outside the usual range [{}, {}]",
                self.sector_bound,
                SECTOR_BOUND_HINT.start(),
                SECTOR_BOUND_HINT.end()
            ));
        }
        warnings
    }
}

fn check_fraction(name: &str, value: f64) -> BondoptResult<()> {
    if value.is_finite() && value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(BondoptError::invalid_parameter(name, value, "must be in (0, 1]"))
    }
}
