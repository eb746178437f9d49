//! Candidate bond records.

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Metric, Sector};
use crate::error::{BondoptError, BondoptResult};

/// A candidate bond as supplied by the universe layer.
///
/// Records are immutable inputs to an optimization request; the optimizer
/// only reads them. Spread and yield are kept in the units of the source data
/// (OAS in basis points, YTM in percent).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BondRecord {
    /// Security identifier, unique within a request.
    pub cusip: String,

    /// Sector bucket.
    pub sector: Sector,

    /// Option-adjusted spread.
    pub oas: Decimal,

    /// Yield to maturity.
    pub ytm: Decimal,

    /// Effective duration in years.
    pub effective_duration: Decimal,

    /// Issuer ticker.
    pub ticker: String,

    /// Maturity date.
    pub maturity_date: NaiveDate,
}

impl BondRecord {
    /// Creates a record with zero analytics.
    #[must_use]
    pub fn new(
        cusip: impl Into<String>,
        sector: Sector,
        ticker: impl Into<String>,
        maturity_date: NaiveDate,
    ) -> Self {
        Self {
            cusip: cusip.into(),
            sector,
            oas: Decimal::ZERO,
            ytm: Decimal::ZERO,
            effective_duration: Decimal::ZERO,
            ticker: ticker.into(),
            maturity_date,
        }
    }

    /// Sets the option-adjusted spread.
    #[must_use]
    pub fn with_oas(mut self, oas: Decimal) -> Self {
        self.oas = oas;
        self
    }

    /// Sets the yield to maturity.
    #[must_use]
    pub fn with_ytm(mut self, ytm: Decimal) -> Self {
        self.ytm = ytm;
        self
    }

    /// Sets the effective duration.
    #[must_use]
    pub fn with_effective_duration(mut self, duration: Decimal) -> Self {
        self.effective_duration = duration;
        self
    }

    /// Returns the value of the selected objective metric.
    #[must_use]
    pub fn metric_value(&self, metric: Metric) -> Decimal {
        match metric {
            Metric::Oas => self.oas,
            Metric::Ytm => self.ytm,
        }
    }

    /// Returns the selected metric as a model coefficient.
    pub fn metric_coefficient(&self, metric: Metric) -> BondoptResult<f64> {
        self.to_coefficient(self.metric_value(metric), metric.label())
    }

    /// Returns the effective duration as a model coefficient.
    pub fn duration_coefficient(&self) -> BondoptResult<f64> {
        self.to_coefficient(self.effective_duration, "effective duration")
    }

    fn to_coefficient(&self, value: Decimal, field: &str) -> BondoptResult<f64> {
        value
            .to_f64()
            .filter(|v| v.is_finite())
            .ok_or_else(|| {
                BondoptError::invalid_bond(
                    &self.cusip,
                    format!("{field} {value} is not representable as a finite number"),
                )
            })
    }
}
