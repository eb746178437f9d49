//! Universe rows.

use bondopt_core::{BondRecord, Sector};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One bond of the universe on one effective date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniverseRow {
    /// Date the analytics were computed for.
    pub effective_date: NaiveDate,
    /// Broadest classification level.
    pub class_1: String,
    /// Second classification level; carries the optimizer sector.
    pub class_2: String,
    /// Third classification level.
    pub class_3: String,
    /// Finest classification level.
    pub class_4: String,
    /// Composite credit rating.
    pub rating: String,
    /// Duration bucket label.
    pub duration_cell: String,
    /// Option-adjusted spread (bps).
    pub oas: Decimal,
    /// Yield to maturity (%).
    pub ytm: Decimal,
    /// Market value.
    pub market_value: Decimal,
    /// Effective duration (years).
    pub effective_duration: Decimal,
    /// Security identifier.
    pub cusip: String,
    /// Issuer ticker.
    pub ticker: String,
    /// Maturity date.
    pub maturity_date: NaiveDate,
}

impl UniverseRow {
    /// Optimizer sector of the row, if its `class_2` is exactly one of the
    /// three credit sector labels. Case variants and short codes do not match.
    #[must_use]
    pub fn sector(&self) -> Option<Sector> {
        Sector::all()
            .iter()
            .copied()
            .find(|sector| sector.label() == self.class_2)
    }

    /// Converts the row into an optimizer candidate.
    #[must_use]
    pub fn to_bond_record(&self, sector: Sector) -> BondRecord {
        BondRecord::new(&self.cusip, sector, &self.ticker, self.maturity_date)
            .with_oas(self.oas)
            .with_ytm(self.ytm)
            .with_effective_duration(self.effective_duration)
    }
}
