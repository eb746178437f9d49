//! Universe summary statistics.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::record::UniverseRow;

/// Per-bond measure reported in the summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Measure {
    /// Option-adjusted spread.
    Oas,
    /// Yield to maturity.
    Ytm,
    /// Effective duration.
    EffectiveDuration,
}

impl Measure {
    /// Measures in report order.
    #[must_use]
    pub const fn all() -> [Measure; 3] {
        [Self::Oas, Self::Ytm, Self::EffectiveDuration]
    }

    /// Display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Oas => "OAS",
            Self::Ytm => "YTM",
            Self::EffectiveDuration => "Eff. Duration",
        }
    }

    /// Reads this measure from a row.
    #[must_use]
    pub fn value(&self, row: &UniverseRow) -> Decimal {
        match self {
            Self::Oas => row.oas,
            Self::Ytm => row.ytm,
            Self::EffectiveDuration => row.effective_duration,
        }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Distribution of one measure across the selected bonds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasureSummary {
    /// Which measure.
    pub measure: Measure,
    /// Smallest value.
    pub min: Decimal,
    /// Arithmetic mean.
    pub average: Decimal,
    /// Median (mean of the two middle values for even counts).
    pub median: Decimal,
    /// Largest value.
    pub max: Decimal,
}

impl MeasureSummary {
    /// Summarizes one measure. Returns `None` for an empty selection.
    #[must_use]
    pub fn from_rows<'a>(
        measure: Measure,
        rows: impl IntoIterator<Item = &'a UniverseRow>,
    ) -> Option<Self> {
        let mut values: Vec<Decimal> = rows.into_iter().map(|row| measure.value(row)).collect();
        if values.is_empty() {
            return None;
        }
        values.sort_unstable();

        let count = values.len();
        let sum: Decimal = values.iter().sum();
        let median = if count % 2 == 0 {
            (values[count / 2 - 1] + values[count / 2]) / Decimal::TWO
        } else {
            values[count / 2]
        };

        Some(Self {
            measure,
            min: values[0],
            average: sum / Decimal::from(count),
            median,
            max: values[count - 1],
        })
    }
}

/// Summary of a universe selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniverseSummary {
    /// Number of bonds.
    pub bond_count: usize,
    /// Total market value.
    pub market_value: Decimal,
    /// OAS, YTM and effective duration distributions; empty when no bonds.
    pub measures: Vec<MeasureSummary>,
}

impl UniverseSummary {
    /// Returns the distribution of one measure.
    #[must_use]
    pub fn measure(&self, measure: Measure) -> Option<&MeasureSummary> {
        self.measures.iter().find(|m| m.measure == measure)
    }
}

/// Summarizes a universe selection.
#[must_use]
pub fn summarize(rows: &[&UniverseRow]) -> UniverseSummary {
    UniverseSummary {
        bond_count: rows.len(),
        market_value: rows.iter().map(|row| row.market_value).sum(),
        measures: Measure::all()
            .into_iter()
            .filter_map(|measure| MeasureSummary::from_rows(measure, rows.iter().copied()))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn row(oas: Decimal, ytm: Decimal, duration: Decimal, mv: Decimal) -> UniverseRow {
        UniverseRow {
            effective_date: NaiveDate::from_ymd_opt(2020, 2, 29).unwrap(),
            class_1: "CORPORATE".into(),
            class_2: "INDUSTRIAL".into(),
            class_3: String::new(),
            class_4: String::new(),
            rating: "A".into(),
            duration_cell: "3-5".into(),
            oas,
            ytm,
            market_value: mv,
            effective_duration: duration,
            cusip: "X".into(),
            ticker: "X".into(),
            maturity_date: NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
        }
    }

    #[test]
    fn test_summarize() {
        let rows = vec![
            row(dec!(100), dec!(3.0), dec!(4), dec!(1000)),
            row(dec!(40), dec!(2.5), dec!(2), dec!(500)),
            row(dec!(70), dec!(4.0), dec!(6), dec!(250)),
            row(dec!(90), dec!(3.5), dec!(8), dec!(250)),
        ];
        let selected: Vec<&UniverseRow> = rows.iter().collect();
        let summary = summarize(&selected);

        assert_eq!(summary.bond_count, 4);
        assert_eq!(summary.market_value, dec!(2000));
        assert_eq!(summary.measures.len(), 3);

        let oas = summary.measure(Measure::Oas).unwrap();
        assert_eq!(oas.min, dec!(40));
        assert_eq!(oas.max, dec!(100));
        assert_eq!(oas.average, dec!(75));
        assert_eq!(oas.median, dec!(80));

        let duration = summary.measure(Measure::EffectiveDuration).unwrap();
        assert_eq!(duration.median, dec!(5));
        assert_eq!(duration.average, dec!(5));
    }

    #[test]
    fn test_odd_count_median() {
        let rows = vec![
            row(dec!(10), dec!(1), dec!(1), dec!(1)),
            row(dec!(30), dec!(1), dec!(1), dec!(1)),
            row(dec!(20), dec!(1), dec!(1), dec!(1)),
        ];
        let oas = MeasureSummary::from_rows(Measure::Oas, &rows).unwrap();
        assert_eq!(oas.median, dec!(20));
    }

    #[test]
    fn test_empty_selection() {
        let summary = summarize(&[]);
        assert_eq!(summary.bond_count, 0);
        assert_eq!(summary.market_value, Decimal::ZERO);
        assert!(summary.measures.is_empty());
        assert!(summary.measure(Measure::Ytm).is_none());
    }
}
