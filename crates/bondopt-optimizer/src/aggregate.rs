//! Sector-level breakdown of an optimal allocation.
//!
//! Joins solver weights back onto the descriptive bond fields, keeps the
//! actual holdings, orders them for display and totals each sector. Whatever
//! the three sectors leave unallocated is cash.

use std::cmp::Ordering;

use bondopt_core::{BondRecord, Sector, SectorBonds};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::extract::OptimalSolution;

/// Label of the synthetic row closing each sector table.
pub const TOTAL_ROW_LABEL: &str = "Total";

/// One holding in a sector table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationRow {
    /// Bond CUSIP.
    pub cusip: String,
    /// Issuer ticker.
    pub ticker: String,
    /// Maturity date.
    pub maturity_date: NaiveDate,
    /// Portfolio weight, strictly positive.
    pub weight: f64,
}

impl AllocationRow {
    fn from_bond(bond: &BondRecord, weight: f64) -> Self {
        Self {
            cusip: bond.cusip.clone(),
            ticker: bond.ticker.clone(),
            maturity_date: bond.maturity_date,
            weight,
        }
    }
}

/// A display row: either a holding or the closing sector total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    /// CUSIP, or [`TOTAL_ROW_LABEL`] for the total row.
    pub cusip: String,
    /// Ticker; empty on the total row.
    pub ticker: String,
    /// Maturity date; absent on the total row.
    pub maturity_date: Option<NaiveDate>,
    /// Holding weight or sector total.
    pub weight: f64,
    /// True for the synthetic total row.
    pub is_total: bool,
}

/// Holdings of one sector, ordered for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorAllocation {
    /// The sector.
    pub sector: Sector,
    /// Holdings with positive weight, by descending weight, then ascending
    /// ticker, then descending maturity.
    pub rows: Vec<AllocationRow>,
    /// Sum of the holding weights (0 when there are none).
    pub total_weight: f64,
}

impl SectorAllocation {
    /// Returns true if no bond of the sector was allocated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows for display: the holdings followed by the sector total.
    ///
    /// The total row is always present, with weight 0 for an empty sector.
    #[must_use]
    pub fn table_rows(&self) -> Vec<TableRow> {
        let mut table: Vec<TableRow> = self
            .rows
            .iter()
            .map(|row| TableRow {
                cusip: row.cusip.clone(),
                ticker: row.ticker.clone(),
                maturity_date: Some(row.maturity_date),
                weight: row.weight,
                is_total: false,
            })
            .collect();
        table.push(TableRow {
            cusip: TOTAL_ROW_LABEL.to_string(),
            ticker: String::new(),
            maturity_date: None,
            weight: self.total_weight,
            is_total: true,
        });
        table
    }
}

/// Complete result of a successful optimization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioAllocation {
    /// Value of the maximized metric.
    pub objective_value: f64,
    /// Unallocated weight, `1 - Σ sector totals`.
    pub cash_weight: f64,
    /// Industrial holdings.
    pub industrial: SectorAllocation,
    /// Financial holdings.
    pub financial: SectorAllocation,
    /// Utility holdings.
    pub utility: SectorAllocation,
}

impl PortfolioAllocation {
    /// Returns the allocation of one sector.
    #[must_use]
    pub fn sector(&self, sector: Sector) -> &SectorAllocation {
        match sector {
            Sector::Industrial => &self.industrial,
            Sector::Financial => &self.financial,
            Sector::Utility => &self.utility,
        }
    }

    /// Iterates the sector allocations in model order.
    pub fn sectors(&self) -> impl Iterator<Item = &SectorAllocation> + '_ {
        Sector::all().iter().map(move |&s| self.sector(s))
    }

    /// Weight invested in bonds, `1 - cash_weight`.
    #[must_use]
    pub fn invested_weight(&self) -> f64 {
        self.sectors().map(|s| s.total_weight).fold(0.0, |acc, w| acc + w)
    }

    /// Number of holdings across all sectors.
    #[must_use]
    pub fn holding_count(&self) -> usize {
        self.sectors().map(|s| s.rows.len()).sum()
    }
}

/// Builds the sector tables and cash weight for an optimal solution.
#[must_use]
pub fn aggregate(solution: &OptimalSolution, bonds: &SectorBonds) -> PortfolioAllocation {
    let industrial = aggregate_sector(Sector::Industrial, bonds.get(Sector::Industrial), solution);
    let financial = aggregate_sector(Sector::Financial, bonds.get(Sector::Financial), solution);
    let utility = aggregate_sector(Sector::Utility, bonds.get(Sector::Utility), solution);

    let cash_weight =
        1.0 - (industrial.total_weight + financial.total_weight + utility.total_weight);

    PortfolioAllocation {
        objective_value: solution.objective_value,
        cash_weight,
        industrial,
        financial,
        utility,
    }
}

/// Aggregates one sector's candidates.
pub(crate) fn aggregate_sector(
    sector: Sector,
    bonds: &[BondRecord],
    solution: &OptimalSolution,
) -> SectorAllocation {
    let mut rows: Vec<AllocationRow> = bonds
        .iter()
        .map(|bond| AllocationRow::from_bond(bond, solution.weight(&bond.cusip)))
        .filter(|row| row.weight > 0.0)
        .collect();
    rows.sort_by(display_order);

    // Folding from +0.0 keeps an empty sector from printing as `-0`.
    let total_weight = rows.iter().map(|r| r.weight).fold(0.0, |acc, w| acc + w);

    SectorAllocation {
        sector,
        rows,
        total_weight,
    }
}

/// Descending weight, then ascending ticker, then descending maturity.
fn display_order(a: &AllocationRow, b: &AllocationRow) -> Ordering {
    b.weight
        .total_cmp(&a.weight)
        .then_with(|| a.ticker.cmp(&b.ticker))
        .then_with(|| b.maturity_date.cmp(&a.maturity_date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn bond(cusip: &str, sector: Sector, ticker: &str, maturity: NaiveDate) -> BondRecord {
        BondRecord::new(cusip, sector, ticker, maturity)
    }

    fn solution(weights: &[(&str, f64)]) -> OptimalSolution {
        OptimalSolution {
            objective_value: 42.0,
            weights: weights
                .iter()
                .map(|(c, w)| ((*c).to_string(), *w))
                .collect::<BTreeMap<_, _>>(),
        }
    }

    #[test]
    fn test_filters_zero_and_missing_weights() {
        let bonds = vec![
            bond("A", Sector::Industrial, "AAA", date(2030, 1, 1)),
            bond("B", Sector::Industrial, "BBB", date(2030, 1, 1)),
            bond("C", Sector::Industrial, "CCC", date(2030, 1, 1)),
        ];
        let sol = solution(&[("A", 0.2), ("B", 0.0)]);
        let alloc = aggregate_sector(Sector::Industrial, &bonds, &sol);

        assert_eq!(alloc.rows.len(), 1);
        assert_eq!(alloc.rows[0].cusip, "A");
        assert_eq!(alloc.total_weight, 0.2);
    }

    #[test]
    fn test_display_order() {
        let bonds = vec![
            bond("1", Sector::Financial, "JPM", date(2028, 1, 1)),
            bond("2", Sector::Financial, "BAC", date(2027, 1, 1)),
            bond("3", Sector::Financial, "JPM", date(2032, 1, 1)),
            bond("4", Sector::Financial, "GS", date(2029, 1, 1)),
        ];
        let sol = solution(&[("1", 0.01), ("2", 0.01), ("3", 0.01), ("4", 0.02)]);
        let alloc = aggregate_sector(Sector::Financial, &bonds, &sol);

        let order: Vec<_> = alloc.rows.iter().map(|r| r.cusip.as_str()).collect();
        // GS has the largest weight; BAC before JPM; the later JPM maturity first.
        assert_eq!(order, vec!["4", "2", "3", "1"]);
    }

    #[test]
    fn test_table_rows_end_with_total() {
        let bonds = vec![
            bond("A", Sector::Utility, "NEE", date(2031, 3, 1)),
            bond("B", Sector::Utility, "DUK", date(2029, 3, 1)),
        ];
        let sol = solution(&[("A", 0.25), ("B", 0.5)]);
        let alloc = aggregate_sector(Sector::Utility, &bonds, &sol);
        let table = alloc.table_rows();

        assert_eq!(table.len(), 3);
        assert_eq!(table[0].cusip, "B");
        let total = table.last().unwrap();
        assert!(total.is_total);
        assert_eq!(total.cusip, TOTAL_ROW_LABEL);
        assert!(total.maturity_date.is_none());
        assert_eq!(total.weight, 0.75);
    }

    #[test]
    fn test_empty_sector_still_has_total_row() {
        let alloc = aggregate_sector(Sector::Utility, &[], &solution(&[]));
        assert!(alloc.is_empty());
        assert_eq!(alloc.total_weight, 0.0);
        assert!(alloc.total_weight.is_sign_positive());

        let table = alloc.table_rows();
        assert_eq!(table.len(), 1);
        assert!(table[0].is_total);
        assert_eq!(table[0].weight, 0.0);
        assert!(table[0].weight.is_sign_positive());
    }

    #[test]
    fn test_cash_weight() {
        let bonds = SectorBonds::new(
            vec![bond("I", Sector::Industrial, "F", date(2030, 1, 1))],
            vec![bond("F", Sector::Financial, "C", date(2030, 1, 1))],
            vec![bond("U", Sector::Utility, "D", date(2030, 1, 1))],
        );
        let alloc = aggregate(&solution(&[("I", 0.3), ("F", 0.25), ("U", 0.2)]), &bonds);

        assert_eq!(alloc.objective_value, 42.0);
        assert!((alloc.cash_weight - 0.25).abs() < 1e-12);
        assert!((alloc.invested_weight() - 0.75).abs() < 1e-12);
        assert_eq!(alloc.holding_count(), 3);
        assert_eq!(alloc.sector(Sector::Financial).total_weight, 0.25);
    }

    #[test]
    fn test_empty_universe_is_all_cash() {
        let alloc = aggregate(&OptimalSolution::default(), &SectorBonds::default());
        assert_eq!(alloc.cash_weight, 1.0);
        assert!(alloc.invested_weight().is_sign_positive());
        assert!(alloc.sectors().all(SectorAllocation::is_empty));
        assert!(alloc.sectors().all(|s| s.total_weight.is_sign_positive()));
    }
}
