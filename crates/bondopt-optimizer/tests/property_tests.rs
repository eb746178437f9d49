//! Property-based tests for allocation invariants.
//!
//! For every optimal allocation:
//! - Every weight lies in [0, security_bound]
//! - Sector totals stay within sector_bound
//! - Total weight stays within 1 and cash = 1 - invested
//! - Portfolio duration hits the target
//! - Sector tables are ordered and end with a total row

use bondopt_core::{BondRecord, Metric, OptimizationParameters, Sector, SectorBonds};
use bondopt_optimizer::prelude::*;
use bondopt_optimizer::{solve_with, OptimizationResult};
use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

const TOL: f64 = 1e-6;

// =============================================================================
// GENERATORS
// =============================================================================

/// (sector index, duration in tenths, oas, ytm in basis points, ticker index, maturity year)
type BondSeed = (usize, u32, u32, u32, u8, i32);

fn bond_seed() -> impl Strategy<Value = BondSeed> {
    (0usize..3, 10u32..120, 20u32..400, 150u32..900, 0u8..6, 2026i32..2045)
}

fn build_bonds(seeds: &[BondSeed]) -> SectorBonds {
    let records = seeds.iter().enumerate().map(
        |(i, &(sector, duration, oas, ytm, ticker, year))| {
            BondRecord::new(
                format!("CUSIP{i:04}"),
                Sector::all()[sector],
                format!("TKR{ticker}"),
                NaiveDate::from_ymd_opt(year, 6, 30).unwrap(),
            )
            .with_effective_duration(Decimal::new(i64::from(duration), 1))
            .with_oas(Decimal::from(oas))
            .with_ytm(Decimal::new(i64::from(ytm), 2))
        },
    );
    SectorBonds::from_records(records)
}

fn params_strategy() -> impl Strategy<Value = OptimizationParameters> {
    (
        prop::sample::select(vec![0.01, 0.02, 0.03, 0.05, 0.1]),
        30u32..=70,
        20u32..=50,
        prop::sample::select(vec![Metric::Oas, Metric::Ytm]),
    )
        .prop_map(|(security, duration, sector, metric)| {
            OptimizationParameters::new(
                security,
                f64::from(duration) / 10.0,
                f64::from(sector) / 100.0,
                metric,
            )
        })
}

fn duration_of(bonds: &SectorBonds, cusip: &str) -> f64 {
    bonds
        .all_bonds()
        .find(|b| b.cusip == cusip)
        .and_then(|b| b.duration_coefficient().ok())
        .unwrap()
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn optimal_weights_satisfy_constraints(
        seeds in prop::collection::vec(bond_seed(), 1..60),
        params in params_strategy(),
    ) {
        let bonds = build_bonds(&seeds);
        let result = solve_with(&GoodLpSolver, &bonds, &params).unwrap();

        if let OptimizationResult::Optimal(solution) = result {
            prop_assert_eq!(solution.weights.len(), bonds.len());

            let mut total = 0.0;
            let mut duration = 0.0;
            for (cusip, &weight) in &solution.weights {
                prop_assert!(weight >= -TOL, "{} has weight {}", cusip, weight);
                prop_assert!(weight <= params.security_bound + TOL);
                total += weight;
                duration += weight * duration_of(&bonds, cusip);
            }
            prop_assert!(total <= 1.0 + TOL);
            prop_assert!((duration - params.duration_target).abs() <= TOL);

            for (_, candidates) in bonds.iter() {
                let sector_total: f64 =
                    candidates.iter().map(|b| solution.weight(&b.cusip)).sum();
                prop_assert!(sector_total <= params.sector_bound + TOL);
            }
        }
    }

    #[test]
    fn allocation_tables_are_consistent(
        seeds in prop::collection::vec(bond_seed(), 1..60),
        params in params_strategy(),
    ) {
        let bonds = build_bonds(&seeds);
        let outcome = optimize(&bonds, &params).unwrap();

        if let Optimization::Optimal(allocation) = outcome {
            prop_assert!(allocation.cash_weight >= -TOL);
            prop_assert!(allocation.cash_weight <= 1.0 + TOL);
            prop_assert!(
                (allocation.cash_weight - (1.0 - allocation.invested_weight())).abs() < 1e-9
            );

            for sector in allocation.sectors() {
                let table = sector.table_rows();
                prop_assert_eq!(table.len(), sector.rows.len() + 1);
                prop_assert!(table.last().unwrap().is_total);

                let sum: f64 = sector.rows.iter().map(|r| r.weight).sum();
                prop_assert!((sum - sector.total_weight).abs() < 1e-12);

                for pair in sector.rows.windows(2) {
                    let (a, b) = (&pair[0], &pair[1]);
                    prop_assert!(a.weight > 0.0 && b.weight > 0.0);
                    let ordered = a.weight > b.weight
                        || (a.weight == b.weight
                            && (a.ticker < b.ticker
                                || (a.ticker == b.ticker && a.maturity_date >= b.maturity_date)));
                    prop_assert!(ordered, "rows out of order: {:?} then {:?}", a, b);
                }
            }
        }
    }

    #[test]
    fn objective_is_deterministic(
        seeds in prop::collection::vec(bond_seed(), 1..30),
        params in params_strategy(),
    ) {
        let bonds = build_bonds(&seeds);
        let first = optimize(&bonds, &params).unwrap();
        let second = optimize(&bonds, &params).unwrap();

        match (first.allocation(), second.allocation()) {
            (Some(a), Some(b)) => {
                prop_assert!((a.objective_value - b.objective_value).abs() < 1e-9);
            }
            (None, None) => {}
            _ => prop_assert!(false, "feasibility changed between identical solves"),
        }
    }
}
