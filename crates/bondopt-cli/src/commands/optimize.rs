//! Optimize command implementation.
//!
//! Runs the allocation optimizer on a universe selection and prints the
//! objective, the cash weight and one holdings table per sector.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use bondopt_core::{Metric, OptimizationParameters};
use bondopt_optimizer::{optimize, Optimization, PortfolioAllocation, TableRow};
use bondopt_universe::partition_by_sector;

use super::UniverseArgs;
use crate::cli::OutputFormat;
use crate::config::BondoptConfig;
use crate::output::{
    format_weight, print_csv, print_header, print_json_value, print_table, print_warning, KeyValue,
};

/// Exit status for a request with no feasible allocation.
pub const INFEASIBLE_EXIT_CODE: u8 = 2;

/// Arguments for the optimize command.
#[derive(Args, Debug)]
pub struct OptimizeArgs {
    #[command(flatten)]
    pub universe: UniverseArgs,

    /// Metric to maximize: oas or ytm
    #[arg(short, long)]
    pub metric: Option<Metric>,

    /// Maximum weight per bond, as a fraction (0.01 = 1%)
    #[arg(long)]
    pub security_bound: Option<f64>,

    /// Required portfolio effective duration
    #[arg(long)]
    pub duration_target: Option<f64>,

    /// Maximum weight per sector, as a fraction (0.35 = 35%)
    #[arg(long)]
    pub sector_bound: Option<f64>,
}

impl OptimizeArgs {
    /// Config values overridden by any flags given.
    pub fn parameters(&self, config: &BondoptConfig) -> OptimizationParameters {
        let mut params = config.optimization.parameters();
        if let Some(metric) = self.metric {
            params = params.with_metric(metric);
        }
        if let Some(bound) = self.security_bound {
            params = params.with_security_bound(bound);
        }
        if let Some(target) = self.duration_target {
            params = params.with_duration_target(target);
        }
        if let Some(bound) = self.sector_bound {
            params = params.with_sector_bound(bound);
        }
        params
    }
}

/// A holding row as displayed.
#[derive(Debug, Serialize, Tabled)]
struct HoldingRow {
    #[tabled(rename = "CUSIP")]
    cusip: String,
    #[tabled(rename = "Ticker")]
    ticker: String,
    #[tabled(rename = "Maturity")]
    maturity: String,
    #[tabled(rename = "Weight")]
    weight: String,
}

impl HoldingRow {
    fn new(row: &TableRow, precision: usize) -> Self {
        Self {
            cusip: row.cusip.clone(),
            ticker: row.ticker.clone(),
            maturity: row.maturity_date.map(|d| d.to_string()).unwrap_or_default(),
            weight: format_weight(row.weight, precision),
        }
    }
}

/// A flat CSV row: one per holding, one total per sector, one for cash.
#[derive(Debug, Serialize)]
struct CsvRow {
    sector: String,
    cusip: String,
    ticker: String,
    maturity: String,
    weight: f64,
}

/// Execute the optimize command.
pub fn execute(
    args: OptimizeArgs,
    format: OutputFormat,
    config: &BondoptConfig,
) -> Result<ExitCode> {
    let selection = args.universe.load(config)?;
    let partition = partition_by_sector(selection.selected());
    let params = args.parameters(config);

    let outcome = optimize(&partition.bonds, &params)?;

    match (&outcome, format) {
        (_, OutputFormat::Json) => print_json_value(&outcome)?,
        (Optimization::Optimal(allocation), OutputFormat::Table) => {
            print_allocation_tables(allocation, &params, partition.bonds.len(), config)?;
        }
        (Optimization::Optimal(allocation), OutputFormat::Csv) => {
            print_csv(&csv_rows(allocation))?;
        }
        (Optimization::Infeasible, _) => {}
    }

    if outcome.is_infeasible() {
        print_warning(&format!(
            "No feasible allocation: duration target {} with security bound {} and sector \
             bound {} cannot be met by the {} selected bonds",
            params.duration_target,
            params.security_bound,
            params.sector_bound,
            partition.bonds.len()
        ));
        return Ok(ExitCode::from(INFEASIBLE_EXIT_CODE));
    }

    Ok(ExitCode::SUCCESS)
}

fn print_allocation_tables(
    allocation: &PortfolioAllocation,
    params: &OptimizationParameters,
    candidates: usize,
    config: &BondoptConfig,
) -> Result<()> {
    let precision = config.output.precision;

    print_header("Optimal Allocation");
    print_table(&[
        KeyValue::new("Candidates", candidates),
        KeyValue::new("Holdings", allocation.holding_count()),
        KeyValue::from_f64(
            format!("Portfolio {}", params.metric),
            allocation.objective_value,
            precision,
        ),
        KeyValue::from_weight("Invested", allocation.invested_weight(), precision),
        KeyValue::from_weight("Cash", allocation.cash_weight, precision),
    ])?;

    for sector in allocation.sectors() {
        print_header(sector.sector.name());
        let rows: Vec<HoldingRow> = sector
            .table_rows()
            .iter()
            .map(|row| HoldingRow::new(row, precision))
            .collect();
        print_table(&rows)?;
    }
    Ok(())
}

fn csv_rows(allocation: &PortfolioAllocation) -> Vec<CsvRow> {
    let mut rows: Vec<CsvRow> = allocation
        .sectors()
        .flat_map(|sector| {
            sector.table_rows().into_iter().map(move |row| CsvRow {
                sector: sector.sector.label().to_string(),
                cusip: row.cusip,
                ticker: row.ticker,
                maturity: row.maturity_date.map(|d| d.to_string()).unwrap_or_default(),
                weight: row.weight,
            })
        })
        .collect();
    rows.push(CsvRow {
        sector: "CASH".to_string(),
        cusip: String::new(),
        ticker: String::new(),
        maturity: String::new(),
        weight: allocation.cash_weight,
    });
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use bondopt_universe::ClassField;

    fn args() -> OptimizeArgs {
        OptimizeArgs {
            universe: UniverseArgs {
                universe: None,
                date: None,
                class_field: ClassField::Class2,
                classes: vec![],
                ratings: vec![],
                duration_cells: vec![],
            },
            metric: None,
            security_bound: None,
            duration_target: None,
            sector_bound: None,
        }
    }

    #[test]
    fn test_parameters_from_config() {
        let mut config = BondoptConfig::default();
        config.optimization.duration_target = 4.0;
        config.optimization.metric = Metric::Ytm;

        let params = args().parameters(&config);
        assert_eq!(params.duration_target, 4.0);
        assert_eq!(params.metric, Metric::Ytm);
        assert_eq!(params.security_bound, 0.01);
    }

    #[test]
    fn test_flags_override_config() {
        let mut config = BondoptConfig::default();
        config.optimization.sector_bound = 0.25;

        let mut optimize_args = args();
        optimize_args.sector_bound = Some(0.5);
        optimize_args.security_bound = Some(0.03);
        optimize_args.metric = Some(Metric::Oas);

        let params = optimize_args.parameters(&config);
        assert_eq!(params.sector_bound, 0.5);
        assert_eq!(params.security_bound, 0.03);
        assert_eq!(params.duration_target, 5.0);
    }
}
