//! Summary command implementation.
//!
//! Reports the size of a universe selection and the distribution of its
//! OAS, YTM and effective duration.

use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::Tabled;

use bondopt_universe::{
    distinct_duration_cells, distinct_ratings, distinct_values, effective_dates, summarize,
    MeasureSummary, UniverseSummary,
};

use super::UniverseArgs;
use crate::cli::OutputFormat;
use crate::config::BondoptConfig;
use crate::output::{print_csv, print_header, print_json_value, print_table, KeyValue};

/// Arguments for the summary command.
#[derive(Args, Debug)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub universe: UniverseArgs,

    /// Also list the values available for each filter
    #[arg(long)]
    pub values: bool,
}

/// One measure row of the summary table.
#[derive(Debug, Serialize, Tabled)]
struct MeasureRow {
    #[tabled(rename = "Measure")]
    measure: String,
    #[tabled(rename = "Min")]
    min: String,
    #[tabled(rename = "Average")]
    average: String,
    #[tabled(rename = "Median")]
    median: String,
    #[tabled(rename = "Max")]
    max: String,
}

impl MeasureRow {
    fn new(summary: &MeasureSummary, precision: usize) -> Self {
        let fmt = |v: Decimal| format!("{:.precision$}", v);
        Self {
            measure: summary.measure.label().to_string(),
            min: fmt(summary.min),
            average: fmt(summary.average),
            median: fmt(summary.median),
            max: fmt(summary.max),
        }
    }
}

/// Filter values present in the universe file.
#[derive(Debug, Serialize)]
struct AvailableValues {
    effective_dates: Vec<String>,
    class_field: String,
    classes: Vec<String>,
    ratings: Vec<String>,
    duration_cells: Vec<String>,
}

#[derive(Serialize)]
struct SummaryReport<'a> {
    universe: String,
    #[serde(flatten)]
    summary: &'a UniverseSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    available: Option<AvailableValues>,
}

/// Execute the summary command.
pub fn execute(args: SummaryArgs, format: OutputFormat, config: &BondoptConfig) -> Result<()> {
    let selection = args.universe.load(config)?;
    let selected = selection.selected();
    let summary = summarize(&selected);
    let precision = config.output.precision;

    let available = args.values.then(|| AvailableValues {
        effective_dates: effective_dates(&selection.rows)
            .iter()
            .map(ToString::to_string)
            .collect(),
        class_field: args.universe.class_field.to_string(),
        classes: distinct_values(&selection.rows, args.universe.class_field),
        ratings: distinct_ratings(&selection.rows),
        duration_cells: distinct_duration_cells(&selection.rows),
    });

    let measures: Vec<MeasureRow> = summary
        .measures
        .iter()
        .map(|m| MeasureRow::new(m, precision))
        .collect();

    match format {
        OutputFormat::Table => {
            print_header("Universe Summary");
            let mut overview = vec![
                KeyValue::new("Universe", selection.path.display()),
                KeyValue::new("Number of Bonds", summary.bond_count),
                KeyValue::new("Market Value", summary.market_value.round_dp(2)),
            ];
            if let Some(date) = selection.filter.effective_date {
                overview.insert(1, KeyValue::new("Effective Date", date));
            }
            print_table(&overview)?;

            if !measures.is_empty() {
                print_header("Measures");
                print_table(&measures)?;
            }

            if let Some(values) = &available {
                print_header("Available Filter Values");
                print_table(&[
                    KeyValue::new("Effective Dates", values.effective_dates.join(", ")),
                    KeyValue::new(
                        format!("Classes ({})", values.class_field),
                        values.classes.join(", "),
                    ),
                    KeyValue::new("Ratings", values.ratings.join(", ")),
                    KeyValue::new("Duration Cells", values.duration_cells.join(", ")),
                ])?;
            }
        }
        OutputFormat::Json => {
            print_json_value(&SummaryReport {
                universe: selection.path.display().to_string(),
                summary: &summary,
                available,
            })?;
        }
        OutputFormat::Csv => print_csv(&measures)?,
    }

    Ok(())
}
