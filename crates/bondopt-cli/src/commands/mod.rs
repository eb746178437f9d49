//! CLI command implementations.

pub mod config;
pub mod optimize;
pub mod summary;

pub use config::ConfigArgs;
pub use optimize::OptimizeArgs;
pub use summary::SummaryArgs;

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use tracing::info;

use bondopt_universe::{
    latest_effective_date, load_universe, parse_date_str, ClassField, UniverseFilter, UniverseRow,
};

use crate::config::BondoptConfig;
use crate::error::{CliError, CliResult};

/// Universe file and selection filters shared by `summary` and `optimize`.
#[derive(Args, Debug, Clone)]
pub struct UniverseArgs {
    /// Universe CSV file. Defaults to `[universe] path` from the config file
    #[arg(short, long)]
    pub universe: Option<PathBuf>,

    /// Effective date (YYYY-MM-DD or MM/DD/YYYY). Defaults to the latest date in the file
    #[arg(short, long)]
    pub date: Option<String>,

    /// Classification level the --class filter applies to
    #[arg(long, default_value = "class_2")]
    pub class_field: ClassField,

    /// Accepted classification values (comma-separated)
    #[arg(long = "class", value_delimiter = ',')]
    pub classes: Vec<String>,

    /// Accepted ratings (comma-separated)
    #[arg(long = "rating", value_delimiter = ',')]
    pub ratings: Vec<String>,

    /// Accepted duration cells (comma-separated)
    #[arg(long = "duration-cell", value_delimiter = ',')]
    pub duration_cells: Vec<String>,
}

/// A loaded universe and the filter selecting from it.
pub struct Selection {
    pub path: PathBuf,
    pub rows: Vec<UniverseRow>,
    pub filter: UniverseFilter,
}

impl Selection {
    /// Rows passing the filter.
    pub fn selected(&self) -> Vec<&UniverseRow> {
        self.filter.apply(&self.rows)
    }
}

impl UniverseArgs {
    /// Loads the universe and builds the filter.
    pub fn load(&self, config: &BondoptConfig) -> Result<Selection> {
        let path = self
            .universe
            .clone()
            .or_else(|| config.universe.path.clone())
            .ok_or(CliError::MissingUniverse)?;
        let rows = load_universe(&path)?;
        if rows.is_empty() {
            return Err(CliError::EmptyUniverse(path).into());
        }

        let filter = self.filter(&rows)?;
        info!(
            universe = %path.display(),
            date = ?filter.effective_date,
            "universe selection ready"
        );
        Ok(Selection { path, rows, filter })
    }

    /// Builds the filter; without --date the latest effective date is used.
    pub fn filter(&self, rows: &[UniverseRow]) -> CliResult<UniverseFilter> {
        let date = match &self.date {
            Some(text) => Some(parse_date(text)?),
            None => latest_effective_date(rows),
        };

        let mut filter = UniverseFilter::new()
            .with_class(self.class_field, self.classes.iter().cloned())
            .with_ratings(self.ratings.iter().cloned())
            .with_duration_cells(self.duration_cells.iter().cloned());
        if let Some(date) = date {
            filter = filter.with_effective_date(date);
        }
        Ok(filter)
    }
}

/// Parses a date in any accepted universe format.
pub fn parse_date(s: &str) -> CliResult<NaiveDate> {
    parse_date_str(s).ok_or_else(|| CliError::InvalidDate(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn args() -> UniverseArgs {
        UniverseArgs {
            universe: None,
            date: None,
            class_field: ClassField::Class2,
            classes: vec![],
            ratings: vec![],
            duration_cells: vec![],
        }
    }

    fn row(date: NaiveDate, rating: &str) -> UniverseRow {
        UniverseRow {
            effective_date: date,
            class_1: "CORPORATE".into(),
            class_2: "INDUSTRIAL".into(),
            class_3: String::new(),
            class_4: String::new(),
            rating: rating.into(),
            duration_cell: "3-5".into(),
            oas: Decimal::ONE,
            ytm: Decimal::ONE,
            market_value: Decimal::ONE,
            effective_duration: Decimal::ONE,
            cusip: "X".into(),
            ticker: "X".into(),
            maturity_date: date,
        }
    }

    #[test]
    fn test_filter_defaults_to_latest_date() {
        let jan = NaiveDate::from_ymd_opt(2020, 1, 31).unwrap();
        let feb = NaiveDate::from_ymd_opt(2020, 2, 29).unwrap();
        let rows = vec![row(jan, "A"), row(feb, "A")];

        let filter = args().filter(&rows).unwrap();
        assert_eq!(filter.effective_date, Some(feb));
        assert_eq!(filter.apply(&rows).len(), 1);
    }

    #[test]
    fn test_filter_explicit_date_and_ratings() {
        let jan = NaiveDate::from_ymd_opt(2020, 1, 31).unwrap();
        let rows = vec![row(jan, "A"), row(jan, "BBB")];

        let mut universe_args = args();
        universe_args.date = Some("01/31/2020".into());
        universe_args.ratings = vec!["BBB".into()];

        let filter = universe_args.filter(&rows).unwrap();
        assert_eq!(filter.effective_date, Some(jan));
        assert_eq!(filter.apply(&rows).len(), 1);
    }

    #[test]
    fn test_invalid_date() {
        let mut universe_args = args();
        universe_args.date = Some("31-01-2020".into());
        let err = universe_args.filter(&[]).unwrap_err();
        assert!(matches!(err, CliError::InvalidDate(_)));
    }

    #[test]
    fn test_missing_universe() {
        let err = args().load(&BondoptConfig::default()).err().unwrap();
        assert!(err.to_string().contains("No universe file"));
    }
}
