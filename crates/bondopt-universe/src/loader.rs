//! CSV universe loading.
//!
//! Expected columns (header names are matched case-insensitively):
//!
//! `effdate, class_1, class_2, class_3, class_4, rating, dur_cell, oas, ytm,
//! mv, effdur, cusip, ticker, mat_dt`
//!
//! Extra columns are ignored. Dates may be `YYYY-MM-DD` or `MM/DD/YYYY`.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use chrono::NaiveDate;
use csv::StringRecord;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::info;

use crate::error::{UniverseError, UniverseResult};
use crate::record::UniverseRow;

const REQUIRED_COLUMNS: &[&str] = &[
    "effdate", "class_1", "class_2", "class_3", "class_4", "rating", "dur_cell", "oas", "ytm",
    "mv", "effdur", "cusip", "ticker", "mat_dt",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// Raw CSV record before field parsing.
#[derive(Debug, Deserialize)]
struct RawRow {
    effdate: String,
    class_1: String,
    class_2: String,
    class_3: String,
    class_4: String,
    rating: String,
    dur_cell: String,
    oas: String,
    ytm: String,
    mv: String,
    effdur: String,
    cusip: String,
    ticker: String,
    mat_dt: String,
}

/// Loads a universe file.
pub fn load_universe(path: impl AsRef<Path>) -> UniverseResult<Vec<UniverseRow>> {
    let path = path.as_ref();
    let shown = path.display().to_string();
    let file = File::open(path).map_err(|e| UniverseError::io(&shown, e))?;
    let rows = read_universe(file).map_err(|err| match err {
        UniverseError::Io { reason, .. } => UniverseError::io(&shown, reason),
        other => other,
    })?;
    info!(path = %shown, rows = rows.len(), "universe loaded");
    Ok(rows)
}

/// Reads a universe from any CSV source.
pub fn read_universe<R: Read>(source: R) -> UniverseResult<Vec<UniverseRow>> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(source);

    let headers = reader
        .headers()
        .map_err(|e| UniverseError::io("<input>", e))?
        .iter()
        .map(str::to_ascii_lowercase)
        .collect::<StringRecord>();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == *column) {
            return Err(UniverseError::MissingColumn {
                column: (*column).to_string(),
            });
        }
    }
    reader.set_headers(headers);

    let mut rows = Vec::new();
    for result in reader.deserialize::<RawRow>() {
        let raw = result.map_err(|e| UniverseError::Record {
            line: e.position().map_or(0, csv::Position::line),
            reason: e.to_string(),
        })?;
        // Header is line 1, so the n-th data row sits on line n + 1.
        let line = rows.len() as u64 + 2;
        rows.push(parse_row(raw, line)?);
    }
    Ok(rows)
}

fn parse_row(raw: RawRow, line: u64) -> UniverseResult<UniverseRow> {
    Ok(UniverseRow {
        effective_date: parse_date(line, "effdate", &raw.effdate)?,
        oas: parse_decimal(line, "oas", &raw.oas)?,
        ytm: parse_decimal(line, "ytm", &raw.ytm)?,
        market_value: parse_decimal(line, "mv", &raw.mv)?,
        effective_duration: parse_decimal(line, "effdur", &raw.effdur)?,
        maturity_date: parse_date(line, "mat_dt", &raw.mat_dt)?,
        class_1: raw.class_1,
        class_2: raw.class_2,
        class_3: raw.class_3,
        class_4: raw.class_4,
        rating: raw.rating,
        duration_cell: raw.dur_cell,
        cusip: raw.cusip,
        ticker: raw.ticker,
    })
}

/// Parses a date in any of the accepted universe formats.
#[must_use]
pub fn parse_date_str(value: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
}

fn parse_date(line: u64, field: &str, value: &str) -> UniverseResult<NaiveDate> {
    parse_date_str(value).ok_or_else(|| UniverseError::invalid_field(line, field, value))
}

fn parse_decimal(line: u64, field: &str, value: &str) -> UniverseResult<Decimal> {
    Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .map_err(|_| UniverseError::invalid_field(line, field, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const SAMPLE: &str = "\
EFFDATE,CLASS_1,CLASS_2,CLASS_3,CLASS_4,RATING,DUR_CELL,OAS,YTM,MV,EFFDUR,CUSIP,TICKER,MAT_DT
02/29/2020,CORPORATE,INDUSTRIAL,TECHNOLOGY,SOFTWARE,AA,3-5,65.2,2.31,1250000,4.4,594918BR4,MSFT,2025-02-06
02/29/2020,CORPORATE,FINANCIAL,BANKING,MONEY CENTER,A,5-7,110,2.9,980000.5,5.9,46647PBH8,JPM,2027-04-23
";

    #[test]
    fn test_read_universe() {
        let rows = read_universe(SAMPLE.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);

        let first = &rows[0];
        assert_eq!(first.effective_date, NaiveDate::from_ymd_opt(2020, 2, 29).unwrap());
        assert_eq!(first.class_2, "INDUSTRIAL");
        assert_eq!(first.duration_cell, "3-5");
        assert_eq!(first.oas, dec!(65.2));
        assert_eq!(first.effective_duration, dec!(4.4));
        assert_eq!(first.maturity_date, NaiveDate::from_ymd_opt(2025, 2, 6).unwrap());
        assert_eq!(rows[1].market_value, dec!(980000.5));
    }

    #[test]
    fn test_missing_column() {
        let csv = "effdate,cusip\n2020-02-29,ABC\n";
        let err = read_universe(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, UniverseError::MissingColumn { .. }));
    }

    #[test]
    fn test_invalid_number_reports_line() {
        let bad = SAMPLE.replace("110,", "n/a,");
        let err = read_universe(bad.as_bytes()).unwrap_err();
        match err {
            UniverseError::InvalidField { line, field, value } => {
                assert_eq!(line, 3);
                assert_eq!(field, "oas");
                assert_eq!(value, "n/a");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2020, 2, 29);
        assert_eq!(parse_date_str("2020-02-29"), expected);
        assert_eq!(parse_date_str("02/29/2020"), expected);
        assert_eq!(parse_date_str("29.02.2020"), None);
    }
}
