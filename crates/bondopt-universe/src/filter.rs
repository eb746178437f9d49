//! Universe filtering and selection lists.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use bondopt_core::BondoptError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::record::UniverseRow;

/// Classification level a filter applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassField {
    /// `class_1`
    Class1,
    /// `class_2`
    #[default]
    Class2,
    /// `class_3`
    Class3,
    /// `class_4`
    Class4,
}

impl ClassField {
    /// All classification levels, broadest first.
    #[must_use]
    pub const fn all() -> [ClassField; 4] {
        [Self::Class1, Self::Class2, Self::Class3, Self::Class4]
    }

    /// Column name in the universe file.
    #[must_use]
    pub const fn column(&self) -> &'static str {
        match self {
            Self::Class1 => "class_1",
            Self::Class2 => "class_2",
            Self::Class3 => "class_3",
            Self::Class4 => "class_4",
        }
    }

    /// Reads this field from a row.
    #[must_use]
    pub fn value<'a>(&self, row: &'a UniverseRow) -> &'a str {
        match self {
            Self::Class1 => &row.class_1,
            Self::Class2 => &row.class_2,
            Self::Class3 => &row.class_3,
            Self::Class4 => &row.class_4,
        }
    }
}

impl fmt::Display for ClassField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for ClassField {
    type Err = BondoptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "class_1" | "class1" | "1" => Ok(Self::Class1),
            "class_2" | "class2" | "2" => Ok(Self::Class2),
            "class_3" | "class3" | "3" => Ok(Self::Class3),
            "class_4" | "class4" | "4" => Ok(Self::Class4),
            _ => Err(BondoptError::unknown("class field", s)),
        }
    }
}

/// Row filter. Empty sets place no restriction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniverseFilter {
    /// Effective date to keep.
    pub effective_date: Option<NaiveDate>,
    /// Classification level `class_values` applies to.
    pub class_field: ClassField,
    /// Accepted values of `class_field`.
    pub class_values: BTreeSet<String>,
    /// Accepted ratings.
    pub ratings: BTreeSet<String>,
    /// Accepted duration cells.
    pub duration_cells: BTreeSet<String>,
}

impl UniverseFilter {
    /// Creates a filter that keeps every row.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts to one effective date.
    #[must_use]
    pub fn with_effective_date(mut self, date: NaiveDate) -> Self {
        self.effective_date = Some(date);
        self
    }

    /// Restricts a classification level to the given values.
    #[must_use]
    pub fn with_class<I, S>(mut self, field: ClassField, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.class_field = field;
        self.class_values = values.into_iter().map(Into::into).collect();
        self
    }

    /// Restricts to the given ratings.
    #[must_use]
    pub fn with_ratings<I, S>(mut self, ratings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ratings = ratings.into_iter().map(Into::into).collect();
        self
    }

    /// Restricts to the given duration cells.
    #[must_use]
    pub fn with_duration_cells<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.duration_cells = cells.into_iter().map(Into::into).collect();
        self
    }

    /// Returns true if the row passes every restriction.
    #[must_use]
    pub fn matches(&self, row: &UniverseRow) -> bool {
        self.effective_date.map_or(true, |d| row.effective_date == d)
            && accepts(&self.class_values, self.class_field.value(row))
            && accepts(&self.ratings, &row.rating)
            && accepts(&self.duration_cells, &row.duration_cell)
    }

    /// Rows passing the filter, in input order.
    #[must_use]
    pub fn apply<'a>(&self, rows: &'a [UniverseRow]) -> Vec<&'a UniverseRow> {
        rows.iter().filter(|row| self.matches(row)).collect()
    }
}

fn accepts(set: &BTreeSet<String>, value: &str) -> bool {
    set.is_empty() || set.contains(value)
}

/// Distinct values of a classification level, sorted.
#[must_use]
pub fn distinct_values(rows: &[UniverseRow], field: ClassField) -> Vec<String> {
    distinct(rows.iter().map(|row| field.value(row)))
}

/// Distinct ratings, sorted.
#[must_use]
pub fn distinct_ratings(rows: &[UniverseRow]) -> Vec<String> {
    distinct(rows.iter().map(|row| row.rating.as_str()))
}

/// Distinct duration cells, sorted.
#[must_use]
pub fn distinct_duration_cells(rows: &[UniverseRow]) -> Vec<String> {
    distinct(rows.iter().map(|row| row.duration_cell.as_str()))
}

/// Distinct effective dates, oldest first.
#[must_use]
pub fn effective_dates(rows: &[UniverseRow]) -> Vec<NaiveDate> {
    rows.iter()
        .map(|row| row.effective_date)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Most recent effective date, if any.
#[must_use]
pub fn latest_effective_date(rows: &[UniverseRow]) -> Option<NaiveDate> {
    rows.iter().map(|row| row.effective_date).max()
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
