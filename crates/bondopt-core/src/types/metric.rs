//! Objective metric selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BondoptError;

/// Per-bond value the optimizer maximizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Option-adjusted spread
    #[default]
    Oas,
    /// Yield to maturity
    Ytm,
}

impl Metric {
    /// Returns both metrics.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[Self::Oas, Self::Ytm]
    }

    /// Returns the display label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Oas => "OAS",
            Self::Ytm => "YTM",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Metric {
    type Err = BondoptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "oas" => Ok(Self::Oas),
            "ytm" => Ok(Self::Ytm),
            _ => Err(BondoptError::unknown("metric", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("OAS".parse::<Metric>().unwrap(), Metric::Oas);
        assert_eq!("ytm".parse::<Metric>().unwrap(), Metric::Ytm);
        assert!("zspread".parse::<Metric>().is_err());
    }

    #[test]
    fn test_default_is_oas() {
        assert_eq!(Metric::default(), Metric::Oas);
    }
}
