//! Sector buckets used by the allocation model.
//!
//! The optimizer caps exposure per sector. Only the three credit sectors of
//! the candidate universe participate:
//!
//! - [`Sector::Industrial`]
//! - [`Sector::Financial`]
//! - [`Sector::Utility`]

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BondoptError;

/// Sector bucket of a candidate bond.
///
/// # Examples
///
/// ```
/// use bondopt_core::Sector;
///
/// let sector: Sector = "financial".parse().unwrap();
/// assert_eq!(sector, Sector::Financial);
/// assert_eq!(sector.code(), "FIN");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Sector {
    /// Non-financial corporate issuers
    Industrial,
    /// Banks, insurers and other financial institutions
    Financial,
    /// Utility companies
    Utility,
}

impl Sector {
    /// Returns all sectors in model order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[Self::Industrial, Self::Financial, Self::Utility]
    }

    /// Returns a human-readable name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Industrial => "Industrial",
            Self::Financial => "Financial",
            Self::Utility => "Utility",
        }
    }

    /// Returns the classification label used by universe files.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Industrial => "INDUSTRIAL",
            Self::Financial => "FINANCIAL",
            Self::Utility => "UTILITY",
        }
    }

    /// Returns a short code for the sector.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Industrial => "IND",
            Self::Financial => "FIN",
            Self::Utility => "UTL",
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Sector {
    type Err = BondoptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "INDUSTRIAL" | "IND" => Ok(Self::Industrial),
            "FINANCIAL" | "FIN" => Ok(Self::Financial),
            "UTILITY" | "UTL" => Ok(Self::Utility),
            _ => Err(BondoptError::unknown("sector", s)),
        }
    }
}
