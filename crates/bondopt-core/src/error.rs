//! Error types for the Bondopt domain.
//!
//! These errors describe malformed inputs: parameters outside their documented
//! ranges and bond records whose numeric fields cannot enter a linear model.

use thiserror::Error;

/// A specialized Result type for Bondopt domain operations.
pub type BondoptResult<T> = Result<T, BondoptError>;

/// Errors raised while validating domain inputs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BondoptError {
    /// An optimization parameter is outside its permitted range.
    #[error("Invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Offending value, rendered for display.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// A bond record carries a value that cannot be used.
    #[error("Invalid bond '{cusip}': {reason}")]
    InvalidBond {
        /// The bond's CUSIP.
        cusip: String,
        /// Why the record was rejected.
        reason: String,
    },

    /// The same CUSIP appears more than once across the candidate sets.
    #[error("Duplicate CUSIP '{cusip}' in candidate bonds")]
    DuplicateCusip {
        /// The repeated CUSIP.
        cusip: String,
    },

    /// A string could not be parsed into a domain enum.
    #[error("Unknown {kind}: '{value}'")]
    UnknownValue {
        /// What was being parsed (sector, metric, ...).
        kind: &'static str,
        /// The unrecognized input.
        value: String,
    },
}

impl BondoptError {
    /// Create an invalid parameter error.
    #[must_use]
    pub fn invalid_parameter(
        name: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Create an invalid bond error.
    #[must_use]
    pub fn invalid_bond(cusip: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidBond {
            cusip: cusip.into(),
            reason: reason.into(),
        }
    }

    /// Create a duplicate CUSIP error.
    #[must_use]
    pub fn duplicate_cusip(cusip: impl Into<String>) -> Self {
        Self::DuplicateCusip {
            cusip: cusip.into(),
        }
    }

    /// Create an unknown value error.
    #[must_use]
    pub fn unknown(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownValue {
            kind,
            value: value.into(),
        }
    }
}
