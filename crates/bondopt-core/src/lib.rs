//! # Bondopt Core
//!
//! Core domain types for the Bondopt bond portfolio allocation tool.
//!
//! This crate provides the building blocks shared by the optimizer, the
//! universe loader and the command-line front end:
//!
//! - **Types**: [`Sector`], [`Metric`], [`BondRecord`], [`SectorBonds`],
//!   [`OptimizationParameters`]
//! - **Errors**: [`BondoptError`] for invalid records and parameters
//!
//! ## Example
//!
//! ```rust
//! use bondopt_core::prelude::*;
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//!
//! let bond = BondRecord::new(
//!     "037833DX5",
//!     Sector::Industrial,
//!     "AAPL",
//!     NaiveDate::from_ymd_opt(2030, 5, 11).unwrap(),
//! )
//! .with_oas(dec!(85))
//! .with_ytm(dec!(4.1))
//! .with_effective_duration(dec!(4.6));
//!
//! assert_eq!(bond.metric_value(Metric::Oas), dec!(85));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod types;

pub use error::{BondoptError, BondoptResult};
pub use types::{BondRecord, Metric, OptimizationParameters, Sector, SectorBonds};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{BondoptError, BondoptResult};
    pub use crate::types::{BondRecord, Metric, OptimizationParameters, Sector, SectorBonds};
    pub use rust_decimal::Decimal;
}
