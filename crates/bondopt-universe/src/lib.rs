//! # Bondopt Universe
//!
//! Candidate bond universe handling for Bondopt.
//!
//! - [`load_universe`] / [`read_universe`]: CSV → [`UniverseRow`]s
//! - [`UniverseFilter`]: selection by effective date, classification,
//!   rating and duration cell
//! - [`partition_by_sector`]: selection → optimizer [`SectorBonds`](bondopt_core::SectorBonds)
//! - [`summarize`]: bond count, market value and measure distributions
//!
//! ## Example
//!
//! ```rust,ignore
//! use bondopt_universe::prelude::*;
//!
//! let rows = load_universe("universe.csv")?;
//! let filter = UniverseFilter::new().with_ratings(["A", "AA"]);
//! let selected = filter.apply(&rows);
//!
//! let summary = summarize(&selected);
//! let partition = partition_by_sector(selected.iter().copied());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod filter;
pub mod loader;
pub mod partition;
pub mod record;
pub mod summary;

pub use error::{UniverseError, UniverseResult};
pub use filter::{
    distinct_duration_cells, distinct_ratings, distinct_values, effective_dates,
    latest_effective_date, ClassField, UniverseFilter,
};
pub use loader::{load_universe, parse_date_str, read_universe};
pub use partition::{partition_by_sector, SectorPartition};
pub use record::UniverseRow;
pub use summary::{summarize, Measure, MeasureSummary, UniverseSummary};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{UniverseError, UniverseResult};
    pub use crate::filter::{ClassField, UniverseFilter};
    pub use crate::loader::load_universe;
    pub use crate::partition::{partition_by_sector, SectorPartition};
    pub use crate::record::UniverseRow;
    pub use crate::summary::{summarize, Measure, UniverseSummary};
}
