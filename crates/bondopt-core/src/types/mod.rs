//! Domain types for bond allocation.

mod bond;
mod metric;
mod params;
mod sector;
mod sector_bonds;

pub use bond::BondRecord;
pub use metric::Metric;
pub use params::{OptimizationParameters, DURATION_TARGET_HINT, SECTOR_BOUND_HINT};
pub use sector::Sector;
pub use sector_bonds::SectorBonds;
