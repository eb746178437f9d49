//! Sector partitioning of universe rows.

use bondopt_core::SectorBonds;
use tracing::{debug, warn};

use crate::record::UniverseRow;

/// Rows split into optimizer sector buckets.
#[derive(Debug, Clone, Default)]
pub struct SectorPartition {
    /// Candidates per sector, in input order.
    pub bonds: SectorBonds,
    /// Rows whose `class_2` is not an optimizer sector.
    pub skipped: usize,
}

/// Partitions rows by their `class_2` value.
///
/// Rows outside INDUSTRIAL, FINANCIAL and UTILITY are counted in
/// [`SectorPartition::skipped`] and otherwise ignored.
pub fn partition_by_sector<'a>(rows: impl IntoIterator<Item = &'a UniverseRow>) -> SectorPartition {
    let mut skipped = 0;
    let mut records = Vec::new();
    for row in rows {
        match row.sector() {
            Some(sector) => records.push(row.to_bond_record(sector)),
            None => {
                debug!(cusip = %row.cusip, class_2 = %row.class_2, "row outside optimizer sectors");
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        warn!(skipped, kept = records.len(), "skipped rows outside optimizer sectors");
    }

    SectorPartition {
        bonds: SectorBonds::from_records(records),
        skipped,
    }
}
