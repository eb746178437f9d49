//! Candidate bonds partitioned into sector buckets.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{BondRecord, Sector};
use crate::error::{BondoptError, BondoptResult};

/// The three disjoint candidate sets of one optimization request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectorBonds {
    /// Industrial candidates.
    pub industrial: Vec<BondRecord>,
    /// Financial candidates.
    pub financial: Vec<BondRecord>,
    /// Utility candidates.
    pub utility: Vec<BondRecord>,
}

impl SectorBonds {
    /// Creates the candidate sets from explicit per-sector lists.
    #[must_use]
    pub fn new(
        industrial: Vec<BondRecord>,
        financial: Vec<BondRecord>,
        utility: Vec<BondRecord>,
    ) -> Self {
        Self {
            industrial,
            financial,
            utility,
        }
    }

    /// Partitions records by their own sector field.
    #[must_use]
    pub fn from_records(records: impl IntoIterator<Item = BondRecord>) -> Self {
        let mut bonds = Self::default();
        for record in records {
            bonds.bucket_mut(record.sector).push(record);
        }
        bonds
    }

    /// Returns the candidates of one sector.
    #[must_use]
    pub fn get(&self, sector: Sector) -> &[BondRecord] {
        match sector {
            Sector::Industrial => &self.industrial,
            Sector::Financial => &self.financial,
            Sector::Utility => &self.utility,
        }
    }

    fn bucket_mut(&mut self, sector: Sector) -> &mut Vec<BondRecord> {
        match sector {
            Sector::Industrial => &mut self.industrial,
            Sector::Financial => &mut self.financial,
            Sector::Utility => &mut self.utility,
        }
    }

    /// Iterates sectors in model order with their candidates.
    pub fn iter(&self) -> impl Iterator<Item = (Sector, &[BondRecord])> + '_ {
        Sector::all().iter().map(move |&s| (s, self.get(s)))
    }

    /// Iterates every candidate, industrial first, then financial, then utility.
    pub fn all_bonds(&self) -> impl Iterator<Item = &BondRecord> + '_ {
        self.industrial
            .iter()
            .chain(&self.financial)
            .chain(&self.utility)
    }

    /// Total number of candidates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.industrial.len() + self.financial.len() + self.utility.len()
    }

    /// Returns true if no sector has candidates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks that every record sits in its own sector bucket and that CUSIPs
    /// are unique across all buckets.
    pub fn validate(&self) -> BondoptResult<()> {
        let mut seen = HashSet::with_capacity(self.len());
        for (sector, bonds) in self.iter() {
            for bond in bonds {
                if bond.sector != sector {
                    return Err(BondoptError::invalid_bond(
                        &bond.cusip,
                        format!("{} bond placed in the {sector} bucket", bond.sector),
                    ));
                }
                if !seen.insert(bond.cusip.as_str()) {
                    return Err(BondoptError::duplicate_cusip(&bond.cusip));
                }
            }
        }
        Ok(())
    }
}
