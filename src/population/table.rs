/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Fine-structure population records indexed by kinetics-solver state

use std::collections::HashMap;
use std::ops::Range;

use super::errors::{PopulationError, Result};

/// What a population record stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// A fine-structure sublevel of an RDCA state
    Sublevel,
    /// Stand-in for an RDCA state without FS correspondents; carries no population
    Placeholder,
    /// The bare nucleus, copied through unchanged
    BareNucleus,
}

/// Population of one fine-structure sublevel
#[derive(Debug, Clone, PartialEq)]
pub struct PopulationRecord {
    /// Position in the flattened table; dense over all records
    pub index: usize,
    pub abako_id: u32,
    pub ion: u32,
    pub rdca_id: u32,
    pub fs_id: u32,
    pub energy: f64,
    /// Degeneracy after correction to the RDCA total
    pub degeneracy: f64,
    pub population: f64,
    pub kind: RecordKind,
}

/// All population records, grouped contiguously by abako id
#[derive(Debug, Clone, Default)]
pub struct PopulationTable {
    records: Vec<PopulationRecord>,
    spans: HashMap<u32, Range<usize>>,
}

impl PopulationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the records of one abako state; `index` is assigned here
    pub(crate) fn push_state(
        &mut self,
        abako_id: u32,
        records: impl IntoIterator<Item = PopulationRecord>,
    ) -> Result<()> {
        if self.spans.contains_key(&abako_id) {
            return Err(PopulationError::DuplicateState(abako_id));
        }

        let start = self.records.len();
        for mut record in records {
            record.index = self.records.len();
            self.records.push(record);
        }
        self.spans.insert(abako_id, start..self.records.len());
        Ok(())
    }

    /// Every record in table order
    pub fn records(&self) -> &[PopulationRecord] {
        &self.records
    }

    /// Records of one abako state, placeholders included
    pub fn get(&self, abako_id: u32) -> Option<&[PopulationRecord]> {
        self.spans
            .get(&abako_id)
            .map(|span| &self.records[span.clone()])
    }

    /// Records of one abako state that take part in transitions.
    ///
    /// Empty for unknown ids and for states represented by a placeholder.
    pub fn sublevels(&self, abako_id: u32) -> &[PopulationRecord] {
        match self.get(abako_id) {
            Some(records) if records.iter().all(|r| r.kind != RecordKind::Placeholder) => records,
            _ => &[],
        }
    }

    pub fn contains(&self, abako_id: u32) -> bool {
        self.spans.contains_key(&abako_id)
    }

    /// Total population of one abako state
    pub fn total_population(&self, abako_id: u32) -> f64 {
        self.get(abako_id)
            .map(|records| records.iter().map(|r| r.population).sum())
            .unwrap_or(0.0)
    }

    /// Number of abako states
    pub fn state_count(&self) -> usize {
        self.spans.len()
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
