/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Distribution of kinetics-solver populations over fine-structure sublevels

use log::{debug, warn};

use super::errors::{PopulationError, Result};
use super::table::{PopulationRecord, PopulationTable, RecordKind};
use super::weights::{boltzmann_split, correct_degeneracies};
use crate::configuration::{decode_positional_config, Labelled};
use crate::corresp::{Bucket, CorrespondenceMap};
use crate::formats::{self, PopulationRow};
use crate::utils::PerIonCache;

/// Supplies the RDCA/FS correspondence of an ion
pub trait CorrespondenceSource {
    fn correspondence(&mut self, ion: u32) -> formats::Result<CorrespondenceMap>;
}

/// Split the population of every row over the FS sublevels of its RDCA state.
///
/// Rows are expected grouped by ion, in ascending order; the correspondence
/// is rebuilt only when the ion changes. A row at `nuclear_charge` (the bare
/// nucleus) is copied through and ends the table.
pub fn distribute_populations<S: CorrespondenceSource + ?Sized>(
    rows: &[PopulationRow],
    temperature: f64,
    nuclear_charge: u32,
    source: &mut S,
) -> Result<PopulationTable> {
    if !(temperature.is_finite() && temperature > 0.0) {
        return Err(PopulationError::InvalidTemperature(temperature));
    }

    let mut table = PopulationTable::new();
    let mut cache: PerIonCache<CorrespondenceMap> = PerIonCache::new();
    let mut previous_ion: Option<u32> = None;

    for row in rows {
        if row.ion == nuclear_charge {
            table.push_state(row.abako_id, [bare_nucleus_record(row)])?;
            break;
        }

        if previous_ion.is_some_and(|ion| row.ion < ion) {
            warn!(
                "Population rows are not sorted by ion (state {} has ion {} after ion {:?})",
                row.abako_id, row.ion, previous_ion
            );
        }
        previous_ion = Some(row.ion);

        let correspondence = cache.get_or_try_load(row.ion, |ion| {
            debug!("Building correspondence for ion {}", ion);
            source.correspondence(ion)
        })?;

        let config = decode_positional_config(&row.configuration).map_err(|source| {
            PopulationError::Configuration {
                abako_id: row.abako_id,
                source,
            }
        })?;
        let key = config.correspondence_key();
        let bucket = correspondence
            .get(&key)
            .ok_or_else(|| PopulationError::UnknownState {
                abako_id: row.abako_id,
                ion: row.ion,
                key: key.clone(),
            })?;

        let records = state_records(row, bucket, temperature)?;
        table.push_state(row.abako_id, records)?;
    }

    debug!(
        "Distributed {} states over {} FS records ({} correspondence builds)",
        table.state_count(),
        table.len(),
        cache.loads()
    );
    Ok(table)
}

/// FS records of one population row
fn state_records(row: &PopulationRow, bucket: &Bucket, temperature: f64) -> Result<Vec<PopulationRecord>> {
    if !bucket.has_members() {
        warn!(
            "State {}: RDCA state {} ({}) has no FS correspondents, population set to zero",
            row.abako_id, bucket.rdca.id, bucket.rdca.name
        );
        return Ok(vec![PopulationRecord {
            index: 0,
            abako_id: row.abako_id,
            ion: row.ion,
            rdca_id: bucket.rdca.id,
            fs_id: 0,
            energy: bucket.rdca.energy,
            degeneracy: bucket.rdca.degeneracy,
            population: 0.0,
            kind: RecordKind::Placeholder,
        }]);
    }

    let nominal: Vec<f64> = bucket.members.iter().map(|m| m.state.degeneracy).collect();
    let energies: Vec<f64> = bucket.members.iter().map(|m| m.state.energy).collect();
    let degeneracies = correct_degeneracies(bucket.rdca.degeneracy, &nominal)?;
    let populations = boltzmann_split(row.population, &degeneracies, &energies, temperature)?;

    Ok(bucket
        .members
        .iter()
        .zip(degeneracies)
        .zip(populations)
        .map(|((member, degeneracy), population)| PopulationRecord {
            index: 0,
            abako_id: row.abako_id,
            ion: row.ion,
            rdca_id: member.rdca_id,
            fs_id: member.state.id,
            energy: member.state.energy,
            degeneracy,
            population,
            kind: RecordKind::Sublevel,
        })
        .collect())
}

fn bare_nucleus_record(row: &PopulationRow) -> PopulationRecord {
    PopulationRecord {
        index: 0,
        abako_id: row.abako_id,
        ion: row.ion,
        rdca_id: 0,
        fs_id: 0,
        energy: 0.0,
        degeneracy: 1.0,
        population: row.population,
        kind: RecordKind::BareNucleus,
    }
}
