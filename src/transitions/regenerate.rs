/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Expansion of RDCA bound-bound transitions into fine-structure pairs

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::einstein::{compute_einstein_coef, EinsteinLookup, EinsteinSource};
use super::errors::{Result, TransitionError};
use crate::formats::BoundBoundRow;
use crate::population::{PopulationRecord, PopulationTable};
use crate::utils::{cartesian_product, PerIonCache};

/// Coefficient used when a pair is missing from the FS transition table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EinsteinFallback {
    /// No computed line, coefficient 0
    #[default]
    Zero,
    /// Scale the RDCA coefficient with [`compute_einstein_coef`]
    RdcaScaling,
}

/// What the `low`/`upp` columns of regenerated rows hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelNumbering {
    /// Position of the sublevel in the population table
    #[default]
    Sequential,
    /// Level index of the FS level file
    FsId,
}

/// Options of [`regenerate_transitions`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegenerateOptions {
    pub fallback: EinsteinFallback,
    pub numbering: LevelNumbering,
}

/// Expand every RDCA bound-bound row into its FS sublevel pairs.
///
/// Rows keep their input order and each expansion is contiguous. The FS
/// transition table is reloaded only when the ion changes.
pub fn regenerate_transitions<S: EinsteinSource + ?Sized>(
    rows: &[BoundBoundRow],
    populations: &PopulationTable,
    options: &RegenerateOptions,
    source: &mut S,
) -> Result<Vec<BoundBoundRow>> {
    let mut cache: PerIonCache<EinsteinLookup> = PerIonCache::new();
    let mut expanded = Vec::new();

    for row in rows {
        let lookup = cache.get_or_try_load(row.ion, |ion| {
            debug!("Loading fine-structure transitions for ion {}", ion);
            source
                .einstein_lookup(ion)
                .map_err(|source| TransitionError::Data { ion, source })
        })?;

        for abako_id in [row.low, row.upp] {
            if !populations.contains(abako_id) {
                warn!(
                    "Transition {} -> {} of ion {} references unknown state {}",
                    row.low, row.upp, row.ion, abako_id
                );
            }
        }

        expanded.extend(expand_transition(row, populations, lookup, options));
    }

    debug!(
        "Expanded {} RDCA transitions into {} FS transitions",
        rows.len(),
        expanded.len()
    );
    Ok(expanded)
}

/// FS rows of one RDCA transition, lower sublevels outer and upper inner
pub fn expand_transition(
    row: &BoundBoundRow,
    populations: &PopulationTable,
    lookup: &EinsteinLookup,
    options: &RegenerateOptions,
) -> Vec<BoundBoundRow> {
    let lower = populations.sublevels(row.low);
    let upper = populations.sublevels(row.upp);

    cartesian_product(lower, upper)
        .map(|(low, upp)| {
            let (low, upp) = if upp.energy < low.energy { (upp, low) } else { (low, upp) };
            let delta_e = upp.energy - low.energy;

            let ein = match (lookup.get(low.fs_id, upp.fs_id), options.fallback) {
                (Some(ein), _) => ein,
                (None, EinsteinFallback::Zero) => 0.0,
                (None, EinsteinFallback::RdcaScaling) => compute_einstein_coef(
                    row.delta_e,
                    delta_e,
                    low.degeneracy,
                    upp.degeneracy,
                    row.ldeg,
                    row.udeg,
                    row.ein,
                ),
            };

            BoundBoundRow {
                ion: row.ion,
                low: level_number(low, options.numbering),
                upp: level_number(upp, options.numbering),
                ldeg: low.degeneracy,
                udeg: upp.degeneracy,
                lpop: low.population,
                upop: upp.population,
                delta_e,
                ein,
                dop: row.dop,
                voi: row.voi,
                sta: row.sta.clone(),
            }
        })
        .collect()
}

fn level_number(record: &PopulationRecord, numbering: LevelNumbering) -> u32 {
    match numbering {
        LevelNumbering::Sequential => record.index as u32,
        LevelNumbering::FsId => record.fs_id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats;
    use crate::population::RecordKind;
    use crate::transitions::get_einstein_coef;
    use approx::assert_relative_eq;
    use std::collections::HashMap;

    struct Lookups {
        tables: HashMap<u32, HashMap<String, f64>>,
        loads: usize,
    }

    impl EinsteinSource for Lookups {
        fn einstein_lookup(&mut self, ion: u32) -> formats::Result<EinsteinLookup> {
            self.loads += 1;
            Ok(EinsteinLookup::from(
                self.tables.get(&ion).cloned().unwrap_or_default(),
            ))
        }
    }

    fn record(abako_id: u32, fs_id: u32, energy: f64, degeneracy: f64, population: f64) -> PopulationRecord {
        PopulationRecord {
            index: 0,
            abako_id,
            ion: 16,
            rdca_id: abako_id,
            fs_id,
            energy,
            degeneracy,
            population,
            kind: RecordKind::Sublevel,
        }
    }

    /// State 1: one ground sublevel. State 2: sublevels at 10 and 12.
    /// State 3: sublevels at 11 and 9, the second below state 2's first.
    fn populations() -> PopulationTable {
        let mut table = PopulationTable::new();
        table.push_state(1, vec![record(1, 0, 0.0, 1.0, 5.0)]).unwrap();
        table
            .push_state(2, vec![record(2, 1, 10.0, 4.0 / 3.0, 80.0), record(2, 2, 12.0, 8.0 / 3.0, 20.0)])
            .unwrap();
        table
            .push_state(3, vec![record(3, 3, 11.0, 2.0, 1.0), record(3, 4, 9.0, 2.0, 2.0)])
            .unwrap();
        table
            .push_state(
                4,
                vec![PopulationRecord {
                    kind: RecordKind::Placeholder,
                    ..record(4, 0, 20.0, 4.0, 0.0)
                }],
            )
            .unwrap();
        table
    }

    fn rdca_row(ion: u32, low: u32, upp: u32) -> BoundBoundRow {
        BoundBoundRow {
            ion,
            low,
            upp,
            ldeg: 1.0,
            udeg: 4.0,
            lpop: 5.0,
            upop: 100.0,
            delta_e: 11.0,
            ein: 2.0e12,
            dop: 0.1,
            voi: 0.002,
            sta: "G".to_string(),
        }
    }

    fn lookups() -> Lookups {
        let mut table = HashMap::new();
        table.insert("00001-00000".to_string(), 1.0e12);
        table.insert("00001-00004".to_string(), 3.0e5);
        let mut tables = HashMap::new();
        tables.insert(16, table);
        Lookups { tables, loads: 0 }
    }

    #[test]
    fn test_cartesian_expansion() {
        let table = populations();
        let mut source = lookups();
        let rows = regenerate_transitions(&[rdca_row(16, 1, 2)], &table, &RegenerateOptions::default(), &mut source)
            .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!((rows[0].low, rows[0].upp), (0, 1));
        assert_eq!((rows[1].low, rows[1].upp), (0, 2));
        assert_relative_eq!(rows[0].delta_e, 10.0);
        assert_relative_eq!(rows[0].ein, 1.0e12);
        // no FS line for the second sublevel
        assert_relative_eq!(rows[1].ein, 0.0);
        assert_relative_eq!(rows[1].upop, 20.0);
        assert_eq!(rows[1].sta, "G");
        assert_relative_eq!(rows[1].dop, 0.1);
    }

    #[test]
    fn test_pairs_reordered_by_energy() {
        let table = populations();
        let mut source = lookups();
        let rows = regenerate_transitions(&[rdca_row(16, 2, 3)], &table, &RegenerateOptions::default(), &mut source)
            .unwrap();

        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|r| r.delta_e >= 0.0));

        // (fs 1 at 10, fs 4 at 9) swaps so fs 4 is the lower level
        let swapped = &rows[1];
        assert_eq!((swapped.low, swapped.upp), (4, 1));
        assert_relative_eq!(swapped.ldeg, 2.0);
        assert_relative_eq!(swapped.lpop, 2.0);
        assert_relative_eq!(swapped.upop, 80.0);
        assert_relative_eq!(swapped.delta_e, 1.0);
        assert_relative_eq!(swapped.ein, 3.0e5);
    }

    #[test]
    fn test_fs_id_numbering() {
        let table = populations();
        let mut source = lookups();
        let options = RegenerateOptions {
            numbering: LevelNumbering::FsId,
            ..Default::default()
        };
        let rows = regenerate_transitions(&[rdca_row(16, 2, 3)], &table, &options, &mut source).unwrap();
        assert_eq!((rows[1].low, rows[1].upp), (4, 1));
        assert_eq!((rows[0].low, rows[0].upp), (1, 3));
    }

    #[test]
    fn test_placeholder_and_unknown_states_expand_to_nothing() {
        let table = populations();
        let mut source = lookups();
        let rows = regenerate_transitions(
            &[rdca_row(16, 1, 4), rdca_row(16, 1, 77)],
            &table,
            &RegenerateOptions::default(),
            &mut source,
        )
        .unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_lookup_loaded_once_per_ion() {
        let table = populations();
        let mut source = lookups();
        let input = [rdca_row(16, 1, 2), rdca_row(16, 2, 3), rdca_row(17, 1, 2), rdca_row(17, 1, 3)];
        let rows = regenerate_transitions(&input, &table, &RegenerateOptions::default(), &mut source).unwrap();

        assert_eq!(source.loads, 2);
        assert_eq!(rows.len(), 2 + 4 + 2 + 2);
        // ion 17 has no FS table
        assert!(rows[6..].iter().all(|r| r.ein == 0.0 && r.ion == 17));
    }

    #[test]
    fn test_scaling_fallback() {
        let table = populations();
        let mut source = lookups();
        let options = RegenerateOptions {
            fallback: EinsteinFallback::RdcaScaling,
            ..Default::default()
        };
        let rows = regenerate_transitions(&[rdca_row(16, 1, 2)], &table, &options, &mut source).unwrap();

        // tabulated pair is untouched
        assert_relative_eq!(rows[0].ein, 1.0e12);
        let expected = compute_einstein_coef(11.0, 12.0, 1.0, 8.0 / 3.0, 1.0, 4.0, 2.0e12);
        assert_relative_eq!(rows[1].ein, expected, max_relative = 1e-12);
        assert!(get_einstein_coef(0, 2, &EinsteinLookup::new()) == 0.0);
    }
}
