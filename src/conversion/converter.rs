/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! RDCA to fine-structure conversion of one transdata file

use std::path::Path;

use log::info;

use super::config::ConversionConfig;
use super::data_dir::AtomicDataDir;
use super::errors::Result;
use crate::formats::{read_populations, read_transdata, write_transdata, PopulationRow, Transdata};
use crate::population::{distribute_populations, CorrespondenceSource, PopulationTable};
use crate::transitions::{regenerate_transitions, EinsteinSource};

/// Per-ion atomic data needed by a conversion
pub trait AtomicDataSource: CorrespondenceSource + EinsteinSource {}

impl<T: CorrespondenceSource + EinsteinSource + ?Sized> AtomicDataSource for T {}

/// Counts reported after a conversion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionSummary {
    pub population_states: usize,
    pub population_records: usize,
    pub rdca_transitions: usize,
    pub fs_transitions: usize,
    pub bound_free: usize,
}

/// Converts transdata files against one atomic data source
pub struct Converter<S> {
    config: ConversionConfig,
    source: S,
}

impl Converter<AtomicDataDir> {
    /// Converter reading atomic data from `config.data_dir`
    pub fn from_config(config: ConversionConfig) -> Result<Self> {
        let source = AtomicDataDir::new(&config);
        Self::with_source(config, source)
    }
}

impl<S: AtomicDataSource> Converter<S> {
    pub fn with_source(config: ConversionConfig, source: S) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, source })
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    /// Split the population rows at the temperature of the transdata header
    pub fn distribute(&mut self, transdata: &Transdata, rows: &[PopulationRow]) -> Result<PopulationTable> {
        Ok(distribute_populations(
            rows,
            transdata.header.temperature,
            self.config.nuclear_charge,
            &mut self.source,
        )?)
    }

    /// Fine-structure version of `transdata`.
    ///
    /// The header and the bound-free rows are carried over unchanged.
    pub fn convert(&mut self, transdata: &Transdata, rows: &[PopulationRow]) -> Result<(Transdata, ConversionSummary)> {
        let populations = self.distribute(transdata, rows)?;
        let options = self.config.regenerate_options();
        let bound_bound =
            regenerate_transitions(&transdata.bound_bound, &populations, &options, &mut self.source)?;

        let summary = ConversionSummary {
            population_states: populations.state_count(),
            population_records: populations.len(),
            rdca_transitions: transdata.bound_bound.len(),
            fs_transitions: bound_bound.len(),
            bound_free: transdata.bound_free.len(),
        };

        let converted = Transdata {
            header: transdata.header.clone(),
            bound_bound,
            bound_free: transdata.bound_free.clone(),
        };
        Ok((converted, summary))
    }

    /// Read, convert and write one transdata file.
    ///
    /// Nothing is written to `output` unless every step succeeded.
    pub fn convert_file(&mut self, output: &Path, population: &Path, transdata: &Path) -> Result<ConversionSummary> {
        let input = read_transdata(transdata)?;
        let rows = read_populations(population)?;
        info!(
            "Converting {} ({} bound-bound, {} bound-free rows, T = {}) with {} population rows",
            transdata.display(),
            input.bound_bound.len(),
            input.bound_free.len(),
            input.header.temperature,
            rows.len()
        );

        let (converted, summary) = self.convert(&input, &rows)?;
        write_transdata(output, &converted)?;

        info!(
            "Wrote {}: {} FS transitions from {} RDCA transitions, {} population records",
            output.display(),
            summary.fs_transitions,
            summary.rdca_transitions,
            summary.population_records
        );
        Ok(summary)
    }
}

/// Convert one transdata file using the atomic data directory of `config`
pub fn convert_transdata_file(
    output: &Path,
    population: &Path,
    transdata: &Path,
    config: &ConversionConfig,
) -> Result<ConversionSummary> {
    let mut converter = Converter::from_config(config.clone())?;
    converter.convert_file(output, population, transdata)
}
