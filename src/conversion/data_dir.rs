/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Atomic data files on disk, one set per ion

use std::path::PathBuf;

use log::debug;

use super::config::ConversionConfig;
use crate::corresp::{build_correspondence, CorrespondenceMap};
use crate::formats::{self, read_fs_transitions, read_levels};
use crate::population::CorrespondenceSource;
use crate::transitions::{EinsteinLookup, EinsteinSource};

/// Level scheme of an atomic data file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnergyScheme {
    Rdca,
    Fs,
}

impl EnergyScheme {
    pub fn tag(self) -> &'static str {
        match self {
            EnergyScheme::Rdca => "RDCA",
            EnergyScheme::Fs => "FS",
        }
    }
}

/// Atomic data directory laid out as `<elem>_<ion>_<scheme>_<ci>.{lev,tr}`
#[derive(Debug, Clone)]
pub struct AtomicDataDir {
    config: ConversionConfig,
}

impl AtomicDataDir {
    pub fn new(config: &ConversionConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    fn path(&self, file_ion: u32, scheme: EnergyScheme, extension: &str) -> PathBuf {
        self.config.data_dir.join(format!(
            "{}_{}_{}_{}.{}",
            self.config.element,
            file_ion,
            scheme.tag(),
            self.config.ci,
            extension
        ))
    }

    /// Level file of an ion
    pub fn level_path(&self, ion: u32, scheme: EnergyScheme) -> PathBuf {
        self.path(self.config.level_file_ion(ion), scheme, "lev")
    }

    /// Fine-structure transition table of an ion
    pub fn transition_path(&self, ion: u32) -> PathBuf {
        self.path(self.config.transition_file_ion(ion), EnergyScheme::Fs, "tr")
    }
}

impl CorrespondenceSource for AtomicDataDir {
    fn correspondence(&mut self, ion: u32) -> formats::Result<CorrespondenceMap> {
        let rdca_path = self.level_path(ion, EnergyScheme::Rdca);
        let fs_path = self.level_path(ion, EnergyScheme::Fs);
        debug!(
            "Reading levels of ion {} from {} and {}",
            ion,
            rdca_path.display(),
            fs_path.display()
        );

        let rdca = read_levels(&rdca_path)?;
        let fs = read_levels(&fs_path)?;
        Ok(build_correspondence(&rdca, &fs))
    }
}

impl EinsteinSource for AtomicDataDir {
    fn einstein_lookup(&mut self, ion: u32) -> formats::Result<EinsteinLookup> {
        let path = self.transition_path(ion);
        debug!("Reading FS transitions of ion {} from {}", ion, path.display());
        let transitions = read_fs_transitions(&path)?;
        Ok(EinsteinLookup::from_transitions(&transitions))
    }
}
