/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Settings for transdata conversion

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::errors::{ConversionError, Result};
use crate::transitions::{EinsteinFallback, LevelNumbering, RegenerateOptions};

/// How the ion number in atomic data file names is derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IonLabel {
    /// The ion charge itself
    #[default]
    Charge,
    /// Number of bound electrons, nuclear charge minus ion charge
    BoundElectrons,
}

impl IonLabel {
    /// Ion number written in a file name
    pub fn apply(self, ion: u32, nuclear_charge: u32) -> u32 {
        match self {
            IonLabel::Charge => ion,
            IonLabel::BoundElectrons => nuclear_charge.saturating_sub(ion),
        }
    }
}

/// Conversion settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// Element symbol used in atomic data file names
    pub element: String,
    /// Charge of the bare nucleus
    pub nuclear_charge: u32,
    /// Directory holding the `.lev` and `.tr` files
    pub data_dir: PathBuf,
    /// Trailing calculation index of atomic data file names
    pub ci: u32,
    /// Ion number of `.lev` file names
    pub level_ion_label: IonLabel,
    /// Ion number of `.tr` file names
    pub transition_ion_label: IonLabel,
    pub einstein_fallback: EinsteinFallback,
    pub level_numbering: LevelNumbering,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            element: "Ar".to_string(),
            nuclear_charge: 18,
            data_dir: PathBuf::from("data/atomicdata"),
            ci: 0,
            level_ion_label: IonLabel::Charge,
            transition_ion_label: IonLabel::Charge,
            einstein_fallback: EinsteinFallback::Zero,
            level_numbering: LevelNumbering::Sequential,
        }
    }
}

impl ConversionConfig {
    /// Load settings from a JSON file; missing fields take their defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ConversionError::ConfigFile {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self =
            serde_json::from_str(&text).map_err(|source| ConversionError::ConfigSyntax {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.element.trim().is_empty() {
            return Err(ConversionError::InvalidConfig(
                "element symbol is empty".to_string(),
            ));
        }
        if self.nuclear_charge == 0 {
            return Err(ConversionError::InvalidConfig(
                "nuclear charge must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Ion number used in level file names
    pub fn level_file_ion(&self, ion: u32) -> u32 {
        self.level_ion_label.apply(ion, self.nuclear_charge)
    }

    /// Ion number used in transition table file names
    pub fn transition_file_ion(&self, ion: u32) -> u32 {
        self.transition_ion_label.apply(ion, self.nuclear_charge)
    }

    pub fn regenerate_options(&self) -> RegenerateOptions {
        RegenerateOptions {
            fallback: self.einstein_fallback,
            numbering: self.level_numbering,
        }
    }
}
