/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Error types for population distribution

use thiserror::Error;

use crate::configuration::ConfigurationError;
use crate::formats::FormatError;

/// Errors that can occur while distributing populations
#[derive(Error, Debug)]
pub enum PopulationError {
    /// The occupation code of a population row cannot be decoded
    #[error("State {abako_id}: {source}")]
    Configuration {
        abako_id: u32,
        #[source]
        source: ConfigurationError,
    },

    /// No RDCA state has the configuration of a population row
    #[error("State {abako_id}: no RDCA state with key '{key}' for ion {ion}")]
    UnknownState { abako_id: u32, ion: u32, key: String },

    #[error("State {0} appears more than once in the population file")]
    DuplicateState(u32),

    #[error("Temperature must be positive and finite, got {0}")]
    InvalidTemperature(f64),

    #[error("Degeneracies sum to {total}, cannot weight populations")]
    InvalidWeights { total: f64 },

    #[error("Atomic data error: {0}")]
    Data(#[from] FormatError),
}

/// Result type for population operations
pub type Result<T> = std::result::Result<T, PopulationError>;
