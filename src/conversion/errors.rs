/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Error types for transdata conversion

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::formats::FormatError;
use crate::population::PopulationError;
use crate::transitions::TransitionError;

/// Errors that can occur while converting a transdata file
#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Invalid conversion settings: {0}")]
    InvalidConfig(String),

    #[error("Cannot read settings file {path}: {source}")]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot parse settings file {path}: {source}")]
    ConfigSyntax {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Population(#[from] PopulationError),

    #[error(transparent)]
    Transition(#[from] TransitionError),
}

/// Result type for conversion operations
pub type Result<T> = std::result::Result<T, ConversionError>;
