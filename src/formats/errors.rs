/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Error types for atomic data file reading and writing

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing data files
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Parse error in {path} line {line}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("Missing '-1' terminator of the {section} section in {path}")]
    MissingSentinel { path: PathBuf, section: String },

    #[error("No plasma conditions line in the header of {path}")]
    MissingConditions { path: PathBuf },

    #[error("Invalid temperature {value} in {path}")]
    InvalidTemperature { path: PathBuf, value: f64 },
}

impl FormatError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        FormatError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for file format operations
pub type Result<T> = std::result::Result<T, FormatError>;
