/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Error types for electron configurations

use thiserror::Error;

/// Errors raised while building or decoding an electron configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// An occupation exceeds the degeneracy of its level
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Quantum numbers outside their allowed range
    #[error("Invalid energy level: n={n}, l={l}")]
    InvalidLevel { n: u32, l: u32 },

    /// A positional occupation code that cannot be read
    #[error("Invalid occupation code '{code}': {reason}")]
    InvalidCode { code: String, reason: String },
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigurationError>;
