/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Error types for transition regeneration

use thiserror::Error;

use crate::formats::FormatError;

/// Errors that can occur while regenerating transitions
#[derive(Error, Debug)]
pub enum TransitionError {
    #[error("Fine-structure transition data for ion {ion}: {source}")]
    Data {
        ion: u32,
        #[source]
        source: FormatError,
    },
}

/// Result type for transition operations
pub type Result<T> = std::result::Result<T, TransitionError>;
