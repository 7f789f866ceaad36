/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Electron configuration model
//!
//! Energy levels, configurations built from them, the canonical labels used
//! as correspondence keys, and decoding of the kinetics solver's positional
//! occupation codes.

mod electron_config;
mod errors;
mod level;
mod positional;

pub use electron_config::{Configuration, LabelKind, Labelled};
pub use errors::{ConfigurationError, Result};
pub use level::{orbital_letter, orbital_number, EnergyLevel, SpinOrbit, ORBITAL_LETTERS};
pub use positional::{decode_positional_config, positional_levels, MAX_PRINCIPAL};
