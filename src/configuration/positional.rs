/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Positional occupation codes written by the population kinetics solver
//!
//! Character `k` of a code is the occupation of the k-th level in the fixed
//! enumeration n = 1..=10, l = 0..n, with `(n, l, -)` before `(n, l, +)` for
//! l > 0: `1s+ 2s+ 2p- 2p+ 3s+ 3p- 3p+ 3d- 3d+ ...`.

use once_cell::sync::Lazy;

use super::electron_config::Configuration;
use super::errors::{ConfigurationError, Result};
use super::level::{EnergyLevel, SpinOrbit};

/// Highest principal quantum number covered by the codes
pub const MAX_PRINCIPAL: u32 = 10;

static POSITIONAL_LEVELS: Lazy<Vec<EnergyLevel>> = Lazy::new(|| {
    let mut levels = Vec::new();
    for n in 1..=MAX_PRINCIPAL {
        for l in 0..n {
            if l != 0 {
                levels.push(EnergyLevel::new(n, l, SpinOrbit::Minus));
            }
            levels.push(EnergyLevel::new(n, l, SpinOrbit::Plus));
        }
    }
    levels.into_iter().flatten().collect()
});

/// The level table in code order
pub fn positional_levels() -> &'static [EnergyLevel] {
    &POSITIONAL_LEVELS
}

/// Decode a positional occupation code into a configuration.
///
/// Positions with zero occupation are left out. Fails with
/// [`ConfigurationError::InvalidConfiguration`] when an occupation exceeds its
/// level's degeneracy.
pub fn decode_positional_config(code: &str) -> Result<Configuration> {
    let code = code.trim();
    let levels = positional_levels();

    if code.chars().count() > levels.len() {
        return Err(ConfigurationError::InvalidCode {
            code: code.to_string(),
            reason: format!("longer than the {} known levels", levels.len()),
        });
    }

    let mut occupations = Vec::new();
    for (level, ch) in levels.iter().zip(code.chars()) {
        let occupation = ch.to_digit(10).ok_or_else(|| ConfigurationError::InvalidCode {
            code: code.to_string(),
            reason: format!("'{}' is not a decimal occupation", ch),
        })?;
        if occupation > 0 {
            occupations.push((*level, occupation));
        }
    }

    Configuration::new(occupations)
}
