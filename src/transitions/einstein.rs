/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Einstein A-coefficients of fine-structure transitions

use std::collections::HashMap;

use crate::formats::{self, FsTransition};

/// Lookup key of a transition: zero-padded `upper-lower`
pub fn einstein_key(upper: u32, lower: u32) -> String {
    format!("{:05}-{:05}", upper, lower)
}

/// Einstein coefficients of one ion keyed by [`einstein_key`]
#[derive(Debug, Clone, Default)]
pub struct EinsteinLookup {
    coefficients: HashMap<String, f64>,
}

impl EinsteinLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a transition table; the first row of a repeated pair wins
    pub fn from_transitions(transitions: &[FsTransition]) -> Self {
        let mut lookup = Self::new();
        for transition in transitions {
            lookup
                .coefficients
                .entry(einstein_key(transition.upper, transition.lower))
                .or_insert(transition.einstein);
        }
        lookup
    }

    /// Coefficient of the transition `lower -> upper`, if tabulated
    pub fn get(&self, lower: u32, upper: u32) -> Option<f64> {
        self.coefficients.get(&einstein_key(upper, lower)).copied()
    }

    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }
}

impl From<HashMap<String, f64>> for EinsteinLookup {
    fn from(coefficients: HashMap<String, f64>) -> Self {
        Self { coefficients }
    }
}

/// Supplies the fine-structure Einstein coefficients of an ion
pub trait EinsteinSource {
    fn einstein_lookup(&mut self, ion: u32) -> formats::Result<EinsteinLookup>;
}

/// Coefficient of `lower -> upper`, zero when the table has no such line
pub fn get_einstein_coef(lower: u32, upper: u32, lookup: &EinsteinLookup) -> f64 {
    lookup.get(lower, upper).unwrap_or(0.0)
}

/// Scale an RDCA coefficient to a fine-structure pair.
///
/// `A_fs = (dE_fs / dE_rdca)^3 (g_u / g_u,rdca) (g_l,rdca / g_l) A_rdca`,
/// zero when the RDCA energy or a degeneracy vanishes.
pub fn compute_einstein_coef(
    delta_e_rdca: f64,
    delta_e_fs: f64,
    ldeg: f64,
    udeg: f64,
    ldeg_rdca: f64,
    udeg_rdca: f64,
    ein_rdca: f64,
) -> f64 {
    if delta_e_rdca == 0.0 || udeg_rdca == 0.0 || ldeg == 0.0 {
        return 0.0;
    }
    (delta_e_fs / delta_e_rdca).powi(3) * (udeg / udeg_rdca) * (ldeg_rdca / ldeg) * ein_rdca
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_key_layout() {
        assert_eq!(einstein_key(5, 2), "00005-00002");
        assert_eq!(einstein_key(123456, 7), "123456-00007");
    }

    #[test]
    fn test_lookup_with_zero_fallback() {
        let mut coefficients = HashMap::new();
        coefficients.insert("00005-00002".to_string(), 1.23e8);
        let lookup = EinsteinLookup::from(coefficients);

        assert_relative_eq!(get_einstein_coef(2, 5, &lookup), 1.23e8);
        assert_relative_eq!(get_einstein_coef(2, 99, &lookup), 0.0);
        // direction matters
        assert_relative_eq!(get_einstein_coef(5, 2, &lookup), 0.0);
    }

    #[test]
    fn test_first_duplicate_wins() {
        let transitions = [
            FsTransition { upper: 3, lower: 1, einstein: 4.0e9 },
            FsTransition { upper: 3, lower: 1, einstein: 1.0e2 },
        ];
        let lookup = EinsteinLookup::from_transitions(&transitions);
        assert_eq!(lookup.len(), 1);
        assert_eq!(lookup.get(1, 3), Some(4.0e9));
    }

    #[test]
    fn test_scaling_relation() {
        // same energy and degeneracies give the RDCA coefficient back
        assert_relative_eq!(compute_einstein_coef(10.0, 10.0, 2.0, 6.0, 2.0, 6.0, 3.0e8), 3.0e8);
        // doubling the FS energy multiplies by eight
        assert_relative_eq!(compute_einstein_coef(10.0, 20.0, 2.0, 6.0, 2.0, 6.0, 1.0), 8.0);
        assert_relative_eq!(compute_einstein_coef(0.0, 20.0, 2.0, 6.0, 2.0, 6.0, 1.0), 0.0);
    }
}
