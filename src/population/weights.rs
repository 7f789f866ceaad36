/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Degeneracy correction and Boltzmann splitting of populations

use super::errors::{PopulationError, Result};

/// Rescale FS degeneracies so they sum to the RDCA degeneracy.
///
/// `g_i' = g_i * g_rdca / sum(g)`
pub fn correct_degeneracies(rdca_degeneracy: f64, nominal: &[f64]) -> Result<Vec<f64>> {
    let total: f64 = nominal.iter().sum();
    if !(total.is_finite() && total > 0.0) {
        return Err(PopulationError::InvalidWeights { total });
    }

    let scale = rdca_degeneracy / total;
    Ok(nominal.iter().map(|g| g * scale).collect())
}

/// Split `population` over sublevels with weights `g_i exp(-(E_i - E_min) / T)`.
///
/// Energies are taken relative to the lowest sublevel so the exponentials
/// stay within range however far apart the levels are.
pub fn boltzmann_split(
    population: f64,
    degeneracies: &[f64],
    energies: &[f64],
    temperature: f64,
) -> Result<Vec<f64>> {
    if !(temperature.is_finite() && temperature > 0.0) {
        return Err(PopulationError::InvalidTemperature(temperature));
    }
    if degeneracies.is_empty() {
        return Ok(Vec::new());
    }

    let min_energy = energies.iter().copied().fold(f64::INFINITY, f64::min);
    let weights: Vec<f64> = degeneracies
        .iter()
        .zip(energies)
        .map(|(g, e)| g * (-(e - min_energy) / temperature).exp())
        .collect();

    let total: f64 = weights.iter().sum();
    if !(total.is_finite() && total > 0.0) {
        return Err(PopulationError::InvalidWeights { total });
    }

    Ok(weights.iter().map(|w| population * w / total).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn test_correction_matches_rdca_degeneracy() {
        let corrected = correct_degeneracies(12.0, &[3.0, 5.0, 1.0, 1.0]).unwrap();
        assert_relative_eq!(corrected.iter().sum::<f64>(), 12.0, epsilon = 1e-12);
        // ratios between sublevels are untouched
        assert_relative_eq!(corrected[1] / corrected[0], 5.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_correction_rejects_zero_sum() {
        assert!(correct_degeneracies(4.0, &[]).is_err());
        assert!(correct_degeneracies(4.0, &[0.0, 0.0]).is_err());
    }

    #[rstest]
    #[case(0.01)]
    #[case(1.0)]
    #[case(50.0)]
    #[case(1.0e6)]
    fn test_split_conserves_population(#[case] temperature: f64) {
        let split = boltzmann_split(100.0, &[2.0, 4.0, 6.0], &[10.0, 12.0, 11.0], temperature).unwrap();
        assert_relative_eq!(split.iter().sum::<f64>(), 100.0, max_relative = 1e-9);
        assert!(split.iter().all(|p| *p >= 0.0));
    }

    #[test]
    fn test_split_favours_lower_level() {
        let split = boltzmann_split(100.0, &[2.0, 4.0], &[10.0, 12.0], 1.0).unwrap();
        // 2 : 4 e^-2
        let expected_low = 100.0 * 2.0 / (2.0 + 4.0 * (-2.0f64).exp());
        assert_relative_eq!(split[0], expected_low, max_relative = 1e-12);
        assert!(split[0] > split[1]);
    }

    #[test]
    fn test_cold_limit_fills_ground_sublevel() {
        let split = boltzmann_split(7.0, &[5.0, 1.0, 3.0], &[2.0, 1.0, 4.0], 1.0e-6).unwrap();
        assert_relative_eq!(split[1], 7.0);
        assert_relative_eq!(split[0], 0.0);
        assert_relative_eq!(split[2], 0.0);
    }

    #[test]
    fn test_hot_limit_follows_degeneracy() {
        let split = boltzmann_split(6.0, &[1.0, 2.0], &[0.0, 1.0], 1.0e12).unwrap();
        assert_relative_eq!(split[0], 2.0, max_relative = 1e-9);
        assert_relative_eq!(split[1], 4.0, max_relative = 1e-9);
    }

    #[test]
    fn test_wide_energy_gap_does_not_underflow() {
        let split = boltzmann_split(1.0, &[1.0, 1.0], &[1.0e5, 1.0e5 + 1.0], 1.0).unwrap();
        assert!(split.iter().all(|p| p.is_finite()));
        assert_relative_eq!(split.iter().sum::<f64>(), 1.0, max_relative = 1e-12);
    }

    #[test]
    fn test_invalid_temperature() {
        assert!(boltzmann_split(1.0, &[1.0], &[0.0], 0.0).is_err());
        assert!(boltzmann_split(1.0, &[1.0], &[0.0], -3.0).is_err());
        assert!(boltzmann_split(1.0, &[1.0], &[0.0], f64::NAN).is_err());
    }
}
