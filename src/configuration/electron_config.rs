/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Electron configurations and their canonical labels
//!
//! A configuration is an ordered list of `(level, occupation)` pairs. Three
//! canonical labels are derived from it, with the same conventions the atomic
//! structure code uses for its level files:
//!
//! * `ncomplex` groups occupations by principal quantum number (`1*2.2*7`)
//! * `sname` groups by non-relativistic subshell and hides closed subshells (`2p5`)
//! * `name` lists relativistic levels and hides full ones (`2p+3`)
//!
//! The three labels joined by `-` form the correspondence key that links a
//! configuration to its RDCA level.

use std::fmt;

use super::errors::{ConfigurationError, Result};
use super::level::EnergyLevel;
use crate::utils::accumulate_ordered;

/// Access to the three canonical labels of a state or configuration
pub trait Labelled {
    fn ncomplex(&self) -> String;
    fn sname(&self) -> String;
    fn name(&self) -> String;

    /// `ncomplex-sname-name`, unique per RDCA state
    fn correspondence_key(&self) -> String {
        format!("{}-{}-{}", self.ncomplex(), self.sname(), self.name())
    }
}

/// Which canonical label to build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind {
    Ncomplex,
    Sname,
    Name,
}

/// An electron configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    occupations: Vec<(EnergyLevel, u32)>,
}

impl Configuration {
    /// Build a configuration, rejecting occupations above a level's degeneracy
    pub fn new(occupations: Vec<(EnergyLevel, u32)>) -> Result<Self> {
        let config = Self { occupations };
        if !config.is_valid() {
            return Err(ConfigurationError::InvalidConfiguration(format!(
                "{} exceeds a level degeneracy",
                config
            )));
        }
        Ok(config)
    }

    /// Every occupation fits in its level
    pub fn is_valid(&self) -> bool {
        self.occupations
            .iter()
            .all(|(level, occupation)| *occupation <= level.degeneracy())
    }

    pub fn occupations(&self) -> &[(EnergyLevel, u32)] {
        &self.occupations
    }

    pub fn is_empty(&self) -> bool {
        self.occupations.is_empty()
    }

    /// Total number of bound electrons
    pub fn electron_count(&self) -> u32 {
        self.occupations.iter().map(|(_, occupation)| occupation).sum()
    }

    /// Build one of the canonical labels
    pub fn label(&self, kind: LabelKind) -> String {
        let Some((last_level, last_occupation)) = self.occupations.last() else {
            return String::new();
        };

        match kind {
            LabelKind::Ncomplex => {
                let groups = accumulate_ordered(
                    self.occupations.iter().map(|(level, occ)| (level.n(), *occ)),
                );
                join_groups(groups.iter().map(|(n, occ)| format!("{}*{}", n, occ)))
            }
            LabelKind::Sname => {
                let groups = accumulate_ordered(
                    self.occupations
                        .iter()
                        .map(|(level, occ)| ((level.n(), level.l()), *occ)),
                );
                let open: Vec<String> = groups
                    .iter()
                    .filter(|((_, l), occ)| *occ != 4 * l + 2)
                    .map(|((n, l), occ)| format!("{}{}", subshell_label(*n, *l), occ))
                    .collect();
                if open.is_empty() {
                    return format!("{}{}", last_level.subshell(), last_occupation);
                }
                open.join(".")
            }
            LabelKind::Name => {
                let groups = accumulate_ordered(self.occupations.iter().copied());
                let open: Vec<String> = groups
                    .iter()
                    .filter(|(level, occ)| *occ != level.degeneracy())
                    .map(|(level, occ)| format!("{}{}", level, occ))
                    .collect();
                if open.is_empty() {
                    return format!("{}{}", last_level, last_occupation);
                }
                open.join(".")
            }
        }
    }
}

fn subshell_label(n: u32, l: u32) -> String {
    let letter = super::level::orbital_letter(l).unwrap_or('?');
    format!("{}{}", n, letter)
}

fn join_groups(parts: impl Iterator<Item = String>) -> String {
    parts.collect::<Vec<_>>().join(".")
}

impl Labelled for Configuration {
    fn ncomplex(&self) -> String {
        self.label(LabelKind::Ncomplex)
    }

    fn sname(&self) -> String {
        self.label(LabelKind::Sname)
    }

    fn name(&self) -> String {
        self.label(LabelKind::Name)
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .occupations
            .iter()
            .map(|(level, occ)| format!("({}, {})", level, occ))
            .collect();
        write!(f, "[{}]", parts.join(", "))
    }
}
