/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Relativistic one-electron energy levels (n, l, j = l ± 1/2)

use std::fmt;

use super::errors::{ConfigurationError, Result};

/// Orbital letters indexed by the orbital quantum number l
pub const ORBITAL_LETTERS: &str = "spdfghiklmnoqrtuvwxy";

/// Convert an orbital quantum number to its spectroscopic letter
pub fn orbital_letter(l: u32) -> Option<char> {
    ORBITAL_LETTERS.chars().nth(l as usize)
}

/// Convert a spectroscopic letter back to its orbital quantum number
pub fn orbital_number(letter: char) -> Option<u32> {
    ORBITAL_LETTERS.find(letter).map(|l| l as u32)
}

/// Spin-orbit branch of a level: j = l - 1/2 (`-`) or j = l + 1/2 (`+`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpinOrbit {
    Minus,
    Plus,
}

impl SpinOrbit {
    /// Sign tag used in level names
    pub fn symbol(self) -> char {
        match self {
            SpinOrbit::Minus => '-',
            SpinOrbit::Plus => '+',
        }
    }
}

/// A one-electron energy level such as `2p-` or `3d+`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnergyLevel {
    n: u32,
    l: u32,
    sign: SpinOrbit,
}

impl EnergyLevel {
    /// Create a level, checking `n >= 1`, `l < n` and that `l` has a letter.
    ///
    /// An s level only has the `+` branch.
    pub fn new(n: u32, l: u32, sign: SpinOrbit) -> Result<Self> {
        if n == 0 || l >= n || orbital_letter(l).is_none() {
            return Err(ConfigurationError::InvalidLevel { n, l });
        }
        if l == 0 && sign == SpinOrbit::Minus {
            return Err(ConfigurationError::InvalidLevel { n, l });
        }
        Ok(Self { n, l, sign })
    }

    pub fn n(&self) -> u32 {
        self.n
    }

    pub fn l(&self) -> u32 {
        self.l
    }

    pub fn sign(&self) -> SpinOrbit {
        self.sign
    }

    /// Number of electrons the level can hold (2j + 1)
    pub fn degeneracy(&self) -> u32 {
        match self.sign {
            SpinOrbit::Minus => 2 * self.l,
            SpinOrbit::Plus => 2 * (self.l + 1),
        }
    }

    /// Non-relativistic subshell label, e.g. `2p`
    pub fn subshell(&self) -> String {
        format!("{}{}", self.n, self.letter())
    }

    /// Full spectroscopic label, e.g. `2p-`
    pub fn spectroscopic(&self) -> String {
        format!("{}{}{}", self.n, self.letter(), self.sign.symbol())
    }

    fn letter(&self) -> char {
        // new() guarantees l indexes the alphabet
        orbital_letter(self.l).unwrap_or('?')
    }
}

impl fmt::Display for EnergyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.spectroscopic())
    }
}
