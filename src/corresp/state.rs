/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Atomic states read from level files

use crate::configuration::Labelled;

/// One level of an RDCA or fine-structure level file
#[derive(Debug, Clone, PartialEq)]
pub struct AtomicState {
    pub id: u32,
    /// Level energy
    pub energy: f64,
    pub ncomplex: String,
    pub sname: String,
    pub name: String,
    /// Statistical weight, 2J + 1
    pub degeneracy: f64,
}

impl Labelled for AtomicState {
    fn ncomplex(&self) -> String {
        self.ncomplex.clone()
    }

    fn sname(&self) -> String {
        self.sname.clone()
    }

    fn name(&self) -> String {
        self.name.clone()
    }
}

/// RDCA level name of a fine-structure level name.
///
/// Drops the parenthesised coupling suffix of every dot-separated part:
/// `1s+1(1)1.2p+1(3)4` becomes `1s+1.2p+1`.
pub fn fs_to_rdca_name(fs_name: &str) -> String {
    fs_name
        .split('.')
        .map(|part| part.split('(').next().unwrap_or(part))
        .collect::<Vec<_>>()
        .join(".")
}

/// A fine-structure state belongs to an RDCA state
pub fn is_correspondent(fs_state: &AtomicState, rdca_state: &AtomicState) -> bool {
    fs_state.ncomplex == rdca_state.ncomplex
        && fs_state.sname == rdca_state.sname
        && fs_to_rdca_name(&fs_state.name) == rdca_state.name
}
