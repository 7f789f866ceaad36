/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Population distribution
//!
//! The kinetics solver gives one population per RDCA state. Each population
//! is split over the fine-structure sublevels of its state with Boltzmann
//! weights at the plasma temperature, after the sublevel degeneracies are
//! rescaled to the RDCA degeneracy.

mod distribute;
mod errors;
mod table;
mod weights;

pub use distribute::{distribute_populations, CorrespondenceSource};
pub use errors::{PopulationError, Result};
pub use table::{PopulationRecord, PopulationTable, RecordKind};
pub use weights::{boltzmann_split, correct_degeneracies};
