/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Regeneration of bound-bound transitions in the fine-structure basis
//!
//! Every RDCA transition becomes the cartesian product of the FS sublevels
//! of its lower and upper states, with Einstein coefficients taken from the
//! fine-structure transition table of the ion.

mod einstein;
mod errors;
mod regenerate;

pub use einstein::{
    compute_einstein_coef, einstein_key, get_einstein_coef, EinsteinLookup, EinsteinSource,
};
pub use errors::{Result, TransitionError};
pub use regenerate::{
    expand_transition, regenerate_transitions, EinsteinFallback, LevelNumbering,
    RegenerateOptions,
};
