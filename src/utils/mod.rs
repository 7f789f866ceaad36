/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Helpers shared by the conversion stages

mod cache;
mod grouping;

pub use cache::PerIonCache;
pub use grouping::{accumulate_ordered, cartesian_product, group_indices};
