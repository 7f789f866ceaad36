/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Correspondence between RDCA states and fine-structure states
//!
//! Each RDCA state (one effective level per configuration) aggregates a set
//! of fine-structure levels. This module groups the FS levels by shell
//! signature and assigns each to the RDCA state with the same configuration.

mod builder;
mod state;

pub use builder::{build_correspondence, Bucket, CorrespondenceMap, FsMember};
pub use state::{fs_to_rdca_name, is_correspondent, AtomicState};
