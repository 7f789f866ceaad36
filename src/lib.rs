/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! # rdca-fs
//!
//! Conversion of configuration-averaged (RDCA) atomic kinetics output into
//! the fine-structure (FS) level scheme.
//!
//! Populations of RDCA states are split over the FS sublevels that belong to
//! them with Boltzmann weights, and every RDCA bound-bound transition is
//! expanded into the transitions between those sublevels, with Einstein
//! coefficients taken from per-ion FS transition tables. The result is
//! written in the transdata layout read by spectral synthesis tools.

pub mod configuration;
pub mod conversion;
pub mod corresp;
pub mod formats;
pub mod population;
pub mod transitions;
pub mod utils;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");

pub use conversion::{convert_transdata_file, ConversionConfig, Converter};
