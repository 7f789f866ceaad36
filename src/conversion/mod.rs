/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Conversion of RDCA transdata files to the fine-structure level scheme
//!
//! A conversion takes three paths: the output file, the population file of
//! the kinetics run and the RDCA transdata file. Atomic data is read per ion
//! from the directory named in [`ConversionConfig`].

mod config;
mod converter;
mod data_dir;
mod errors;

pub use config::{ConversionConfig, IonLabel};
pub use converter::{convert_transdata_file, AtomicDataSource, ConversionSummary, Converter};
pub use data_dir::{AtomicDataDir, EnergyScheme};
pub use errors::{ConversionError, Result};
