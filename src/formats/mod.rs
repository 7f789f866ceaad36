/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Readers and writers for the whitespace-delimited data files
//!
//! * level files (`.lev`) of the atomic structure code
//! * fine-structure transition tables (`.tr`)
//! * population files written by the kinetics solver
//! * transdata files (plasma conditions header, bound-bound and bound-free sections)

mod errors;
mod fs_transitions;
mod levels;
mod populations;
mod transdata;

pub use errors::{FormatError, Result};
pub use fs_transitions::{parse_fs_transitions, read_fs_transitions, FsTransition};
pub use levels::{parse_levels, read_levels};
pub use populations::{parse_populations, read_populations, PopulationRow};
pub use transdata::{
    format_exp, parse_transdata, read_transdata, render_transdata, write_transdata,
    BoundBoundRow, BoundFreeRow, Transdata, TransdataHeader,
};

use std::path::Path;
use std::str::FromStr;

/// Parse one whitespace-separated field, reporting file and line on failure
pub(crate) fn parse_field<T: FromStr>(
    source: &Path,
    line: usize,
    token: &str,
    column: &str,
) -> Result<T> {
    token.parse::<T>().map_err(|_| FormatError::Parse {
        path: source.to_path_buf(),
        line,
        message: format!("cannot read {} from '{}'", column, token),
    })
}

/// Read a whole text file
pub(crate) fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|err| FormatError::io(path, err))
}

/// True if the token reads as an integer
pub(crate) fn is_integer(token: &str) -> bool {
    token.parse::<i64>().is_ok()
}

/// True if the token reads as a float
pub(crate) fn is_float(token: &str) -> bool {
    token.parse::<f64>().is_ok()
}
