/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Fine-structure transition tables (`UPPER 2J LOWER 2J DELTAE GF A ...`)

use std::path::Path;

use super::errors::{FormatError, Result};
use super::{is_integer, parse_field, read_text};

/// One radiative transition between two fine-structure levels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FsTransition {
    pub upper: u32,
    pub lower: u32,
    /// Einstein A-coefficient (s^-1)
    pub einstein: f64,
}

/// Read every transition of a `.tr` file
pub fn read_fs_transitions(path: &Path) -> Result<Vec<FsTransition>> {
    let content = read_text(path)?;
    parse_fs_transitions(&content, path)
}

/// Parse transition table content; `source` is only used in error messages
pub fn parse_fs_transitions(content: &str, source: &Path) -> Result<Vec<FsTransition>> {
    let mut transitions = Vec::new();

    for (i, line) in content.lines().enumerate() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        // data rows open with the two level indices and their 2J values
        let is_data = fields.len() >= 4 && fields[..4].iter().all(|f| is_integer(f));
        if !is_data {
            continue;
        }
        if fields.len() < 7 {
            return Err(FormatError::Parse {
                path: source.to_path_buf(),
                line: i + 1,
                message: format!("transition row needs 7 fields, found {}", fields.len()),
            });
        }
        let _: f64 = parse_field(source, i + 1, fields[4], "energy")?;
        let _: f64 = parse_field(source, i + 1, fields[5], "gf")?;

        transitions.push(FsTransition {
            upper: parse_field(source, i + 1, fields[0], "upper level")?,
            lower: parse_field(source, i + 1, fields[2], "lower level")?,
            einstein: parse_field(source, i + 1, fields[6], "Einstein coefficient")?,
        });
    }

    Ok(transitions)
}
