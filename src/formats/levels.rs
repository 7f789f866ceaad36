/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Level files (`ILEV IBASE ENERGY P VNL 2J NCOMPLEX SNAME NAME`)

use std::path::Path;

use super::errors::{FormatError, Result};
use super::{is_integer, parse_field, read_text};
use crate::corresp::AtomicState;

/// Read every level of a level file
pub fn read_levels(path: &Path) -> Result<Vec<AtomicState>> {
    let content = read_text(path)?;
    parse_levels(&content, path)
}

/// Parse level file content; `source` is only used in error messages
pub fn parse_levels(content: &str, source: &Path) -> Result<Vec<AtomicState>> {
    let mut states = Vec::new();

    for (i, line) in content.lines().enumerate() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if !is_level_line(&fields) {
            continue;
        }
        if fields.len() < 9 {
            return Err(FormatError::Parse {
                path: source.to_path_buf(),
                line: i + 1,
                message: format!("level row needs 9 fields, found {}", fields.len()),
            });
        }

        let line_number = i + 1;
        let two_j: u32 = parse_field(source, line_number, fields[5], "2J")?;
        states.push(AtomicState {
            id: parse_field(source, line_number, fields[0], "level index")?,
            energy: parse_field(source, line_number, fields[2], "energy")?,
            ncomplex: fields[6].to_string(),
            sname: fields[7].to_string(),
            name: fields[8].to_string(),
            degeneracy: f64::from(two_j + 1),
        });
    }

    Ok(states)
}

/// Level rows carry integers in the index, base, parity, VNL and 2J columns;
/// the energy column is parsed afterwards so a bad value is reported
fn is_level_line(fields: &[&str]) -> bool {
    fields.len() >= 6 && [0, 1, 3, 4, 5].iter().all(|&i| is_integer(fields[i]))
}
