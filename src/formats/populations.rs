/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Population files of the kinetics solver (`ID ION POP CONFIG`)

use std::path::Path;

use super::errors::{FormatError, Result};
use super::{is_integer, parse_field, read_text};

/// One state of the kinetics solver with its population
#[derive(Debug, Clone, PartialEq)]
pub struct PopulationRow {
    pub abako_id: u32,
    /// Ion charge
    pub ion: u32,
    pub population: f64,
    /// Positional occupation code
    pub configuration: String,
}

/// Read a population file, keeping row order
pub fn read_populations(path: &Path) -> Result<Vec<PopulationRow>> {
    let content = read_text(path)?;
    parse_populations(&content, path)
}

/// Parse population file content; `source` is only used in error messages
pub fn parse_populations(content: &str, source: &Path) -> Result<Vec<PopulationRow>> {
    let mut rows = Vec::new();

    for (i, line) in content.lines().enumerate() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        // headers start with a word, data rows with the state id
        if fields.first().map_or(true, |f| !is_integer(f)) {
            continue;
        }
        if fields.len() < 4 {
            return Err(FormatError::Parse {
                path: source.to_path_buf(),
                line: i + 1,
                message: format!("population row needs 4 fields, found {}", fields.len()),
            });
        }

        rows.push(PopulationRow {
            abako_id: parse_field(source, i + 1, fields[0], "state id")?,
            ion: parse_field(source, i + 1, fields[1], "ion charge")?,
            population: parse_field(source, i + 1, fields[2], "population")?,
            configuration: fields[3].to_string(),
        });
    }

    Ok(rows)
}
