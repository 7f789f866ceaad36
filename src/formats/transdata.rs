/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Transdata files
//!
//! A transdata file holds a free-form header (including a plasma conditions
//! line), a bound-bound section and a bound-free section. Both sections end
//! with a line holding just `-1`.
//!
//! ```text
//! <header>
//!    ion    low    upp   ldeg   udeg           lpop           upop         deltaE            ein            dop            voi sta
//!     -1
//!
//!   lion   uion    low    upp   ldeg   udeg           lpop           upop       aux_real aux_a aux_b aux_c tag
//!     -1
//! ```

use std::io::{self, BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use super::errors::{FormatError, Result};
use super::{is_float, is_integer, parse_field, read_text};

const SENTINEL: &str = "-1";
/// Numeric columns of a bound-bound row; the line-shape tag after them may be empty
const BOUND_BOUND_FIELDS: usize = 11;
const BOUND_FREE_FIELDS: usize = 13;

/// Header block of a transdata file
#[derive(Debug, Clone, PartialEq)]
pub struct TransdataHeader {
    /// Header text exactly as read, line terminators included
    pub text: String,
    /// Plasma temperature, in the energy units of the level files
    pub temperature: f64,
    pub density: Option<f64>,
}

/// One bound-bound transition
#[derive(Debug, Clone, PartialEq)]
pub struct BoundBoundRow {
    pub ion: u32,
    pub low: u32,
    pub upp: u32,
    pub ldeg: f64,
    pub udeg: f64,
    pub lpop: f64,
    pub upop: f64,
    pub delta_e: f64,
    pub ein: f64,
    /// Doppler width
    pub dop: f64,
    /// Voigt parameter
    pub voi: f64,
    /// Line-shape tag
    pub sta: String,
}

/// One bound-free transition
#[derive(Debug, Clone, PartialEq)]
pub struct BoundFreeRow {
    pub lion: u32,
    pub uion: u32,
    pub low: u32,
    pub upp: u32,
    pub ldeg: f64,
    pub udeg: f64,
    pub lpop: f64,
    pub upop: f64,
    pub aux_real: f64,
    pub aux_a: i64,
    pub aux_b: i64,
    pub aux_c: i64,
    pub tag: String,
}

/// A complete transdata file
#[derive(Debug, Clone, PartialEq)]
pub struct Transdata {
    pub header: TransdataHeader,
    pub bound_bound: Vec<BoundBoundRow>,
    pub bound_free: Vec<BoundFreeRow>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Header,
    BoundBound,
    BoundFree,
    Done,
}

/// Read a transdata file
pub fn read_transdata(path: &Path) -> Result<Transdata> {
    let content = read_text(path)?;
    parse_transdata(&content, path)
}

/// Parse transdata content; `source` is only used in error messages
pub fn parse_transdata(content: &str, source: &Path) -> Result<Transdata> {
    let mut section = Section::Header;
    let mut header_end = content.len();
    let mut conditions: Option<Vec<f64>> = None;
    let mut bound_bound = Vec::new();
    let mut bound_free = Vec::new();

    let mut offset = 0;
    for (i, raw_line) in content.split_inclusive('\n').enumerate() {
        let line_start = offset;
        offset += raw_line.len();

        let line_number = i + 1;
        let trimmed = raw_line.trim();
        let fields: Vec<&str> = trimmed.split_whitespace().collect();

        match section {
            Section::Header => {
                let starts_data = trimmed == SENTINEL || is_bound_bound_row(&fields);
                if !starts_data {
                    if conditions.is_none() {
                        conditions = conditions_values(&fields);
                    }
                    continue;
                }
                header_end = line_start;
                section = Section::BoundBound;
                if trimmed == SENTINEL {
                    section = Section::BoundFree;
                } else {
                    bound_bound.push(parse_bound_bound(&fields, source, line_number)?);
                }
            }
            Section::BoundBound => {
                if trimmed == SENTINEL {
                    section = Section::BoundFree;
                } else if !trimmed.is_empty() {
                    bound_bound.push(parse_bound_bound(&fields, source, line_number)?);
                }
            }
            Section::BoundFree => {
                if trimmed == SENTINEL {
                    section = Section::Done;
                } else if !trimmed.is_empty() {
                    bound_free.push(parse_bound_free(&fields, source, line_number)?);
                }
            }
            Section::Done => break,
        }
    }

    match section {
        Section::Header | Section::BoundBound => {
            return Err(FormatError::MissingSentinel {
                path: source.to_path_buf(),
                section: "bound-bound".to_string(),
            })
        }
        Section::BoundFree => {
            return Err(FormatError::MissingSentinel {
                path: source.to_path_buf(),
                section: "bound-free".to_string(),
            })
        }
        Section::Done => {}
    }

    let values = conditions.ok_or_else(|| FormatError::MissingConditions {
        path: source.to_path_buf(),
    })?;
    let temperature = values[0];
    if !(temperature.is_finite() && temperature > 0.0) {
        return Err(FormatError::InvalidTemperature {
            path: source.to_path_buf(),
            value: temperature,
        });
    }

    Ok(Transdata {
        header: TransdataHeader {
            text: content[..header_end].to_string(),
            temperature,
            density: values.get(1).copied(),
        },
        bound_bound,
        bound_free,
    })
}

/// Three integer columns followed by eight numeric ones
fn is_bound_bound_row(fields: &[&str]) -> bool {
    fields.len() >= BOUND_BOUND_FIELDS
        && fields[..3].iter().all(|f| is_integer(f))
        && fields[3..BOUND_BOUND_FIELDS].iter().all(|f| is_float(f))
}

/// A header line made only of numbers holds the plasma conditions
fn conditions_values(fields: &[&str]) -> Option<Vec<f64>> {
    if fields.is_empty() {
        return None;
    }
    fields.iter().map(|f| f.parse::<f64>().ok()).collect()
}

fn parse_bound_bound(fields: &[&str], source: &Path, line: usize) -> Result<BoundBoundRow> {
    if fields.len() < BOUND_BOUND_FIELDS {
        return Err(FormatError::Parse {
            path: source.to_path_buf(),
            line,
            message: format!(
                "bound-bound row needs {} numeric fields, found {}",
                BOUND_BOUND_FIELDS,
                fields.len()
            ),
        });
    }

    Ok(BoundBoundRow {
        ion: parse_field(source, line, fields[0], "ion")?,
        low: parse_field(source, line, fields[1], "low")?,
        upp: parse_field(source, line, fields[2], "upp")?,
        ldeg: parse_field(source, line, fields[3], "ldeg")?,
        udeg: parse_field(source, line, fields[4], "udeg")?,
        lpop: parse_field(source, line, fields[5], "lpop")?,
        upop: parse_field(source, line, fields[6], "upop")?,
        delta_e: parse_field(source, line, fields[7], "deltaE")?,
        ein: parse_field(source, line, fields[8], "ein")?,
        dop: parse_field(source, line, fields[9], "dop")?,
        voi: parse_field(source, line, fields[10], "voi")?,
        sta: fields[BOUND_BOUND_FIELDS..].join(" "),
    })
}

fn parse_bound_free(fields: &[&str], source: &Path, line: usize) -> Result<BoundFreeRow> {
    if fields.len() < BOUND_FREE_FIELDS {
        return Err(FormatError::Parse {
            path: source.to_path_buf(),
            line,
            message: format!(
                "bound-free row needs {} fields, found {}",
                BOUND_FREE_FIELDS,
                fields.len()
            ),
        });
    }

    Ok(BoundFreeRow {
        lion: parse_field(source, line, fields[0], "lion")?,
        uion: parse_field(source, line, fields[1], "uion")?,
        low: parse_field(source, line, fields[2], "low")?,
        upp: parse_field(source, line, fields[3], "upp")?,
        ldeg: parse_field(source, line, fields[4], "ldeg")?,
        udeg: parse_field(source, line, fields[5], "udeg")?,
        lpop: parse_field(source, line, fields[6], "lpop")?,
        upop: parse_field(source, line, fields[7], "upop")?,
        aux_real: parse_field(source, line, fields[8], "aux_real")?,
        aux_a: parse_field(source, line, fields[9], "aux_a")?,
        aux_b: parse_field(source, line, fields[10], "aux_b")?,
        aux_c: parse_field(source, line, fields[11], "aux_c")?,
        tag: fields[12..].join(" "),
    })
}

/// C-style `%<width>.<precision>e`: signed exponent of at least two digits
pub fn format_exp(value: f64, width: usize, precision: usize) -> String {
    let body = if value.is_nan() {
        "nan".to_string()
    } else if value.is_infinite() {
        (if value > 0.0 { "inf" } else { "-inf" }).to_string()
    } else {
        let rust = format!("{:.*e}", precision, value);
        match rust.split_once('e') {
            Some((mantissa, exponent)) => {
                let exponent: i32 = exponent.parse().unwrap_or(0);
                let sign = if exponent < 0 { '-' } else { '+' };
                format!("{}e{}{:02}", mantissa, sign, exponent.abs())
            }
            None => rust,
        }
    };
    format!("{:>width$}", body, width = width)
}

/// Write a transdata file in the fixed-width layout
pub fn render_transdata<W: Write>(writer: &mut W, transdata: &Transdata) -> io::Result<()> {
    writer.write_all(transdata.header.text.as_bytes())?;

    for row in &transdata.bound_bound {
        writeln!(
            writer,
            "{:6} {:6} {:6} {:6.1} {:6.1} {} {} {} {} {} {} {}",
            row.ion,
            row.low,
            row.upp,
            row.ldeg,
            row.udeg,
            format_exp(row.lpop, 14, 6),
            format_exp(row.upop, 14, 6),
            format_exp(row.delta_e, 14, 6),
            format_exp(row.ein, 14, 6),
            format_exp(row.dop, 14, 6),
            format_exp(row.voi, 14, 6),
            row.sta
        )?;
    }
    writer.write_all(b"    -1\n\n")?;

    for row in &transdata.bound_free {
        writeln!(
            writer,
            "{:6} {:6} {:6} {:6} {:6.1} {:6.1} {} {} {} {:3} {:3} {:8} {}",
            row.lion,
            row.uion,
            row.low,
            row.upp,
            row.ldeg,
            row.udeg,
            format_exp(row.lpop, 14, 6),
            format_exp(row.upop, 14, 6),
            format_exp(row.aux_real, 14, 6),
            row.aux_a,
            row.aux_b,
            row.aux_c,
            row.tag
        )?;
    }
    writer.write_all(b"    -1")?;

    Ok(())
}

/// Write a transdata file atomically.
///
/// The content goes to a temporary file next to `path`, which replaces
/// `path` only once everything was written.
pub fn write_transdata(path: &Path, transdata: &Transdata) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temporary = NamedTempFile::new_in(dir).map_err(|err| FormatError::io(dir, err))?;
    {
        let mut writer = BufWriter::new(temporary.as_file_mut());
        render_transdata(&mut writer, transdata).map_err(|err| FormatError::io(path, err))?;
        writer.flush().map_err(|err| FormatError::io(path, err))?;
    }

    temporary
        .persist(path)
        .map_err(|err| FormatError::io(path, err.error))?;
    Ok(())
}
