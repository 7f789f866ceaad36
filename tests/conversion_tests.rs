/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

use approx::assert_relative_eq;
use rdca_fs::conversion::{convert_transdata_file, ConversionConfig, ConversionError, Converter};
use rdca_fs::formats::{read_transdata, FormatError};
use rdca_fs::population::PopulationError;
use rdca_fs::transitions::EinsteinFallback;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

const RDCA_LEVELS: &str = "FAC 1.1.5
NELE\t= 2
  ILEV  IBASE    ENERGY       P   VNL   2J
     0     -1  0.00000000E+00 0   100   0 1*2 1s2 1s+2
     1     -1  1.10000000E+01 1   201   3 1*1.2*1 1s1.2p1 1s+1.2p-1
";

const FS_LEVELS: &str = "FAC 1.1.5
NELE\t= 2
  ILEV  IBASE    ENERGY       P   VNL   2J
     0     -1  0.00000000E+00 0   100   0 1*2 1s2 1s+2
     1     -1  1.00000000E+01 1   201   1 1*1.2*1 1s1.2p1 1s+1(1)1.2p-1(1)0
     2     -1  1.20000000E+01 1   201   3 1*1.2*1 1s1.2p1 1s+1(1)1.2p-1(1)2
";

const FS_TRANSITIONS: &str = "FAC 1.1.5
NELE\t= 2
MULTIP\t= -1
     2 3     0 0  1.200000E+01  7.0E-01  4.5000E+11  0.0E+00
";

const POPULATIONS: &str = " ID ION POP CONFIG
  1  16  5.0 2
  2  16  100.0 101
";

const TRANSDATA: &str = "Transition data, Ar plasma
  1.0000E+00  1.0000E+21
    16      1      2    1.0    4.0   5.000000e+00   1.000000e+02   1.100000e+01   1.000000e+12   1.000000e-01   2.000000e-03 G
    -1

    16     17      2      1    4.0    2.0   1.000000e+02   5.000000e-02   4.120000e+03   1   0        0 bf
    -1";

/// Test helper writing one fixture file
fn write_file(path: &Path, content: &str) {
    let mut file = File::create(path).unwrap();
    write!(file, "{}", content).unwrap();
}

/// Atomic data for ion 16 of argon plus population and transdata inputs
fn create_fixture() -> (TempDir, ConversionConfig, PathBuf, PathBuf) {
    let dir = tempdir().unwrap();
    let data_dir = dir.path().join("atomicdata");
    fs::create_dir(&data_dir).unwrap();

    write_file(&data_dir.join("Ar_16_RDCA_0.lev"), RDCA_LEVELS);
    write_file(&data_dir.join("Ar_16_FS_0.lev"), FS_LEVELS);
    write_file(&data_dir.join("Ar_16_FS_0.tr"), FS_TRANSITIONS);

    let population = dir.path().join("pop_Ar");
    let transdata = dir.path().join("transdata_Ar");
    write_file(&population, POPULATIONS);
    write_file(&transdata, TRANSDATA);

    let config = ConversionConfig {
        data_dir,
        ..Default::default()
    };
    (dir, config, population, transdata)
}

#[test]
fn test_end_to_end_conversion() {
    let (dir, config, population, transdata) = create_fixture();
    let output = dir.path().join("transdata_Ar_fs");

    let summary = convert_transdata_file(&output, &population, &transdata, &config).unwrap();
    assert_eq!(summary.population_states, 2);
    assert_eq!(summary.population_records, 3);
    assert_eq!(summary.rdca_transitions, 1);
    assert_eq!(summary.fs_transitions, 2);
    assert_eq!(summary.bound_free, 1);

    let converted = read_transdata(&output).unwrap();
    let rows = &converted.bound_bound;
    assert_eq!(rows.len(), 2);
    assert_eq!((rows[0].low, rows[0].upp), (0, 1));
    assert_eq!((rows[1].low, rows[1].upp), (0, 2));

    // population of state 2 spread over its two sublevels, lower one favoured
    assert_relative_eq!(rows[0].upop + rows[1].upop, 100.0, max_relative = 1e-5);
    assert!(rows[0].upop > rows[1].upop);
    assert_relative_eq!(rows[0].lpop, 5.0, max_relative = 1e-6);

    assert_relative_eq!(rows[0].delta_e, 10.0, max_relative = 1e-6);
    assert_relative_eq!(rows[1].delta_e, 12.0, max_relative = 1e-6);
    assert_relative_eq!(rows[0].ein, 0.0);
    assert_relative_eq!(rows[1].ein, 4.5e11, max_relative = 1e-6);
    assert!(rows.iter().all(|r| r.sta == "G"));
}

#[test]
fn test_header_and_bound_free_copied() {
    let (dir, config, population, transdata) = create_fixture();
    let output = dir.path().join("transdata_Ar_fs");
    convert_transdata_file(&output, &population, &transdata, &config).unwrap();

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.starts_with("Transition data, Ar plasma\n  1.0000E+00  1.0000E+21\n"));
    assert!(text.ends_with(
        "    -1\n\n    16     17      2      1    4.0    2.0   1.000000e+02   5.000000e-02   4.120000e+03   1   0        0 bf\n    -1"
    ));

    let original = read_transdata(&transdata).unwrap();
    let converted = read_transdata(&output).unwrap();
    assert_eq!(converted.header, original.header);
    assert_eq!(converted.bound_free, original.bound_free);
}

#[test]
fn test_scaling_fallback_fills_missing_lines() {
    let (dir, mut config, population, transdata) = create_fixture();
    config.einstein_fallback = EinsteinFallback::RdcaScaling;
    let output = dir.path().join("transdata_Ar_fs");
    convert_transdata_file(&output, &population, &transdata, &config).unwrap();

    let converted = read_transdata(&output).unwrap();
    let scaled = converted.bound_bound[0].ein;
    assert!(scaled > 0.0 && scaled < 1.0e12);
    assert_relative_eq!(converted.bound_bound[1].ein, 4.5e11, max_relative = 1e-6);
}

#[test]
fn test_failure_keeps_previous_output() {
    let (dir, config, population, transdata) = create_fixture();
    let output = dir.path().join("transdata_Ar_fs");
    write_file(&output, "previous run\n");

    // 1s 2p+ has no RDCA level in the fixture
    write_file(&population, "1 16 5.0 2\n2 16 100.0 1001\n");
    let result = convert_transdata_file(&output, &population, &transdata, &config);
    assert!(matches!(
        result,
        Err(ConversionError::Population(PopulationError::UnknownState { abako_id: 2, .. }))
    ));
    assert_eq!(fs::read_to_string(&output).unwrap(), "previous run\n");
}

#[test]
fn test_missing_atomic_data_writes_nothing() {
    let (dir, mut config, population, transdata) = create_fixture();
    config.data_dir = dir.path().join("nowhere");
    let output = dir.path().join("transdata_Ar_fs");

    let result = convert_transdata_file(&output, &population, &transdata, &config);
    assert!(result.is_err());
    assert!(!output.exists());
}

#[test]
fn test_truncated_transdata_rejected() {
    let (dir, config, population, transdata) = create_fixture();
    write_file(&transdata, "  1.0\n    -1\n");
    let output = dir.path().join("transdata_Ar_fs");

    let result = convert_transdata_file(&output, &population, &transdata, &config);
    assert!(matches!(
        result,
        Err(ConversionError::Format(FormatError::MissingSentinel { .. }))
    ));
    assert!(!output.exists());
}

#[test]
fn test_settings_from_json() {
    let (dir, config, population, transdata) = create_fixture();
    let settings = dir.path().join("settings.json");
    write_file(
        &settings,
        &format!(
            r#"{{"data_dir": "{}", "level_numbering": "fs_id"}}"#,
            config.data_dir.display()
        ),
    );

    let loaded = ConversionConfig::from_json_file(&settings).unwrap();
    assert_eq!(loaded.data_dir, config.data_dir);
    assert_eq!(loaded.element, "Ar");

    let output = dir.path().join("transdata_Ar_fs");
    let mut converter = Converter::from_config(loaded).unwrap();
    converter.convert_file(&output, &population, &transdata).unwrap();

    let converted = read_transdata(&output).unwrap();
    // FS ids of this fixture equal the table positions
    assert_eq!((converted.bound_bound[1].low, converted.bound_bound[1].upp), (0, 2));
}
