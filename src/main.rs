/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Command line converter for a single transdata file

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;

use rdca_fs::{convert_transdata_file, ConversionConfig};

#[derive(Parser)]
#[command(
    name = "rdca-fs",
    version,
    about = "Convert RDCA transdata files to the fine-structure level scheme"
)]
struct Cli {
    /// Output transdata file
    output: PathBuf,
    /// Population file of the kinetics run
    population: PathBuf,
    /// RDCA transdata file
    transdata: PathBuf,
    /// JSON settings file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Directory with the .lev and .tr files
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
    /// Element symbol used in atomic data file names
    #[arg(long, value_name = "SYM")]
    element: Option<String>,
    /// Charge of the bare nucleus
    #[arg(long, value_name = "Z")]
    nuclear_charge: Option<u32>,
}

impl Cli {
    fn settings(&self) -> anyhow::Result<ConversionConfig> {
        let mut config = match &self.config {
            Some(path) => ConversionConfig::from_json_file(path)
                .with_context(|| format!("Failed to load settings from {}", path.display()))?,
            None => ConversionConfig::default(),
        };

        if let Some(dir) = &self.data_dir {
            config.data_dir = dir.clone();
        }
        if let Some(element) = &self.element {
            config.element = element.clone();
        }
        if let Some(z) = self.nuclear_charge {
            config.nuclear_charge = z;
        }
        config.validate().context("Invalid settings")?;
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.settings()?;
    info!("rdca-fs v{} ({} Z = {})", rdca_fs::VERSION, config.element, config.nuclear_charge);

    let summary = convert_transdata_file(&cli.output, &cli.population, &cli.transdata, &config)
        .with_context(|| format!("Failed to convert {}", cli.transdata.display()))?;

    println!(
        "{}: {} bound-bound and {} bound-free transitions",
        cli.output.display(),
        summary.fs_transitions,
        summary.bound_free
    );
    Ok(())
}
