//! `csv`: bulk-convert a CSV file.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use latlng2minecraft::batch::{convert_csv_file, BatchJob, Direction};
use latlng2minecraft::config::Config;

#[derive(Args)]
pub struct CsvArgs {
    /// Input CSV path
    pub input: PathBuf,

    /// Output CSV path
    pub output: PathBuf,

    /// Conversion direction (lat2mc or mc2lat)
    #[arg(long, default_value = "lat2mc", value_parser = super::parse_direction)]
    pub direction: Direction,

    /// Latitude column name (default: lat)
    #[arg(long)]
    pub lat_col: Option<String>,

    /// Longitude column name (default: lng)
    #[arg(long)]
    pub lng_col: Option<String>,

    /// Block x column name (default: minecraft_x)
    #[arg(long)]
    pub x_col: Option<String>,

    /// Block z column name (default: minecraft_z)
    #[arg(long)]
    pub z_col: Option<String>,
}

pub fn execute(args: CsvArgs, config: Config) -> Result<()> {
    let mut columns = config.columns;
    let overrides = [
        (args.lat_col, &mut columns.lat),
        (args.lng_col, &mut columns.lng),
        (args.x_col, &mut columns.x),
        (args.z_col, &mut columns.z),
    ];
    for (flag, column) in overrides {
        if let Some(name) = flag {
            *column = name;
        }
    }

    let job = BatchJob {
        direction: args.direction,
        columns,
        reference: config.reference,
    };
    convert_csv_file(&args.input, &args.output, &job)?;
    Ok(())
}
