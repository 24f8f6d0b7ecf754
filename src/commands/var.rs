//! `var`: convert inline values and print the point as JSON.

use anyhow::Result;
use clap::Args;

use latlng2minecraft::batch::Direction;
use latlng2minecraft::cli::convert_values;
use latlng2minecraft::config::Config;

#[derive(Args)]
pub struct VarArgs {
    /// Conversion direction (lat2mc or mc2lat)
    #[arg(value_parser = super::parse_direction)]
    pub mode: Direction,

    /// Values: lat lon OR x z (integers)
    #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
    pub values: Vec<String>,
}

pub fn execute(args: VarArgs, config: &Config) -> Result<()> {
    let converted = convert_values(args.mode, &args.values, &config.reference)?;
    println!("{}", converted.to_json()?);
    Ok(())
}
