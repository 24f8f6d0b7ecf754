//! latlng2minecraft command-line interface.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use latlng2minecraft::config::Config;

/// Convert between lat/lng and Minecraft coordinates
#[derive(Parser)]
#[command(name = "latlng2minecraft")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Convert between lat/lng and Minecraft coordinates", long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: Level,

    /// TOML file overriding the reference point and CSV column names
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute conversion using inline values
    Var(commands::var::VarArgs),
    /// CSV conversion: append derived coordinate columns
    Csv(commands::csv::CsvArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // stdout carries the converted point
    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = Config::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Commands::Var(args) => commands::var::execute(args, &config),
        Commands::Csv(args) => commands::csv::execute(args, config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(["latlng2minecraft"].iter().chain(args))
    }

    #[test]
    fn test_log_level_is_parsed() {
        let cli = parse(&["--log-level", "DEBUG", "var", "lat2mc", "36.1", "139.4"]).unwrap();
        assert_eq!(cli.log_level, Level::DEBUG);

        let cli = parse(&["var", "mc2lat", "-559", "-395"]).unwrap();
        assert_eq!(cli.log_level, Level::WARN);
    }

    #[test]
    fn test_unknown_log_level_is_rejected() {
        assert!(parse(&["--log-level", "verbose", "var", "lat2mc", "36.1", "139.4"]).is_err());
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        assert!(parse(&["var", "latlng", "36.1", "139.4"]).is_err());
    }
}
