//! Subcommand implementations.

pub mod csv;
pub mod var;

use latlng2minecraft::batch::Direction;

/// clap value parser for `lat2mc` / `mc2lat`.
pub fn parse_direction(s: &str) -> Result<Direction, String> {
    Direction::from_name(s).ok_or_else(|| format!("unknown mode {s:?}, expected lat2mc or mc2lat"))
}
