//! Inline-value conversion used by the `var` command.

use serde::Serialize;
use tracing::debug;

use crate::batch::{parse_coordinate, Direction};
use crate::error::{ArgumentError, Result};
use crate::point::{GeoPoint, PlanarPoint, ReferencePair};

/// A converted point, serialized as the bare point object.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Converted {
    Planar(PlanarPoint),
    Geo(GeoPoint),
}

impl Converted {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Convert one pair of inline values (`lat lng` or `x z`) between absolute coordinates.
///
/// Exactly two values are required, and nothing is computed unless both parse.
/// Latitude and longitude must be finite; a result that does not fit the block
/// grid is [`ArgumentError::OutOfRange`].
pub fn convert_values<S: AsRef<str>>(
    direction: Direction,
    values: &[S],
    reference: &ReferencePair,
) -> Result<Converted> {
    let usage = match direction {
        Direction::LatLngToPlanar => "<latitude> <longitude>",
        Direction::PlanarToLatLng => "<x> <z>",
    };
    let [first, second] = values else {
        return Err(ArgumentError::ValueCount {
            expected: 2,
            got: values.len(),
            usage,
        }
        .into());
    };
    let (first, second) = (first.as_ref().trim(), second.as_ref().trim());

    let converted = match direction {
        Direction::LatLngToPlanar => {
            let geo = GeoPoint::new(parse_degrees(first)?, parse_degrees(second)?);
            reference.geo_to_planar(geo).map(Converted::Planar)
        }
        Direction::PlanarToLatLng => {
            let block = PlanarPoint::new(parse_block(first)?, parse_block(second)?);
            reference.planar_to_geo(block).map(Converted::Geo)
        }
    }
    .ok_or_else(|| ArgumentError::OutOfRange {
        first: first.to_string(),
        second: second.to_string(),
    })?;
    debug!(mode = direction.name(), %first, %second, result = ?converted, "Converted inline values");
    Ok(converted)
}

fn parse_degrees(value: &str) -> std::result::Result<f64, ArgumentError> {
    parse_coordinate(value).ok_or_else(|| ArgumentError::NotANumber(value.to_string()))
}

fn parse_block(value: &str) -> std::result::Result<i64, ArgumentError> {
    value
        .parse()
        .map_err(|_| ArgumentError::NotANumber(value.to_string()))
}
