//! Bulk conversion: per-row transform of tabular input.

pub mod table;

use rayon::prelude::*;

use crate::config::ColumnNames;
use crate::point::{GeoPoint, PlanarPoint, ReferencePair};

pub use table::{convert_csv, convert_csv_file};

/// Conversion direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Latitude/longitude -> block x/z
    LatLngToPlanar,
    /// Block x/z -> latitude/longitude
    PlanarToLatLng,
}

impl Direction {
    /// Parse from the CLI mode name (`lat2mc` / `mc2lat`).
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "lat2mc" => Some(Self::LatLngToPlanar),
            "mc2lat" => Some(Self::PlanarToLatLng),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::LatLngToPlanar => "lat2mc",
            Self::PlanarToLatLng => "mc2lat",
        }
    }

    /// Columns read from each row.
    pub fn input_columns<'a>(&self, columns: &'a ColumnNames) -> [&'a str; 2] {
        match self {
            Self::LatLngToPlanar => [columns.lat.as_str(), columns.lng.as_str()],
            Self::PlanarToLatLng => [columns.x.as_str(), columns.z.as_str()],
        }
    }

    /// Columns derived for each row.
    pub fn output_columns<'a>(&self, columns: &'a ColumnNames) -> [&'a str; 2] {
        match self {
            Self::LatLngToPlanar => [columns.x.as_str(), columns.z.as_str()],
            Self::PlanarToLatLng => [columns.lat.as_str(), columns.lng.as_str()],
        }
    }
}

/// Everything a bulk conversion needs besides its input and output.
#[derive(Clone, Debug, PartialEq)]
pub struct BatchJob {
    pub direction: Direction,
    pub columns: ColumnNames,
    pub reference: ReferencePair,
}

/// Row counts of a finished bulk conversion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Data rows read (header excluded)
    pub rows: usize,
    /// Rows that got derived values
    pub converted: usize,
    /// Rows passed through with blank derived values
    pub skipped: usize,
}

/// Derived cells for one row, or `None` if either input cell is not a usable number.
///
/// Latitude/longitude cells must parse as finite floats; block cells as integers.
/// Rows whose result falls outside the `i64` block grid are unusable too.
pub fn derive_cells(
    direction: Direction,
    reference: &ReferencePair,
    first: &str,
    second: &str,
) -> Option<[String; 2]> {
    match direction {
        Direction::LatLngToPlanar => {
            let lat = parse_coordinate(first)?;
            let lng = parse_coordinate(second)?;
            let block = reference.geo_to_planar(GeoPoint::new(lat, lng))?;
            Some([block.x.to_string(), block.z.to_string()])
        }
        Direction::PlanarToLatLng => {
            let x = first.trim().parse::<i64>().ok()?;
            let z = second.trim().parse::<i64>().ok()?;
            let geo = reference.planar_to_geo(PlanarPoint::new(x, z))?;
            Some([geo.latitude.to_string(), geo.longitude.to_string()])
        }
    }
}

/// A finite latitude or longitude, or `None`.
pub(crate) fn parse_coordinate(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Convert every `(first, second)` input pair, in parallel, keeping input order.
pub fn convert_rows<S>(
    direction: Direction,
    reference: &ReferencePair,
    inputs: &[(S, S)],
) -> Vec<Option<[String; 2]>>
where
    S: AsRef<str> + Sync,
{
    inputs
        .par_iter()
        .map(|(a, b)| derive_cells(direction, reference, a.as_ref(), b.as_ref()))
        .collect()
}

/// Sequential counterpart of [`convert_rows`].
pub fn convert_rows_sequential<S>(
    direction: Direction,
    reference: &ReferencePair,
    inputs: &[(S, S)],
) -> Vec<Option<[String; 2]>>
where
    S: AsRef<str>,
{
    inputs
        .iter()
        .map(|(a, b)| derive_cells(direction, reference, a.as_ref(), b.as_ref()))
        .collect()
}
