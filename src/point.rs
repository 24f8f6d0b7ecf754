//! Geographic and planar point types, and the reference pair anchoring them.

use serde::{Deserialize, Serialize};

use crate::proj::local::{self, LocalGrid};

/// A WGS84 geographic position in degrees. Ranges are not enforced.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A position on the whole-metre block grid: `x` east, `z` north.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlanarPoint {
    pub x: i64,
    #[serde(alias = "y")]
    pub z: i64,
}

impl PlanarPoint {
    pub const ORIGIN: PlanarPoint = PlanarPoint::new(0, 0);

    pub const fn new(x: i64, z: i64) -> Self {
        Self { x, z }
    }

    /// Component-wise sum, or `None` if either axis overflows.
    pub fn checked_add(self, rhs: PlanarPoint) -> Option<PlanarPoint> {
        Some(PlanarPoint::new(
            self.x.checked_add(rhs.x)?,
            self.z.checked_add(rhs.z)?,
        ))
    }

    /// Component-wise difference, or `None` if either axis overflows.
    pub fn checked_sub(self, rhs: PlanarPoint) -> Option<PlanarPoint> {
        Some(PlanarPoint::new(
            self.x.checked_sub(rhs.x)?,
            self.z.checked_sub(rhs.z)?,
        ))
    }
}

/// The fixed correspondence between one geographic point and one grid point.
///
/// The transform in [`crate::proj::local`] only ever works on offsets relative to
/// `geo`; this type adds and removes the `planar` origin around it. Every
/// conversion returns `None` when the result does not fit the `i64` grid.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferencePair {
    pub geo: GeoPoint,
    pub planar: PlanarPoint,
}

impl ReferencePair {
    pub const fn new(geo: GeoPoint, planar: PlanarPoint) -> Self {
        Self { geo, planar }
    }

    /// Offset of an absolute grid point from the reference grid point.
    pub fn to_relative(&self, absolute: PlanarPoint) -> Option<PlanarPoint> {
        absolute.checked_sub(self.planar)
    }

    /// Absolute grid point of an offset from the reference grid point.
    pub fn to_absolute(&self, relative: PlanarPoint) -> Option<PlanarPoint> {
        self.planar.checked_add(relative)
    }

    /// Absolute grid coordinate of a geographic point.
    ///
    /// `None` for non-finite input or a point too far out for the grid.
    pub fn geo_to_planar(&self, geo: GeoPoint) -> Option<PlanarPoint> {
        let relative = LocalGrid::wgs84(self.geo).try_forward(geo)?;
        self.to_absolute(relative)
    }

    /// Geographic point of an absolute grid coordinate.
    pub fn planar_to_geo(&self, planar: PlanarPoint) -> Option<GeoPoint> {
        Some(local::inverse(self.to_relative(planar)?, self.geo))
    }
}

impl Default for ReferencePair {
    /// Block (-559, -395) sits at 36.138755°N 139.388908°E.
    fn default() -> Self {
        Self::new(
            GeoPoint::new(36.138755, 139.388908),
            PlanarPoint::new(-559, -395),
        )
    }
}
