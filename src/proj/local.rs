//! Local tangent-plane grid anchored at a base point.
//!
//! forward: x = R(φ₀)·(λ - λ₀), z = ρ((φ + φ₀)/2)·(φ - φ₀)
//! inverse: φ by fixed-step inversion of the arc, λ = λ₀ + x / R(φ)
//!
//! R is the parallel-circle radius and ρ the meridional radius of curvature.
//! The forward direction evaluates R at the base latitude while the inverse
//! evaluates it at the recovered latitude, so the east-west component of a
//! round trip drifts as the north-south offset grows.

use crate::point::{GeoPoint, PlanarPoint};
use crate::proj::common::{meridional_arc, meters_to_latitude};
use crate::proj::ellipsoid::{Ellipsoid, WGS84};
use crate::proj::Projection;

/// WGS84 grid centred on a base point.
#[derive(Clone, Copy, Debug)]
pub struct LocalGrid {
    ellipsoid: Ellipsoid,
    base: GeoPoint,
    base_lat_rad: f64,
    base_parallel_radius: f64,
}

impl LocalGrid {
    pub fn new(ellipsoid: Ellipsoid, base: GeoPoint) -> Self {
        let base_lat_rad = base.latitude.to_radians();
        Self {
            ellipsoid,
            base,
            base_lat_rad,
            base_parallel_radius: ellipsoid.parallel_radius(base_lat_rad),
        }
    }

    pub fn wgs84(base: GeoPoint) -> Self {
        Self::new(WGS84, base)
    }

    /// Unrounded (east, north) offset of `target` from the base, in metres.
    ///
    /// NaN and infinite inputs propagate to the output.
    pub fn offset_meters(&self, target: GeoPoint) -> (f64, f64) {
        let delta_lat = target.latitude.to_radians() - self.base_lat_rad;
        let north = meridional_arc(&self.ellipsoid, delta_lat, self.base_lat_rad);

        let delta_lon = (target.longitude - self.base.longitude).to_radians();
        let east = self.base_parallel_radius * delta_lon;

        (east, north)
    }

    /// Block offset of `target`, or `None` if it is non-finite or beyond the `i64` grid.
    pub fn try_forward(&self, target: GeoPoint) -> Option<PlanarPoint> {
        let (east, north) = self.offset_meters(target);
        Some(PlanarPoint::new(try_to_block(east)?, try_to_block(north)?))
    }

    /// Geographic point at an unrounded (east, north) offset from the base.
    pub fn point_at(&self, east: f64, north: f64) -> GeoPoint {
        let latitude = meters_to_latitude(&self.ellipsoid, north, self.base.latitude);
        let parallel_radius = self.ellipsoid.parallel_radius(latitude.to_radians());
        let longitude = self.base.longitude + (east / parallel_radius).to_degrees();
        GeoPoint::new(latitude, longitude)
    }
}

impl Projection for LocalGrid {
    fn forward(&self, target: GeoPoint) -> PlanarPoint {
        let (east, north) = self.offset_meters(target);
        PlanarPoint::new(to_block(east), to_block(north))
    }

    fn inverse(&self, offset: PlanarPoint) -> GeoPoint {
        self.point_at(offset.x as f64, offset.z as f64)
    }

    fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }
}

/// Round a metre distance to the nearest block, ties to even.
///
/// Non-finite values follow the saturating `as` cast: NaN becomes 0.
fn to_block(meters: f64) -> i64 {
    meters.round_ties_even() as i64
}

/// Rounded block, or `None` when it is not representable as `i64`.
fn try_to_block(meters: f64) -> Option<i64> {
    let rounded = meters.round_ties_even();
    // [-2^63, 2^63)
    (i64::MIN as f64..-(i64::MIN as f64))
        .contains(&rounded)
        .then_some(rounded as i64)
}

/// Offset of `target` from `base` on the WGS84 block grid.
pub fn forward(target: GeoPoint, base: GeoPoint) -> PlanarPoint {
    LocalGrid::wgs84(base).forward(target)
}

/// Geographic point at a block offset from `base` on the WGS84 grid.
pub fn inverse(offset: PlanarPoint, base: GeoPoint) -> GeoPoint {
    LocalGrid::wgs84(base).inverse(offset)
}
