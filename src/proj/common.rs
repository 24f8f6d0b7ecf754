//! Common helpers for the local-grid math (meridional arc, metres → latitude).

use super::ellipsoid::Ellipsoid;

/// Flat-earth length of one degree of latitude (metres). Seeds and scales
/// every correction step of [`meters_to_latitude`].
pub const METERS_PER_DEGREE: f64 = 111_320.0;

/// Fixed number of correction steps in [`meters_to_latitude`].
pub const LATITUDE_ITERATIONS: usize = 3;

/// Meridional arc length (metres) between `base_lat` and `base_lat + delta_lat`.
///
/// Midpoint approximation: the meridional radius of curvature is evaluated once,
/// at the average of the two latitudes, instead of integrating along the arc.
/// Both arguments are in radians.
pub fn meridional_arc(ellipsoid: &Ellipsoid, delta_lat: f64, base_lat: f64) -> f64 {
    let avg_lat = base_lat + delta_lat / 2.0;
    ellipsoid.meridional_radius(avg_lat) * delta_lat
}

/// Latitude (degrees) reached by moving `meters` north of `base_lat` (degrees).
///
/// Inverts [`meridional_arc`] with a fixed number of flat-earth corrections. There
/// is no convergence test: output must stay bit-compatible with existing grids.
pub fn meters_to_latitude(ellipsoid: &Ellipsoid, meters: f64, base_lat: f64) -> f64 {
    let base_lat_rad = base_lat.to_radians();
    let mut lat = base_lat + meters / METERS_PER_DEGREE;

    for _ in 0..LATITUDE_ITERATIONS {
        let delta_lat = lat.to_radians() - base_lat_rad;
        let residual = meters - meridional_arc(ellipsoid, delta_lat, base_lat_rad);
        lat += residual / METERS_PER_DEGREE;
    }
    lat
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proj::ellipsoid::WGS84;
    use approx::assert_relative_eq;

    #[test]
    fn test_meridional_arc_zero_delta() {
        let base = 36.138755_f64.to_radians();
        assert_eq!(meridional_arc(&WGS84, 0.0, base), 0.0);
    }

    #[test]
    fn test_meridional_arc_one_degree() {
        // One degree of latitude around 36°N is ~110.95 km
        let base = 36.0_f64.to_radians();
        let m = meridional_arc(&WGS84, 1.0_f64.to_radians(), base);
        assert!(m > 110_900.0 && m < 111_000.0, "arc = {m}");
    }

    #[test]
    fn test_meridional_arc_antisymmetric_about_midpoint() {
        let lat0 = 36.0_f64.to_radians();
        let lat1 = 36.5_f64.to_radians();
        let north = meridional_arc(&WGS84, lat1 - lat0, lat0);
        let south = meridional_arc(&WGS84, lat0 - lat1, lat1);
        assert_relative_eq!(north, -south, epsilon = 1e-6);
    }

    #[test]
    fn test_meters_to_latitude_zero() {
        assert_eq!(meters_to_latitude(&WGS84, 0.0, 36.138755), 36.138755);
    }

    #[test]
    fn test_meters_to_latitude_inverts_arc() {
        let base = 36.138755;
        for &meters in &[-5_000.0, -300.0, 1.0, 1_000.0, 20_000.0] {
            let lat = meters_to_latitude(&WGS84, meters, base);
            let arc = meridional_arc(
                &WGS84,
                lat.to_radians() - base.to_radians(),
                base.to_radians(),
            );
            assert_relative_eq!(arc, meters, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_meters_to_latitude_stays_finite_for_large_offsets() {
        for &meters in &[-100_000.0, 100_000.0, 1e6] {
            let lat = meters_to_latitude(&WGS84, meters, 36.138755);
            assert!(lat.is_finite(), "lat = {lat} for {meters}");
        }
    }
}
