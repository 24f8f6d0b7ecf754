pub mod common;
pub mod ellipsoid;
pub mod local;

use crate::point::{GeoPoint, PlanarPoint};

pub use local::{forward, inverse, LocalGrid};

/// A grid mapping between geographic points and block offsets from a fixed base.
///
/// Both directions are total: degenerate input yields a degenerate point, never an error.
pub trait Projection: Send + Sync {
    /// Forward: geographic point -> block offset from the base.
    fn forward(&self, target: GeoPoint) -> PlanarPoint;

    /// Inverse: block offset from the base -> geographic point.
    fn inverse(&self, offset: PlanarPoint) -> GeoPoint;

    /// Batch forward transform (default: loop).
    fn forward_batch(&self, targets: &[GeoPoint]) -> Vec<PlanarPoint> {
        targets.iter().map(|&t| self.forward(t)).collect()
    }

    /// Batch inverse transform.
    fn inverse_batch(&self, offsets: &[PlanarPoint]) -> Vec<GeoPoint> {
        offsets.iter().map(|&o| self.inverse(o)).collect()
    }

    fn ellipsoid(&self) -> &ellipsoid::Ellipsoid;
}
