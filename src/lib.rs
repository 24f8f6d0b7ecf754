//! Conversion between WGS84 latitude/longitude and the whole-metre block grid
//! of a Minecraft world, anchored at a single reference point.

pub mod batch;
pub mod cli;
pub mod config;
pub mod error;
pub mod point;
pub mod proj;

pub use error::{Error, Result};
pub use point::{GeoPoint, PlanarPoint, ReferencePair};
