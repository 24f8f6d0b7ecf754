//! Converter configuration: the reference pair and the CSV column names.
//!
//! Every field is optional in the TOML file; anything left out falls back to
//! the built-in defaults.
//!
//! ```toml
//! [reference.geo]
//! latitude = 36.138755
//! longitude = 139.388908
//!
//! [reference.planar]
//! x = -559
//! z = -395
//!
//! [columns]
//! lat = "lat"
//! lng = "lng"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::point::ReferencePair;

/// Top-level converter configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where block (x, z) sits on the globe
    pub reference: ReferencePair,
    /// Column names used by the CSV converter
    pub columns: ColumnNames,
}

/// CSV column names for both conversion directions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnNames {
    /// Latitude column: read by lat2mc, written by mc2lat
    pub lat: String,
    /// Longitude column: read by lat2mc, written by mc2lat
    pub lng: String,
    /// Block x column: written by lat2mc, read by mc2lat
    pub x: String,
    /// Block z column: written by lat2mc, read by mc2lat
    #[serde(alias = "y")]
    pub z: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            lat: "lat".to_string(),
            lng: "lng".to_string(),
            x: "minecraft_x".to_string(),
            z: "minecraft_z".to_string(),
        }
    }
}

impl Config {
    /// Load a config from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from `path` when given, otherwise use the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::{GeoPoint, PlanarPoint};
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.reference.planar, PlanarPoint::new(-559, -395));
        assert_eq!(config.reference.geo, GeoPoint::new(36.138755, 139.388908));
        assert_eq!(config.columns.lat, "lat");
        assert_eq!(config.columns.x, "minecraft_x");
    }

    #[test]
    fn test_empty_file_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_reference_only_keeps_default_columns() {
        let config: Config = toml::from_str(
            r#"
            [reference.geo]
            latitude = 35.6812
            longitude = 139.7671

            [reference.planar]
            x = 100
            y = -20
            "#,
        )
        .unwrap();
        assert_eq!(config.reference.geo, GeoPoint::new(35.6812, 139.7671));
        assert_eq!(config.reference.planar, PlanarPoint::new(100, -20));
        assert_eq!(config.columns, ColumnNames::default());
    }

    #[test]
    fn test_partial_columns() {
        let config: Config = toml::from_str(
            r#"
            [columns]
            lat = "latitude"
            "#,
        )
        .unwrap();
        assert_eq!(config.columns.lat, "latitude");
        assert_eq!(config.columns.lng, "lng");
        assert_eq!(config.reference, ReferencePair::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[columns]\nlng = \"lon\"").unwrap();
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.columns.lng, "lon");
    }

    #[test]
    fn test_load_errors() {
        let missing = Config::load(Path::new("/nonexistent/latlng2minecraft.toml"));
        assert!(matches!(missing, Err(ConfigError::Io { .. })));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[reference.planar]\nx = \"east\"").unwrap();
        assert!(matches!(
            Config::load(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }
}
