//! Shared geographic primitives used across the map, editor, and gb modules.

use serde::{Deserialize, Serialize};

/// A WGS84 latitude/longitude pair.
///
/// Captured from a map click or a gb position stream and never mutated
/// afterwards; path edits replace or extend point sequences, they do not
/// move individual points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_new() {
        let c = Coordinate::new(38.1, -121.1);
        assert_eq!(c.latitude, 38.1);
        assert_eq!(c.longitude, -121.1);
    }

    #[test]
    fn test_coordinate_serialization_roundtrip() {
        let c = Coordinate::new(38.586298044283105, -121.35166610449501);
        let json = serde_json::to_string(&c).unwrap();
        let parsed: Coordinate = serde_json::from_str(&json).unwrap();
        assert_eq!(c, parsed);
    }

    #[test]
    fn test_coordinate_field_names_on_the_wire() {
        // Position streams deliver `latitude`/`longitude` keys
        let parsed: Coordinate =
            serde_json::from_str(r#"{"latitude": 38.2, "longitude": -121.2}"#).unwrap();
        assert_eq!(parsed, Coordinate::new(38.2, -121.2));
    }
}
