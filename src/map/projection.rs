//! Local projection between geographic coordinates and the 2D world plane.

use bevy::prelude::*;

use crate::common::Coordinate;
use crate::constants::{MAP_CENTER_LATITUDE, MAP_CENTER_LONGITUDE};

/// Meters per degree of latitude (spherical approximation)
pub const METERS_PER_DEGREE_LATITUDE: f64 = 111_320.0;

/// Equirectangular projection anchored at a fixed origin.
///
/// One world unit is one meter at the origin latitude; the origin maps to
/// the world origin. Accurate enough for a working area of a few kilometers,
/// which is all a gb path covers.
#[derive(Resource, Debug, Clone, Copy)]
pub struct MapProjection {
    pub origin: Coordinate,
}

impl Default for MapProjection {
    fn default() -> Self {
        Self {
            origin: Coordinate::new(MAP_CENTER_LATITUDE, MAP_CENTER_LONGITUDE),
        }
    }
}

impl MapProjection {
    fn meters_per_degree_longitude(&self) -> f64 {
        METERS_PER_DEGREE_LATITUDE * self.origin.latitude.to_radians().cos()
    }

    /// World position of a coordinate. East is +x, north is +y.
    pub fn world_of(&self, coordinate: Coordinate) -> Vec2 {
        let x = (coordinate.longitude - self.origin.longitude) * self.meters_per_degree_longitude();
        let y = (coordinate.latitude - self.origin.latitude) * METERS_PER_DEGREE_LATITUDE;
        Vec2::new(x as f32, y as f32)
    }

    /// Coordinate under a world position (inverse of [`world_of`](Self::world_of)).
    pub fn coordinate_of(&self, world: Vec2) -> Coordinate {
        let longitude = self.origin.longitude + world.x as f64 / self.meters_per_degree_longitude();
        let latitude = self.origin.latitude + world.y as f64 / METERS_PER_DEGREE_LATITUDE;
        Coordinate::new(latitude, longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_maps_to_world_origin() {
        let projection = MapProjection::default();
        let world = projection.world_of(projection.origin);
        assert!(world.length() < 1e-6);
    }

    #[test]
    fn test_north_is_positive_y() {
        let projection = MapProjection::default();
        let north = Coordinate::new(projection.origin.latitude + 0.001, projection.origin.longitude);
        let world = projection.world_of(north);
        assert!(world.y > 0.0);
        assert!(world.x.abs() < 1e-3);
    }

    #[test]
    fn test_east_is_positive_x() {
        let projection = MapProjection::default();
        let east = Coordinate::new(projection.origin.latitude, projection.origin.longitude + 0.001);
        let world = projection.world_of(east);
        assert!(world.x > 0.0);
        assert!(world.y.abs() < 1e-3);
    }

    #[test]
    fn test_one_degree_of_latitude_is_about_111_km() {
        let projection = MapProjection::default();
        let north = Coordinate::new(projection.origin.latitude + 1.0, projection.origin.longitude);
        let world = projection.world_of(north);
        assert!((world.y - METERS_PER_DEGREE_LATITUDE as f32).abs() < 1.0);
    }

    #[test]
    fn test_roundtrip_near_origin() {
        let projection = MapProjection::default();
        let coordinate = Coordinate::new(38.5871, -121.3502);
        let back = projection.coordinate_of(projection.world_of(coordinate));
        // f32 world positions limit precision to well under a meter here
        assert!((back.latitude - coordinate.latitude).abs() < 1e-5);
        assert!((back.longitude - coordinate.longitude).abs() < 1e-5);
    }
}
