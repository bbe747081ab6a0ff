//! Geometry values stored in the path collection.

use bevy::prelude::*;

use crate::common::Coordinate;

/// Geometry rendered on the map for one path-collection entry.
///
/// A polyline is an editable, ordered point sequence; a circle marker is a
/// gb's live position and carries no editable points.
#[derive(Debug, Clone, PartialEq)]
pub enum PathGeometry {
    Polyline {
        points: Vec<Coordinate>,
        color: Color,
    },
    CircleMarker {
        center: Coordinate,
        /// Radius in meters
        radius: f32,
        color: Color,
    },
}

impl PathGeometry {
    pub fn polyline(points: Vec<Coordinate>, color: Color) -> Self {
        Self::Polyline { points, color }
    }

    pub fn marker(center: Coordinate, radius: f32, color: Color) -> Self {
        Self::CircleMarker {
            center,
            radius,
            color,
        }
    }

    /// The ordered point sequence of a polyline. Markers have none.
    pub fn points(&self) -> Option<&[Coordinate]> {
        match self {
            Self::Polyline { points, .. } => Some(points),
            Self::CircleMarker { .. } => None,
        }
    }

    /// Append a point to a polyline in place. Returns false for markers.
    pub fn append(&mut self, coordinate: Coordinate) -> bool {
        match self {
            Self::Polyline { points, .. } => {
                points.push(coordinate);
                true
            }
            Self::CircleMarker { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme;

    #[test]
    fn test_polyline_points_in_order() {
        let geometry = PathGeometry::polyline(
            vec![Coordinate::new(38.1, -121.1), Coordinate::new(38.2, -121.2)],
            theme::PATH_DEFAULT,
        );
        let points = geometry.points().unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0], Coordinate::new(38.1, -121.1));
        assert_eq!(points[1], Coordinate::new(38.2, -121.2));
    }

    #[test]
    fn test_append_to_polyline() {
        let mut geometry =
            PathGeometry::polyline(vec![Coordinate::new(38.1, -121.1)], theme::PATH_DEFAULT);
        assert!(geometry.append(Coordinate::new(38.3, -121.3)));
        assert_eq!(geometry.points().unwrap().len(), 2);
        assert_eq!(
            geometry.points().unwrap()[1],
            Coordinate::new(38.3, -121.3)
        );
    }

    #[test]
    fn test_marker_has_no_points() {
        let geometry =
            PathGeometry::marker(Coordinate::new(38.1, -121.1), 5.0, theme::GB_FALLBACK);
        assert!(geometry.points().is_none());
    }

    #[test]
    fn test_append_to_marker_is_rejected() {
        let mut geometry =
            PathGeometry::marker(Coordinate::new(38.1, -121.1), 5.0, theme::GB_FALLBACK);
        assert!(!geometry.append(Coordinate::new(38.2, -121.2)));
        assert_eq!(
            geometry,
            PathGeometry::marker(Coordinate::new(38.1, -121.1), 5.0, theme::GB_FALLBACK)
        );
    }

}
