//! The path collection: one geometry per gb path identifier.

use std::collections::HashMap;

use bevy::prelude::*;

use crate::common::Coordinate;
use crate::constants::LOCATION_KEY_SUFFIX;

use super::geometry::PathGeometry;

/// Mapping from path identifier to geometry.
///
/// Owned exclusively by the map module and mutated only from the main
/// schedule: click handling, position updates, and explicit clear/add
/// commands. Lives for the whole app.
#[derive(Resource, Default)]
pub struct GbPaths {
    paths: HashMap<String, PathGeometry>,
}

impl GbPaths {
    /// Insert or overwrite the geometry under `id`.
    pub fn insert(&mut self, id: impl Into<String>, geometry: PathGeometry) {
        self.paths.insert(id.into(), geometry);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.paths.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&PathGeometry> {
        self.paths.get(id)
    }

    /// Remove the entry under `id`. No-op (false) when absent.
    pub fn remove(&mut self, id: &str) -> bool {
        self.paths.remove(id).is_some()
    }

    /// Append a point to the polyline under `id`.
    ///
    /// Returns false when no entry exists or the entry is a marker.
    pub fn append_point(&mut self, id: &str, coordinate: Coordinate) -> bool {
        self.paths
            .get_mut(id)
            .map(|geometry| geometry.append(coordinate))
            .unwrap_or(false)
    }

    /// The ordered coordinates of the polyline under `id`, if one exists.
    pub fn polyline_points(&self, id: &str) -> Option<&[Coordinate]> {
        self.get(id).and_then(|geometry| geometry.points())
    }

    /// Key of a gb's live-location marker entry.
    pub fn location_key(username: &str) -> String {
        format!("{}{}", username, LOCATION_KEY_SUFFIX)
    }

    /// (Re)write the live-location marker for `username`.
    pub fn set_location_marker(
        &mut self,
        username: &str,
        center: Coordinate,
        radius: f32,
        color: Color,
    ) {
        self.insert(
            Self::location_key(username),
            PathGeometry::marker(center, radius, color),
        );
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PathGeometry)> {
        self.paths.iter().map(|(id, g)| (id.as_str(), g))
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme;

    fn polyline(points: Vec<Coordinate>) -> PathGeometry {
        PathGeometry::polyline(points, theme::PATH_DEFAULT)
    }

    #[test]
    fn test_empty_by_default() {
        let paths = GbPaths::default();
        assert!(paths.is_empty());
        assert!(!paths.contains("gb1"));
    }

    #[test]
    fn test_insert_then_contains() {
        let mut paths = GbPaths::default();
        paths.insert("gb1", polyline(vec![Coordinate::new(38.1, -121.1)]));
        assert!(paths.contains("gb1"));
        assert_eq!(paths.len(), 1);
    }

    #[test]
    fn test_insert_overwrites_existing() {
        let mut paths = GbPaths::default();
        paths.insert("gb1", polyline(vec![Coordinate::new(38.1, -121.1)]));
        paths.insert(
            "gb1",
            polyline(vec![Coordinate::new(38.5, -121.5), Coordinate::new(38.6, -121.6)]),
        );
        assert_eq!(paths.len(), 1);
        assert_eq!(paths.polyline_points("gb1").unwrap().len(), 2);
    }

    #[test]
    fn test_remove_then_contains_is_false() {
        let mut paths = GbPaths::default();
        paths.insert("gb1", polyline(vec![]));
        assert!(paths.remove("gb1"));
        assert!(!paths.contains("gb1"));
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut paths = GbPaths::default();
        assert!(!paths.remove("gb1"));
        assert!(paths.is_empty());
    }

    #[test]
    fn test_append_point_extends_in_order() {
        let mut paths = GbPaths::default();
        paths.insert(
            "gb1",
            polyline(vec![Coordinate::new(38.1, -121.1), Coordinate::new(38.2, -121.2)]),
        );

        assert!(paths.append_point("gb1", Coordinate::new(38.3, -121.3)));

        let points = paths.polyline_points("gb1").unwrap();
        assert_eq!(
            points,
            &[
                Coordinate::new(38.1, -121.1),
                Coordinate::new(38.2, -121.2),
                Coordinate::new(38.3, -121.3),
            ]
        );
    }

    #[test]
    fn test_append_point_without_entry_fails() {
        let mut paths = GbPaths::default();
        assert!(!paths.append_point("gb1", Coordinate::new(38.1, -121.1)));
        assert!(!paths.contains("gb1"));
    }

    #[test]
    fn test_append_point_on_marker_fails() {
        let mut paths = GbPaths::default();
        paths.set_location_marker(
            "gb1",
            Coordinate::new(38.1, -121.1),
            5.0,
            theme::GB_FALLBACK,
        );
        let key = GbPaths::location_key("gb1");
        assert!(!paths.append_point(&key, Coordinate::new(38.2, -121.2)));
    }

    #[test]
    fn test_location_marker_key_and_overwrite() {
        let mut paths = GbPaths::default();
        paths.set_location_marker(
            "gb1",
            Coordinate::new(38.1, -121.1),
            5.0,
            theme::GB_FALLBACK,
        );
        paths.set_location_marker(
            "gb1",
            Coordinate::new(38.2, -121.2),
            5.0,
            theme::GB_FALLBACK,
        );

        assert!(paths.contains("gb1-location"));
        assert_eq!(paths.len(), 1);
        match paths.get("gb1-location").unwrap() {
            PathGeometry::CircleMarker { center, .. } => {
                assert_eq!(*center, Coordinate::new(38.2, -121.2));
            }
            other => panic!("expected marker, got {:?}", other),
        }
    }

    #[test]
    fn test_polyline_points_on_marker_is_none() {
        let mut paths = GbPaths::default();
        paths.set_location_marker(
            "gb1",
            Coordinate::new(38.1, -121.1),
            5.0,
            theme::GB_FALLBACK,
        );
        assert!(paths.polyline_points("gb1-location").is_none());
    }
}
