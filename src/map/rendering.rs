//! Gizmo rendering of the path collection and the graticule.

use bevy::prelude::*;

use crate::editor::{CameraZoom, MapCamera, SelectedGb};
use crate::theme;

use super::geometry::PathGeometry;
use super::paths::GbPaths;
use super::projection::MapProjection;

/// Radius in world units of the vertex dots on the selected path
const VERTEX_DOT_RADIUS: f32 = 0.6;

#[derive(Resource)]
pub struct GraticuleSettings {
    pub visible: bool,
    /// Line spacing in meters
    pub spacing: f32,
}

impl Default for GraticuleSettings {
    fn default() -> Self {
        Self {
            visible: true,
            spacing: 10.0,
        }
    }
}

/// Draw all paths and location markers in the collection.
pub fn render_gb_paths(
    mut gizmos: Gizmos,
    paths: Res<GbPaths>,
    projection: Res<MapProjection>,
    selected: Res<SelectedGb>,
) {
    if paths.is_empty() {
        return;
    }

    for (id, geometry) in paths.iter() {
        match geometry {
            PathGeometry::Polyline { points, color } => {
                for pair in points.windows(2) {
                    gizmos.line_2d(
                        projection.world_of(pair[0]),
                        projection.world_of(pair[1]),
                        *color,
                    );
                }

                // Vertex dots make the editable points of the active path visible
                if id == selected.id {
                    for point in points {
                        gizmos.circle_2d(
                            Isometry2d::from_translation(projection.world_of(*point)),
                            VERTEX_DOT_RADIUS,
                            theme::SELECTED_VERTEX,
                        );
                    }
                }
            }
            PathGeometry::CircleMarker {
                center,
                radius,
                color,
            } => {
                gizmos.circle_2d(
                    Isometry2d::from_translation(projection.world_of(*center)),
                    *radius,
                    *color,
                );
            }
        }
    }
}

/// Draw the graticule around the camera's view.
pub fn draw_graticule(
    mut gizmos: Gizmos,
    settings: Res<GraticuleSettings>,
    camera_query: Query<(&Transform, &CameraZoom), With<MapCamera>>,
) {
    if !settings.visible {
        return;
    }

    let Ok((camera_transform, zoom)) = camera_query.single() else {
        return;
    };

    let spacing = settings.spacing;
    let view_width = crate::constants::DEFAULT_WINDOW_WIDTH * zoom.scale;
    let view_height = crate::constants::DEFAULT_WINDOW_HEIGHT * zoom.scale;

    let camera_pos = camera_transform.translation.truncate();

    let start_x = ((camera_pos.x - view_width / 2.0) / spacing).floor() as i32;
    let end_x = ((camera_pos.x + view_width / 2.0) / spacing).ceil() as i32;
    let start_y = ((camera_pos.y - view_height / 2.0) / spacing).floor() as i32;
    let end_y = ((camera_pos.y + view_height / 2.0) / spacing).ceil() as i32;

    for x in start_x..=end_x {
        let x_pos = x as f32 * spacing;
        gizmos.line_2d(
            Vec2::new(x_pos, start_y as f32 * spacing),
            Vec2::new(x_pos, end_y as f32 * spacing),
            theme::GRATICULE_COLOR,
        );
    }

    for y in start_y..=end_y {
        let y_pos = y as f32 * spacing;
        gizmos.line_2d(
            Vec2::new(start_x as f32 * spacing, y_pos),
            Vec2::new(end_x as f32 * spacing, y_pos),
            theme::GRATICULE_COLOR,
        );
    }
}
