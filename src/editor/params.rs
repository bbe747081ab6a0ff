//! Common SystemParam bundles for editor systems.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiContexts;

use crate::common::Coordinate;
use crate::map::MapProjection;

use super::camera::MapCamera;

/// Bundled camera and window queries for cursor-to-world calculations
#[derive(SystemParam)]
pub struct CameraParams<'w, 's> {
    pub window: Query<'w, 's, &'static Window, With<PrimaryWindow>>,
    pub camera: Query<'w, 's, (&'static Camera, &'static GlobalTransform), With<MapCamera>>,
}

impl CameraParams<'_, '_> {
    /// Get the world position of the cursor, if available
    pub fn cursor_world_pos(&self) -> Option<Vec2> {
        let window = self.window.single().ok()?;
        let (camera, transform) = self.camera.single().ok()?;
        let cursor_pos = window.cursor_position()?;
        camera.viewport_to_world_2d(transform, cursor_pos).ok()
    }

    /// Get the geographic coordinate under the cursor, if available
    pub fn cursor_coordinate(&self, projection: &MapProjection) -> Option<Coordinate> {
        self.cursor_world_pos()
            .map(|world| projection.coordinate_of(world))
    }
}

/// Check if the cursor is over egui UI
pub fn is_cursor_over_ui(contexts: &mut EguiContexts) -> bool {
    contexts
        .ctx_mut()
        .map(|ctx| ctx.is_pointer_over_area())
        .unwrap_or(false)
}
