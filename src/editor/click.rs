//! Map click handling: extend the selected path or place a new one.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::common::Coordinate;
use crate::map::{GbPaths, MapProjection, PathGeometry};
use crate::theme;

use super::mode::InteractionMode;
use super::params::{is_cursor_over_ui, CameraParams};
use super::selection::SelectedGb;

/// What a single click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// No mode is driving clicks
    Ignored,
    /// Point appended to the selected path
    Appended,
    /// Edit mode, but the selection has no extendable path
    NoPathToExtend,
    /// First point of a new path captured
    FirstPointCaptured,
    /// Second point placed; new path committed, add mode turned off
    PathCreated,
}

/// Apply one map click to the current mode.
///
/// Editing appends to the selected polyline (a checked no-op when none
/// exists). Adding runs the two-click protocol: the first click captures a
/// pending point, the second commits a two-point path under the selection
/// (overwriting any prior geometry there) and returns the mode to idle.
pub fn apply_click(
    mode: &mut InteractionMode,
    paths: &mut GbPaths,
    selected: &str,
    coordinate: Coordinate,
) -> ClickOutcome {
    match *mode {
        InteractionMode::EditingExisting => {
            if paths.append_point(selected, coordinate) {
                ClickOutcome::Appended
            } else {
                ClickOutcome::NoPathToExtend
            }
        }
        InteractionMode::AddingPath { first: None } => {
            *mode = InteractionMode::AddingPath {
                first: Some(coordinate),
            };
            ClickOutcome::FirstPointCaptured
        }
        InteractionMode::AddingPath { first: Some(first) } => {
            paths.insert(
                selected,
                PathGeometry::polyline(vec![first, coordinate], theme::PATH_DEFAULT),
            );
            *mode = InteractionMode::Idle;
            ClickOutcome::PathCreated
        }
        InteractionMode::Idle => ClickOutcome::Ignored,
    }
}

/// Translate mouse clicks on the map into path edits.
pub fn handle_map_click(
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mode: ResMut<InteractionMode>,
    mut paths: ResMut<GbPaths>,
    selected: Res<SelectedGb>,
    projection: Res<MapProjection>,
    camera: CameraParams,
    mut contexts: EguiContexts,
) {
    if is_cursor_over_ui(&mut contexts) {
        return;
    }

    // Right click cancels an in-progress add
    if mouse_button.just_pressed(MouseButton::Right)
        && let InteractionMode::AddingPath { first: Some(_) } = *mode
    {
        *mode = InteractionMode::AddingPath { first: None };
        return;
    }

    if !mouse_button.just_pressed(MouseButton::Left) {
        return;
    }

    let Some(coordinate) = camera.cursor_coordinate(&projection) else {
        return;
    };

    match apply_click(&mut mode, &mut paths, &selected.id, coordinate) {
        ClickOutcome::Appended => {
            debug!("Appended point to '{}'", selected.id);
        }
        ClickOutcome::NoPathToExtend => {
            warn!("No path to extend for '{}'", selected.id);
        }
        ClickOutcome::FirstPointCaptured => {
            debug!("First point captured for '{}'", selected.id);
        }
        ClickOutcome::PathCreated => {
            info!("Created new path for '{}'", selected.id);
        }
        ClickOutcome::Ignored => {}
    }
}

/// Preview line from the pending first point to the cursor while adding.
pub fn render_add_preview(
    mut gizmos: Gizmos,
    mode: Res<InteractionMode>,
    projection: Res<MapProjection>,
    camera: CameraParams,
) {
    let Some(first) = mode.pending_first() else {
        return;
    };

    let start = projection.world_of(first);
    gizmos.circle_2d(
        Isometry2d::from_translation(start),
        0.8,
        theme::PENDING_POINT,
    );

    let Some(cursor) = camera.cursor_world_pos() else {
        return;
    };

    let preview_color = theme::PATH_DEFAULT.with_alpha(0.5);
    gizmos.line_2d(start, cursor, preview_color);
}
