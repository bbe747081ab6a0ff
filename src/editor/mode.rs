//! The interaction mode driving map clicks.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::common::Coordinate;

/// What a map click does right now.
///
/// A single value rather than a pair of edit/add flags, so only one mode can
/// ever drive a click. The pending first point of a new path lives inside
/// [`AddingPath`](InteractionMode::AddingPath); leaving that state by any
/// route discards it, so a fresh add session always starts clean.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionMode {
    /// Clicks are ignored
    #[default]
    Idle,
    /// Clicks append points to the selected gb's path
    EditingExisting,
    /// Two clicks define a brand-new two-point path
    AddingPath { first: Option<Coordinate> },
}

impl InteractionMode {
    /// Toggle edit mode. From an in-progress add, edit wins and the pending
    /// point is discarded.
    pub fn toggle_edit(&mut self) {
        *self = match self {
            InteractionMode::EditingExisting => InteractionMode::Idle,
            _ => InteractionMode::EditingExisting,
        };
    }

    /// Toggle add mode, starting with no pending point.
    pub fn toggle_add(&mut self) {
        *self = match self {
            InteractionMode::AddingPath { .. } => InteractionMode::Idle,
            _ => InteractionMode::AddingPath { first: None },
        };
    }

    /// Back to idle, discarding any pending point.
    pub fn cancel(&mut self) {
        *self = InteractionMode::Idle;
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, InteractionMode::EditingExisting)
    }

    pub fn is_adding(&self) -> bool {
        matches!(self, InteractionMode::AddingPath { .. })
    }

    /// The captured first point of an in-progress add, if any.
    pub fn pending_first(&self) -> Option<Coordinate> {
        match self {
            InteractionMode::AddingPath { first } => *first,
            _ => None,
        }
    }
}

/// Keyboard shortcuts for the interaction mode.
pub fn handle_mode_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut mode: ResMut<InteractionMode>,
    mut contexts: EguiContexts,
) {
    // Don't change modes if typing in a text field
    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.wants_keyboard_input()
    {
        return;
    }

    if keyboard.just_pressed(KeyCode::KeyE) {
        mode.toggle_edit();
        info!("Interaction mode: {:?}", *mode);
    } else if keyboard.just_pressed(KeyCode::KeyA) {
        mode.toggle_add();
        info!("Interaction mode: {:?}", *mode);
    } else if keyboard.just_pressed(KeyCode::Escape) && *mode != InteractionMode::Idle {
        mode.cancel();
        info!("Interaction mode: {:?}", *mode);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(InteractionMode::default(), InteractionMode::Idle);
    }

    #[test]
    fn test_toggle_edit_flips() {
        let mut mode = InteractionMode::Idle;
        mode.toggle_edit();
        assert!(mode.is_editing());
        mode.toggle_edit();
        assert_eq!(mode, InteractionMode::Idle);
    }

    #[test]
    fn test_toggle_add_flips() {
        let mut mode = InteractionMode::Idle;
        mode.toggle_add();
        assert_eq!(mode, InteractionMode::AddingPath { first: None });
        mode.toggle_add();
        assert_eq!(mode, InteractionMode::Idle);
    }

    #[test]
    fn test_edit_wins_over_in_progress_add() {
        let mut mode = InteractionMode::AddingPath {
            first: Some(Coordinate::new(38.1, -121.1)),
        };
        mode.toggle_edit();
        assert!(mode.is_editing());
        assert!(mode.pending_first().is_none());
    }

    #[test]
    fn test_toggle_add_from_editing_switches() {
        let mut mode = InteractionMode::EditingExisting;
        mode.toggle_add();
        assert_eq!(mode, InteractionMode::AddingPath { first: None });
    }

    #[test]
    fn test_leaving_add_discards_pending_point() {
        let mut mode = InteractionMode::AddingPath {
            first: Some(Coordinate::new(38.1, -121.1)),
        };
        mode.toggle_add();
        assert_eq!(mode, InteractionMode::Idle);

        // A fresh add session starts with no pending point
        mode.toggle_add();
        assert_eq!(mode, InteractionMode::AddingPath { first: None });
    }

    #[test]
    fn test_cancel_from_any_state() {
        let mut mode = InteractionMode::EditingExisting;
        mode.cancel();
        assert_eq!(mode, InteractionMode::Idle);

        let mut mode = InteractionMode::AddingPath {
            first: Some(Coordinate::new(38.1, -121.1)),
        };
        mode.cancel();
        assert_eq!(mode, InteractionMode::Idle);
    }
}
