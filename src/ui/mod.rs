mod dialogs;
mod gb_panel;
mod toolbar;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        // Side panel renders first so the top panel fits beside it;
        // dialogs overlay last
        app.add_systems(
            EguiPrimaryContextPass,
            (
                gb_panel::gb_panel_ui,
                toolbar::toolbar_ui,
                dialogs::export_error_dialog_ui,
                dialogs::publish_error_dialog_ui,
            )
                .chain(),
        );
    }
}
