//! Dismissible error dialogs.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::export::CsvExportState;
use crate::gb::GbStreamState;

/// Dialog for a failed or refused CSV export
pub fn export_error_dialog_ui(
    mut contexts: EguiContexts,
    mut export_state: ResMut<CsvExportState>,
) -> Result {
    let Some(message) = export_state.error.clone() else {
        return Ok(());
    };

    egui::Window::new("Export Failed")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(contexts.ctx_mut()?, |ui| {
            ui.label(&message);
            ui.add_space(8.0);
            if ui.button("OK").clicked() {
                export_state.error = None;
            }
        });
    Ok(())
}

/// Dialog for a failed or refused action-stream publish
pub fn publish_error_dialog_ui(
    mut contexts: EguiContexts,
    mut stream_state: ResMut<GbStreamState>,
) -> Result {
    let Some(message) = stream_state.publish_error.clone() else {
        return Ok(());
    };

    egui::Window::new("Send Failed")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(contexts.ctx_mut()?, |ui| {
            ui.label(&message);
            ui.add_space(8.0);
            if ui.button("OK").clicked() {
                stream_state.publish_error = None;
            }
        });
    Ok(())
}
