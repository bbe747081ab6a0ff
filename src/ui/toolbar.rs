use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::editor::{InteractionMode, SelectedGb};
use crate::export::ExportCsvRequest;
use crate::gb::{GbStreamState, SendToGbRequest, UserSession};
use crate::map::{GbPaths, GraticuleSettings};
use crate::theme;

/// Main toolbar: interaction modes, path commands, and stream status
#[allow(clippy::too_many_arguments)]
pub fn toolbar_ui(
    mut contexts: EguiContexts,
    mut mode: ResMut<InteractionMode>,
    mut paths: ResMut<GbPaths>,
    selected: Res<SelectedGb>,
    session: Res<UserSession>,
    stream_state: Res<GbStreamState>,
    mut graticule: ResMut<GraticuleSettings>,
    mut export_events: MessageWriter<ExportCsvRequest>,
    mut send_events: MessageWriter<SendToGbRequest>,
) -> Result {
    egui::TopBottomPanel::top("main_toolbar")
        .frame(
            egui::Frame::side_top_panel(&contexts.ctx_mut()?.style())
                .inner_margin(egui::Margin::symmetric(12, 8)),
        )
        .show(contexts.ctx_mut()?, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 4.0;

                // Mode buttons, green while active
                let edit_button = egui::Button::new(
                    egui::RichText::new("Edit [E]").size(14.0).strong(),
                )
                .min_size(egui::vec2(0.0, 28.0))
                .fill(theme::mode_button_fill(mode.is_editing()));
                if ui
                    .add(edit_button)
                    .on_hover_text("Clicks append points to the selected path")
                    .clicked()
                {
                    mode.toggle_edit();
                }

                let add_button = egui::Button::new(
                    egui::RichText::new("Add [A]").size(14.0).strong(),
                )
                .min_size(egui::vec2(0.0, 28.0))
                .fill(theme::mode_button_fill(mode.is_adding()));
                if ui
                    .add(add_button)
                    .on_hover_text("Two clicks define a new path")
                    .clicked()
                {
                    mode.toggle_add();
                }

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                if ui.button("Download CSV").clicked() {
                    export_events.write(ExportCsvRequest);
                }

                if ui.button("Send to Gb").clicked() {
                    send_events.write(SendToGbRequest);
                }

                if ui.button("Clear Path").clicked() && !paths.remove(&selected.id) {
                    debug!("Clear requested for '{}' which has no path", selected.id);
                }

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                ui.checkbox(&mut graticule.visible, "Grid");

                if let InteractionMode::AddingPath { first: Some(_) } = *mode {
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new("Click to place the second point")
                            .color(egui::Color32::GRAY)
                            .size(11.0),
                    );
                }

                // Right-aligned stream status
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some(error) = stream_state.data_unavailable() {
                        ui.colored_label(
                            theme::STATUS_ERROR,
                            egui::RichText::new("● DATA UNAVAILABLE").strong(),
                        )
                        .on_hover_text(error);
                    } else if stream_state.registry_seen {
                        ui.colored_label(
                            theme::STATUS_LIVE,
                            egui::RichText::new("● LIVE").strong(),
                        );
                    } else {
                        ui.colored_label(egui::Color32::GRAY, "connecting…");
                    }

                    if session.is_admin() {
                        ui.add_space(8.0);
                        ui.label(egui::RichText::new("admin").color(egui::Color32::GRAY));
                    }
                    if let Some(ref username) = session.username {
                        ui.label(egui::RichText::new(username).color(egui::Color32::GRAY));
                    }
                });
            });
        });
    Ok(())
}
