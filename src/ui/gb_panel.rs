use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::editor::{SelectGbRequest, SelectedGb};
use crate::gb::GbRegistry;
use crate::map::GbPaths;
use crate::theme;

/// Side panel listing the fleet; clicking a badge selects that gb
pub fn gb_panel_ui(
    mut contexts: EguiContexts,
    registry: Res<GbRegistry>,
    paths: Res<GbPaths>,
    selected: Res<SelectedGb>,
    mut select_events: MessageWriter<SelectGbRequest>,
) -> Result {
    egui::SidePanel::left("gb_panel")
        .default_width(180.0)
        .show(contexts.ctx_mut()?, |ui| {
            ui.add_space(6.0);
            ui.heading(format!("Gbs ({})", registry.len()));
            ui.separator();

            if registry.is_empty() {
                ui.label(egui::RichText::new("No gbs online").color(egui::Color32::GRAY));
                return;
            }

            for username in registry.usernames() {
                let Some(gb) = registry.get(username) else {
                    continue;
                };

                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new("●").color(theme::to_egui_color(gb.color)),
                    );

                    let is_selected = selected.id == username;
                    if ui.selectable_label(is_selected, username).clicked() && !is_selected {
                        select_events.write(SelectGbRequest {
                            id: username.to_string(),
                        });
                    }

                    if paths.contains(username) {
                        ui.label(
                            egui::RichText::new("path")
                                .color(egui::Color32::GRAY)
                                .size(10.0),
                        );
                    }
                });
            }
        });
    Ok(())
}
