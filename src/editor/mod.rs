mod camera;
mod click;
mod mode;
pub mod params;
mod selection;

pub use camera::{CameraZoom, MapCamera};
pub use mode::InteractionMode;
pub use selection::{SelectGbRequest, SelectedGb};

use bevy::prelude::*;

use crate::config::ConfigLoaded;

pub struct EditorPlugin;

impl Plugin for EditorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InteractionMode>()
            .init_resource::<SelectedGb>()
            .add_message::<SelectGbRequest>()
            .add_systems(
                Startup,
                (
                    camera::spawn_camera,
                    selection::apply_remembered_selection.after(ConfigLoaded),
                ),
            )
            .add_systems(
                Update,
                (
                    camera::camera_pan,
                    camera::camera_zoom,
                    camera::apply_camera_zoom,
                    mode::handle_mode_shortcuts,
                    click::handle_map_click,
                    click::render_add_preview,
                    selection::handle_gb_selection.run_if(on_message::<SelectGbRequest>),
                ),
            );
    }
}
