mod geometry;
mod paths;
mod projection;
mod rendering;

pub use geometry::PathGeometry;
pub use paths::GbPaths;
pub use projection::MapProjection;
pub use rendering::GraticuleSettings;

use bevy::prelude::*;

pub struct MapPlugin;

impl Plugin for MapPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GbPaths>()
            .init_resource::<MapProjection>()
            .init_resource::<GraticuleSettings>()
            .add_systems(
                Update,
                (rendering::draw_graticule, rendering::render_gb_paths),
            );
    }
}
