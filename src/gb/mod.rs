mod client;
mod registry;
mod state;
mod systems;

pub use registry::{Gb, GbRegistry, UserSession};
pub use state::{GbStreamState, SendToGbRequest};

use bevy::prelude::*;

use crate::config::ConfigLoaded;

pub struct GbPlugin;

impl Plugin for GbPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GbRegistry>()
            .init_resource::<UserSession>()
            .init_resource::<GbStreamState>()
            .init_resource::<state::RegistryPollTimer>()
            .init_resource::<state::PositionPollTimer>()
            .add_message::<SendToGbRequest>()
            .add_systems(
                Startup,
                (systems::start_session_fetch, systems::start_registry_fetch)
                    .after(ConfigLoaded),
            )
            .add_systems(
                Update,
                (
                    systems::tick_registry_poll,
                    systems::poll_registry_tasks,
                    systems::poll_session_tasks,
                    systems::tick_position_poll,
                    systems::poll_position_tasks,
                    systems::handle_send_requests.run_if(on_message::<SendToGbRequest>),
                    systems::poll_publish_tasks,
                ),
            );
    }
}
