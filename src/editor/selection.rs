//! The selected gb, read by every path command.

use bevy::prelude::*;

use crate::config::{AppConfig, RememberGbRequest};
use crate::constants::DEFAULT_SELECTED_GB;

#[derive(Resource)]
pub struct SelectedGb {
    pub id: String,
}

impl Default for SelectedGb {
    fn default() -> Self {
        Self {
            id: DEFAULT_SELECTED_GB.to_string(),
        }
    }
}

/// Message to change the selection (gb badge click)
#[derive(Message)]
pub struct SelectGbRequest {
    pub id: String,
}

/// Startup system to restore the remembered selection from config
pub fn apply_remembered_selection(config: Res<AppConfig>, mut selected: ResMut<SelectedGb>) {
    if let Some(ref gb) = config.data.remembered_gb {
        selected.id = gb.clone();
        info!("Restored gb selection '{}'", selected.id);
    }
}

/// System to apply selection requests and remember them
pub fn handle_gb_selection(
    mut events: MessageReader<SelectGbRequest>,
    mut selected: ResMut<SelectedGb>,
    mut remember_events: MessageWriter<RememberGbRequest>,
) {
    for event in events.read() {
        if selected.id == event.id {
            continue;
        }
        selected.id = event.id.clone();
        info!("Selected gb '{}'", selected.id);
        remember_events.write(RememberGbRequest {
            gb: selected.id.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selection() {
        let selected = SelectedGb::default();
        assert_eq!(selected.id, "gb1");
    }
}
