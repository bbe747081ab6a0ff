//! Bevy systems wiring the backend streams into map state.
//!
//! All HTTP work runs on the async task pool; these systems only spawn
//! tasks and drain finished ones, so the update loop never blocks. A
//! position fetch is only started once the registry entry for the gb is
//! recorded, so a position update can never precede its registry record.

use bevy::prelude::*;
use bevy::tasks::AsyncComputeTaskPool;
use futures_lite::future;

use crate::config::AppConfig;
use crate::constants::{CSV_ACTION_CHANNEL, LOCATION_MARKER_RADIUS};
use crate::editor::SelectedGb;
use crate::map::GbPaths;
use crate::theme;

use super::client;
use super::registry::{Gb, GbRegistry, UserSession};
use super::state::{
    GbStreamState, PositionFetchTask, PositionPollTimer, PublishTask, RegistryFetchTask,
    RegistryPollTimer, SendToGbRequest, SessionFetchTask,
};

/// Startup: read the session store once
pub fn start_session_fetch(mut commands: Commands, config: Res<AppConfig>) {
    let base_url = config.data.backend_url.clone();
    let task_pool = AsyncComputeTaskPool::get();
    let task = task_pool.spawn(async move { client::fetch_session(&base_url) });
    commands.spawn(SessionFetchTask(task));
}

/// Startup: fetch the registry immediately instead of waiting a poll period
pub fn start_registry_fetch(mut commands: Commands, config: Res<AppConfig>) {
    spawn_registry_fetch(&mut commands, &config);
}

fn spawn_registry_fetch(commands: &mut Commands, config: &AppConfig) {
    let base_url = config.data.backend_url.clone();
    let task_pool = AsyncComputeTaskPool::get();
    let task = task_pool.spawn(async move { client::fetch_registry(&base_url) });
    commands.spawn(RegistryFetchTask(task));
}

/// Re-fetch the registry on the poll timer
pub fn tick_registry_poll(
    mut commands: Commands,
    time: Res<Time>,
    mut timer: ResMut<RegistryPollTimer>,
    config: Res<AppConfig>,
    in_flight: Query<(), With<RegistryFetchTask>>,
) {
    if !timer.0.tick(time.delta()).just_finished() {
        return;
    }
    if !in_flight.is_empty() {
        return;
    }
    spawn_registry_fetch(&mut commands, &config);
}

/// Drain finished registry fetches into the recorded device set
pub fn poll_registry_tasks(
    mut commands: Commands,
    mut tasks: Query<(Entity, &mut RegistryFetchTask)>,
    mut registry: ResMut<GbRegistry>,
    mut stream_state: ResMut<GbStreamState>,
) {
    for (entity, mut task) in tasks.iter_mut() {
        let Some(result) = future::block_on(future::poll_once(&mut task.0)) else {
            continue;
        };

        match result.records {
            Some(records) => {
                let update = records
                    .into_iter()
                    .map(|(id, record)| {
                        let color = record
                            .color
                            .as_deref()
                            .map(theme::parse_gb_color)
                            .unwrap_or(theme::GB_FALLBACK);
                        (
                            id,
                            Gb {
                                username: record.username,
                                color,
                            },
                        )
                    })
                    .collect();
                registry.apply_update(update);
                stream_state.registry_seen = true;
                stream_state.registry_error = None;
            }
            None => {
                if let Some(error) = result.error {
                    warn!("{}", error);
                    stream_state.registry_error = Some(error);
                }
            }
        }

        commands.entity(entity).despawn();
    }
}

/// Drain the session read into the user session resource
pub fn poll_session_tasks(
    mut commands: Commands,
    mut tasks: Query<(Entity, &mut SessionFetchTask)>,
    mut session: ResMut<UserSession>,
) {
    for (entity, mut task) in tasks.iter_mut() {
        let Some(result) = future::block_on(future::poll_once(&mut task.0)) else {
            continue;
        };

        match result.record {
            Some(record) => {
                info!("Signed in as '{}' ({})", record.username, record.role);
                session.username = Some(record.username);
                session.role = Some(record.role);
            }
            None => {
                if let Some(error) = result.error {
                    warn!("{}", error);
                } else {
                    info!("No session, running anonymously");
                }
            }
        }

        commands.entity(entity).despawn();
    }
}

/// Poll the selected gb's position stream.
///
/// Only runs once the registry has recorded the gb, which keeps the
/// registry-before-position ordering guarantee.
pub fn tick_position_poll(
    mut commands: Commands,
    time: Res<Time>,
    mut timer: ResMut<PositionPollTimer>,
    config: Res<AppConfig>,
    registry: Res<GbRegistry>,
    selected: Res<SelectedGb>,
    in_flight: Query<(), With<PositionFetchTask>>,
) {
    if !timer.0.tick(time.delta()).just_finished() {
        return;
    }
    if !in_flight.is_empty() || !registry.contains(&selected.id) {
        return;
    }

    let base_url = config.data.backend_url.clone();
    let gb = selected.id.clone();
    let task_pool = AsyncComputeTaskPool::get();
    let task = task_pool.spawn(async move { client::fetch_position(&base_url, &gb) });
    commands.spawn(PositionFetchTask(task));
}

/// Drain finished position fetches into location markers
pub fn poll_position_tasks(
    mut commands: Commands,
    mut tasks: Query<(Entity, &mut PositionFetchTask)>,
    registry: Res<GbRegistry>,
    mut paths: ResMut<GbPaths>,
    mut stream_state: ResMut<GbStreamState>,
) {
    for (entity, mut task) in tasks.iter_mut() {
        let Some(result) = future::block_on(future::poll_once(&mut task.0)) else {
            continue;
        };

        match result.position {
            // The registry may have emptied while the fetch was in flight;
            // a marker without a recorded gb would be unkeyed, so drop it.
            Some(position) => {
                if let Some(gb) = registry.get(&result.gb) {
                    paths.set_location_marker(
                        &gb.username,
                        position,
                        LOCATION_MARKER_RADIUS,
                        gb.color,
                    );
                    stream_state.position_error = None;
                }
            }
            None => {
                if let Some(error) = result.error {
                    warn!("{}", error);
                    stream_state.position_error = Some(error);
                }
            }
        }

        commands.entity(entity).despawn();
    }
}

/// Push the selected path to its gb's action stream
pub fn handle_send_requests(
    mut commands: Commands,
    mut events: MessageReader<SendToGbRequest>,
    config: Res<AppConfig>,
    paths: Res<GbPaths>,
    selected: Res<SelectedGb>,
    mut stream_state: ResMut<GbStreamState>,
) {
    for _ in events.read() {
        if stream_state.is_publishing {
            warn!("Publish already in progress");
            continue;
        }

        let Some(points) = paths.polyline_points(&selected.id) else {
            let message = format!("No path exists for '{}' yet", selected.id);
            warn!("{}", message);
            stream_state.publish_error = Some(message);
            continue;
        };

        let base_url = config.data.backend_url.clone();
        let gb = selected.id.clone();
        let points = points.to_vec();

        stream_state.is_publishing = true;
        stream_state.publish_error = None;

        let task_pool = AsyncComputeTaskPool::get();
        let task = task_pool.spawn(async move {
            client::publish_action(&base_url, &gb, CSV_ACTION_CHANNEL, &points)
        });
        commands.spawn(PublishTask(task));
    }
}

/// Drain finished publishes
pub fn poll_publish_tasks(
    mut commands: Commands,
    mut tasks: Query<(Entity, &mut PublishTask)>,
    mut stream_state: ResMut<GbStreamState>,
) {
    for (entity, mut task) in tasks.iter_mut() {
        let Some(result) = future::block_on(future::poll_once(&mut task.0)) else {
            continue;
        };

        stream_state.is_publishing = false;

        if result.success {
            info!(
                "Path sent to '{}' on the '{}' channel",
                result.gb, CSV_ACTION_CHANNEL
            );
        } else if let Some(error) = result.error {
            error!("{}", error);
            stream_state.publish_error = Some(error);
        }

        commands.entity(entity).despawn();
    }
}
