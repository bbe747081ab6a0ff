//! Gb stream state resources and task components.

use std::collections::HashMap;

use bevy::prelude::*;
use bevy::tasks::Task;

use crate::common::Coordinate;
use crate::constants::{POSITION_POLL_INTERVAL, REGISTRY_POLL_INTERVAL};

use super::client::{GbRecord, SessionRecord};

/// Health of the backend streams, surfaced in the toolbar status area.
///
/// Each field holds the most recent failure of its stream and is cleared on
/// the next successful exchange.
#[derive(Resource, Default)]
pub struct GbStreamState {
    pub registry_error: Option<String>,
    pub position_error: Option<String>,
    pub publish_error: Option<String>,
    /// Whether a publish to an action stream is in flight
    pub is_publishing: bool,
    /// Whether at least one registry fetch has succeeded
    pub registry_seen: bool,
}

impl GbStreamState {
    /// First stream failure, if any, for the status label.
    pub fn data_unavailable(&self) -> Option<&str> {
        self.registry_error
            .as_deref()
            .or(self.position_error.as_deref())
    }
}

/// Message to push the selected path to its gb's action stream
#[derive(Message)]
pub struct SendToGbRequest;

/// Poll cadence for the registry
#[derive(Resource)]
pub struct RegistryPollTimer(pub Timer);

impl Default for RegistryPollTimer {
    fn default() -> Self {
        Self(Timer::from_seconds(
            REGISTRY_POLL_INTERVAL,
            TimerMode::Repeating,
        ))
    }
}

/// Poll cadence for the selected gb's position stream
#[derive(Resource)]
pub struct PositionPollTimer(pub Timer);

impl Default for PositionPollTimer {
    fn default() -> Self {
        Self(Timer::from_seconds(
            POSITION_POLL_INTERVAL,
            TimerMode::Repeating,
        ))
    }
}

/// Background task fetching the registry
#[derive(Component)]
pub struct RegistryFetchTask(pub Task<RegistryResult>);

/// Background task fetching one gb's position
#[derive(Component)]
pub struct PositionFetchTask(pub Task<PositionResult>);

/// Background task reading the session store
#[derive(Component)]
pub struct SessionFetchTask(pub Task<SessionResult>);

/// Background task publishing to an action stream
#[derive(Component)]
pub struct PublishTask(pub Task<PublishResult>);

/// Result of a registry fetch
pub struct RegistryResult {
    pub records: Option<HashMap<String, GbRecord>>,
    pub error: Option<String>,
}

impl RegistryResult {
    pub fn error(msg: String) -> Self {
        Self {
            records: None,
            error: Some(msg),
        }
    }
}

/// Result of a position fetch
pub struct PositionResult {
    pub gb: String,
    pub position: Option<Coordinate>,
    pub error: Option<String>,
}

impl PositionResult {
    pub fn error(gb: &str, msg: String) -> Self {
        Self {
            gb: gb.to_string(),
            position: None,
            error: Some(msg),
        }
    }
}

/// Result of a session read
pub struct SessionResult {
    pub record: Option<SessionRecord>,
    pub error: Option<String>,
}

impl SessionResult {
    pub fn error(msg: String) -> Self {
        Self {
            record: None,
            error: Some(msg),
        }
    }
}

/// Result of an action-stream publish
pub struct PublishResult {
    pub gb: String,
    pub success: bool,
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_state_healthy_by_default() {
        let state = GbStreamState::default();
        assert!(state.data_unavailable().is_none());
        assert!(!state.is_publishing);
    }

    #[test]
    fn test_data_unavailable_prefers_registry_error() {
        let state = GbStreamState {
            registry_error: Some("registry down".to_string()),
            position_error: Some("position down".to_string()),
            ..Default::default()
        };
        assert_eq!(state.data_unavailable(), Some("registry down"));
    }

    #[test]
    fn test_data_unavailable_falls_back_to_position_error() {
        let state = GbStreamState {
            position_error: Some("position down".to_string()),
            ..Default::default()
        };
        assert_eq!(state.data_unavailable(), Some("position down"));
    }
}
