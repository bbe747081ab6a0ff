//! Centralized constants used across the application.
//!
//! This module contains magic numbers and configuration values that are used
//! in multiple places or would benefit from being named constants.

/// Default window width in pixels
pub const DEFAULT_WINDOW_WIDTH: f32 = 1600.0;

/// Default window height in pixels
pub const DEFAULT_WINDOW_HEIGHT: f32 = 900.0;

/// Latitude the map view starts centered on (the gb test field)
pub const MAP_CENTER_LATITUDE: f64 = 38.586298044283105;

/// Longitude the map view starts centered on
pub const MAP_CENTER_LONGITUDE: f64 = -121.35166610449501;

/// Gb selected when no remembered selection exists
pub const DEFAULT_SELECTED_GB: &str = "gb1";

/// Key suffix for a gb's live-location marker in the path collection
pub const LOCATION_KEY_SUFFIX: &str = "-location";

/// Radius in meters of the live-location marker
pub const LOCATION_MARKER_RADIUS: f32 = 5.0;

/// Action-stream channel tag used when pushing a path to a gb
pub const CSV_ACTION_CHANNEL: &str = "csv";

/// Seconds between polls of the gb registry
pub const REGISTRY_POLL_INTERVAL: f32 = 10.0;

/// Seconds between polls of the selected gb's position stream
pub const POSITION_POLL_INTERVAL: f32 = 1.0;

/// Backend used when the config file does not name one
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8030";
