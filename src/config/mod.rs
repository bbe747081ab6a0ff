use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::DEFAULT_BACKEND_URL;

/// System set for config loading (other plugins can run after this)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigLoaded;

/// Application configuration persisted to disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfigData {
    /// Base URL of the gb backend (registry, position streams, action streams)
    #[serde(default = "default_backend_url")]
    pub backend_url: String,

    /// Gb selected on the last run, restored at startup
    #[serde(default)]
    pub remembered_gb: Option<String>,
}

fn default_backend_url() -> String {
    DEFAULT_BACKEND_URL.to_string()
}

impl Default for AppConfigData {
    fn default() -> Self {
        Self {
            backend_url: default_backend_url(),
            remembered_gb: None,
        }
    }
}

/// Runtime configuration resource
#[derive(Resource)]
pub struct AppConfig {
    /// The persisted configuration data
    pub data: AppConfigData,
    /// Path to the config file
    pub config_path: PathBuf,
    /// Whether config needs to be saved (dirty flag)
    pub dirty: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data: AppConfigData::default(),
            config_path: crate::paths::config_file(),
            dirty: false,
        }
    }
}

/// Message to trigger config save
#[derive(Message)]
pub struct SaveConfigRequest;

/// Message to remember the current gb selection across runs
#[derive(Message)]
pub struct RememberGbRequest {
    pub gb: String,
}

/// Load configuration from disk, falling back to defaults on any error
fn load_config() -> AppConfig {
    let config_path = crate::paths::config_file();

    let data = if config_path.exists() {
        match std::fs::read_to_string(&config_path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(data) => {
                    info!("Loaded config from {:?}", config_path);
                    data
                }
                Err(e) => {
                    warn!("Failed to parse config file, using defaults: {}", e);
                    AppConfigData::default()
                }
            },
            Err(e) => {
                warn!("Failed to read config file, using defaults: {}", e);
                AppConfigData::default()
            }
        }
    } else {
        info!("No config file found, using defaults");
        AppConfigData::default()
    };

    AppConfig {
        data,
        config_path,
        dirty: false,
    }
}

/// Save configuration to disk
fn save_config(config: &AppConfig) {
    match serde_json::to_string_pretty(&config.data) {
        Ok(json) => {
            if let Err(e) = std::fs::write(&config.config_path, json) {
                error!("Failed to save config: {}", e);
            } else {
                info!("Config saved to {:?}", config.config_path);
            }
        }
        Err(e) => {
            error!("Failed to serialize config: {}", e);
        }
    }
}

/// Startup system to load config from disk into the existing resource
fn load_config_system(mut config: ResMut<AppConfig>) {
    let loaded = load_config();
    config.data = loaded.data;
    config.config_path = loaded.config_path;
    config.dirty = loaded.dirty;
}

/// System to save config when requested
fn save_config_system(
    mut events: MessageReader<SaveConfigRequest>,
    mut config: ResMut<AppConfig>,
) {
    for _ in events.read() {
        if config.dirty {
            save_config(&config);
            config.dirty = false;
        }
    }
}

/// System to remember the gb selection in config
fn remember_gb_system(
    mut events: MessageReader<RememberGbRequest>,
    mut config: ResMut<AppConfig>,
    mut save_events: MessageWriter<SaveConfigRequest>,
) {
    for event in events.read() {
        config.data.remembered_gb = Some(event.gb.clone());
        config.dirty = true;
        save_events.write(SaveConfigRequest);
    }
}

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AppConfig>()
            .add_message::<SaveConfigRequest>()
            .add_message::<RememberGbRequest>()
            .add_systems(Startup, load_config_system.in_set(ConfigLoaded))
            .add_systems(
                Update,
                (
                    save_config_system.run_if(on_message::<SaveConfigRequest>),
                    remember_gb_system.run_if(on_message::<RememberGbRequest>),
                ),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_data_default() {
        let data = AppConfigData::default();
        assert_eq!(data.backend_url, DEFAULT_BACKEND_URL);
        assert!(data.remembered_gb.is_none());
    }

    #[test]
    fn test_app_config_data_serialization() {
        let data = AppConfigData {
            backend_url: "http://backend.example:9000".to_string(),
            remembered_gb: Some("gb2".to_string()),
        };

        let json = serde_json::to_string(&data).unwrap();
        let parsed: AppConfigData = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.backend_url, data.backend_url);
        assert_eq!(parsed.remembered_gb, data.remembered_gb);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        // Config written by an older build has no remembered_gb
        let parsed: AppConfigData = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.backend_url, DEFAULT_BACKEND_URL);
        assert!(parsed.remembered_gb.is_none());
    }
}
