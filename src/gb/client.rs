//! Blocking HTTP operations against the gb backend.
//!
//! All operations run on a task pool and report failures through the
//! `error` field of their result struct rather than panicking; callers
//! surface those as a recoverable data-unavailable condition.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::common::Coordinate;

use super::state::{PositionResult, PublishResult, RegistryResult, SessionResult};

const USER_AGENT: &str = "gbtrack";

/// Registry record for one gb
#[derive(Debug, Clone, Deserialize)]
pub struct GbRecord {
    pub username: String,
    #[serde(default)]
    pub color: Option<String>,
}

/// Session store record
#[derive(Debug, Clone, Deserialize)]
pub struct SessionRecord {
    pub username: String,
    pub role: String,
}

/// Body published to a gb's action stream
#[derive(Debug, Serialize)]
struct ActionPayload<'a> {
    channel: &'a str,
    points: &'a [Coordinate],
}

/// Fetch the gb registry
pub fn fetch_registry(base_url: &str) -> RegistryResult {
    let url = format!("{}/gbs", base_url);

    match ureq::get(&url).set("User-Agent", USER_AGENT).call() {
        Ok(resp) => match resp.into_json::<HashMap<String, GbRecord>>() {
            Ok(records) => RegistryResult {
                records: Some(records),
                error: None,
            },
            Err(e) => RegistryResult::error(format!("Failed to parse registry: {}", e)),
        },
        Err(e) => RegistryResult::error(format!("Failed to fetch registry: {}", e)),
    }
}

/// Fetch the current position of one gb
pub fn fetch_position(base_url: &str, gb: &str) -> PositionResult {
    let url = format!("{}/gbs/{}/position", base_url, gb);

    match ureq::get(&url).set("User-Agent", USER_AGENT).call() {
        Ok(resp) => match resp.into_json::<Coordinate>() {
            Ok(position) => PositionResult {
                gb: gb.to_string(),
                position: Some(position),
                error: None,
            },
            Err(e) => PositionResult::error(gb, format!("Failed to parse position: {}", e)),
        },
        Err(e) => PositionResult::error(gb, format!("Failed to fetch position: {}", e)),
    }
}

/// Read the session store once at startup
pub fn fetch_session(base_url: &str) -> SessionResult {
    let url = format!("{}/session/user", base_url);

    match ureq::get(&url).set("User-Agent", USER_AGENT).call() {
        Ok(resp) => match resp.into_json::<SessionRecord>() {
            Ok(record) => SessionResult {
                record: Some(record),
                error: None,
            },
            Err(e) => SessionResult::error(format!("Failed to parse session: {}", e)),
        },
        Err(ureq::Error::Status(404, _)) => {
            // No session - run anonymously
            SessionResult {
                record: None,
                error: None,
            }
        }
        Err(e) => SessionResult::error(format!("Failed to fetch session: {}", e)),
    }
}

/// Publish a coordinate sequence to a gb's action stream
pub fn publish_action(
    base_url: &str,
    gb: &str,
    channel: &str,
    points: &[Coordinate],
) -> PublishResult {
    let url = format!("{}/gbs/{}/actions", base_url, gb);
    let payload = ActionPayload { channel, points };

    match ureq::post(&url)
        .set("User-Agent", USER_AGENT)
        .send_json(&payload)
    {
        Ok(_) => PublishResult {
            gb: gb.to_string(),
            success: true,
            error: None,
        },
        Err(e) => PublishResult {
            gb: gb.to_string(),
            success: false,
            error: Some(format!("Failed to publish to action stream: {}", e)),
        },
    }
}
