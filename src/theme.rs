//! Centralized color theme for the application.
//!
//! This module provides all colors used throughout the map rendering and UI.
//! Modify values here to change the application's color scheme.

use bevy::prelude::Color;
use bevy_egui::egui;

// ============================================================================
// Graticule Colors
// ============================================================================

/// Semi-transparent grey graticule lines
pub const GRATICULE_COLOR: Color = Color::srgba(0.5, 0.5, 0.5, 0.3);

// ============================================================================
// Path Colors
// ============================================================================

/// Stroke color for newly created paths
pub const PATH_DEFAULT: Color = Color::srgb(0.2, 0.4, 1.0);

/// Vertex highlight on the selected path
pub const SELECTED_VERTEX: Color = Color::srgb(0.2, 0.6, 1.0);

/// Pending first point while a new path is being placed
pub const PENDING_POINT: Color = Color::srgba(1.0, 0.7, 0.2, 0.9);

/// Fallback marker color when a gb reports no color
pub const GB_FALLBACK: Color = Color::srgb(0.9, 0.2, 0.2);

// ============================================================================
// Mode Button Colors
// ============================================================================

/// Fill for a mode button: green while the mode is active, red otherwise
pub fn mode_button_fill(active: bool) -> egui::Color32 {
    if active {
        egui::Color32::from_rgb(46, 125, 50)
    } else {
        egui::Color32::from_rgb(136, 46, 46)
    }
}

/// Green used for the live-connection status label
pub const STATUS_LIVE: egui::Color32 = egui::Color32::from_rgb(100, 200, 100);

/// Red used for the data-unavailable status label
pub const STATUS_ERROR: egui::Color32 = egui::Color32::from_rgb(220, 90, 90);

// ============================================================================
// Gb Colors
// ============================================================================

/// Parse a `#rrggbb` color string delivered by the registry.
///
/// Falls back to [`GB_FALLBACK`] for anything that does not parse.
pub fn parse_gb_color(hex: &str) -> Color {
    let raw = hex.strip_prefix('#').unwrap_or(hex);
    if raw.len() != 6 {
        return GB_FALLBACK;
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&raw[range], 16)
            .ok()
            .map(|v| v as f32 / 255.0)
    };

    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Some(r), Some(g), Some(b)) => Color::srgb(r, g, b),
        _ => GB_FALLBACK,
    }
}

/// egui equivalent of a bevy color, for the gb badge dots
pub fn to_egui_color(color: Color) -> egui::Color32 {
    let srgba = color.to_srgba();
    egui::Color32::from_rgb(
        (srgba.red * 255.0) as u8,
        (srgba.green * 255.0) as u8,
        (srgba.blue * 255.0) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_gb_color_with_hash() {
        assert_eq!(parse_gb_color("#ff0000"), Color::srgb(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_parse_gb_color_without_hash() {
        assert_eq!(parse_gb_color("00ff00"), Color::srgb(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_parse_gb_color_garbage_falls_back() {
        assert_eq!(parse_gb_color("not-a-color"), GB_FALLBACK);
        assert_eq!(parse_gb_color(""), GB_FALLBACK);
        assert_eq!(parse_gb_color("#12345"), GB_FALLBACK);
    }

    #[test]
    fn test_mode_button_fill_differs_by_state() {
        assert_ne!(mode_button_fill(true), mode_button_fill(false));
    }
}
