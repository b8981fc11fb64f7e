//! Overlay settings
//!
//! The external settings UI owns persistence and editing; these structs are
//! the shared shape both sides agree on. Every field carries a serde default
//! so a settings file from an older version still deserializes.

use serde::{Deserialize, Serialize};

/// RGBA color, 0-255 per channel.
pub type Rgba = [u8; 4];

/// Screen edge the panel stack grows from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelAnchor {
    Left,
    Top,
    #[default]
    Right,
    Bottom,
}

/// Top-level settings for the unique-item finder overlay.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FinderSettings {
    pub enabled: bool,
    pub common: CommonSettings,
    pub panel: PanelSettings,
    pub map_trace: MapTraceSettings,
    pub label_outline: LabelOutlineSettings,
    /// Item-name substrings to watch for; blank entries are ignored.
    pub watch_list: Vec<String>,
}

impl Default for FinderSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            common: CommonSettings::default(),
            panel: PanelSettings::default(),
            map_trace: MapTraceSettings::default(),
            label_outline: LabelOutlineSettings::default(),
            watch_list: vec!["Mageblood".to_string(), "Headhunter".to_string()],
        }
    }
}

/// Settings shared by all visual channels.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CommonSettings {
    /// Matching cadence in milliseconds.
    pub update_interval_ms: u64,
    /// Skip items that are already identified.
    pub hide_identified: bool,
}

impl Default for CommonSettings {
    fn default() -> Self {
        Self {
            update_interval_ms: 250,
            hide_identified: true,
        }
    }
}

/// The stacked name list anchored to a screen edge.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelSettings {
    pub enabled: bool,
    pub blink: bool,
    pub blink_interval_ms: u64,
    /// Multiplier applied to the backend's base text metrics.
    pub text_scale: f32,
    /// Distance from the anchoring screen edge, in pixels.
    pub margin: f32,
    pub anchor: PanelAnchor,
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            blink: true,
            blink_interval_ms: 250,
            text_scale: 2.0,
            margin: 20.0,
            anchor: PanelAnchor::Right,
        }
    }
}

/// Lines drawn on the large map from the player to each matched item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MapTraceSettings {
    pub enabled: bool,
    pub blink: bool,
    pub blink_interval_ms: u64,
    pub color: Rgba,
    pub thickness: f32,
}

impl Default for MapTraceSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            blink: true,
            blink_interval_ms: 250,
            color: [214, 0, 255, 255],
            thickness: 3.0,
        }
    }
}

/// Highlight frame drawn around a matched item's on-screen label.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelOutlineSettings {
    pub enabled: bool,
    pub blink: bool,
    pub blink_interval_ms: u64,
    pub frame_color: Rgba,
}

impl Default for LabelOutlineSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            blink: true,
            blink_interval_ms: 250,
            // Wheat
            frame_color: [245, 222, 179, 255],
        }
    }
}
