//! Toy configuration
//!
//! Session-level knobs: viewport size, tick cadence, which forces start
//! enabled, and how many bodies to seed the pit with. Loaded from a JSON file
//! when one is given; any missing field falls back to its default.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Viewport width in pixels
    pub viewport_width: f32,
    /// Viewport height in pixels
    pub viewport_height: f32,
    /// Milliseconds per simulation tick
    pub tick_interval_ms: u64,
    /// Start with gravity enabled
    pub gravity: bool,
    /// Start with drag resistance enabled
    pub resistance: bool,
    /// Bodies created at startup
    pub initial_bodies: u32,
    /// Radius for the initial bodies
    pub body_radius: f32,
    /// RNG seed; `None` means derive one from the clock at startup
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            viewport_width: VIEW_WIDTH,
            viewport_height: VIEW_HEIGHT,
            tick_interval_ms: TICK_INTERVAL_MS,
            gravity: true,
            resistance: true,
            initial_bodies: 1,
            body_radius: DEFAULT_RADIUS,
            seed: None,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults when the path
    /// is absent or the file is missing/invalid.
    pub fn load(path: Option<&str>) -> Self {
        let Some(path) = path else {
            log::info!("using default settings");
            return Self::default();
        };

        match std::fs::read_to_string(path).map_err(|e| e.to_string()).and_then(|json| {
            Self::from_json(&json).map_err(|e| e.to_string())
        }) {
            Ok(settings) => {
                log::info!("loaded settings from {path}");
                settings
            }
            Err(e) => {
                log::warn!("failed to load settings from {path}: {e}; using defaults");
                Self::default()
            }
        }
    }
}
