//! Game settings
//!
//! Read-only at runtime. On the web they come from an inline
//! `<script id="settings" type="application/json">` block, natively from the
//! JSON file named by `SODA_CAN_SETTINGS`. Nothing is ever written back.

use serde::{Deserialize, Serialize};

use crate::consts::{EXPLODE_THRESHOLD, SHAKE_THRESHOLD, TOAST_SHORT_MS};

/// Tunables for detection and presentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Detection ===
    /// Sample magnitude (m/s²) that counts as a shake
    pub sample_threshold: f32,
    /// Shake count that must be exceeded before the can opens
    pub explode_threshold: u32,
    /// Use acceleration including gravity (what a raw accelerometer reports)
    pub include_gravity: bool,

    // === UI ===
    /// How long toasts stay on screen
    pub toast_duration_ms: u32,

    // === Debug ===
    /// Log every counted shake at debug level
    pub log_shakes: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sample_threshold: SHAKE_THRESHOLD,
            explode_threshold: EXPLODE_THRESHOLD,
            include_gravity: true,
            toast_duration_ms: TOAST_SHORT_MS,
            log_shakes: true,
        }
    }
}

impl Settings {
    /// Env var naming a JSON settings file (native only)
    pub const ENV_VAR: &'static str = "SODA_CAN_SETTINGS";

    /// Element id of the inline JSON settings block (web only)
    #[cfg(target_arch = "wasm32")]
    const ELEMENT_ID: &'static str = "settings";

    /// Parse settings JSON, falling back to defaults on error
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Invalid settings ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Load settings from the page (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::ELEMENT_ID))
            .and_then(|el| el.text_content());

        if let Some(json) = json {
            log::info!("Loaded settings from page");
            return Self::from_json(&json);
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Load settings from the file named by `SODA_CAN_SETTINGS`
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Ok(path) = std::env::var(Self::ENV_VAR) else {
            log::info!("Using default settings");
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(json) => {
                log::info!("Loaded settings from {}", path);
                Self::from_json(&json)
            }
            Err(e) => {
                log::warn!("Could not read {} ({}), using defaults", path, e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let s = Settings::default();
        assert_eq!(s.sample_threshold, 10.0);
        assert_eq!(s.explode_threshold, 10);
        assert!(s.include_gravity);
        assert_eq!(s.toast_duration_ms, 2000);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let s = Settings::from_json(r#"{"explode_threshold": 3, "log_shakes": false}"#);
        assert_eq!(s.explode_threshold, 3);
        assert!(!s.log_shakes);
        assert_eq!(s.sample_threshold, 10.0);
    }

    #[test]
    fn test_bad_json_falls_back() {
        assert_eq!(Settings::from_json("{not json"), Settings::default());
        assert_eq!(
            Settings::from_json(r#"{"explode_threshold": "lots"}"#),
            Settings::default()
        );
    }
}
