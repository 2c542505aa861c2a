//! Game settings and preferences
//!
//! Persisted separately from the best score, as JSON under its own key.
//! Gameplay constants are not settings; they live in `consts`.

use serde::{Deserialize, Serialize};

use crate::platform::{KeyValueStorage, StorageError};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Accessibility ===
    /// Reduced motion (no bird tilt)
    pub reduced_motion: bool,
    /// High contrast palette
    pub high_contrast: bool,

    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,
}

impl Settings {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "flappy-funster-settings";

    /// Whether the renderer should tilt the bird with its velocity
    pub fn tilt_enabled(&self) -> bool {
        !self.reduced_motion
    }

    /// Flip the preference bound to a keyboard `code`; false if unbound
    pub fn toggle_for_key(&mut self, code: &str) -> bool {
        let flag = match code {
            "KeyM" => &mut self.reduced_motion,
            "KeyC" => &mut self.high_contrast,
            "KeyF" => &mut self.show_fps,
            _ => return false,
        };
        *flag = !*flag;
        true
    }

    /// Load settings, using defaults if missing or unreadable
    pub fn load<K: KeyValueStorage + ?Sized>(storage: &K) -> Self {
        match storage.get(Self::STORAGE_KEY) {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings");
                    settings
                }
                Err(e) => {
                    log::warn!("Malformed settings, using defaults: {}", e);
                    Self::default()
                }
            },
            Ok(None) => {
                log::info!("Using default settings");
                Self::default()
            }
            Err(e) => {
                log::warn!("Settings unavailable, using defaults: {}", e);
                Self::default()
            }
        }
    }

    pub fn save<K: KeyValueStorage + ?Sized>(&self, storage: &mut K) -> Result<(), StorageError> {
        let json = serde_json::to_string(self)?;
        storage.set(Self::STORAGE_KEY, &json)?;
        log::info!("Settings saved");
        Ok(())
    }
}
