//! Wheel settings and preferences
//!
//! Persisted separately from saved lists in LocalStorage.

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_SPINS, MIN_SPINS, POINTER_ANGLE, SETTLE_DURATION_MS};

/// Wheel settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Spin ===
    /// Time from spin start to winner (ms), matches the CSS transition
    pub settle_duration_ms: u32,
    /// Minimum whole turns per spin
    pub min_spins: f64,
    /// Maximum whole turns per spin (exclusive)
    pub max_spins: f64,
    /// Pointer position in degrees (0 = right, clockwise)
    pub pointer_angle: f64,

    // === Names ===
    /// Refuse names already on the wheel
    pub reject_duplicates: bool,

    // === Colors ===
    /// Custom segment colors as hex strings (empty = default palette)
    pub custom_colors: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            settle_duration_ms: SETTLE_DURATION_MS,
            min_spins: MIN_SPINS,
            max_spins: MAX_SPINS,
            pointer_angle: POINTER_ANGLE,

            reject_duplicates: true,

            custom_colors: Vec::new(),
        }
    }
}

impl Settings {
    /// Clamp values loaded from storage into something usable
    ///
    /// The spin range may only narrow `[MIN_SPINS, MAX_SPINS)`, so every spin
    /// still adds at least 1800° and less than 3240°.
    pub fn sanitized(mut self) -> Self {
        if !self.min_spins.is_finite() || !(MIN_SPINS..MAX_SPINS).contains(&self.min_spins) {
            self.min_spins = MIN_SPINS;
        }
        if !self.max_spins.is_finite() || self.max_spins > MAX_SPINS {
            self.max_spins = MAX_SPINS;
        }
        if self.max_spins < self.min_spins {
            self.max_spins = self.min_spins;
        }
        if !self.pointer_angle.is_finite() {
            self.pointer_angle = POINTER_ANGLE;
        }
        self
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(json).map(Self::sanitized)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "wheel_of_names_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = self.to_json() {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
