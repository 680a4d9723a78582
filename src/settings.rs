//! Control panel settings
//!
//! The two user controls: bounciness (0-100 %) and kick energy (1-30).
//! Persisted in LocalStorage on the web.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::TickInput;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Bounciness slider (0-100), mapped to restitution 0.0-1.0
    pub bounciness_percent: u8,
    /// Kicker energy slider (1-30)
    pub kick_energy: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bounciness_percent: DEFAULT_BOUNCINESS_PERCENT,
            kick_energy: DEFAULT_KICK_ENERGY,
        }
    }
}

impl Settings {
    pub fn set_bounciness_percent(&mut self, percent: u8) {
        self.bounciness_percent = percent.min(100);
    }

    pub fn set_kick_energy(&mut self, energy: u32) {
        self.kick_energy = energy.clamp(MIN_KICK_ENERGY, MAX_KICK_ENERGY);
    }

    /// Restitution the bounciness slider stands for
    pub fn restitution(&self) -> f64 {
        f64::from(self.bounciness_percent.min(100)) / 100.0
    }

    /// Bounciness change as tick input
    pub fn bounciness_input(&self) -> TickInput {
        TickInput {
            bounciness_percent: Some(self.bounciness_percent),
            ..Default::default()
        }
    }

    /// Kick request as tick input
    pub fn kick_input(&self) -> TickInput {
        TickInput {
            kick_energy: Some(self.kick_energy),
            ..Default::default()
        }
    }

    /// Decode a stored JSON blob, pulling values back into slider range
    pub fn from_stored_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.set_bounciness_percent(settings.bounciness_percent);
        settings.set_kick_energy(settings.kick_energy);
        Ok(settings)
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "ballpit_settings";

    #[cfg(target_arch = "wasm32")]
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let stored = Self::storage().and_then(|s| s.get_item(Self::STORAGE_KEY).ok().flatten());
        match stored.as_deref().map(Self::from_stored_json) {
            Some(Ok(settings)) => {
                log::info!("Loaded settings from LocalStorage");
                settings
            }
            Some(Err(err)) => {
                log::warn!("Ignoring stored settings: {err}");
                Self::default()
            }
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let Some(storage) = Self::storage() else {
            log::warn!("LocalStorage unavailable, settings not saved");
            return;
        };
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(err) => {
                log::warn!("Failed to encode settings: {err}");
                return;
            }
        };
        match storage.set_item(Self::STORAGE_KEY, &json) {
            Ok(()) => log::info!("Settings saved"),
            Err(err) => log::warn!("Failed to save settings: {err:?}"),
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
