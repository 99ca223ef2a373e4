//! Application settings - persisted user preferences.
//!
//! Settings are loaded from disk at startup and saved when changed.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application settings.
///
/// Serialized to TOML and stored in the user's config directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// General application settings.
    pub general: GeneralSettings,
}

impl Settings {
    /// Load settings from the default path.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load settings from a specific path.
    pub fn load_from(path: &PathBuf) -> Self {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|content| toml::from_str(&content).ok())
            .unwrap_or_default()
    }

    /// Save settings to the default path.
    pub fn save(&self) -> Result<(), String> {
        self.save_to(&Self::config_path())
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &PathBuf) -> Result<(), String> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize settings: {}", e))?;

        std::fs::write(path, content).map_err(|e| format!("Failed to write settings: {}", e))
    }

    /// Get the default config file path.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "StorefrontStudio", "Storefront Studio")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Use the dark theme.
    pub dark_mode: bool,

    /// Default rows per page for new grids.
    pub page_size: usize,

    /// Quiet period for text filter inputs, in milliseconds.
    pub debounce_ms: u64,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            page_size: storefront_grid::DEFAULT_PAGE_SIZE,
            debounce_ms: storefront_grid::DEFAULT_DEBOUNCE.as_millis() as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_serialize() {
        let settings = Settings::default();
        let toml = toml::to_string_pretty(&settings);
        assert!(toml.is_ok());
    }

    #[test]
    fn settings_round_trip() {
        let settings = Settings::default();
        let toml_str = toml::to_string_pretty(&settings).unwrap();
        let parsed: Settings = toml::from_str(&toml_str).unwrap();

        assert_eq!(settings.general.dark_mode, parsed.general.dark_mode);
        assert_eq!(settings.general.page_size, parsed.general.page_size);
        assert_eq!(settings.general.debounce_ms, parsed.general.debounce_ms);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let parsed: Settings = toml::from_str("[general]\ndark_mode = true\n").unwrap();
        assert!(parsed.general.dark_mode);
        assert_eq!(parsed.general.page_size, storefront_grid::DEFAULT_PAGE_SIZE);
    }
}
