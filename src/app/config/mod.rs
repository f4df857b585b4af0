// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[navigation]` - Transition timing and input thresholds of the reel
//! - `[content]` - Asset directory and optional scene catalog override
//!
//! Every value is optional. Missing values fall back to the defaults in
//! [`defaults`]; out-of-range values are clamped by the navigation newtypes.
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set `SCENE_REEL_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use scene_reel::app::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("de".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::navigation::{
    CooldownMs, NavigatorTiming, PulseMs, SwipeThreshold, WheelThreshold,
};
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "de").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Reel navigation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NavigationConfig {
    /// Window after a transition during which input is ignored (ms).
    #[serde(default = "default_cooldown_ms", skip_serializing_if = "Option::is_none")]
    pub cooldown_ms: Option<u64>,

    /// Length of the glitch pulse (ms).
    #[serde(default = "default_pulse_ms", skip_serializing_if = "Option::is_none")]
    pub pulse_ms: Option<u64>,

    /// Minimum vertical wheel delta that navigates.
    #[serde(
        default = "default_wheel_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub wheel_threshold: Option<f32>,

    /// Minimum vertical swipe distance that navigates.
    #[serde(
        default = "default_swipe_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub swipe_threshold: Option<f32>,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            cooldown_ms: default_cooldown_ms(),
            pulse_ms: default_pulse_ms(),
            wheel_threshold: default_wheel_threshold(),
            swipe_threshold: default_swipe_threshold(),
        }
    }
}

impl NavigationConfig {
    /// Cooldown and pulse windows, clamped to their valid ranges.
    #[must_use]
    pub fn timing(&self) -> NavigatorTiming {
        NavigatorTiming {
            cooldown: self.cooldown_ms.map(CooldownMs::new).unwrap_or_default(),
            pulse: self.pulse_ms.map(PulseMs::new).unwrap_or_default(),
        }
    }

    #[must_use]
    pub fn wheel_threshold(&self) -> WheelThreshold {
        self.wheel_threshold
            .map(WheelThreshold::new)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn swipe_threshold(&self) -> SwipeThreshold {
        self.swipe_threshold
            .map(SwipeThreshold::new)
            .unwrap_or_default()
    }
}

/// Content location settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ContentConfig {
    /// Root directory for scene and gallery images, `vita.txt` and `legal.txt`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_dir: Option<PathBuf>,

    /// Scene catalog replacing the built-in one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scenes_file: Option<PathBuf>,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Reel navigation settings.
    #[serde(default)]
    pub navigation: NavigationConfig,

    /// Content location settings.
    #[serde(default)]
    pub content: ContentConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_cooldown_ms() -> Option<u64> {
    Some(DEFAULT_COOLDOWN_MS)
}

fn default_pulse_ms() -> Option<u64> {
    Some(DEFAULT_PULSE_MS)
}

fn default_wheel_threshold() -> Option<f32> {
    Some(DEFAULT_WHEEL_THRESHOLD)
}

fn default_swipe_threshold() -> Option<f32> {
    Some(DEFAULT_SWIPE_THRESHOLD)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("Ignoring unreadable config {}: {}", path.display(), err);
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("de".to_string()),
                theme_mode: ThemeMode::Light,
            },
            navigation: NavigationConfig {
                cooldown_ms: Some(400),
                pulse_ms: Some(500),
                wheel_threshold: Some(12.5),
                swipe_threshold: Some(60.0),
            },
            content: ContentConfig {
                asset_dir: Some(PathBuf::from("/srv/portfolio")),
                scenes_file: None,
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(message.contains("expected")),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn invalid_file_yields_defaults_and_warning_key() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(
            temp_dir.path().join(CONFIG_FILE),
            "[general]\ntheme_mode = \"purple\"\n",
        )
        .expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn missing_file_yields_defaults_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().join("absent")));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_sections_fill_in_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&config_path, "[navigation]\ncooldown_ms = 300\n").expect("write");

        let config = load_from_path(&config_path).expect("load");
        assert_eq!(config.navigation.cooldown_ms, Some(300));
        assert_eq!(config.navigation.pulse_ms, Some(DEFAULT_PULSE_MS));
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert!(config.content.asset_dir.is_none());
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        let timing = config.navigation.timing();
        assert_eq!(timing.cooldown.value(), DEFAULT_COOLDOWN_MS);
        assert_eq!(timing.pulse.value(), DEFAULT_PULSE_MS);
        assert_eq!(
            config.navigation.wheel_threshold().value(),
            DEFAULT_WHEEL_THRESHOLD
        );
        assert_eq!(
            config.navigation.swipe_threshold().value(),
            DEFAULT_SWIPE_THRESHOLD
        );
    }

    #[test]
    fn out_of_range_navigation_values_are_clamped() {
        let navigation = NavigationConfig {
            cooldown_ms: Some(0),
            pulse_ms: Some(u64::MAX),
            wheel_threshold: Some(f32::NAN),
            swipe_threshold: Some(-4.0),
        };
        let timing = navigation.timing();
        assert_eq!(timing.cooldown.value(), MIN_TRANSITION_MS);
        assert_eq!(timing.pulse.value(), MAX_TRANSITION_MS);
        assert_eq!(
            navigation.wheel_threshold().value(),
            DEFAULT_WHEEL_THRESHOLD
        );
        assert_eq!(navigation.swipe_threshold().value(), MIN_INPUT_THRESHOLD);
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join(CONFIG_FILE);

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }
}
