// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration: loading and saving
//! user preferences in a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[api]` - Applications endpoint and request timeout
//! - `[profile]` - Header name, status, avatar and banner images
//! - `[tabs]` - Tab bar geometry, slide duration and swiping
//! - `[carousel]` - Banner height, autoplay and dots
//!
//! Every value is optional; missing values fall back to [`defaults`].
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` on the command line
//! 3. Set `PROFILE_DECK_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use profile_deck::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("fr".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::pager::PagerConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Backend connection settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url", skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    #[serde(
        default = "default_apps_list_path",
        skip_serializing_if = "Option::is_none"
    )]
    pub apps_list_path: Option<String>,

    /// Kid profile sent in the request body.
    #[serde(default = "default_kid_id", skip_serializing_if = "Option::is_none")]
    pub kid_id: Option<String>,

    #[serde(
        default = "default_timeout_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            apps_list_path: default_apps_list_path(),
            kid_id: default_kid_id(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    /// Full URL of the applications endpoint.
    pub fn apps_list_url(&self) -> String {
        let base = self.base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL);
        let path = self
            .apps_list_path
            .as_deref()
            .unwrap_or(DEFAULT_APPS_LIST_PATH);
        format!(
            "{}/{}",
            base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub fn kid_id(&self) -> &str {
        self.kid_id.as_deref().unwrap_or(DEFAULT_KID_ID)
    }

    /// Request timeout, clamped to a sane range.
    pub fn timeout(&self) -> Duration {
        let secs = self
            .timeout_secs
            .unwrap_or(DEFAULT_API_TIMEOUT_SECS)
            .clamp(MIN_API_TIMEOUT_SECS, MAX_API_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }
}

/// Profile header content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ProfileConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Connection status line under the name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Avatar URL; a placeholder is shown when absent or failing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Banner carousel images. An empty list hides the carousel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner_images: Option<Vec<String>>,
}

impl ProfileConfig {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_PROFILE_NAME)
    }

    pub fn status(&self) -> &str {
        self.status.as_deref().unwrap_or(DEFAULT_PROFILE_STATUS)
    }

    pub fn banner_images(&self) -> Vec<String> {
        match &self.banner_images {
            Some(images) => images.clone(),
            None => DEFAULT_BANNER_IMAGES.iter().map(|url| url.to_string()).collect(),
        }
    }
}

/// Tab view settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TabsConfig {
    #[serde(
        default = "default_bar_height",
        skip_serializing_if = "Option::is_none"
    )]
    pub bar_height: Option<f32>,

    /// Fixed-width tabs in a horizontally scrolling bar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scrollable: Option<bool>,

    #[serde(
        default = "default_tab_animation_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub animation_duration_ms: Option<u64>,

    #[serde(
        default = "default_indicator_height",
        skip_serializing_if = "Option::is_none"
    )]
    pub indicator_height: Option<f32>,

    #[serde(
        default = "default_swipe_enabled",
        skip_serializing_if = "Option::is_none"
    )]
    pub swipe_enabled: Option<bool>,
}

impl Default for TabsConfig {
    fn default() -> Self {
        Self {
            bar_height: default_bar_height(),
            scrollable: Some(false),
            animation_duration_ms: default_tab_animation_ms(),
            indicator_height: default_indicator_height(),
            swipe_enabled: default_swipe_enabled(),
        }
    }
}

impl TabsConfig {
    /// Builds the tab pager configuration, clamping out-of-range values.
    pub fn pager_config(&self) -> PagerConfig {
        let bar_height = self
            .bar_height
            .filter(|height| height.is_finite())
            .unwrap_or(DEFAULT_TAB_BAR_HEIGHT)
            .clamp(MIN_TAB_BAR_HEIGHT, MAX_TAB_BAR_HEIGHT);
        let indicator_height = self
            .indicator_height
            .filter(|height| height.is_finite())
            .unwrap_or(DEFAULT_INDICATOR_HEIGHT)
            .clamp(0.0, bar_height);
        let duration = self
            .animation_duration_ms
            .unwrap_or(DEFAULT_TAB_ANIMATION_MS)
            .min(MAX_TAB_ANIMATION_MS);

        PagerConfig::tabs()
            .with_bar_height(bar_height)
            .with_indicator_height(indicator_height)
            .with_scrollable(
                self.scrollable.unwrap_or(false),
                DEFAULT_SCROLLABLE_TAB_WIDTH,
            )
            .with_animation_duration(Duration::from_millis(duration))
            .with_swipe_enabled(self.swipe_enabled.unwrap_or(true))
    }
}

/// Banner carousel settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CarouselConfig {
    #[serde(
        default = "default_carousel_height",
        skip_serializing_if = "Option::is_none"
    )]
    pub height: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<bool>,

    #[serde(
        default = "default_autoplay_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub autoplay_interval_ms: Option<u64>,

    #[serde(
        default = "default_show_pagination",
        skip_serializing_if = "Option::is_none"
    )]
    pub show_pagination: Option<bool>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            height: default_carousel_height(),
            autoplay: Some(false),
            autoplay_interval_ms: default_autoplay_interval_ms(),
            show_pagination: default_show_pagination(),
        }
    }
}

impl CarouselConfig {
    pub fn height(&self) -> f32 {
        self.height
            .filter(|height| height.is_finite())
            .unwrap_or(DEFAULT_CAROUSEL_HEIGHT)
            .clamp(MIN_CAROUSEL_HEIGHT, MAX_CAROUSEL_HEIGHT)
    }

    /// Builds the carousel pager configuration, clamping out-of-range values.
    pub fn pager_config(&self) -> PagerConfig {
        let interval = self
            .autoplay_interval_ms
            .unwrap_or(DEFAULT_AUTOPLAY_INTERVAL_MS)
            .clamp(MIN_AUTOPLAY_INTERVAL_MS, MAX_AUTOPLAY_INTERVAL_MS);

        PagerConfig::carousel()
            .with_autoplay(
                self.autoplay.unwrap_or(false),
                Duration::from_millis(interval),
            )
            .with_pagination(self.show_pagination.unwrap_or(true))
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub profile: ProfileConfig,

    #[serde(default)]
    pub tabs: TabsConfig,

    #[serde(default)]
    pub carousel: CarouselConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_base_url() -> Option<String> {
    Some(DEFAULT_API_BASE_URL.to_string())
}

fn default_apps_list_path() -> Option<String> {
    Some(DEFAULT_APPS_LIST_PATH.to_string())
}

fn default_kid_id() -> Option<String> {
    Some(DEFAULT_KID_ID.to_string())
}

fn default_timeout_secs() -> Option<u64> {
    Some(DEFAULT_API_TIMEOUT_SECS)
}

fn default_bar_height() -> Option<f32> {
    Some(DEFAULT_TAB_BAR_HEIGHT)
}

fn default_tab_animation_ms() -> Option<u64> {
    Some(DEFAULT_TAB_ANIMATION_MS)
}

fn default_indicator_height() -> Option<f32> {
    Some(DEFAULT_INDICATOR_HEIGHT)
}

fn default_swipe_enabled() -> Option<bool> {
    Some(true)
}

fn default_carousel_height() -> Option<f32> {
    Some(DEFAULT_CAROUSEL_HEIGHT)
}

fn default_autoplay_interval_ms() -> Option<u64> {
    Some(DEFAULT_AUTOPLAY_INTERVAL_MS)
}

fn default_show_pagination() -> Option<bool> {
    Some(true)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

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
/// default config with the i18n key of a warning to show the user.
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
                    log::warn!("ignoring {}: {}", path.display(), err);
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
    use crate::pager::PagerVariant;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
            },
            api: ApiConfig {
                kid_id: Some("42".to_string()),
                ..ApiConfig::default()
            },
            profile: ProfileConfig {
                name: Some("Sam".to_string()),
                banner_images: Some(vec!["https://example.com/a.png".to_string()]),
                ..ProfileConfig::default()
            },
            tabs: TabsConfig {
                scrollable: Some(true),
                ..TabsConfig::default()
            },
            carousel: CarouselConfig {
                autoplay: Some(true),
                ..CarouselConfig::default()
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
        fs::write(&config_path, "[tabs\nbar_height = ").expect("failed to write");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_falls_back_with_warning_on_bad_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "general = 3").expect("failed to write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_values() {
        let config: Config = toml::from_str("[carousel]\nautoplay = true\n").expect("valid toml");
        assert_eq!(config.carousel.autoplay, Some(true));
        assert_eq!(
            config.carousel.autoplay_interval_ms,
            Some(DEFAULT_AUTOPLAY_INTERVAL_MS)
        );
        assert_eq!(config.tabs.bar_height, Some(DEFAULT_TAB_BAR_HEIGHT));
        assert_eq!(config.api.kid_id(), DEFAULT_KID_ID);
    }

    #[test]
    fn apps_list_url_joins_without_double_slashes() {
        let api = ApiConfig {
            base_url: Some("https://example.com/api/".to_string()),
            apps_list_path: Some("/apps/list".to_string()),
            ..ApiConfig::default()
        };
        assert_eq!(api.apps_list_url(), "https://example.com/api/apps/list");
    }

    #[test]
    fn timeout_is_clamped() {
        let api = ApiConfig {
            timeout_secs: Some(0),
            ..ApiConfig::default()
        };
        assert_eq!(api.timeout(), Duration::from_secs(MIN_API_TIMEOUT_SECS));
    }

    #[test]
    fn pager_configs_are_valid_even_for_extreme_values() {
        let tabs = TabsConfig {
            bar_height: Some(f32::NAN),
            indicator_height: Some(500.0),
            animation_duration_ms: Some(u64::MAX),
            ..TabsConfig::default()
        };
        let pager = tabs.pager_config();
        assert!(pager.validate().is_ok());
        assert_eq!(pager.variant(), PagerVariant::Tabs);
        assert_eq!(pager.indicator_height(), DEFAULT_TAB_BAR_HEIGHT);

        let carousel = CarouselConfig {
            autoplay: Some(true),
            autoplay_interval_ms: Some(1),
            ..CarouselConfig::default()
        };
        assert!(carousel.pager_config().validate().is_ok());
        assert_eq!(
            carousel.pager_config().autoplay_interval(),
            Duration::from_millis(MIN_AUTOPLAY_INTERVAL_MS)
        );
    }

    #[test]
    fn empty_banner_list_disables_carousel_images() {
        let profile = ProfileConfig {
            banner_images: Some(Vec::new()),
            ..ProfileConfig::default()
        };
        assert!(profile.banner_images().is_empty());
        assert_eq!(
            ProfileConfig::default().banner_images().len(),
            DEFAULT_BANNER_IMAGES.len()
        );
    }
}
