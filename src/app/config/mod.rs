// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[map]` - Initial center and zoom levels
//! - `[provider]` - API key, endpoint, timeout and photo size
//! - `[gallery]` - Photos per page
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with explicit path
//! 2. `--config-dir` CLI argument or `PLACE_LENS_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! The file is never written by the application.
//!
//! # Examples
//!
//! ```no_run
//! use place_lens::app::config;
//!
//! let (config, _warning) = config::load();
//! let api_key = config::resolve_api_key(None, &config)?;
//! # Ok::<(), place_lens::error::Error>(())
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::geo::{GeoPoint, ZoomLevel};
use crate::error::{Error, Result};
use crate::infrastructure::google::{GoogleMapsSettings, DEFAULT_BASE_URL};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
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

/// Initial map view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MapConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center: Option<GeoPoint>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom: Option<u8>,

    /// Zoom applied when a search result is shown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_zoom: Option<u8>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: Some(DEFAULT_CENTER),
            zoom: Some(DEFAULT_MAP_ZOOM),
            search_zoom: Some(DEFAULT_SEARCH_ZOOM),
        }
    }
}

/// Maps provider connection settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ProviderConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Endpoint root; the production endpoint when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_max_width: Option<u32>,
}

/// Photo gallery settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photos_per_page: Option<usize>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            photos_per_page: Some(DEFAULT_PHOTOS_PER_PAGE),
        }
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
    pub map: MapConfig,

    #[serde(default)]
    pub provider: ProviderConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,
}

impl Config {
    /// Initial map center; invalid coordinates fall back to the default.
    #[must_use]
    pub fn map_center(&self) -> GeoPoint {
        self.map
            .center
            .filter(GeoPoint::is_valid)
            .unwrap_or(DEFAULT_CENTER)
    }

    #[must_use]
    pub fn map_zoom(&self) -> ZoomLevel {
        ZoomLevel::new(self.map.zoom.unwrap_or(DEFAULT_MAP_ZOOM))
    }

    #[must_use]
    pub fn search_zoom(&self) -> ZoomLevel {
        ZoomLevel::new(self.map.search_zoom.unwrap_or(DEFAULT_SEARCH_ZOOM))
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        let secs = self
            .provider
            .request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
            .clamp(MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }

    #[must_use]
    pub fn photo_max_width(&self) -> u32 {
        self.provider
            .photo_max_width
            .unwrap_or(DEFAULT_PHOTO_MAX_WIDTH)
            .clamp(MIN_PHOTO_MAX_WIDTH, MAX_PHOTO_MAX_WIDTH)
    }

    #[must_use]
    pub fn photos_per_page(&self) -> usize {
        self.gallery
            .photos_per_page
            .unwrap_or(DEFAULT_PHOTOS_PER_PAGE)
            .clamp(MIN_PHOTOS_PER_PAGE, MAX_PHOTOS_PER_PAGE)
    }
}

// =============================================================================
// API Key
// =============================================================================

/// Validated, non-blank provider credential.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Returns `None` for blank input.
    #[must_use]
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        (!trimmed.is_empty()).then(|| Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// Resolves the API key: `--api-key`, then `PLACE_LENS_API_KEY`, then
/// `[provider] api_key`.
///
/// # Errors
///
/// Returns [`Error::MissingApiKey`] when no source holds a non-blank key.
pub fn resolve_api_key(cli: Option<&str>, config: &Config) -> Result<ApiKey> {
    let env = std::env::var(ENV_API_KEY).ok();
    resolve_api_key_from(cli, env.as_deref(), config)
}

/// Same as [`resolve_api_key`] with the environment value passed in.
///
/// A blank higher-priority source does not mask a lower-priority one.
///
/// # Errors
///
/// Returns [`Error::MissingApiKey`] when no source holds a non-blank key.
pub fn resolve_api_key_from(
    cli: Option<&str>,
    env: Option<&str>,
    config: &Config,
) -> Result<ApiKey> {
    [cli, env, config.provider.api_key.as_deref()]
        .into_iter()
        .flatten()
        .find_map(ApiKey::new)
        .ok_or(Error::MissingApiKey)
}

/// Builds the HTTP adapter settings from the config and a resolved key.
#[must_use]
pub fn provider_settings(config: &Config, api_key: &ApiKey) -> GoogleMapsSettings {
    let base_url = config
        .provider
        .base_url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_BASE_URL);

    GoogleMapsSettings::new(api_key.expose())
        .with_base_url(base_url)
        .with_request_timeout(config.request_timeout())
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
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
// Load Functions
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning to show.
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
                    tracing::warn!(path = %path.display(), error = %err, "ignoring invalid config");
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
// Tests
// =============================================================================
