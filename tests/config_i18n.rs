// SPDX-License-Identifier: MPL-2.0
//! Startup configuration and localization, exercised through the public API.

use approx::assert_abs_diff_eq;
use place_lens::app::config::{self, Config};
use place_lens::app::{Flags, Startup};
use place_lens::error::Error;
use place_lens::i18n::fluent::I18n;
use std::fs;
use tempfile::tempdir;

const SETTINGS: &str = r#"
[general]
language = "fr"
theme_mode = "dark"

[map]
center = { latitude = 48.8566, longitude = 2.3522 }
zoom = 11

[provider]
api_key = "from-file"
request_timeout_secs = 4

[gallery]
photos_per_page = 2
"#;

#[test]
fn startup_reads_settings_from_config_dir() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("settings.toml"), SETTINGS).unwrap();

    let startup = Startup::prepare(Flags {
        lang: None,
        config_dir: Some(dir.path().to_string_lossy().into_owned()),
        api_key: Some("from-cli".into()),
    })
    .expect("startup succeeds with a key");

    assert!(startup.config_warning.is_none());
    assert_abs_diff_eq!(startup.config.map_center().latitude(), 48.8566, epsilon = 1e-9);
    assert_eq!(startup.config.map_zoom().value(), 11);
    assert_eq!(startup.config.photos_per_page(), 2);

    let i18n = I18n::new(startup.lang.clone(), &startup.config);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(i18n.tr("notice-dismiss"), "OK");
    assert_eq!(
        i18n.tr_with_args("gallery-page", &[("current", "1"), ("total", "3")]),
        "Page 1 sur 3"
    );
}

#[test]
fn corrupted_settings_fall_back_to_defaults_with_warning() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("settings.toml"), "[map\nzoom = ").unwrap();

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert_eq!(config, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
}

#[test]
fn settings_without_any_key_fail_fast() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("settings.toml"), "[provider]\napi_key = \"  \"\n").unwrap();

    let (config, _) = config::load_with_override(Some(dir.path().to_path_buf()));
    let result = config::resolve_api_key_from(None, Some(""), &config);

    assert!(matches!(result, Err(Error::MissingApiKey)));
}

#[test]
fn cli_language_overrides_settings() {
    let mut config = Config::default();
    config.general.language = Some("fr".into());

    let i18n = I18n::new(Some("en-US".into()), &config);
    assert_eq!(i18n.tr("window-title"), "PlaceLens");
    assert_eq!(
        i18n.tr_with_args("notice-geocode-failed", &[("status", "ZERO_RESULTS")]),
        "Geocoder failed due to: ZERO_RESULTS"
    );
}
