// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences and event settings to a `settings.toml` file.
//!
//! The file is split into sections: `[general]` holds user preferences
//! (language, theme), `[event]` describes the conference itself, and
//! `[backend]` points at the registration API. Event timestamps are stored
//! as RFC 3339 strings and only converted to UTC instants through
//! [`EventConfig::starts_at_utc`], so every comparison downstream happens
//! on a common epoch.

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Conference start used when the config file has no `[event]` section.
pub const DEFAULT_STARTS_AT: &str = "2025-09-15T09:00:00Z";

#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub event: EventConfig,
    #[serde(default)]
    pub backend: BackendConfig,
}

/// User preferences.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Locale override in BCP-47 form (e.g. `fr`, `en-US`).
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Conference identity and schedule anchor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventConfig {
    pub name: String,
    pub venue: String,
    pub city: String,
    /// Opening ceremony instant, RFC 3339 with explicit offset.
    pub starts_at: String,
    pub contact_email: String,
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            name: "MedConf 2025".to_string(),
            venue: "Riviera Convention Centre".to_string(),
            city: "Nice".to_string(),
            starts_at: DEFAULT_STARTS_AT.to_string(),
            contact_email: "contact@medconf.example".to_string(),
        }
    }
}

impl EventConfig {
    /// Parses `starts_at` and normalizes it to UTC.
    ///
    /// This is the only place an instant crosses into the application from
    /// configuration; offsets are honored and collapsed here so the
    /// countdown never compares instants from different zones.
    pub fn starts_at_utc(&self) -> Result<DateTime<Utc>> {
        let parsed = DateTime::parse_from_rfc3339(&self.starts_at)?;
        Ok(parsed.with_timezone(&Utc))
    }
}

/// Registration backend endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackendConfig {
    pub api_base_url: String,
    pub email_endpoint: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.medconf.example".to_string(),
            email_endpoint: "https://api.medconf.example/email/send".to_string(),
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    paths::get_app_config_dir().map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default location.
///
/// Returns `(config, warning)`: a missing file is not an error (defaults
/// apply), but an unreadable or unparsable file yields defaults plus an
/// i18n warning key the caller can surface as a notification.
pub fn load() -> (Config, Option<String>) {
    let Some(path) = default_config_path() else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(_) => (
            Config::default(),
            Some("notification-config-parse-error".to_string()),
        ),
    }
}

/// Saves the configuration to the default location.
pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
