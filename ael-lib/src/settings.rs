//! Persisted audit settings.
//!
//! The settings file is `~/.config/ael/settings.toml`. Every key is optional;
//! anything absent takes its default:
//! ```toml
//! [audit]
//! exhaustive_catalog = false
//! use_checksums = true
//! clean_titles = false
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::options::AuditOptions;

/// Contents of `settings.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub audit: AuditSettings,
}

/// The `[audit]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditSettings {
    pub exhaustive_catalog: bool,
    pub use_checksums: bool,
    /// Strip bracketed tags from display names.
    pub clean_titles: bool,
}

impl Default for AuditSettings {
    fn default() -> Self {
        Self {
            exhaustive_catalog: false,
            use_checksums: true,
            clean_titles: false,
        }
    }
}

impl Settings {
    /// Audit options for `platform` under these settings.
    pub fn audit_options(&self, platform: impl Into<String>) -> AuditOptions {
        AuditOptions::new(platform)
            .exhaustive_catalog(self.audit.exhaustive_catalog)
            .use_checksums(self.audit.use_checksums)
    }
}

/// Canonical path to the settings file: `~/.config/ael/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("ael").join("settings.toml")
}

/// Load settings from the canonical path; a missing file yields defaults.
pub fn load_settings() -> Result<Settings, SettingsError> {
    load_settings_from(&settings_path())
}

/// Load settings from `path`; a missing file yields defaults.
pub fn load_settings_from(path: &Path) -> Result<Settings, SettingsError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Settings::default()),
        Err(e) => return Err(e.into()),
    };
    Ok(toml::from_str(&contents)?)
}

/// Write settings to `path`, replacing the file atomically.
pub fn save_settings_to(path: &Path, settings: &Settings) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(settings)?;
    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

/// Write settings to the canonical path.
pub fn save_settings(settings: &Settings) -> Result<(), SettingsError> {
    save_settings_to(&settings_path(), settings)
}
