//! TOML-based application configuration.
//!
//! Stores:
//! - The booking call-to-action (link, button label, blurb)
//! - Lead capture policy
//! - Terminal display preferences
//!
//! Configuration is stored at `~/.config/flow-diagnostic/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::booking::BookingLink;
use crate::diagnostic::LeadPolicy;
use crate::error::ConfigError;

/// Booking call-to-action shown on the results view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingConfig {
    #[serde(default = "default_booking_url")]
    pub url: String,
    #[serde(default = "default_booking_label")]
    pub label: String,
    #[serde(default = "default_booking_blurb")]
    pub blurb: String,
}

/// Terminal display configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Colour pillar names and the lowest-pillar highlight.
    #[serde(default = "default_true")]
    pub color: bool,
    /// Print the result category description under the title.
    #[serde(default = "default_true")]
    pub show_descriptions: bool,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/flow-diagnostic/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub booking: BookingConfig,
    #[serde(default)]
    pub lead: LeadPolicy,
    #[serde(default)]
    pub display: DisplayConfig,
}

fn default_booking_url() -> String {
    "https://calendly.com/your-link".into()
}
fn default_booking_label() -> String {
    "Book Your FLOW Session".into()
}
fn default_booking_blurb() -> String {
    "A 30-minute session to diagnose your biggest constraint and map out your next move.".into()
}
fn default_true() -> bool {
    true
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            url: default_booking_url(),
            label: default_booking_label(),
            blurb: default_booking_blurb(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: true,
            show_descriptions: true,
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        let mut current = root;
        while let Some(part) = parts.next() {
            if part.is_empty() {
                return Err(unknown());
            }
            if parts.peek().is_some() {
                current = current.get_mut(part).ok_or_else(unknown)?;
                continue;
            }

            let obj = current.as_object_mut().ok_or_else(unknown)?;
            let existing = obj.get(part).ok_or_else(unknown)?;
            let new_value = match existing {
                serde_json::Value::Bool(_) => value
                    .parse::<bool>()
                    .map(serde_json::Value::Bool)
                    .map_err(|e| invalid(e.to_string()))?,
                serde_json::Value::Number(_) => value
                    .parse::<u64>()
                    .map(|n| serde_json::Value::Number(n.into()))
                    .map_err(|_| invalid(format!("cannot parse '{value}' as number")))?,
                serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                    return Err(invalid("cannot set a whole section".to_string()))
                }
                _ => serde_json::Value::String(value.into()),
            };
            obj.insert(part.to_string(), new_value);
            return Ok(());
        }

        Err(unknown())
    }

    /// Default config file location.
    pub fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the default location, writing defaults if the file is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(e) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
        }
    }

    /// Persist to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| save_failed(e.to_string()))?;
        }
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by dot-separated key, keeping the field's type.
    ///
    /// Does not save; call [`Config::save`] afterwards.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json = serde_json::to_value(&*self).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Config =
            serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        if key == "booking.url" {
            BookingLink::from_config(&updated.booking)?;
        }
        *self = updated;
        Ok(())
    }

    /// Load from disk, returning default on error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }
}
