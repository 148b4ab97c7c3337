//! TOML-based application configuration.
//!
//! Stores:
//! - Scheduling API location, account and request timeout
//! - The daily shift table
//!
//! Configuration is stored at `~/.config/teachshift/config.toml` unless
//! `TEACHSHIFT_CONFIG` points somewhere else.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, CoreError, ValidationError};
use crate::lapi::{Credentials, DEFAULT_BASE_URL, DEFAULT_MODE, DEFAULT_TIMEOUT_SECS};
use crate::shift::{hhmm, ShiftCalendar};

pub const CONFIG_PATH_ENV: &str = "TEACHSHIFT_CONFIG";
pub const USERNAME_ENV: &str = "TEACHSHIFT_LAPI_USERNAME";
pub const PASSWORD_ENV: &str = "TEACHSHIFT_LAPI_PASSWORD";

/// Scheduling API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LapiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Account used for token issuance.
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_mode")]
    pub default_mode: String,
}

/// One `[[shifts]]` entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftWindowConfig {
    #[serde(with = "hhmm")]
    pub start: NaiveTime,
    #[serde(with = "hhmm")]
    pub end: NaiveTime,
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub lapi: LapiConfig,
    /// Shift windows in day order; numbered 1..n by position.
    #[serde(default = "default_shifts")]
    pub shifts: Vec<ShiftWindowConfig>,
}

// Default functions
fn default_base_url() -> String {
    DEFAULT_BASE_URL.into()
}
fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}
fn default_mode() -> String {
    DEFAULT_MODE.into()
}
fn default_shifts() -> Vec<ShiftWindowConfig> {
    ShiftCalendar::default()
        .windows()
        .iter()
        .map(|w| ShiftWindowConfig {
            start: w.start,
            end: w.end,
        })
        .collect()
}

impl Default for LapiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            username: String::new(),
            password: String::new(),
            timeout_secs: default_timeout_secs(),
            default_mode: default_mode(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lapi: LapiConfig::default(),
            shifts: default_shifts(),
        }
    }
}

/// Returns `~/.config/teachshift[-dev]/` based on TEACHSHIFT_ENV.
///
/// Set TEACHSHIFT_ENV=dev to use development data directory.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("TEACHSHIFT_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("teachshift-dev")
    } else {
        base_dir.join("teachshift")
    };

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::SaveFailed {
        path: dir.clone(),
        message: e.to_string(),
    })?;
    Ok(dir)
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
            current = match current {
                serde_json::Value::Array(items) => items.get(part.parse::<usize>().ok()?)?,
                other => other.get(part)?,
            };
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
        if parts.peek().map_or(true, |p| p.is_empty()) {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            let slot = match current {
                serde_json::Value::Array(items) => {
                    let index = part.parse::<usize>().map_err(|_| unknown())?;
                    items.get_mut(index).ok_or_else(unknown)?
                }
                serde_json::Value::Object(obj) => obj.get_mut(part).ok_or_else(unknown)?,
                _ => return Err(unknown()),
            };

            if parts.peek().is_none() {
                let new_value = match slot {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value.parse::<bool>().map_err(|e| invalid(e.to_string()))?,
                    ),
                    serde_json::Value::Number(_) => serde_json::Value::Number(
                        value
                            .parse::<u64>()
                            .map_err(|_| invalid(format!("cannot parse '{value}' as number")))?
                            .into(),
                    ),
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                        serde_json::from_str(value).map_err(|e| invalid(e.to_string()))?
                    }
                    _ => serde_json::Value::String(value.into()),
                };
                *slot = new_value;
                return Ok(());
            }

            current = slot;
        }

        Err(unknown())
    }

    /// Config file location: `TEACHSHIFT_CONFIG` or the data directory.
    pub fn path() -> Result<PathBuf, ConfigError> {
        match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
            _ => Ok(data_dir()?.join("config.toml")),
        }
    }

    /// Load from disk, writing the defaults out if no file exists yet.
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
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
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

    /// Persist to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| save_failed(e.to_string()))?;
        }
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))
    }

    /// Get a config value as string by dot-separated key
    /// (`lapi.timeout_secs`, `shifts.0.start`).
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key without saving.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed,
    /// or the result fails [`Config::validate`].
    pub fn apply(&mut self, key: &str, value: &str) -> Result<(), CoreError> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Config = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// Set a config value by key and save.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), CoreError> {
        self.apply(key, value)?;
        self.save()?;
        Ok(())
    }

    /// Check the values a plain deserialize cannot: the shift table and the
    /// request timeout.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.calendar()?;
        if self.lapi.timeout_secs == 0 {
            return Err(ValidationError::InvalidValue {
                field: "lapi.timeout_secs".into(),
                message: "must be at least 1 second".into(),
            });
        }
        Ok(())
    }

    /// The validated shift table.
    pub fn calendar(&self) -> Result<ShiftCalendar, ValidationError> {
        ShiftCalendar::new(self.shifts.iter().map(|w| (w.start, w.end)))
    }

    /// Token-issuance account, with environment overrides applied.
    pub fn credentials(&self) -> Credentials {
        self.credentials_with(|name| std::env::var(name).ok())
    }

    fn credentials_with<F>(&self, lookup: F) -> Credentials
    where
        F: Fn(&str) -> Option<String>,
    {
        let pick = |env: &str, configured: &str| {
            lookup(env)
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| configured.to_string())
        };
        Credentials {
            username: pick(USERNAME_ENV, &self.lapi.username),
            password: pick(PASSWORD_ENV, &self.lapi.password),
        }
    }
}
