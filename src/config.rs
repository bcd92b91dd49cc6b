//! Settings file loading.
//!
//! Settings are loaded from TOML files with the following resolution order:
//! 1. explicit path (if provided)
//! 2. `~/.timezonedb/config.toml` (user)
//! 3. `/etc/timezonedb/config.toml` (system)
//!
//! When the file has no `api_key`, the `TIMEZONEDB_API_KEY` environment
//! variable is used instead.
//!
//! ```toml
//! api_key = "YOUR_KEY"
//! api_type = "api"
//! api_version = "2.1"
//! timeout_secs = 10
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::client::TimezoneDbBuilder;
use crate::{Result, TimezoneDbError};

/// Environment variable consulted when the file has no key.
pub const API_KEY_ENV: &str = "TIMEZONEDB_API_KEY";

/// Client settings as read from a TOML file.
///
/// Tier and version stay raw strings here; they are validated when the
/// client is built.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_api_type")]
    pub api_type: String,
    #[serde(default = "default_api_version")]
    pub api_version: String,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: None,
            api_type: default_api_type(),
            api_version: default_api_version(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_api_type() -> String {
    "vip".to_string()
}

fn default_api_version() -> String {
    "2.1".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Settings {
    /// Load settings from the standard locations.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let path = Self::resolve_path(explicit_path)?;
        Self::load_from_file(&path)
    }

    /// Load settings from a specific file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            TimezoneDbError::Configuration(format!("Failed to read config file {path:?}: {e}"))
        })?;
        let mut settings = Self::from_toml(&content).map_err(|e| {
            TimezoneDbError::Configuration(format!("Failed to parse config file {path:?}: {e}"))
        })?;
        if settings.api_key.as_deref().is_none_or(str::is_empty) {
            settings.api_key = std::env::var(API_KEY_ENV).ok();
        }
        Ok(settings)
    }

    /// Parse settings from TOML text, without the environment fallback.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| TimezoneDbError::Configuration(e.to_string()))
    }

    fn resolve_path(explicit: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = explicit {
            if path.exists() {
                return Ok(path.to_path_buf());
            }
            return Err(TimezoneDbError::Configuration(format!(
                "Config file not found: {path:?}"
            )));
        }

        if let Some(home) = dirs::home_dir() {
            let user_config = home.join(".timezonedb").join("config.toml");
            if user_config.exists() {
                return Ok(user_config);
            }
        }

        let system_config = PathBuf::from("/etc/timezonedb/config.toml");
        if system_config.exists() {
            return Ok(system_config);
        }

        Err(TimezoneDbError::Configuration(
            "No config file found. Create ~/.timezonedb/config.toml or /etc/timezonedb/config.toml"
                .to_string(),
        ))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Client builder pre-populated from these settings.
    pub fn into_builder(self) -> TimezoneDbBuilder {
        let timeout = self.timeout();
        let builder = TimezoneDbBuilder::new()
            .api_type(self.api_type)
            .api_version(self.api_version)
            .timeout(timeout);
        match self.api_key {
            Some(key) => builder.api_key(key),
            None => builder,
        }
    }
}
