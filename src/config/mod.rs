//! Settings for the `chet` binary
//!
//! Read from `--config`, else `<config dir>/chet/config.toml`, else built-in
//! defaults. `CHET_NTP_SERVER`, `CHET_CULTURE` and `CHET_LOG_LEVEL` override
//! whatever the file says.

use std::path::{Path, PathBuf};

use chrono::Duration;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ChetError, Result};
use crate::format::Culture;

pub const ENV_NTP_SERVER: &str = "CHET_NTP_SERVER";
pub const ENV_CULTURE: &str = "CHET_CULTURE";
pub const ENV_LOG_LEVEL: &str = "CHET_LOG_LEVEL";

/// Directory holding `config.toml`, if a home directory can be found
pub fn config_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "chet", "chet").map(|dirs| dirs.config_dir().to_path_buf())
}

pub fn default_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub ntp: NtpSettings,
    pub culture: CultureSettings,
    pub grouping: GroupingSettings,
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NtpSettings {
    pub server: String,
    pub port: u16,
    pub timeout_ms: u64,
}

impl Default for NtpSettings {
    fn default() -> Self {
        Self {
            server: "time.windows.com".to_string(),
            port: crate::ntp::NTP_PORT,
            timeout_ms: 3000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CultureSettings {
    pub name: String,
}

impl Default for CultureSettings {
    fn default() -> Self {
        Self {
            name: "zh-CN".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupingSettings {
    pub threshold_minutes: i64,
}

impl Default for GroupingSettings {
    fn default() -> Self {
        Self {
            threshold_minutes: 60,
        }
    }
}

impl GroupingSettings {
    pub fn threshold(&self) -> Duration {
        Duration::minutes(self.threshold_minutes.max(0))
    }
}

impl Settings {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| ChetError::ConfigFile {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&text).map_err(|e| ChetError::ConfigFile {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// An explicit path must exist; the default location is optional
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut settings = match explicit {
            Some(path) => Self::from_file(path)?,
            None => match default_config_path().filter(|p| p.is_file()) {
                Some(path) => {
                    debug!("Loading settings from {}", path.display());
                    Self::from_file(&path)?
                }
                None => Self::default(),
            },
        };
        settings.merge_env_vars();
        settings.validate()?;
        Ok(settings)
    }

    pub fn merge_env_vars(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    /// Apply overrides from any variable lookup; empty values are ignored
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(server) = get(ENV_NTP_SERVER) {
            self.ntp.server = server;
        }
        if let Some(culture) = get(ENV_CULTURE) {
            self.culture.name = culture;
        }
        if let Some(level) = get(ENV_LOG_LEVEL) {
            self.log_level = Some(level);
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.ntp.server.trim().is_empty() {
            return Err(ChetError::Config("ntp.server must not be empty".to_string()));
        }
        if self.ntp.timeout_ms == 0 {
            return Err(ChetError::Config("ntp.timeout_ms must be positive".to_string()));
        }
        if self.grouping.threshold_minutes < 0 {
            return Err(ChetError::Config(
                "grouping.threshold_minutes must not be negative".to_string(),
            ));
        }
        Ok(())
    }

    pub fn culture(&self) -> Culture {
        Culture::lookup_or_invariant(&self.culture.name)
    }
}
