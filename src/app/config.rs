//! Application configuration
//!
//! Verbosity from the command line combined with the loaded [`Settings`].

use crate::config::Settings;

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Number of `-v` flags
    pub verbose: u8,
    pub settings: Settings,
}

impl AppConfig {
    pub fn new(verbose: u8, settings: Settings) -> Self {
        Self { verbose, settings }
    }

    /// `-v` flags win; otherwise `log_level` from settings or `CHET_LOG_LEVEL`
    pub fn log_level(&self) -> String {
        match self.verbose {
            0 => self
                .settings
                .log_level
                .clone()
                .unwrap_or_else(|| "warn".to_string()),
            1 => "info".to_string(),
            2 => "debug".to_string(),
            _ => "trace".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_from_verbosity() {
        assert_eq!(AppConfig::new(0, Settings::default()).log_level(), "warn");
        assert_eq!(AppConfig::new(1, Settings::default()).log_level(), "info");
        assert_eq!(AppConfig::new(2, Settings::default()).log_level(), "debug");
        assert_eq!(AppConfig::new(5, Settings::default()).log_level(), "trace");
    }

    #[test]
    fn test_log_level_from_settings() {
        let settings = Settings {
            log_level: Some("chet=debug".to_string()),
            ..Settings::default()
        };
        assert_eq!(AppConfig::new(0, settings.clone()).log_level(), "chet=debug");
        assert_eq!(AppConfig::new(1, settings).log_level(), "info");
    }
}
