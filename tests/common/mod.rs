//! Common test utilities and helpers

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A scratch directory with its own settings file, isolated from the user's config
pub struct TestEnv {
    temp_dir: TempDir,
    config: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self::with_settings("")
    }

    pub fn with_settings(toml: &str) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config = temp_dir.path().join("chet.toml");
        fs::write(&config, toml).expect("Failed to write settings");
        Self { temp_dir, config }
    }

    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    pub fn path(&self) -> &std::path::Path {
        self.temp_dir.path()
    }

    /// `chet -c <settings>` with the CHET_* overrides cleared
    pub fn chet(&self) -> Command {
        let mut cmd = Command::cargo_bin("chet").expect("chet binary");
        cmd.env_remove("CHET_NTP_SERVER")
            .env_remove("CHET_CULTURE")
            .env_remove("CHET_LOG_LEVEL")
            .arg("-c")
            .arg(&self.config);
        cmd
    }
}

/// Records from the proximity example: two bases, one hour threshold
pub const RECORDS_CSV: &str = "\
id,key,time
1,123,2024-01-01 10:00:00
2,123,2024-01-01 10:30:00
3,123,2024-01-01 12:00:00
4,456,2024-01-01 10:00:00
5,456,2024-01-01 10:45:00
";
