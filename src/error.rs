use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Errors raised at the few fallible boundaries of the crate.
///
/// The value helpers under [`crate::ext`] never return these: they fall back
/// to a default instead. Only configuration loading, the network clock,
/// table expressions and table import/export surface typed errors.
#[derive(Error, Debug)]
pub enum ChetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read configuration file {path}: {message}")]
    ConfigFile { path: PathBuf, message: String },

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Could not resolve host {0}")]
    Resolve(String),

    #[error("Network time request to {server} timed out after {timeout:?}")]
    NtpTimeout { server: String, timeout: Duration },

    #[error("Malformed network time response: {0}")]
    NtpResponse(String),

    #[error("Invalid table expression at position {position}: {message}")]
    Expression { position: usize, message: String },

    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Pointer input failed: {0}")]
    Pointer(String),

    #[error("Chrono parse error: {0}")]
    ChronoParse(#[from] chrono::ParseError),

    #[error("Other error: {0}")]
    Other(String),
}

impl ChetError {
    pub fn expression(position: usize, message: impl Into<String>) -> Self {
        Self::Expression {
            position,
            message: message.into(),
        }
    }

    /// Whether the error came from the network layer and a local fallback is appropriate
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            Self::Resolve(_) | Self::NtpTimeout { .. } | Self::NtpResponse(_) | Self::Io(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ChetError>;
