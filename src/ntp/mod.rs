//! Network time over SNTP with a local-clock fallback

pub mod packet;

use std::net::SocketAddr;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{Local, NaiveDateTime, TimeZone, Utc};
use tokio::net::{lookup_host, UdpSocket};
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::config::NtpSettings;
use crate::error::{ChetError, Result};
pub use packet::{decode_response, request_packet, NTP_PORT, PACKET_LEN};

/// Source of the current local wall-clock time
#[async_trait]
pub trait TimeSource: Send + Sync {
    async fn now(&self) -> NaiveDateTime;
}

/// The machine clock
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

#[async_trait]
impl TimeSource for LocalClock {
    async fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock stuck at one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

#[async_trait]
impl TimeSource for FixedClock {
    async fn now(&self) -> NaiveDateTime {
        self.0
    }
}

fn utc_to_local(utc: NaiveDateTime) -> NaiveDateTime {
    Utc.from_utc_datetime(&utc).with_timezone(&Local).naive_local()
}

#[derive(Debug, Clone)]
pub struct NtpClient {
    server: String,
    port: u16,
    timeout: Duration,
}

impl Default for NtpClient {
    fn default() -> Self {
        Self::from_settings(&NtpSettings::default())
    }
}

impl NtpClient {
    pub fn new(server: impl Into<String>) -> Self {
        Self {
            server: server.into(),
            port: NTP_PORT,
            timeout: Duration::from_millis(NtpSettings::default().timeout_ms),
        }
    }

    pub fn from_settings(settings: &NtpSettings) -> Self {
        Self {
            server: settings.server.clone(),
            port: settings.port,
            timeout: Duration::from_millis(settings.timeout_ms),
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn server(&self) -> &str {
        &self.server
    }

    /// First IPv4 address of the server, else the first address of any family
    async fn resolve(&self) -> Result<SocketAddr> {
        let addresses: Vec<SocketAddr> = lookup_host((self.server.as_str(), self.port))
            .await
            .map_err(|_| ChetError::Resolve(self.server.clone()))?
            .collect();
        addresses
            .iter()
            .find(|a| a.is_ipv4())
            .or_else(|| addresses.first())
            .copied()
            .ok_or_else(|| ChetError::Resolve(self.server.clone()))
    }

    async fn exchange(&self, address: SocketAddr) -> Result<NaiveDateTime> {
        let bind: SocketAddr = if address.is_ipv4() {
            SocketAddr::from(([0, 0, 0, 0], 0))
        } else {
            SocketAddr::from(([0u16; 8], 0))
        };
        let socket = UdpSocket::bind(bind).await?;
        socket.connect(address).await?;
        socket.send(&request_packet()).await?;

        let mut buffer = [0u8; PACKET_LEN];
        let received = socket.recv(&mut buffer).await?;
        decode_response(&buffer[..received])
    }

    /// Query the server once; the result is local time
    pub async fn query(&self) -> Result<NaiveDateTime> {
        let address = self.resolve().await?;
        debug!("Querying network time from {} ({})", self.server, address);

        let utc = timeout(self.timeout, self.exchange(address))
            .await
            .map_err(|_| ChetError::NtpTimeout {
                server: self.server.clone(),
                timeout: self.timeout,
            })??;
        Ok(utc_to_local(utc))
    }

    /// Network time, or the local clock when the query fails
    pub async fn network_time_or_local(&self) -> NaiveDateTime {
        match self.query().await {
            Ok(time) => time,
            Err(e) => {
                warn!("Network time unavailable, using local clock: {}", e);
                Local::now().naive_local()
            }
        }
    }
}

#[async_trait]
impl TimeSource for NtpClient {
    async fn now(&self) -> NaiveDateTime {
        self.network_time_or_local().await
    }
}
