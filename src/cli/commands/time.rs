//! `chet time`

use std::time::Duration;

use anyhow::Result;

use crate::config::Settings;
use crate::ext::datetime::DateTimeExt;
use crate::ntp::NtpClient;

pub struct TimeParams {
    pub server: Option<String>,
    pub timeout_ms: Option<u64>,
    pub strict: bool,
    pub format: String,
}

pub fn client_for(settings: &Settings, server: Option<String>, timeout_ms: Option<u64>) -> NtpClient {
    let mut ntp = settings.ntp.clone();
    if let Some(server) = server {
        ntp.server = server;
    }
    let client = NtpClient::from_settings(&ntp);
    match timeout_ms {
        Some(ms) => client.with_timeout(Duration::from_millis(ms.max(1))),
        None => client,
    }
}

pub async fn run_time_command(params: TimeParams, settings: &Settings) -> Result<()> {
    let client = client_for(settings, params.server, params.timeout_ms);
    let now = if params.strict {
        client.query().await?
    } else {
        client.network_time_or_local().await
    };
    println!("{}", now.to_format_string(&params.format));
    Ok(())
}
