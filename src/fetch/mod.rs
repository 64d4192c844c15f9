use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::header::AUTHORIZATION;

use crate::core::StatusReport;

const USER_AGENT: &str = concat!("wp_status/", env!("CARGO_PKG_VERSION"));

/// Non-2xx responses are still decoded.
pub fn fetch_status(url: &str, password: &str) -> Result<StatusReport> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .context("failed to build HTTP client")?;

    let mut request = client.get(url);
    if !password.is_empty() {
        request = request.header(AUTHORIZATION, password);
    }

    log::debug!("GET {url}");
    let response = request.send()?;
    let status = response.status();
    if !status.is_success() {
        log::warn!("status endpoint answered {status}");
    }

    // `bytes` consumes the response, so the connection is released here.
    let body = response
        .bytes()
        .context("failed to read response body")?;
    log::debug!("received {} bytes ({status})", body.len());

    let report = StatusReport::from_slice(&body).context("failed to decode status payload")?;
    log::debug!("decoded status payload: status={:?}", report.status);
    Ok(report)
}
