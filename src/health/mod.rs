// envdesk: Environment Desk for the Chatbot Builder stack
//
// SPDX-FileCopyrightText: 2026 Envdesk Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Reachability probes for the managed stack.
//!
//! ```text
//! run_checks(&Settings)
//!    |
//!    +--> probe_http(target) x N   GET, timeout   --+
//!    +--> probe_tcp(mongo)         connect, timeout -+--> join_all --> HealthSummary
//!
//! ProbeStatus
//!   Up        200 / TCP connected
//!   Warn(s)   HTTP answered with a non-200 status
//!   Down      connection refused
//!   Timeout   no answer within the timeout
//!   Error(m)  anything else (DNS, TLS, protocol)
//! ```

use std::fmt::{self, Write as _};
use std::sync::OnceLock;
use std::time::{Duration, Instant};

use futures_util::future::{BoxFuture, FutureExt, join_all};
use reqwest::{Client, StatusCode, Url};
use serde::{Deserialize, Serialize};
use tokio::net::TcpStream;
use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::error::{EnvdeskResult, ProbeError};

/// A named HTTP endpoint to probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceTarget {
    pub name: String,
    pub url: String,
}

impl ServiceTarget {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Outcome of a single probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeStatus {
    Up,
    Warn(u16),
    Down,
    Timeout,
    Error(String),
}

impl ProbeStatus {
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }
}

impl fmt::Display for ProbeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Up => write!(f, "UP"),
            Self::Warn(status) => write!(f, "WARN ({status})"),
            Self::Down => write!(f, "DOWN (connection refused)"),
            Self::Timeout => write!(f, "TIMEOUT"),
            Self::Error(message) => write!(f, "ERROR ({message})"),
        }
    }
}

/// Fields the backend's `/api/health` endpoint reports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HealthBody {
    pub status: Option<String>,
    pub service: Option<String>,
}

/// Result of probing one target.
#[derive(Debug, Clone)]
pub struct ProbeReport {
    pub name: String,
    /// URL or `host:port`.
    pub target: String,
    pub status: ProbeStatus,
    pub elapsed: Duration,
    /// Parsed JSON body of a successful HTTP probe.
    pub body: Option<HealthBody>,
}

impl ProbeReport {
    /// One line for terminal output.
    #[must_use]
    pub fn format_line(&self) -> String {
        let mut line = format!("{:<20} {} ({})", self.name, self.status, self.target);
        if let Some(body) = &self.body {
            let status = body.status.as_deref().unwrap_or("OK");
            let service = body.service.as_deref().unwrap_or("N/A");
            let _ = write!(line, " status={status} service={service}");
        }
        line
    }
}

/// All probe results, in the order the targets were configured.
#[derive(Debug, Clone, Default)]
pub struct HealthSummary {
    pub reports: Vec<ProbeReport>,
}

impl HealthSummary {
    #[must_use]
    pub fn all_healthy(&self) -> bool {
        self.reports.iter().all(|r| r.status.is_up())
    }

    #[must_use]
    pub fn unhealthy(&self) -> Vec<&ProbeReport> {
        self.reports.iter().filter(|r| !r.status.is_up()).collect()
    }
}

/// Build the HTTP client used for probes.
///
/// # Errors
///
/// Returns `ProbeError::Client` if the TLS backend cannot be initialized.
pub fn http_client(timeout: Duration) -> Result<Client, ProbeError> {
    Client::builder()
        .user_agent(user_agent())
        .timeout(timeout)
        .build()
        .map_err(ProbeError::Client)
}

fn user_agent() -> &'static str {
    static AGENT: OnceLock<String> = OnceLock::new();
    AGENT.get_or_init(|| format!("envdesk/{}", env!("CARGO_PKG_VERSION")))
}

/// GET `target.url` and classify the outcome.
pub async fn probe_http(client: &Client, target: &ServiceTarget) -> ProbeReport {
    let started = Instant::now();
    debug!(name = %target.name, url = %target.url, "probing http endpoint");

    let (status, body) = match client.get(&target.url).send().await {
        Ok(response) if response.status() == StatusCode::OK => {
            let body = response.json::<HealthBody>().await.ok();
            (ProbeStatus::Up, body)
        }
        Ok(response) => (ProbeStatus::Warn(response.status().as_u16()), None),
        Err(e) if e.is_timeout() => (ProbeStatus::Timeout, None),
        Err(e) if e.is_connect() => (ProbeStatus::Down, None),
        Err(e) => (ProbeStatus::Error(e.to_string()), None),
    };

    ProbeReport {
        name: target.name.clone(),
        target: target.url.clone(),
        status,
        elapsed: started.elapsed(),
        body,
    }
}

/// Open a TCP connection to `host:port` and close it again.
pub async fn probe_tcp(name: &str, host: &str, port: u16, timeout: Duration) -> ProbeReport {
    let started = Instant::now();
    debug!(%name, %host, port, "probing tcp endpoint");

    let status = match tokio::time::timeout(timeout, TcpStream::connect((host, port))).await {
        Ok(Ok(_stream)) => ProbeStatus::Up,
        Ok(Err(e)) if e.kind() == std::io::ErrorKind::ConnectionRefused => ProbeStatus::Down,
        Ok(Err(e)) => ProbeStatus::Error(e.to_string()),
        Err(_) => ProbeStatus::Timeout,
    };

    ProbeReport {
        name: name.to_string(),
        target: format!("{host}:{port}"),
        status,
        elapsed: started.elapsed(),
        body: None,
    }
}

/// Check that every configured URL parses before any request is sent.
///
/// # Errors
///
/// Returns `ProbeError::InvalidTarget` for the first malformed URL.
pub fn validate_targets(targets: &[ServiceTarget]) -> Result<(), ProbeError> {
    for target in targets {
        Url::parse(&target.url).map_err(|e| ProbeError::InvalidTarget {
            name: target.name.clone(),
            message: e.to_string(),
        })?;
    }
    Ok(())
}

/// Probe every configured service and, optionally, MongoDB, concurrently.
///
/// # Errors
///
/// Returns an error if a target URL is malformed or the HTTP client cannot be
/// built. Unreachable services are reported in the summary, not as errors.
pub async fn run_checks(settings: &Settings, include_mongo: bool) -> EnvdeskResult<HealthSummary> {
    let targets = &settings.health.services;
    validate_targets(targets)?;
    let client = http_client(settings.health.timeout())?;

    let mut probes: Vec<BoxFuture<'_, ProbeReport>> = targets
        .iter()
        .map(|target| probe_http(&client, target).boxed())
        .collect();
    if include_mongo {
        let mongo = &settings.mongo;
        probes.push(probe_tcp("MongoDB", &mongo.host, mongo.port, mongo.timeout()).boxed());
    }

    let reports = join_all(probes).await;
    for report in &reports {
        if report.status.is_up() {
            info!(name = %report.name, elapsed_ms = report.elapsed.as_millis(), "probe up");
        } else {
            warn!(name = %report.name, status = %report.status, "probe not healthy");
        }
    }
    Ok(HealthSummary { reports })
}
