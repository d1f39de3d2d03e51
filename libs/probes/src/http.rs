//! HTTP health-check probe.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::debug;
use vigil_poller::ProbeReport;

/// Errors from constructing an [`HttpHealthProbe`].
#[derive(Debug, Error)]
pub enum ProbeBuildError {
    /// The underlying HTTP client could not be built.
    #[error("failed to build http client: {0}")]
    Client(String),
}

/// Configuration for an HTTP health check.
#[derive(Debug, Clone)]
pub struct HttpProbeConfig {
    /// Full URL of the health endpoint, e.g. `https://lb.example.com/ok`.
    pub url: String,

    /// Per-request timeout.
    pub timeout: Duration,

    /// Accept invalid and self-signed certificates. Needed when the
    /// load balancer serves a self-signed certificate imported for the
    /// test run.
    pub insecure: bool,
}

impl HttpProbeConfig {
    /// Config with a 60 second request timeout and strict TLS.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: Duration::from_secs(60),
            insecure: false,
        }
    }
}

/// GET-based health check against a deployed endpoint, expecting
/// 200 OK.
///
/// Error classification: failing to issue the request at all (invalid
/// URL, client misconfiguration) is fatal; connect errors, timeouts,
/// and non-200 statuses are retryable, since a service still rolling
/// out produces all three.
#[derive(Debug, Clone)]
pub struct HttpHealthProbe {
    client: Client,
    url: String,
}

impl HttpHealthProbe {
    pub fn new(config: HttpProbeConfig) -> Result<Self, ProbeBuildError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .danger_accept_invalid_certs(config.insecure)
            .build()
            .map_err(|e| ProbeBuildError::Client(e.to_string()))?;

        Ok(Self {
            client,
            url: config.url,
        })
    }

    /// Run one observation of the endpoint.
    pub async fn check(&self) -> ProbeReport {
        let started = std::time::Instant::now();

        match self.client.get(&self.url).send().await {
            Ok(resp) => {
                let status = resp.status();
                debug!(
                    url = %self.url,
                    status = status.as_u16(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "health endpoint responded"
                );
                if status == StatusCode::OK {
                    ProbeReport::Success
                } else {
                    ProbeReport::retryable(format!(
                        "expected 200 from {}, got {}",
                        self.url, status
                    ))
                }
            }
            Err(e) if e.is_builder() => {
                ProbeReport::fatal(format!("cannot request {}: {}", self.url, e))
            }
            Err(e) => ProbeReport::retryable(format!("request to {} failed: {}", self.url, e)),
        }
    }
}
