// src/health/checker.rs
use super::status::{CheckResult, ProbeOutcome};
use crate::config::ServiceSpec;
use anyhow::Result;
use reqwest::{Client, Request};
use tokio::time::{timeout, Duration};
use tracing::{debug, error};
use url::Url;

/// Upper bound on a single probe, connect through response headers.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(2);

/// Probes one service with a plain GET.
#[derive(Debug, Clone)]
pub struct HealthChecker {
    client: Client,
    timeout: Duration,
}

impl HealthChecker {
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_PROBE_TIMEOUT)
    }

    pub fn with_timeout(probe_timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(probe_timeout).build()?;

        Ok(Self {
            client,
            timeout: probe_timeout,
        })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Probe `service` and record its status.
    ///
    /// Never fails: anything that prevents an HTTP response is logged and
    /// recorded as unavailable.
    pub async fn check(&self, service: &ServiceSpec) -> CheckResult {
        let outcome = self.probe(service).await;
        CheckResult::new(service.clone(), outcome)
    }

    async fn probe(&self, service: &ServiceSpec) -> ProbeOutcome {
        let request = match self.build_request(service) {
            Ok(request) => request,
            Err(e) => {
                error!(
                    service = %service.name,
                    url = %service.url,
                    error = %e,
                    "error creating new request"
                );
                return ProbeOutcome::Unavailable;
            }
        };

        match timeout(self.timeout, self.client.execute(request)).await {
            Ok(Ok(response)) => {
                let status = response.status().as_u16();
                debug!(service = %service.name, status, "probe answered");
                ProbeOutcome::Responded(status)
            }
            Ok(Err(e)) => {
                error!(
                    service = %service.name,
                    url = %service.url,
                    error = %e,
                    "error getting URL"
                );
                ProbeOutcome::Unavailable
            }
            Err(_) => {
                error!(
                    service = %service.name,
                    url = %service.url,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "request timed out"
                );
                ProbeOutcome::Unavailable
            }
        }
    }

    fn build_request(&self, service: &ServiceSpec) -> Result<Request> {
        let url = Url::parse(&service.url)?;

        let mut builder = self.client.get(url);
        for (name, value) in &service.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        Ok(builder.build()?)
    }
}
