// src/health/status.rs
use crate::config::ServiceSpec;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

/// Status recorded when a probe never got an HTTP response.
pub const UNAVAILABLE_STATUS: u16 = 503;

/// The only status treated as healthy.
pub const HEALTHY_STATUS: u16 = 200;

/// What a single probe produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The target answered; any HTTP status, not only 2xx.
    Responded(u16),
    /// Bad request, transport failure or timeout.
    Unavailable,
}

impl ProbeOutcome {
    pub fn status(self) -> u16 {
        match self {
            ProbeOutcome::Responded(code) => code,
            ProbeOutcome::Unavailable => UNAVAILABLE_STATUS,
        }
    }
}

/// A service paired with the status its probe produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    #[serde(flatten)]
    pub service: ServiceSpec,
    pub status: u16,
}

impl CheckResult {
    pub fn new(service: ServiceSpec, outcome: ProbeOutcome) -> Self {
        Self {
            service,
            status: outcome.status(),
        }
    }

    pub fn name(&self) -> &str {
        &self.service.name
    }

    pub fn url(&self) -> &str {
        &self.service.url
    }

    /// Exactly 200; other 2xx codes count as failing.
    pub fn is_healthy(&self) -> bool {
        self.status == HEALTHY_STATUS
    }

    pub fn reason(&self) -> &'static str {
        status_text(self.status)
    }
}

/// Reason phrase for an HTTP status code, or "" when the code is unknown.
pub fn status_text(code: u16) -> &'static str {
    StatusCode::from_u16(code)
        .ok()
        .and_then(|status| status.canonical_reason())
        .unwrap_or("")
}
