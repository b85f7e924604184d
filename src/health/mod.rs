// src/health/mod.rs
mod checker;
mod poller;
mod status;

pub use checker::{HealthChecker, DEFAULT_PROBE_TIMEOUT};
pub use poller::Poller;
pub use status::{status_text, CheckResult, ProbeOutcome, HEALTHY_STATUS, UNAVAILABLE_STATUS};
