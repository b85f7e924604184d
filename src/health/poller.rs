// src/health/poller.rs
use super::checker::HealthChecker;
use super::status::{CheckResult, ProbeOutcome};
use crate::config::ServiceSpec;
use std::sync::Arc;
use tracing::{debug, error};

/// Runs one probe per service concurrently and waits for all of them.
#[derive(Debug, Clone)]
pub struct Poller {
    checker: Arc<HealthChecker>,
}

impl Poller {
    pub fn new(checker: HealthChecker) -> Self {
        Self {
            checker: Arc::new(checker),
        }
    }

    /// Probe every service and return results in the same order as `services`.
    ///
    /// Each service gets its own task; probes are independent, so a slow
    /// target costs at most one probe timeout and never delays the others.
    pub async fn poll(&self, services: &[ServiceSpec]) -> Vec<CheckResult> {
        let tasks: Vec<_> = services
            .iter()
            .cloned()
            .map(|service| {
                let checker = self.checker.clone();
                tokio::spawn(async move { checker.check(&service).await })
            })
            .collect();

        // Single barrier: nothing is reported until every probe has finished.
        let joined = futures::future::join_all(tasks).await;

        let results: Vec<CheckResult> = joined
            .into_iter()
            .zip(services)
            .map(|(joined, service)| match joined {
                Ok(result) => result,
                Err(e) => {
                    error!(service = %service.name, error = %e, "probe task failed");
                    CheckResult::new(service.clone(), ProbeOutcome::Unavailable)
                }
            })
            .collect();

        let healthy = results.iter().filter(|r| r.is_healthy()).count();
        debug!(
            healthy,
            unhealthy = results.len() - healthy,
            "poll complete"
        );

        results
    }
}
