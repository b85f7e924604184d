// src/report/mod.rs
mod json;
mod notify;
mod table;

pub use json::render_json;
pub use notify::{Notifier, NotifyError, OsaScriptNotifier};
pub use table::render_table;

use crate::health::CheckResult;
use std::io::{self, Write};
use tracing::debug;

/// How a finished poll is reported. Exactly one mode runs per invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    #[default]
    Table,
    Json,
    Notify,
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("unable to write report: {0}")]
    Io(#[from] io::Error),

    #[error("unable to marshal responses: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("notification for {service} failed: {source}")]
    Notify {
        service: String,
        #[source]
        source: NotifyError,
    },
}

/// Raise one notification per result that is not exactly 200.
///
/// Stops at the first delivery failure. Returns how many were sent.
pub async fn notify_failures(
    results: &[CheckResult],
    notifier: &dyn Notifier,
) -> Result<usize, ReportError> {
    let mut sent = 0;

    for result in results.iter().filter(|r| !r.is_healthy()) {
        notifier
            .notify(result.name(), result.reason())
            .await
            .map_err(|source| ReportError::Notify {
                service: result.name().to_string(),
                source,
            })?;

        debug!(service = %result.name(), status = result.status, "notification sent");
        sent += 1;
    }

    Ok(sent)
}

pub struct Reporter<'a> {
    mode: OutputMode,
    notifier: &'a dyn Notifier,
}

impl<'a> Reporter<'a> {
    pub fn new(mode: OutputMode, notifier: &'a dyn Notifier) -> Self {
        Self { mode, notifier }
    }

    /// Render `results` in the selected mode. Text modes write to `out`.
    pub async fn report<W: Write>(
        &self,
        results: &[CheckResult],
        out: &mut W,
    ) -> Result<(), ReportError> {
        match self.mode {
            OutputMode::Table => render_table(results, out)?,
            OutputMode::Json => render_json(results, out)?,
            OutputMode::Notify => {
                let sent = notify_failures(results, self.notifier).await?;
                debug!(sent, "notifications delivered");
            }
        }
        Ok(())
    }
}
