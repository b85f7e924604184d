// src/report/notify.rs
use async_trait::async_trait;
use std::process::ExitStatus;
use tokio::process::Command;

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("could not execute '{program}': {source}")]
    Spawn {
        program: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program}' exited with {status}")]
    Failed {
        program: &'static str,
        status: ExitStatus,
    },
}

/// Displays a desktop notification.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, title: &str, body: &str) -> Result<(), NotifyError>;
}

/// macOS notifications through `osascript`.
#[derive(Debug, Default, Clone)]
pub struct OsaScriptNotifier;

impl OsaScriptNotifier {
    const PROGRAM: &'static str = "osascript";

    pub fn new() -> Self {
        Self
    }

    fn script(title: &str, body: &str) -> String {
        format!(
            "display notification \"{}\" with title \"{}\"",
            escape(body),
            escape(title)
        )
    }
}

#[async_trait]
impl Notifier for OsaScriptNotifier {
    async fn notify(&self, title: &str, body: &str) -> Result<(), NotifyError> {
        let status = Command::new(Self::PROGRAM)
            .arg("-e")
            .arg(Self::script(title, body))
            .status()
            .await
            .map_err(|source| NotifyError::Spawn {
                program: Self::PROGRAM,
                source,
            })?;

        if !status.success() {
            return Err(NotifyError::Failed {
                program: Self::PROGRAM,
                status,
            });
        }
        Ok(())
    }
}

// AppleScript string literals only need quotes and backslashes escaped.
fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}
