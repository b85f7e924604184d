// src/main.rs
use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;
use tracing::{debug, error};

use mon::{
    cli::Cli,
    config,
    health::{HealthChecker, Poller},
    report::{OsaScriptNotifier, Reporter},
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_tracing() {
        eprintln!("failed to initialize logging: {e:#}");
        return ExitCode::FAILURE;
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %format!("{e:#}"), "mon failed");
            ExitCode::FAILURE
        }
    }
}

// Logs are JSON on stderr; stdout carries only the report.
fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .json()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("mon=info".parse()?),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}

async fn run(cli: Cli) -> Result<()> {
    let mode = cli.output_mode();

    let path = config::services_path(cli.services_file).await?;
    debug!(file = %path.display(), "loading services");
    let services = config::load_services(&path).await?;

    let poller = Poller::new(HealthChecker::new().context("unable to build HTTP client")?);
    let results = poller.poll(&services).await;

    let notifier = OsaScriptNotifier::new();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    Reporter::new(mode, &notifier)
        .report(&results, &mut out)
        .await?;

    Ok(())
}
