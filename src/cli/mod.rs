//! Command-line flags.

use crate::report::OutputMode;
use clap::Parser;
use std::path::PathBuf;

/// mon probes the HTTP services listed in a services file and reports which are up.
///
/// Services answering 200 (OK) are up; anything else, including connection
/// failures, is reported as a problem.
#[derive(Parser, Debug)]
#[command(name = "mon")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Full path to the services file (defaults to <config dir>/mon/services.json)
    #[arg(short = 's', long = "services-file", value_name = "PATH")]
    pub services_file: Option<PathBuf>,

    /// Output results as JSON
    #[arg(short = 'j', long, conflicts_with = "notify")]
    pub json: bool,

    /// Show a desktop notification for each failing service
    #[arg(long)]
    pub notify: bool,
}

impl Cli {
    pub fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else if self.notify {
            OutputMode::Notify
        } else {
            OutputMode::Table
        }
    }
}
