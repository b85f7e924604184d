// src/config/mod.rs
mod models;

pub use models::*;

use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directory under the user config dir that holds `services.json`.
pub const APP_DIR: &str = "mon";

/// Default services file name.
pub const SERVICES_FILE: &str = "services.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unable to obtain config directory: {0}")]
    ConfigDir(String),

    #[error("unable to open services file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unable to parse services file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("invalid service at index {index}: {reason}")]
    Invalid { index: usize, reason: &'static str },
}

/// Resolve which services file to read.
///
/// An explicit path is returned untouched. Otherwise the file lives in
/// `<config_dir>/mon/`, and that directory is created if it is missing.
pub async fn services_path(explicit: Option<PathBuf>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = explicit {
        return Ok(path);
    }

    let base = dirs::config_dir()
        .ok_or_else(|| ConfigError::ConfigDir("no user config directory".to_string()))?;
    let dir = ensure_app_dir(&base).await?;

    Ok(dir.join(SERVICES_FILE))
}

/// Create `<base>/mon` with owner-only permissions unless it already exists.
pub async fn ensure_app_dir(base: &Path) -> Result<PathBuf, ConfigError> {
    let dir = base.join(APP_DIR);

    let mut builder = tokio::fs::DirBuilder::new();
    #[cfg(unix)]
    builder.mode(0o700);

    match builder.create(&dir).await {
        Ok(()) => debug!(dir = %dir.display(), "created config directory"),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {}
        Err(e) => return Err(ConfigError::ConfigDir(format!("{}: {}", dir.display(), e))),
    }

    Ok(dir)
}

/// Load the ordered list of services from a file (JSON, or YAML by extension).
pub async fn load_services<P: AsRef<Path>>(path: P) -> Result<Vec<ServiceSpec>, ConfigError> {
    let path = path.as_ref();
    let contents = tokio::fs::read(path)
        .await
        .map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let services = parse_services(path, &contents)?;
    debug!(file = %path.display(), count = services.len(), "loaded services");
    Ok(services)
}

fn parse_services(path: &Path, contents: &[u8]) -> Result<Vec<ServiceSpec>, ConfigError> {
    let parse_error = |source: Box<dyn std::error::Error + Send + Sync>| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    };

    let ext = path.extension().and_then(|s| s.to_str());
    // A `null` document means "no services" rather than an error.
    let services: Option<Vec<ServiceSpec>> = if ext == Some("yaml") || ext == Some("yml") {
        serde_yaml::from_slice(contents).map_err(|e| parse_error(e.into()))?
    } else {
        serde_json::from_slice(contents).map_err(|e| parse_error(e.into()))?
    };
    let services = services.unwrap_or_default();

    for (index, service) in services.iter().enumerate() {
        service
            .validate()
            .map_err(|reason| ConfigError::Invalid { index, reason })?;
    }

    Ok(services)
}
