use std::fs;
use std::path::{Path, PathBuf};

use linkscout_core::WatcherConfig;
use scout_logging::scout_info;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Loads the watcher configuration from a RON file, or defaults when no
/// path is given.
pub fn load_config(path: Option<&Path>) -> Result<WatcherConfig, ConfigError> {
    let Some(path) = path else {
        return Ok(WatcherConfig::default());
    };

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&content).map_err(|message| ConfigError::Parse {
        path: path.to_path_buf(),
        message,
    })?;

    scout_info!("Loaded configuration from {:?}", path);
    Ok(config)
}

fn parse_config(content: &str) -> Result<WatcherConfig, String> {
    ron::from_str(content).map_err(|err| err.to_string())
}
