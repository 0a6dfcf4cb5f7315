//! Core TOML config loading: read from a path, creating it if missing.

use crate::schema::LiveBrowserConfig;
use crate::validation;
use livebrowser_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

use super::paths::create_default_config;

/// Load config from a specific TOML file path.
///
/// Missing fields fall back to serde defaults. If validation fails, a
/// warning is logged and the parsed config is returned as-is.
pub fn load_from_path(path: &Path) -> Result<LiveBrowserConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::ParseError(format!("failed to read {}: {e}", path.display())),
    })?;

    let config: LiveBrowserConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}; using parsed config as-is");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from `path`, writing the commented default file first if
/// nothing exists there yet.
pub fn load_or_create(path: &Path) -> Result<LiveBrowserConfig, ConfigError> {
    match load_from_path(path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(path)?;
            Ok(LiveBrowserConfig::default())
        }
        Err(e) => Err(e),
    }
}
