use std::path::{Path, PathBuf};

use livebrowser_common::ConfigError;
use tracing::debug;

use crate::schema::LiveBrowserConfig;
use crate::toml_loader::load_or_create;
use crate::toml_writer::save_config_to_path;

use super::{ConfigStore, URL_KEY};

/// Store backed by the TOML config file.
///
/// Holds the parsed config in memory; every `set` rewrites the whole file
/// atomically. A detached store has no file and only updates memory.
#[derive(Debug, Clone)]
pub struct TomlConfigStore {
    path: Option<PathBuf>,
    config: LiveBrowserConfig,
}

impl TomlConfigStore {
    /// Open the store at `path`, creating a default file if none exists.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let config = load_or_create(&path)?;
        Ok(Self {
            path: Some(path),
            config,
        })
    }

    /// Wrap an already-loaded config. Nothing is written until `set`.
    pub fn from_parts(path: impl Into<PathBuf>, config: LiveBrowserConfig) -> Self {
        Self {
            path: Some(path.into()),
            config,
        }
    }

    /// A store that never touches disk, used when the config file exists
    /// but cannot be read and must not be overwritten.
    pub fn detached(config: LiveBrowserConfig) -> Self {
        Self { path: None, config }
    }

    pub fn config(&self) -> &LiveBrowserConfig {
        &self.config
    }

    /// Backing file, `None` when detached.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl ConfigStore for TomlConfigStore {
    fn get(&self, key: &str, default: &str) -> String {
        match key {
            URL_KEY => self
                .config
                .live_browser
                .url
                .clone()
                .unwrap_or_else(|| default.to_string()),
            _ => default.to_string(),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            URL_KEY => {
                let mut updated = self.config.clone();
                updated.live_browser.url = Some(value.to_string());
                match &self.path {
                    Some(path) => {
                        save_config_to_path(&updated, path)?;
                        debug!(key, value, "config value persisted");
                    }
                    None => debug!(key, value, "config detached, value kept in memory"),
                }
                self.config = updated;
                Ok(())
            }
            _ => Err(ConfigError::UnknownKey(key.to_string())),
        }
    }
}
