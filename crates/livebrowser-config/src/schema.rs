//! Configuration schema.
//!
//! Every section uses `#[serde(default)]` so a partial file only needs to
//! name what it overrides.

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LiveBrowserConfig {
    #[serde(rename = "liveBrowser")]
    pub live_browser: BrowserConfig,
    pub window: WindowConfig,
    pub watch: WatchConfig,
    pub logging: LoggingConfig,
}

/// The `[liveBrowser]` section, addressed by the host as `liveBrowser.*`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Last URL navigated to. Unset until the first navigation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Host window settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Logical width (valid range: 200-7680).
    pub width: u32,
    /// Logical height (valid range: 200-4320).
    pub height: u32,
    /// Allow the inspector in release builds.
    pub devtools: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Live Browser".into(),
            width: 1024,
            height: 768,
            devtools: false,
        }
    }
}

/// Save-watcher settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchConfig {
    /// Coalescing window for bursts of file events (valid range: 0-5000).
    pub debounce_ms: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self { debounce_ms: 200 }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of trace, debug, info, warn, error.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}
