use livebrowser_config::schema::WindowConfig;

/// Options for creating the panel webview.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    /// Whether to enable dev tools (always on in debug builds).
    pub devtools: bool,
}

impl WebViewConfig {
    /// Build from the `[window]` section of the config file.
    pub fn from_window(window: &WindowConfig) -> Self {
        Self {
            devtools: cfg!(debug_assertions) || window.devtools,
        }
    }
}

impl Default for WebViewConfig {
    fn default() -> Self {
        Self::from_window(&WindowConfig::default())
    }
}
