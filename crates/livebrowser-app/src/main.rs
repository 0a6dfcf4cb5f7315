mod app_state;
mod cli;

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use livebrowser_common::ConfigError;
use livebrowser_config::toml_loader::default_config_path;
use livebrowser_config::{LiveBrowserConfig, TomlConfigStore};

use app_state::{LiveBrowserApp, StartupTarget};

const FALLBACK_CONFIG_FILE: &str = "livebrowser.toml";

/// Open the config store, falling back to in-memory defaults on failure.
///
/// The fallback is detached so an unreadable file is never overwritten.
/// Logging is not up yet at this point, so the error is handed back for
/// the caller to report.
fn open_store(override_path: Option<&str>) -> (TomlConfigStore, Option<ConfigError>) {
    let path = match override_path {
        Some(p) => PathBuf::from(p),
        None => default_config_path().unwrap_or_else(|_| PathBuf::from(FALLBACK_CONFIG_FILE)),
    };

    match TomlConfigStore::open(&path) {
        Ok(store) => (store, None),
        Err(e) => (TomlConfigStore::detached(LiveBrowserConfig::default()), Some(e)),
    }
}

/// `--log-level` wins, then `[logging].level`.
fn log_directive(cli_level: Option<&str>, config: &LiveBrowserConfig) -> String {
    match cli_level {
        Some(level) => level.to_string(),
        None => format!("livebrowser={}", config.logging.level.to_ascii_lowercase()),
    }
}

fn main() {
    let args = cli::parse();

    let (store, config_error) = open_store(args.config.as_deref());

    let directive = log_directive(args.log_level.as_deref(), store.config());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                directive
                    .parse()
                    .unwrap_or_else(|_| "livebrowser=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("Live Browser v{} starting...", env!("CARGO_PKG_VERSION"));
    match (config_error, store.path()) {
        (Some(e), _) => tracing::warn!("Config load failed, using defaults without saving: {e}"),
        (None, Some(path)) => tracing::info!("Config loaded from {}", path.display()),
        (None, None) => {}
    }

    let startup = StartupTarget::from_args(args.url, args.file);

    let event_loop = EventLoop::new().expect("failed to create event loop");
    let mut app = LiveBrowserApp::new(store, startup);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
