//! LiveBrowserApp struct definition and constructor.

use std::sync::mpsc;
use std::sync::Arc;

use winit::window::Window;

use livebrowser_config::{LiveBrowserConfig, TomlConfigStore};
use livebrowser_webview::{EmbeddedViewController, WebViewSurface};

use super::commands::HostCommand;
use super::save_watch::SaveWatch;
use super::types::StartupTarget;

/// Top-level application state.
pub struct LiveBrowserApp {
    pub(super) controller: EmbeddedViewController<TomlConfigStore, WebViewSurface>,
    pub(super) startup: Option<StartupTarget>,

    // Windowing
    pub(super) window: Option<Arc<Window>>,

    // Host commands from stdin
    pub(super) command_rx: Option<mpsc::Receiver<HostCommand>>,

    // Save events, forwarded from the watcher task
    pub(super) save_tx: mpsc::Sender<String>,
    pub(super) save_rx: mpsc::Receiver<String>,
    pub(super) save_watch: Option<SaveWatch>,
    pub(super) tokio_runtime: Option<tokio::runtime::Runtime>,

    pub(super) should_exit: bool,
}

impl LiveBrowserApp {
    pub fn new(store: TomlConfigStore, startup: StartupTarget) -> Self {
        let (save_tx, save_rx) = mpsc::channel();
        Self {
            controller: EmbeddedViewController::new(store),
            startup: Some(startup),
            window: None,
            command_rx: None,
            save_tx,
            save_rx,
            save_watch: None,
            tokio_runtime: None,
            should_exit: false,
        }
    }

    pub(super) fn settings(&self) -> &LiveBrowserConfig {
        self.controller.config().config()
    }
}
