//! Window creation and panel setup.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use livebrowser_webview::webview::logical_bounds;
use livebrowser_webview::{WebViewConfig, WebViewSurface};

use super::commands::spawn_stdin_reader;
use super::core::LiveBrowserApp;
use super::types::StartupTarget;

impl LiveBrowserApp {
    /// Create the window and the panel webview, then resolve the panel.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let window_config = &self.settings().window;
        let attrs = WindowAttributes::default()
            .with_title(window_config.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                f64::from(window_config.width),
                f64::from(window_config.height),
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        let size = window.inner_size().to_logical::<f64>(window.scale_factor());
        let surface = match WebViewSurface::build(
            window.as_ref(),
            logical_bounds(size.width, size.height),
            &WebViewConfig::from_window(&self.settings().window),
        ) {
            Ok(s) => s,
            Err(e) => {
                tracing::error!("Failed to create webview: {e}");
                return false;
            }
        };

        self.window = Some(window);

        if let Err(e) = self.controller.resolve_panel(surface) {
            tracing::error!("Failed to render panel: {e}");
            return false;
        }

        self.apply_startup_target();
        self.command_rx = Some(spawn_stdin_reader());
        true
    }

    /// Apply `--url` / `--file` once the panel exists.
    fn apply_startup_target(&mut self) {
        let result = match self.startup.take() {
            Some(StartupTarget::Url(url)) => self.controller.navigate_to_url(&url),
            Some(StartupTarget::File(path)) => self.controller.load_local_file(&path),
            Some(StartupTarget::Configured) | None => Ok(()),
        };

        if let Err(e) = result {
            tracing::warn!("startup target could not be shown: {e}");
        }
        self.sync_save_watch();
    }

    /// Keep the webview filling the window.
    pub(super) fn sync_panel_bounds(&self) {
        let (Some(window), Some(surface)) = (&self.window, self.controller.surface()) else {
            return;
        };
        let size = window.inner_size().to_logical::<f64>(window.scale_factor());
        if let Err(e) = surface.set_bounds(logical_bounds(size.width, size.height)) {
            tracing::warn!("Failed to resize webview: {e}");
        }
    }
}
