//! `wry`-backed panel surface.
//!
//! One child webview fills the host window. The controller pushes whole
//! documents into it with `load_html`; page-load and title events are
//! queued for the host loop to drain.

mod bounds;
mod handlers;
mod types;

use std::sync::{Arc, Mutex};

use livebrowser_common::ViewError;
use tracing::debug;
use wry::raw_window_handle;
use wry::{WebView, WebViewBuilder};

use crate::events::PanelEvent;
use crate::surface::PanelSurface;

pub use bounds::logical_bounds;
pub use types::WebViewConfig;

/// Placeholder shown until the controller renders its first document.
const BLANK_DOCUMENT: &str = "<html><body></body></html>";

/// Panel surface wrapping a child `wry::WebView`.
pub struct WebViewSurface {
    webview: WebView,
    events: Arc<Mutex<Vec<PanelEvent>>>,
}

impl WebViewSurface {
    /// Create the webview as a child of `window`, positioned at `bounds`.
    pub fn build<W: raw_window_handle::HasWindowHandle>(
        window: &W,
        bounds: wry::Rect,
        config: &WebViewConfig,
    ) -> Result<Self, wry::Error> {
        let events = Arc::new(Mutex::new(Vec::new()));

        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_devtools(config.devtools)
            .with_html(BLANK_DOCUMENT);

        builder = handlers::attach_page_load_handler(builder, Arc::clone(&events));
        builder = handlers::attach_title_handler(builder, Arc::clone(&events));

        let webview = builder.build_as_child(window)?;
        debug!("panel webview created");

        Ok(Self { webview, events })
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<PanelEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(_) => Vec::new(),
        }
    }

    /// Set the webview bounds within the parent window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }

    /// Focus the webview.
    pub fn focus(&self) -> Result<(), wry::Error> {
        self.webview.focus()
    }

    /// Open devtools (if enabled).
    pub fn open_devtools(&self) {
        self.webview.open_devtools();
    }
}

impl PanelSurface for WebViewSurface {
    fn render(&mut self, html: &str) -> Result<(), ViewError> {
        self.webview
            .load_html(html)
            .map_err(|e| ViewError::Surface(e.to_string()))
    }
}
