//! Draining of command, save and webview channels.

use std::time::Instant;

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use livebrowser_webview::PanelEvent;

use super::core::LiveBrowserApp;
use super::types::POLL_INTERVAL;

impl LiveBrowserApp {
    /// Drain pending work and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        self.poll_commands();
        self.poll_saves();
        self.poll_panel_events();

        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + POLL_INTERVAL));
    }

    fn poll_commands(&mut self) {
        let commands: Vec<_> = match &self.command_rx {
            Some(rx) => rx.try_iter().collect(),
            None => return,
        };
        for command in commands {
            self.dispatch(command);
        }
    }

    fn poll_saves(&mut self) {
        let saved: Vec<String> = self.save_rx.try_iter().collect();
        for path in saved {
            match self.controller.notify_file_saved(&path) {
                Ok(true) => tracing::info!(path = %path, "reloaded after save"),
                Ok(false) => tracing::debug!(path = %path, "save ignored, not watched"),
                Err(e) => tracing::warn!("reload after save failed: {e}"),
            }
        }
    }

    fn poll_panel_events(&mut self) {
        let events = match self.controller.surface() {
            Some(surface) => surface.drain_events(),
            None => return,
        };

        for event in events {
            match event {
                PanelEvent::TitleChanged { title } => {
                    if let Some(window) = &self.window {
                        let base = &self.settings().window.title;
                        if title.is_empty() {
                            window.set_title(base);
                        } else {
                            window.set_title(&format!("{title} - {base}"));
                        }
                    }
                }
                PanelEvent::PageLoad { state, url } => {
                    tracing::debug!(?state, url = %url, "panel page load");
                }
            }
        }
    }
}
