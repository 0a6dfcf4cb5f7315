//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use super::core::LiveBrowserApp;

impl ApplicationHandler for LiveBrowserApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    self.sync_panel_bounds();
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                self.sync_panel_bounds();
            }

            WindowEvent::Focused(true) => {
                if let Some(surface) = self.controller.surface() {
                    let _ = surface.focus();
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            self.shutdown();
            event_loop.exit();
            return;
        }
        self.poll_and_schedule(event_loop);
    }
}

impl LiveBrowserApp {
    /// Stop background work before the window goes away.
    pub(super) fn shutdown(&mut self) {
        self.save_watch = None;
        self.command_rx = None;
        self.controller.detach_surface();
        if let Some(rt) = self.tokio_runtime.take() {
            rt.shutdown_background();
        }
        tracing::debug!("shutdown complete");
    }
}
