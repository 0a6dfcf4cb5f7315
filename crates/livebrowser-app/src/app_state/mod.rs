//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the window, the panel controller, the stdin command
//! channel and the save watcher.

mod commands;
mod core;
mod event_handler;
mod init;
mod polling;
mod save_watch;
mod types;

pub use core::LiveBrowserApp;
pub use types::StartupTarget;
