//! Embedded browser panel for Live Browser.
//!
//! - [`EmbeddedViewController`] owns the panel state (current URL or
//!   watched file) and decides what document the panel shows
//! - [`template`] renders the address-bar shell around an `<iframe>`
//! - [`PanelSurface`] is the display capability; [`WebViewSurface`] wraps
//!   a `wry` child webview, [`InMemorySurface`] records documents

pub mod controller;
pub mod events;
pub mod surface;
pub mod template;
pub mod webview;

pub use controller::{EmbeddedViewController, ViewMode, ViewState};
pub use events::{PageLoadState, PanelEvent};
pub use surface::{InMemorySurface, PanelSurface};
pub use webview::{WebViewConfig, WebViewSurface};
