//! Panel lifecycle and view state.
//!
//! The controller shows either the address-bar shell for a URL or the raw
//! contents of one local HTML file. It is driven synchronously by the host:
//! panel resolution, explicit navigation, opening a file, and save events.
//!
//! Until the host hands over a surface every operation is a logged no-op.

#[cfg(test)]
mod tests;

use livebrowser_common::ViewError;
use livebrowser_config::{ConfigStore, DEFAULT_URL, URL_KEY};
use tracing::{debug, info, warn};

use crate::surface::PanelSurface;
use crate::template::render_shell;

/// What the panel is currently displaying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Address-bar shell around an iframe.
    ShowingUrl,
    /// Raw contents of the watched file.
    ShowingFile,
}

/// Mutable state owned by the controller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    /// URL of the shell, kept exactly as given.
    pub current_url: String,
    /// Local file whose saves refresh the panel.
    pub watched_file_path: Option<String>,
}

impl ViewState {
    pub fn mode(&self) -> ViewMode {
        match self.watched_file_path {
            Some(_) => ViewMode::ShowingFile,
            None => ViewMode::ShowingUrl,
        }
    }
}

/// Owns one panel and the state behind it.
pub struct EmbeddedViewController<C, S> {
    config: C,
    surface: Option<S>,
    state: ViewState,
}

impl<C: ConfigStore, S: PanelSurface> EmbeddedViewController<C, S> {
    /// Create a controller with no surface yet.
    pub fn new(config: C) -> Self {
        let current_url = config.get(URL_KEY, DEFAULT_URL);
        Self {
            config,
            surface: None,
            state: ViewState {
                current_url,
                watched_file_path: None,
            },
        }
    }

    /// Host callback once the panel surface exists: attach it and show the
    /// configured URL (or [`DEFAULT_URL`]).
    pub fn resolve_panel(&mut self, surface: S) -> Result<(), ViewError> {
        self.attach_surface(surface);
        let url = self.config.get(URL_KEY, DEFAULT_URL);
        self.initialize(&url)
    }

    /// Attach a surface without rendering. Returns the one it replaces.
    pub fn attach_surface(&mut self, surface: S) -> Option<S> {
        self.surface.replace(surface)
    }

    /// Detach the surface, e.g. when the host destroys the panel.
    pub fn detach_surface(&mut self) -> Option<S> {
        self.surface.take()
    }

    /// Render the shell for `default_url`.
    pub fn initialize(&mut self, default_url: &str) -> Result<(), ViewError> {
        let Some(surface) = self.surface.as_mut() else {
            skip_unresolved("initialize");
            return Ok(());
        };

        surface.render(&render_shell(default_url))?;
        self.state.current_url = default_url.to_string();
        self.state.watched_file_path = None;
        info!(url = %default_url, "panel initialized");
        Ok(())
    }

    /// Show `url` in the shell and remember it.
    ///
    /// The URL is stored exactly as given. If the surface rejects the shell
    /// nothing changes. A failed config write is logged and does not stop
    /// the navigation.
    pub fn navigate_to_url(&mut self, url: &str) -> Result<(), ViewError> {
        let Some(surface) = self.surface.as_mut() else {
            skip_unresolved("navigate_to_url");
            return Ok(());
        };

        surface.render(&render_shell(url))?;

        self.state.watched_file_path = None;
        self.state.current_url = url.to_string();

        if let Err(e) = self.config.set(URL_KEY, url) {
            warn!(url = %url, "failed to persist URL: {e}");
        }

        debug!(url = %url, "navigated");
        Ok(())
    }

    /// Replace the panel document with the raw contents of `path` and watch
    /// it for saves.
    ///
    /// On a read error the panel and state are left untouched.
    pub fn load_local_file(&mut self, path: &str) -> Result<(), ViewError> {
        let Some(surface) = self.surface.as_mut() else {
            skip_unresolved("load_local_file");
            return Ok(());
        };

        let content = std::fs::read_to_string(path).map_err(|source| ViewError::FileRead {
            path: path.to_string(),
            source,
        })?;

        surface.render(&content)?;
        self.state.watched_file_path = Some(path.to_string());
        debug!(path, bytes = content.len(), "local file loaded");
        Ok(())
    }

    /// Reload the watched file if `saved_path` is exactly that file.
    ///
    /// Returns whether a reload happened.
    pub fn notify_file_saved(&mut self, saved_path: &str) -> Result<bool, ViewError> {
        match self.state.watched_file_path.as_deref() {
            Some(watched) if watched == saved_path => {
                let path = watched.to_string();
                self.load_local_file(&path)?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Re-render whatever is currently shown.
    pub fn reload(&mut self) -> Result<(), ViewError> {
        match self.state.watched_file_path.clone() {
            Some(path) => self.load_local_file(&path),
            None => {
                let url = self.state.current_url.clone();
                self.initialize(&url)
            }
        }
    }

    pub fn watched_file_path(&self) -> Option<&str> {
        self.state.watched_file_path.as_deref()
    }

    pub fn current_url(&self) -> &str {
        &self.state.current_url
    }

    pub fn mode(&self) -> ViewMode {
        self.state.mode()
    }

    /// Whether a surface has been attached.
    pub fn is_resolved(&self) -> bool {
        self.surface.is_some()
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn config(&self) -> &C {
        &self.config
    }
}

fn skip_unresolved(operation: &str) {
    debug!(operation, "panel surface not resolved yet, skipping");
}
