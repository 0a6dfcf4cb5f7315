//! Display capability for the panel.

use livebrowser_common::ViewError;

/// Something that can display a full HTML document.
pub trait PanelSurface {
    /// Replace the displayed document with `html`.
    fn render(&mut self, html: &str) -> Result<(), ViewError>;
}

impl<T: PanelSurface + ?Sized> PanelSurface for Box<T> {
    fn render(&mut self, html: &str) -> Result<(), ViewError> {
        (**self).render(html)
    }
}

/// Headless surface that keeps the last rendered document.
#[derive(Debug, Clone, Default)]
pub struct InMemorySurface {
    document: Option<String>,
    render_count: usize,
}

impl InMemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// The document currently shown, if anything was rendered.
    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }

    /// How many times `render` succeeded.
    pub fn render_count(&self) -> usize {
        self.render_count
    }
}

impl PanelSurface for InMemorySurface {
    fn render(&mut self, html: &str) -> Result<(), ViewError> {
        self.document = Some(html.to_string());
        self.render_count += 1;
        Ok(())
    }
}
