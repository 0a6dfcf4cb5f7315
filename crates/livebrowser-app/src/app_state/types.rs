use std::time::Duration;

/// How often the event loop wakes to drain channels when idle.
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// What to show right after the panel is resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StartupTarget {
    /// The configured URL, or the default.
    #[default]
    Configured,
    Url(String),
    File(String),
}

impl StartupTarget {
    pub fn from_args(url: Option<String>, file: Option<String>) -> Self {
        match (url, file) {
            (Some(url), _) => Self::Url(url),
            (None, Some(file)) => Self::File(file),
            (None, None) => Self::Configured,
        }
    }
}
