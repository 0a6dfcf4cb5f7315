//! Core file watcher implementation.

use livebrowser_common::ConfigError;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::broadcast;
use tracing::{debug, error, info, warn};

/// Watches one file for writes and sends a signal after each burst.
pub struct FileWatcher {
    path: PathBuf,
    debounce: Duration,
}

impl FileWatcher {
    /// Create a new watcher for the given file path.
    pub fn new(path: PathBuf, debounce: Duration) -> Result<Self, ConfigError> {
        if path.file_name().is_none() {
            return Err(ConfigError::WatchError(format!(
                "{} does not name a file",
                path.display()
            )));
        }

        if !path.exists() {
            warn!(
                "{} does not exist yet, will watch for creation",
                path.display()
            );
        }

        Ok(Self { path, debounce })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a `notify` event concerns the watched file.
    ///
    /// Only modifications and creations count; editors that save by
    /// writing a temp file and renaming it show up as a create.
    pub fn is_relevant(event: &Event, file_name: &OsString) -> bool {
        let is_write = matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_));
        is_write
            && event
                .paths
                .iter()
                .any(|p| p.file_name().map(|n| n == file_name).unwrap_or(false))
    }

    /// Watch the file, sending `()` on `tx` once per debounced burst.
    ///
    /// Runs until the underlying `notify` channel closes. The parent
    /// directory is watched non-recursively so atomic saves are seen.
    pub async fn watch(&self, tx: broadcast::Sender<()>) -> Result<(), ConfigError> {
        let watch_path = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();

        info!("starting file watcher for {}", self.path.display());

        // Bridge the sync notify callback into async
        let (notify_tx, mut notify_rx) = tokio::sync::mpsc::channel::<()>(16);

        let mut watcher = RecommendedWatcher::new(
            move |result: Result<Event, notify::Error>| match result {
                Ok(event) => {
                    if Self::is_relevant(&event, &file_name) {
                        debug!("watched file change detected");
                        let _ = notify_tx.try_send(());
                    }
                }
                Err(e) => {
                    error!("file watcher error: {e}");
                }
            },
            notify::Config::default(),
        )
        .map_err(|e| ConfigError::WatchError(format!("failed to create watcher: {e}")))?;

        watcher
            .watch(&watch_path, RecursiveMode::NonRecursive)
            .map_err(|e| {
                ConfigError::WatchError(format!("failed to watch {}: {e}", watch_path.display()))
            })?;

        loop {
            if notify_rx.recv().await.is_none() {
                break;
            }

            // Coalesce further signals until the window passes quietly
            let debounce = tokio::time::sleep(self.debounce);
            tokio::pin!(debounce);

            loop {
                tokio::select! {
                    _ = &mut debounce => break,
                    msg = notify_rx.recv() => {
                        if msg.is_none() {
                            return Ok(());
                        }
                    }
                }
            }

            info!("{} changed, sending save signal", self.path.display());
            if tx.send(()).is_err() {
                debug!("no receivers for save signal");
            }
        }

        drop(watcher);
        Ok(())
    }
}
