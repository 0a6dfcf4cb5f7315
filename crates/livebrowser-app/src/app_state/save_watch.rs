//! Save-event source for the watched file.
//!
//! A `FileWatcher` runs on a small tokio runtime; each debounced change is
//! forwarded over a std channel as the watched path string, exactly as the
//! controller stored it, so the equality check in `notify_file_saved`
//! matches.

use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use livebrowser_config::FileWatcher;

use super::core::LiveBrowserApp;

/// A running watch on one path. Dropping it stops the tasks.
pub(super) struct SaveWatch {
    path: String,
    tasks: Vec<JoinHandle<()>>,
}

impl SaveWatch {
    pub(super) fn path(&self) -> &str {
        &self.path
    }
}

impl Drop for SaveWatch {
    fn drop(&mut self) {
        for task in &self.tasks {
            task.abort();
        }
        tracing::debug!(path = %self.path, "save watch stopped");
    }
}

impl LiveBrowserApp {
    /// Make the running watch follow the controller's watched file.
    pub(super) fn sync_save_watch(&mut self) {
        let wanted = self.controller.watched_file_path().map(str::to_string);
        let current = self.save_watch.as_ref().map(SaveWatch::path);

        if wanted.as_deref() == current {
            return;
        }

        self.save_watch = None;
        if let Some(path) = wanted {
            self.save_watch = self.start_save_watch(path);
        }
    }

    fn start_save_watch(&mut self, path: String) -> Option<SaveWatch> {
        let debounce = Duration::from_millis(self.settings().watch.debounce_ms);
        let watcher = match FileWatcher::new(PathBuf::from(&path), debounce) {
            Ok(w) => w,
            Err(e) => {
                tracing::warn!(path = %path, "cannot watch file: {e}");
                return None;
            }
        };

        let save_tx = self.save_tx.clone();
        let rt = self.ensure_runtime()?;
        let (change_tx, change_rx) = broadcast::channel::<()>(16);

        let watch_task = rt.spawn(async move {
            if let Err(e) = watcher.watch(change_tx).await {
                tracing::error!("file watcher stopped: {e}");
            }
        });
        let forward_task = rt.spawn(forward_saves(change_rx, save_tx, path.clone()));

        tracing::info!(path = %path, "watching for saves");
        Some(SaveWatch {
            path,
            tasks: vec![watch_task, forward_task],
        })
    }

    /// Lazily create the runtime that hosts watcher tasks.
    fn ensure_runtime(&mut self) -> Option<&tokio::runtime::Runtime> {
        if self.tokio_runtime.is_none() {
            match tokio::runtime::Builder::new_multi_thread()
                .worker_threads(1)
                .enable_all()
                .build()
            {
                Ok(rt) => self.tokio_runtime = Some(rt),
                Err(e) => {
                    tracing::error!("Failed to create tokio runtime: {e}");
                    return None;
                }
            }
        }
        self.tokio_runtime.as_ref()
    }
}

/// Turn watcher signals into saved-path messages for the event loop.
async fn forward_saves(
    mut change_rx: broadcast::Receiver<()>,
    save_tx: mpsc::Sender<String>,
    path: String,
) {
    loop {
        match change_rx.recv().await {
            Ok(()) | Err(broadcast::error::RecvError::Lagged(_)) => {
                if save_tx.send(path.clone()).is_err() {
                    break;
                }
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}
