//! Debounced file watcher.
//!
//! Uses the `notify` crate to watch a single file. The app uses it as the
//! save-event source for the watched HTML file.

mod file_watcher;


pub use file_watcher::FileWatcher;
