//! Live Browser configuration system.
//!
//! Provides a TOML config file with serde defaults, atomic writes,
//! validation, the key-value [`ConfigStore`] capability used by the
//! view controller, and a debounced [`FileWatcher`] for save events.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use livebrowser_config::toml_loader::default_config_path;
//! use livebrowser_config::{ConfigStore, TomlConfigStore, DEFAULT_URL, URL_KEY};
//!
//! let path = default_config_path().expect("no config directory");
//! let store = TomlConfigStore::open(path).expect("failed to open config");
//! println!("{}", store.get(URL_KEY, DEFAULT_URL));
//! ```

pub mod schema;
pub mod store;
pub mod toml_loader;
pub mod toml_writer;
pub mod validation;
pub mod watcher;

pub use schema::LiveBrowserConfig;
pub use store::{ConfigStore, MemoryConfigStore, TomlConfigStore, DEFAULT_URL, URL_KEY};
pub use toml_writer::save_config_to_path;
pub use watcher::FileWatcher;
