//! Key-value access to persisted settings.
//!
//! The view controller only ever needs one key, [`URL_KEY`], but talks to
//! configuration through the [`ConfigStore`] trait so tests can swap in
//! [`MemoryConfigStore`].

mod memory;
mod toml_store;


use livebrowser_common::ConfigError;

pub use memory::MemoryConfigStore;
pub use toml_store::TomlConfigStore;

/// Key under which the last navigated URL is persisted.
pub const URL_KEY: &str = "liveBrowser.url";

/// URL shown when nothing has been persisted yet.
pub const DEFAULT_URL: &str = "https://example.com";

/// A string key-value settings store.
pub trait ConfigStore {
    /// Read `key`, falling back to `default` when it is unset.
    fn get(&self, key: &str, default: &str) -> String;

    /// Persist `value` under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError>;
}

impl<T: ConfigStore + ?Sized> ConfigStore for Box<T> {
    fn get(&self, key: &str, default: &str) -> String {
        (**self).get(key, default)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        (**self).set(key, value)
    }
}
