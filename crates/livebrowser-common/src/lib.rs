pub mod errors;

pub use errors::{ConfigError, LiveBrowserError, ViewError};

pub type Result<T> = std::result::Result<T, LiveBrowserError>;
