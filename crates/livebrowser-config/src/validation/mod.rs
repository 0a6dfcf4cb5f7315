//! Configuration validation.
//!
//! Each section validator pushes human-readable messages; the orchestrator
//! joins them into a single `ConfigError`.

mod helpers;
mod sections;


use crate::schema::LiveBrowserConfig;
use livebrowser_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &LiveBrowserConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    sections::validate_browser(&mut errors, config);
    sections::validate_window(&mut errors, config);
    sections::validate_watch(&mut errors, config);
    sections::validate_logging(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
