use crate::schema::LiveBrowserConfig;

use super::helpers::validate_range;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// A stored URL may be anything the user typed, but never blank.
pub(crate) fn validate_browser(errors: &mut Vec<String>, config: &LiveBrowserConfig) {
    if let Some(url) = &config.live_browser.url {
        if url.trim().is_empty() {
            errors.push("liveBrowser.url must not be empty".into());
        }
    }
}

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &LiveBrowserConfig) {
    validate_range(errors, "window.width", config.window.width, 200, 7680);
    validate_range(errors, "window.height", config.window.height, 200, 4320);
}

pub(crate) fn validate_watch(errors: &mut Vec<String>, config: &LiveBrowserConfig) {
    validate_range(errors, "watch.debounce_ms", config.watch.debounce_ms, 0, 5000);
}

pub(crate) fn validate_logging(errors: &mut Vec<String>, config: &LiveBrowserConfig) {
    let level = config.logging.level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(format!(
            "logging.level = {:?} must be one of {}",
            config.logging.level,
            LOG_LEVELS.join(", ")
        ));
    }
}
