//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Live Browser Configuration
# Only override what you want to change -- missing fields use defaults.

[liveBrowser]
# Last URL shown in the panel. Updated whenever you navigate.
# url = "https://example.com"

[window]
# title = "Live Browser"
# width = 1024           # 200-7680
# height = 768           # 200-4320
# devtools = false       # inspector in release builds

[watch]
# debounce_ms = 200      # 0-5000, coalesces editor save bursts

[logging]
# level = "info"         # trace, debug, info, warn, error
"##
    .to_string()
}
