//! Address-bar shell document.
//!
//! The shell is a static page: a toolbar with a URL input, a Go button and
//! a reload button, above a full-size `<iframe>`. All navigation inside it
//! is client-side; the only parameter is the initial URL.

/// Placeholder replaced by the escaped URL.
const URL_SLOT: &str = "{{url}}";

/// Prefix prepended client-side when a typed address has no scheme.
pub const DEFAULT_SCHEME: &str = "https://";

const SHELL_TEMPLATE: &str = r##"<!DOCTYPE html>
<html style="height:100%; margin:0; padding:0;">
<head>
  <meta charset="utf-8">
  <meta http-equiv="Content-Security-Policy" content="default-src *; script-src * 'unsafe-inline'; style-src * 'unsafe-inline'; img-src * data:;">
  <style>
    body, html { height: 100%; margin: 0; padding: 0; overflow: hidden; font-family: -apple-system, 'Segoe UI', sans-serif; }
    iframe { width: 100%; height: 100%; border: none; display: block; }
    #toolbar {
      display: flex;
      align-items: center;
      gap: 6px;
      padding: 4px 8px;
      background: #1e1e1e;
      border-bottom: 1px solid #333333;
    }
    input {
      flex: 1;
      padding: 3px 6px;
      background: #2d2d2d;
      color: #e6e6e6;
      border: 1px solid #3c3c3c;
      border-radius: 3px;
      font-size: 12px;
    }
    button {
      padding: 3px 10px;
      background: #0e639c;
      color: #ffffff;
      border: none;
      border-radius: 3px;
      cursor: pointer;
      font-size: 12px;
    }
    button:hover { background: #1177bb; }
    #frame-container { height: calc(100% - 34px); }
  </style>
</head>
<body>
  <div id="toolbar">
    <input id="url-input" type="text" value="{{url}}" placeholder="https://..." />
    <button id="go" onclick="goToURL()">Go</button>
    <button id="reload" onclick="reload()">&#8634;</button>
  </div>
  <div id="frame-container">
    <iframe id="frame" src="{{url}}" sandbox="allow-scripts allow-same-origin allow-forms allow-popups"></iframe>
  </div>

  <script>
    const frame = document.getElementById('frame');
    const input = document.getElementById('url-input');

    function goToURL() {
      let url = input.value.trim();
      if (!url.startsWith('http')) url = 'https://' + url;
      frame.src = url;
    }

    function reload() {
      frame.src = frame.src;
    }

    input.addEventListener('keydown', e => {
      if (e.key === 'Enter') goToURL();
    });
  </script>
</body>
</html>
"##;

/// Render the shell with `url` as the address-bar value and frame source.
///
/// The URL is inserted verbatim apart from attribute escaping; scheme
/// normalization is left to the page script.
pub fn render_shell(url: &str) -> String {
    SHELL_TEMPLATE.replace(URL_SLOT, &escape_attr(url))
}

/// Escape a value for a double-quoted HTML attribute.
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}
