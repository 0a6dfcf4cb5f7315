//! Host commands read from stdin.
//!
//! One command per line:
//!
//! ```text
//! open <url>     navigate the panel (no argument prints the saved URL)
//! file [path]    show a local HTML file; without a path, pick one
//! reload         re-render the current URL or re-read the file
//! devtools       open the webview inspector
//! help           list commands
//! quit           close the window
//! ```

use std::io::BufRead;
use std::sync::mpsc;

use livebrowser_config::{ConfigStore, DEFAULT_URL, URL_KEY};

use super::core::LiveBrowserApp;

pub(super) const HELP: &str = "\
commands:
  open <url>     navigate to a URL
  file [path]    show a local HTML file (opens a picker without a path)
  reload         reload the current page or file
  devtools       open the inspector
  quit           exit";

/// A parsed host command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCommand {
    Open(Option<String>),
    File(Option<String>),
    Reload,
    Devtools,
    Help,
    Quit,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command: {0} (try `help`)")]
    Unknown(String),

    #[error("`{0}` takes no arguments")]
    UnexpectedArgument(&'static str),
}

impl HostCommand {
    /// Parse one input line. Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };
        let argument = (!rest.is_empty()).then(|| rest.to_string());
        let has_argument = argument.is_some();

        let no_args = |name: &'static str, command: HostCommand| {
            if has_argument {
                Err(CommandError::UnexpectedArgument(name))
            } else {
                Ok(Some(command))
            }
        };

        match verb.to_ascii_lowercase().as_str() {
            "open" | "url" | "go" => Ok(Some(Self::Open(argument))),
            "file" | "load" => Ok(Some(Self::File(argument))),
            "reload" => no_args("reload", Self::Reload),
            "devtools" => no_args("devtools", Self::Devtools),
            "help" | "?" => Ok(Some(Self::Help)),
            "quit" | "exit" => no_args("quit", Self::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// Parse one stdin line, logging rejected input.
fn parse_line(line: &str) -> Option<HostCommand> {
    match HostCommand::parse(line) {
        Ok(command) => command,
        Err(e) => {
            tracing::warn!(line, "{e}");
            None
        }
    }
}

/// Read commands from stdin on a background thread.
///
/// The thread ends at EOF or once the receiver is dropped.
pub(super) fn spawn_stdin_reader() -> mpsc::Receiver<HostCommand> {
    let (tx, rx) = mpsc::channel();
    let spawned = std::thread::Builder::new()
        .name("livebrowser-stdin".into())
        .spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else { break };
                if let Some(command) = parse_line(&line) {
                    if tx.send(command).is_err() {
                        break;
                    }
                }
            }
            tracing::debug!("stdin closed, no more host commands");
        });

    if let Err(e) = spawned {
        tracing::warn!("failed to start stdin command reader: {e}");
    }
    rx
}

impl LiveBrowserApp {
    /// Execute a host command against the panel, logging any failure.
    pub(super) fn dispatch(&mut self, command: HostCommand) {
        tracing::debug!(?command, "dispatching host command");
        if let Err(e) = self.run_command(command) {
            tracing::warn!("command failed: {e}");
        }
        self.sync_save_watch();
    }

    fn run_command(&mut self, command: HostCommand) -> livebrowser_common::Result<()> {
        match command {
            HostCommand::Open(Some(url)) => self.controller.navigate_to_url(&url)?,
            HostCommand::Open(None) => {
                let saved = self.controller.config().get(URL_KEY, DEFAULT_URL);
                println!("current URL: {saved}\nusage: open <url>");
            }
            HostCommand::File(path) => {
                let Some(path) = path.or_else(pick_html_file) else {
                    tracing::debug!("no file selected");
                    return Ok(());
                };
                self.controller.load_local_file(&path)?;
            }
            HostCommand::Reload => self.controller.reload()?,
            HostCommand::Devtools => {
                if let Some(surface) = self.controller.surface() {
                    surface.open_devtools();
                }
            }
            HostCommand::Help => println!("{HELP}"),
            HostCommand::Quit => {
                tracing::info!("quit requested");
                self.should_exit = true;
            }
        }
        Ok(())
    }
}

/// Native file picker limited to HTML files.
fn pick_html_file() -> Option<String> {
    rfd::FileDialog::new()
        .set_title("Open HTML file")
        .add_filter("HTML", &["html", "htm"])
        .pick_file()
        .map(|p| p.to_string_lossy().into_owned())
}
