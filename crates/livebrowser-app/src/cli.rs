use clap::Parser;

/// Live Browser: a web page or local HTML file in a window, reloaded on save.
#[derive(Parser, Debug)]
#[command(name = "livebrowser", version, about)]
pub struct Args {
    /// Navigate to this URL once the panel is ready.
    #[arg(short = 'u', long, conflicts_with = "file")]
    pub url: Option<String>,

    /// Show this local HTML file and reload it whenever it is saved.
    #[arg(short = 'f', long)]
    pub file: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
