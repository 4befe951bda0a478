///
/// Global command-line options and the runtime configuration built from them.
///
/// Options only control diagnostics on stderr; stdout is the same at every
/// verbosity.
///

use clap::{ArgAction, Parser};
use tracing::Level;

#[derive(Parser, Debug, Default)]
#[command(name = "crypt")]
#[command(author, version, about = "URL-safe hashing, HMAC, comparison and random tokens", long_about = None)]
pub struct Cli {
    /// Log more on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Disable logging entirely
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Most verbose level to emit, `None` when logging is off.
    pub log_level: Option<Level>,
}

impl Default for Config {
    fn default() -> Self {
        Self { log_level: Some(Level::WARN) }
    }
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        if cli.quiet {
            return Self { log_level: None };
        }
        let level = match cli.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        };
        Self { log_level: Some(level) }
    }
}
