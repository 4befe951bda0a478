///
/// Diagnostic logging.
///
/// A `tracing-subscriber` fmt subscriber on stderr without ANSI colors, so
/// stdout carries nothing but command output.
///

use crate::config::Config;

/// Install the global subscriber. Calling it again is a no-op.
pub fn init(config: &Config) {
    let Some(level) = config.log_level else {
        return;
    };

    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_max_level(level)
        .try_init();
}
