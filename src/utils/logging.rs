use std::io::{self, IsTerminal};

use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter directive (e.g. `debug`)
pub const LOG_ENV: &str = "SEARCH_QUERY_BUILDER_LOG";

/// Default filter for a `-v` count: warnings only, then info, then debug
fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install the stderr log subscriber
///
/// `$SEARCH_QUERY_BUILDER_LOG` takes precedence over the verbosity flag. Calling this
/// twice is harmless: the second subscriber is ignored.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}
