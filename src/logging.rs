//! Logging init: plain fmt output on stderr, quiet unless PKGVIEW_LOG asks.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the `EnvFilter` directives, e.g. `debug`.
pub const LOG_ENV: &str = "PKGVIEW_LOG";

/// Installs the global subscriber. Called once from main; a second call is a no-op.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    // Logging must never stop the tool from running
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init();
}
