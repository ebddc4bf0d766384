//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Installs the global tracing subscriber.
///
/// Logs go to stderr so they never interleave with the rendered form on
/// stdout. `config.log_level` uses `RUST_LOG` syntax; an unparsable filter
/// falls back to `warn`.
///
/// # Panics
///
/// Panics if a global subscriber is already installed.
pub fn init(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
