//! Logging setup
//!
//! unum is a short-lived launcher: stdout belongs to the user-facing
//! output and, after the exec hand-off, both streams belong to claude.
//! Diagnostics therefore go to stderr, default to `warn`, and are raised
//! via `RUST_LOG` (e.g. `RUST_LOG=unum=debug`).

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the logging system. Safe to call more than once; only the
/// first call installs a subscriber.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .try_init()
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
        tracing::debug!("still alive");
    }
}
