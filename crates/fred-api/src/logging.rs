//! Process-wide log sink.
//!
//! Lines look like `2024-01-15T12:00:00.000000Z ERROR Error fetching data ...`
//! and go to stderr. `RUST_LOG` overrides the default `info` filter.

use tracing_subscriber::{EnvFilter, fmt};

/// Install the global subscriber.
///
/// Safe to call more than once; only the first call takes effect.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(false)
        .try_init();
}
