//! Diagnostics tracing for the formatter.
//!
//! Stdout carries the rendered transcript and nothing else. Tracing output goes
//! to stderr and is controlled by `RUST_LOG`, so skipped lines can be inspected
//! without disturbing the transcript.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`. Defaults to `warn` if unset.
/// Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=streamfmt=debug agent --json | streamfmt
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
