//! Progress logging for generator runs.
//!
//! Every pipeline step reports through `tracing`; this module wires those
//! events to stderr. Generated files never depend on the log level.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`. Defaults to `info` so a plain run shows each converted icon.
///
/// # Example
/// ```bash
/// RUST_LOG=generator=debug cargo run -p generator -- generate
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
