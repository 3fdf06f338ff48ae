//! Tracing initialization (fmt subscriber + env filter).
//!
//! Log verbosity is controlled with the standard `RUST_LOG` environment
//! variable; the default level is `info`. Per-request logging (method, path,
//! status, latency) is emitted by the `TraceLayer` installed in
//! [`crate::build_router`], so handlers only log their own failures.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initialize the global tracing subscriber.
///
/// Fails if a subscriber has already been installed for this process.
pub fn init_telemetry() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;

    Ok(())
}
