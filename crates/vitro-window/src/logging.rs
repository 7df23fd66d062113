//! Tracing bootstrap for embedding hosts
//!
//! Library code only emits `tracing` events; hosts that want them on
//! stderr call [`init`] once at startup.

use tracing_subscriber::EnvFilter;

/// Install a global fmt subscriber filtered by `RUST_LOG`, defaulting
/// to `info`. Calling it twice is harmless.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
