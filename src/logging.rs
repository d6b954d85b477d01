//! Tracing subscriber setup shared by both binaries.

use tracing_subscriber::EnvFilter;

/// Installs a formatted subscriber that honours `RUST_LOG`, defaulting to `info`.
///
/// Calling this more than once is harmless; later calls leave the first subscriber in place.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
