//! Tracing and logging setup shared by anything hosting the back-office core.
//!
//! The handler and the infra adapters emit `tracing` events (substitutions,
//! save failures); this crate turns those into JSON log lines.

use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the process.
///
/// Filtering comes from `RUST_LOG`, defaulting to `info`. Safe to call
/// multiple times; subsequent calls are no-ops.
pub fn init() {
    init_with_filter("info");
}

/// Initialize with an explicit default filter (used when `RUST_LOG` is
/// unset). Test hosts pass their own default here.
pub fn init_with_filter(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
