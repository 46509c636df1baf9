//! Structured logging initialization via `tracing`.

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber for wallet applications.
///
/// Respects `RUST_LOG` for filtering and falls back to `info` when unset.
/// Derivation code logs addresses and timing only, never key material.
///
/// ```no_run
/// swtc_utils::init_tracing();
/// tracing::info!("wallet application starting");
/// ```
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}
