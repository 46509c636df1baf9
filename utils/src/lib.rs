//! Shared utilities for the SWTC key derivation workspace.

pub mod logging;

pub use logging::init_tracing;
