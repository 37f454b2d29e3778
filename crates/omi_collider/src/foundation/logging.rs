//! Logging utilities and structured logging support
//!
//! The library only emits through the `log` facade; binaries decide whether
//! to install a logger.

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system
///
/// Honors `RUST_LOG` and falls back to `info` when it is unset.
pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}
