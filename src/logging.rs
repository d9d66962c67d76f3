//! Log output for programs embedding this crate.
//!
//! The crate itself only emits `tracing` events. Hosts that don't install a
//! subscriber of their own can call [`init`].

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Build the filter used by [`init`].
///
/// Log level is controlled by:
/// 1. `debug` set: `pip_helpers=debug`
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is `pip_helpers=info`
pub fn env_filter(debug: bool) -> EnvFilter {
    if debug {
        EnvFilter::new("pip_helpers=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pip_helpers=info"))
    }
}

/// Install a global tracing subscriber.
///
/// Returns `false` if a subscriber was already installed, which is left in
/// place.
pub fn init(debug: bool) -> bool {
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(env_filter(debug))
        .try_init()
        .is_ok()
}
