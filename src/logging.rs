//! Tracing setup for hosts that embed the crate.
//!
//! The library itself only emits through the `tracing` macros; installing a
//! subscriber is the host's call. This helper wires up the usual one:
//! env-filtered, human-readable, `RUST_LOG` respected.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset: our own crate at debug, the
/// rest of the world at warn.
const DEFAULT_FILTER: &str = "warn,showboard=debug";

/// Install the global tracing subscriber. Safe to call more than once;
/// later calls lose the race quietly and keep the first subscriber.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
