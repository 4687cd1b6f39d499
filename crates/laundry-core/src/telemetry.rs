//! # Telemetry
//!
//! Every cart mutation in this crate emits a `tracing` event. Nothing is
//! printed until the host installs a subscriber, which is what
//! [`init_tracing`] is for.
//!
//! ## Log Levels
//! - `RUST_LOG=debug` - Show every cart mutation
//! - `RUST_LOG=laundry_core=trace` - Trace this crate only
//! - Default: `info,laundry_core=debug`

use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info,laundry_core=debug";

/// Installs a global fmt subscriber filtered by `RUST_LOG`.
///
/// Returns an error instead of panicking if a global subscriber is already
/// set, so hosts and tests can call it more than once.
pub fn init_tracing() -> Result<(), TryInitError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .finish()
        .try_init()
}
