//! Subscriber setup for embedding hosts and tests.
//!
//! The engine only emits `tracing` events. Hosts that already install their
//! own subscriber should skip [`init`] entirely.

use tracing_subscriber::{EnvFilter, fmt};

use crate::error::{Result, RoutingError};

/// Directive used when `RUST_LOG` is unset: routing and batching summaries.
pub const DEFAULT_DIRECTIVE: &str = "bakery_routing=info";

/// Install a global fmt subscriber filtered by `RUST_LOG`, or by
/// `default_directive` when the variable is unset.
///
/// Fails instead of panicking when the directive does not parse or another
/// subscriber is already installed.
pub fn init(default_directive: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_directive).map_err(RoutingError::logging)?,
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(RoutingError::logging)
}

/// Per-candidate debug output routed through the test harness.
///
/// Repeat calls are ignored.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("bakery_routing=debug"))
        .with_test_writer()
        .try_init();
}
