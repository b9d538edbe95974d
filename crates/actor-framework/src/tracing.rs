//! # Observability & Tracing
//!
//! [`setup_tracing`] initialises structured logging with the `tracing` crate for every
//! process built on the framework.
//!
//! The output uses the compact format without module targets: actors already tag their
//! events with an `entity_type` field, so log lines stay short.
//!
//! ```bash
//! RUST_LOG=info cargo run     # lifecycle + one line per mutation
//! RUST_LOG=debug cargo run    # full request payloads
//! ```
//!
//! With `RUST_LOG=info` a create followed by an advance looks like:
//!
//! ```text
//! INFO Actor started entity_type="Order"
//! INFO Created entity_type="Order" id=1b0c... size=9
//! INFO Action ok entity_type="Order" id=1b0c...
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_filter` (e.g. `"my_app=info"`) is used.
/// Calling it a second time is a no-op, so tests can call it freely.
pub fn setup_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}
