//! Observability infrastructure
//!
//! Services and adapters emit `tracing` events with structured fields; this
//! module installs the subscriber that renders them.

pub mod logging;

pub use logging::{build_filter, init_logging};
