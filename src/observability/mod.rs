//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via `tracing`; the subscriber is installed
//!   in `main` with an `EnvFilter`
//! - Metrics are cheap (atomic increments) and exposed on a separate
//!   Prometheus scrape address
//! - The request ID flows through all log events

pub mod metrics;
