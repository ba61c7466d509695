//! Upstream provider dispatch subsystem.
//!
//! # Data Flow
//! ```text
//! outbound body
//!     → forwarder.rs (URL template + credential, single POST)
//!     → result.rs (status/content-type/body snapshot)
//!     → relay (maps the snapshot back to the caller)
//! ```
//!
//! # Design Decisions
//! - The credential and base URL are injected at construction, so
//!   tests run against a fake secret and a local upstream
//! - One attempt per request; a failed call is terminal

pub mod forwarder;
pub mod result;

pub use forwarder::Forwarder;
pub use result::{UpstreamBody, UpstreamResult};
