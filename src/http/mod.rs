//! HTTP surface of the gateway.
//!
//! # Data Flow
//! ```text
//! inbound POST
//!     → server.rs (Axum setup, middleware layers)
//!     → handlers.rs (decode body, run pipeline, dispatch upstream)
//!     → relay (map upstream result back to the caller)
//! ```

pub mod handlers;
pub mod server;

pub use server::{AppState, HttpServer};
