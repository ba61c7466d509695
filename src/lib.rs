//! Gemini Gateway Library

pub mod config;
pub mod error;
pub mod http;
pub mod observability;
pub mod pipeline;
pub mod relay;
pub mod upstream;

pub use config::GatewayConfig;
pub use error::GatewayError;
pub use http::HttpServer;
