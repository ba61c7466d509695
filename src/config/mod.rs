//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → environment overlay (GEMINI_API_KEY)
//!     → GatewayConfig (immutable)
//!     → shared via Arc to all subsystems
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow a zero-config start
//! - The provider API key comes only from the environment, never
//!   from the config file

pub mod loader;
pub mod schema;

pub use schema::ConfigOverride;
pub use schema::GatewayConfig;
pub use schema::ListenerConfig;
pub use schema::MergePolicy;
pub use schema::ObservabilityConfig;
pub use schema::RelayConfig;
pub use schema::RelayMode;
pub use schema::UpstreamConfig;
