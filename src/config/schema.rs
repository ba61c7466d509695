//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the gateway.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Root configuration for the gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Upstream provider settings.
    pub upstream: UpstreamConfig,

    /// Response relay settings.
    pub relay: RelayConfig,

    /// Generation-config merge policy.
    pub merge: MergePolicy,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Inbound request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            request_timeout_secs: 60,
        }
    }
}

/// Upstream provider configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL of the generative-language provider.
    pub base_url: String,

    /// Model used by the legacy `/gemini-proxy` surface.
    pub default_model: String,

    /// Outbound request timeout in seconds.
    pub request_timeout_secs: u64,

    /// Provider API key. Never read from the config file; the loader
    /// fills this from the `GEMINI_API_KEY` environment variable.
    #[serde(skip)]
    pub api_key: Option<String>,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            default_model: "gemini-pro".to_string(),
            request_timeout_secs: 30,
            api_key: None,
        }
    }
}

/// Response relay configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RelayConfig {
    /// Relay mode for the `/models/{model}` surface.
    pub mode: RelayMode,
}

/// How the upstream response is mapped back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RelayMode {
    /// Mirror upstream status, content-type, and body verbatim.
    #[default]
    Passthrough,

    /// Legacy mode: always 200, body reduced to `{"response": <text>}`.
    ExtractText,
}

/// Generation-config merge policy.
///
/// Overrides are applied unconditionally, even over caller-supplied
/// values. The default policy is empty; forcing a parameter (e.g. a
/// zero thinking budget) is an explicit deployment decision.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct MergePolicy {
    /// Forced fields under `generationConfig`, applied in order.
    pub overrides: Vec<ConfigOverride>,
}

/// A single forced field in the outgoing `generationConfig`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConfigOverride {
    /// Dot-separated path under `generationConfig`,
    /// e.g. "thinkingConfig.thinkingBudget".
    pub path: String,

    /// Value written at the path.
    pub value: Value,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: true,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
