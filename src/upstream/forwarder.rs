//! Outbound dispatch to the generative-language provider.
//!
//! # Responsibilities
//! - Build the target endpoint from the URL template and credential
//! - Issue a single JSON POST and snapshot the response
//! - Classify transport-level failures
//!
//! # Design Decisions
//! - Missing credential fails before any network I/O
//! - Every HTTP response, 2xx or not, becomes an `UpstreamResult`;
//!   only network errors and timeouts are `Upstream` failures
//! - Error messages are stripped of the request URL, which carries
//!   the credential as a query parameter

use std::time::Duration;

use axum::http::StatusCode;
use serde_json::Value;
use url::Url;

use crate::config::UpstreamConfig;
use crate::error::GatewayError;
use crate::upstream::result::{UpstreamBody, UpstreamResult};

/// Client for the provider's `generateContent`-family endpoints.
#[derive(Debug, Clone)]
pub struct Forwarder {
    base_url: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl Forwarder {
    /// Build a forwarder from upstream configuration.
    pub fn new(config: &UpstreamConfig) -> Result<Self, GatewayError> {
        Url::parse(&config.base_url).map_err(|e| {
            GatewayError::Configuration(format!(
                "invalid upstream base URL `{}`: {}",
                config.base_url, e
            ))
        })?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| GatewayError::Internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            client,
        })
    }

    /// Dispatch the outbound body to `{base}/v1beta/models/{model}?key=...`.
    ///
    /// `model_and_method` is the inbound path segment taken verbatim,
    /// e.g. `gemini-pro:generateContent`.
    pub async fn dispatch(
        &self,
        model_and_method: &str,
        body: &Value,
    ) -> Result<UpstreamResult, GatewayError> {
        let key = self.credential()?;
        let target = self.target_url(model_and_method, key);

        tracing::debug!(
            model = %model_and_method,
            key_prefix = %redacted_prefix(key),
            "dispatching upstream request"
        );

        let response = self
            .client
            .post(&target)
            .json(body)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = StatusCode::from_u16(response.status().as_u16())
            .unwrap_or(StatusCode::BAD_GATEWAY);
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("application/octet-stream")
            .to_string();

        let text = match response.text().await {
            Ok(text) => text,
            // Headers already arrived; keep what the provider told us.
            Err(err) => {
                let err = err.without_url();
                return Err(GatewayError::Upstream {
                    message: format!("failed to read upstream body: {err}"),
                    details: Some(serde_json::json!({
                        "status": status.as_u16(),
                        "contentType": content_type,
                    })),
                });
            }
        };
        let body = match serde_json::from_str::<Value>(&text) {
            Ok(value) => UpstreamBody::Json(value),
            Err(_) => UpstreamBody::Text(text),
        };

        tracing::debug!(status = %status, content_type = %content_type, "upstream responded");

        Ok(UpstreamResult {
            status,
            content_type,
            body,
        })
    }

    /// The credential, or a configuration error before any I/O.
    fn credential(&self) -> Result<&str, GatewayError> {
        self.api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                GatewayError::Configuration("provider API key is not set".to_string())
            })
    }

    /// Substitute the model identifier and credential into the URL template.
    fn target_url(&self, model_and_method: &str, key: &str) -> String {
        format!(
            "{}/v1beta/models/{}?key={}",
            self.base_url, model_and_method, key
        )
    }
}

/// Map a reqwest failure to the gateway taxonomy.
fn classify_transport_error(err: reqwest::Error) -> GatewayError {
    // The URL embeds the credential; never let it reach a log or caller.
    let err = err.without_url();
    let message = if err.is_timeout() {
        format!("upstream request timed out: {err}")
    } else {
        err.to_string()
    };
    GatewayError::Upstream {
        message,
        details: None,
    }
}

/// First few characters of the key, for diagnostics only.
fn redacted_prefix(key: &str) -> String {
    let prefix: String = key.chars().take(5).collect();
    format!("{prefix}...")
}
