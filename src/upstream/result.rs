//! Snapshot of a single upstream HTTP exchange.

use axum::http::StatusCode;
use serde_json::Value;

/// The result of one provider call. Produced once, never mutated.
#[derive(Debug, Clone)]
pub struct UpstreamResult {
    /// Upstream HTTP status.
    pub status: StatusCode,

    /// Upstream `Content-Type` header value.
    pub content_type: String,

    /// Response body, parsed when possible.
    pub body: UpstreamBody,
}

/// An upstream body is JSON when it parses, raw text otherwise.
#[derive(Debug, Clone)]
pub enum UpstreamBody {
    Json(Value),
    Text(String),
}

impl UpstreamBody {
    /// The parsed JSON value, if this body is JSON.
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            UpstreamBody::Json(value) => Some(value),
            UpstreamBody::Text(_) => None,
        }
    }
}
