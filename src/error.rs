//! Error taxonomy for the gateway.
//!
//! # Responsibilities
//! - Classify failures into the four caller-visible categories
//! - Map each category to an HTTP status code
//! - Render every error as a JSON envelope (`error` + optional `details`)
//!
//! # Design Decisions
//! - Validation and configuration errors both surface as 400 (the
//!   provider treats a missing credential as a bad request)
//! - Upstream network failures surface as 502 with best-effort detail
//! - The provider API key never appears in an error message

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use thiserror::Error;

/// Failure categories for a single gateway request.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Malformed or incomplete request body. Caller fault.
    #[error("invalid request: {0}")]
    Validation(String),

    /// Server-side misconfiguration, e.g. a missing provider credential.
    #[error("server configuration error: {0}")]
    Configuration(String),

    /// Network-level failure or timeout while talking to the provider.
    #[error("upstream request failed: {message}")]
    Upstream {
        message: String,
        details: Option<Value>,
    },

    /// Any unexpected failure during processing.
    #[error("internal error: {0}")]
    Internal(String),
}

impl GatewayError {
    /// The HTTP status this error maps to at the request boundary.
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::Validation(_) => StatusCode::BAD_REQUEST,
            GatewayError::Configuration(_) => StatusCode::BAD_REQUEST,
            GatewayError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            GatewayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status();
        let mut envelope = json!({ "error": self.to_string() });
        if let GatewayError::Upstream {
            details: Some(details),
            ..
        } = &self
        {
            envelope["details"] = details.clone();
        }
        (status, Json(envelope)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            GatewayError::Validation("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            GatewayError::Configuration("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            GatewayError::Upstream {
                message: "x".into(),
                details: None
            }
            .status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            GatewayError::Internal("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_upstream_details_embedded_in_envelope() {
        let err = GatewayError::Upstream {
            message: "connection refused".into(),
            details: Some(json!({"error": "boom"})),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
