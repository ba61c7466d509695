//! Response relay back to the caller.
//!
//! # Responsibilities
//! - Passthrough mode: mirror upstream status, content-type, and body
//! - Extract-text mode: reduce the body to the first candidate's text
//!
//! # Design Decisions
//! - Passthrough is the canonical mode; extract-text is the legacy
//!   surface's behavior and always answers 200, substituting a
//!   placeholder when the candidate path is missing (a documented
//!   data-loss tradeoff of that mode)

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};

use crate::config::RelayMode;
use crate::upstream::{UpstreamBody, UpstreamResult};

/// Substituted when extract-text finds no generated text.
pub const NO_TEXT_PLACEHOLDER: &str = "no response text found";

/// Map an upstream result to the caller's response.
pub fn relay(result: UpstreamResult, mode: RelayMode) -> Response {
    match mode {
        RelayMode::Passthrough => passthrough(result),
        RelayMode::ExtractText => extract_text(&result),
    }
}

/// Upstream status, content-type, and body, verbatim.
fn passthrough(result: UpstreamResult) -> Response {
    let body = match result.body {
        UpstreamBody::Json(value) => value.to_string(),
        UpstreamBody::Text(text) => text,
    };
    (
        result.status,
        [(header::CONTENT_TYPE, result.content_type)],
        body,
    )
        .into_response()
}

/// Legacy mode: `{"response": <text>}` with status 200, always.
fn extract_text(result: &UpstreamResult) -> Response {
    let text = result
        .body
        .as_json()
        .and_then(first_candidate_text)
        .unwrap_or(NO_TEXT_PLACEHOLDER);
    (StatusCode::OK, Json(json!({ "response": text }))).into_response()
}

/// First candidate → content → first part → text.
///
/// Every step tolerates a missing field.
fn first_candidate_text(body: &Value) -> Option<&str> {
    body.get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .get(0)?
        .get("text")?
        .as_str()
}
