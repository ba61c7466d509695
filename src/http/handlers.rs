//! Route handlers wiring the request pipeline.
//!
//! # Responsibilities
//! - Decode the inbound body (errors become validation failures with
//!   a JSON envelope, not framework rejections)
//! - Run validate → normalize → merge → dispatch → relay
//! - Record per-request metrics at every exit

use std::time::Instant;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};

use crate::error::GatewayError;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::pipeline;
use crate::relay;
use crate::upstream::UpstreamResult;

/// `POST /models/{model_and_method}`
///
/// The path segment carries the model identifier and action suffix
/// verbatim, e.g. `gemini-pro:generateContent`.
pub async fn generate(
    State(state): State<AppState>,
    Path(model_and_method): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let start = Instant::now();
    let request_id = request_id(&headers);

    tracing::debug!(
        request_id = %request_id,
        model = %model_and_method,
        "handling generation request"
    );

    let response = match run_pipeline(&state, &model_and_method, &body).await {
        Ok(result) => relay::relay(result, state.relay_mode),
        Err(err) => {
            tracing::warn!(request_id = %request_id, error = %err, "request failed");
            err.into_response()
        }
    };

    metrics::record_request("models", response.status().as_u16(), start);
    response
}

/// `POST /gemini-proxy`
///
/// Legacy surface: fixed model from config, accepts either a full
/// generation request or the simplified `{"prompt": "..."}` shape,
/// and always relays in extract-text mode.
pub async fn legacy_proxy(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let start = Instant::now();
    let request_id = request_id(&headers);
    let model_and_method = format!("{}:generateContent", state.default_model);

    tracing::debug!(
        request_id = %request_id,
        model = %model_and_method,
        "handling legacy proxy request"
    );

    let response = match run_legacy(&state, &model_and_method, &body).await {
        Ok(result) => relay::relay(result, crate::config::RelayMode::ExtractText),
        Err(err) => {
            tracing::warn!(request_id = %request_id, error = %err, "legacy request failed");
            err.into_response()
        }
    };

    metrics::record_request("gemini-proxy", response.status().as_u16(), start);
    response
}

/// `GET /health` — liveness probe.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn run_pipeline(
    state: &AppState,
    model_and_method: &str,
    body: &Bytes,
) -> Result<UpstreamResult, GatewayError> {
    let decoded = decode_json(body)?;
    let outbound = pipeline::prepare_request(&decoded, &state.merge_policy)?;
    state.forwarder.dispatch(model_and_method, &outbound).await
}

async fn run_legacy(
    state: &AppState,
    model_and_method: &str,
    body: &Bytes,
) -> Result<UpstreamResult, GatewayError> {
    let decoded = decode_json(body)?;
    let envelope = wrap_prompt(decoded);
    let outbound = pipeline::prepare_request(&envelope, &state.merge_policy)?;
    state.forwarder.dispatch(model_and_method, &outbound).await
}

/// Decode the raw body so malformed JSON gets our error envelope.
fn decode_json(body: &Bytes) -> Result<Value, GatewayError> {
    if body.is_empty() {
        return Err(GatewayError::Validation(
            "request body is empty".to_string(),
        ));
    }
    serde_json::from_slice(body)
        .map_err(|e| GatewayError::Validation(format!("request body is not valid JSON: {e}")))
}

/// Turn the simplified `{"prompt": "..."}` shape into a single user
/// turn; anything else is forwarded as a full generation request.
fn wrap_prompt(body: Value) -> Value {
    if let Some(prompt) = body.get("prompt").and_then(Value::as_str) {
        return json!({
            "contents": [{"role": "user", "parts": [{"text": prompt}]}]
        });
    }
    body
}

fn request_id(headers: &HeaderMap) -> String {
    headers
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string()
}
