//! Inbound payload validation.
//!
//! # Responsibilities
//! - Reject bodies that are not JSON objects
//! - Require `contents` to be present and be an array
//!
//! # Design Decisions
//! - `contents` must specifically be an array, not merely present
//! - Error messages name the offending field; the boundary maps
//!   them to HTTP 400

use serde_json::Value;

use crate::error::GatewayError;

/// Validate the request envelope, returning the `contents` sequence.
pub fn validate_body(body: &Value) -> Result<&[Value], GatewayError> {
    let envelope = body.as_object().ok_or_else(|| {
        GatewayError::Validation("request body must be a JSON object".to_string())
    })?;

    match envelope.get("contents") {
        None => Err(GatewayError::Validation(
            "missing required field `contents`".to_string(),
        )),
        Some(Value::Array(contents)) => Ok(contents),
        Some(_) => Err(GatewayError::Validation(
            "`contents` must be an array of conversation turns".to_string(),
        )),
    }
}
