//! Request normalization pipeline.
//!
//! # Data Flow
//! ```text
//! decoded JSON body
//!     → validate.rs (envelope shape: object + `contents` array)
//!     → roles.rs (canonicalize turn role tags)
//!     → merge.rs (ensure generationConfig, apply forced overrides)
//!     → outbound body (new value, input left untouched)
//! ```
//!
//! # Design Decisions
//! - Stages are pure functions over `serde_json::Value`; the payload
//!   is an open mapping with opaque content parts, so no fixed struct
//! - The pipeline builds a new outbound value instead of mutating the
//!   validated input, so the two never alias

pub mod merge;
pub mod roles;
pub mod validate;

use serde_json::Value;

use crate::config::MergePolicy;
use crate::error::GatewayError;

/// Run the full pipeline over a decoded request body.
///
/// Returns the outbound body ready for upstream dispatch.
pub fn prepare_request(body: &Value, policy: &MergePolicy) -> Result<Value, GatewayError> {
    let contents = validate::validate_body(body)?;
    let normalized = roles::normalize_roles(contents);

    let mut outbound = body
        .as_object()
        .cloned()
        .ok_or_else(|| GatewayError::Internal("validated body was not an object".to_string()))?;
    outbound.insert("contents".to_string(), Value::Array(normalized));
    merge::apply_policy(&mut outbound, policy);

    Ok(Value::Object(outbound))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigOverride;
    use serde_json::json;

    fn budget_policy() -> MergePolicy {
        MergePolicy {
            overrides: vec![ConfigOverride {
                path: "thinkingConfig.thinkingBudget".to_string(),
                value: json!(0),
            }],
        }
    }

    #[test]
    fn test_full_pipeline() {
        let body = json!({
            "contents": [
                {"role": "USER", "parts": [{"text": "hi"}]},
                {"role": "MODEL", "parts": [{"text": "hello"}]}
            ],
            "safetySettings": [{"category": "HARM_CATEGORY_HARASSMENT"}]
        });

        let outbound = prepare_request(&body, &budget_policy()).unwrap();

        assert_eq!(outbound["contents"][0]["role"], "user");
        assert_eq!(outbound["contents"][1]["role"], "model");
        assert_eq!(
            outbound["generationConfig"]["thinkingConfig"]["thinkingBudget"],
            json!(0)
        );
        // Opaque passthrough fields survive.
        assert_eq!(
            outbound["safetySettings"],
            json!([{"category": "HARM_CATEGORY_HARASSMENT"}])
        );
        // The input body is not aliased by the outbound value.
        assert_eq!(body["contents"][0]["role"], "USER");
    }

    #[test]
    fn test_pipeline_rejects_missing_contents() {
        let err = prepare_request(&json!({}), &MergePolicy::default()).unwrap_err();
        assert!(matches!(err, GatewayError::Validation(_)));
    }
}
