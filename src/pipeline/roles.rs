//! Conversational-turn role normalization.
//!
//! # Responsibilities
//! - Canonicalize the two meaningful role tags to lowercase
//!   (`USER`/`User` → `user`, `MODEL`/`Model` → `model`)
//! - Leave unrecognized roles and role-less turns untouched
//! - Drop non-object entries with a diagnostic, never a rejection
//!
//! # Design Decisions
//! - Produces a new sequence; the input is never mutated
//! - Idempotent: canonical output maps to itself

use serde_json::Value;

/// Canonical role tags the provider understands.
const ROLE_USER: &str = "user";
const ROLE_MODEL: &str = "model";

/// Normalize role tags across a `contents` sequence.
///
/// Order is preserved; non-object entries are dropped with a warning.
pub fn normalize_roles(contents: &[Value]) -> Vec<Value> {
    contents
        .iter()
        .filter_map(|entry| match entry {
            Value::Object(turn) => {
                let mut turn = turn.clone();
                if let Some(Value::String(role)) = turn.get("role") {
                    if let Some(canonical) = canonical_role(role) {
                        turn.insert("role".to_string(), Value::String(canonical.to_string()));
                    }
                }
                Some(Value::Object(turn))
            }
            other => {
                tracing::warn!(entry = %other, "dropping non-object entry in `contents`");
                None
            }
        })
        .collect()
}

/// The canonical form of a role tag, if it differs from the input.
fn canonical_role(role: &str) -> Option<&'static str> {
    if role != ROLE_USER && role.eq_ignore_ascii_case(ROLE_USER) {
        Some(ROLE_USER)
    } else if role != ROLE_MODEL && role.eq_ignore_ascii_case(ROLE_MODEL) {
        Some(ROLE_MODEL)
    } else {
        None
    }
}
