//! Generation-config merging.
//!
//! # Responsibilities
//! - Ensure `generationConfig` exists on the outbound body
//! - Apply deployment-forced overrides at dot-separated paths
//!
//! # Design Decisions
//! - Overrides overwrite caller values unconditionally; that is a
//!   policy decision, not a default-if-absent
//! - Everything the policy does not name passes through unmodified
//! - Intermediate non-object values on an override path are replaced,
//!   since the path cannot be created through them

use serde_json::{Map, Value};

use crate::config::MergePolicy;

/// Apply the merge policy to the outbound request body.
pub fn apply_policy(body: &mut Map<String, Value>, policy: &MergePolicy) {
    let config = body
        .entry("generationConfig".to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    if !config.is_object() {
        *config = Value::Object(Map::new());
    }

    let Value::Object(config) = config else {
        return;
    };

    for forced in &policy.overrides {
        set_path(config, &forced.path, &forced.value);
    }
}

/// Write `value` at a dot-separated path, creating intermediate objects.
fn set_path(root: &mut Map<String, Value>, path: &str, value: &Value) {
    let mut cursor = root;
    let mut segments = path.split('.').peekable();

    while let Some(segment) = segments.next() {
        if segments.peek().is_none() {
            cursor.insert(segment.to_string(), value.clone());
            return;
        }
        let entry = cursor
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if !entry.is_object() {
            *entry = Value::Object(Map::new());
        }
        let Value::Object(next) = entry else {
            return;
        };
        cursor = next;
    }
}
