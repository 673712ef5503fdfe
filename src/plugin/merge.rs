//! Deep merge of JSON option records.
//!
//! Precedence rules:
//! - objects merge key by key, recursively
//! - arrays concatenate, base entries first
//! - anything else: the overlay replaces the base
//!
//! A `null` overlay counts as a value and replaces the base. Keys keep the
//! base order, new keys are appended.

use serde_json::{Map, Value};

/// Merge `overlay` on top of `base`.
pub fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(base), Value::Object(overlay)) => Value::Object(merge_maps(base, overlay)),
        (Value::Array(mut base), Value::Array(overlay)) => {
            base.extend(overlay);
            Value::Array(base)
        }
        (_, overlay) => overlay,
    }
}

fn merge_maps(mut base: Map<String, Value>, overlay: Map<String, Value>) -> Map<String, Value> {
    for (key, value) in overlay {
        match base.get_mut(&key) {
            Some(existing) => {
                let current = existing.take();
                *existing = deep_merge(current, value);
            }
            None => {
                base.insert(key, value);
            }
        }
    }
    base
}
