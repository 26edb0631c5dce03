//! Deterministic JSON output.
//!
//! Used for the minified document form so two equal documents always produce
//! the same bytes:
//! - object keys are sorted lexicographically, at every depth
//! - arrays preserve order
//! - no insignificant whitespace

use serde::Serialize;
use serde_json::{Map, Value};

/// Convert a serializable value to canonical JSON bytes.
pub fn to_canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let canon = canonicalize_value(serde_json::to_value(value)?);
    serde_json::to_vec(&canon)
}

/// Convert a serializable value to a canonical JSON string.
pub fn to_canonical_json_string<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let canon = canonicalize_value(serde_json::to_value(value)?);
    serde_json::to_string(&canon)
}

fn canonicalize_value(v: Value) -> Value {
    match v {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, canonicalize_value(v)))
                    .collect::<Map<String, Value>>(),
            )
        }
        Value::Array(arr) => Value::Array(arr.into_iter().map(canonicalize_value).collect()),
        other => other,
    }
}
