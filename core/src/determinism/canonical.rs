use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{CoreError, CoreResult};

/// Canonical value for fingerprinting: string values trimmed, sequence
/// elements sorted by their encoded form, object keys sorted bytewise.
/// Scalars pass through unchanged. Object keys are identifiers, not data,
/// and are never trimmed.
pub fn canonical_value<T: Serialize>(value: &T) -> CoreResult<Value> {
    let v = serde_json::to_value(value)
        .map_err(|e| CoreError::UnsupportedValue(e.to_string()))?;
    Ok(normalize_value(v))
}

/// Compact UTF-8 encoding of the canonical form. Equal values yield equal
/// bytes regardless of key order, sequence order, or padding in string
/// values. This is the only byte form the fingerprint ever sees.
pub fn to_canonical_bytes<T: Serialize>(value: &T) -> CoreResult<Vec<u8>> {
    let v = canonical_value(value)?;
    let mut out = String::new();
    encode_value(&v, &mut out);
    Ok(out.into_bytes())
}

fn normalize_value(v: Value) -> Value {
    match v {
        Value::Object(map) => {
            let mut sorted: BTreeMap<String, Value> = BTreeMap::new();
            for (k, vv) in map {
                sorted.insert(k, normalize_value(vv));
            }
            let mut out = Map::new();
            for (k, vv) in sorted {
                out.insert(k, vv);
            }
            Value::Object(out)
        }
        Value::Array(items) => {
            let mut keyed: Vec<(String, Value)> = items
                .into_iter()
                .map(|item| {
                    let item = normalize_value(item);
                    let mut key = String::new();
                    encode_value(&item, &mut key);
                    (key, item)
                })
                .collect();
            keyed.sort_by(|a, b| a.0.cmp(&b.0));
            Value::Array(keyed.into_iter().map(|(_, item)| item).collect())
        }
        Value::String(s) => Value::String(s.trim().to_string()),
        other => other,
    }
}

// Compact writer: no insignificant whitespace, objects in stored (sorted)
// key order. Callers must pass normalized values.
fn encode_value(v: &Value, out: &mut String) {
    match v {
        Value::Null => out.push_str("null"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(s) => encode_string(s, out),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                encode_value(item, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            out.push('{');
            for (i, (k, vv)) in map.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                encode_string(k, out);
                out.push(':');
                encode_value(vv, out);
            }
            out.push('}');
        }
    }
}

fn encode_string(s: &str, out: &mut String) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
}
