use log::*;
use serde_json::Value;

/// True if every key in `part` is present in `complete` with a matching value. Arrays must match element-wise.
pub fn json_is_subset_of(part: &str, complete: &str) -> bool {
    let part: Value = serde_json::from_str(part).expect("Invalid JSON");
    let complete: Value = serde_json::from_str(complete).expect("Invalid JSON");
    value_is_subset_of(&part, &complete)
}

pub fn value_is_subset_of(part: &Value, complete: &Value) -> bool {
    match (part, complete) {
        (Value::Null, _) => true,
        (Value::Object(p), _) => p.iter().all(|(key, value)| match complete.get(key) {
            Some(c) => {
                let ok = value_is_subset_of(value, c);
                if !ok {
                    error!("Value mismatch at '{key}': {value} != {c}");
                }
                ok
            },
            None => {
                error!("Key not found: {key}");
                false
            },
        }),
        (Value::Array(p), Value::Array(c)) => {
            if p.len() != c.len() {
                error!("Array length mismatch: {} != {}", p.len(), c.len());
                return false;
            }
            p.iter().zip(c.iter()).all(|(p, c)| value_is_subset_of(p, c))
        },
        (Value::Array(_), _) => {
            error!("Expected an array, got {complete}");
            false
        },
        _ => part == complete,
    }
}

/// Replaces every `{key}` in `template` with its value.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    values.iter().fold(template.to_string(), |acc, (k, v)| acc.replace(&format!("{{{k}}}"), v))
}
