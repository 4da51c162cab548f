//! Canonical JSON bytes for report hashing.
//!
//! All report digests hash the output of [`canonical_json_bytes`], never
//! `serde_json`'s default formatting.
//!
//! # Rules
//!
//! 1. Object keys sorted by byte order, at every depth.
//! 2. Compact: no whitespace between tokens.
//! 3. Numbers must be integers; floats are rejected so digests cannot drift
//!    with float formatting.
//! 4. Strings use `serde_json`'s RFC 8259 escaping.

/// Error type for canonical JSON serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonError {
    /// A JSON number was not an integer.
    NonIntegerNumber { raw: String },
}

impl std::fmt::Display for CanonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonIntegerNumber { raw } => {
                write!(f, "non-integer number in canonical JSON: {raw}")
            }
        }
    }
}

impl std::error::Error for CanonError {}

/// Produce canonical JSON bytes from a `serde_json::Value`.
///
/// # Errors
///
/// Returns [`CanonError::NonIntegerNumber`] if any number is not an `i64`/`u64`.
pub fn canonical_json_bytes(value: &serde_json::Value) -> Result<Vec<u8>, CanonError> {
    let mut out = String::new();
    push_value(&mut out, value)?;
    Ok(out.into_bytes())
}

fn push_value(out: &mut String, value: &serde_json::Value) -> Result<(), CanonError> {
    use serde_json::Value;
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                out.push_str(&i.to_string());
            } else if let Some(u) = n.as_u64() {
                out.push_str(&u.to_string());
            } else {
                return Err(CanonError::NonIntegerNumber { raw: n.to_string() });
            }
        }
        Value::String(s) => push_string(out, s),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                push_value(out, item)?;
            }
            out.push(']');
        }
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));
            out.push('{');
            for (i, (key, item)) in entries.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                push_string(out, key);
                out.push(':');
                push_value(out, item)?;
            }
            out.push('}');
        }
    }
    Ok(())
}

fn push_string(out: &mut String, s: &str) {
    // Serializing a &str cannot fail.
    let quoted = serde_json::Value::String(s.to_string()).to_string();
    out.push_str(&quoted);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keys_sorted_at_every_depth() {
        let v = json!({"moves": {"z": 1, "a": 2}, "algorithm": "bfs"});
        let bytes = canonical_json_bytes(&v).unwrap();
        assert_eq!(bytes, br#"{"algorithm":"bfs","moves":{"a":2,"z":1}}"#);
    }

    #[test]
    fn insertion_order_and_whitespace_do_not_matter() {
        let a: serde_json::Value = serde_json::from_str(r#"{"b": [1, 2], "a": 0}"#).unwrap();
        let b: serde_json::Value = serde_json::from_str("{\n \"a\":0,\"b\":[1,2]}").unwrap();
        assert_eq!(
            canonical_json_bytes(&a).unwrap(),
            canonical_json_bytes(&b).unwrap()
        );
    }

    #[test]
    fn floats_rejected() {
        let err = canonical_json_bytes(&json!({"ms": 1.5})).unwrap_err();
        assert!(matches!(err, CanonError::NonIntegerNumber { .. }));
    }

    #[test]
    fn integers_literals_and_escapes() {
        let v = json!({"n": -3, "big": u64::MAX, "t": true, "x": null, "s": "R'\n\"U\""});
        let text = String::from_utf8(canonical_json_bytes(&v).unwrap()).unwrap();
        assert_eq!(
            text,
            format!(r#"{{"big":{},"n":-3,"s":"R'\n\"U\"","t":true,"x":null}}"#, u64::MAX)
        );
    }

    #[test]
    fn arrays_keep_order() {
        assert_eq!(canonical_json_bytes(&json!(["U", "R'", "F"])).unwrap(), br#"["U","R'","F"]"#);
        assert_eq!(canonical_json_bytes(&json!({})).unwrap(), b"{}");
    }
}
