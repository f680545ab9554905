//! # Canonical Serialization — Deterministic Byte Production
//!
//! Defines `CanonicalBytes`, the sole construction path for bytes used in
//! structured-record hashing and signing across the UCT Stack.
//!
//! ## Security Invariant
//!
//! The `CanonicalBytes` newtype has a private inner field. The only way to
//! construct it is through `CanonicalBytes::new()`, which validates the
//! value (float rejection) and serializes it with `serde_jcs` for RFC 8785
//! (JSON Canonicalization Scheme) output: sorted keys, compact separators,
//! deterministic byte sequence.
//!
//! Transaction hashes, predicate addresses, and certificate signatures all
//! reduce to equality of these bytes. Two implementations that disagree on
//! a single canonical byte disagree on every hash-based equality in the
//! protocol, so there must be exactly one way to produce them.
//!
//! ## Rules
//!
//! 1. **Floats are rejected.** Amounts must be strings or integers; float
//!    serialization has edge cases that are not bit-stable across
//!    implementations.
//! 2. **Optional fields are omitted, never null**, at the serde layer
//!    (`skip_serializing_if`) — an absent field and a null field would
//!    otherwise hash differently.
//! 3. **Binary material is lowercase hex.** Digests, keys, signatures, and
//!    masks serialize as hex strings, keeping the canonical form pure JSON.

use serde::Serialize;
use serde_json::Value;

use crate::error::CanonicalizationError;

/// Bytes produced exclusively by RFC 8785 canonicalization.
///
/// # Invariants
///
/// - The only constructor is `CanonicalBytes::new()`.
/// - Object keys are sorted, separators compact, output UTF-8.
/// - No float ever reaches the serializer.
///
/// Enforced by the constructor; the inner `Vec<u8>` is private.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalBytes(Vec<u8>);

impl CanonicalBytes {
    /// Construct canonical bytes from any serializable value.
    ///
    /// This is the ONLY way to construct `CanonicalBytes`. All structured
    /// digest computation in the stack must flow through this constructor.
    ///
    /// # Errors
    ///
    /// Returns `CanonicalizationError::FloatRejected` if the value contains
    /// float numbers, or `CanonicalizationError::SerializationFailed` if
    /// JCS serialization fails.
    pub fn new(obj: &impl Serialize) -> Result<Self, CanonicalizationError> {
        let value = serde_json::to_value(obj)?;
        reject_floats(&value)?;
        let s = serde_jcs::to_string(&value)?;
        Ok(Self(s.into_bytes()))
    }

    /// Access the canonical bytes for digest computation or signing.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the length of the canonical byte sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the canonical byte sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for CanonicalBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Recursively reject float values anywhere in a JSON value tree.
///
/// Integers (representable as i64/u64) pass; every other number is a float
/// and fails. Key sorting and separator layout are serde_jcs concerns.
fn reject_floats(value: &Value) -> Result<(), CanonicalizationError> {
    match value {
        Value::Null | Value::Bool(_) | Value::String(_) => Ok(()),
        Value::Number(n) => {
            if n.is_f64() && !n.is_i64() && !n.is_u64() {
                if let Some(f) = n.as_f64() {
                    return Err(CanonicalizationError::FloatRejected(f));
                }
            }
            Ok(())
        }
        Value::Object(map) => map.values().try_for_each(reject_floats),
        Value::Array(arr) => arr.iter().try_for_each(reject_floats),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_keys_compact_separators() {
        let data = serde_json::json!({"z": 1, "m": 2, "a": 3});
        let cb = CanonicalBytes::new(&data).expect("should canonicalize");
        assert_eq!(cb.as_bytes(), br#"{"a":3,"m":2,"z":1}"#);
    }

    #[test]
    fn test_nested_objects_sorted() {
        let data = serde_json::json!({
            "outer": {"b": 2, "a": 1},
            "list": [3, 2, 1]
        });
        let cb = CanonicalBytes::new(&data).expect("should canonicalize");
        assert_eq!(cb.as_bytes(), br#"{"list":[3,2,1],"outer":{"a":1,"b":2}}"#);
    }

    #[test]
    fn test_float_rejection() {
        let data = serde_json::json!({"amount": 1.5});
        match CanonicalBytes::new(&data) {
            Err(CanonicalizationError::FloatRejected(f)) => assert_eq!(f, 1.5),
            other => panic!("expected FloatRejected, got {other:?}"),
        }
    }

    #[test]
    fn test_deeply_nested_float_rejected() {
        let data = serde_json::json!({"a": {"b": [{"c": 3.14}]}});
        assert!(CanonicalBytes::new(&data).is_err());
    }

    #[test]
    fn test_integers_accepted() {
        let data = serde_json::json!({"amount": 42, "delta": -7});
        let cb = CanonicalBytes::new(&data).expect("integers should pass");
        assert_eq!(cb.as_bytes(), br#"{"amount":42,"delta":-7}"#);
    }

    #[test]
    fn test_null_and_bool_passthrough() {
        let data = serde_json::json!({"flag": true, "gap": null});
        let cb = CanonicalBytes::new(&data).expect("should canonicalize");
        assert_eq!(cb.as_bytes(), br#"{"flag":true,"gap":null}"#);
    }

    #[test]
    fn test_empty_object() {
        let cb = CanonicalBytes::new(&serde_json::json!({})).expect("empty object");
        assert_eq!(cb.as_bytes(), b"{}");
        assert!(!cb.is_empty());
        assert_eq!(cb.len(), 2);
    }

    #[test]
    fn test_unicode_passthrough() {
        let data = serde_json::json!({"name": "\u{00e9}t\u{00e9}"});
        let cb = CanonicalBytes::new(&data).expect("unicode should pass");
        let s = std::str::from_utf8(cb.as_bytes()).unwrap();
        assert!(s.contains('\u{00e9}'));
    }
}
