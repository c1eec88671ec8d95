//! Canonical JSON bytes: the single serialization-for-hashing implementation.
//!
//! # Canonicalization rules
//!
//! 1. Object keys are sorted lexicographically (byte order).
//! 2. Compact form, no extraneous whitespace.
//! 3. Numbers must be integers; floats are rejected so digests never depend
//!    on float formatting.

/// Error type for canonical JSON serialization.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CanonError {
    /// A JSON number was not an integer.
    #[error("non-integer number in canonical JSON: {raw}")]
    NonIntegerNumber { raw: String },
    /// The serializer itself failed.
    #[error("canonical JSON serialization failed: {detail}")]
    Serialize { detail: String },
}

/// Produce canonical JSON bytes from a `serde_json::Value`.
///
/// `serde_json::Map` is ordered by key (no `preserve_order` feature), so the
/// compact writer already emits sorted keys once floats have been ruled out.
///
/// # Errors
///
/// Returns [`CanonError::NonIntegerNumber`] if any number is not an `i64` or `u64`.
pub fn canonical_json_bytes(value: &serde_json::Value) -> Result<Vec<u8>, CanonError> {
    reject_floats(value)?;
    serde_json::to_vec(value).map_err(|e| CanonError::Serialize {
        detail: e.to_string(),
    })
}

fn reject_floats(value: &serde_json::Value) -> Result<(), CanonError> {
    match value {
        serde_json::Value::Number(n) if !(n.is_i64() || n.is_u64()) => {
            Err(CanonError::NonIntegerNumber { raw: n.to_string() })
        }
        serde_json::Value::Array(items) => items.iter().try_for_each(reject_floats),
        serde_json::Value::Object(map) => map.values().try_for_each(reject_floats),
        _ => Ok(()),
    }
}
