//! Ordered shape probing for unions without a discriminant field.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::CodecError;

/// One candidate shape of a union.
pub trait Candidate<U> {
    fn variant(&self) -> &'static str;

    /// Returns the union value when `raw` both decodes as this shape and passes
    /// its structural check. Nothing is produced otherwise.
    fn try_decode(&self, raw: &Value) -> Option<U>;
}

/// A candidate backed by a concrete payload type `T`.
///
/// `accept` sees the raw JSON and the decoded payload. It rejects decodes that
/// succeeded only because `T` is too permissive (no required fields, defaulted
/// collections), which would otherwise shadow every later candidate.
pub struct Shape<T, U> {
    variant: &'static str,
    wrap: fn(T) -> U,
    accept: fn(&Value, &T) -> bool,
}

impl<T, U> Shape<T, U> {
    pub const fn new(
        variant: &'static str,
        wrap: fn(T) -> U,
        accept: fn(&Value, &T) -> bool,
    ) -> Self {
        Self {
            variant,
            wrap,
            accept,
        }
    }
}

impl<T: DeserializeOwned, U> Candidate<U> for Shape<T, U> {
    fn variant(&self) -> &'static str {
        self.variant
    }

    fn try_decode(&self, raw: &Value) -> Option<U> {
        let decoded = T::deserialize(raw).ok()?;
        if (self.accept)(raw, &decoded) {
            Some((self.wrap)(decoded))
        } else {
            None
        }
    }
}

/// Predicate for shapes whose decode alone is conclusive.
pub fn accept_any<T>(_raw: &Value, _decoded: &T) -> bool {
    true
}

/// Predicate for struct shapes. Derived `Deserialize` impls also build a struct
/// from a JSON array of its field values, which is never a wire form here.
pub fn accept_object<T>(raw: &Value, _decoded: &T) -> bool {
    raw.is_object()
}

/// Predicate for list-of-struct shapes, see [`accept_object`].
pub fn accept_object_array<T>(raw: &Value, _decoded: &T) -> bool {
    raw.as_array()
        .is_some_and(|items| items.iter().all(Value::is_object))
}

/// Tries `candidates` in order and returns the first one that validates.
pub fn probe<U>(
    union: &'static str,
    raw: &Value,
    candidates: &[&dyn Candidate<U>],
) -> Result<U, CodecError> {
    candidates
        .iter()
        .find_map(|candidate| candidate.try_decode(raw))
        .ok_or_else(|| CodecError::UnrecognizedShape {
            union,
            payload: raw.clone(),
        })
}
