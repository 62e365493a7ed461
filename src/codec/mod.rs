//! =============================================================================
//! Union Codec
//! =============================================================================
//!
//! Several LSP fields accept more than one JSON shape (an object, a list of
//! objects, a bare scalar, or `null`). This module holds the three strategies
//! used to recover the variant that was sent:
//! * [`probe`] tries an ordered list of candidate shapes,
//! * [`dispatch`] reads a tag field such as `kind` and jumps straight to the
//!   matching decoder,
//! * [`resolve_scalar`] separates a bare number from a bare string.
//!
//! Every concrete union implements [`WireUnion`]; the `serde` impls are derived
//! from it so unions nest inside ordinary records. Nothing here logs or falls
//! back to a default value: the caller decides what a decode failure means.

mod discriminant;
mod probe;
mod scalar;

pub use discriminant::{Arm, dispatch, with_tag};
pub use probe::{Candidate, Shape, accept_any, accept_object, accept_object_array, probe};
pub use scalar::{Scalar, resolve_scalar};

use serde_json::Value;

/// A protocol field whose wire value may take several incompatible shapes.
///
/// A union is a Rust enum, so exactly one variant (or the explicit null
/// variant) is populated at any time. Assigning a new variant replaces the
/// previous one.
pub trait WireUnion: Sized {
    /// Stable catalog name, used in error reports.
    const NAME: &'static str;

    /// Recovers the variant carried by `raw`.
    fn decode(raw: &Value) -> Result<Self, CodecError>;

    /// Re-emits the JSON shape of the populated variant.
    fn encode(&self) -> Result<Value, CodecError>;

    /// Name of the populated variant.
    fn variant(&self) -> &'static str;
}

/// Implements `Serialize`/`Deserialize` for a [`WireUnion`] by routing through
/// its codec.
macro_rules! serde_via_codec {
    ($ty:ty) => {
        impl serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                let value = $crate::codec::WireUnion::encode(self)
                    .map_err(<S::Error as serde::ser::Error>::custom)?;
                serde::Serialize::serialize(&value, serializer)
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw: serde_json::Value = serde::Deserialize::deserialize(deserializer)?;
                <$ty as $crate::codec::WireUnion>::decode(&raw)
                    .map_err(<D::Error as serde::de::Error>::custom)
            }
        }
    };
}

pub(crate) use serde_via_codec;

#[derive(thiserror::Error, Debug)]
pub enum CodecError {
    #[error("{union}: value matches none of the known shapes: {payload}")]
    UnrecognizedShape { union: &'static str, payload: Value },
    #[error("{union}: unknown `{field}` discriminant {value:?}")]
    UnknownDiscriminant {
        union: &'static str,
        field: &'static str,
        value: String,
        payload: Value,
    },
    #[error("{union}: expected a JSON number or string, got {payload}")]
    InvalidScalarUnion { union: &'static str, payload: Value },
    #[error("{union}: malformed `{variant}` variant: {source}")]
    VariantDecode {
        union: &'static str,
        variant: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode union value: {0}")]
    Encode(#[from] serde_json::Error),
}

impl CodecError {
    /// Catalog name of the union that failed, if the failure happened on decode.
    pub fn union(&self) -> Option<&'static str> {
        match self {
            Self::UnrecognizedShape { union, .. }
            | Self::UnknownDiscriminant { union, .. }
            | Self::InvalidScalarUnion { union, .. }
            | Self::VariantDecode { union, .. } => Some(*union),
            Self::Encode(_) => None,
        }
    }

    /// The raw JSON that was rejected, kept for caller diagnostics.
    pub fn payload(&self) -> Option<&Value> {
        match self {
            Self::UnrecognizedShape { payload, .. }
            | Self::UnknownDiscriminant { payload, .. }
            | Self::InvalidScalarUnion { payload, .. } => Some(payload),
            Self::VariantDecode { .. } | Self::Encode(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn error_messages_name_the_union() {
        let err = CodecError::UnknownDiscriminant {
            union: "diagnostic-report",
            field: "kind",
            value: "bogus".to_string(),
            payload: json!({ "kind": "bogus" }),
        };
        assert_eq!(
            err.to_string(),
            "diagnostic-report: unknown `kind` discriminant \"bogus\""
        );
        assert_eq!(err.union(), Some("diagnostic-report"));
        assert_eq!(err.payload(), Some(&json!({ "kind": "bogus" })));
    }

    #[test]
    fn encode_errors_carry_no_payload() {
        let source = serde_json::from_str::<Value>("{").unwrap_err();
        let err = CodecError::from(source);
        assert!(err.union().is_none());
        assert!(err.payload().is_none());
    }
}
