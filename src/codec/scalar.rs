//! Bare number vs. bare string resolution.

use serde_json::Value;

use super::CodecError;

/// A scalar union member borrowed from the raw JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scalar<'a> {
    Number(i32),
    String(&'a str),
}

/// Interprets `raw` as a 32-bit integer first, then as a string.
///
/// Fractional numbers and integers outside the `i32` range are not numbers for
/// this purpose, and since they are not strings either the value is rejected.
pub fn resolve_scalar<'a>(union: &'static str, raw: &'a Value) -> Result<Scalar<'a>, CodecError> {
    if let Some(number) = raw.as_i64().and_then(|n| i32::try_from(n).ok()) {
        return Ok(Scalar::Number(number));
    }
    if let Some(text) = raw.as_str() {
        return Ok(Scalar::String(text));
    }
    Err(CodecError::InvalidScalarUnion {
        union,
        payload: raw.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numbers_and_strings_resolve() {
        let zero = json!(0);
        assert_eq!(resolve_scalar("t", &zero).unwrap(), Scalar::Number(0));
        let negative = json!(-7);
        assert_eq!(resolve_scalar("t", &negative).unwrap(), Scalar::Number(-7));
        let numeric_text = json!("42");
        assert_eq!(resolve_scalar("t", &numeric_text).unwrap(), Scalar::String("42"));
        let empty = json!("");
        assert_eq!(resolve_scalar("t", &empty).unwrap(), Scalar::String(""));
    }

    #[test]
    fn non_scalars_and_out_of_range_numbers_fail() {
        for raw in [
            json!(1.5),
            json!(i64::from(i32::MAX) + 1),
            json!(null),
            json!(true),
            json!({ "token": 1 }),
        ] {
            assert!(matches!(
                resolve_scalar("t", &raw),
                Err(CodecError::InvalidScalarUnion { .. })
            ));
        }
    }
}
