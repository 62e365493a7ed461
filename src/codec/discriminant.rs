//! Fast path for unions that carry a tag field naming the active variant.

use serde_json::Value;

use super::CodecError;

/// Maps one tag value to the decoder of its variant.
pub struct Arm<U> {
    pub tag: &'static str,
    pub decode: fn(&Value) -> Result<U, serde_json::Error>,
}

/// Reads `field` from `raw` and runs the decoder registered for its value.
///
/// A single decoder runs; there is no fallback to another arm.
pub fn dispatch<U>(
    union: &'static str,
    field: &'static str,
    raw: &Value,
    arms: &[Arm<U>],
) -> Result<U, CodecError> {
    let Some(tag) = raw.get(field).and_then(Value::as_str) else {
        return Err(CodecError::UnrecognizedShape {
            union,
            payload: raw.clone(),
        });
    };
    let Some(arm) = arms.iter().find(|arm| arm.tag == tag) else {
        return Err(CodecError::UnknownDiscriminant {
            union,
            field,
            value: tag.to_string(),
            payload: raw.clone(),
        });
    };
    (arm.decode)(raw).map_err(|source| CodecError::VariantDecode {
        union,
        variant: arm.tag,
        source,
    })
}

/// Writes the tag `field` into an encoded object payload.
pub fn with_tag(field: &str, tag: &str, mut value: Value) -> Value {
    if let Some(object) = value.as_object_mut() {
        object.insert(field.to_string(), Value::from(tag));
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, PartialEq)]
    enum Shape {
        Circle(f64),
        Square(f64),
    }

    fn circle(raw: &Value) -> Result<Shape, serde_json::Error> {
        f64::deserialize(&raw["radius"]).map(Shape::Circle)
    }

    fn square(raw: &Value) -> Result<Shape, serde_json::Error> {
        f64::deserialize(&raw["side"]).map(Shape::Square)
    }

    const ARMS: &[Arm<Shape>] = &[
        Arm {
            tag: "circle",
            decode: circle,
        },
        Arm {
            tag: "square",
            decode: square,
        },
    ];

    #[test]
    fn dispatch_selects_arm_by_tag() {
        let raw = json!({ "type": "square", "side": 2.0 });
        assert_eq!(dispatch("shape", "type", &raw, ARMS).unwrap(), Shape::Square(2.0));
    }

    #[test]
    fn unknown_tag_is_reported_with_its_value() {
        let raw = json!({ "type": "hexagon" });
        match dispatch("shape", "type", &raw, ARMS) {
            Err(CodecError::UnknownDiscriminant { field, value, .. }) => {
                assert_eq!(field, "type");
                assert_eq!(value, "hexagon");
            }
            other => panic!("expected unknown discriminant, got {other:?}"),
        }
    }

    #[test]
    fn missing_or_non_string_tag_is_unrecognized() {
        for raw in [json!({ "side": 1.0 }), json!({ "type": 3 }), json!("square")] {
            assert!(matches!(
                dispatch("shape", "type", &raw, ARMS),
                Err(CodecError::UnrecognizedShape { .. })
            ));
        }
    }

    #[test]
    fn selected_arm_failure_does_not_backtrack() {
        let raw = json!({ "type": "circle", "side": 1.0 });
        match dispatch("shape", "type", &raw, ARMS) {
            Err(CodecError::VariantDecode { variant, .. }) => assert_eq!(variant, "circle"),
            other => panic!("expected variant decode failure, got {other:?}"),
        }
    }

    #[test]
    fn with_tag_inserts_into_objects_only() {
        assert_eq!(
            with_tag("kind", "full", json!({ "items": [] })),
            json!({ "kind": "full", "items": [] })
        );
        assert_eq!(with_tag("kind", "full", json!([1])), json!([1]));
    }
}
