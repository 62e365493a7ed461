//! =============================================================================
//! textDocument/definition result
//! =============================================================================
//!
//! `Location | Location[] | LocationLink[] | null`. The two array forms are
//! told apart by their field names: locations carry `uri`, links carry
//! `targetUri`. An empty array carries neither and resolves to the location
//! list, the first array candidate.

use lsp_types::{Location, LocationLink};
use serde_json::Value;

use crate::codec::{
    Candidate, CodecError, Shape, WireUnion, accept_any, accept_object, accept_object_array, probe,
    serde_via_codec,
};

#[derive(Debug, Clone, PartialEq)]
pub enum DefinitionResponse {
    Location(Location),
    Locations(Vec<Location>),
    Links(Vec<LocationLink>),
    Null,
}

serde_via_codec!(DefinitionResponse);

fn has_uri(raw: &Value, location: &Location) -> bool {
    accept_object(raw, location) && !location.uri.as_str().is_empty()
}

fn all_have_uri(raw: &Value, locations: &Vec<Location>) -> bool {
    accept_object_array(raw, locations)
        && locations
            .iter()
            .all(|location| !location.uri.as_str().is_empty())
}

fn all_have_target_uri(raw: &Value, links: &Vec<LocationLink>) -> bool {
    accept_object_array(raw, links)
        && links
            .iter()
            .all(|link| !link.target_uri.as_str().is_empty())
}

fn null(_: ()) -> DefinitionResponse {
    DefinitionResponse::Null
}

const SHAPES: &[&dyn Candidate<DefinitionResponse>] = &[
    &Shape::new("location", DefinitionResponse::Location, has_uri),
    &Shape::new("locations", DefinitionResponse::Locations, all_have_uri),
    &Shape::new("links", DefinitionResponse::Links, all_have_target_uri),
    &Shape::new("null", null, accept_any::<()>),
];

impl WireUnion for DefinitionResponse {
    const NAME: &'static str = "definition-result";

    fn decode(raw: &Value) -> Result<Self, CodecError> {
        probe(Self::NAME, raw, SHAPES)
    }

    fn encode(&self) -> Result<Value, CodecError> {
        Ok(match self {
            Self::Location(location) => serde_json::to_value(location)?,
            Self::Locations(locations) => serde_json::to_value(locations)?,
            Self::Links(links) => serde_json::to_value(links)?,
            Self::Null => Value::Null,
        })
    }

    fn variant(&self) -> &'static str {
        match self {
            Self::Location(_) => "location",
            Self::Locations(_) => "locations",
            Self::Links(_) => "links",
            Self::Null => "null",
        }
    }
}

impl From<Location> for DefinitionResponse {
    fn from(location: Location) -> Self {
        Self::Location(location)
    }
}

impl From<Vec<Location>> for DefinitionResponse {
    fn from(locations: Vec<Location>) -> Self {
        Self::Locations(locations)
    }
}

impl From<Vec<LocationLink>> for DefinitionResponse {
    fn from(links: Vec<LocationLink>) -> Self {
        Self::Links(links)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use lsp_types::{Position, Range, Uri};
    use serde_json::json;

    fn range(line: u32) -> Range {
        Range::new(Position::new(line, 0), Position::new(line, 5))
    }

    fn location(path: &str) -> Location {
        Location::new(Uri::from_str(path).unwrap(), range(2))
    }

    fn link(path: &str) -> LocationLink {
        LocationLink {
            origin_selection_range: None,
            target_uri: Uri::from_str(path).unwrap(),
            target_range: range(1),
            target_selection_range: range(1),
        }
    }

    fn range_json(line: u32) -> Value {
        json!({
            "start": { "line": line, "character": 0 },
            "end": { "line": line, "character": 5 }
        })
    }

    #[test]
    fn single_object_with_uri_is_a_location() {
        let raw = json!({ "uri": "file:///workspace/lib.rs", "range": range_json(2) });
        assert_eq!(
            DefinitionResponse::decode(&raw).unwrap(),
            DefinitionResponse::Location(location("file:///workspace/lib.rs"))
        );
    }

    #[test]
    fn target_uri_array_is_a_link_list() {
        let raw = json!([
            {
                "targetUri": "file:///workspace/a.rs",
                "targetRange": range_json(1),
                "targetSelectionRange": range_json(1)
            },
            {
                "targetUri": "file:///workspace/b.rs",
                "targetRange": range_json(1),
                "targetSelectionRange": range_json(1)
            }
        ]);
        let decoded = DefinitionResponse::decode(&raw).unwrap();
        assert_eq!(decoded.variant(), "links");
        assert_eq!(
            decoded,
            DefinitionResponse::Links(vec![
                link("file:///workspace/a.rs"),
                link("file:///workspace/b.rs"),
            ])
        );
    }

    #[test]
    fn uri_array_is_a_location_list() {
        let raw = json!([{ "uri": "file:///workspace/lib.rs", "range": range_json(2) }]);
        assert_eq!(
            DefinitionResponse::decode(&raw).unwrap(),
            DefinitionResponse::Locations(vec![location("file:///workspace/lib.rs")])
        );
    }

    #[test]
    fn empty_array_resolves_to_location_list() {
        assert_eq!(
            DefinitionResponse::decode(&json!([])).unwrap(),
            DefinitionResponse::Locations(Vec::new())
        );

        let links = DefinitionResponse::Links(Vec::new());
        let encoded = links.encode().unwrap();
        assert_eq!(encoded, json!([]));
        assert_eq!(
            DefinitionResponse::decode(&encoded).unwrap(),
            DefinitionResponse::Locations(Vec::new())
        );
    }

    #[test]
    fn empty_uri_is_not_a_location() {
        let raw = json!({ "uri": "", "range": range_json(0) });
        assert!(matches!(
            DefinitionResponse::decode(&raw),
            Err(CodecError::UnrecognizedShape { .. })
        ));
    }

    #[test]
    fn positional_arrays_are_not_locations() {
        let raw = json!(["file:///workspace/lib.rs", range_json(2)]);
        assert!(matches!(
            DefinitionResponse::decode(&raw),
            Err(CodecError::UnrecognizedShape { .. })
        ));
    }

    #[test]
    fn null_round_trips() {
        let decoded = DefinitionResponse::decode(&Value::Null).unwrap();
        assert_eq!(decoded, DefinitionResponse::Null);
        assert_eq!(decoded.encode().unwrap(), Value::Null);
    }

    #[test]
    fn link_origin_range_is_omitted_when_unset() {
        let encoded = DefinitionResponse::Links(vec![link("file:///workspace/a.rs")])
            .encode()
            .unwrap();
        assert!(encoded[0].get("originSelectionRange").is_none());
        assert_eq!(encoded[0]["targetUri"], json!("file:///workspace/a.rs"));
    }

    #[test]
    fn round_trips_each_variant() {
        let mut with_origin = link("file:///workspace/c.rs");
        with_origin.origin_selection_range = Some(range(7));
        let cases = [
            DefinitionResponse::Location(location("file:///workspace/lib.rs")),
            DefinitionResponse::Locations(Vec::new()),
            DefinitionResponse::Locations(vec![
                location("file:///workspace/a.rs"),
                location("file:///workspace/b.rs"),
            ]),
            DefinitionResponse::Links(vec![link("file:///workspace/a.rs"), with_origin]),
            DefinitionResponse::Null,
        ];
        for case in cases {
            let encoded = case.encode().unwrap();
            assert_eq!(DefinitionResponse::decode(&encoded).unwrap(), case);
        }
    }
}
