//! =============================================================================
//! textDocument/completion result
//! =============================================================================
//!
//! The server answers with a `CompletionList` object, a bare array of
//! `CompletionItem`s, or `null`. Only the list carries an `items` key, so the
//! object is tried first and must actually contain an `items` array. A list
//! without `isIncomplete` is complete.

use lsp_types::{CompletionItem, CompletionList};
use serde::Deserialize;
use serde_json::Value;

use crate::codec::{
    Candidate, CodecError, Shape, WireUnion, accept_any, accept_object_array, probe,
    serde_via_codec,
};

#[derive(Debug, Clone, PartialEq)]
pub enum CompletionResponse {
    List(CompletionList),
    Items(Vec<CompletionItem>),
    Null,
}

serde_via_codec!(CompletionResponse);

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListWire {
    #[serde(default)]
    is_incomplete: bool,
    items: Vec<CompletionItem>,
}

fn list(wire: ListWire) -> CompletionResponse {
    CompletionResponse::List(CompletionList {
        is_incomplete: wire.is_incomplete,
        items: wire.items,
    })
}

fn has_items_array(raw: &Value, _list: &ListWire) -> bool {
    raw.get("items").is_some_and(Value::is_array)
}

fn null(_: ()) -> CompletionResponse {
    CompletionResponse::Null
}

const SHAPES: &[&dyn Candidate<CompletionResponse>] = &[
    &Shape::new("list", list, has_items_array),
    &Shape::new(
        "items",
        CompletionResponse::Items,
        accept_object_array::<Vec<CompletionItem>>,
    ),
    &Shape::new("null", null, accept_any::<()>),
];

impl WireUnion for CompletionResponse {
    const NAME: &'static str = "completion-result";

    fn decode(raw: &Value) -> Result<Self, CodecError> {
        probe(Self::NAME, raw, SHAPES)
    }

    fn encode(&self) -> Result<Value, CodecError> {
        Ok(match self {
            Self::List(list) => serde_json::to_value(list)?,
            Self::Items(items) => serde_json::to_value(items)?,
            Self::Null => Value::Null,
        })
    }

    fn variant(&self) -> &'static str {
        match self {
            Self::List(_) => "list",
            Self::Items(_) => "items",
            Self::Null => "null",
        }
    }
}

impl From<CompletionList> for CompletionResponse {
    fn from(list: CompletionList) -> Self {
        Self::List(list)
    }
}

impl From<Vec<CompletionItem>> for CompletionResponse {
    fn from(items: Vec<CompletionItem>) -> Self {
        Self::Items(items)
    }
}
