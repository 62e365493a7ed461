//! =============================================================================
//! textDocument/hover result
//! =============================================================================
//!
//! Two unions live here. The response itself is a `Hover` object or `null`,
//! and the hover's `contents` is either `MarkupContent`, a single
//! `MarkedString`, or an array of them. `MarkedString` is in turn a bare string
//! or a `{ language, value }` object.

use lsp_types::{MarkupContent, Range};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::codec::{
    Candidate, CodecError, Shape, WireUnion, accept_any, accept_object, probe, serde_via_codec,
};

/// A code block with an optional language hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageString {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    pub value: String,
}

/// Deprecated in favour of `MarkupContent` but still sent by many servers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MarkedString {
    String(String),
    LanguageString(LanguageString),
}

impl MarkedString {
    pub fn from_markdown(markdown: impl Into<String>) -> Self {
        Self::String(markdown.into())
    }

    pub fn from_language_code(language: impl Into<String>, code: impl Into<String>) -> Self {
        Self::LanguageString(LanguageString {
            language: Some(language.into()),
            value: code.into(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum HoverContents {
    Markup(MarkupContent),
    Scalar(MarkedString),
    Array(Vec<MarkedString>),
}

serde_via_codec!(HoverContents);

/// A `kind` key marks markup content; when that shape failed to decode the
/// object must not be reinterpreted as a marked string.
fn is_marked_string_value(raw: &Value) -> bool {
    raw.is_string() || raw.as_object().is_some_and(|object| !object.contains_key("kind"))
}

fn is_marked_string(raw: &Value, _marked: &MarkedString) -> bool {
    is_marked_string_value(raw)
}

fn are_marked_strings(raw: &Value, _marked: &Vec<MarkedString>) -> bool {
    raw.as_array()
        .is_some_and(|items| items.iter().all(is_marked_string_value))
}

const CONTENT_SHAPES: &[&dyn Candidate<HoverContents>] = &[
    &Shape::new("markup", HoverContents::Markup, accept_object::<MarkupContent>),
    &Shape::new("marked-string", HoverContents::Scalar, is_marked_string),
    &Shape::new("marked-strings", HoverContents::Array, are_marked_strings),
];

impl WireUnion for HoverContents {
    const NAME: &'static str = "hover-contents";

    fn decode(raw: &Value) -> Result<Self, CodecError> {
        probe(Self::NAME, raw, CONTENT_SHAPES)
    }

    fn encode(&self) -> Result<Value, CodecError> {
        Ok(match self {
            Self::Markup(markup) => serde_json::to_value(markup)?,
            Self::Scalar(marked) => serde_json::to_value(marked)?,
            Self::Array(marked) => serde_json::to_value(marked)?,
        })
    }

    fn variant(&self) -> &'static str {
        match self {
            Self::Markup(_) => "markup",
            Self::Scalar(_) => "marked-string",
            Self::Array(_) => "marked-strings",
        }
    }
}

/// The result of a hover request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hover {
    pub contents: HoverContents,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<Range>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum HoverResult {
    Hover(Hover),
    Null,
}

serde_via_codec!(HoverResult);

fn null(_: ()) -> HoverResult {
    HoverResult::Null
}

const RESULT_SHAPES: &[&dyn Candidate<HoverResult>] = &[
    &Shape::new("hover", HoverResult::Hover, accept_object::<Hover>),
    &Shape::new("null", null, accept_any::<()>),
];

impl WireUnion for HoverResult {
    const NAME: &'static str = "hover-result";

    fn decode(raw: &Value) -> Result<Self, CodecError> {
        probe(Self::NAME, raw, RESULT_SHAPES)
    }

    fn encode(&self) -> Result<Value, CodecError> {
        Ok(match self {
            Self::Hover(hover) => serde_json::to_value(hover)?,
            Self::Null => Value::Null,
        })
    }

    fn variant(&self) -> &'static str {
        match self {
            Self::Hover(_) => "hover",
            Self::Null => "null",
        }
    }
}

impl From<Hover> for HoverResult {
    fn from(hover: Hover) -> Self {
        Self::Hover(hover)
    }
}
