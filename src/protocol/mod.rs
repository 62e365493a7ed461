//! =============================================================================
//! Union Catalog
//! =============================================================================
//!
//! Every ambiguous protocol field this crate understands, bound to the
//! strategy that resolves it. The transport layer hands over a raw JSON value
//! together with the statically known [`UnionKind`] of the field and gets a
//! typed [`AnyUnion`] back. Callers that know the concrete type at compile
//! time use the [`WireUnion`] impls (or plain `serde`) directly instead.

pub mod languages;
pub mod progress;
pub mod text_document;

use lsp_types::request::{
    Completion, DocumentDiagnosticRequest, GotoDefinition, HoverRequest, Request,
};
use serde_json::Value;

use crate::codec::{CodecError, WireUnion};
use progress::ProgressToken;
use text_document::completion::CompletionResponse;
use text_document::definition::DefinitionResponse;
use text_document::diagnostic::{DocumentDiagnosticReport, KIND_FIELD};
use text_document::hover::{HoverContents, HoverResult};

/// How a union recovers its variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Ordered candidate shapes, first structurally valid match wins.
    Probe,
    /// A tag field names the variant.
    Discriminant { field: &'static str },
    /// Bare number vs. bare string.
    Scalar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnionKind {
    CompletionResult,
    DefinitionResult,
    DiagnosticReport,
    HoverContents,
    HoverResult,
    ProgressToken,
}

impl UnionKind {
    pub const ALL: [UnionKind; 6] = [
        UnionKind::CompletionResult,
        UnionKind::DefinitionResult,
        UnionKind::DiagnosticReport,
        UnionKind::HoverContents,
        UnionKind::HoverResult,
        UnionKind::ProgressToken,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::CompletionResult => CompletionResponse::NAME,
            Self::DefinitionResult => DefinitionResponse::NAME,
            Self::DiagnosticReport => DocumentDiagnosticReport::NAME,
            Self::HoverContents => HoverContents::NAME,
            Self::HoverResult => HoverResult::NAME,
            Self::ProgressToken => ProgressToken::NAME,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    pub fn strategy(self) -> Strategy {
        match self {
            Self::CompletionResult
            | Self::DefinitionResult
            | Self::HoverContents
            | Self::HoverResult => Strategy::Probe,
            Self::DiagnosticReport => Strategy::Discriminant { field: KIND_FIELD },
            Self::ProgressToken => Strategy::Scalar,
        }
    }

    /// The union carried by the result of a request `method`, if any.
    pub fn for_response(method: &str) -> Option<Self> {
        if method == Completion::METHOD {
            Some(Self::CompletionResult)
        } else if method == GotoDefinition::METHOD {
            Some(Self::DefinitionResult)
        } else if method == DocumentDiagnosticRequest::METHOD {
            Some(Self::DiagnosticReport)
        } else if method == HoverRequest::METHOD {
            Some(Self::HoverResult)
        } else {
            None
        }
    }
}

impl std::fmt::Display for UnionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A decoded value of any catalog union.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyUnion {
    CompletionResult(CompletionResponse),
    DefinitionResult(DefinitionResponse),
    DiagnosticReport(DocumentDiagnosticReport),
    HoverContents(HoverContents),
    HoverResult(HoverResult),
    ProgressToken(ProgressToken),
}

impl AnyUnion {
    pub fn kind(&self) -> UnionKind {
        match self {
            Self::CompletionResult(_) => UnionKind::CompletionResult,
            Self::DefinitionResult(_) => UnionKind::DefinitionResult,
            Self::DiagnosticReport(_) => UnionKind::DiagnosticReport,
            Self::HoverContents(_) => UnionKind::HoverContents,
            Self::HoverResult(_) => UnionKind::HoverResult,
            Self::ProgressToken(_) => UnionKind::ProgressToken,
        }
    }

    pub fn variant(&self) -> &'static str {
        match self {
            Self::CompletionResult(value) => value.variant(),
            Self::DefinitionResult(value) => value.variant(),
            Self::DiagnosticReport(value) => value.variant(),
            Self::HoverContents(value) => value.variant(),
            Self::HoverResult(value) => value.variant(),
            Self::ProgressToken(value) => value.variant(),
        }
    }

    pub fn encode(&self) -> Result<Value, CodecError> {
        match self {
            Self::CompletionResult(value) => value.encode(),
            Self::DefinitionResult(value) => value.encode(),
            Self::DiagnosticReport(value) => value.encode(),
            Self::HoverContents(value) => value.encode(),
            Self::HoverResult(value) => value.encode(),
            Self::ProgressToken(value) => value.encode(),
        }
    }
}

/// Decodes `raw` as the union registered for `kind`.
pub fn decode(kind: UnionKind, raw: &Value) -> Result<AnyUnion, CodecError> {
    Ok(match kind {
        UnionKind::CompletionResult => AnyUnion::CompletionResult(CompletionResponse::decode(raw)?),
        UnionKind::DefinitionResult => AnyUnion::DefinitionResult(DefinitionResponse::decode(raw)?),
        UnionKind::DiagnosticReport => {
            AnyUnion::DiagnosticReport(DocumentDiagnosticReport::decode(raw)?)
        }
        UnionKind::HoverContents => AnyUnion::HoverContents(HoverContents::decode(raw)?),
        UnionKind::HoverResult => AnyUnion::HoverResult(HoverResult::decode(raw)?),
        UnionKind::ProgressToken => AnyUnion::ProgressToken(ProgressToken::decode(raw)?),
    })
}
