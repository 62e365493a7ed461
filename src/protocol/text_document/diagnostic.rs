//! =============================================================================
//! textDocument/diagnostic report
//! =============================================================================
//!
//! Pull-diagnostic reports name their variant in the `kind` field, so this
//! union skips probing and dispatches on the tag directly. The tag is not part
//! of the `lsp-types` payload records; it is written back on encode.
//!
//! The request result is the "related" form of each report, which may carry a
//! `relatedDocuments` map alongside the report itself.

use lsp_types::{
    FullDocumentDiagnosticReport, RelatedFullDocumentDiagnosticReport,
    RelatedUnchangedDocumentDiagnosticReport, UnchangedDocumentDiagnosticReport,
};
use serde::Deserialize;
use serde_json::Value;

use crate::codec::{Arm, CodecError, WireUnion, dispatch, serde_via_codec, with_tag};

pub const KIND_FIELD: &str = "kind";
pub const KIND_FULL: &str = "full";
pub const KIND_UNCHANGED: &str = "unchanged";

#[derive(Debug, Clone, PartialEq)]
pub enum DocumentDiagnosticReport {
    Full(RelatedFullDocumentDiagnosticReport),
    Unchanged(RelatedUnchangedDocumentDiagnosticReport),
}

serde_via_codec!(DocumentDiagnosticReport);

fn full(raw: &Value) -> Result<DocumentDiagnosticReport, serde_json::Error> {
    RelatedFullDocumentDiagnosticReport::deserialize(raw).map(DocumentDiagnosticReport::Full)
}

fn unchanged(raw: &Value) -> Result<DocumentDiagnosticReport, serde_json::Error> {
    RelatedUnchangedDocumentDiagnosticReport::deserialize(raw)
        .map(DocumentDiagnosticReport::Unchanged)
}

const ARMS: &[Arm<DocumentDiagnosticReport>] = &[
    Arm {
        tag: KIND_FULL,
        decode: full,
    },
    Arm {
        tag: KIND_UNCHANGED,
        decode: unchanged,
    },
];

impl WireUnion for DocumentDiagnosticReport {
    const NAME: &'static str = "diagnostic-report";

    fn decode(raw: &Value) -> Result<Self, CodecError> {
        dispatch(Self::NAME, KIND_FIELD, raw, ARMS)
    }

    fn encode(&self) -> Result<Value, CodecError> {
        let payload = match self {
            Self::Full(report) => serde_json::to_value(report)?,
            Self::Unchanged(report) => serde_json::to_value(report)?,
        };
        Ok(with_tag(KIND_FIELD, self.variant(), payload))
    }

    fn variant(&self) -> &'static str {
        match self {
            Self::Full(_) => KIND_FULL,
            Self::Unchanged(_) => KIND_UNCHANGED,
        }
    }
}

impl From<RelatedFullDocumentDiagnosticReport> for DocumentDiagnosticReport {
    fn from(report: RelatedFullDocumentDiagnosticReport) -> Self {
        Self::Full(report)
    }
}

impl From<RelatedUnchangedDocumentDiagnosticReport> for DocumentDiagnosticReport {
    fn from(report: RelatedUnchangedDocumentDiagnosticReport) -> Self {
        Self::Unchanged(report)
    }
}

/// A report without related documents.
impl From<FullDocumentDiagnosticReport> for DocumentDiagnosticReport {
    fn from(report: FullDocumentDiagnosticReport) -> Self {
        Self::Full(RelatedFullDocumentDiagnosticReport {
            related_documents: None,
            full_document_diagnostic_report: report,
        })
    }
}

impl From<UnchangedDocumentDiagnosticReport> for DocumentDiagnosticReport {
    fn from(report: UnchangedDocumentDiagnosticReport) -> Self {
        Self::Unchanged(RelatedUnchangedDocumentDiagnosticReport {
            related_documents: None,
            unchanged_document_diagnostic_report: report,
        })
    }
}
