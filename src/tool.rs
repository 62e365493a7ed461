//! Decode-and-re-encode runner behind the `lsp-wire` binary.

use anyhow::Context;

use crate::config::ToolSettings;
use crate::protocol::{self, UnionKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcoded {
    pub variant: &'static str,
    pub output: String,
}

/// Parses `input` as one JSON value, decodes it as `kind` and renders the
/// re-encoded value.
pub fn transcode(
    kind: UnionKind,
    input: &str,
    settings: &ToolSettings,
) -> anyhow::Result<Transcoded> {
    let raw: serde_json::Value = serde_json::from_str(input).context("input is not valid JSON")?;
    let decoded = protocol::decode(kind, &raw)?;
    log::debug!("{kind}: decoded `{}` variant", decoded.variant());
    let encoded = decoded
        .encode()
        .with_context(|| format!("re-encode {kind}"))?;
    let output = settings.output.render(&encoded)?;
    Ok(Transcoded {
        variant: decoded.variant(),
        output,
    })
}
