//! =============================================================================
//! Progress Tokens
//! =============================================================================
//!
//! `ProgressToken = integer | string`. The active representation is the enum
//! variant itself, so a token built from the integer `0` is re-emitted as the
//! number `0` and never confused with an empty string token.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::codec::{CodecError, Scalar, WireUnion, resolve_scalar, serde_via_codec};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProgressToken {
    Number(i32),
    String(String),
}

serde_via_codec!(ProgressToken);

impl WireUnion for ProgressToken {
    const NAME: &'static str = "progress-token";

    fn decode(raw: &Value) -> Result<Self, CodecError> {
        Ok(match resolve_scalar(Self::NAME, raw)? {
            Scalar::Number(number) => Self::Number(number),
            Scalar::String(text) => Self::String(text.to_string()),
        })
    }

    fn encode(&self) -> Result<Value, CodecError> {
        Ok(match self {
            Self::Number(number) => Value::from(*number),
            Self::String(text) => Value::from(text.as_str()),
        })
    }

    fn variant(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::String(_) => "string",
        }
    }
}

impl From<i32> for ProgressToken {
    fn from(number: i32) -> Self {
        Self::Number(number)
    }
}

impl From<String> for ProgressToken {
    fn from(text: String) -> Self {
        Self::String(text)
    }
}

impl From<&str> for ProgressToken {
    fn from(text: &str) -> Self {
        Self::String(text.to_string())
    }
}

/// Token a server can use to report work-done progress for a request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkDoneProgressParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_done_token: Option<ProgressToken>,
}

/// Token a server can use to stream partial results for a request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialResultParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partial_result_token: Option<ProgressToken>,
}
