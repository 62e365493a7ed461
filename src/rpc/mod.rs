//! =============================================================================
//! RPC Boundary
//! =============================================================================
//!
//! Glue between the codec and the JSON-RPC layer that owns the connection:
//! * LSP-specific error codes and the reserved code range
//! * decoding the `result` of an `lsp_server::Response` for a known method
//! * turning a codec failure into a `ResponseError` for the peer

use lsp_server::{ErrorCode, Response, ResponseError};
use serde_json::Value;

use crate::codec::CodecError;
use crate::protocol::{self, AnyUnion, UnionKind};

/// Inclusive bounds of the error code range reserved for LSP.
pub const LSP_RESERVED_ERROR_RANGE_START: i32 = -32899;
pub const LSP_RESERVED_ERROR_RANGE_END: i32 = -32800;

/// Sent before `initialize`; outside the reserved range for backwards compatibility.
pub const SERVER_NOT_INITIALIZED: i32 = -32002;
pub const UNKNOWN_ERROR_CODE: i32 = -32001;

/// The request was valid but failed; the message says why.
pub const REQUEST_FAILED: i32 = -32803;
/// The document changed outside normal conditions while the request ran.
pub const CONTENT_MODIFIED: i32 = -32801;
pub const REQUEST_CANCELLED: i32 = -32800;

/// Whether `code` belongs to LSP rather than to plain JSON-RPC.
pub fn is_lsp_rpc_error_code(code: i64) -> bool {
    let reserved =
        i64::from(LSP_RESERVED_ERROR_RANGE_START)..=i64::from(LSP_RESERVED_ERROR_RANGE_END);
    reserved.contains(&code)
        || code == i64::from(SERVER_NOT_INITIALIZED)
        || code == i64::from(UNKNOWN_ERROR_CODE)
}

/// Maps a decode failure to the error reported back for the offending message.
/// The rejected payload, when there is one, travels in `data`.
pub fn response_error(err: &CodecError) -> ResponseError {
    if let (Some(union), Some(payload)) = (err.union(), err.payload()) {
        log::debug!("rejecting {union} payload: {payload}");
    }
    ResponseError {
        code: ErrorCode::RequestFailed as i32,
        message: err.to_string(),
        data: err.payload().cloned(),
    }
}

/// Decodes the result of a response to `method`.
///
/// Returns `Ok(None)` when the method's result is not a catalog union, and the
/// peer's own error unchanged when the response carries one. A missing
/// `result` is read as JSON `null`.
pub fn decode_response(
    method: &str,
    response: &Response,
) -> Result<Option<AnyUnion>, ResponseError> {
    if let Some(error) = &response.error {
        return Err(error.clone());
    }
    let Some(kind) = UnionKind::for_response(method) else {
        return Ok(None);
    };
    let null = Value::Null;
    let raw = response.result.as_ref().unwrap_or(&null);
    protocol::decode(kind, raw)
        .map(Some)
        .map_err(|err| response_error(&err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lsp_server::RequestId;
    use serde_json::json;

    use crate::protocol::text_document::hover::HoverResult;

    #[test]
    fn lsp_error_code_range() {
        assert!(!is_lsp_rpc_error_code(5000));
        assert!(!is_lsp_rpc_error_code(-9000));
        assert!(!is_lsp_rpc_error_code(-32700));
        assert!(is_lsp_rpc_error_code(-32899));
        assert!(is_lsp_rpc_error_code(-32840));
        assert!(is_lsp_rpc_error_code(-32800));
        assert!(is_lsp_rpc_error_code(i64::from(REQUEST_FAILED)));
        assert!(is_lsp_rpc_error_code(-32001));
        assert!(is_lsp_rpc_error_code(-32002));
    }

    #[test]
    fn error_code_constants_agree_with_lsp_server() {
        assert_eq!(ErrorCode::RequestFailed as i32, REQUEST_FAILED);
        assert_eq!(ErrorCode::ContentModified as i32, CONTENT_MODIFIED);
        assert_eq!(ErrorCode::RequestCanceled as i32, REQUEST_CANCELLED);
        assert_eq!(ErrorCode::ServerNotInitialized as i32, SERVER_NOT_INITIALIZED);
        assert_eq!(ErrorCode::UnknownErrorCode as i32, UNKNOWN_ERROR_CODE);
    }

    #[test]
    fn hover_response_decodes() {
        let response = Response::new_ok(RequestId::from(1), Value::Null);
        let decoded = decode_response("textDocument/hover", &response)
            .expect("null hover decodes")
            .expect("hover is a catalog union");
        assert_eq!(decoded, AnyUnion::HoverResult(HoverResult::Null));
    }

    #[test]
    fn unrelated_methods_are_skipped() {
        let response = Response::new_ok(RequestId::from(2), json!([]));
        assert_eq!(
            decode_response("textDocument/references", &response).unwrap(),
            None
        );
    }

    #[test]
    fn peer_errors_pass_through() {
        let response = Response::new_err(
            RequestId::from(3),
            ErrorCode::ContentModified as i32,
            "stale".to_string(),
        );
        let err = decode_response("textDocument/completion", &response).unwrap_err();
        assert_eq!(err.code, CONTENT_MODIFIED);
        assert_eq!(err.message, "stale");
    }

    #[test]
    fn codec_failures_become_request_failed() {
        let response = Response::new_ok(RequestId::from(4), json!({ "foo": 1 }));
        let err = decode_response("textDocument/completion", &response).unwrap_err();
        assert_eq!(err.code, REQUEST_FAILED);
        assert!(err.message.starts_with("completion-result:"));
        assert_eq!(err.data, Some(json!({ "foo": 1 })));
    }

    #[test]
    fn malformed_variants_carry_no_data() {
        let response = Response::new_ok(RequestId::from(5), json!({ "kind": "unchanged" }));
        let err = decode_response("textDocument/diagnostic", &response).unwrap_err();
        assert_eq!(err.code, REQUEST_FAILED);
        assert!(err.message.starts_with("diagnostic-report:"));
        assert_eq!(err.data, None);
    }
}
