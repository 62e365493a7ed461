//! =============================================================================
//! Crate Entry Points
//! =============================================================================
//!
//! `lsp-wire` decodes and re-encodes the Language Server Protocol fields whose
//! JSON value can take more than one shape. The generic resolution strategies
//! live in `codec`, the catalog of concrete unions in `protocol`, and the glue
//! towards a JSON-RPC connection in `rpc`. Every codec call is a pure function
//! of its input, so unrelated messages can be decoded from any thread.

pub mod codec;
pub mod config;
pub mod protocol;
pub mod rpc;
pub mod tool;

pub use codec::{CodecError, WireUnion};
pub use protocol::{AnyUnion, UnionKind, decode};
pub use tool::transcode;
