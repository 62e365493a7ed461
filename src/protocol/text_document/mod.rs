//! =============================================================================
//! textDocument/* Results
//! =============================================================================
//!
//! Unions returned by the text document requests.

pub mod completion;
pub mod definition;
pub mod diagnostic;
pub mod hover;
