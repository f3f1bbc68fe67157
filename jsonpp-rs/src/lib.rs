//! jsonpp - a dynamic JSON value model and a validating parser for JSON
//! with comments.
//!
//! # Architecture
//!
//! - [`json`] - Value model, ordered objects, parser and rendering
//! - [`error`] - Error codes and located parse errors
//! - [`load`] - Reading `.json` files from disk
//! - [`conformance`] - Corpus-driven conformance runner
//!
//! The parser works on a fully resident byte buffer in a single pass and
//! stops at the first violation, reporting the line, column, offending
//! character and the tokens that would have been accepted there.

// Library code must avoid unwrap/expect/panic.
// Tests are checked separately with `cargo test`.
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod conformance;
pub mod error;
pub mod json;
pub mod load;

// Re-export commonly used types
pub use error::{ErrorClass, ErrorCode, ParseError, ParseResult};
pub use json::{parse, parse_with_limits, validate, Limits, Object, OrderedMap, Value};
