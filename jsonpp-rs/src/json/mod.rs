//! JSON value model, parsing and rendering.
//!
//! # Architecture
//!
//! The JSON subsystem is organized into focused modules:
//!
//! - [`types`] - The dynamic [`Value`] and its [`Number`] payload
//! - [`map`] - Insertion-ordered map backing objects
//! - [`object`] - Key-indexed view over the map
//! - [`limits`] - Resource limits
//! - [`lexer`] - Cursor plus string/number/literal/comment scanners
//! - [`parser`] - Single-pass state machine building the tree
//! - [`format`] - Compact and indented text output
//!
//! # Grammar
//!
//! A superset of JSON: `//` line comments and `/* */` block comments are
//! allowed wherever whitespace is. String escapes are not decoded; only
//! `\"` is recognised, so that it does not end the string. The root must be
//! an object or an array.
//!
//! # Example
//!
//! ```
//! use jsonpp::json::{parse, to_compact_string, Value};
//!
//! let value = parse(b"{ // settings\n \"depth\": 3, \"tags\": [\"a\"] }").unwrap();
//! assert_eq!(value.member("depth").and_then(Value::as_i64), Some(3));
//! assert_eq!(to_compact_string(&value), "{\"depth\":3,\"tags\":[\"a\"]}");
//! ```

pub mod format;
pub mod lexer;
pub mod limits;
pub mod map;
pub mod object;
pub mod parser;
pub mod types;

// Re-export commonly used items
pub use format::{to_compact_string, to_pretty_string, write_pretty};
pub use limits::{Limits, MAX_NESTING_DEPTH};
pub use map::OrderedMap;
pub use object::Object;
pub use parser::{parse, parse_with_limits, validate, validate_with_limits, Parser, Validation};
pub use types::{FromValue, Kind, Number, Value};
