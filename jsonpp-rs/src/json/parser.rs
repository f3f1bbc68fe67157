//! Single-pass validating parser.
//!
//! The parser walks the buffer one byte at a time. Every structural byte is
//! checked against the last structurally significant token seen (the
//! [`Mark`]) before it is consumed, and the tree is built on a stack of open
//! containers as the scan goes. Scalars and strings are delegated to the
//! [`Lexer`] sub-scanners, which share the cursor.
//!
//! # Requirements
//!
//! - Objects and arrays nest freely; the root must be one of them
//! - `key: value` pairs are only legal directly inside an object
//! - Net open braces and brackets are counted and reported together at the
//!   end of input, with their direction (missing closer or missing opener)
//! - `//` and `/* */` comments are accepted wherever whitespace is
//! - The first violation ends the parse
//! - E141: Nesting depth limit

use serde::Serialize;

use super::lexer::Lexer;
use super::limits::Limits;
use super::object::Object;
use super::types::Value;
use crate::error::{ErrorCode, ParseError, ParseResult};

/// Last structurally significant token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Start,
    OpenBrace,
    CloseBrace,
    OpenBracket,
    CloseBracket,
    Comma,
    Colon,
    /// A string or a completed scalar
    Value,
}

/// Last container operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    None,
    ObjectOpen,
    ObjectClose,
    ArrayOpen,
    ArrayClose,
}

/// Where a finished value goes.
#[derive(Debug)]
enum Slot {
    Root,
    Element,
    Member(String),
}

#[derive(Debug)]
enum Container {
    Array(Vec<Value>),
    Object {
        object: Object,
        key: Option<String>,
        colon: bool,
    },
}

#[derive(Debug)]
struct Frame {
    container: Container,
    slot: Slot,
}

/// Validating parser for one input buffer.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    limits: Limits,
    mark: Mark,
    last_op: Operation,
    /// Net open objects.
    key_levels: i64,
    /// Net open arrays.
    levels: i64,
    /// Per-array count of objects currently open inside it.
    array_decls: Vec<i64>,
    frames: Vec<Frame>,
    root: Option<Value>,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given input.
    pub fn new(input: &'a [u8], limits: Limits) -> ParseResult<Self> {
        let lexer = Lexer::new(input, limits)?;
        Ok(Self {
            lexer,
            limits,
            mark: Mark::Start,
            last_op: Operation::None,
            key_levels: 0,
            levels: 0,
            array_decls: Vec::new(),
            frames: Vec::new(),
            root: None,
        })
    }

    /// Parse the input and return the root value.
    ///
    /// An input holding no tokens at all yields [`Value::None`].
    pub fn parse(mut self) -> ParseResult<Value> {
        self.run()
    }

    fn run(&mut self) -> ParseResult<Value> {
        while let Some(byte) = self.lexer.peek() {
            self.step(byte)?;
        }
        self.finish()
    }

    fn step(&mut self, byte: u8) -> ParseResult<()> {
        match byte {
            b'"' => self.on_quote(),
            b'{' => self.on_open_brace(),
            b'}' => self.on_close_brace(),
            b'[' => self.on_open_bracket(),
            b']' => self.on_close_bracket(),
            b',' => self.on_comma(),
            b':' => self.on_colon(),
            b't' | b'f' | b'n' | b'-' | b'0'..=b'9' => self.on_scalar(byte),
            b'\n' => {
                self.lexer.newline();
                Ok(())
            }
            // space, \r, \t, \v, \b, \f, \a
            b' ' | b'\r' | b'\t' | 0x0b | 0x08 | 0x0c | 0x07 => {
                self.lexer.bump();
                Ok(())
            }
            b'/' => self.lexer.skip_comment(),
            _ => Err(self
                .lexer
                .error(ErrorCode::E130_InvalidCharacter, &[], "invalid character")),
        }
    }

    fn unexpected(&self, expected: &[&'static str], detail: &str) -> ParseError {
        self.lexer.error(ErrorCode::E100_UnexpectedToken, expected, detail)
    }

    /// Error for a token that appears with no container open.
    fn outside_root(&self) -> ParseError {
        if self.root.is_some() {
            self.unexpected(&["EOF"], "content after the root value")
        } else {
            self.unexpected(&["{", "["], "document must start with an object or array")
        }
    }

    /// Decide where a value starting at the cursor attaches.
    ///
    /// Consumes the pending key of the enclosing object.
    fn value_slot(&mut self, container: bool) -> ParseResult<Slot> {
        match self.frames.last_mut() {
            None if container && self.root.is_none() => Ok(Slot::Root),
            None => Err(self.outside_root()),
            Some(Frame {
                container: Container::Array(_),
                ..
            }) => Ok(Slot::Element),
            Some(Frame {
                container: Container::Object { key, colon, .. },
                ..
            }) => match (key.take(), *colon) {
                (Some(k), true) => {
                    *colon = false;
                    Ok(Slot::Member(k))
                }
                (None, _) => Err(self.unexpected(&["Definition"], "member needs a key")),
                (Some(k), false) => {
                    *key = Some(k);
                    Err(self.unexpected(&[":"], "key is not followed by ':'"))
                }
            },
        }
    }

    fn attach(&mut self, slot: Slot, value: Value) {
        match slot {
            Slot::Root => self.root = Some(value),
            Slot::Element => {
                if let Some(Frame {
                    container: Container::Array(items),
                    ..
                }) = self.frames.last_mut()
                {
                    items.push(value);
                }
            }
            Slot::Member(key) => {
                if let Some(Frame {
                    container: Container::Object { object, .. },
                    ..
                }) = self.frames.last_mut()
                {
                    object.get_or_create(&key).set(value);
                }
            }
        }
    }

    fn open(&mut self, container: Container) -> ParseResult<()> {
        let slot = self.value_slot(true)?;
        let depth = self.frames.len() as u64 + 1;
        let limit = self.limits.nesting_depth();
        if depth > limit {
            return Err(self.lexer.error(
                ErrorCode::E141_NestingTooDeep(depth, limit),
                &[],
                "nesting too deep",
            ));
        }
        self.frames.push(Frame { container, slot });
        Ok(())
    }

    fn close(&mut self) {
        if let Some(frame) = self.frames.pop() {
            let value = match frame.container {
                Container::Array(items) => Value::Array(items),
                Container::Object { object, .. } => Value::Object(object),
            };
            self.attach(frame.slot, value);
        }
    }

    /// True if the innermost object has a key still waiting for its ':'.
    fn key_pending(&self) -> bool {
        matches!(
            self.frames.last(),
            Some(Frame {
                container: Container::Object { key: Some(_), .. },
                ..
            })
        )
    }

    fn on_quote(&mut self) -> ParseResult<()> {
        if matches!(self.mark, Mark::CloseBrace | Mark::CloseBracket | Mark::Value) {
            return Err(self.unexpected(&[",", ":", "}", "]"], "unexpected string"));
        }

        let is_key = matches!(
            self.frames.last(),
            Some(Frame {
                container: Container::Object { key: None, .. },
                ..
            })
        );

        if is_key {
            let text = self.lexer.read_string()?;
            if let Some(Frame {
                container: Container::Object { key, .. },
                ..
            }) = self.frames.last_mut()
            {
                *key = Some(text);
            }
        } else {
            let slot = self.value_slot(false)?;
            let text = self.lexer.read_string()?;
            self.attach(slot, Value::String(text));
        }

        self.mark = Mark::Value;
        Ok(())
    }

    fn on_scalar(&mut self, byte: u8) -> ParseResult<()> {
        if matches!(
            self.mark,
            Mark::Value | Mark::CloseBracket | Mark::CloseBrace | Mark::OpenBrace
        ) {
            return Err(self.unexpected(
                &[",", ":", "}", "]", "Definition"],
                "unexpected value",
            ));
        }

        let slot = self.value_slot(false)?;
        let value = match byte {
            b't' => Value::Bool(self.lexer.read_true()?),
            b'f' => Value::Bool(self.lexer.read_false()?),
            b'n' => {
                self.lexer.read_null()?;
                Value::Null
            }
            _ => Value::Number(self.lexer.read_number()?),
        };
        self.attach(slot, value);

        self.mark = Mark::Value;
        Ok(())
    }

    fn on_open_brace(&mut self) -> ParseResult<()> {
        if matches!(
            self.mark,
            Mark::OpenBrace | Mark::CloseBrace | Mark::CloseBracket | Mark::Value
        ) {
            return Err(self.unexpected(&["Definition", ",", "}", "]"], "unexpected '{'"));
        }

        self.open(Container::Object {
            object: Object::new(),
            key: None,
            colon: false,
        })?;
        self.lexer.bump();

        self.key_levels += 1;
        if let Some(decls) = self.array_decls.last_mut() {
            *decls += 1;
        }
        self.mark = Mark::OpenBrace;
        self.last_op = Operation::ObjectOpen;
        Ok(())
    }

    fn on_close_brace(&mut self) -> ParseResult<()> {
        if self.last_op == Operation::ArrayOpen {
            return Err(self.lexer.error(
                ErrorCode::E102_MismatchedClose,
                &["]"],
                "array closed with '}'",
            ));
        }
        if matches!(self.mark, Mark::Colon | Mark::OpenBracket | Mark::Comma) {
            return Err(self.unexpected(&["Definition", "Value", "{", "["], "unexpected '}'"));
        }
        match self.frames.last() {
            Some(Frame {
                container: Container::Array(_),
                ..
            }) => {
                return Err(self.lexer.error(
                    ErrorCode::E102_MismatchedClose,
                    &["]"],
                    "array closed with '}'",
                ))
            }
            Some(_) if self.key_pending() => {
                return Err(self.unexpected(&[":"], "key is not followed by ':'"))
            }
            _ => {}
        }

        self.lexer.bump();
        self.key_levels -= 1;
        if let Some(decls) = self.array_decls.last_mut() {
            *decls -= 1;
        }
        self.close();

        self.mark = Mark::CloseBrace;
        self.last_op = Operation::ObjectClose;
        Ok(())
    }

    fn on_open_bracket(&mut self) -> ParseResult<()> {
        match self.mark {
            Mark::CloseBrace | Mark::CloseBracket | Mark::Value => {
                return Err(self.unexpected(&[",", "}", "]"], "unexpected '['"))
            }
            Mark::OpenBrace => return Err(self.unexpected(&["Definition", "}"], "unexpected '['")),
            _ => {}
        }

        self.open(Container::Array(Vec::new()))?;
        self.lexer.bump();

        self.levels += 1;
        self.array_decls.push(0);
        self.mark = Mark::OpenBracket;
        self.last_op = Operation::ArrayOpen;
        Ok(())
    }

    fn on_close_bracket(&mut self) -> ParseResult<()> {
        if self.last_op == Operation::ObjectOpen {
            return Err(self.lexer.error(
                ErrorCode::E102_MismatchedClose,
                &["}"],
                "object closed with ']'",
            ));
        }
        if matches!(self.mark, Mark::Colon | Mark::OpenBrace | Mark::Comma) {
            return Err(self.unexpected(&["[", "{", "Value", "Definition"], "unexpected ']'"));
        }
        if let Some(Frame {
            container: Container::Object { .. },
            ..
        }) = self.frames.last()
        {
            return Err(self.lexer.error(
                ErrorCode::E102_MismatchedClose,
                &["}"],
                "object closed with ']'",
            ));
        }

        self.lexer.bump();
        self.array_decls.pop();
        self.levels -= 1;
        self.close();

        self.mark = Mark::CloseBracket;
        self.last_op = Operation::ArrayClose;
        Ok(())
    }

    fn on_comma(&mut self) -> ParseResult<()> {
        if matches!(
            self.mark,
            Mark::OpenBracket | Mark::Colon | Mark::OpenBrace | Mark::Comma
        ) {
            return Err(self.unexpected(
                &["[", "]", "{", "Value", "Definition"],
                "unexpected ','",
            ));
        }
        if self.frames.is_empty() {
            return Err(self.outside_root());
        }
        if self.key_pending() {
            return Err(self.unexpected(&[":"], "key is not followed by ':'"));
        }

        self.lexer.bump();
        self.mark = Mark::Comma;
        Ok(())
    }

    fn on_colon(&mut self) -> ParseResult<()> {
        if self.array_decls.last() == Some(&0) {
            return Err(self.lexer.error(
                ErrorCode::E101_BareDeclaration,
                &[",", "]"],
                "key/value pair directly inside an array",
            ));
        }
        if matches!(
            self.mark,
            Mark::CloseBracket
                | Mark::CloseBrace
                | Mark::OpenBracket
                | Mark::Colon
                | Mark::OpenBrace
                | Mark::Comma
        ) {
            return Err(self.unexpected(&["Definition", "[", "Value"], "unexpected ':'"));
        }
        if self.frames.is_empty() {
            return Err(self.outside_root());
        }
        match self.frames.last_mut() {
            Some(Frame {
                container:
                    Container::Object {
                        key: Some(_),
                        colon,
                        ..
                    },
                ..
            }) => *colon = true,
            _ => return Err(self.unexpected(&[",", "}"], "':' without a key")),
        }

        self.lexer.bump();
        self.mark = Mark::Colon;
        Ok(())
    }

    fn finish(&mut self) -> ParseResult<Value> {
        if self.key_levels != 0 || self.levels != 0 || !self.frames.is_empty() {
            return Err(self.unbalanced());
        }
        Ok(self.root.take().unwrap_or_default())
    }

    fn unbalanced(&self) -> ParseError {
        let mut expected = Vec::new();
        let mut missing = Vec::new();
        for (count, closer, opener) in [(self.key_levels, "}", "{"), (self.levels, "]", "[")] {
            if count != 0 {
                let token = if count > 0 { closer } else { opener };
                expected.push(token);
                missing.push(format!("missing {} '{}'", count.unsigned_abs(), token));
            }
        }
        self.lexer.error(
            ErrorCode::E120_UnbalancedNesting(self.key_levels, self.levels),
            &expected,
            &missing.join(", "),
        )
    }
}

/// Outcome of validating a buffer.
///
/// On success `description` is `"valid JSON"` and `line`/`column` point at
/// the end of the scan. On failure they locate the offending character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Validation {
    /// Whether the buffer parsed.
    pub is_valid: bool,
    /// Human-readable outcome.
    pub description: String,
    /// Tokens that would have been accepted at the error site.
    pub expected: Vec<&'static str>,
    /// One-based line.
    pub line: usize,
    /// Zero-based column.
    pub column: usize,
    /// Numeric error code, when invalid.
    pub code: Option<u32>,
}

impl From<&ParseError> for Validation {
    fn from(err: &ParseError) -> Self {
        Self {
            is_valid: false,
            description: err.description().to_string(),
            expected: err.expected().to_vec(),
            line: err.line(),
            column: err.column(),
            code: Some(err.code().code()),
        }
    }
}

/// Parse a buffer with the default limits.
pub fn parse(input: &[u8]) -> ParseResult<Value> {
    parse_with_limits(input, Limits::default())
}

/// Parse a buffer with custom limits.
pub fn parse_with_limits(input: &[u8], limits: Limits) -> ParseResult<Value> {
    Parser::new(input, limits)?.parse()
}

/// Validate a buffer with the default limits, discarding the tree.
pub fn validate(input: &[u8]) -> Validation {
    validate_with_limits(input, Limits::default())
}

/// Validate a buffer with custom limits, discarding the tree.
pub fn validate_with_limits(input: &[u8], limits: Limits) -> Validation {
    let mut parser = match Parser::new(input, limits) {
        Ok(parser) => parser,
        Err(err) => return Validation::from(&err),
    };
    match parser.run() {
        Ok(_) => Validation {
            is_valid: true,
            description: "valid JSON".to_string(),
            expected: Vec::new(),
            line: parser.lexer.line(),
            column: parser.lexer.column(),
            code: None,
        },
        Err(err) => Validation::from(&err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::types::Number;

    fn parse_str(input: &str) -> ParseResult<Value> {
        parse(input.as_bytes())
    }

    fn error_of(input: &str) -> ParseError {
        parse_str(input).unwrap_err()
    }

    #[test]
    fn test_parse_empty_object_and_array() {
        assert_eq!(parse_str("{}").unwrap(), Value::Object(Object::new()));
        assert_eq!(parse_str("[]").unwrap(), Value::Array(vec![]));
    }

    #[test]
    fn test_empty_input_is_none() {
        assert!(parse_str("").unwrap().is_none());
        assert!(parse_str("  \n // nothing here\n /* at all */ ").unwrap().is_none());
    }

    #[test]
    fn test_parse_object() {
        let value = parse_str(r#"{"a": 1, "b": "two"}"#).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert_eq!(obj.get("a"), Some(&Value::from(1i64)));
        assert_eq!(obj.get("b"), Some(&Value::from("two")));
    }

    #[test]
    fn test_mixed_array() {
        let value = parse_str(r#"{"x": [1, 2.5, true, null, "s"]}"#).unwrap();
        let items = value.member("x").and_then(Value::as_array).unwrap();
        assert_eq!(
            items,
            &vec![
                Value::Number(Number::Int(1)),
                Value::Number(Number::Double(2.5)),
                Value::Bool(true),
                Value::Null,
                Value::from("s"),
            ]
        );
    }

    #[test]
    fn test_nested_structure() {
        let value = parse_str(r#"{"arr": [1, {"nested": [false, {}]}], "num": -42}"#).unwrap();
        let arr = value.member("arr").unwrap();
        assert!(arr.is_array());
        let nested = arr.get_index(1).and_then(|o| o.member("nested")).unwrap();
        assert_eq!(nested.get_index(0), Some(&Value::Bool(false)));
        assert_eq!(value.member("num").and_then(Value::as_i64), Some(-42));
    }

    #[test]
    fn test_member_order_preserved() {
        let value = parse_str(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_duplicate_key_keeps_first_slot_last_value() {
        let value = parse_str(r#"{"a": 1, "b": 2, "a": 3}"#).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        let members: Vec<(&str, i64)> = obj
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_i64().unwrap()))
            .collect();
        assert_eq!(members, vec![("a", 3), ("b", 2)]);
    }

    #[test]
    fn test_comments_are_skipped() {
        let value = parse_str("{ // comment\n \"a\": 1 }").unwrap();
        assert_eq!(value.member("a").and_then(Value::as_i64), Some(1));

        let value = parse_str("[1, /* two\nlines */ 2] // tail").unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn test_escaped_quote_in_value() {
        let value = parse_str(r#"["a\"b"]"#).unwrap();
        assert_eq!(value.get_index(0).and_then(Value::as_str), Some(r#"a\"b"#));
    }

    #[test]
    fn test_number_terminated_by_closer() {
        let value = parse_str("[1,-2,3e2]").unwrap();
        assert_eq!(
            value.as_array().unwrap(),
            &vec![
                Value::from(1i64),
                Value::from(-2i64),
                Value::Number(Number::Double(300.0)),
            ]
        );
    }

    #[test]
    fn test_missing_value_after_colon() {
        let err = error_of(r#"{"a":}"#);
        assert_eq!(err.code(), &ErrorCode::E100_UnexpectedToken);
        assert_eq!(err.line(), 1);
        assert_eq!(err.column(), 5);
        assert_eq!(err.found(), "}");
        assert_eq!(err.expected(), &["Definition", "Value", "{", "["]);
    }

    #[test]
    fn test_bare_declaration_in_array() {
        let err = error_of(r#"[ "a": 1 ]"#);
        assert_eq!(err.code(), &ErrorCode::E101_BareDeclaration);
        assert_eq!(err.expected(), &[",", "]"]);

        assert!(parse_str(r#"[ { "a": 1 } ]"#).is_ok());
        let err = error_of(r#"[ { "a": 1 }, "b": 2 ]"#);
        assert_eq!(err.code(), &ErrorCode::E101_BareDeclaration);
    }

    #[test]
    fn test_missing_closers_are_counted() {
        let err = error_of(r#"{"a": [1, [2"#);
        assert_eq!(err.code(), &ErrorCode::E120_UnbalancedNesting(1, 2));
        assert_eq!(err.expected(), &["}", "]"]);
        assert!(err.description().contains("missing 1 '}'"));
        assert!(err.description().contains("missing 2 ']'"));
    }

    #[test]
    fn test_extra_closers_are_counted() {
        let err = error_of("{}}");
        assert_eq!(err.code(), &ErrorCode::E120_UnbalancedNesting(-1, 0));
        assert_eq!(err.expected(), &["{"]);

        let err = error_of("[]]]");
        assert_eq!(err.code(), &ErrorCode::E120_UnbalancedNesting(0, -2));
        assert_eq!(err.expected(), &["["]);
    }

    #[test]
    fn test_mismatched_closers() {
        let err = error_of("[1, 2}");
        assert_eq!(err.code(), &ErrorCode::E102_MismatchedClose);
        assert_eq!(err.expected(), &["]"]);

        let err = error_of("{]");
        assert_eq!(err.code(), &ErrorCode::E102_MismatchedClose);
        assert_eq!(err.expected(), &["}"]);

        let err = error_of("[[1]}");
        assert_eq!(err.code(), &ErrorCode::E102_MismatchedClose);
    }

    #[test]
    fn test_predecessor_rules() {
        assert_eq!(error_of("{,}").expected(), &["[", "]", "{", "Value", "Definition"]);
        assert_eq!(error_of(r#"{"a" "b"}"#).expected(), &[",", ":", "}", "]"]);
        assert_eq!(error_of("{{}}").expected(), &["Definition", ",", "}", "]"]);
        assert_eq!(error_of("{[]}").expected(), &["Definition", "}"]);
        assert_eq!(error_of("[1 2]").expected(), &[",", ":", "}", "]", "Definition"]);
        assert_eq!(error_of("[[] []]").expected(), &[",", "}", "]"]);
        assert_eq!(error_of(r#"{"a"::1}"#).expected(), &["Definition", "[", "Value"]);
    }

    #[test]
    fn test_trailing_comma_rejected() {
        assert_eq!(
            error_of("[1, 2,]").expected(),
            &["[", "{", "Value", "Definition"]
        );
        assert!(parse_str(r#"{"a": 1,}"#).is_err());
    }

    #[test]
    fn test_member_needs_key_after_comma() {
        let err = error_of(r#"{"a": 1, 2}"#);
        assert_eq!(err.expected(), &["Definition"]);
    }

    #[test]
    fn test_key_needs_colon() {
        let err = error_of(r#"{"a"}"#);
        assert_eq!(err.expected(), &[":"]);
        let err = error_of(r#"{"a", "b": 1}"#);
        assert_eq!(err.expected(), &[":"]);
    }

    #[test]
    fn test_colon_without_key() {
        let err = error_of(r#"{"a": 1 : 2}"#);
        assert_eq!(err.code(), &ErrorCode::E100_UnexpectedToken);
    }

    #[test]
    fn test_top_level_scalar_rejected() {
        let err = error_of("42");
        assert_eq!(err.expected(), &["{", "["]);
        let err = error_of(r#""text""#);
        assert_eq!(err.expected(), &["{", "["]);
    }

    #[test]
    fn test_content_after_root_rejected() {
        let err = error_of("{} ,");
        assert_eq!(err.expected(), &["EOF"]);
        assert!(error_of("{} []").code() == &ErrorCode::E100_UnexpectedToken);
    }

    #[test]
    fn test_invalid_character() {
        let err = error_of("{\"a\": 1 @}");
        assert_eq!(err.code(), &ErrorCode::E130_InvalidCharacter);
        assert_eq!(err.found(), "@");
        assert!(err.expected().is_empty());
    }

    #[test]
    fn test_error_location_tracks_lines() {
        let err = error_of("{\n  \"a\": 1,\n  \"b\": tru\n}");
        assert_eq!(err.code(), &ErrorCode::E111_InvalidLiteral);
        assert_eq!(err.line(), 3);
        assert_eq!(err.column(), 10);
        assert_eq!(err.found(), "line end: \\n");
    }

    #[test]
    fn test_unterminated_string_is_reported() {
        let err = error_of(r#"{"a": "open"#);
        assert_eq!(err.code(), &ErrorCode::E112_UnterminatedString);
        assert_eq!(err.found(), "end of file");
    }

    #[test]
    fn test_nesting_depth_limit() {
        let mut limits = Limits::lenient();
        limits.max_nesting_depth = 2;

        assert!(parse_with_limits(b"[[1]]", limits).is_ok());

        let err = parse_with_limits(b"[[[1]]]", limits).unwrap_err();
        assert_eq!(err.code(), &ErrorCode::E141_NestingTooDeep(3, 2));
    }

    #[test]
    fn test_nul_ends_scan() {
        let value = parse(b"{\"a\": 1}\0garbage").unwrap();
        assert_eq!(value.member("a").and_then(Value::as_i64), Some(1));
    }

    #[test]
    fn test_validate_reports_outcome() {
        let ok = validate(b"{\"a\": [1, 2]}\n");
        assert!(ok.is_valid);
        assert_eq!(ok.description, "valid JSON");
        assert_eq!(ok.code, None);
        assert_eq!(ok.line, 2);

        let bad = validate(b"[1, 2");
        assert!(!bad.is_valid);
        assert_eq!(bad.code, Some(120));
        assert_eq!(bad.expected, vec!["]"]);
    }

    #[test]
    fn test_parser_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<Parser<'static>>();
    }
}
