//! Error handling for the jsonpp parser.
//!
//! Every rejection is identified by an [`ErrorCode`] with a stable numeric
//! code and name, and located in the input by a [`ParseError`].
//!
//! # Code ranges
//!
//! - 100..=102: structural errors (token not allowed after the previous one)
//! - 110..=115: lexical errors (numbers, literals, strings, comments)
//! - 120: unbalanced nesting, reported once the whole buffer is scanned
//! - 130: bytes that start no token at all
//! - 140..=142: configured [`Limits`](crate::json::Limits) exceeded

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Broad category of an [`ErrorCode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorClass {
    /// A token appeared where the grammar forbids it.
    Structural,
    /// A literal, number, string or comment is malformed.
    Lexical,
    /// Braces or brackets do not balance at the end of input.
    Unbalanced,
    /// A byte that is not part of any token.
    InvalidByte,
    /// A configured limit was exceeded.
    Limit,
}

/// All error codes the parser can report.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[allow(non_camel_case_types)]
pub enum ErrorCode {
    /// E100_UnexpectedToken (code 100)
    #[error("E100_UnexpectedToken")]
    E100_UnexpectedToken,

    /// E101_BareDeclaration (code 101): `key: value` directly inside an array
    #[error("E101_BareDeclaration")]
    E101_BareDeclaration,

    /// E102_MismatchedClose (code 102)
    #[error("E102_MismatchedClose")]
    E102_MismatchedClose,

    /// E110_InvalidNumber (code 110)
    #[error("E110_InvalidNumber")]
    E110_InvalidNumber,

    /// E111_InvalidLiteral (code 111)
    #[error("E111_InvalidLiteral")]
    E111_InvalidLiteral,

    /// E112_UnterminatedString (code 112)
    #[error("E112_UnterminatedString")]
    E112_UnterminatedString,

    /// E113_InvalidUtf8 (code 113)
    #[error("E113_InvalidUtf8")]
    E113_InvalidUtf8,

    /// E114_UnterminatedComment (code 114)
    #[error("E114_UnterminatedComment")]
    E114_UnterminatedComment,

    /// E115_InvalidComment (code 115)
    #[error("E115_InvalidComment")]
    E115_InvalidComment,

    /// E120_UnbalancedNesting (code 120): net open braces, net open brackets
    #[error("E120_UnbalancedNesting({0}, {1})")]
    E120_UnbalancedNesting(/* braces */ i64, /* brackets */ i64),

    /// E130_InvalidCharacter (code 130)
    #[error("E130_InvalidCharacter")]
    E130_InvalidCharacter,

    /// E140_InputTooLarge (code 140): size, limit
    #[error("E140_InputTooLarge({0}, {1})")]
    E140_InputTooLarge(/* size */ u64, /* limit */ u64),

    /// E141_NestingTooDeep (code 141): depth, limit
    #[error("E141_NestingTooDeep({0}, {1})")]
    E141_NestingTooDeep(/* depth */ u64, /* limit */ u64),

    /// E142_StringTooLong (code 142): length, limit
    #[error("E142_StringTooLong({0}, {1})")]
    E142_StringTooLong(/* length */ u64, /* limit */ u64),
}

impl ErrorCode {
    /// Get the numeric error code.
    pub fn code(&self) -> u32 {
        match self {
            ErrorCode::E100_UnexpectedToken => 100,
            ErrorCode::E101_BareDeclaration => 101,
            ErrorCode::E102_MismatchedClose => 102,
            ErrorCode::E110_InvalidNumber => 110,
            ErrorCode::E111_InvalidLiteral => 111,
            ErrorCode::E112_UnterminatedString => 112,
            ErrorCode::E113_InvalidUtf8 => 113,
            ErrorCode::E114_UnterminatedComment => 114,
            ErrorCode::E115_InvalidComment => 115,
            ErrorCode::E120_UnbalancedNesting(_, _) => 120,
            ErrorCode::E130_InvalidCharacter => 130,
            ErrorCode::E140_InputTooLarge(_, _) => 140,
            ErrorCode::E141_NestingTooDeep(_, _) => 141,
            ErrorCode::E142_StringTooLong(_, _) => 142,
        }
    }

    /// Get the error name as a string.
    pub fn name(&self) -> &'static str {
        match self {
            ErrorCode::E100_UnexpectedToken => "E100_UnexpectedToken",
            ErrorCode::E101_BareDeclaration => "E101_BareDeclaration",
            ErrorCode::E102_MismatchedClose => "E102_MismatchedClose",
            ErrorCode::E110_InvalidNumber => "E110_InvalidNumber",
            ErrorCode::E111_InvalidLiteral => "E111_InvalidLiteral",
            ErrorCode::E112_UnterminatedString => "E112_UnterminatedString",
            ErrorCode::E113_InvalidUtf8 => "E113_InvalidUtf8",
            ErrorCode::E114_UnterminatedComment => "E114_UnterminatedComment",
            ErrorCode::E115_InvalidComment => "E115_InvalidComment",
            ErrorCode::E120_UnbalancedNesting(_, _) => "E120_UnbalancedNesting",
            ErrorCode::E130_InvalidCharacter => "E130_InvalidCharacter",
            ErrorCode::E140_InputTooLarge(_, _) => "E140_InputTooLarge",
            ErrorCode::E141_NestingTooDeep(_, _) => "E141_NestingTooDeep",
            ErrorCode::E142_StringTooLong(_, _) => "E142_StringTooLong",
        }
    }

    /// Get the category this code belongs to.
    pub fn class(&self) -> ErrorClass {
        match self.code() {
            100..=109 => ErrorClass::Structural,
            110..=119 => ErrorClass::Lexical,
            120..=129 => ErrorClass::Unbalanced,
            130..=139 => ErrorClass::InvalidByte,
            _ => ErrorClass::Limit,
        }
    }
}

impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ErrorCode", 3)?;
        state.serialize_field("code", &self.code())?;
        state.serialize_field("name", self.name())?;
        state.serialize_field("class", &self.class())?;
        state.end()
    }
}

/// A located parse failure.
///
/// `line` is one-based, `column` is the zero-based offset from the start of
/// that line, `offset` is the absolute byte offset. `found` names the
/// offending character, `expected` lists the tokens the grammar would have
/// accepted at that point, in the order they are reported.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{description}")]
pub struct ParseError {
    code: ErrorCode,
    line: usize,
    column: usize,
    offset: usize,
    found: String,
    expected: Vec<&'static str>,
    description: String,
}

impl ParseError {
    pub(crate) fn new(
        code: ErrorCode,
        line: usize,
        column: usize,
        offset: usize,
        found: String,
        expected: &[&'static str],
        detail: &str,
    ) -> Self {
        let mut description = format!(
            "error at line {}, in character -> '{}' in position: {}: {}",
            line, found, column, detail
        );
        if !expected.is_empty() {
            let quoted: Vec<String> = expected.iter().map(|t| format!("'{}'", t)).collect();
            description.push_str(&format!("; expected -> {}", quoted.join(" , ")));
        }
        Self {
            code,
            line,
            column,
            offset,
            found,
            expected: expected.to_vec(),
            description,
        }
    }

    /// The error code.
    pub fn code(&self) -> &ErrorCode {
        &self.code
    }

    /// One-based line of the offending character.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Zero-based column of the offending character within its line.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Absolute byte offset of the offending character.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Symbolic name of the offending character.
    pub fn found(&self) -> &str {
        &self.found
    }

    /// Token names that would have been accepted.
    pub fn expected(&self) -> &[&'static str] {
        &self.expected
    }

    /// Human-readable message.
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Result type for parse operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Describe the byte at an error site the way reports print it.
pub(crate) fn describe_byte(byte: Option<u8>) -> String {
    match byte {
        None | Some(0x03) => "end of file".to_string(),
        Some(0) => "null character".to_string(),
        Some(b'\n') => "line end: \\n".to_string(),
        Some(b'\r') => "\\r".to_string(),
        Some(b'\t') => "tab: \\t".to_string(),
        Some(b) if b.is_ascii_graphic() || b == b' ' => (b as char).to_string(),
        Some(b) => format!("\\x{:02x}", b),
    }
}
