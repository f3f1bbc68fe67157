//! Cursor and lexical sub-scanners.
//!
//! The [`Lexer`] owns the read position and line tracking for one parse.
//! The parser's state machine decides which scanner to run from the byte
//! under the cursor; each scanner consumes exactly the bytes of its token
//! and leaves the cursor on the first byte after it.
//!
//! A NUL byte ends the input just like the end of the buffer does.

use super::limits::Limits;
use super::types::Number;
use crate::error::{describe_byte, ErrorCode, ParseError, ParseResult};

const NUMBER_EXPECTED: &[&str] = &[",", "}", "]", "Number"];
const BOOLEAN_EXPECTED: &[&str] = &["true", "false"];
const NULL_EXPECTED: &[&str] = &["null"];

/// Shared cursor over the input buffer.
pub struct Lexer<'a> {
    input: &'a [u8],
    end: usize,
    pos: usize,
    line: usize,
    line_start: usize,
    limits: Limits,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a [u8], limits: Limits) -> ParseResult<Self> {
        let end = input.iter().position(|&b| b == 0).unwrap_or(input.len());
        let lexer = Self {
            input,
            end,
            pos: 0,
            line: 1,
            line_start: 0,
            limits,
        };

        if input.len() as u64 > limits.max_input_size {
            return Err(lexer.error_at(
                0,
                ErrorCode::E140_InputTooLarge(input.len() as u64, limits.max_input_size),
                &[],
                "input too large",
            ));
        }

        Ok(lexer)
    }

    /// Get the current position in the input.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// One-based line of the cursor.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Zero-based column of the cursor within its line.
    pub fn column(&self) -> usize {
        self.pos.saturating_sub(self.line_start)
    }

    /// Peek at the current byte without consuming it.
    pub fn peek(&self) -> Option<u8> {
        self.peek_at(0)
    }

    fn peek_at(&self, ahead: usize) -> Option<u8> {
        let at = self.pos + ahead;
        if at < self.end {
            self.input.get(at).copied()
        } else {
            None
        }
    }

    /// Consume one byte.
    pub fn bump(&mut self) {
        if self.pos < self.end {
            self.pos += 1;
        }
    }

    /// Consume a `\n` under the cursor and start a new line.
    pub fn newline(&mut self) {
        self.bump();
        self.line += 1;
        self.line_start = self.pos;
    }

    /// Build an error for the byte at the cursor.
    pub fn error(&self, code: ErrorCode, expected: &[&'static str], detail: &str) -> ParseError {
        self.error_at(self.pos, code, expected, detail)
    }

    /// Line and column of `offset`, which may lie on an earlier line than
    /// the cursor.
    fn location_of(&self, offset: usize) -> (usize, usize) {
        if offset >= self.line_start {
            return (self.line, offset - self.line_start);
        }
        let skipped = self.input[offset..self.line_start]
            .iter()
            .filter(|&&b| b == b'\n')
            .count();
        let start = self.input[..offset]
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |i| i + 1);
        (self.line - skipped, offset - start)
    }

    /// Build an error for the byte at `offset`.
    pub fn error_at(
        &self,
        offset: usize,
        code: ErrorCode,
        expected: &[&'static str],
        detail: &str,
    ) -> ParseError {
        let found = describe_byte(self.input.get(offset).copied());
        let (line, column) = self.location_of(offset);
        ParseError::new(
            code,
            line,
            column,
            offset,
            found,
            expected,
            detail,
        )
    }

    /// Read a string token starting at the opening quote.
    ///
    /// Bytes are copied verbatim. A backslash directly followed by a quote
    /// is copied as the two-byte pair and does not close the string; every
    /// other backslash is an ordinary byte.
    pub fn read_string(&mut self) -> ParseResult<String> {
        // Consume opening quote
        self.bump();
        let start = self.pos;

        loop {
            match self.peek() {
                None => {
                    return Err(self.error(
                        ErrorCode::E112_UnterminatedString,
                        &["\""],
                        "string has no closing quote",
                    ))
                }
                Some(b'"') => break,
                Some(b'\\') if self.peek_at(1) == Some(b'"') => {
                    self.bump();
                    self.bump();
                }
                Some(b'\n') => self.newline(),
                Some(_) => self.bump(),
            }

            let len = (self.pos - start) as u64;
            if len > self.limits.max_string_length {
                return Err(self.error(
                    ErrorCode::E142_StringTooLong(len, self.limits.max_string_length),
                    &[],
                    "string too long",
                ));
            }
        }

        let raw = &self.input[start..self.pos];
        let text = std::str::from_utf8(raw).map_err(|e| {
            self.error_at(
                start + e.valid_up_to(),
                ErrorCode::E113_InvalidUtf8,
                &[],
                "string is not valid UTF-8",
            )
        })?;
        let text = text.to_string();

        // Consume closing quote
        self.bump();
        Ok(text)
    }

    /// Read a number token.
    ///
    /// Grammar: optional leading `-`, digits, at most one `.` before the
    /// exponent, at most one `e`/`E`, and a sign only directly after the
    /// exponent marker. The first byte outside the grammar is left under the
    /// cursor for the caller.
    pub fn read_number(&mut self) -> ParseResult<Number> {
        let start = self.pos;
        let mut digits = 0usize;
        let mut dot = false;
        let mut exponent = false;
        let mut prev: Option<u8> = None;

        while let Some(b) = self.peek() {
            let ok = match b {
                b'0'..=b'9' => {
                    digits += 1;
                    true
                }
                b'.' => {
                    let ok = !dot && !exponent && prev.is_some_and(|p| p.is_ascii_digit());
                    dot = true;
                    ok
                }
                b'e' | b'E' => {
                    let ok = !exponent && prev.is_some_and(|p| p.is_ascii_digit());
                    exponent = true;
                    ok
                }
                b'+' => matches!(prev, Some(b'e' | b'E')),
                b'-' => matches!(prev, None | Some(b'e' | b'E')),
                _ => break,
            };
            if !ok {
                return Err(self.error(
                    ErrorCode::E110_InvalidNumber,
                    NUMBER_EXPECTED,
                    "malformed number",
                ));
            }
            prev = Some(b);
            self.bump();
        }

        // A number cannot stop on a sign, an exponent marker or a dot
        if digits == 0 || matches!(prev, Some(b'-' | b'+' | b'e' | b'E' | b'.')) {
            return Err(self.error(
                ErrorCode::E110_InvalidNumber,
                NUMBER_EXPECTED,
                "incomplete number",
            ));
        }

        let lexeme = std::str::from_utf8(&self.input[start..self.pos]).map_err(|_| {
            self.error_at(start, ErrorCode::E110_InvalidNumber, NUMBER_EXPECTED, "malformed number")
        })?;

        if !dot && !exponent {
            if let Ok(n) = lexeme.parse::<i64>() {
                return Ok(Number::Int(n));
            }
        }

        match lexeme.parse::<f64>() {
            Ok(d) if d.is_finite() => Ok(Number::Double(d)),
            _ => Err(self.error_at(
                start,
                ErrorCode::E110_InvalidNumber,
                NUMBER_EXPECTED,
                "number out of range",
            )),
        }
    }

    /// Read the 'true' literal.
    pub fn read_true(&mut self) -> ParseResult<bool> {
        self.expect_bytes(b"true", BOOLEAN_EXPECTED)?;
        Ok(true)
    }

    /// Read the 'false' literal.
    pub fn read_false(&mut self) -> ParseResult<bool> {
        self.expect_bytes(b"false", BOOLEAN_EXPECTED)?;
        Ok(false)
    }

    /// Read the 'null' literal.
    pub fn read_null(&mut self) -> ParseResult<()> {
        self.expect_bytes(b"null", NULL_EXPECTED)
    }

    /// Expect specific bytes at the current position.
    fn expect_bytes(&mut self, literal: &[u8], expected: &[&'static str]) -> ParseResult<()> {
        for &b in literal {
            if self.peek() != Some(b) {
                return Err(self.error(
                    ErrorCode::E111_InvalidLiteral,
                    expected,
                    "invalid literal",
                ));
            }
            self.bump();
        }
        Ok(())
    }

    /// Skip a `//` or `/* */` comment starting at the first slash.
    ///
    /// A line comment stops before its `\n` so the caller counts the line.
    /// It may also run to the end of input.
    pub fn skip_comment(&mut self) -> ParseResult<()> {
        self.bump();
        match self.peek() {
            Some(b'/') => {
                while let Some(b) = self.peek() {
                    if b == b'\n' {
                        break;
                    }
                    self.bump();
                }
                Ok(())
            }
            Some(b'*') => {
                self.bump();
                loop {
                    match self.peek() {
                        None => {
                            return Err(self.error(
                                ErrorCode::E114_UnterminatedComment,
                                &["*/"],
                                "comment has no end statement",
                            ))
                        }
                        Some(b'*') if self.peek_at(1) == Some(b'/') => {
                            self.bump();
                            self.bump();
                            return Ok(());
                        }
                        Some(b'\n') => self.newline(),
                        Some(_) => self.bump(),
                    }
                }
            }
            _ => Err(self.error(
                ErrorCode::E115_InvalidComment,
                &["/", "*"],
                "invalid comment",
            )),
        }
    }
}
