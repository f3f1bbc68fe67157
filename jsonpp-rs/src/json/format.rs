//! Text rendering of [`Value`] trees.
//!
//! Output is accepted back by the parser and yields an equal tree for
//! anything the parser produced. Strings are written back exactly as they
//! are stored, since they already hold their escape sequences.
//!
//! A root that was never assigned renders as the empty string, which parses
//! back to [`Value::None`]; a nested one renders as `null`.

use std::fmt;

use super::types::{Number, Value};

/// Render a value as compact text with no insignificant whitespace.
pub fn to_compact_string(value: &Value) -> String {
    let mut output = String::new();
    if !value.is_none() {
        write_compact(&mut output, value);
    }
    output
}

/// Render a value with one member or element per line, indented by
/// `indent` spaces per level.
pub fn to_pretty_string(value: &Value, indent: usize) -> String {
    let mut output = String::new();
    if !value.is_none() {
        write_pretty(&mut output, value, indent, 0);
    }
    output
}

fn write_compact(output: &mut String, value: &Value) {
    match value {
        Value::Array(items) => {
            output.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    output.push(',');
                }
                write_compact(output, item);
            }
            output.push(']');
        }
        Value::Object(obj) => {
            output.push('{');
            for (i, (key, item)) in obj.iter().enumerate() {
                if i > 0 {
                    output.push(',');
                }
                write_string(output, key);
                output.push(':');
                write_compact(output, item);
            }
            output.push('}');
        }
        scalar => write_scalar(output, scalar),
    }
}

/// Write `value` into `output` as if it started at nesting level `depth`.
///
/// The first line is not indented; the caller owns the cursor position.
pub fn write_pretty(output: &mut String, value: &Value, indent: usize, depth: usize) {
    match value {
        Value::Array(items) if !items.is_empty() => {
            output.push_str("[\n");
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    output.push_str(",\n");
                }
                push_indent(output, indent, depth + 1);
                write_pretty(output, item, indent, depth + 1);
            }
            output.push('\n');
            push_indent(output, indent, depth);
            output.push(']');
        }
        Value::Object(obj) if !obj.is_empty() => {
            output.push_str("{\n");
            for (i, (key, item)) in obj.iter().enumerate() {
                if i > 0 {
                    output.push_str(",\n");
                }
                push_indent(output, indent, depth + 1);
                write_string(output, key);
                output.push_str(": ");
                write_pretty(output, item, indent, depth + 1);
            }
            output.push('\n');
            push_indent(output, indent, depth);
            output.push('}');
        }
        other => write_compact(output, other),
    }
}

fn push_indent(output: &mut String, indent: usize, depth: usize) {
    for _ in 0..indent * depth {
        output.push(' ');
    }
}

fn write_scalar(output: &mut String, value: &Value) {
    match value {
        Value::None | Value::Null => output.push_str("null"),
        Value::Bool(true) => output.push_str("true"),
        Value::Bool(false) => output.push_str("false"),
        Value::Number(n) => write_number(output, n),
        Value::String(s) => write_string(output, s),
        Value::Array(_) | Value::Object(_) => write_compact(output, value),
    }
}

/// Numbers keep their shape: integers print bare, floats always carry a
/// fraction or an exponent.
fn write_number(output: &mut String, number: &Number) {
    match number {
        Number::Int(n) => output.push_str(&n.to_string()),
        Number::Float(f) if f.is_finite() => output.push_str(&format!("{:?}", f)),
        Number::Double(d) if d.is_finite() => output.push_str(&format!("{:?}", d)),
        _ => output.push_str("null"),
    }
}

/// Write stored string content between quotes.
///
/// A bare `"` (one not already preceded by a backslash) gets a backslash so
/// that strings built in code stay readable.
fn write_string(output: &mut String, s: &str) {
    output.push('"');
    let mut prev = None;
    for ch in s.chars() {
        if ch == '"' && prev != Some('\\') {
            output.push('\\');
        }
        output.push(ch);
        prev = Some(ch);
    }
    output.push('"');
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_compact_string(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::object::Object;
    use crate::json::parser::parse;

    fn sample() -> Value {
        let mut inner = Object::new();
        inner.insert("ok", true);
        let mut obj = Object::new();
        obj.insert("n", 1i64);
        obj.insert("list", vec![Value::from(2.5f64), Value::Null, Value::from(inner)]);
        obj.insert("empty", Object::new());
        Value::from(obj)
    }

    #[test]
    fn test_compact() {
        assert_eq!(
            to_compact_string(&sample()),
            r#"{"n":1,"list":[2.5,null,{"ok":true}],"empty":{}}"#
        );
    }

    #[test]
    fn test_pretty() {
        let expected = "{\n  \"n\": 1,\n  \"list\": [\n    2.5,\n    null,\n    {\n      \"ok\": true\n    }\n  ],\n  \"empty\": {}\n}";
        assert_eq!(to_pretty_string(&sample(), 2), expected);
    }

    #[test]
    fn test_write_pretty_at_depth() {
        let mut out = String::from("x = ");
        write_pretty(&mut out, &Value::from(vec![Value::from(1i64)]), 4, 1);
        assert_eq!(out, "x = [\n        1\n    ]");
    }

    #[test]
    fn test_doubles_keep_fraction() {
        assert_eq!(to_compact_string(&Value::from(vec![Value::from(300.0f64)])), "[300.0]");
        assert_eq!(to_compact_string(&Value::from(vec![Value::from(f64::NAN)])), "[null]");
    }

    #[test]
    fn test_none_rendering() {
        assert_eq!(to_compact_string(&Value::None), "");
        assert_eq!(to_compact_string(&Value::from(vec![Value::None])), "[null]");
    }

    #[test]
    fn test_strings_written_raw() {
        let value = Value::from(vec![Value::from(r#"a\"b\n"#), Value::from(r#"say "hi""#)]);
        assert_eq!(to_compact_string(&value), r#"["a\"b\n","say \"hi\""]"#);
    }

    #[test]
    fn test_display_is_compact() {
        assert_eq!(sample().to_string(), to_compact_string(&sample()));
    }

    #[test]
    fn test_reparse_gives_equal_tree() {
        let input = br#"{"a": [1, -2.5, 1e+5, true, false, null, "s\"q"], "b": {"c": {}}, "d": []}"#;
        let value = parse(input).unwrap();
        assert_eq!(parse(to_compact_string(&value).as_bytes()).unwrap(), value);
        assert_eq!(parse(to_pretty_string(&value, 3).as_bytes()).unwrap(), value);
    }
}
