use crate::json::value::JsonValue;
use std::fmt::Write;

const INDENT: &str = "  ";

/// Serializes a value tree to JSON text.
///
/// Object entries render in insertion order. Numbers always render with six
/// fractional digits regardless of input precision, so round trips truncate
/// beyond that. With `pretty` set, output gets newlines and two-space
/// indentation; compact output has no whitespace at all.
pub fn stringify(value: &JsonValue, pretty: bool) -> String {
    let mut out = String::new();
    write_value(value, pretty, 0, &mut out);
    out
}

fn write_value(value: &JsonValue, pretty: bool, depth: usize, out: &mut String) {
    match value {
        JsonValue::String(s) => write_string(s, out),
        JsonValue::Number(n) => {
            // write! to a String cannot fail
            let _ = write!(out, "{n:.6}");
        }
        JsonValue::Boolean(b) => out.push_str(if *b { "true" } else { "false" }),
        JsonValue::Null => out.push_str("null"),
        JsonValue::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                if pretty {
                    out.push('\n');
                    push_indent(depth + 1, out);
                }
                write_value(item, pretty, depth + 1, out);
            }
            if pretty && !items.is_empty() {
                out.push('\n');
                push_indent(depth, out);
            }
            out.push(']');
        }
        JsonValue::Object(entries) => {
            out.push('{');
            for (i, (key, entry)) in entries.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                if pretty {
                    out.push('\n');
                    push_indent(depth + 1, out);
                }
                write_string(key, out);
                out.push(':');
                if pretty {
                    out.push(' ');
                }
                write_value(entry, pretty, depth + 1, out);
            }
            if pretty && !entries.is_empty() {
                out.push('\n');
                push_indent(depth, out);
            }
            out.push('}');
        }
    }
}

fn push_indent(depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

/// Quote-wraps and escapes a string. Control characters below 0x20 that have
/// no short escape render as `\u00XX`.
fn write_string(s: &str, out: &mut String) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '/' => out.push_str("\\/"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
}
