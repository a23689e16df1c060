//! Compact JSON text output for [`JsonValue`] trees.
//!
//! The writer is a straight recursive walk. Object keys emit in insertion
//! order, so a parse → stringify round trip reproduces the document's key
//! order. `Display` delegates to [`stringify`].

use std::fmt;

use crate::value::JsonValue;

/// Serialize a value as compact JSON text.
///
/// `Int` prints as plain decimal. `Double` keeps a fractional point for
/// whole floats (`3.0` stays `3.0`) so the int/double distinction survives
/// a reparse; extreme magnitudes print in exponent form, which reparses as
/// a double as well. Non-finite doubles have no JSON form and emit `null`.
pub fn stringify(value: &JsonValue) -> String {
    let mut out = String::new();
    write_value(&mut out, value);
    out
}

fn write_value(out: &mut String, value: &JsonValue) {
    match value {
        JsonValue::Null => out.push_str("null"),
        JsonValue::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        JsonValue::Int(n) => out.push_str(&n.to_string()),
        JsonValue::Double(d) => {
            if d.is_finite() {
                out.push_str(&format_double(*d));
            } else {
                out.push_str("null");
            }
        }
        JsonValue::String(s) => write_string(out, s),
        JsonValue::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(out, item);
            }
            out.push(']');
        }
        JsonValue::Object(map) => {
            out.push('{');
            for (i, (key, val)) in map.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_string(out, key);
                out.push(':');
                write_value(out, val);
            }
            out.push('}');
        }
    }
}

/// Write a JSON string literal with the required escapes. Control
/// characters without a short escape fall back to `\u00XX`.
fn write_string(out: &mut String, s: &str) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            c if c.is_control() => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

/// Format a double as text, keeping a fractional point for whole values
/// below `1e16` so `3.0` does not collapse to `3` (which would reparse as
/// an int). Other finite values take the serde_json writer's form, which
/// switches to exponent notation at extreme magnitudes; exponent forms
/// reparse as doubles too.
pub(crate) fn format_double(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{value:.1}")
    } else if value.is_finite() {
        serde_json::to_string(&value).unwrap_or_else(|_| value.to_string())
    } else {
        value.to_string()
    }
}

impl JsonValue {
    /// Compact JSON text; [`stringify`] as a method.
    pub fn to_json(&self) -> String {
        stringify(self)
    }
}

impl fmt::Display for JsonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&stringify(self))
    }
}
