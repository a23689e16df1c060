//! Conversion between the deserializer's untyped tree and [`JsonValue`],
//! plus the parse entry points.
//!
//! Lexical JSON parsing is delegated entirely to `serde_json` (built with
//! `preserve_order`, so object key order survives). This module walks the
//! resulting `serde_json::Value` tree depth-first, bottom-up, into the
//! typed model, and walks it back out for interop.
//!
//! # Key design decisions
//!
//! - **Number splitting**: a `Number` becomes `Int` when it is exactly
//!   representable as `i64`, otherwise `Double` via `as_f64` (this is how
//!   a `u64` above `i64::MAX` comes through, approximately). A number
//!   representable as neither (possible only under non-default serde_json
//!   configurations) degrades to `Null`.
//! - **Container roots**: the lenient entry points accept only object or
//!   array document roots, like the reference consumers expect; well-formed
//!   scalar roots and malformed input both yield `Null`. The strict entry
//!   points accept any well-formed root and surface syntax errors.
//! - **Recursion depth**: conversion recurses to the input's nesting depth.
//!   Input arriving through the entry points is bounded by serde_json's own
//!   recursion limit (128 levels by default); synthetic `Value` trees are
//!   the caller's responsibility.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::{Map, Value};

use crate::error::ParseError;
use crate::value::JsonValue;

/// Parse JSON text leniently: malformed input, and well-formed input whose
/// root is not an object or array, yield `Null`. Never fails.
///
/// # Examples
///
/// ```
/// use laxjson_core::parse_str;
///
/// assert_eq!(parse_str(r#"{"ok":true}"#)["ok"].bool_value(), true);
/// assert!(parse_str("{ invalid").is_null());
/// assert!(parse_str("42").is_null());
/// ```
pub fn parse_str(text: &str) -> JsonValue {
    match serde_json::from_str::<Value>(text) {
        Ok(root @ (Value::Object(_) | Value::Array(_))) => JsonValue::from(root),
        _ => JsonValue::Null,
    }
}

/// [`parse_str`] over raw bytes: the bytes go straight to the deserializer,
/// and any failure (including invalid UTF-8) yields `Null`.
pub fn parse_slice(bytes: &[u8]) -> JsonValue {
    match serde_json::from_slice::<Value>(bytes) {
        Ok(root @ (Value::Object(_) | Value::Array(_))) => JsonValue::from(root),
        _ => JsonValue::Null,
    }
}

/// Strict parse: surfaces the deserializer's syntax error instead of
/// folding it into `Null`, and accepts any well-formed root including
/// scalars (`"42"` parses to `Int(42)` here, `Null` leniently).
///
/// # Errors
///
/// [`ParseError`] when the input is not well-formed JSON.
pub fn try_parse_str(text: &str) -> Result<JsonValue, ParseError> {
    Ok(JsonValue::from(serde_json::from_str::<Value>(text)?))
}

/// [`try_parse_str`] over raw bytes.
///
/// # Errors
///
/// [`ParseError`] when the input is not well-formed JSON.
pub fn try_parse_slice(bytes: &[u8]) -> Result<JsonValue, ParseError> {
    Ok(JsonValue::from(serde_json::from_slice::<Value>(bytes)?))
}

/// The recursive converter: untyped tree in, typed tree out.
impl From<Value> for JsonValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => JsonValue::Null,
            Value::Bool(b) => JsonValue::Bool(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    JsonValue::Int(i)
                } else if let Some(f) = n.as_f64() {
                    JsonValue::Double(f)
                } else {
                    JsonValue::Null
                }
            }
            Value::String(s) => JsonValue::String(s),
            Value::Array(items) => {
                JsonValue::Array(items.into_iter().map(JsonValue::from).collect())
            }
            Value::Object(map) => JsonValue::Object(
                map.into_iter()
                    .map(|(key, val)| (key, JsonValue::from(val)))
                    .collect(),
            ),
        }
    }
}

/// The inverse walk, for handing trees back to the serde_json ecosystem.
/// Non-finite doubles have no `serde_json::Number` form and become `Null`.
impl From<JsonValue> for Value {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(b),
            JsonValue::Int(n) => Value::Number(n.into()),
            JsonValue::Double(d) => serde_json::Number::from_f64(d)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            JsonValue::String(s) => Value::String(s),
            JsonValue::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            JsonValue::Object(map) => {
                let mut out = Map::new();
                for (key, val) in map {
                    out.insert(key, Value::from(val));
                }
                Value::Object(out)
            }
        }
    }
}

impl From<&JsonValue> for Value {
    fn from(value: &JsonValue) -> Self {
        Value::from(value.clone())
    }
}

/// Structural comparison against the deserializer's tree, mainly for tests
/// and interop assertions. Numbers compare through the same split the
/// converter applies, so `Int(1)` matches the integer number `1` and
/// `Double(1.5)` matches `1.5`.
impl PartialEq<Value> for JsonValue {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (JsonValue::Null, Value::Null) => true,
            (JsonValue::Bool(a), Value::Bool(b)) => a == b,
            (JsonValue::Int(a), Value::Number(n)) => n.as_i64() == Some(*a),
            (JsonValue::Double(a), Value::Number(n)) => n.as_f64() == Some(*a),
            (JsonValue::String(a), Value::String(b)) => a == b,
            (JsonValue::Array(a), Value::Array(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x == y)
            }
            (JsonValue::Object(a), Value::Object(b)) => {
                a.len() == b.len()
                    && a.iter().all(|(k, v)| b.get(k).is_some_and(|bv| v == bv))
            }
            _ => false,
        }
    }
}

impl PartialEq<JsonValue> for Value {
    fn eq(&self, other: &JsonValue) -> bool {
        other == self
    }
}

/// Serializes through the serde data model, so a `JsonValue` nests inside
/// derived types and works with `serde_json::to_string_pretty` directly.
impl Serialize for JsonValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            JsonValue::Null => serializer.serialize_unit(),
            JsonValue::Bool(b) => serializer.serialize_bool(*b),
            JsonValue::Int(n) => serializer.serialize_i64(*n),
            JsonValue::Double(d) => serializer.serialize_f64(*d),
            JsonValue::String(s) => serializer.serialize_str(s),
            JsonValue::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            JsonValue::Object(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, val) in map.iter() {
                    out.serialize_entry(key, val)?;
                }
                out.end()
            }
        }
    }
}

/// Deserializes by way of `serde_json::Value`, then the converter above.
impl<'de> Deserialize<'de> for JsonValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(JsonValue::from)
    }
}
