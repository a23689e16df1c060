//! Navigation and coercion over [`JsonValue`] trees.
//!
//! Everything here is total: subscripts and paths land on `Null` instead of
//! panicking, and the `*_value` accessors substitute a fixed zero value
//! (`""`, `0`, `0.0`, `false`, empty collection) when a coercion is
//! undefined. The `as_*` and `get`/`try_path` forms are the strict
//! counterparts, returning `None` instead of a default.
//!
//! # Key design decisions
//!
//! - **`Null` sentinel subscripts**: `Index<&str>` and `Index<usize>`
//!   borrow a static `Null` on any miss, so chains like `v["a"][2]["b"]`
//!   degrade silently past the first missing segment instead of failing.
//! - **Navigation never unwraps scalars**: subscripting `Null` or a scalar
//!   yields `Null`, same as a missing key.
//! - **Uniform bool rule**: an integer coerces to `true` exactly when it is
//!   `> 0`; zero and negatives are `false`. Strings and doubles never
//!   coerce to bool.

use std::ops::Index;

use crate::stringify::format_double;
use crate::value::{JsonMap, JsonValue};

static NULL: JsonValue = JsonValue::Null;
static EMPTY_MAP: JsonMap = JsonMap::new();

/// One step of a parsed path: an object key or an array index.
enum Segment<'a> {
    Key(&'a str),
    Index(usize),
}

/// Split `"a.b[2].c"` into segments. `None` for anything malformed: the
/// empty path, an empty key (`"a..b"`), a non-numeric or negative index,
/// or trailing text after a `]`.
fn segments(path: &str) -> Option<Vec<Segment<'_>>> {
    if path.is_empty() {
        return None;
    }
    let mut out = Vec::new();
    for part in path.split('.') {
        let (name, mut rest) = match part.find('[') {
            Some(pos) => (&part[..pos], &part[pos..]),
            None => (part, ""),
        };
        if name.is_empty() && rest.is_empty() {
            return None;
        }
        if !name.is_empty() {
            out.push(Segment::Key(name));
        }
        while !rest.is_empty() {
            if !rest.starts_with('[') {
                return None;
            }
            let end = rest.find(']')?;
            let digits = &rest[1..end];
            // `parse` accepts a leading `+`; indexes are bare digits only.
            if !digits.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            let index: usize = digits.parse().ok()?;
            out.push(Segment::Index(index));
            rest = &rest[end + 1..];
        }
    }
    Some(out)
}

impl JsonValue {
    /// Strict key lookup: `Some` only on an `Object` that has `key`.
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        match self {
            JsonValue::Object(map) => map.get(key),
            _ => None,
        }
    }

    /// Strict index lookup: `Some` only on an `Array` with `index < len`.
    pub fn get_index(&self, index: usize) -> Option<&JsonValue> {
        match self {
            JsonValue::Array(items) => items.get(index),
            _ => None,
        }
    }

    /// Total chained lookup over a dotted path with `[n]` index groups.
    ///
    /// `v.path("a.b[2].c")` is `&v["a"]["b"][2]["c"]`: any missing key,
    /// out-of-range index, wrong variant, or malformed segment (empty key,
    /// `[x]`, `[-1]`) makes the result `Null`. Keys containing `.` or `[`
    /// cannot be addressed this way; use [`JsonValue::get`] for those.
    ///
    /// # Examples
    ///
    /// ```
    /// use laxjson_core::parse_str;
    ///
    /// let doc = parse_str(r#"{"weather":[{"id":520}]}"#);
    /// assert_eq!(doc.path("weather[0].id").int_value(), 520);
    /// assert!(doc.path("weather[3].id").is_null());
    /// ```
    pub fn path(&self, path: &str) -> &JsonValue {
        self.try_path(path).unwrap_or(&NULL)
    }

    /// Strict form of [`JsonValue::path`]: `None` where `path` would give
    /// `Null` because of a missing or malformed segment, `Some` for a
    /// present value, including a present `Null`.
    pub fn try_path(&self, path: &str) -> Option<&JsonValue> {
        let mut current = self;
        for segment in segments(path)? {
            current = match segment {
                Segment::Key(key) => current.get(key)?,
                Segment::Index(index) => current.get_index(index)?,
            };
        }
        Some(current)
    }

    // -----------------------------------------------------------------------
    // Coercion accessors
    // -----------------------------------------------------------------------

    /// Borrowed string, identity only (no coercion). See
    /// [`JsonValue::as_string`] for the coercing form.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// String coercion: a stored string as-is, a stored number formatted as
    /// text (`Int(42)` → `"42"`, `Double(3.0)` → `"3.0"`). Everything else
    /// is `None`.
    pub fn as_string(&self) -> Option<String> {
        match self {
            JsonValue::String(s) => Some(s.clone()),
            JsonValue::Int(n) => Some(n.to_string()),
            JsonValue::Double(d) => Some(format_double(*d)),
            _ => None,
        }
    }

    /// [`JsonValue::as_string`] or `""`.
    pub fn string_value(&self) -> String {
        self.as_string().unwrap_or_default()
    }

    /// Integer coercion: a stored int as-is, a stored double truncated
    /// toward zero (saturating at the `i64` range, NaN → 0), a stored
    /// string parsed as an integer literal (`"42"` → 42, `"3.7"` → `None`).
    pub fn as_int(&self) -> Option<i64> {
        match self {
            JsonValue::Int(n) => Some(*n),
            JsonValue::Double(d) => Some(*d as i64),
            JsonValue::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// [`JsonValue::as_int`] or `0`.
    pub fn int_value(&self) -> i64 {
        self.as_int().unwrap_or(0)
    }

    /// Double coercion: a stored double as-is, a stored int widened, a
    /// stored string parsed as a float literal.
    pub fn as_double(&self) -> Option<f64> {
        match self {
            JsonValue::Double(d) => Some(*d),
            JsonValue::Int(n) => Some(*n as f64),
            JsonValue::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// [`JsonValue::as_double`] or `0.0`.
    pub fn double_value(&self) -> f64 {
        self.as_double().unwrap_or(0.0)
    }

    /// Bool coercion: a stored bool as-is, a stored int via `value > 0`
    /// (zero and negatives are `false`). Strings and doubles never coerce.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonValue::Bool(b) => Some(*b),
            JsonValue::Int(n) => Some(*n > 0),
            _ => None,
        }
    }

    /// [`JsonValue::as_bool`] or `false`.
    pub fn bool_value(&self) -> bool {
        self.as_bool().unwrap_or(false)
    }

    /// The elements, only when the variant is exactly `Array`.
    pub fn as_array(&self) -> Option<&[JsonValue]> {
        match self {
            JsonValue::Array(items) => Some(items),
            _ => None,
        }
    }

    /// [`JsonValue::as_array`] or the empty slice.
    pub fn array_value(&self) -> &[JsonValue] {
        self.as_array().unwrap_or(&[])
    }

    /// The entries, only when the variant is exactly `Object`.
    pub fn as_object(&self) -> Option<&JsonMap> {
        match self {
            JsonValue::Object(map) => Some(map),
            _ => None,
        }
    }

    /// [`JsonValue::as_object`] or the empty map.
    pub fn object_value(&self) -> &JsonMap {
        self.as_object().unwrap_or(&EMPTY_MAP)
    }
}

/// Total subscript by key: the mapped value on an `Object` that has `key`,
/// otherwise `Null`. Never panics.
impl Index<&str> for JsonValue {
    type Output = JsonValue;

    fn index(&self, key: &str) -> &JsonValue {
        self.get(key).unwrap_or(&NULL)
    }
}

/// Total subscript by position: the element on an `Array` with
/// `index < len`, otherwise `Null`. Never panics.
impl Index<usize> for JsonValue {
    type Output = JsonValue;

    fn index(&self, index: usize) -> &JsonValue {
        self.get_index(index).unwrap_or(&NULL)
    }
}
