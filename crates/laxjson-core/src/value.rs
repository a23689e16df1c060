//! The JSON value model: a closed tagged union plus an insertion-ordered map.
//!
//! `JsonValue` mirrors the JSON data model but separates integers from
//! doubles (accessors preserve the distinction) and uses [`JsonMap`], a
//! `Vec<(String, JsonValue)>` underneath, for objects so key order survives
//! a parse/serialize round trip without an IndexMap dependency.
//!
//! Values are built once (by the converter in [`crate::convert`] or the
//! `From` constructors here) and read through the navigation and coercion
//! accessors in [`crate::access`]. Nothing here mutates a finished tree;
//! [`JsonMap::insert`] exists for constructing synthetic values.

/// One node of a JSON-shaped value tree. Exactly one variant is active;
/// `Null` doubles as the in-band miss/failure marker for the whole
/// navigation and coercion algebra.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum JsonValue {
    /// Absence or failure marker, and the universal safe fallback.
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Double(f64),
    String(String),
    Array(Vec<JsonValue>),
    /// String-keyed entries in insertion order.
    Object(JsonMap),
}

impl JsonValue {
    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, JsonValue::Bool(_))
    }

    pub fn is_int(&self) -> bool {
        matches!(self, JsonValue::Int(_))
    }

    pub fn is_double(&self) -> bool {
        matches!(self, JsonValue::Double(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, JsonValue::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, JsonValue::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, JsonValue::Object(_))
    }

    /// Short name of the active variant, for messages and debugging.
    pub fn type_name(&self) -> &'static str {
        match self {
            JsonValue::Null => "null",
            JsonValue::Bool(_) => "bool",
            JsonValue::Int(_) => "int",
            JsonValue::Double(_) => "double",
            JsonValue::String(_) => "string",
            JsonValue::Array(_) => "array",
            JsonValue::Object(_) => "object",
        }
    }
}

/// An insertion-ordered string→[`JsonValue`] mapping with unique keys.
///
/// Lookup is a linear scan; JSON objects are small enough that this beats
/// carrying a map dependency, and the entry order is exactly document order
/// when the map comes out of the parser.
///
/// Inserting an existing key replaces the value in place, keeping the key's
/// original position.
#[derive(Debug, Clone, Default)]
pub struct JsonMap {
    entries: Vec<(String, JsonValue)>,
}

impl JsonMap {
    pub const fn new() -> Self {
        JsonMap {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a key. `None` when absent.
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Insert or replace. Returns the previous value if the key existed;
    /// a replaced key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Option<JsonValue> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => Some(std::mem::replace(&mut entry.1, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &JsonValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &JsonValue> {
        self.entries.iter().map(|(_, v)| v)
    }
}

/// Structural equality: same keys mapped to equal values. Insertion order
/// matters for round-tripping, not for comparison.
impl PartialEq for JsonMap {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self.entries.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl IntoIterator for JsonMap {
    type Item = (String, JsonValue);
    type IntoIter = std::vec::IntoIter<(String, JsonValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Later duplicates replace earlier entries, as in the deserializer.
impl FromIterator<(String, JsonValue)> for JsonMap {
    fn from_iter<I: IntoIterator<Item = (String, JsonValue)>>(iter: I) -> Self {
        let mut map = JsonMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<T> From<Vec<(&str, T)>> for JsonMap
where
    JsonValue: From<T>,
{
    fn from(entries: Vec<(&str, T)>) -> Self {
        entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), JsonValue::from(v)))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Constructors from native values
// ---------------------------------------------------------------------------

impl From<bool> for JsonValue {
    fn from(value: bool) -> Self {
        JsonValue::Bool(value)
    }
}

/// `From<integer>` for every width that losslessly fits `i64`.
macro_rules! impl_from_int {
    ($($t:ty),+ $(,)?) => {
        $(
            impl From<$t> for JsonValue {
                fn from(value: $t) -> Self {
                    JsonValue::Int(i64::from(value))
                }
            }
        )+
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f64> for JsonValue {
    fn from(value: f64) -> Self {
        JsonValue::Double(value)
    }
}

impl From<f32> for JsonValue {
    fn from(value: f32) -> Self {
        JsonValue::Double(f64::from(value))
    }
}

impl From<&str> for JsonValue {
    fn from(value: &str) -> Self {
        JsonValue::String(value.to_string())
    }
}

impl From<String> for JsonValue {
    fn from(value: String) -> Self {
        JsonValue::String(value)
    }
}

impl From<JsonMap> for JsonValue {
    fn from(map: JsonMap) -> Self {
        JsonValue::Object(map)
    }
}

impl<T> From<Vec<T>> for JsonValue
where
    JsonValue: From<T>,
{
    fn from(items: Vec<T>) -> Self {
        JsonValue::Array(items.into_iter().map(JsonValue::from).collect())
    }
}

/// `None` becomes `Null`.
impl<T> From<Option<T>> for JsonValue
where
    JsonValue: From<T>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => JsonValue::from(inner),
            None => JsonValue::Null,
        }
    }
}
