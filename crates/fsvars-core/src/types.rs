//! Core types for fsvars-core.
//!
//! This module defines the data shared by every layer: the tagged
//! [`PropertyValue`], the insertion-ordered [`PropertyBag`] it lives in, and
//! the fixed [`TypeSuffix`] vocabulary appended to property names.

use chrono::{DateTime, SecondsFormat, Utc};
use indexmap::IndexMap;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ---------------------------------------------------------------------------
// PropertyValue
// ---------------------------------------------------------------------------

/// A single property value as supplied by the caller.
///
/// Objects are opaque: their contents are never inspected or renamed.
/// `Undefined` is never produced by JSON decoding; it lets callers express an
/// explicitly absent value.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Undefined,
    Null,
    String(String),
    Bool(bool),
    Int(i64),
    Real(f64),
    Date(DateTime<Utc>),
    Object(serde_json::Map<String, serde_json::Value>),
    Array(Vec<PropertyValue>),
}

impl PropertyValue {
    /// Finite numeric value, if this is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            PropertyValue::Int(n) => Some(*n as f64),
            PropertyValue::Real(n) if n.is_finite() => Some(*n),
            _ => None,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, PropertyValue::Undefined)
    }
}

impl From<serde_json::Value> for PropertyValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => PropertyValue::Null,
            Value::Bool(b) => PropertyValue::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => PropertyValue::Int(i),
                // u64 beyond i64::MAX and every fractional number.
                None => PropertyValue::Real(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => PropertyValue::String(s),
            Value::Array(items) => {
                PropertyValue::Array(items.into_iter().map(PropertyValue::from).collect())
            }
            Value::Object(map) => PropertyValue::Object(map),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::String(s.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        PropertyValue::String(s)
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        PropertyValue::Bool(b)
    }
}

impl From<i64> for PropertyValue {
    fn from(n: i64) -> Self {
        PropertyValue::Int(n)
    }
}

impl From<f64> for PropertyValue {
    fn from(n: f64) -> Self {
        PropertyValue::Real(n)
    }
}

impl From<DateTime<Utc>> for PropertyValue {
    fn from(d: DateTime<Utc>) -> Self {
        PropertyValue::Date(d)
    }
}

impl<T: Into<PropertyValue>> From<Vec<T>> for PropertyValue {
    fn from(items: Vec<T>) -> Self {
        PropertyValue::Array(items.into_iter().map(Into::into).collect())
    }
}

impl Serialize for PropertyValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            // Inside arrays; bags skip undefined entries entirely.
            PropertyValue::Undefined | PropertyValue::Null => serializer.serialize_unit(),
            PropertyValue::String(s) => serializer.serialize_str(s),
            PropertyValue::Bool(b) => serializer.serialize_bool(*b),
            PropertyValue::Int(n) => serializer.serialize_i64(*n),
            PropertyValue::Real(n) if n.is_finite() => serializer.serialize_f64(*n),
            PropertyValue::Real(_) => serializer.serialize_unit(),
            PropertyValue::Date(d) => {
                serializer.serialize_str(&d.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
            PropertyValue::Object(map) => map.serialize(serializer),
            PropertyValue::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for PropertyValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(PropertyValue::from)
    }
}

// ---------------------------------------------------------------------------
// PropertyBag
// ---------------------------------------------------------------------------

/// Flat, insertion-ordered mapping of property names to values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyBag {
    entries: IndexMap<String, PropertyValue>,
}

impl PropertyBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Insert an entry. An existing key keeps its position and has its value
    /// replaced; the previous value is returned.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> Option<PropertyValue> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Remove an entry, preserving the order of the remaining ones.
    pub fn remove(&mut self, key: &str) -> Option<PropertyValue> {
        self.entries.shift_remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl IntoIterator for PropertyBag {
    type Item = (String, PropertyValue);
    type IntoIter = indexmap::map::IntoIter<String, PropertyValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Into<String>, V: Into<PropertyValue>> FromIterator<(K, V)> for PropertyBag {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut bag = PropertyBag::new();
        for (k, v) in iter {
            bag.insert(k, v);
        }
        bag
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for PropertyBag {
    fn from(map: serde_json::Map<String, serde_json::Value>) -> Self {
        map.into_iter().collect()
    }
}

impl Serialize for PropertyBag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let defined = self.entries.iter().filter(|(_, v)| !v.is_undefined());
        let mut map = serializer.serialize_map(None)?;
        for (k, v) in defined {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for PropertyBag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        IndexMap::<String, PropertyValue>::deserialize(deserializer)
            .map(|entries| PropertyBag { entries })
    }
}

// ---------------------------------------------------------------------------
// TypeSuffix
// ---------------------------------------------------------------------------

/// Type suffix appended to a property name, e.g. `plan_str` or `seats_real`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
#[serde(rename_all = "lowercase")]
pub enum TypeSuffix {
    Str,
    Bool,
    Real,
    Int,
    Date,
    Strs,
    Bools,
    Reals,
    Ints,
    Dates,
    Objs,
    Obj,
}

impl TypeSuffix {
    /// Every known suffix in declaration order, which is also the order
    /// inference tries them in.
    pub const ALL: [TypeSuffix; 12] = [
        TypeSuffix::Str,
        TypeSuffix::Bool,
        TypeSuffix::Real,
        TypeSuffix::Int,
        TypeSuffix::Date,
        TypeSuffix::Strs,
        TypeSuffix::Bools,
        TypeSuffix::Reals,
        TypeSuffix::Ints,
        TypeSuffix::Dates,
        TypeSuffix::Objs,
        TypeSuffix::Obj,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TypeSuffix::Str => "str",
            TypeSuffix::Bool => "bool",
            TypeSuffix::Real => "real",
            TypeSuffix::Int => "int",
            TypeSuffix::Date => "date",
            TypeSuffix::Strs => "strs",
            TypeSuffix::Bools => "bools",
            TypeSuffix::Reals => "reals",
            TypeSuffix::Ints => "ints",
            TypeSuffix::Dates => "dates",
            TypeSuffix::Objs => "objs",
            TypeSuffix::Obj => "obj",
        }
    }

    /// Whether this suffix names an array type.
    pub fn is_plural(self) -> bool {
        matches!(
            self,
            TypeSuffix::Strs
                | TypeSuffix::Bools
                | TypeSuffix::Reals
                | TypeSuffix::Ints
                | TypeSuffix::Dates
                | TypeSuffix::Objs
        )
    }
}

impl std::fmt::Display for TypeSuffix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TypeSuffix {
    type Err = UnknownSuffix;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::suffix::lookup(s).ok_or_else(|| UnknownSuffix(s.to_string()))
    }
}

/// Returned when parsing a token that is not in the suffix vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown type suffix: {0:?}")]
pub struct UnknownSuffix(pub String);

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn json_numbers_split_into_int_and_real() {
        assert_eq!(PropertyValue::from(json!(5)), PropertyValue::Int(5));
        assert_eq!(PropertyValue::from(json!(1.23)), PropertyValue::Real(1.23));
        assert_eq!(
            PropertyValue::from(json!(u64::MAX)),
            PropertyValue::Real(u64::MAX as f64)
        );
    }

    #[test]
    fn json_strings_are_never_promoted_to_dates() {
        assert_eq!(
            PropertyValue::from(json!("2024-01-15T10:00:00Z")),
            PropertyValue::String("2024-01-15T10:00:00Z".to_string())
        );
    }

    #[test]
    fn bag_preserves_insertion_order() {
        let bag: PropertyBag = [("zeta", 1i64), ("alpha", 2), ("mid", 3)].into_iter().collect();
        assert_eq!(bag.keys().collect::<Vec<_>>(), vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn bag_serialization_skips_undefined_entries() {
        let mut bag = PropertyBag::new();
        bag.insert("gone", PropertyValue::Undefined);
        bag.insert("kept", PropertyValue::Null);
        bag.insert(
            "list",
            PropertyValue::Array(vec![PropertyValue::Undefined, PropertyValue::Int(1)]),
        );
        let out = serde_json::to_value(&bag).unwrap();
        assert_eq!(out, json!({ "kept": null, "list": [null, 1] }));
    }

    #[test]
    fn dates_serialize_as_rfc3339_millis() {
        let d = Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap();
        let out = serde_json::to_value(PropertyValue::Date(d)).unwrap();
        assert_eq!(out, json!("2024-01-15T10:00:00.000Z"));
    }

    #[test]
    fn bag_deserializes_from_json_object() {
        let bag: PropertyBag = serde_json::from_str(r#"{"b": true, "a": [1, 2]}"#).unwrap();
        assert_eq!(bag.get("b"), Some(&PropertyValue::Bool(true)));
        assert_eq!(
            bag.get("a"),
            Some(&PropertyValue::Array(vec![PropertyValue::Int(1), PropertyValue::Int(2)]))
        );
        assert_eq!(bag.keys().collect::<Vec<_>>(), vec!["b", "a"]);
    }

    #[test]
    fn suffix_display_round_trips_through_from_str() {
        for suffix in TypeSuffix::ALL {
            assert_eq!(suffix.to_string().parse::<TypeSuffix>(), Ok(suffix));
        }
        assert!("string".parse::<TypeSuffix>().is_err());
    }
}
