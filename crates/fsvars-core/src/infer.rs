//! Type inference: maps a [`PropertyValue`] to exactly one [`TypeSuffix`].
//!
//! Inference walks an ordered `(suffix, predicate)` table and returns the
//! first match:
//!
//! ```text
//! str → bool → real → int → date → strs → bools → reals → ints → dates → objs → obj
//! ```
//!
//! The order is load-bearing. `real` accepts every finite number, so whole
//! numbers infer to `real` and `int` is never produced; `_int` keys written by
//! the caller are still recognized and preserved.
//!
//! Array predicates need a non-empty array whose every element satisfies the
//! element predicate. An empty array therefore matches nothing and has no
//! inferable type, as do mixed arrays and arrays of arrays.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Deserialize;

use crate::types::{PropertyValue, TypeSuffix};

/// Largest absolute epoch-millisecond value accepted as a date.
const MAX_EPOCH_MILLIS: f64 = 8.64e15;

/// How eagerly a value is recognized as a date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateDetection {
    /// Genuine dates, plus numbers (epoch milliseconds) and strings that
    /// parse to a valid date.
    #[default]
    Permissive,
    /// Only genuine [`PropertyValue::Date`] values.
    Strict,
}

type Predicate = fn(&PropertyValue, DateDetection) -> bool;

const TYPE_MATCHERS: [(TypeSuffix, Predicate); 12] = [
    (TypeSuffix::Str, is_str),
    (TypeSuffix::Bool, is_bool),
    (TypeSuffix::Real, is_real),
    (TypeSuffix::Int, is_int),
    (TypeSuffix::Date, is_date),
    (TypeSuffix::Strs, are_strs),
    (TypeSuffix::Bools, are_bools),
    (TypeSuffix::Reals, are_reals),
    (TypeSuffix::Ints, are_ints),
    (TypeSuffix::Dates, are_dates),
    (TypeSuffix::Objs, are_objs),
    (TypeSuffix::Obj, is_obj),
];

/// Infer the type suffix for `value` with permissive date detection.
pub fn infer_type(value: &PropertyValue) -> Option<TypeSuffix> {
    infer_type_with(value, DateDetection::default())
}

/// Infer the type suffix for `value`, or `None` when no predicate matches.
pub fn infer_type_with(value: &PropertyValue, dates: DateDetection) -> Option<TypeSuffix> {
    TYPE_MATCHERS
        .iter()
        .find(|(_, matches)| matches(value, dates))
        .map(|(suffix, _)| *suffix)
}

// ---------------------------------------------------------------------------
// Element predicates
// ---------------------------------------------------------------------------

fn is_str(value: &PropertyValue, _: DateDetection) -> bool {
    matches!(value, PropertyValue::String(_))
}

fn is_bool(value: &PropertyValue, _: DateDetection) -> bool {
    matches!(value, PropertyValue::Bool(_))
}

fn is_real(value: &PropertyValue, _: DateDetection) -> bool {
    value.as_f64().is_some()
}

fn is_int(value: &PropertyValue, _: DateDetection) -> bool {
    value.as_f64().is_some_and(|n| n.fract() == 0.0)
}

fn is_date(value: &PropertyValue, dates: DateDetection) -> bool {
    match (value, dates) {
        (PropertyValue::Date(_), _) => true,
        (_, DateDetection::Strict) => false,
        (PropertyValue::String(s), DateDetection::Permissive) => parses_as_date(s),
        (v, DateDetection::Permissive) => v.as_f64().is_some_and(|ms| ms.abs() <= MAX_EPOCH_MILLIS),
    }
}

fn is_obj(value: &PropertyValue, _: DateDetection) -> bool {
    matches!(value, PropertyValue::Object(_))
}

// ---------------------------------------------------------------------------
// Homogeneous array predicates
// ---------------------------------------------------------------------------

fn every(value: &PropertyValue, dates: DateDetection, element: Predicate) -> bool {
    match value {
        PropertyValue::Array(items) => {
            !items.is_empty() && items.iter().all(|item| element(item, dates))
        }
        _ => false,
    }
}

fn are_strs(value: &PropertyValue, dates: DateDetection) -> bool {
    every(value, dates, is_str)
}

fn are_bools(value: &PropertyValue, dates: DateDetection) -> bool {
    every(value, dates, is_bool)
}

fn are_reals(value: &PropertyValue, dates: DateDetection) -> bool {
    every(value, dates, is_real)
}

fn are_ints(value: &PropertyValue, dates: DateDetection) -> bool {
    every(value, dates, is_int)
}

fn are_dates(value: &PropertyValue, dates: DateDetection) -> bool {
    every(value, dates, is_date)
}

fn are_objs(value: &PropertyValue, dates: DateDetection) -> bool {
    every(value, dates, is_obj)
}

// ---------------------------------------------------------------------------
// Date parsing
// ---------------------------------------------------------------------------

/// Whether `s` is a timestamp in one of the accepted textual forms.
pub fn parses_as_date(s: &str) -> bool {
    let s = s.trim();
    if s.is_empty() {
        return false;
    }
    DateTime::parse_from_rfc3339(s).is_ok()
        || DateTime::parse_from_rfc2822(s).is_ok()
        || NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
        || NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f").is_ok()
        || NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f").is_ok()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
