//! Suffix detection and preservation.
//!
//! A key "has a known suffix" when the token after its last underscore is in
//! the [`TypeSuffix`] vocabulary. Known suffixes are authoritative: a key that
//! already carries one is never re-suffixed, even when the suffix disagrees
//! with the value.

use std::borrow::Cow;

use crate::infer::{infer_type_with, DateDetection};
use crate::types::{PropertyValue, TypeSuffix};

static KNOWN_SUFFIXES: phf::Map<&'static str, TypeSuffix> = phf::phf_map! {
    "str" => TypeSuffix::Str,
    "bool" => TypeSuffix::Bool,
    "real" => TypeSuffix::Real,
    "int" => TypeSuffix::Int,
    "date" => TypeSuffix::Date,
    "strs" => TypeSuffix::Strs,
    "bools" => TypeSuffix::Bools,
    "reals" => TypeSuffix::Reals,
    "ints" => TypeSuffix::Ints,
    "dates" => TypeSuffix::Dates,
    "obj" => TypeSuffix::Obj,
    "objs" => TypeSuffix::Objs,
};

/// Look up a bare token (no underscore) in the suffix vocabulary.
pub(crate) fn lookup(token: &str) -> Option<TypeSuffix> {
    KNOWN_SUFFIXES.get(token).copied()
}

/// The known suffix at the end of `key`, if any.
///
/// `"plan_str"` yields `Str`; `"plan"`, `"plan_string"` and `"str"` yield
/// `None`.
pub fn known_suffix_of(key: &str) -> Option<TypeSuffix> {
    split_known_suffix(key).1
}

pub fn has_known_suffix(key: &str) -> bool {
    known_suffix_of(key).is_some()
}

/// Split `key` into its base and known suffix.
///
/// When no known suffix is present the whole key is returned as the base.
pub fn split_known_suffix(key: &str) -> (&str, Option<TypeSuffix>) {
    match key.rsplit_once('_') {
        Some((base, token)) => match lookup(token) {
            Some(suffix) => (base, Some(suffix)),
            None => (key, None),
        },
        None => (key, None),
    }
}

/// Append the inferred type suffix to `key` using permissive date detection.
pub fn type_suffix_key<'a>(key: &'a str, value: &PropertyValue) -> Cow<'a, str> {
    type_suffix_key_with(key, value, DateDetection::default())
}

/// Append the inferred type suffix to `key`.
///
/// Returns `key` untouched when it already has a known suffix or when no type
/// can be inferred for `value`.
pub fn type_suffix_key_with<'a>(
    key: &'a str,
    value: &PropertyValue,
    dates: DateDetection,
) -> Cow<'a, str> {
    if has_known_suffix(key) {
        return Cow::Borrowed(key);
    }
    match infer_type_with(value, dates) {
        Some(suffix) => Cow::Owned(format!("{key}_{suffix}")),
        None => Cow::Borrowed(key),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
