//! Normalizer: rewrites the keys of a [`PropertyBag`] into type-suffixed,
//! optionally camel-cased and sanitized names.
//!
//! Each entry is handled independently: the key is transformed (see
//! [`transform_name`]) and then suffixed. Whether a key already carries a
//! known suffix is decided before transforming, so sanitizing `plan_str!`
//! to `plan_str` cannot pass a bool off as a string. Values are moved
//! through untouched.
//!
//! # Collisions
//!
//! Two input keys can normalize to the same output key (`plan name` and
//! `plan-name` both camel-case to `planName_str`). The later entry silently
//! overwrites the earlier one and keeps the earlier position. Nothing is
//! reported to the caller beyond a `debug` trace event.

use crate::infer::{infer_type_with, DateDetection};
use crate::suffix::has_known_suffix;
use crate::transform::{transform_name, NameTransform};
use crate::types::PropertyBag;

/// Options controlling how property names are rewritten.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Camel-case the non-suffix part of each key.
    pub camel_case: bool,
    /// Strip characters outside `[A-Za-z0-9_]` from the non-suffix part.
    pub sanitize: bool,
    /// How eagerly values are recognized as dates.
    pub dates: DateDetection,
}

impl NormalizeOptions {
    pub fn camel_case() -> Self {
        Self {
            camel_case: true,
            ..Self::default()
        }
    }

    /// Transform list built from the options: camel-case first, then strip.
    pub fn transformations(&self) -> Vec<NameTransform> {
        let mut transforms = Vec::with_capacity(2);
        if self.camel_case {
            transforms.push(NameTransform::CamelCase);
        }
        if self.sanitize {
            transforms.push(NameTransform::StripDisallowed);
        }
        transforms
    }
}

/// Normalize every key of `bag`. An absent bag yields an empty one.
pub fn normalize_names(bag: Option<PropertyBag>, options: &NormalizeOptions) -> PropertyBag {
    match bag {
        Some(bag) => Normalizer::new(*options).normalize(bag),
        None => PropertyBag::new(),
    }
}

/// Reusable normalizer holding a fixed set of options.
#[derive(Debug, Clone)]
pub struct Normalizer {
    options: NormalizeOptions,
    transforms: Vec<NameTransform>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(NormalizeOptions::default())
    }
}

impl Normalizer {
    pub fn new(options: NormalizeOptions) -> Self {
        Self {
            transforms: options.transformations(),
            options,
        }
    }

    pub fn options(&self) -> &NormalizeOptions {
        &self.options
    }

    /// Normalize a single key for `value`.
    pub fn normalize_key(&self, key: &str, value: &crate::PropertyValue) -> String {
        let transformed = transform_name(key, &self.transforms);
        if has_known_suffix(key) {
            return transformed;
        }
        match infer_type_with(value, self.options.dates) {
            Some(suffix) => format!("{transformed}_{suffix}"),
            None => transformed,
        }
    }

    pub fn normalize(&self, bag: PropertyBag) -> PropertyBag {
        if bag.is_empty() {
            return bag;
        }
        let input_len = bag.len();
        let mut out = PropertyBag::with_capacity(input_len);
        for (key, value) in bag {
            let normalized = self.normalize_key(&key, &value);
            if out.insert(normalized.as_str(), value).is_some() {
                tracing::debug!(input_key = %key, output_key = %normalized, "normalized key collision, later entry wins");
            }
        }
        tracing::trace!(input_len, output_len = out.len(), "normalized property bag");
        out
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
