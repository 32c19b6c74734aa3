//! Test builders: ergonomic constructors for `PropertyBag` fixtures.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use chrono::{TimeZone, Utc};
use fsvars_core::{PropertyBag, PropertyValue};

// ---------------------------------------------------------------------------
// BagBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`PropertyBag`] test fixtures.
///
/// # Example
///
/// ```rust
/// let bag = BagBuilder::new()
///     .prop("plan", "pro")
///     .prop("seats", 3i64)
///     .undefined("gone")
///     .build();
/// ```
#[derive(Default)]
pub struct BagBuilder {
    bag: PropertyBag,
}

impl BagBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prop(mut self, key: &str, value: impl Into<PropertyValue>) -> Self {
        self.bag.insert(key, value);
        self
    }

    pub fn json(mut self, key: &str, value: serde_json::Value) -> Self {
        self.bag.insert(key, PropertyValue::from(value));
        self
    }

    pub fn undefined(mut self, key: &str) -> Self {
        self.bag.insert(key, PropertyValue::Undefined);
        self
    }

    pub fn date(mut self, key: &str) -> Self {
        self.bag.insert(key, fixed_date());
        self
    }

    pub fn build(self) -> PropertyBag {
        self.bag
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// A deterministic date value: 2024-01-15T10:00:00Z.
pub fn fixed_date() -> PropertyValue {
    PropertyValue::Date(
        Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0)
            .single()
            .expect("valid fixed date"),
    )
}

/// An opaque object value.
pub fn object() -> PropertyValue {
    PropertyValue::from(serde_json::json!({ "nested": { "deep": true } }))
}

/// Parse a JSON object literal into a bag.
pub fn bag_from_json(value: serde_json::Value) -> PropertyBag {
    match value {
        serde_json::Value::Object(map) => PropertyBag::from(map),
        other => panic!("bag_from_json expects an object, got {other}"),
    }
}
