//! Domain-specific assertion macros for fsvars harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear *which* normalization invariant was violated.

use fsvars_core::{known_suffix_of, PropertyBag};

// ---------------------------------------------------------------------------
// Key assertions
// ---------------------------------------------------------------------------

/// Assert that a bag has exactly the given keys, in order.
///
/// ```rust
/// assert_keys!(bag, ["plan_str", "seats_real"]);
/// ```
#[macro_export]
macro_rules! assert_keys {
    ($bag:expr, [$($key:expr),* $(,)?]) => {{
        let bag: &fsvars_core::PropertyBag = &$bag;
        let actual: Vec<&str> = bag.keys().collect();
        let expected: Vec<&str> = vec![$($key),*];
        pretty_assertions::assert_eq!(actual, expected, "normalized keys differ");
    }};
}

/// Assert that a bag contains a key holding the expected JSON value.
///
/// ```rust
/// assert_has_key!(bag, "plan_str", "pro");
/// ```
#[macro_export]
macro_rules! assert_has_key {
    ($bag:expr, $key:expr, $($value:tt)+) => {{
        let bag: &fsvars_core::PropertyBag = &$bag;
        let key: &str = $key;
        let expected = serde_json::json!($($value)+);
        match bag.get(key) {
            Some(actual) => {
                let actual = serde_json::to_value(actual).expect("value serializes");
                if actual != expected {
                    panic!(
                        "assert_has_key! failed:\n  bag[{:?}]\n  expected: {}\n  actual:   {}",
                        key, expected, actual
                    );
                }
            }
            None => panic!(
                "assert_has_key! failed: key {:?} not found.\n  Available keys: {:?}",
                key,
                bag.keys().collect::<Vec<_>>()
            ),
        }
    }};
}

// ---------------------------------------------------------------------------
// Invariant helpers
// ---------------------------------------------------------------------------

/// Assert that every key of a bag carries a known type suffix.
pub fn assert_all_suffixed(bag: &PropertyBag) {
    let missing: Vec<&str> = bag.keys().filter(|k| known_suffix_of(k).is_none()).collect();
    assert!(
        missing.is_empty(),
        "keys without a known type suffix: {missing:?}"
    );
}
