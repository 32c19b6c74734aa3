//! fsvars-core: property name normalization for FullStory-style destinations.
//!
//! Turns a flat [`PropertyBag`] into one whose keys follow the destination's
//! naming grammar: a type suffix (`_str`, `_real`, `_dates`, …) inferred from
//! the value, optional camel-casing and character sanitization of the rest of
//! the name. Keys that already end in a known suffix keep it verbatim.
//!
//! # Architecture
//!
//! ```text
//! key ──► transform (camelCase, strip) ──► suffix (infer) ──► key'
//! ```
//!
//! The engine is synchronous, allocation-light and holds no shared state.

pub mod config;
pub mod error;
pub mod infer;
pub mod normalizer;
pub mod suffix;
pub mod transform;
pub mod types;

pub use error::CoreError;
pub use infer::{infer_type, infer_type_with, DateDetection};
pub use normalizer::{normalize_names, NormalizeOptions, Normalizer};
pub use suffix::{has_known_suffix, known_suffix_of, split_known_suffix, type_suffix_key};
pub use transform::{transform_name, NameTransform};
pub use types::{PropertyBag, PropertyValue, TypeSuffix};
