//! fsvars-feeds: event feed sources for fsvars.
//!
//! Each feed reads newline-delimited JSON from stdin or a file and yields
//! either raw [`fsvars_core::PropertyBag`]s or decoded [`Event`]s. The
//! [`Preparer`] turns events into normalized payloads.

mod error;
pub mod event;
pub mod prepare;
pub mod source;

pub use error::FeedError;
pub use event::Event;
pub use prepare::{Prepared, Preparer};
pub use source::{Feed, FeedKind};
