//! Turns decoded [`Event`]s into payloads ready to forward as a request body.
//!
//! Track properties go through the configured [`Normalizer`]. Identify
//! traits are always camel-cased; reserved traits (`email`, `name` by
//! default) are lifted out first and, when they hold strings, forwarded as
//! the dedicated `email` / `display_name` fields.

use fsvars_core::{NormalizeOptions, Normalizer, PropertyBag, PropertyValue};
use serde::Serialize;

use crate::event::Event;

/// A normalized payload for one event.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Prepared {
    Track {
        event: String,
        #[serde(rename = "userId", skip_serializing_if = "Option::is_none")]
        user_id: Option<String>,
        properties: PropertyBag,
    },
    Identify {
        uid: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        email: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        display_name: Option<String>,
        properties: PropertyBag,
    },
    Delete {
        uid: String,
    },
}

#[derive(Debug, Clone)]
pub struct Preparer {
    track: Normalizer,
    identify: Normalizer,
    reserved_traits: Vec<String>,
}

impl Preparer {
    pub fn new(options: NormalizeOptions, reserved_traits: Vec<String>) -> Self {
        let identify = NormalizeOptions {
            camel_case: true,
            ..options
        };
        Self {
            track: Normalizer::new(options),
            identify: Normalizer::new(identify),
            reserved_traits,
        }
    }

    pub fn prepare(&self, event: Event) -> Prepared {
        match event {
            Event::Track {
                event,
                user_id,
                properties,
            } => Prepared::Track {
                event,
                user_id,
                properties: self.track.normalize(properties.unwrap_or_default()),
            },
            Event::Identify { user_id, traits } => {
                let mut traits = traits.unwrap_or_default();
                let mut email = None;
                let mut display_name = None;
                for reserved in &self.reserved_traits {
                    let taken = traits.remove(reserved);
                    match (reserved.as_str(), taken) {
                        ("email", Some(PropertyValue::String(s))) => email = Some(s),
                        ("name", Some(PropertyValue::String(s))) => display_name = Some(s),
                        _ => {}
                    }
                }
                Prepared::Identify {
                    uid: user_id,
                    email,
                    display_name,
                    properties: self.identify.normalize(traits),
                }
            }
            Event::Delete { user_id } => Prepared::Delete { uid: user_id },
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
