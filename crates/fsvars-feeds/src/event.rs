//! Analytics events as decoded from one NDJSON line.

use fsvars_core::PropertyBag;
use serde::Deserialize;

/// A normalized analytics event.
///
/// ```json
/// {"type":"track","event":"Order Completed","properties":{"total":42.5}}
/// {"type":"identify","userId":"u-1","traits":{"email":"a@b.c","plan":"pro"}}
/// {"type":"delete","userId":"u-1"}
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Event {
    Track {
        event: String,
        #[serde(default, rename = "userId")]
        user_id: Option<String>,
        #[serde(default)]
        properties: Option<PropertyBag>,
    },
    Identify {
        #[serde(rename = "userId")]
        user_id: String,
        #[serde(default)]
        traits: Option<PropertyBag>,
    },
    Delete {
        #[serde(rename = "userId")]
        user_id: String,
    },
}

impl Event {
    pub fn kind(&self) -> &'static str {
        match self {
            Event::Track { .. } => "track",
            Event::Identify { .. } => "identify",
            Event::Delete { .. } => "delete",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fsvars_core::PropertyValue;

    #[test]
    fn decodes_track() {
        let ev: Event = serde_json::from_str(
            r#"{"type":"track","event":"Signed Up","properties":{"plan":"pro","seats":3}}"#,
        )
        .unwrap();
        match ev {
            Event::Track { event, user_id, properties } => {
                assert_eq!(event, "Signed Up");
                assert_eq!(user_id, None);
                let props = properties.unwrap();
                assert_eq!(props.get("seats"), Some(&PropertyValue::Int(3)));
            }
            other => panic!("expected track, got {other:?}"),
        }
    }

    #[test]
    fn decodes_identify_without_traits() {
        let ev: Event = serde_json::from_str(r#"{"type":"identify","userId":"u-1"}"#).unwrap();
        assert_eq!(
            ev,
            Event::Identify {
                user_id: "u-1".to_string(),
                traits: None
            }
        );
        assert_eq!(ev.kind(), "identify");
    }

    #[test]
    fn decodes_delete() {
        let ev: Event = serde_json::from_str(r#"{"type":"delete","userId":"u-9"}"#).unwrap();
        assert_eq!(ev.kind(), "delete");
    }

    #[test]
    fn rejects_unknown_type() {
        assert!(serde_json::from_str::<Event>(r#"{"type":"page","name":"Home"}"#).is_err());
    }
}
