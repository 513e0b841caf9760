//! Namespaced form events and their constructors.
//!
//! Every event tag is `<key>.<SUFFIX>`. Constructing events through
//! [`FormEvents`] keeps callers from hand-writing tags.

use super::values::FieldValues;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::Arc;

/// The four canonical form events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Change,
    Blur,
    Focus,
    Submit,
}

impl EventKind {
    pub const ALL: [EventKind; 4] = [
        EventKind::Change,
        EventKind::Blur,
        EventKind::Focus,
        EventKind::Submit,
    ];

    pub fn suffix(self) -> &'static str {
        match self {
            Self::Change => ".CHANGE",
            Self::Blur => ".BLUR",
            Self::Focus => ".FOCUS",
            Self::Submit => ".SUBMIT",
        }
    }

    /// Full event tag for the form namespaced under `key`.
    ///
    /// ```rust
    /// use formset::form::EventKind;
    ///
    /// assert_eq!(EventKind::Change.tag("loginForm"), "loginForm.CHANGE");
    /// ```
    pub fn tag(self, key: &str) -> String {
        format!("{key}{}", self.suffix())
    }

    /// Parse a tag back into a kind, if it belongs to `key`.
    pub fn from_tag(key: &str, tag: &str) -> Option<Self> {
        let suffix = tag.strip_prefix(key)?;
        Self::ALL.into_iter().find(|kind| kind.suffix() == suffix)
    }

    /// Kind named by the tag's suffix, whatever its key.
    pub fn from_suffix(tag: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| tag.len() > kind.suffix().len() && tag.ends_with(kind.suffix()))
    }
}

/// Event payload, flattened next to the `type` tag on the wire.
///
/// Decoding goes through [`FormEvent`], which picks the variant from the
/// tag suffix.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EventPayload<V> {
    /// Change and blur carry the field and its new value.
    Field { name: String, value: V },
    Focus { name: String },
    Submit { values: FieldValues<V> },
}

/// A tagged form event.
///
/// Serializes to `{ "type": "<key>.CHANGE", "name": ..., "value": ... }`
/// and the analogous shapes for blur, focus and submit.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FormEvent<V> {
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(flatten)]
    pub payload: EventPayload<V>,
}

impl<V> FormEvent<V> {
    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    /// Field name carried by change, blur and focus events.
    pub fn name(&self) -> Option<&str> {
        match &self.payload {
            EventPayload::Field { name, .. } | EventPayload::Focus { name } => Some(name),
            EventPayload::Submit { .. } => None,
        }
    }

    pub fn value(&self) -> Option<&V> {
        match &self.payload {
            EventPayload::Field { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn kind(&self, key: &str) -> Option<EventKind> {
        EventKind::from_tag(key, &self.event_type)
    }
}

/// Every payload field a wire event may carry.
#[derive(Deserialize)]
#[serde(bound(deserialize = "V: Deserialize<'de>"))]
struct WireEvent<V> {
    #[serde(rename = "type")]
    event_type: String,
    name: Option<String>,
    #[serde(default, deserialize_with = "present")]
    value: Option<V>,
    values: Option<FieldValues<V>>,
}

/// `Some` whenever the field is on the wire, even as `null`.
fn present<'de, D, V>(deserializer: D) -> Result<Option<V>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    V::deserialize(deserializer).map(Some)
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for FormEvent<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = WireEvent::<V>::deserialize(deserializer)?;
        let kind = EventKind::from_suffix(&wire.event_type).ok_or_else(|| {
            D::Error::custom(format!("unknown form event type `{}`", wire.event_type))
        })?;

        let payload = match kind {
            EventKind::Change | EventKind::Blur => EventPayload::Field {
                name: wire.name.ok_or_else(|| D::Error::missing_field("name"))?,
                value: wire.value.ok_or_else(|| D::Error::missing_field("value"))?,
            },
            EventKind::Focus => EventPayload::Focus {
                name: wire.name.ok_or_else(|| D::Error::missing_field("name"))?,
            },
            EventKind::Submit => EventPayload::Submit {
                values: wire.values.ok_or_else(|| D::Error::missing_field("values"))?,
            },
        };

        Ok(FormEvent {
            event_type: wire.event_type,
            payload,
        })
    }
}

/// Event constructors bound to one form's key.
///
/// # Example
///
/// ```rust
/// use formset::form::{EventPayload, FormEvents};
///
/// let events = FormEvents::new("loginForm");
/// let event = events.change("username", "ada".to_string());
///
/// assert_eq!(event.event_type(), "loginForm.CHANGE");
/// assert_eq!(
///     event.payload,
///     EventPayload::Field { name: "username".to_string(), value: "ada".to_string() }
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormEvents {
    key: Arc<str>,
}

impl FormEvents {
    pub fn new(key: impl Into<Arc<str>>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn change<V>(&self, name: impl Into<String>, value: V) -> FormEvent<V> {
        self.field_event(EventKind::Change, name.into(), value)
    }

    pub fn blur<V>(&self, name: impl Into<String>, value: V) -> FormEvent<V> {
        self.field_event(EventKind::Blur, name.into(), value)
    }

    pub fn focus<V>(&self, name: impl Into<String>) -> FormEvent<V> {
        FormEvent {
            event_type: EventKind::Focus.tag(&self.key),
            payload: EventPayload::Focus { name: name.into() },
        }
    }

    pub fn submit<V>(&self, values: FieldValues<V>) -> FormEvent<V> {
        FormEvent {
            event_type: EventKind::Submit.tag(&self.key),
            payload: EventPayload::Submit { values },
        }
    }

    fn field_event<V>(&self, kind: EventKind, name: String, value: V) -> FormEvent<V> {
        FormEvent {
            event_type: kind.tag(&self.key),
            payload: EventPayload::Field { name, value },
        }
    }
}
