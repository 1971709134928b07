//! Typed ARI events.
//!
//! An inbound message is a JSON object whose `type` field selects the variant.
//! [`Event::parse`] normalizes the message, picks the [`EventType`] and extracts
//! the variant's fields, including nested resource snapshots. A message either
//! yields a complete event or an [`EventError`]; the parser keeps no state, so
//! one bad message never affects the next.
//!
//! Some variants are identifiable: [`Event::event_id`] returns
//! `{type}_{resource id}` for them and `None` for the rest.

mod bridge;
mod channel;
mod endpoint;
mod recording;

pub use bridge::{BridgeCreated, BridgeDestroyed, BridgeVideoSourceChanged};
pub use channel::{ChannelCreated, ChannelDestroyed, ChannelHangupRequest, StasisEnd, StasisStart};
pub use endpoint::PeerStatusChange;
pub use recording::{RecordingFailed, RecordingFinished, RecordingStarted};

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::EventError;
use crate::payload::Payload;

/// Discriminant of a supported event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    BridgeCreated,
    BridgeDestroyed,
    BridgeVideoSourceChanged,
    ChannelCreated,
    ChannelDestroyed,
    ChannelHangupRequest,
    PeerStatusChange,
    RecordingStarted,
    RecordingFinished,
    RecordingFailed,
    StasisStart,
    StasisEnd,
}

impl EventType {
    pub const ALL: &'static [EventType] = &[
        EventType::BridgeCreated,
        EventType::BridgeDestroyed,
        EventType::BridgeVideoSourceChanged,
        EventType::ChannelCreated,
        EventType::ChannelDestroyed,
        EventType::ChannelHangupRequest,
        EventType::PeerStatusChange,
        EventType::RecordingStarted,
        EventType::RecordingFinished,
        EventType::RecordingFailed,
        EventType::StasisStart,
        EventType::StasisEnd,
    ];

    /// The wire spelling of the discriminant.
    pub fn as_str(self) -> &'static str {
        match self {
            EventType::BridgeCreated => "BridgeCreated",
            EventType::BridgeDestroyed => "BridgeDestroyed",
            EventType::BridgeVideoSourceChanged => "BridgeVideoSourceChanged",
            EventType::ChannelCreated => "ChannelCreated",
            EventType::ChannelDestroyed => "ChannelDestroyed",
            EventType::ChannelHangupRequest => "ChannelHangupRequest",
            EventType::PeerStatusChange => "PeerStatusChange",
            EventType::RecordingStarted => "RecordingStarted",
            EventType::RecordingFinished => "RecordingFinished",
            EventType::RecordingFailed => "RecordingFailed",
            EventType::StasisStart => "StasisStart",
            EventType::StasisEnd => "StasisEnd",
        }
    }
}

impl FromStr for EventType {
    type Err = EventError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        EventType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == tag)
            .ok_or_else(|| EventError::UnknownVariant(tag.to_string()))
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Variant-specific contents of an event.
#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    BridgeCreated(BridgeCreated),
    BridgeDestroyed(BridgeDestroyed),
    BridgeVideoSourceChanged(BridgeVideoSourceChanged),
    ChannelCreated(ChannelCreated),
    ChannelDestroyed(ChannelDestroyed),
    ChannelHangupRequest(ChannelHangupRequest),
    PeerStatusChange(PeerStatusChange),
    RecordingStarted(RecordingStarted),
    RecordingFinished(RecordingFinished),
    RecordingFailed(RecordingFailed),
    StasisStart(StasisStart),
    StasisEnd(StasisEnd),
}

impl EventKind {
    /// Extract the fields of `event_type` from `payload`.
    pub fn extract(event_type: EventType, payload: &Payload) -> Result<Self, EventError> {
        let tag = event_type.as_str();
        let kind = match event_type {
            EventType::BridgeCreated => EventKind::BridgeCreated(payload.extract(tag)?),
            EventType::BridgeDestroyed => EventKind::BridgeDestroyed(payload.extract(tag)?),
            EventType::BridgeVideoSourceChanged => {
                EventKind::BridgeVideoSourceChanged(payload.extract(tag)?)
            }
            EventType::ChannelCreated => EventKind::ChannelCreated(payload.extract(tag)?),
            EventType::ChannelDestroyed => EventKind::ChannelDestroyed(payload.extract(tag)?),
            EventType::ChannelHangupRequest => {
                EventKind::ChannelHangupRequest(payload.extract(tag)?)
            }
            EventType::PeerStatusChange => EventKind::PeerStatusChange(payload.extract(tag)?),
            EventType::RecordingStarted => EventKind::RecordingStarted(payload.extract(tag)?),
            EventType::RecordingFinished => EventKind::RecordingFinished(payload.extract(tag)?),
            EventType::RecordingFailed => EventKind::RecordingFailed(payload.extract(tag)?),
            EventType::StasisStart => EventKind::StasisStart(payload.extract(tag)?),
            EventType::StasisEnd => EventKind::StasisEnd(payload.extract(tag)?),
        };
        Ok(kind)
    }

    pub fn event_type(&self) -> EventType {
        match self {
            EventKind::BridgeCreated(_) => EventType::BridgeCreated,
            EventKind::BridgeDestroyed(_) => EventType::BridgeDestroyed,
            EventKind::BridgeVideoSourceChanged(_) => EventType::BridgeVideoSourceChanged,
            EventKind::ChannelCreated(_) => EventType::ChannelCreated,
            EventKind::ChannelDestroyed(_) => EventType::ChannelDestroyed,
            EventKind::ChannelHangupRequest(_) => EventType::ChannelHangupRequest,
            EventKind::PeerStatusChange(_) => EventType::PeerStatusChange,
            EventKind::RecordingStarted(_) => EventType::RecordingStarted,
            EventKind::RecordingFinished(_) => EventType::RecordingFinished,
            EventKind::RecordingFailed(_) => EventType::RecordingFailed,
            EventKind::StasisStart(_) => EventType::StasisStart,
            EventKind::StasisEnd(_) => EventType::StasisEnd,
        }
    }

    /// Id of the one resource that identifies this event, if the variant has one.
    pub fn identity(&self) -> Option<&str> {
        match self {
            EventKind::BridgeCreated(e) => Some(e.bridge.id()),
            EventKind::BridgeDestroyed(e) => Some(e.bridge.id()),
            EventKind::BridgeVideoSourceChanged(e) => Some(e.bridge.id()),
            EventKind::ChannelCreated(e) => Some(e.channel.id()),
            EventKind::ChannelDestroyed(e) => Some(e.channel.id()),
            EventKind::ChannelHangupRequest(e) => Some(e.channel.id()),
            // An endpoint/peer pair has no single canonical id
            EventKind::PeerStatusChange(_) => None,
            EventKind::RecordingStarted(e) => Some(e.recording.name()),
            EventKind::RecordingFinished(e) => Some(e.recording.name()),
            EventKind::RecordingFailed(e) => Some(e.recording.name()),
            EventKind::StasisStart(e) => Some(e.channel.id()),
            EventKind::StasisEnd(e) => Some(e.channel.id()),
        }
    }
}

/// Fields every ARI message may carry.
#[derive(Debug, Deserialize)]
struct Envelope {
    application: Option<String>,
    timestamp: Option<String>,
    asterisk_id: Option<String>,
}

/// One parsed notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    kind: EventKind,
    application: Option<String>,
    timestamp: Option<String>,
    asterisk_id: Option<String>,
    payload: Payload,
}

impl Event {
    /// Parse a raw JSON message.
    pub fn parse(text: &str) -> Result<Self, EventError> {
        Self::from_message(Payload::parse("event", text)?)
    }

    /// Parse an already-decoded JSON message.
    pub fn from_value(value: Value) -> Result<Self, EventError> {
        Self::from_message(Payload::normalize("event", value)?)
    }

    /// Build from a message that carries its own `type` field.
    pub fn from_message(payload: Payload) -> Result<Self, EventError> {
        let tag = payload
            .event_type()
            .ok_or(EventError::MissingDiscriminant)?
            .to_string();
        Self::from_payload(&tag, payload)
    }

    /// Build the variant named by `tag` from `payload`.
    ///
    /// `tag` wins over any `type` field inside `payload`.
    pub fn from_payload(tag: &str, payload: Payload) -> Result<Self, EventError> {
        let event_type: EventType = tag.parse()?;
        let kind = EventKind::extract(event_type, &payload)?;
        let envelope: Envelope = payload.extract(tag)?;

        let event = Self {
            kind,
            application: envelope.application,
            timestamp: envelope.timestamp,
            asterisk_id: envelope.asterisk_id,
            payload,
        };
        let event_id = event.event_id();
        debug!(
            event_type = tag,
            event_id = event_id.as_deref().unwrap_or("-"),
            "Parsed ARI event"
        );
        Ok(event)
    }

    pub fn event_type(&self) -> EventType {
        self.kind.event_type()
    }

    pub fn kind(&self) -> &EventKind {
        &self.kind
    }

    pub fn into_kind(self) -> EventKind {
        self.kind
    }

    /// Name of the Stasis application the event was delivered to.
    pub fn application(&self) -> Option<&str> {
        self.application.as_deref()
    }

    pub fn timestamp(&self) -> Option<&str> {
        self.timestamp.as_deref()
    }

    pub fn asterisk_id(&self) -> Option<&str> {
        self.asterisk_id.as_deref()
    }

    /// The normalized message the event was built from.
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// `{type}_{resource id}` for identifiable variants, `None` otherwise.
    pub fn event_id(&self) -> Option<String> {
        self.kind
            .identity()
            .map(|id| format!("{}_{}", self.event_type().as_str(), id))
    }
}

/// Parse newline-delimited JSON messages, one result per non-blank line.
///
/// A failure is reported for its own line only; decoding continues.
pub fn decode_events<I, S>(lines: I) -> impl Iterator<Item = Result<Event, EventError>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines.into_iter().filter_map(|line| {
        let line = line.as_ref();
        if line.trim().is_empty() {
            return None;
        }

        let result = Event::parse(line);
        if let Err(e) = &result {
            debug!(error = %e, "Failed to decode ARI event");
        }
        Some(result)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_channel_destroyed_example() {
        let event = Event::from_value(json!({
            "type": "ChannelDestroyed",
            "cause": 16,
            "cause_txt": "Normal Clearing",
            "channel": {"id": "1234.1"}
        }))
        .unwrap();

        let EventKind::ChannelDestroyed(destroyed) = event.kind() else {
            panic!("expected ChannelDestroyed, got {:?}", event.event_type());
        };
        assert_eq!(destroyed.cause, 16);
        assert_eq!(destroyed.cause_txt, "Normal Clearing");
        assert_eq!(event.event_id().as_deref(), Some("ChannelDestroyed_1234.1"));
    }

    #[test]
    fn test_event_id_is_deterministic() {
        let event = Event::from_value(json!({
            "type": "BridgeDestroyed",
            "bridge": {"id": "b-1"}
        }))
        .unwrap();
        assert_eq!(event.event_id(), event.event_id());
        assert_eq!(event.event_id().as_deref(), Some("BridgeDestroyed_b-1"));
    }

    #[test]
    fn test_event_id_ignores_unrelated_optional_fields() {
        let first = Event::from_value(json!({
            "type": "BridgeVideoSourceChanged",
            "bridge": {"id": "b-7"},
            "application": "demo"
        }))
        .unwrap();
        let second = Event::from_value(json!({
            "type": "BridgeVideoSourceChanged",
            "bridge": {"id": "b-7", "name": "renamed", "video_mode": "sfu"},
            "old_video_source_id": "1234.9",
            "timestamp": "2024-03-01T10:00:00.000+0000"
        }))
        .unwrap();

        assert_ne!(first, second);
        assert_eq!(first.event_id(), second.event_id());
    }

    #[test]
    fn test_peer_status_change_has_no_identity() {
        let event = Event::from_value(json!({
            "type": "PeerStatusChange",
            "endpoint": {"technology": "PJSIP", "resource": "alice"},
            "peer": {"peer_status": "Reachable"}
        }))
        .unwrap();
        assert_eq!(event.event_type(), EventType::PeerStatusChange);
        assert_eq!(event.event_id(), None);
    }

    #[test]
    fn test_missing_nested_resource_is_malformed_and_isolated() {
        let err = Event::from_value(json!({
            "type": "ChannelDestroyed",
            "cause": 16,
            "cause_txt": "Normal Clearing"
        }))
        .unwrap_err();
        assert!(matches!(
            err,
            EventError::MalformedPayload { ref event_type, .. } if event_type == "ChannelDestroyed"
        ));

        let next = Event::from_value(json!({
            "type": "BridgeDestroyed",
            "bridge": {"id": "b-2"}
        }))
        .unwrap();
        assert_eq!(next.event_id().as_deref(), Some("BridgeDestroyed_b-2"));
    }

    #[test]
    fn test_wrong_field_shape_is_malformed() {
        let err = Event::from_value(json!({
            "type": "ChannelDestroyed",
            "cause": "sixteen",
            "cause_txt": "Normal Clearing",
            "channel": {"id": "1234.1"}
        }))
        .unwrap_err();
        assert!(matches!(err, EventError::MalformedPayload { .. }));
    }

    #[test]
    fn test_unknown_variant_is_distinct() {
        let err = Event::from_value(json!({"type": "ChannelTeleported", "channel": {"id": "x"}}))
            .unwrap_err();
        assert!(matches!(err, EventError::UnknownVariant(ref tag) if tag == "ChannelTeleported"));
    }

    #[test]
    fn test_array_message_is_malformed() {
        let err = Event::parse(r#"[{"type": "StasisEnd", "channel": {"id": "1.1"}}]"#).unwrap_err();
        assert!(matches!(err, EventError::MalformedPayload { .. }), "got {err:?}");
    }

    #[test]
    fn test_missing_discriminant() {
        let err = Event::from_value(json!({"bridge": {"id": "b-1"}})).unwrap_err();
        assert!(matches!(err, EventError::MissingDiscriminant));
    }

    #[test]
    fn test_explicit_tag_overrides_payload_type() {
        let payload = Payload::normalize(
            "event",
            json!({"type": "BridgeCreated", "bridge": {"id": "b-3"}}),
        )
        .unwrap();
        let event = Event::from_payload("BridgeDestroyed", payload).unwrap();
        assert_eq!(event.event_id().as_deref(), Some("BridgeDestroyed_b-3"));
    }

    #[test]
    fn test_envelope_fields() {
        let event = Event::parse(
            r#"{"type": "StasisEnd", "application": "ivr", "asterisk_id": "00:11:22:33:44:55",
                "timestamp": "2024-03-01T10:00:00.000+0000", "channel": {"id": "1.1"}}"#,
        )
        .unwrap();
        assert_eq!(event.application(), Some("ivr"));
        assert_eq!(event.asterisk_id(), Some("00:11:22:33:44:55"));
        assert_eq!(event.timestamp(), Some("2024-03-01T10:00:00.000+0000"));
        assert_eq!(event.payload().event_type(), Some("StasisEnd"));
    }

    #[test]
    fn test_event_type_round_trip() {
        for event_type in EventType::ALL {
            assert_eq!(event_type.as_str().parse::<EventType>().unwrap(), *event_type);
        }
    }

    #[test]
    fn test_decode_events_continues_past_failures() {
        let input = [
            r#"{"type": "ChannelCreated", "channel": {"id": "1.1"}}"#,
            "",
            "{broken",
            r#"{"type": "Mystery"}"#,
            r#"{"type": "StasisEnd", "channel": {"id": "1.1"}}"#,
        ];

        let results: Vec<_> = decode_events(input).collect();
        assert_eq!(results.len(), 4);
        assert!(results[0].is_ok());
        assert!(matches!(results[1], Err(EventError::InvalidJson(_))));
        assert!(matches!(results[2], Err(EventError::UnknownVariant(_))));
        assert_eq!(
            results[3].as_ref().unwrap().event_id().as_deref(),
            Some("StasisEnd_1.1")
        );
    }
}
