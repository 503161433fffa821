//! Real-time feed messages (server -> client)

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Kinds of events pushed over the session feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    /// Initiative order changed
    ReceiveOrderUpdate,
    /// The session owner ended the session
    SessionEnded,
    /// A player joined the session
    PlayerJoined,
    /// Unknown event type for forward compatibility
    ///
    /// When deserializing an unknown variant, this variant is used instead of
    /// failing. Allows older clients to gracefully handle new event types.
    #[serde(other)]
    Unknown,
}

/// One message from the session feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedMessage {
    pub event_type: EventType,
    #[serde(default)]
    pub payload: serde_json::Value,
}

/// Error decoding a feed frame
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Malformed feed message: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl FeedMessage {
    pub fn new(event_type: EventType) -> Self {
        Self {
            event_type,
            payload: serde_json::Value::Null,
        }
    }

    /// Decode a text frame.
    pub fn parse(text: &str) -> Result<Self, FeedError> {
        Ok(serde_json::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_event_without_payload() {
        let msg = FeedMessage::parse(r#"{"event_type":"ReceiveOrderUpdate"}"#).unwrap();
        assert_eq!(msg.event_type, EventType::ReceiveOrderUpdate);
        assert!(msg.payload.is_null());
    }

    #[test]
    fn unknown_event_types_do_not_fail() {
        let msg =
            FeedMessage::parse(r#"{"event_type":"DiceRolled","payload":{"total":17}}"#).unwrap();
        assert_eq!(msg.event_type, EventType::Unknown);
        assert_eq!(msg.payload["total"], 17);
    }

    #[test]
    fn malformed_frames_are_errors() {
        assert!(matches!(
            FeedMessage::parse("not json"),
            Err(FeedError::Malformed(_))
        ));
        assert!(FeedMessage::parse(r#"{"payload":1}"#).is_err());
    }
}
