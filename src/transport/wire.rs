//! Wire shapes of the chat protocol: outbound event names and payloads, and
//! decoding of inbound server events.
//!
//! Field names are snake_case per the server contract (`peer_id`, `group_id`,
//! `message_id`).

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::domain::events::ServerEvent;

/// Every event the client can emit. `typing`/`stop_typing` carry the active
/// target id in the `room` field regardless of mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundEvent {
    Join {
        room: String,
        username: String,
    },
    JoinPrivate {
        peer_id: String,
    },
    JoinPrivateGroup {
        group_id: String,
        username: String,
    },
    RoomMessage {
        room: String,
        username: String,
        msg: String,
    },
    PrivateMessage {
        username: String,
        peer: String,
        msg: String,
    },
    PrivateGroupMessage {
        group_id: String,
        username: String,
        msg: String,
    },
    Typing {
        username: String,
        room: String,
    },
    StopTyping {
        username: String,
        room: String,
    },
    MessageRead {
        message_id: String,
    },
}

impl OutboundEvent {
    pub fn name(&self) -> &'static str {
        match self {
            OutboundEvent::Join { .. } => "join",
            OutboundEvent::JoinPrivate { .. } => "join_private",
            OutboundEvent::JoinPrivateGroup { .. } => "join_private_group",
            OutboundEvent::RoomMessage { .. } => "room_message",
            OutboundEvent::PrivateMessage { .. } => "private_message",
            OutboundEvent::PrivateGroupMessage { .. } => "private_group_message",
            OutboundEvent::Typing { .. } => "typing",
            OutboundEvent::StopTyping { .. } => "stop_typing",
            OutboundEvent::MessageRead { .. } => "message_read",
        }
    }

    pub fn payload(&self) -> Value {
        match self {
            OutboundEvent::Join { room, username } => {
                json!({ "room": room, "username": username })
            }
            OutboundEvent::JoinPrivate { peer_id } => json!({ "peer_id": peer_id }),
            OutboundEvent::JoinPrivateGroup { group_id, username } => {
                json!({ "group_id": group_id, "username": username })
            }
            OutboundEvent::RoomMessage {
                room,
                username,
                msg,
            } => json!({ "room": room, "username": username, "msg": msg }),
            OutboundEvent::PrivateMessage {
                username,
                peer,
                msg,
            } => json!({ "username": username, "peer": peer, "msg": msg }),
            OutboundEvent::PrivateGroupMessage {
                group_id,
                username,
                msg,
            } => json!({ "group_id": group_id, "username": username, "msg": msg }),
            OutboundEvent::Typing { username, room } => {
                json!({ "username": username, "room": room })
            }
            OutboundEvent::StopTyping { username, room } => {
                json!({ "username": username, "room": room })
            }
            OutboundEvent::MessageRead { message_id } => json!({ "message_id": message_id }),
        }
    }

    pub fn into_frame(self) -> WireFrame {
        WireFrame {
            payload: self.payload(),
            event: self.name().to_owned(),
        }
    }
}

/// One named event frame as the connection layer carries it: emitted frames
/// go out through the transport, received frames come back in for decoding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WireFrame {
    pub event: String,
    pub payload: Value,
}

#[derive(Debug, Deserialize)]
struct MessagePayload {
    msg: String,
    #[serde(default)]
    message_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TypingPayload {
    username: String,
}

#[derive(Debug, Deserialize)]
struct ReadReceiptPayload {
    message_id: String,
    reader: String,
}

/// Decodes a named inbound event. Unknown names yield `None`; a malformed
/// payload for a known name is an error for the caller to log and drop.
pub fn decode(name: &str, payload: &Value) -> Result<Option<ServerEvent>, serde_json::Error> {
    let event = match name {
        "message" => {
            let body: MessagePayload = serde_json::from_value(payload.clone())?;
            Some(ServerEvent::Message {
                msg: body.msg,
                message_id: body.message_id,
            })
        }
        "typing" => {
            let body: TypingPayload = serde_json::from_value(payload.clone())?;
            Some(ServerEvent::Typing {
                username: body.username,
            })
        }
        // The server echoes the typist's username here; the indicator only
        // ever clears, so the payload is ignored.
        "stop_typing" => Some(ServerEvent::StopTyping),
        "message_read_receipt" => {
            let body: ReadReceiptPayload = serde_json::from_value(payload.clone())?;
            Some(ServerEvent::MessageReadReceipt {
                message_id: body.message_id,
                reader: body.reader,
            })
        }
        _ => None,
    };

    Ok(event)
}
