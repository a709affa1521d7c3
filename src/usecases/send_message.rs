//! Outbound message sending.
//!
//! Validates composed text and emits the message event whose shape matches
//! the session's topology. The topology never changes anything else about the
//! send path.

use anyhow::Result;

use crate::{
    domain::chat::{ChatMode, SessionIdentity},
    transport::{wire::OutboundEvent, Transport},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    Sent,
    /// Text was empty after trimming; nothing was emitted.
    RejectedEmpty,
}

/// Trims and sends composed text. Fire-and-forget: a successful emit is not
/// acknowledged by the server.
pub fn send_message(
    transport: &mut dyn Transport,
    identity: &SessionIdentity,
    text: &str,
) -> Result<SendOutcome> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(SendOutcome::RejectedEmpty);
    }

    let event = match &identity.mode {
        ChatMode::Room { room_id } => OutboundEvent::RoomMessage {
            room: room_id.clone(),
            username: identity.local_username.clone(),
            msg: text.to_owned(),
        },
        ChatMode::PrivateDirect { peer_label, .. } => OutboundEvent::PrivateMessage {
            username: identity.local_username.clone(),
            peer: peer_label.clone(),
            msg: text.to_owned(),
        },
        ChatMode::PrivateGroup { group_id } => OutboundEvent::PrivateGroupMessage {
            group_id: group_id.clone(),
            username: identity.local_username.clone(),
            msg: text.to_owned(),
        },
    };

    transport.emit(event)?;
    Ok(SendOutcome::Sent)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::infra::stubs::RecordingTransport;

    fn identity(mode: ChatMode) -> SessionIdentity {
        SessionIdentity {
            local_username: "bob".to_owned(),
            mode,
        }
    }

    #[test]
    fn rejects_empty_text_without_emitting() {
        let mut transport = RecordingTransport::default();
        let identity = identity(ChatMode::Room {
            room_id: "lobby".to_owned(),
        });

        let outcome = send_message(&mut transport, &identity, "").expect("must not fail");

        assert_eq!(outcome, SendOutcome::RejectedEmpty);
        assert!(transport.events.is_empty());
    }

    #[test]
    fn rejects_whitespace_only_text() {
        let mut transport = RecordingTransport::default();
        let identity = identity(ChatMode::Room {
            room_id: "lobby".to_owned(),
        });

        let outcome = send_message(&mut transport, &identity, "  \t ").expect("must not fail");

        assert_eq!(outcome, SendOutcome::RejectedEmpty);
    }

    #[test]
    fn trims_text_before_sending() {
        let mut transport = RecordingTransport::default();
        let identity = identity(ChatMode::Room {
            room_id: "lobby".to_owned(),
        });

        send_message(&mut transport, &identity, "  hello  ").expect("must send");

        assert_eq!(
            transport.events[0].payload(),
            json!({ "room": "lobby", "username": "bob", "msg": "hello" })
        );
    }

    #[test]
    fn room_mode_sends_room_message() {
        let mut transport = RecordingTransport::default();
        let identity = identity(ChatMode::Room {
            room_id: "lobby".to_owned(),
        });

        let outcome = send_message(&mut transport, &identity, "hi").expect("must send");

        assert_eq!(outcome, SendOutcome::Sent);
        assert_eq!(transport.event_names(), vec!["room_message"]);
    }

    #[test]
    fn direct_mode_addresses_the_peer_by_label() {
        let mut transport = RecordingTransport::default();
        let identity = identity(ChatMode::PrivateDirect {
            peer_id: "7".to_owned(),
            peer_label: "alice".to_owned(),
        });

        send_message(&mut transport, &identity, "hi").expect("must send");

        assert_eq!(transport.event_names(), vec!["private_message"]);
        assert_eq!(
            transport.events[0].payload(),
            json!({ "username": "bob", "peer": "alice", "msg": "hi" })
        );
    }

    #[test]
    fn group_mode_sends_private_group_message() {
        let mut transport = RecordingTransport::default();
        let identity = identity(ChatMode::PrivateGroup {
            group_id: "42".to_owned(),
        });

        send_message(&mut transport, &identity, "hi").expect("must send");

        assert_eq!(transport.event_names(), vec!["private_group_message"]);
        assert_eq!(
            transport.events[0].payload(),
            json!({ "group_id": "42", "username": "bob", "msg": "hi" })
        );
    }
}
