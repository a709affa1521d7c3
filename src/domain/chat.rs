/// Shape of the active conversation. Resolved once at session start and
/// immutable for the session's lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatMode {
    /// One-to-many broadcast room.
    Room { room_id: String },
    /// One-to-one private conversation.
    PrivateDirect { peer_id: String, peer_label: String },
    /// Many-to-many private group.
    PrivateGroup { group_id: String },
}

impl ChatMode {
    /// The identifier the server uses as the typing/presence target for this
    /// mode: room id, peer id, or group id.
    pub fn target_id(&self) -> &str {
        match self {
            ChatMode::Room { room_id } => room_id,
            ChatMode::PrivateDirect { peer_id, .. } => peer_id,
            ChatMode::PrivateGroup { group_id } => group_id,
        }
    }

    /// Human-readable session title for the status bar.
    pub fn title(&self) -> String {
        match self {
            ChatMode::Room { room_id } => format!("#{room_id}"),
            ChatMode::PrivateDirect { peer_label, .. } => peer_label.clone(),
            ChatMode::PrivateGroup { group_id } => format!("group {group_id}"),
        }
    }
}

/// Read-only identity of the local session: who we are and which conversation
/// shape we are in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionIdentity {
    pub local_username: String,
    pub mode: ChatMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_id_is_room_id_for_rooms() {
        let mode = ChatMode::Room {
            room_id: "lobby".to_owned(),
        };

        assert_eq!(mode.target_id(), "lobby");
    }

    #[test]
    fn target_id_is_peer_id_for_direct_chats() {
        let mode = ChatMode::PrivateDirect {
            peer_id: "7".to_owned(),
            peer_label: "alice".to_owned(),
        };

        assert_eq!(mode.target_id(), "7");
    }

    #[test]
    fn target_id_is_group_id_for_groups() {
        let mode = ChatMode::PrivateGroup {
            group_id: "42".to_owned(),
        };

        assert_eq!(mode.target_id(), "42");
    }

    #[test]
    fn title_shows_peer_label_not_peer_id() {
        let mode = ChatMode::PrivateDirect {
            peer_id: "7".to_owned(),
            peer_label: "alice".to_owned(),
        };

        assert_eq!(mode.title(), "alice");
    }
}
