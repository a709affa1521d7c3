//! Peer typing-presence state.

/// Transient indicator that a peer is composing. Mutated only by inbound
/// `typing`/`stop_typing` events; both mutations are idempotent and the latest
/// event wins.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PresenceState {
    peer_typing: Option<String>,
}

impl PresenceState {
    pub fn set_typing(&mut self, username: impl Into<String>) {
        self.peer_typing = Some(username.into());
    }

    pub fn clear(&mut self) {
        self.peer_typing = None;
    }

    /// Indicator text for the presence line, or None when nobody is typing.
    pub fn indicator(&self) -> Option<String> {
        self.peer_typing
            .as_ref()
            .map(|username| format!("{username} is typing..."))
    }
}
