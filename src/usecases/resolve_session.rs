//! Session topology resolution and the join handshake.
//!
//! The hosting environment injects a username plus at most one chat target.
//! Resolution picks the topology once, before any handlers run, so exactly one
//! join event is emitted and the rest of the session never re-inspects the
//! raw parameters.

use anyhow::Result;

use crate::{
    domain::chat::{ChatMode, SessionIdentity},
    infra::error::AppError,
    transport::{wire::OutboundEvent, Transport},
};

/// Raw session start parameters as injected by the hosting environment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionContext {
    pub username: String,
    pub room: Option<String>,
    pub peer_id: Option<String>,
    pub peer_label: Option<String>,
    pub group_id: Option<String>,
}

/// Resolves the active chat topology. Precedence when more than one target is
/// populated (a hosting defect, logged): room, then direct peer, then group.
pub fn resolve(context: SessionContext) -> Result<SessionIdentity, AppError> {
    let populated = [
        context.room.is_some(),
        context.peer_id.is_some(),
        context.group_id.is_some(),
    ]
    .iter()
    .filter(|set| **set)
    .count();
    if populated > 1 {
        tracing::warn!(
            populated,
            "multiple chat targets supplied; resolving by precedence (room, direct, group)"
        );
    }

    let mode = if let Some(room_id) = context.room {
        ChatMode::Room { room_id }
    } else if let Some(peer_id) = context.peer_id {
        let peer_label = context.peer_label.unwrap_or_else(|| peer_id.clone());
        ChatMode::PrivateDirect {
            peer_id,
            peer_label,
        }
    } else if let Some(group_id) = context.group_id {
        ChatMode::PrivateGroup { group_id }
    } else {
        return Err(AppError::MissingChatTarget);
    };

    Ok(SessionIdentity {
        local_username: context.username,
        mode,
    })
}

/// Emits the single topology-appropriate join event. Fire-and-forget: the
/// server does not acknowledge joins and there is no retry.
pub fn start_session(transport: &mut dyn Transport, identity: &SessionIdentity) -> Result<()> {
    let join = match &identity.mode {
        ChatMode::Room { room_id } => OutboundEvent::Join {
            room: room_id.clone(),
            username: identity.local_username.clone(),
        },
        ChatMode::PrivateDirect { peer_id, .. } => OutboundEvent::JoinPrivate {
            peer_id: peer_id.clone(),
        },
        ChatMode::PrivateGroup { group_id } => OutboundEvent::JoinPrivateGroup {
            group_id: group_id.clone(),
            username: identity.local_username.clone(),
        },
    };

    tracing::info!(event = join.name(), "joining session target");
    transport.emit(join)
}
