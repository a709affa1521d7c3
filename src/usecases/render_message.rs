//! Inbound message rendering: one log append per `message` event, in
//! delivery order.

use crate::domain::{
    message::{now_unix_ms, RenderedEntry},
    message_log::MessageLog,
};

/// Parses, classifies and appends one inbound message. Append is
/// unconditional: no cap, no eviction, no reordering.
pub fn on_inbound_message<'a>(
    log: &'a mut MessageLog,
    local_username: &str,
    msg: &str,
    message_id: Option<String>,
) -> &'a RenderedEntry {
    let entry = RenderedEntry::from_raw(msg, local_username, message_id, now_unix_ms());
    tracing::debug!(kind = ?entry.kind, acknowledgeable = entry.is_acknowledgeable(), "rendered inbound message");
    log.append(entry)
}
