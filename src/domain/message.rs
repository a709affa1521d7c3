//! Inbound message parsing and classification.
//!
//! The server delivers message text in the convention `"<label>:<body>"`.
//! The label is everything before the first colon; colons inside the body are
//! preserved verbatim. Text with no colon at all (e.g. join announcements)
//! degrades to a label-only entry with an empty body.

/// Whether an entry was authored by the local user or a peer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Sent,
    Received,
}

/// One entry of the rendered message log. Created on inbound arrival, never
/// mutated afterwards except for read-receipt reflection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEntry {
    pub kind: EntryKind,
    pub label: String,
    pub body: String,
    /// Server-assigned identifier; only entries carrying one are
    /// acknowledgeable.
    pub message_id: Option<String>,
    pub received_at_unix_ms: i64,
    /// Usernames that reported reading this entry, in arrival order.
    pub read_by: Vec<String>,
}

impl RenderedEntry {
    /// Builds an entry from raw inbound text, splitting on the first colon and
    /// classifying by the local username.
    pub fn from_raw(
        raw: &str,
        local_username: &str,
        message_id: Option<String>,
        received_at_unix_ms: i64,
    ) -> Self {
        let (label, body) = split_label(raw);
        let kind = if label == local_username {
            EntryKind::Sent
        } else {
            EntryKind::Received
        };

        Self {
            kind,
            label: sanitize(label),
            body: sanitize(body),
            message_id,
            received_at_unix_ms,
            read_by: Vec::new(),
        }
    }

    pub fn is_acknowledgeable(&self) -> bool {
        self.message_id.is_some()
    }

    /// Records that `reader` has read this entry. Repeated reports from the
    /// same reader are collapsed.
    pub fn mark_read_by(&mut self, reader: &str) {
        if !self.read_by.iter().any(|r| r == reader) {
            self.read_by.push(reader.to_owned());
        }
    }
}

/// Splits `"<label>:<body>"` on the first colon. No colon yields the whole
/// string as label and an empty body.
fn split_label(raw: &str) -> (&str, &str) {
    match raw.split_once(':') {
        Some((label, body)) => (label, body),
        None => (raw, ""),
    }
}

/// Strips control characters so inbound text can never carry escape sequences
/// into the rendering surface. Everything else is kept verbatim and only ever
/// rendered as literal content.
fn sanitize(text: &str) -> String {
    text.chars().filter(|ch| !ch.is_control()).collect()
}

/// Current wall-clock time in unix milliseconds.
pub fn now_unix_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
