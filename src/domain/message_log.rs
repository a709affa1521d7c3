//! Append-only ordered message log with a selection cursor.
//!
//! Order equals transport delivery order: entries are never removed,
//! reordered, deduplicated or evicted. The selection normally follows the
//! newest entry; moving it up detaches it so older entries can be inspected
//! (and acknowledged) while new ones keep arriving.

use super::message::RenderedEntry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageLog {
    entries: Vec<RenderedEntry>,
    selected_index: Option<usize>,
    follow_latest: bool,
}

impl Default for MessageLog {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            selected_index: None,
            follow_latest: true,
        }
    }
}

impl MessageLog {
    pub fn entries(&self) -> &[RenderedEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn selected_entry(&self) -> Option<&RenderedEntry> {
        self.selected_index.and_then(|idx| self.entries.get(idx))
    }

    /// Appends an entry, keeping the view on the newest entry when the
    /// selection is following the tail.
    pub fn append(&mut self, entry: RenderedEntry) -> &RenderedEntry {
        self.entries.push(entry);
        let newest = self.entries.len() - 1;
        if self.follow_latest {
            self.selected_index = Some(newest);
        }
        &self.entries[newest]
    }

    /// Moves the selection one entry up and detaches it from the tail.
    pub fn select_previous(&mut self) {
        if self.entries.is_empty() {
            return;
        }

        self.selected_index = match self.selected_index {
            None => Some(self.entries.len() - 1),
            Some(0) => Some(0),
            Some(idx) => Some(idx - 1),
        };
        self.follow_latest = self.selected_index == Some(self.entries.len() - 1);
    }

    /// Moves the selection one entry down; reaching the newest entry
    /// re-attaches the selection to the tail.
    pub fn select_next(&mut self) {
        if self.entries.is_empty() {
            return;
        }

        let last = self.entries.len() - 1;
        self.selected_index = match self.selected_index {
            None => Some(last),
            Some(idx) if idx < last => Some(idx + 1),
            Some(idx) => Some(idx),
        };
        self.follow_latest = self.selected_index == Some(last);
    }

    /// Marks the entry carrying `message_id` as read by `reader`. Returns
    /// false when no entry matches.
    pub fn mark_read_by(&mut self, message_id: &str, reader: &str) -> bool {
        match self
            .entries
            .iter_mut()
            .find(|entry| entry.message_id.as_deref() == Some(message_id))
        {
            Some(entry) => {
                entry.mark_read_by(reader);
                true
            }
            None => false,
        }
    }
}
