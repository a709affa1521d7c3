//! State of the compose input field.

/// Upper bound on composed text; the server contract has no limit, this only
/// keeps a runaway paste from growing without bound.
const MAX_COMPOSE_LENGTH: usize = 2000;

/// Text being composed plus a cursor, tracked in characters (not bytes) so
/// multi-byte input edits stay on character boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComposeState {
    text: String,
    cursor: usize,
}

impl ComposeState {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Inserts a character at the cursor. Returns false when the field is
    /// already at capacity.
    pub fn push_char(&mut self, ch: char) -> bool {
        if self.text.chars().count() >= MAX_COMPOSE_LENGTH {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.text.insert(at, ch);
        self.cursor += 1;
        true
    }

    /// Removes the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let start = self.byte_index(self.cursor - 1);
        let end = self.byte_index(self.cursor);
        self.text.drain(start..end);
        self.cursor -= 1;
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        if self.cursor < self.text.chars().count() {
            self.cursor += 1;
        }
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(at, _)| at)
            .unwrap_or(self.text.len())
    }
}
