/// Text being edited plus a cursor.
///
/// The cursor counts Unicode scalar values (chars), not bytes, so positions
/// stay correct for Cyrillic and other multi-byte text. It always lies in
/// `0..=len()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    content: String,
    cursor: usize,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer holding `text` with the cursor at its end.
    pub fn with_text(text: impl Into<String>) -> Self {
        let content = text.into();
        let cursor = content.chars().count();
        Self { content, cursor }
    }

    pub fn text(&self) -> &str {
        &self.content
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Length in chars.
    pub fn len(&self) -> usize {
        self.content.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Inserts `glyph` at the cursor and moves the cursor past it.
    ///
    /// Returns `false` when `glyph` is empty and nothing changed.
    pub fn insert(&mut self, glyph: &str) -> bool {
        if glyph.is_empty() {
            return false;
        }
        let at = self.byte_offset(self.cursor);
        self.content.insert_str(at, glyph);
        self.cursor += glyph.chars().count();
        true
    }

    /// Removes the char before the cursor.
    ///
    /// At position zero the cursor is re-asserted to 0 and `false` is
    /// returned.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            self.cursor = 0;
            return false;
        }
        let at = self.byte_offset(self.cursor - 1);
        self.content.remove(at);
        self.cursor -= 1;
        true
    }

    /// Replaces the whole content; the cursor is clamped into the new text.
    ///
    /// Returns whether the content differs from before.
    pub fn set_text(&mut self, text: impl Into<String>, cursor: Option<usize>) -> bool {
        let text = text.into();
        let changed = text != self.content;
        self.content = text;
        let len = self.len();
        self.cursor = cursor.unwrap_or(len).min(len);
        changed
    }

    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor.min(self.len());
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }
}
