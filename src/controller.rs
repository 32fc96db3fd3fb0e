use tracing::{debug, trace};

use crate::buffer::TextBuffer;
use crate::error::{Error, Result};
use crate::layout::Layout;
use crate::traits::SharedListener;
use crate::types::{CaseIndicator, CaseState, KeyCategory, Language};

/// Buffer, case flag and key layout of one language.
///
/// Every operation that changes the text reports the full new text to the
/// registered listener.
pub struct InputController {
    layout: Layout,
    buffer: TextBuffer,
    case: CaseState,
    listener: Option<SharedListener>,
}

impl std::fmt::Debug for InputController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputController")
            .field("language", &self.layout.language())
            .field("buffer", &self.buffer)
            .field("case", &self.case)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}

impl InputController {
    pub fn new(language: Language) -> Self {
        Self {
            layout: Layout::new(language),
            buffer: TextBuffer::new(),
            case: CaseState::LOWER,
            listener: None,
        }
    }

    pub fn set_listener(&mut self, listener: Option<SharedListener>) {
        self.listener = listener;
    }

    pub fn language(&self) -> Language {
        self.layout.language()
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn case(&self) -> CaseState {
        self.case
    }

    pub fn indicator(&self) -> CaseIndicator {
        self.case.indicator()
    }

    /// Inserts `glyph` at the cursor.
    pub fn insert(&mut self, glyph: &str) -> &TextBuffer {
        if self.buffer.insert(glyph) {
            debug!(
                lang = %self.language(),
                glyph_len = glyph.chars().count(),
                cursor = self.buffer.cursor(),
                "insert"
            );
            self.notify();
        }
        &self.buffer
    }

    /// Inserts the current label of a printable key.
    pub fn press(&mut self, id: &str) -> Result<&TextBuffer> {
        let key = self
            .layout
            .key(id)
            .ok_or_else(|| Error::UnknownKey(id.to_string()))?;
        if let KeyCategory::Control(control) = key.category {
            return Err(Error::NotPrintable(control));
        }
        let glyph = key.label().to_string();
        Ok(self.insert(&glyph))
    }

    pub fn backspace(&mut self) -> &TextBuffer {
        if self.buffer.backspace() {
            debug!(lang = %self.language(), cursor = self.buffer.cursor(), "backspace");
            self.notify();
        }
        &self.buffer
    }

    /// Replaces the text, cursor at its end.
    pub fn set_text(&mut self, text: impl Into<String>) -> &TextBuffer {
        self.apply_text(text.into(), None)
    }

    /// Replaces the text, cursor clamped into it.
    pub fn set_text_at(&mut self, text: impl Into<String>, cursor: usize) -> &TextBuffer {
        self.apply_text(text.into(), Some(cursor))
    }

    fn apply_text(&mut self, text: String, cursor: Option<usize>) -> &TextBuffer {
        if self.buffer.set_text(text, cursor) {
            debug!(lang = %self.language(), cursor = self.buffer.cursor(), "set text");
            self.notify();
        }
        &self.buffer
    }

    pub fn set_cursor(&mut self, cursor: usize) {
        self.buffer.set_cursor(cursor);
    }

    /// Loads text and cursor without notifying the listener.
    pub fn restore(&mut self, text: &str, cursor: usize) {
        self.buffer.set_text(text, Some(cursor));
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Flips the case flag and relabels the letter keys.
    ///
    /// The text already typed keeps its case.
    pub fn toggle_case(&mut self) -> CaseState {
        self.case = self.case.toggled();
        self.layout.apply_case(self.case);
        debug!(lang = %self.language(), upper = self.case.upper, "toggle case");
        self.case
    }

    /// Toggles only when the flag differs from `upper`.
    pub fn set_upper(&mut self, upper: bool) -> CaseState {
        if self.case.upper != upper {
            self.toggle_case();
        }
        self.case
    }

    fn notify(&self) {
        if let Some(listener) = &self.listener {
            // Typed text may be a secret; only its length is logged
            trace!(len = self.buffer.len(), "notify listener");
            listener.borrow_mut().on_key(self.buffer.text());
        }
    }
}
