use tracing::{debug, warn};

use crate::config::KeyboardConfig;
use crate::controller::InputController;
use crate::error::{Error, Result};
use crate::key::InputEvent;
use crate::layout::Layout;
use crate::traits::SharedListener;
use crate::types::{CaseState, ControlKey, KeyCategory, Language, Languages, SessionState};

/// What a handled event changed, for the host to re-render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reaction {
    /// Nothing visible changed.
    Unchanged,
    /// Text or cursor changed.
    Text,
    /// Letter labels were rewritten.
    Case(CaseState),
    /// Another layout is now shown.
    Language(Language),
    /// The session ended.
    Closed(SessionState),
}

/// A point-in-time view of a keyboard for hosts that render it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardSnapshot {
    /// The layout currently shown.
    pub language: Language,
    /// Text of the active layout's buffer.
    pub text: String,
    /// Cursor position in chars.
    pub cursor: usize,
    /// Case flag of the active layout.
    pub upper: bool,
    /// Where the session is in its lifecycle.
    pub state: SessionState,
}

/// Builder for [`Keyboard`].
///
/// Defaults to both languages, English first, and no listener.
#[derive(Default)]
pub struct KeyboardBuilder {
    config: KeyboardConfig,
    listener: Option<SharedListener>,
}

impl KeyboardBuilder {
    /// Replaces the whole configuration.
    pub fn config(mut self, config: KeyboardConfig) -> Self {
        self.config = config;
        self
    }

    /// Fixes sessions to a single language.
    pub fn language(mut self, lang: Language) -> Self {
        self.config.language = Some(lang);
        self
    }

    /// Registers the host listener on both layouts.
    pub fn listener(mut self, listener: SharedListener) -> Self {
        self.listener = Some(listener);
        self
    }

    pub fn build(self) -> Keyboard {
        let mut en = InputController::new(Language::En);
        let mut ru = InputController::new(Language::Ru);
        en.set_listener(self.listener.clone());
        ru.set_listener(self.listener);
        Keyboard {
            active: self.config.initial_language(),
            config: self.config,
            en,
            ru,
            state: SessionState::Idle,
            result: None,
        }
    }
}

/// An on-screen keyboard session with an English and a Russian layout.
///
/// Owns one [`InputController`] per language, keeps exactly one of them
/// active, and carries text, cursor and case across language switches.
#[derive(Debug)]
pub struct Keyboard {
    config: KeyboardConfig,
    en: InputController,
    ru: InputController,
    active: Language,
    state: SessionState,
    result: Option<String>,
}

impl Default for Keyboard {
    fn default() -> Self {
        KeyboardBuilder::default().build()
    }
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> KeyboardBuilder {
        KeyboardBuilder::default()
    }

    pub fn with_config(config: KeyboardConfig) -> Self {
        Self::builder().config(config).build()
    }

    /// Registers the host listener on both layouts.
    pub fn set_listener(&mut self, listener: Option<SharedListener>) {
        self.en.set_listener(listener.clone());
        self.ru.set_listener(listener);
    }

    pub fn language(&self) -> Language {
        self.active
    }

    pub fn languages(&self) -> Languages {
        self.config.languages()
    }

    /// Whether the language switch control should be shown.
    pub fn can_switch_language(&self) -> bool {
        self.languages().can_switch()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn text(&self) -> &str {
        self.active().buffer().text()
    }

    pub fn cursor(&self) -> usize {
        self.active().buffer().cursor()
    }

    pub fn case(&self) -> CaseState {
        self.active().case()
    }

    /// Layout of the active language, with labels in the current case.
    pub fn layout(&self) -> &Layout {
        self.active().layout()
    }

    pub fn controller(&self, lang: Language) -> &InputController {
        match lang {
            Language::En => &self.en,
            Language::Ru => &self.ru,
        }
    }

    pub fn snapshot(&self) -> KeyboardSnapshot {
        KeyboardSnapshot {
            language: self.active,
            text: self.text().to_string(),
            cursor: self.cursor(),
            upper: self.case().upper,
            state: self.state,
        }
    }

    /// Starts a new session seeded with `initial_text`.
    ///
    /// Resets case and language to their defaults. The seed is not echoed to
    /// the listener.
    pub fn open(&mut self, initial_text: &str) {
        let len = initial_text.chars().count();
        for ctl in [&mut self.en, &mut self.ru] {
            ctl.set_upper(false);
            ctl.restore(initial_text, len);
        }
        self.active = self.config.initial_language();
        self.state = SessionState::Idle;
        self.result = None;
        debug!(lang = %self.active, seed_len = len, "session opened");
    }

    /// Confirmed text, or an empty string when the session was canceled or
    /// never confirmed.
    pub fn result(&self) -> &str {
        self.result.as_deref().unwrap_or("")
    }

    /// Inserts `glyph` at the cursor. An empty glyph changes nothing,
    /// including the session state.
    pub fn insert(&mut self, glyph: &str) -> Reaction {
        if glyph.is_empty() || !self.begin_edit("insert") {
            return Reaction::Unchanged;
        }
        self.active_mut().insert(glyph);
        Reaction::Text
    }

    pub fn backspace(&mut self) -> Reaction {
        if !self.begin_edit("backspace") {
            return Reaction::Unchanged;
        }
        self.active_mut().backspace();
        Reaction::Text
    }

    /// Presses a key of the active layout by id.
    pub fn press(&mut self, id: &str) -> Result<Reaction> {
        let category = self
            .layout()
            .key(id)
            .map(|k| k.category)
            .ok_or_else(|| Error::UnknownKey(id.to_string()))?;
        match category {
            KeyCategory::Control(control) => Ok(self.control(control)),
            _ => {
                if !self.begin_edit("key") {
                    return Ok(Reaction::Unchanged);
                }
                self.active_mut().press(id)?;
                Ok(Reaction::Text)
            }
        }
    }

    pub fn control(&mut self, control: ControlKey) -> Reaction {
        match control {
            ControlKey::Backspace => self.backspace(),
            ControlKey::Upper => self.toggle_case(),
            ControlKey::Language => match self.switch_language() {
                Some(lang) => Reaction::Language(lang),
                None => Reaction::Unchanged,
            },
            ControlKey::Ok => self.accept(),
            ControlKey::Cancel => self.cancel(),
        }
    }

    /// Replaces the text of the active layout.
    pub fn set_text(&mut self, text: &str, cursor: Option<usize>) -> Reaction {
        if self.closed("set text") {
            return Reaction::Unchanged;
        }
        let ctl = self.active_mut();
        match cursor {
            Some(cursor) => ctl.set_text_at(text, cursor),
            None => ctl.set_text(text),
        };
        Reaction::Text
    }

    pub fn set_cursor(&mut self, cursor: usize) -> Reaction {
        if self.closed("set cursor") {
            return Reaction::Unchanged;
        }
        self.active_mut().set_cursor(cursor);
        Reaction::Text
    }

    pub fn toggle_case(&mut self) -> Reaction {
        if self.closed("toggle case") {
            return Reaction::Unchanged;
        }
        Reaction::Case(self.active_mut().toggle_case())
    }

    /// Shows the other layout, carrying text, cursor and case over.
    ///
    /// Returns `None` when the session is fixed to one language or closed.
    /// The listener is not called: the text does not change.
    pub fn switch_language(&mut self) -> Option<Language> {
        if self.closed("switch language") {
            return None;
        }
        if !self.can_switch_language() {
            warn!(lang = %self.active, "language switch unavailable");
            return None;
        }
        let outgoing = self.active();
        let text = outgoing.buffer().text().to_string();
        let cursor = outgoing.buffer().cursor();
        let upper = outgoing.case().upper;

        let next = self.active.other();
        let incoming = match next {
            Language::En => &mut self.en,
            Language::Ru => &mut self.ru,
        };
        incoming.set_upper(upper);
        incoming.restore(&text, cursor);
        self.active = next;
        debug!(lang = %next, cursor, upper, "language switched");
        Some(next)
    }

    /// Ends the session keeping the typed text as its result.
    pub fn accept(&mut self) -> Reaction {
        if self.closed("accept") {
            return Reaction::Unchanged;
        }
        self.result = Some(self.text().to_string());
        self.finish(SessionState::Confirmed)
    }

    /// Ends the session discarding the typed text.
    pub fn cancel(&mut self) -> Reaction {
        if self.closed("cancel") {
            return Reaction::Unchanged;
        }
        self.result = None;
        self.finish(SessionState::Canceled)
    }

    pub fn handle_event(&mut self, event: InputEvent) -> Result<Reaction> {
        let reaction = match event {
            InputEvent::Key(id) => return self.press(&id),
            InputEvent::Text(glyph) => self.insert(&glyph),
            InputEvent::Backspace => self.backspace(),
            InputEvent::ToggleCase => self.toggle_case(),
            InputEvent::SwitchLanguage => self.control(ControlKey::Language),
            InputEvent::Accept => self.accept(),
            InputEvent::Cancel => self.cancel(),
            InputEvent::SetCursor(cursor) => self.set_cursor(cursor),
        };
        Ok(reaction)
    }

    fn finish(&mut self, state: SessionState) -> Reaction {
        self.en.clear();
        self.ru.clear();
        self.state = state;
        debug!(?state, "session closed");
        Reaction::Closed(state)
    }

    /// Moves Idle to Editing; false when the session is already closed.
    fn begin_edit(&mut self, action: &str) -> bool {
        if self.closed(action) {
            return false;
        }
        if self.state == SessionState::Idle {
            self.state = SessionState::Editing;
            debug!("session editing");
        }
        true
    }

    fn closed(&self, action: &str) -> bool {
        if self.state.is_closed() {
            warn!(action, state = ?self.state, "event after session closed");
            return true;
        }
        false
    }

    fn active(&self) -> &InputController {
        self.controller(self.active)
    }

    fn active_mut(&mut self) -> &mut InputController {
        match self.active {
            Language::En => &mut self.en,
            Language::Ru => &mut self.ru,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_resets_case_and_language() {
        let mut kb = Keyboard::new();
        kb.toggle_case();
        kb.switch_language();
        kb.open("seed");
        assert_eq!(kb.language(), Language::En);
        assert!(!kb.case().upper);
        assert_eq!(kb.text(), "seed");
        assert_eq!(kb.cursor(), 4);
        assert_eq!(kb.state(), SessionState::Idle);
    }

    #[test]
    fn case_toggle_and_switch_keep_idle() {
        let mut kb = Keyboard::new();
        kb.toggle_case();
        kb.switch_language();
        assert_eq!(kb.state(), SessionState::Idle);
        kb.backspace();
        assert_eq!(kb.state(), SessionState::Editing);
    }

    #[test]
    fn snapshot_follows_active_layout() {
        let mut kb = Keyboard::new();
        kb.insert("ab");
        kb.set_cursor(1);
        kb.switch_language();
        assert_eq!(
            kb.snapshot(),
            KeyboardSnapshot {
                language: Language::Ru,
                text: "ab".into(),
                cursor: 1,
                upper: false,
                state: SessionState::Editing,
            }
        );
    }
}
