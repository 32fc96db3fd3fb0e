/// Input events a host feeds into a [`Keyboard`](crate::Keyboard).
///
/// Hosts that render the layout tables map button presses to `Key` with the
/// pressed key's id; hosts with their own widgets can use the direct
/// variants instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A key from the active layout was pressed, identified by its id.
    Key(String),
    /// Raw text to insert at the cursor, bypassing the layout.
    Text(String),
    Backspace,
    /// The shift key was toggled.
    ToggleCase,
    SwitchLanguage,
    /// The accept (OK) action.
    Accept,
    Cancel,
    /// The user placed the cursor inside the text field.
    SetCursor(usize),
}

impl InputEvent {
    pub fn key(id: impl Into<String>) -> Self {
        InputEvent::Key(id.into())
    }

    pub fn text(glyph: impl Into<String>) -> Self {
        InputEvent::Text(glyph.into())
    }
}
