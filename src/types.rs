use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A keyboard language, one per letter layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English (QWERTY).
    #[default]
    En,
    /// Russian (ЙЦУКЕН).
    Ru,
}

impl Language {
    /// The other language of the pair.
    pub fn other(self) -> Language {
        match self {
            Language::En => Language::Ru,
            Language::Ru => Language::En,
        }
    }

    /// Lowercase two-letter code.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ru => "ru",
        }
    }

    fn flag(self) -> Languages {
        match self {
            Language::En => Languages::EN,
            Language::Ru => Languages::RU,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    /// Parses `en`/`ru` in any letter case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Language::En),
            "ru" => Ok(Language::Ru),
            _ => Err(Error::UnknownLanguage(s.to_string())),
        }
    }
}

bitflags::bitflags! {
    /// Set of languages a keyboard session may display.
    ///
    /// A set with a single member fixes the session to that language and
    /// makes the language switch unavailable.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Languages: u8 {
        /// The English layout.
        const EN = 0b01;
        /// The Russian layout.
        const RU = 0b10;
    }
}

impl Languages {
    /// Only the given language.
    pub fn only(lang: Language) -> Self {
        lang.flag()
    }

    pub fn allows(self, lang: Language) -> bool {
        self.contains(lang.flag())
    }

    /// Whether the user can switch between layouts.
    pub fn can_switch(self) -> bool {
        self.is_all()
    }
}

/// Shift state of a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CaseState {
    /// Whether letter keys produce uppercase glyphs.
    pub upper: bool,
}

impl CaseState {
    pub const LOWER: CaseState = CaseState { upper: false };
    pub const UPPER: CaseState = CaseState { upper: true };

    pub fn toggled(self) -> CaseState {
        CaseState { upper: !self.upper }
    }

    /// Renders `glyph` in this case.
    pub fn apply(self, glyph: &str) -> String {
        if self.upper {
            glyph.to_uppercase()
        } else {
            glyph.to_lowercase()
        }
    }

    pub fn indicator(self) -> CaseIndicator {
        if self.upper {
            CaseIndicator::Upper
        } else {
            CaseIndicator::Lower
        }
    }
}

/// Rendered state of the shift control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseIndicator {
    /// Shift is off; letter keys show lowercase.
    Lower,
    /// Shift is on; letter keys show uppercase.
    Upper,
}

impl CaseIndicator {
    /// Icon resource a host can show on the shift key.
    pub fn icon_name(self) -> &'static str {
        match self {
            CaseIndicator::Lower => "up-arrow.png",
            CaseIndicator::Upper => "up-arrow-black.png",
        }
    }
}

/// Keys that drive the keyboard rather than produce text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKey {
    /// Deletes the char before the cursor.
    Backspace,
    /// Shift toggle.
    Upper,
    /// Layout switch.
    Language,
    /// Accept the typed text and close the session.
    Ok,
    /// Discard the typed text and close the session.
    Cancel,
}

/// Classification of a key in a layout table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCategory {
    /// Letter key; its label follows the case flag.
    Letter,
    /// Digit key, `0` to `9`.
    Digit,
    /// Punctuation and space.
    Symbol,
    /// Key bound to a keyboard action instead of a glyph.
    Control(ControlKey),
}

impl KeyCategory {
    /// Whether pressing the key inserts its label into the buffer.
    pub fn is_printable(self) -> bool {
        !matches!(self, KeyCategory::Control(_))
    }
}

/// Lifecycle of one open-to-close keyboard session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Opened, nothing typed yet.
    #[default]
    Idle,
    /// At least one key or backspace was handled.
    Editing,
    /// Closed with the accept action; the text is the session result.
    Confirmed,
    /// Closed with the cancel action; no result.
    Canceled,
}

impl SessionState {
    pub fn is_closed(self) -> bool {
        matches!(self, SessionState::Confirmed | SessionState::Canceled)
    }
}
