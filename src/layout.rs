//! Static key tables for the English and Russian layouts.
//!
//! Every key is declared once with an explicit [`KeyCategory`]; a [`Layout`]
//! owns its descriptors and rewrites letter labels when the case flips.

use crate::types::{CaseState, ControlKey, KeyCategory, Language};

/// A key as declared in a layout table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyDef {
    pub id: &'static str,
    pub category: KeyCategory,
    /// Lowercase glyph; empty for control keys.
    pub glyph: &'static str,
}

const fn letter(id: &'static str, glyph: &'static str) -> KeyDef {
    KeyDef {
        id,
        category: KeyCategory::Letter,
        glyph,
    }
}

const fn digit(id: &'static str, glyph: &'static str) -> KeyDef {
    KeyDef {
        id,
        category: KeyCategory::Digit,
        glyph,
    }
}

const fn symbol(id: &'static str, glyph: &'static str) -> KeyDef {
    KeyDef {
        id,
        category: KeyCategory::Symbol,
        glyph,
    }
}

const fn control(id: &'static str, key: ControlKey) -> KeyDef {
    KeyDef {
        id,
        category: KeyCategory::Control(key),
        glyph: "",
    }
}

const DIGIT_ROW: &[KeyDef] = &[
    digit("digit_1", "1"),
    digit("digit_2", "2"),
    digit("digit_3", "3"),
    digit("digit_4", "4"),
    digit("digit_5", "5"),
    digit("digit_6", "6"),
    digit("digit_7", "7"),
    digit("digit_8", "8"),
    digit("digit_9", "9"),
    digit("digit_0", "0"),
    control("backspace", ControlKey::Backspace),
];

const BOTTOM_ROW: &[KeyDef] = &[
    control("language", ControlKey::Language),
    symbol("space", " "),
    control("ok", ControlKey::Ok),
    control("cancel", ControlKey::Cancel),
];

const EN_ROWS: &[&[KeyDef]] = &[
    DIGIT_ROW,
    &[
        letter("en_q", "q"),
        letter("en_w", "w"),
        letter("en_e", "e"),
        letter("en_r", "r"),
        letter("en_t", "t"),
        letter("en_y", "y"),
        letter("en_u", "u"),
        letter("en_i", "i"),
        letter("en_o", "o"),
        letter("en_p", "p"),
    ],
    &[
        letter("en_a", "a"),
        letter("en_s", "s"),
        letter("en_d", "d"),
        letter("en_f", "f"),
        letter("en_g", "g"),
        letter("en_h", "h"),
        letter("en_j", "j"),
        letter("en_k", "k"),
        letter("en_l", "l"),
        symbol("minus", "-"),
    ],
    &[
        control("upper", ControlKey::Upper),
        letter("en_z", "z"),
        letter("en_x", "x"),
        letter("en_c", "c"),
        letter("en_v", "v"),
        letter("en_b", "b"),
        letter("en_n", "n"),
        letter("en_m", "m"),
        symbol("comma", ","),
        symbol("dot", "."),
    ],
    BOTTOM_ROW,
];

const RU_ROWS: &[&[KeyDef]] = &[
    DIGIT_ROW,
    &[
        letter("ru_yo", "ё"),
        letter("ru_shorti", "й"),
        letter("ru_tse", "ц"),
        letter("ru_u", "у"),
        letter("ru_ka", "к"),
        letter("ru_ie", "е"),
        letter("ru_en", "н"),
        letter("ru_ge", "г"),
        letter("ru_sha", "ш"),
        letter("ru_shcha", "щ"),
        letter("ru_ze", "з"),
        letter("ru_kha", "х"),
        letter("ru_hard", "ъ"),
    ],
    &[
        letter("ru_ef", "ф"),
        letter("ru_yeru", "ы"),
        letter("ru_ve", "в"),
        letter("ru_a", "а"),
        letter("ru_pe", "п"),
        letter("ru_er", "р"),
        letter("ru_o", "о"),
        letter("ru_el", "л"),
        letter("ru_de", "д"),
        letter("ru_zhe", "ж"),
        letter("ru_e", "э"),
    ],
    &[
        control("upper", ControlKey::Upper),
        letter("ru_ya", "я"),
        letter("ru_che", "ч"),
        letter("ru_es", "с"),
        letter("ru_em", "м"),
        letter("ru_i", "и"),
        letter("ru_te", "т"),
        letter("ru_soft", "ь"),
        letter("ru_be", "б"),
        letter("ru_yu", "ю"),
        symbol("comma", ","),
        symbol("dot", "."),
        symbol("minus", "-"),
    ],
    BOTTOM_ROW,
];

/// A key of a live layout with its currently rendered label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyDescriptor {
    pub id: &'static str,
    pub category: KeyCategory,
    label: String,
}

impl KeyDescriptor {
    fn from_def(def: &KeyDef) -> Self {
        Self {
            id: def.id,
            category: def.category,
            label: def.glyph.to_string(),
        }
    }

    /// Text the key shows and, for printable keys, inserts.
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// One language's keys, grouped in display rows.
#[derive(Debug, Clone)]
pub struct Layout {
    language: Language,
    rows: Vec<Vec<KeyDescriptor>>,
}

impl Layout {
    pub fn new(language: Language) -> Self {
        let table = match language {
            Language::En => EN_ROWS,
            Language::Ru => RU_ROWS,
        };
        let rows: Vec<Vec<KeyDescriptor>> = table
            .iter()
            .map(|row| row.iter().map(KeyDescriptor::from_def).collect())
            .collect();
        Self { language, rows }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn rows(&self) -> &[Vec<KeyDescriptor>] {
        &self.rows
    }

    pub fn keys(&self) -> impl Iterator<Item = &KeyDescriptor> {
        self.rows.iter().flatten()
    }

    pub fn key(&self, id: &str) -> Option<&KeyDescriptor> {
        self.keys().find(|k| k.id == id)
    }

    /// Id of the key bound to a control action.
    pub fn control_id(&self, control: ControlKey) -> Option<&'static str> {
        self.keys()
            .find(|k| k.category == KeyCategory::Control(control))
            .map(|k| k.id)
    }

    /// Rewrites every letter label in `case`. Other keys keep their labels.
    pub fn apply_case(&mut self, case: CaseState) {
        for key in self.rows.iter_mut().flatten() {
            if key.category == KeyCategory::Letter {
                key.label = case.apply(&key.label);
            }
        }
    }
}
