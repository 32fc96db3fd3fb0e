use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

use crate::error::Result;
use crate::types::{Language, Languages};

/// Static keyboard configuration.
///
/// `language` fixes every session to one layout and hides the switch.
/// Unknown language codes leave switching enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyboardConfig {
    #[serde(deserialize_with = "lenient_language")]
    pub language: Option<Language>,
    /// Layout shown when a session opens and no language is fixed.
    #[serde(deserialize_with = "strict_language")]
    pub default_language: Language,
}

impl KeyboardConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Fixes the keyboard to `code` (`"en"`/`"ru"`, any case).
    pub fn restrict_to(mut self, code: &str) -> Self {
        self.language = parse_or_warn(code);
        self
    }

    pub fn languages(&self) -> Languages {
        match self.language {
            Some(lang) => Languages::only(lang),
            None => Languages::all(),
        }
    }

    /// Language a fresh session starts in.
    pub fn initial_language(&self) -> Language {
        self.language.unwrap_or(self.default_language)
    }
}

fn parse_or_warn(code: &str) -> Option<Language> {
    match code.parse() {
        Ok(lang) => Some(lang),
        Err(err) => {
            warn!(%err, "ignoring language restriction");
            None
        }
    }
}

fn lenient_language<'de, D>(deserializer: D) -> std::result::Result<Option<Language>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_or_warn))
}

fn strict_language<'de, D>(deserializer: D) -> std::result::Result<Language, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(serde::de::Error::custom)
}
