use thiserror::Error;

use crate::types::ControlKey;

/// Errors raised at the host-facing edges of the keyboard.
///
/// Editing itself never fails: out-of-range cursors are clamped and empty
/// edits are no-ops.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown key id: {0}")]
    UnknownKey(String),

    #[error("Control key {0:?} does not produce text")]
    NotPrintable(ControlKey),

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
