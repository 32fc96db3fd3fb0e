pub mod buffer;
pub mod config;
pub mod controller;
pub mod error;
pub mod key;
pub mod keyboard;
pub mod layout;
pub mod traits;
pub mod types;

pub use crate::buffer::TextBuffer;
pub use crate::config::KeyboardConfig;
pub use crate::controller::InputController;
pub use crate::error::{Error, Result};
pub use crate::key::InputEvent;
pub use crate::keyboard::{Keyboard, KeyboardBuilder, KeyboardSnapshot, Reaction};
pub use crate::layout::{KeyDescriptor, Layout};
pub use crate::traits::{KeyListener, SharedListener, shared};
pub use crate::types::{
    CaseIndicator, CaseState, ControlKey, KeyCategory, Language, Languages, SessionState,
};
