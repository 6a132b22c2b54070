//! Keyboard input as seen by the widgets.
//!
//! The host converts a browser `KeyboardEvent` into a [`KeyInput`] before
//! dispatch. Only Escape and Tab (with or without Shift) mean anything to a
//! widget; every other key is ignored.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

/// `KeyboardEvent.key` value, case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    #[must_use]
    pub fn is_escape(&self) -> bool {
        self.0 == "Escape"
    }

    #[must_use]
    pub fn is_tab(&self) -> bool {
        self.0 == "Tab"
    }
}

/// Modifier state at the time of the key press. Shift reverses Tab traversal.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    /// Command on macOS.
    pub meta: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyInput {
    #[must_use]
    pub fn new(key: &str, modifiers: Modifiers) -> Self {
        Self { key: Key(key.to_owned()), modifiers }
    }

    #[must_use]
    pub fn escape() -> Self {
        Self::new("Escape", Modifiers::default())
    }

    #[must_use]
    pub fn tab() -> Self {
        Self::new("Tab", Modifiers::default())
    }

    #[must_use]
    pub fn shift_tab() -> Self {
        Self::new("Tab", Modifiers { shift: true, ..Modifiers::default() })
    }

    /// Tab traversal toward the end of the document.
    #[must_use]
    pub fn is_forward_tab(&self) -> bool {
        self.key.is_tab() && !self.modifiers.shift
    }

    /// Shift+Tab traversal toward the start of the document.
    #[must_use]
    pub fn is_backward_tab(&self) -> bool {
        self.key.is_tab() && self.modifiers.shift
    }
}
