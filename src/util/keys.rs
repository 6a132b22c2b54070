//! Keyboard event mapping.

#[cfg(test)]
#[path = "keys_test.rs"]
mod keys_test;

use widgets::input::{KeyInput, Modifiers};

#[must_use]
#[allow(clippy::fn_params_excessive_bools)]
pub fn map_modifiers(shift: bool, ctrl: bool, alt: bool, meta: bool) -> Modifiers {
    Modifiers { shift, ctrl, alt, meta }
}

/// Whether any widget reacts to `key`. Other keys skip dispatch entirely.
#[must_use]
pub fn is_relevant(key: &str) -> bool {
    matches!(key, "Escape" | "Tab")
}

/// Build a [`KeyInput`] from raw event fields, or `None` for keys no widget
/// handles.
#[must_use]
pub fn key_input(key: &str, modifiers: Modifiers) -> Option<KeyInput> {
    is_relevant(key).then(|| KeyInput::new(key, modifiers))
}

#[cfg(feature = "hydrate")]
pub fn from_event(ev: &web_sys::KeyboardEvent) -> Option<KeyInput> {
    key_input(&ev.key(), map_modifiers(ev.shift_key(), ev.ctrl_key(), ev.alt_key(), ev.meta_key()))
}
