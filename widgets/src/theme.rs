//! Light/dark theme toggle persisted across page loads.
//!
//! The stored preference is read once when the widget is built and applied
//! to `<body>` as a class. Every toggle flips the class, swaps the toggle's
//! icon, and writes `"light"` or `"dark"` back to the store.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::config::ThemeConfig;
use crate::consts::ARIA_PRESSED;
use crate::dom::Dom;

/// Page color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value written to the preference store.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Interpret a stored value. Anything but `"dark"` is light.
    #[must_use]
    pub fn from_stored(raw: &str) -> Self {
        if raw == "dark" { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Key–value storage that survives page loads (`localStorage` in the browser).
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory [`PreferenceStore`]. Clones share one backing map, the way two
/// page loads share one origin's `localStorage`.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

/// Theme state bound to `<body>` and an optional toggle button.
pub struct ThemeToggle<N> {
    target: N,
    button: Option<N>,
    icon: Option<N>,
    config: ThemeConfig,
    theme: Theme,
}

impl<N: Clone + PartialEq + std::fmt::Debug> ThemeToggle<N> {
    /// Read the stored preference and apply it to `target`.
    ///
    /// An empty store means light. The toggle button is optional; without it
    /// the stored theme is still applied.
    pub fn init<D: Dom<Node = N>>(
        dom: &mut D,
        store: &dyn PreferenceStore,
        target: N,
        button: Option<N>,
        config: ThemeConfig,
    ) -> Self {
        let icon = button.as_ref().and_then(|b| dom.query_within(b, &config.icon_selector));
        let theme = store.get(&config.storage_key).map_or(Theme::Light, |raw| Theme::from_stored(&raw));
        let toggle = Self { target, button, icon, config, theme };
        toggle.apply(dom);
        toggle
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn button(&self) -> Option<&N> {
        self.button.as_ref()
    }

    /// Flip the theme, apply it, and persist it.
    pub fn toggle<D: Dom<Node = N>>(&mut self, dom: &mut D, store: &mut dyn PreferenceStore) -> Theme {
        self.theme = self.theme.toggled();
        self.apply(dom);
        store.set(&self.config.storage_key, self.theme.as_str());
        log::debug!("theme set to {}", self.theme.as_str());
        self.theme
    }

    fn apply<D: Dom<Node = N>>(&self, dom: &mut D) {
        let dark = self.theme == Theme::Dark;
        if dark {
            dom.add_class(&self.target, &self.config.dark_class);
        } else {
            dom.remove_class(&self.target, &self.config.dark_class);
        }
        if let Some(button) = &self.button {
            dom.set_attribute(button, ARIA_PRESSED, if dark { "true" } else { "false" });
        }
        if let Some(icon) = &self.icon {
            let (from, to) = if dark {
                (&self.config.light_icon, &self.config.dark_icon)
            } else {
                (&self.config.dark_icon, &self.config.light_icon)
            };
            if dom.has_class(icon, from) {
                dom.remove_class(icon, from);
                dom.add_class(icon, to);
            }
        }
    }
}
