//! Site configuration: selectors, theme storage, distances and timings.
//!
//! Every field has a default that matches the stock portfolio markup, so an
//! empty object (or no config at all) is valid. Pages with different markup
//! override only what differs:
//!
//! ```json
//! { "selectors": { "theme_toggle": "#theme-toggle" }, "theme": { "storage_key": "site-theme" } }
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    ANCHOR_GAP_PX, BACK_TO_TOP_AFTER_PX, NAV_HIDE_AFTER_PX, NAV_SCROLLED_AFTER_PX, PRELOADER_FADE_MS,
    PRELOADER_FALLBACK_MS, REVEAL_THRESHOLD, SECTION_THRESHOLD,
};

/// Error returned by [`SiteConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The text is not valid JSON or does not fit the config shape.
    #[error("failed to parse site config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A field parsed but holds an unusable value.
    #[error("invalid site config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub selectors: Selectors,
    pub theme: ThemeConfig,
    pub scroll: ScrollConfig,
    pub observe: ObserveConfig,
    pub preloader: PreloaderConfig,
}

impl SiteConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values no widget can work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.theme.storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid("theme.storage_key must not be empty".into()));
        }
        if self.theme.dark_class.trim().is_empty() {
            return Err(ConfigError::Invalid("theme.dark_class must not be empty".into()));
        }
        for (name, value) in [
            ("observe.reveal_threshold", self.observe.reveal_threshold),
            ("observe.section_threshold", self.observe.section_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Invalid(format!("{name} must be within 0..=1, got {value}")));
            }
        }
        for (name, value) in [
            ("scroll.scrolled_after", self.scroll.scrolled_after),
            ("scroll.hide_after", self.scroll.hide_after),
            ("scroll.back_to_top_after", self.scroll.back_to_top_after),
            ("scroll.anchor_gap", self.scroll.anchor_gap),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!("{name} must be a non-negative number, got {value}")));
            }
        }
        Ok(())
    }
}

/// CSS selectors for every element the widgets look up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub nav: String,
    pub drawer: String,
    pub drawer_toggle: String,
    pub drawer_overlay: String,
    /// Looked up inside the drawer panel.
    pub drawer_close: String,
    pub nav_menu: String,
    pub drawer_menu: String,
    pub footer_menu: String,
    pub theme_toggle: String,
    pub back_to_top: String,
    pub skip_link: String,
    pub main: String,
    pub anchors: String,
    pub reveal: String,
    pub sections: String,
    pub section_links: String,
    pub lightbox_triggers: String,
    /// Looked up inside each lightbox trigger.
    pub lightbox_caption: String,
    pub preloader: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            nav: ".site-nav".into(),
            drawer: "#nav-drawer".into(),
            drawer_toggle: ".nav-toggle".into(),
            drawer_overlay: ".nav-overlay".into(),
            drawer_close: ".drawer-close".into(),
            nav_menu: "#nav-menu".into(),
            drawer_menu: "#drawer-menu".into(),
            footer_menu: "#footer-links".into(),
            theme_toggle: ".theme-toggle".into(),
            back_to_top: ".back-to-top".into(),
            skip_link: ".skip-link".into(),
            main: "#main".into(),
            anchors: "a[href^=\"#\"]".into(),
            reveal: ".reveal".into(),
            sections: "main > section[id]".into(),
            section_links: ".nav-menu a".into(),
            lightbox_triggers: ".project-card a".into(),
            lightbox_caption: ".project-meta h3".into(),
            preloader: "#loader".into(),
        }
    }
}

/// Theme persistence and presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Preference store key holding `"light"` or `"dark"`.
    pub storage_key: String,
    /// Class toggled on `<body>` while dark.
    pub dark_class: String,
    /// Icon element inside the toggle button.
    pub icon_selector: String,
    /// Icon class shown while light (offers dark).
    pub light_icon: String,
    /// Icon class shown while dark (offers light).
    pub dark_icon: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".into(),
            dark_class: "dark-mode".into(),
            icon_selector: "i".into(),
            light_icon: "fa-moon".into(),
            dark_icon: "fa-sun".into(),
        }
    }
}

/// Scroll distances in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    pub scrolled_after: f64,
    pub hide_after: f64,
    pub back_to_top_after: f64,
    pub anchor_gap: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            scrolled_after: NAV_SCROLLED_AFTER_PX,
            hide_after: NAV_HIDE_AFTER_PX,
            back_to_top_after: BACK_TO_TOP_AFTER_PX,
            anchor_gap: ANCHOR_GAP_PX,
        }
    }
}

/// Intersection thresholds (fraction of the element visible).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObserveConfig {
    pub reveal_threshold: f64,
    pub section_threshold: f64,
}

impl Default for ObserveConfig {
    fn default() -> Self {
        Self { reveal_threshold: REVEAL_THRESHOLD, section_threshold: SECTION_THRESHOLD }
    }
}

/// Preloader timings in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreloaderConfig {
    pub fallback_ms: u32,
    pub fade_ms: u32,
}

impl Default for PreloaderConfig {
    fn default() -> Self {
        Self { fallback_ms: PRELOADER_FALLBACK_MS, fade_ms: PRELOADER_FADE_MS }
    }
}
