//! Event subscription model between the host and the widgets.
//!
//! [`crate::page::Page::subscriptions`] lists every listener the host should
//! install: which element (or the document/window), which DOM event, and which
//! [`Target`] to report back. The host forwards each occurrence to
//! [`crate::page::Page::handle`] together with an [`Event`] payload and applies
//! the returned [`Outcome`] (currently just `preventDefault`).
//!
//! Listeners that share a source fire in subscription order. Both the drawer
//! and the lightbox subscribe to document `keydown`; each handler gates on its
//! own open state, so neither depends on running first.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use crate::input::KeyInput;

/// What a handler did with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The event was not for this handler (e.g. Escape while closed).
    Ignored,
    /// State changed; the browser default should still run.
    Handled,
    /// State changed and the browser default must be suppressed.
    PreventDefault,
}

impl Outcome {
    #[must_use]
    pub fn prevents_default(self) -> bool {
        matches!(self, Self::PreventDefault)
    }

    #[must_use]
    pub fn is_handled(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// The affordance a listener belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    DrawerToggle,
    DrawerOverlay,
    DrawerClose,
    /// A link cloned into the drawer menu.
    DrawerLink,
    /// Document-level keys for the drawer (Escape, Tab trap).
    DrawerKeys,
    /// The n-th lightbox trigger link.
    LightboxTrigger(usize),
    /// Clicks anywhere on the lightbox; only the backdrop and close button act.
    LightboxSurface,
    /// Document-level keys for the lightbox (Escape, Tab trap).
    LightboxKeys,
    ThemeToggle,
    /// Window scroll feeding the nav bar and back-to-top state.
    PageScroll,
    BackToTop,
    SkipLink,
    /// The n-th same-page anchor link.
    Anchor(usize),
    /// Window `load`, used to dismiss the preloader.
    PageLoad,
}

/// Where a listener is installed.
#[derive(Debug, Clone, PartialEq)]
pub enum Source<N> {
    Element(N),
    Document,
    Window,
}

/// DOM event type of a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Click,
    KeyDown,
    Scroll,
    Load,
}

impl EventKind {
    /// DOM event name used with `addEventListener`.
    #[must_use]
    pub fn dom_name(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::KeyDown => "keydown",
            Self::Scroll => "scroll",
            Self::Load => "load",
        }
    }
}

/// One listener the host must install.
#[derive(Debug, Clone, PartialEq)]
pub struct Subscription<N> {
    pub source: Source<N>,
    pub kind: EventKind,
    pub target: Target,
}

impl<N> Subscription<N> {
    #[must_use]
    pub fn on(node: N, kind: EventKind, target: Target) -> Self {
        Self { source: Source::Element(node), kind, target }
    }

    #[must_use]
    pub fn document(kind: EventKind, target: Target) -> Self {
        Self { source: Source::Document, kind, target }
    }

    #[must_use]
    pub fn window(kind: EventKind, target: Target) -> Self {
        Self { source: Source::Window, kind, target }
    }
}

/// Payload delivered with a subscribed event.
#[derive(Debug, Clone, PartialEq)]
pub enum Event<N> {
    /// A click; `origin` is the innermost element that was clicked.
    Click { origin: Option<N> },
    Key(KeyInput),
    /// Current vertical scroll offset of the window.
    Scroll { y: f64 },
    Load,
}
