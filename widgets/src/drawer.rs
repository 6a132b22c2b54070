//! Off-canvas navigation drawer with scroll locking and focus containment.
//!
//! The drawer owns nothing in the document. It holds handles to the panel and
//! its optional trigger, overlay and close control, and every transition
//! updates all of them together: the `open` class, `aria-expanded` on the
//! trigger, `aria-hidden` on the panel, the page scroll lock, and focus.
//!
//! The element focused before opening is remembered inside the `Open` state
//! and consumed by the close transition, so it never outlives one cycle.

#[cfg(test)]
#[path = "drawer_test.rs"]
mod drawer_test;

use crate::consts::{ARIA_EXPANDED, ARIA_HIDDEN, OPEN_CLASS};
use crate::dom::Dom;
use crate::events::Outcome;
use crate::focus::{self, TrapOutcome};
use crate::input::KeyInput;
use crate::scroll_lock::ScrollLock;

/// Open/closed state of the drawer.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawerState<N> {
    Closed,
    Open {
        /// Element focused immediately before opening, if any.
        last_focused: Option<N>,
    },
}

impl<N> Default for DrawerState<N> {
    fn default() -> Self {
        Self::Closed
    }
}

/// Elements a drawer is built from. Only the panel is required.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawerParts<N> {
    pub panel: N,
    pub trigger: Option<N>,
    pub overlay: Option<N>,
    pub close: Option<N>,
}

pub struct DrawerController<N> {
    panel: N,
    trigger: Option<N>,
    overlay: Option<N>,
    close: Option<N>,
    lock: ScrollLock<N>,
    state: DrawerState<N>,
    links: Vec<N>,
}

impl<N: Clone + PartialEq + std::fmt::Debug> DrawerController<N> {
    #[must_use]
    pub fn new(parts: DrawerParts<N>, lock: ScrollLock<N>) -> Self {
        let DrawerParts { panel, trigger, overlay, close } = parts;
        Self { panel, trigger, overlay, close, lock, state: DrawerState::Closed, links: Vec::new() }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.state, DrawerState::Open { .. })
    }

    #[must_use]
    pub fn state(&self) -> &DrawerState<N> {
        &self.state
    }

    #[must_use]
    pub fn panel(&self) -> &N {
        &self.panel
    }

    #[must_use]
    pub fn trigger(&self) -> Option<&N> {
        self.trigger.as_ref()
    }

    #[must_use]
    pub fn overlay(&self) -> Option<&N> {
        self.overlay.as_ref()
    }

    #[must_use]
    pub fn close_control(&self) -> Option<&N> {
        self.close.as_ref()
    }

    /// Links currently wired to close the drawer.
    #[must_use]
    pub fn links(&self) -> &[N] {
        &self.links
    }

    /// Replace the set of menu links that close the drawer when activated.
    pub fn set_links(&mut self, links: Vec<N>) {
        self.links = links;
    }

    fn marked(&self) -> impl Iterator<Item = &N> {
        std::iter::once(&self.panel).chain(self.overlay.iter()).chain(self.trigger.iter())
    }

    /// Open the drawer. Returns `false` if it was already open.
    pub fn open<D: Dom<Node = N>>(&mut self, dom: &mut D) -> bool {
        if self.is_open() {
            return false;
        }
        let last_focused = dom.active_element();
        for node in self.marked() {
            dom.add_class(node, OPEN_CLASS);
        }
        if let Some(trigger) = &self.trigger {
            dom.set_attribute(trigger, ARIA_EXPANDED, "true");
        }
        dom.set_attribute(&self.panel, ARIA_HIDDEN, "false");
        self.lock.acquire(dom);
        let focus_target = self.close.as_ref().unwrap_or(&self.panel);
        focus::focus_programmatically(dom, focus_target);
        self.state = DrawerState::Open { last_focused };
        log::debug!("drawer opened");
        true
    }

    /// Close the drawer and hand focus back. Returns `false` if it was already closed.
    pub fn close<D: Dom<Node = N>>(&mut self, dom: &mut D) -> bool {
        let DrawerState::Open { last_focused } = std::mem::take(&mut self.state) else {
            return false;
        };
        for node in self.marked() {
            dom.remove_class(node, OPEN_CLASS);
        }
        if let Some(trigger) = &self.trigger {
            dom.set_attribute(trigger, ARIA_EXPANDED, "false");
        }
        dom.set_attribute(&self.panel, ARIA_HIDDEN, "true");
        self.lock.release(dom);

        let restore = last_focused.filter(|node| focus::can_restore(dom, node));
        if let Some(node) = restore.as_ref().or(self.trigger.as_ref()) {
            focus::focus_programmatically(dom, node);
        }
        log::debug!("drawer closed");
        true
    }

    /// Open when closed, close when open. The state is read at call time.
    pub fn toggle<D: Dom<Node = N>>(&mut self, dom: &mut D) {
        if self.is_open() {
            self.close(dom);
        } else {
            self.open(dom);
        }
    }

    /// Document-level key handling: Escape closes, Tab stays inside the panel.
    ///
    /// Does nothing while closed so other Escape consumers are unaffected.
    pub fn handle_key<D: Dom<Node = N>>(&mut self, dom: &mut D, key: &KeyInput) -> Outcome {
        if !self.is_open() {
            return Outcome::Ignored;
        }
        if key.key.is_escape() {
            self.close(dom);
            return Outcome::Handled;
        }
        match focus::trap_tab(dom, &self.panel, key) {
            TrapOutcome::Wrapped => Outcome::PreventDefault,
            TrapOutcome::Pass => Outcome::Ignored,
        }
    }
}
