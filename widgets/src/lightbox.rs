//! Modal image viewer for project thumbnails.
//!
//! Same shape as the drawer: one open/close pair that moves the `open` class,
//! `aria-hidden`, the shared scroll lock and focus together, a Tab trap while
//! open, and an Escape handler that ignores the key while closed.
//!
//! The markup is generated on mount:
//!
//! ```text
//! div.lightbox[aria-hidden]
//!   div.lb-inner[role=dialog]
//!     button.lb-close
//!     img
//!     div.lb-caption > strong
//! ```

#[cfg(test)]
#[path = "lightbox_test.rs"]
mod lightbox_test;

use crate::consts::{ARIA_HIDDEN, OPEN_CLASS};
use crate::dom::Dom;
use crate::events::Outcome;
use crate::focus::{self, TrapOutcome};
use crate::input::KeyInput;
use crate::scroll_lock::ScrollLock;

/// Open/closed state of the lightbox.
#[derive(Debug, Clone, PartialEq)]
pub enum LightboxState<N> {
    Closed,
    Open {
        /// The link that opened the viewer; focus returns there on close.
        trigger: Option<N>,
    },
}

impl<N> Default for LightboxState<N> {
    fn default() -> Self {
        Self::Closed
    }
}

pub struct Lightbox<N> {
    root: N,
    dialog: N,
    image: N,
    caption: N,
    close: N,
    lock: ScrollLock<N>,
    state: LightboxState<N>,
}

impl<N: Clone + PartialEq + std::fmt::Debug> Lightbox<N> {
    /// Create the viewer markup and append it to `host` (normally `<body>`).
    ///
    /// `None` if the document refuses to create an element.
    pub fn build<D: Dom<Node = N>>(dom: &mut D, host: &N, lock: ScrollLock<N>) -> Option<Self> {
        let root = dom.create_element("div")?;
        dom.set_attribute(&root, "class", "lightbox");
        dom.set_attribute(&root, ARIA_HIDDEN, "true");

        let dialog = dom.create_element("div")?;
        dom.set_attribute(&dialog, "class", "lb-inner");
        dom.set_attribute(&dialog, "role", "dialog");
        dom.set_attribute(&dialog, "aria-label", "Image viewer");

        let close = dom.create_element("button")?;
        dom.set_attribute(&close, "class", "lb-close");
        dom.set_attribute(&close, "aria-label", "Close");
        dom.set_text_content(&close, "\u{d7}");

        let image = dom.create_element("img")?;
        dom.set_attribute(&image, "alt", "");

        let caption = dom.create_element("div")?;
        dom.set_attribute(&caption, "class", "lb-caption");

        dom.append_child(&dialog, &close);
        dom.append_child(&dialog, &image);
        dom.append_child(&dialog, &caption);
        dom.append_child(&root, &dialog);
        dom.append_child(host, &root);

        Some(Self { root, dialog, image, caption, close, lock, state: LightboxState::Closed })
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.state, LightboxState::Open { .. })
    }

    #[must_use]
    pub fn root(&self) -> &N {
        &self.root
    }

    #[must_use]
    pub fn image(&self) -> &N {
        &self.image
    }

    #[must_use]
    pub fn caption(&self) -> &N {
        &self.caption
    }

    #[must_use]
    pub fn close_control(&self) -> &N {
        &self.close
    }

    /// Show `image_url` with `caption`. Returns `false` if already open.
    pub fn open<D: Dom<Node = N>>(&mut self, dom: &mut D, image_url: &str, caption: &str, trigger: Option<N>) -> bool {
        if self.is_open() {
            return false;
        }
        dom.set_attribute(&self.image, "src", image_url);
        dom.clear_children(&self.caption);
        match dom.create_element("strong") {
            Some(strong) => {
                dom.set_text_content(&strong, caption);
                dom.append_child(&self.caption, &strong);
            }
            None => dom.set_text_content(&self.caption, caption),
        }

        dom.add_class(&self.root, OPEN_CLASS);
        dom.set_attribute(&self.root, ARIA_HIDDEN, "false");
        self.lock.acquire(dom);
        focus::focus_programmatically(dom, &self.close);
        self.state = LightboxState::Open { trigger };
        log::debug!("lightbox opened: {image_url}");
        true
    }

    /// Hide the viewer. Returns `false` if already closed.
    pub fn close<D: Dom<Node = N>>(&mut self, dom: &mut D) -> bool {
        let LightboxState::Open { trigger } = std::mem::take(&mut self.state) else {
            return false;
        };
        dom.remove_class(&self.root, OPEN_CLASS);
        dom.set_attribute(&self.root, ARIA_HIDDEN, "true");
        self.lock.release(dom);
        if let Some(trigger) = trigger.filter(|node| focus::can_restore(dom, node)) {
            dom.focus(&trigger);
        }
        log::debug!("lightbox closed");
        true
    }

    /// Click anywhere on the viewer. Only the backdrop itself and the close
    /// button close it; clicks on the image or caption are ignored.
    pub fn handle_click<D: Dom<Node = N>>(&mut self, dom: &mut D, origin: Option<&N>) -> Outcome {
        let Some(origin) = origin else {
            return Outcome::Ignored;
        };
        let on_close = dom.contains(&self.close, origin);
        if (*origin == self.root || on_close) && self.close(dom) {
            return Outcome::Handled;
        }
        Outcome::Ignored
    }

    /// Escape closes; Tab stays inside the dialog. Ignored while closed.
    pub fn handle_key<D: Dom<Node = N>>(&mut self, dom: &mut D, key: &KeyInput) -> Outcome {
        if !self.is_open() {
            return Outcome::Ignored;
        }
        if key.key.is_escape() {
            self.close(dom);
            return Outcome::Handled;
        }
        match focus::trap_tab(dom, &self.dialog, key) {
            TrapOutcome::Wrapped => Outcome::PreventDefault,
            TrapOutcome::Pass => Outcome::Ignored,
        }
    }
}
