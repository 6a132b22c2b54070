//! Page scroll lock shared by the drawer and the lightbox.
//!
//! The lock lives on the scroll container itself: a `data-scroll-lock`
//! attribute lists the widgets currently holding it, and `overflow: hidden`
//! is set while that list is non-empty. Acquiring twice under the same owner
//! is a no-op, so one release always undoes any number of acquires, and the
//! last owner to release is the one that restores scrolling.

#[cfg(test)]
#[path = "scroll_lock_test.rs"]
mod scroll_lock_test;

use crate::consts::SCROLL_LOCK_ATTR;
use crate::dom::Dom;

/// One widget's handle on the shared page scroll lock.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollLock<N> {
    root: N,
    owner: &'static str,
}

impl<N: Clone + PartialEq> ScrollLock<N> {
    #[must_use]
    pub fn new(root: N, owner: &'static str) -> Self {
        Self { root, owner }
    }

    #[must_use]
    pub fn owner(&self) -> &'static str {
        self.owner
    }

    /// Add this owner to the holder set and stop the page from scrolling.
    pub fn acquire<D: Dom<Node = N>>(&self, dom: &mut D) {
        let mut holders = holders(dom, &self.root);
        if !holders.iter().any(|h| h == self.owner) {
            holders.push(self.owner.to_owned());
        }
        dom.set_attribute(&self.root, SCROLL_LOCK_ATTR, &holders.join(" "));
        dom.set_style(&self.root, "overflow", "hidden");
    }

    /// Drop this owner from the holder set; scrolling resumes once it is empty.
    pub fn release<D: Dom<Node = N>>(&self, dom: &mut D) {
        let mut holders = holders(dom, &self.root);
        holders.retain(|h| h != self.owner);
        if holders.is_empty() {
            dom.remove_attribute(&self.root, SCROLL_LOCK_ATTR);
            dom.set_style(&self.root, "overflow", "");
        } else {
            dom.set_attribute(&self.root, SCROLL_LOCK_ATTR, &holders.join(" "));
        }
    }

    /// Whether this owner currently holds the lock.
    pub fn is_held<D: Dom<Node = N>>(&self, dom: &D) -> bool {
        holders(dom, &self.root).iter().any(|h| h == self.owner)
    }
}

/// Whether any widget holds the scroll lock on `root`.
pub fn is_locked<D: Dom>(dom: &D, root: &D::Node) -> bool {
    !holders(dom, root).is_empty()
}

fn holders<D: Dom>(dom: &D, root: &D::Node) -> Vec<String> {
    dom.attribute(root, SCROLL_LOCK_ATTR)
        .map(|raw| raw.split_whitespace().map(str::to_owned).collect())
        .unwrap_or_default()
}
