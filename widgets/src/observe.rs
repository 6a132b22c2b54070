//! Viewport-intersection widgets: reveal-on-scroll and active section links.
//!
//! The host owns the actual `IntersectionObserver`s. It asks the page for the
//! list of [`Observation`]s, reports each intersecting entry back, and stops
//! observing a node when the handler says so.

#[cfg(test)]
#[path = "observe_test.rs"]
mod observe_test;

use crate::consts::{ACTIVE_CLASS, ARIA_CURRENT, VISIBLE_CLASS};
use crate::dom::Dom;

/// Which widget an observed node belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObserveKind {
    Reveal,
    Section,
}

/// A node the host should observe, and at what visibility threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation<N> {
    pub node: N,
    pub kind: ObserveKind,
    pub threshold: f64,
}

/// Elements that fade in the first time they scroll into view.
pub struct Reveal<N> {
    pending: Vec<N>,
}

impl<N: Clone + PartialEq + std::fmt::Debug> Reveal<N> {
    #[must_use]
    pub fn new(targets: Vec<N>) -> Self {
        Self { pending: targets }
    }

    /// Targets not yet revealed.
    #[must_use]
    pub fn pending(&self) -> &[N] {
        &self.pending
    }

    /// Reveal `node`. Returns `true` when the host should stop observing it.
    pub fn on_intersect<D: Dom<Node = N>>(&mut self, dom: &mut D, node: &N) -> bool {
        let before = self.pending.len();
        self.pending.retain(|n| n != node);
        if self.pending.len() == before {
            return false;
        }
        dom.add_class(node, VISIBLE_CLASS);
        true
    }

    /// Reveal everything at once, for hosts without intersection support.
    pub fn reveal_all<D: Dom<Node = N>>(&mut self, dom: &mut D) {
        for node in self.pending.drain(..) {
            dom.add_class(&node, VISIBLE_CLASS);
        }
    }
}

/// Highlights the nav link of the section currently in view.
pub struct SectionTracker<N> {
    sections: Vec<N>,
    links: Vec<N>,
}

impl<N: Clone + PartialEq + std::fmt::Debug> SectionTracker<N> {
    #[must_use]
    pub fn new(sections: Vec<N>, links: Vec<N>) -> Self {
        Self { sections, links }
    }

    #[must_use]
    pub fn sections(&self) -> &[N] {
        &self.sections
    }

    /// Mark the link pointing at `section` as current; clear all others.
    ///
    /// Sections stay observed, so this never asks the host to stop.
    pub fn on_intersect<D: Dom<Node = N>>(&self, dom: &mut D, section: &N) {
        let Some(id) = dom.attribute(section, "id") else {
            return;
        };
        let href = format!("#{id}");
        for link in &self.links {
            dom.remove_class(link, ACTIVE_CLASS);
            dom.remove_attribute(link, ARIA_CURRENT);
        }
        let current = self.links.iter().find(|link| dom.attribute(link, "href").as_deref() == Some(href.as_str()));
        if let Some(link) = current {
            dom.add_class(link, ACTIVE_CLASS);
            dom.set_attribute(link, ARIA_CURRENT, "page");
        }
    }
}
