//! Scroll-driven nav bar state, back-to-top, and in-page navigation.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::config::ScrollConfig;
use crate::consts::{HIDDEN_CLASS, SCROLLED_CLASS, SHOW_CLASS};
use crate::dom::Dom;
use crate::events::Outcome;
use crate::focus;

/// Nav bar that shrinks once scrolled and hides while scrolling down.
pub struct NavScroll<N> {
    nav: N,
    last_y: f64,
    hidden: bool,
    scrolled_after: f64,
    hide_after: f64,
}

impl<N: Clone + PartialEq + std::fmt::Debug> NavScroll<N> {
    #[must_use]
    pub fn new(nav: N, config: &ScrollConfig) -> Self {
        Self { nav, last_y: 0.0, hidden: false, scrolled_after: config.scrolled_after, hide_after: config.hide_after }
    }

    #[must_use]
    pub fn nav(&self) -> &N {
        &self.nav
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Feed the current scroll offset.
    ///
    /// `scrolled` tracks `y` past the shrink distance. The bar hides on a
    /// downward scroll past the hide distance and reappears on any upward one.
    pub fn on_scroll<D: Dom<Node = N>>(&mut self, dom: &mut D, y: f64) {
        if y > self.scrolled_after {
            dom.add_class(&self.nav, SCROLLED_CLASS);
        } else {
            dom.remove_class(&self.nav, SCROLLED_CLASS);
        }

        if y > self.last_y && y > self.hide_after && !self.hidden {
            dom.add_class(&self.nav, HIDDEN_CLASS);
            self.hidden = true;
        } else if y < self.last_y && self.hidden {
            dom.remove_class(&self.nav, HIDDEN_CLASS);
            self.hidden = false;
        }
        self.last_y = y;
    }
}

/// Button that appears after scrolling down and returns to the top.
pub struct BackToTop<N> {
    button: N,
    show_after: f64,
}

impl<N: Clone + PartialEq + std::fmt::Debug> BackToTop<N> {
    #[must_use]
    pub fn new(button: N, config: &ScrollConfig) -> Self {
        Self { button, show_after: config.back_to_top_after }
    }

    #[must_use]
    pub fn button(&self) -> &N {
        &self.button
    }

    pub fn on_scroll<D: Dom<Node = N>>(&self, dom: &mut D, y: f64) {
        if y > self.show_after {
            dom.add_class(&self.button, SHOW_CLASS);
        } else {
            dom.remove_class(&self.button, SHOW_CLASS);
        }
    }

    pub fn activate<D: Dom<Node = N>>(&self, dom: &mut D) -> Outcome {
        dom.scroll_to(0.0);
        Outcome::Handled
    }
}

/// Smooth-scroll to the target of a same-page link and move focus there.
///
/// The scroll stops `gap` pixels below the nav bar. Links to `#` alone, or to
/// an id that does not exist, are left to the browser.
pub fn follow_anchor<D: Dom>(dom: &mut D, link: &D::Node, nav: Option<&D::Node>, gap: f64) -> Outcome {
    let Some(href) = dom.attribute(link, "href") else {
        return Outcome::Ignored;
    };
    if !href.starts_with('#') || href.len() < 2 {
        return Outcome::Ignored;
    }
    let Some(target) = dom.query(&href) else {
        return Outcome::Ignored;
    };
    let nav_height = nav.map_or(0.0, |n| dom.offset_height(n));
    let top = dom.offset_top(&target) - nav_height - gap;
    dom.scroll_to(top);
    focus::focus_after_scroll(dom, &target);
    Outcome::PreventDefault
}

/// Skip link: hand focus to the main landmark.
pub fn skip_to_main<D: Dom>(dom: &mut D, main: Option<&D::Node>) -> Outcome {
    let Some(main) = main else {
        return Outcome::Ignored;
    };
    focus::focus_programmatically(dom, main);
    Outcome::Handled
}
