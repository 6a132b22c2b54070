//! Focusability rules, programmatic focus, and Tab containment.
//!
//! The focusable set is recomputed on every call. Drawer content is populated
//! after construction, so nothing here caches nodes.

#[cfg(test)]
#[path = "focus_test.rs"]
mod focus_test;

use crate::dom::Dom;
use crate::input::KeyInput;

/// Result of offering a key press to a focus trap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrapOutcome {
    /// The key was not a Tab, or the trap had nothing to do.
    Pass,
    /// Focus was wrapped; the browser's default traversal must be suppressed.
    Wrapped,
}

fn tabindex<D: Dom>(dom: &D, node: &D::Node) -> Option<i32> {
    dom.attribute(node, "tabindex").and_then(|raw| raw.trim().parse::<i32>().ok())
}

fn is_disabled<D: Dom>(dom: &D, node: &D::Node) -> bool {
    dom.attribute(node, "disabled").is_some()
}

/// Whether `node` takes part in sequential (Tab) navigation.
///
/// Links with an `href`, enabled buttons and form controls (hidden inputs
/// excepted), and anything with a non-negative `tabindex`. An explicit
/// negative `tabindex` removes an otherwise focusable element from the tab
/// order.
pub fn is_tabbable<D: Dom>(dom: &D, node: &D::Node) -> bool {
    if is_hidden_input(dom, node) {
        return false;
    }
    match tabindex(dom, node) {
        Some(index) if index < 0 => false,
        Some(_) => !is_disabled(dom, node),
        None => is_natively_focusable(dom, node),
    }
}

/// Whether `node` accepts `focus()` at all, tab order aside.
pub fn accepts_focus<D: Dom>(dom: &D, node: &D::Node) -> bool {
    if is_hidden_input(dom, node) {
        return false;
    }
    if tabindex(dom, node).is_some() {
        return !is_disabled(dom, node);
    }
    is_natively_focusable(dom, node)
}

/// `<input type="hidden">` is never rendered, so it never takes focus.
fn is_hidden_input<D: Dom>(dom: &D, node: &D::Node) -> bool {
    dom.tag_name(node) == "input"
        && dom.attribute(node, "type").is_some_and(|t| t.trim().eq_ignore_ascii_case("hidden"))
}

fn is_natively_focusable<D: Dom>(dom: &D, node: &D::Node) -> bool {
    match dom.tag_name(node).as_str() {
        "a" | "area" => dom.attribute(node, "href").is_some(),
        "button" | "input" | "select" | "textarea" => !is_disabled(dom, node),
        _ => false,
    }
}

/// Tabbable descendants of `scope`, in document order.
pub fn tabbable_within<D: Dom>(dom: &D, scope: &D::Node) -> Vec<D::Node> {
    dom.descendants(scope)
        .into_iter()
        .filter(|node| is_tabbable(dom, node))
        .collect()
}

/// Whether focus could be handed back to `node` right now.
pub fn can_restore<D: Dom>(dom: &D, node: &D::Node) -> bool {
    dom.is_connected(node) && accepts_focus(dom, node)
}

/// Focus `node`, making it temporarily focusable when it is not.
///
/// Containers such as the drawer panel or `<main>` get `tabindex="-1"` for
/// the duration of the call so the browser will accept focus.
pub fn focus_programmatically<D: Dom>(dom: &mut D, node: &D::Node) {
    force_focus(dom, node, D::focus);
}

/// [`focus_programmatically`] without scrolling, for targets a smooth scroll
/// is already moving to.
pub fn focus_after_scroll<D: Dom>(dom: &mut D, node: &D::Node) {
    force_focus(dom, node, D::focus_without_scroll);
}

fn force_focus<D: Dom>(dom: &mut D, node: &D::Node, focus: fn(&mut D, &D::Node)) {
    if accepts_focus(dom, node) {
        focus(dom, node);
        return;
    }
    dom.set_attribute(node, "tabindex", "-1");
    focus(dom, node);
    dom.remove_attribute(node, "tabindex");
}

/// Keep Tab and Shift+Tab cycling inside `scope`.
///
/// Tab on the last tabbable wraps to the first; Shift+Tab on the first wraps
/// to the last. When focus sits outside the tabbable set (e.g. on the
/// container itself) it is pulled to the first or last element. A scope
/// without tabbable elements leaves the key alone.
pub fn trap_tab<D: Dom>(dom: &mut D, scope: &D::Node, key: &KeyInput) -> TrapOutcome {
    if !key.key.is_tab() {
        return TrapOutcome::Pass;
    }
    let tabbables = tabbable_within(dom, scope);
    let (Some(first), Some(last)) = (tabbables.first(), tabbables.last()) else {
        return TrapOutcome::Pass;
    };
    let active = dom.active_element();
    let position = active.as_ref().and_then(|a| tabbables.iter().position(|n| n == a));

    let destination = if key.is_backward_tab() {
        position.is_none_or(|i| i == 0).then(|| last.clone())
    } else {
        position.is_none_or(|i| i + 1 == tabbables.len()).then(|| first.clone())
    };
    let Some(destination) = destination else {
        return TrapOutcome::Pass;
    };
    dom.focus(&destination);
    TrapOutcome::Wrapped
}
