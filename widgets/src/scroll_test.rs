#![allow(clippy::float_cmp)]

use super::*;
use crate::memory::{MemoryDom, NodeId};

fn nav_page() -> (MemoryDom, NodeId) {
    let mut dom = MemoryDom::new();
    let body = dom.body().unwrap();
    let nav = dom.append(body, "nav", &[("class", "site-nav")]);
    (dom, nav)
}

// =============================================================
// Nav bar
// =============================================================

#[test]
fn scrolled_class_follows_offset() {
    let (mut dom, nav) = nav_page();
    let mut bar = NavScroll::new(nav, &ScrollConfig::default());
    bar.on_scroll(&mut dom, 5.0);
    assert!(!dom.has_class(&nav, SCROLLED_CLASS));
    bar.on_scroll(&mut dom, 11.0);
    assert!(dom.has_class(&nav, SCROLLED_CLASS));
    bar.on_scroll(&mut dom, 0.0);
    assert!(!dom.has_class(&nav, SCROLLED_CLASS));
}

#[test]
fn hides_on_downward_scroll_past_threshold() {
    let (mut dom, nav) = nav_page();
    let mut bar = NavScroll::new(nav, &ScrollConfig::default());
    bar.on_scroll(&mut dom, 100.0);
    assert!(!bar.is_hidden());
    bar.on_scroll(&mut dom, 200.0);
    assert!(bar.is_hidden());
    assert!(dom.has_class(&nav, HIDDEN_CLASS));
}

#[test]
fn shows_again_on_any_upward_scroll() {
    let (mut dom, nav) = nav_page();
    let mut bar = NavScroll::new(nav, &ScrollConfig::default());
    bar.on_scroll(&mut dom, 500.0);
    bar.on_scroll(&mut dom, 499.0);
    assert!(!bar.is_hidden());
    assert!(!dom.has_class(&nav, HIDDEN_CLASS));
    assert!(dom.has_class(&nav, SCROLLED_CLASS));
}

#[test]
fn same_offset_keeps_state() {
    let (mut dom, nav) = nav_page();
    let mut bar = NavScroll::new(nav, &ScrollConfig::default());
    bar.on_scroll(&mut dom, 500.0);
    bar.on_scroll(&mut dom, 500.0);
    assert!(bar.is_hidden());
}

#[test]
fn custom_distances_apply() {
    let (mut dom, nav) = nav_page();
    let config = ScrollConfig { scrolled_after: 50.0, hide_after: 1000.0, ..ScrollConfig::default() };
    let mut bar = NavScroll::new(nav, &config);
    bar.on_scroll(&mut dom, 40.0);
    assert!(!dom.has_class(&nav, SCROLLED_CLASS));
    bar.on_scroll(&mut dom, 900.0);
    assert!(dom.has_class(&nav, SCROLLED_CLASS));
    assert!(!bar.is_hidden());
    assert_eq!(bar.nav(), &nav);
}

// =============================================================
// Back to top
// =============================================================

#[test]
fn back_to_top_shows_after_distance() {
    let (mut dom, _) = nav_page();
    let body = dom.body().unwrap();
    let button = dom.append(body, "button", &[("class", "back-to-top")]);
    let back = BackToTop::new(button, &ScrollConfig::default());
    back.on_scroll(&mut dom, 400.0);
    assert!(!dom.has_class(&button, SHOW_CLASS));
    back.on_scroll(&mut dom, 401.0);
    assert!(dom.has_class(&button, SHOW_CLASS));
    back.on_scroll(&mut dom, 10.0);
    assert!(!dom.has_class(&button, SHOW_CLASS));
}

#[test]
fn back_to_top_scrolls_home() {
    let (mut dom, _) = nav_page();
    let body = dom.body().unwrap();
    let button = dom.append(body, "button", &[]);
    let back = BackToTop::new(button, &ScrollConfig::default());
    dom.scroll_to(900.0);
    assert_eq!(back.activate(&mut dom), Outcome::Handled);
    assert_eq!(dom.scroll_y(), 0.0);
}

// =============================================================
// Anchors and skip link
// =============================================================

fn anchor_page() -> (MemoryDom, NodeId, NodeId, NodeId) {
    let (mut dom, nav) = nav_page();
    dom.set_layout(nav, 0.0, 70.0);
    let link = dom.append(nav, "a", &[("href", "#work")]);
    let body = dom.body().unwrap();
    let section = dom.append(body, "section", &[("id", "work")]);
    dom.set_layout(section, 1200.0, 600.0);
    (dom, nav, link, section)
}

#[test]
fn anchor_scrolls_below_nav_and_focuses_target() {
    let (mut dom, nav, link, section) = anchor_page();
    assert_eq!(follow_anchor(&mut dom, &link, Some(&nav), 20.0), Outcome::PreventDefault);
    assert_eq!(dom.scroll_y(), 1110.0);
    assert_eq!(dom.active_element(), Some(section));
    assert_eq!(dom.attribute(&section, "tabindex"), None);
    assert!(!dom.focus_scrolled(), "focus must not fight the smooth scroll");
}

#[test]
fn anchor_without_nav_uses_gap_only() {
    let (mut dom, _, link, _) = anchor_page();
    follow_anchor(&mut dom, &link, None, 20.0);
    assert_eq!(dom.scroll_y(), 1180.0);
}

#[test]
fn bare_hash_and_missing_targets_are_left_to_browser() {
    let (mut dom, nav, _, _) = anchor_page();
    let bare = dom.append(nav, "a", &[("href", "#")]);
    let missing = dom.append(nav, "a", &[("href", "#nowhere")]);
    let external = dom.append(nav, "a", &[("href", "https://example.com")]);
    for link in [bare, missing, external] {
        assert_eq!(follow_anchor(&mut dom, &link, Some(&nav), 20.0), Outcome::Ignored);
    }
    assert_eq!(dom.scroll_y(), 0.0);
}

#[test]
fn skip_link_focuses_main() {
    let (mut dom, _) = nav_page();
    let body = dom.body().unwrap();
    let main = dom.append(body, "main", &[("id", "main")]);
    assert_eq!(skip_to_main(&mut dom, Some(&main)), Outcome::Handled);
    assert_eq!(dom.active_element(), Some(main));
    assert!(dom.focus_scrolled());
    assert_eq!(skip_to_main(&mut dom, None), Outcome::Ignored);
}
