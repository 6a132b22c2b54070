use super::*;
use crate::memory::{MemoryDom, NodeId};

fn reveal_page() -> (MemoryDom, Vec<NodeId>) {
    let mut dom = MemoryDom::new();
    let body = dom.body().unwrap();
    let nodes = (0..3).map(|_| dom.append(body, "div", &[("class", "reveal")])).collect();
    (dom, nodes)
}

// =============================================================
// Reveal
// =============================================================

#[test]
fn intersecting_node_becomes_visible_once() {
    let (mut dom, nodes) = reveal_page();
    let mut reveal = Reveal::new(nodes.clone());
    assert!(reveal.on_intersect(&mut dom, &nodes[1]));
    assert!(dom.has_class(&nodes[1], VISIBLE_CLASS));
    assert!(!dom.has_class(&nodes[0], VISIBLE_CLASS));
    assert_eq!(reveal.pending(), &[nodes[0], nodes[2]]);
    assert!(!reveal.on_intersect(&mut dom, &nodes[1]));
}

#[test]
fn unknown_node_is_ignored() {
    let (mut dom, nodes) = reveal_page();
    let mut reveal = Reveal::new(vec![nodes[0]]);
    assert!(!reveal.on_intersect(&mut dom, &nodes[2]));
    assert!(!dom.has_class(&nodes[2], VISIBLE_CLASS));
}

#[test]
fn reveal_all_shows_everything_pending() {
    let (mut dom, nodes) = reveal_page();
    let mut reveal = Reveal::new(nodes.clone());
    reveal.reveal_all(&mut dom);
    assert!(reveal.pending().is_empty());
    assert!(nodes.iter().all(|n| dom.has_class(n, VISIBLE_CLASS)));
}

// =============================================================
// Sections
// =============================================================

fn section_page() -> (MemoryDom, Vec<NodeId>, Vec<NodeId>) {
    let mut dom = MemoryDom::new();
    let body = dom.body().unwrap();
    let menu = dom.append(body, "ul", &[("class", "nav-menu")]);
    let main = dom.append(body, "main", &[]);
    let mut sections = Vec::new();
    let mut links = Vec::new();
    for id in ["about", "work", "contact"] {
        let href = format!("#{id}");
        let li = dom.append(menu, "li", &[]);
        links.push(dom.append(li, "a", &[("href", href.as_str())]));
        sections.push(dom.append(main, "section", &[("id", id)]));
    }
    (dom, sections, links)
}

#[test]
fn section_in_view_marks_its_link() {
    let (mut dom, sections, links) = section_page();
    let tracker = SectionTracker::new(sections.clone(), links.clone());
    tracker.on_intersect(&mut dom, &sections[1]);
    assert!(dom.has_class(&links[1], ACTIVE_CLASS));
    assert_eq!(dom.attribute(&links[1], ARIA_CURRENT).as_deref(), Some("page"));
    assert!(!dom.has_class(&links[0], ACTIVE_CLASS));
}

#[test]
fn only_one_link_is_current() {
    let (mut dom, sections, links) = section_page();
    let tracker = SectionTracker::new(sections.clone(), links.clone());
    tracker.on_intersect(&mut dom, &sections[0]);
    tracker.on_intersect(&mut dom, &sections[2]);
    let current: Vec<NodeId> = links.iter().copied().filter(|l| dom.has_class(l, ACTIVE_CLASS)).collect();
    assert_eq!(current, vec![links[2]]);
    assert_eq!(dom.attribute(&links[0], ARIA_CURRENT), None);
}

#[test]
fn section_without_link_clears_current() {
    let (mut dom, sections, links) = section_page();
    let main = dom.query("main").unwrap();
    let extra = dom.append(main, "section", &[("id", "extra")]);
    let tracker = SectionTracker::new(vec![sections[0], extra], links.clone());
    tracker.on_intersect(&mut dom, &sections[0]);
    tracker.on_intersect(&mut dom, &extra);
    assert!(links.iter().all(|l| !dom.has_class(l, ACTIVE_CLASS)));
    assert_eq!(tracker.sections().len(), 2);
}
