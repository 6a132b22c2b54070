use super::*;
use crate::memory::{MemoryDom, NodeId};

struct Menus {
    dom: MemoryDom,
    source: NodeId,
    drawer: NodeId,
    footer: NodeId,
}

fn menus() -> Menus {
    let mut dom = MemoryDom::new();
    let body = dom.body().unwrap();
    let source = dom.append(body, "ul", &[("id", "nav-menu")]);
    for (href, label) in [("#about", "About"), ("#work", "Work"), ("#contact", "Contact")] {
        let li = dom.append(source, "li", &[]);
        let a = dom.append(li, "a", &[("href", href)]);
        dom.set_text_content(&a, label);
    }
    let drawer = dom.append(body, "ul", &[("id", "drawer-menu")]);
    let footer = dom.append(body, "ul", &[("id", "footer-links")]);
    Menus { dom, source, drawer, footer }
}

fn hrefs(dom: &MemoryDom, menu: NodeId) -> Vec<String> {
    dom.query_all_within(&menu, "li > a")
        .iter()
        .filter_map(|a| dom.attribute(a, "href"))
        .collect()
}

#[test]
fn clones_every_link_into_both_menus() {
    let mut m = menus();
    let links = populate(&mut m.dom, &m.source, Some(&m.drawer), Some(&m.footer));
    assert_eq!(links.len(), 3);
    assert_eq!(hrefs(&m.dom, m.drawer), vec!["#about", "#work", "#contact"]);
    assert_eq!(hrefs(&m.dom, m.footer), vec!["#about", "#work", "#contact"]);
    assert_eq!(m.dom.text_content(&links[1]), "Work");
}

#[test]
fn returned_links_are_the_drawer_clones() {
    let mut m = menus();
    let links = populate(&mut m.dom, &m.source, Some(&m.drawer), Some(&m.footer));
    for link in &links {
        assert!(m.dom.contains(&m.drawer, link));
        assert_eq!(m.dom.attribute(link, "role").as_deref(), Some("menuitem"));
    }
    let footer_links = m.dom.query_all_within(&m.footer, "a");
    assert!(footer_links.iter().all(|a| m.dom.attribute(a, "role").is_none()));
}

#[test]
fn source_is_untouched() {
    let mut m = menus();
    let before = m.dom.query_all_within(&m.source, "a");
    populate(&mut m.dom, &m.source, Some(&m.drawer), Some(&m.footer));
    assert_eq!(m.dom.query_all_within(&m.source, "a"), before);
    assert!(before.iter().all(|a| m.dom.attribute(a, "role").is_none()));
}

#[test]
fn populating_twice_does_not_duplicate() {
    let mut m = menus();
    populate(&mut m.dom, &m.source, Some(&m.drawer), Some(&m.footer));
    let links = populate(&mut m.dom, &m.source, Some(&m.drawer), Some(&m.footer));
    assert_eq!(links.len(), 3);
    assert_eq!(m.dom.children(m.drawer).len(), 3);
    assert_eq!(m.dom.children(m.footer).len(), 3);
}

#[test]
fn existing_items_are_replaced() {
    let mut m = menus();
    let stale = m.dom.append(m.drawer, "li", &[("class", "stale")]);
    populate(&mut m.dom, &m.source, Some(&m.drawer), None);
    assert!(!m.dom.is_connected(&stale));
    assert_eq!(m.dom.children(m.drawer).len(), 3);
}

#[test]
fn missing_targets_are_skipped() {
    let mut m = menus();
    assert!(populate(&mut m.dom, &m.source, None, Some(&m.footer)).is_empty());
    assert_eq!(m.dom.children(m.footer).len(), 3);
    assert!(m.dom.children(m.drawer).is_empty());
}

#[test]
fn empty_source_empties_targets() {
    let mut m = menus();
    populate(&mut m.dom, &m.source, Some(&m.drawer), Some(&m.footer));
    let body = m.dom.body().unwrap();
    let empty = m.dom.append(body, "ul", &[]);
    assert!(populate(&mut m.dom, &empty, Some(&m.drawer), Some(&m.footer)).is_empty());
    assert!(m.dom.children(m.drawer).is_empty());
    assert!(m.dom.children(m.footer).is_empty());
}
