//! Drawer and footer menus cloned from the canonical nav list.
//!
//! The page renders its links once, in the main nav. The drawer menu and the
//! footer quick-links are rebuilt from that list: each target is emptied and
//! gets one `<li>` per source link holding a deep clone of it.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use crate::dom::Dom;

/// Rebuild `drawer_menu` and `footer_menu` from the links inside `source`.
///
/// Returns the links now in the drawer menu, in order, so the caller can wire
/// them to close the drawer. Drawer clones get `role="menuitem"`. Calling this
/// again replaces rather than appends.
pub fn populate<D: Dom>(
    dom: &mut D,
    source: &D::Node,
    drawer_menu: Option<&D::Node>,
    footer_menu: Option<&D::Node>,
) -> Vec<D::Node> {
    let links = dom.query_all_within(source, "a");
    let mut drawer_links = Vec::new();

    if let Some(menu) = drawer_menu {
        dom.clear_children(menu);
        for link in &links {
            if let Some(copy) = append_item(dom, menu, link) {
                dom.set_attribute(&copy, "role", "menuitem");
                drawer_links.push(copy);
            }
        }
    }

    if let Some(menu) = footer_menu {
        dom.clear_children(menu);
        for link in &links {
            append_item(dom, menu, link);
        }
    }

    log::debug!("menus populated from {} links", links.len());
    drawer_links
}

fn append_item<D: Dom>(dom: &mut D, menu: &D::Node, link: &D::Node) -> Option<D::Node> {
    let item = dom.create_element("li")?;
    let copy = dom.clone_node(link)?;
    dom.append_child(&item, &copy);
    dom.append_child(menu, &item);
    Some(copy)
}
