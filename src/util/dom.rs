//! [`Dom`] over the live browser document.
//!
//! Nodes are `web_sys::Element` handles, compared by JS identity. Calls that
//! can throw are logged at `warn` and otherwise ignored, so one bad selector
//! or a detached node never takes the rest of the page down.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, FocusOptions, HtmlElement, NodeList, ScrollBehavior, ScrollToOptions, Window};
use widgets::dom::Dom;

pub struct WebDom {
    window: Window,
    document: Document,
}

impl WebDom {
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }
}

fn warn_on_err<T>(op: &str, result: Result<T, JsValue>) {
    if let Err(err) = result {
        log::warn!("{op} failed: {err:?}");
    }
}

fn elements(op: &str, list: Result<NodeList, JsValue>) -> Vec<Element> {
    let list = match list {
        Ok(list) => list,
        Err(err) => {
            log::warn!("{op} failed: {err:?}");
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn first(op: &str, found: Result<Option<Element>, JsValue>) -> Option<Element> {
    found.unwrap_or_else(|err| {
        log::warn!("{op} failed: {err:?}");
        None
    })
}

fn html(node: &Element) -> Option<&HtmlElement> {
    node.dyn_ref::<HtmlElement>()
}

impl Dom for WebDom {
    type Node = Element;

    fn body(&self) -> Option<Element> {
        self.document.body().map(Element::from)
    }

    fn query(&self, selector: &str) -> Option<Element> {
        first(selector, self.document.query_selector(selector))
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        elements(selector, self.document.query_selector_all(selector))
    }

    fn query_within(&self, scope: &Element, selector: &str) -> Option<Element> {
        first(selector, scope.query_selector(selector))
    }

    fn query_all_within(&self, scope: &Element, selector: &str) -> Vec<Element> {
        elements(selector, scope.query_selector_all(selector))
    }

    fn descendants(&self, scope: &Element) -> Vec<Element> {
        self.query_all_within(scope, "*")
    }

    fn contains(&self, ancestor: &Element, node: &Element) -> bool {
        ancestor.contains(Some(node.as_ref()))
    }

    fn is_connected(&self, node: &Element) -> bool {
        node.is_connected()
    }

    fn tag_name(&self, node: &Element) -> String {
        node.tag_name().to_ascii_lowercase()
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_attribute(&mut self, node: &Element, name: &str, value: &str) {
        warn_on_err("setAttribute", node.set_attribute(name, value));
    }

    fn remove_attribute(&mut self, node: &Element, name: &str) {
        warn_on_err("removeAttribute", node.remove_attribute(name));
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn add_class(&mut self, node: &Element, class: &str) {
        warn_on_err("classList.add", node.class_list().add_1(class));
    }

    fn remove_class(&mut self, node: &Element, class: &str) {
        warn_on_err("classList.remove", node.class_list().remove_1(class));
    }

    fn set_style(&mut self, node: &Element, property: &str, value: &str) {
        let Some(el) = html(node) else {
            return;
        };
        let style = el.style();
        if value.is_empty() {
            warn_on_err("style.removeProperty", style.remove_property(property));
        } else {
            warn_on_err("style.setProperty", style.set_property(property, value));
        }
    }

    fn text_content(&self, node: &Element) -> String {
        node.text_content().unwrap_or_default()
    }

    fn set_text_content(&mut self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn create_element(&mut self, tag: &str) -> Option<Element> {
        self.document
            .create_element(tag)
            .map_err(|err| log::warn!("createElement({tag}) failed: {err:?}"))
            .ok()
    }

    fn clone_node(&mut self, node: &Element) -> Option<Element> {
        node.clone_node_with_deep(true)
            .map_err(|err| log::warn!("cloneNode failed: {err:?}"))
            .ok()
            .and_then(|copy| copy.dyn_into::<Element>().ok())
    }

    fn append_child(&mut self, parent: &Element, child: &Element) {
        warn_on_err("appendChild", parent.append_child(child));
    }

    fn remove_node(&mut self, node: &Element) {
        node.remove();
    }

    fn clear_children(&mut self, node: &Element) {
        node.set_text_content(None);
    }

    fn active_element(&self) -> Option<Element> {
        self.document.active_element()
    }

    fn focus(&mut self, node: &Element) {
        if let Some(el) = html(node) {
            warn_on_err("focus", el.focus());
        }
    }

    fn focus_without_scroll(&mut self, node: &Element) {
        let Some(el) = html(node) else {
            return;
        };
        let options = FocusOptions::new();
        options.set_prevent_scroll(true);
        warn_on_err("focus", el.focus_with_options(&options));
    }

    fn offset_top(&self, node: &Element) -> f64 {
        html(node).map_or(0.0, |el| f64::from(el.offset_top()))
    }

    fn offset_height(&self, node: &Element) -> f64 {
        html(node).map_or(0.0, |el| f64::from(el.offset_height()))
    }

    fn scroll_to(&mut self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}
