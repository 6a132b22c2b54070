//! In-memory document used by tests and headless hosts.
//!
//! `MemoryDom` is an arena of element nodes rooted at `<html>` with a single
//! `<body>`. It follows the browser where widgets can observe a difference:
//! `focus()` is ignored on nodes that cannot take focus, removing the focused
//! node drops focus back to `<body>`, and `clone_node` is deep.
//!
//! Selector support covers what the site markup needs: type, `#id`, `.class`,
//! `[attr]`, `[attr="v"]`, `[attr^="v"]`, descendant and `>` child
//! combinators, and comma-separated lists. Anything else matches nothing.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::collections::BTreeMap;

use crate::dom::Dom;
use crate::focus;

/// Handle to a node in a [`MemoryDom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone, Default)]
struct NodeData {
    tag: String,
    attrs: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    text: String,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
    offset_top: f64,
    offset_height: f64,
}

/// Arena-backed document tree.
#[derive(Debug, Clone)]
pub struct MemoryDom {
    nodes: Vec<NodeData>,
    root: NodeId,
    body: NodeId,
    focused: Option<NodeId>,
    focus_scrolled: bool,
    scroll_y: f64,
}

impl Default for MemoryDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDom {
    /// An empty document: `<html><body></body></html>`.
    #[must_use]
    pub fn new() -> Self {
        let mut dom = Self {
            nodes: Vec::new(),
            root: NodeId(0),
            body: NodeId(0),
            focused: None,
            focus_scrolled: false,
            scroll_y: 0.0,
        };
        let root = dom.alloc("html");
        let body = dom.alloc("body");
        dom.link(root, body);
        dom.root = root;
        dom.body = body;
        dom
    }

    /// The `<html>` element.
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Create `<tag>` with the given attributes and append it to `parent`.
    pub fn append(&mut self, parent: NodeId, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
        let node = self.alloc(tag);
        for (name, value) in attrs {
            self.data_mut(node).attrs.insert((*name).to_owned(), (*value).to_owned());
        }
        self.link(parent, node);
        node
    }

    /// Inline style value, if set.
    #[must_use]
    pub fn style(&self, node: NodeId, property: &str) -> Option<&str> {
        self.data(node).styles.get(property).map(String::as_str)
    }

    /// Direct children of `node`.
    #[must_use]
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.data(node).children
    }

    /// Whether the last successful focus asked to scroll its target into view.
    #[must_use]
    pub fn focus_scrolled(&self) -> bool {
        self.focus_scrolled
    }

    fn take_focus(&mut self, node: NodeId, scroll: bool) {
        if self.is_connected(&node) && focus::accepts_focus(self, &node) {
            self.focused = Some(node);
            self.focus_scrolled = scroll;
        }
    }

    /// Last offset passed to [`Dom::scroll_to`].
    #[must_use]
    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    /// Set the layout box reported by `offset_top` / `offset_height`.
    pub fn set_layout(&mut self, node: NodeId, top: f64, height: f64) {
        let data = self.data_mut(node);
        data.offset_top = top;
        data.offset_height = height;
    }

    fn alloc(&mut self, tag: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData { tag: tag.to_ascii_lowercase(), ..NodeData::default() });
        id
    }

    fn data(&self, node: NodeId) -> &NodeData {
        &self.nodes[node.0]
    }

    fn data_mut(&mut self, node: NodeId) -> &mut NodeData {
        &mut self.nodes[node.0]
    }

    fn detach(&mut self, node: NodeId) {
        if let Some(parent) = self.data_mut(node).parent.take() {
            self.data_mut(parent).children.retain(|c| *c != node);
        }
    }

    fn link(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.data_mut(child).parent = Some(parent);
        self.data_mut(parent).children.push(child);
    }

    fn collect_descendants(&self, node: NodeId, out: &mut Vec<NodeId>) {
        for child in &self.data(node).children {
            out.push(*child);
            self.collect_descendants(*child, out);
        }
    }

    fn deep_clone(&mut self, node: NodeId) -> NodeId {
        let mut copy = self.data(node).clone();
        let children = std::mem::take(&mut copy.children);
        copy.parent = None;
        let id = NodeId(self.nodes.len());
        self.nodes.push(copy);
        for child in children {
            let cloned = self.deep_clone(child);
            self.link(id, cloned);
        }
        id
    }

    fn classes(&self, node: NodeId) -> Vec<String> {
        self.data(node)
            .attrs
            .get("class")
            .map(|raw| raw.split_whitespace().map(str::to_owned).collect())
            .unwrap_or_default()
    }

    fn set_classes(&mut self, node: NodeId, classes: &[String]) {
        self.data_mut(node).attrs.insert("class".to_owned(), classes.join(" "));
    }

    fn matching(&self, candidates: Vec<NodeId>, selector: &str) -> Vec<NodeId> {
        let Some(list) = parse_selector_list(selector) else {
            log::debug!("unsupported selector {selector:?}");
            return Vec::new();
        };
        candidates
            .into_iter()
            .filter(|node| list.iter().any(|complex| self.matches_complex(*node, complex, complex.len() - 1)))
            .collect()
    }

    fn matches_complex(&self, node: NodeId, parts: &[(Combinator, Compound)], index: usize) -> bool {
        let (combinator, compound) = &parts[index];
        if !self.matches_compound(node, compound) {
            return false;
        }
        if index == 0 {
            return true;
        }
        match combinator {
            Combinator::Child => self
                .data(node)
                .parent
                .is_some_and(|parent| self.matches_complex(parent, parts, index - 1)),
            Combinator::Descendant => {
                let mut cursor = self.data(node).parent;
                while let Some(ancestor) = cursor {
                    if self.matches_complex(ancestor, parts, index - 1) {
                        return true;
                    }
                    cursor = self.data(ancestor).parent;
                }
                false
            }
        }
    }

    fn matches_compound(&self, node: NodeId, compound: &Compound) -> bool {
        let data = self.data(node);
        if compound.tag.as_ref().is_some_and(|tag| *tag != data.tag) {
            return false;
        }
        if compound.id.as_ref().is_some_and(|id| data.attrs.get("id") != Some(id)) {
            return false;
        }
        let classes = self.classes(node);
        if !compound.classes.iter().all(|c| classes.contains(c)) {
            return false;
        }
        compound.attrs.iter().all(|test| match test {
            AttrTest::Present(name) => data.attrs.contains_key(name),
            AttrTest::Equals(name, value) => data.attrs.get(name) == Some(value),
            AttrTest::Prefix(name, value) => data.attrs.get(name).is_some_and(|v| v.starts_with(value.as_str())),
        })
    }
}

impl Dom for MemoryDom {
    type Node = NodeId;

    fn body(&self) -> Option<NodeId> {
        Some(self.body)
    }

    fn query(&self, selector: &str) -> Option<NodeId> {
        self.query_all(selector).into_iter().next()
    }

    fn query_all(&self, selector: &str) -> Vec<NodeId> {
        let mut all = Vec::new();
        self.collect_descendants(self.root, &mut all);
        self.matching(all, selector)
    }

    fn query_within(&self, scope: &NodeId, selector: &str) -> Option<NodeId> {
        self.query_all_within(scope, selector).into_iter().next()
    }

    fn query_all_within(&self, scope: &NodeId, selector: &str) -> Vec<NodeId> {
        self.matching(self.descendants(scope), selector)
    }

    fn descendants(&self, scope: &NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect_descendants(*scope, &mut out);
        out
    }

    fn contains(&self, ancestor: &NodeId, node: &NodeId) -> bool {
        let mut cursor = Some(*node);
        while let Some(current) = cursor {
            if current == *ancestor {
                return true;
            }
            cursor = self.data(current).parent;
        }
        false
    }

    fn is_connected(&self, node: &NodeId) -> bool {
        self.contains(&self.root, node)
    }

    fn tag_name(&self, node: &NodeId) -> String {
        self.data(*node).tag.clone()
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        self.data(*node).attrs.get(name).cloned()
    }

    fn set_attribute(&mut self, node: &NodeId, name: &str, value: &str) {
        self.data_mut(*node).attrs.insert(name.to_owned(), value.to_owned());
    }

    fn remove_attribute(&mut self, node: &NodeId, name: &str) {
        self.data_mut(*node).attrs.remove(name);
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.classes(*node).iter().any(|c| c == class)
    }

    fn add_class(&mut self, node: &NodeId, class: &str) {
        let mut classes = self.classes(*node);
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_owned());
            self.set_classes(*node, &classes);
        }
    }

    fn remove_class(&mut self, node: &NodeId, class: &str) {
        let mut classes = self.classes(*node);
        let before = classes.len();
        classes.retain(|c| c != class);
        if classes.len() != before {
            self.set_classes(*node, &classes);
        }
    }

    fn set_style(&mut self, node: &NodeId, property: &str, value: &str) {
        let styles = &mut self.data_mut(*node).styles;
        if value.is_empty() {
            styles.remove(property);
        } else {
            styles.insert(property.to_owned(), value.to_owned());
        }
    }

    fn text_content(&self, node: &NodeId) -> String {
        let data = self.data(*node);
        let mut text = data.text.clone();
        for child in &data.children {
            text.push_str(&self.text_content(child));
        }
        text
    }

    fn set_text_content(&mut self, node: &NodeId, text: &str) {
        for child in self.data(*node).children.clone() {
            self.remove_node(&child);
        }
        self.data_mut(*node).text = text.to_owned();
    }

    fn create_element(&mut self, tag: &str) -> Option<NodeId> {
        Some(self.alloc(tag))
    }

    fn clone_node(&mut self, node: &NodeId) -> Option<NodeId> {
        Some(self.deep_clone(*node))
    }

    fn append_child(&mut self, parent: &NodeId, child: &NodeId) {
        self.link(*parent, *child);
    }

    fn remove_node(&mut self, node: &NodeId) {
        if self.focused.is_some_and(|f| self.contains(node, &f)) {
            self.focused = None;
        }
        self.detach(*node);
    }

    fn clear_children(&mut self, node: &NodeId) {
        self.set_text_content(node, "");
    }

    fn active_element(&self) -> Option<NodeId> {
        self.focused.or(Some(self.body))
    }

    fn focus(&mut self, node: &NodeId) {
        self.take_focus(*node, true);
    }

    fn focus_without_scroll(&mut self, node: &NodeId) {
        self.take_focus(*node, false);
    }

    fn offset_top(&self, node: &NodeId) -> f64 {
        self.data(*node).offset_top
    }

    fn offset_height(&self, node: &NodeId) -> f64 {
        self.data(*node).offset_height
    }

    fn scroll_to(&mut self, top: f64) {
        self.scroll_y = top;
    }
}

// ── Selectors ───────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Combinator {
    Descendant,
    Child,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum AttrTest {
    Present(String),
    Equals(String, String),
    Prefix(String, String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<AttrTest>,
}

type Complex = Vec<(Combinator, Compound)>;

fn parse_selector_list(selector: &str) -> Option<Vec<Complex>> {
    selector.split(',').map(parse_complex).collect()
}

fn parse_complex(selector: &str) -> Option<Complex> {
    let mut parts = Vec::new();
    let mut pending = Combinator::Descendant;
    let mut chars = selector.trim().chars().peekable();
    while let Some(&c) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }
        if c == '>' {
            chars.next();
            pending = Combinator::Child;
            continue;
        }
        let mut raw = String::new();
        let mut in_brackets = false;
        while let Some(&c) = chars.peek() {
            if !in_brackets && (c.is_whitespace() || c == '>') {
                break;
            }
            match c {
                '[' => in_brackets = true,
                ']' => in_brackets = false,
                _ => {}
            }
            raw.push(c);
            chars.next();
        }
        parts.push((pending, parse_compound(&raw)?));
        pending = Combinator::Descendant;
    }
    if parts.is_empty() { None } else { Some(parts) }
}

fn parse_compound(raw: &str) -> Option<Compound> {
    let mut compound = Compound::default();
    let mut rest = raw;
    let tag_end = rest.find(['#', '.', '[']).unwrap_or(rest.len());
    if tag_end > 0 {
        let tag = &rest[..tag_end];
        if tag != "*" {
            if !tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
                return None;
            }
            compound.tag = Some(tag.to_ascii_lowercase());
        }
        rest = &rest[tag_end..];
    }
    while let Some(first) = rest.chars().next() {
        match first {
            '#' | '.' => {
                let body = &rest[1..];
                let end = body.find(['#', '.', '[']).unwrap_or(body.len());
                let name = &body[..end];
                if name.is_empty() {
                    return None;
                }
                if first == '#' {
                    compound.id = Some(name.to_owned());
                } else {
                    compound.classes.push(name.to_owned());
                }
                rest = &body[end..];
            }
            '[' => {
                let end = rest.find(']')?;
                compound.attrs.push(parse_attr(&rest[1..end])?);
                rest = &rest[end + 1..];
            }
            _ => return None,
        }
    }
    Some(compound)
}

fn parse_attr(inner: &str) -> Option<AttrTest> {
    let unquote = |v: &str| v.trim().trim_matches(|c| c == '"' || c == '\'').to_owned();
    if let Some((name, value)) = inner.split_once("^=") {
        return Some(AttrTest::Prefix(name.trim().to_owned(), unquote(value)));
    }
    if let Some((name, value)) = inner.split_once('=') {
        return Some(AttrTest::Equals(name.trim().to_owned(), unquote(value)));
    }
    let name = inner.trim();
    if name.is_empty() { None } else { Some(AttrTest::Present(name.to_owned())) }
}
