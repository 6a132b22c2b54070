//! The document abstraction every widget is written against.
//!
//! Widgets never touch the browser directly. They receive a `&mut impl Dom`
//! and read or mutate elements through it, which keeps every state machine in
//! this crate testable against the in-memory `MemoryDom`. The browser host
//! implements the same trait over `web-sys`.
//!
//! Lookups and element creation return `Option`; everything else is
//! infallible. Implementations that can fail underneath (a throwing
//! `setAttribute`) log and carry on.

use std::fmt::Debug;

/// Read/write access to a document tree.
pub trait Dom {
    /// Handle to a single element. Cheap to clone, compared by identity.
    type Node: Clone + PartialEq + Debug;

    // --- Lookup ---

    /// The `<body>` element, which also acts as the page scroll container.
    fn body(&self) -> Option<Self::Node>;

    /// First element in document order matching `selector`.
    fn query(&self, selector: &str) -> Option<Self::Node>;

    /// All elements in document order matching `selector`.
    fn query_all(&self, selector: &str) -> Vec<Self::Node>;

    /// First descendant of `scope` matching `selector`.
    fn query_within(&self, scope: &Self::Node, selector: &str) -> Option<Self::Node>;

    /// All descendants of `scope` matching `selector`.
    fn query_all_within(&self, scope: &Self::Node, selector: &str) -> Vec<Self::Node>;

    /// All descendants of `scope` in document order, excluding `scope` itself.
    fn descendants(&self, scope: &Self::Node) -> Vec<Self::Node>;

    /// Whether `node` is `ancestor` or lies beneath it.
    fn contains(&self, ancestor: &Self::Node, node: &Self::Node) -> bool;

    /// Whether `node` is still attached to the document.
    fn is_connected(&self, node: &Self::Node) -> bool;

    // --- Element data ---

    /// Lowercase tag name.
    fn tag_name(&self, node: &Self::Node) -> String;

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;
    fn set_attribute(&mut self, node: &Self::Node, name: &str, value: &str);
    fn remove_attribute(&mut self, node: &Self::Node, name: &str);

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;
    fn add_class(&mut self, node: &Self::Node, class: &str);
    fn remove_class(&mut self, node: &Self::Node, class: &str);

    /// Set an inline style property. An empty value clears it.
    fn set_style(&mut self, node: &Self::Node, property: &str, value: &str);

    fn text_content(&self, node: &Self::Node) -> String;

    /// Replace all children of `node` with a single text node.
    fn set_text_content(&mut self, node: &Self::Node, text: &str);

    // --- Tree mutation ---

    /// A new detached element, or `None` if the document rejects the tag.
    fn create_element(&mut self, tag: &str) -> Option<Self::Node>;

    /// Deep clone of `node`. Listeners are not carried over.
    fn clone_node(&mut self, node: &Self::Node) -> Option<Self::Node>;

    fn append_child(&mut self, parent: &Self::Node, child: &Self::Node);
    fn remove_node(&mut self, node: &Self::Node);
    fn clear_children(&mut self, node: &Self::Node);

    // --- Focus ---

    /// The element that currently has keyboard focus, if any.
    fn active_element(&self) -> Option<Self::Node>;

    /// Move focus to `node`, scrolling it into view. Like the browser, a node
    /// that cannot take focus is left unfocused.
    fn focus(&mut self, node: &Self::Node);

    /// [`Dom::focus`] without scrolling, for when a scroll is already under way.
    fn focus_without_scroll(&mut self, node: &Self::Node);

    // --- Layout and scrolling ---

    fn offset_top(&self, node: &Self::Node) -> f64;
    fn offset_height(&self, node: &Self::Node) -> f64;

    /// Smooth-scroll the window to a vertical offset.
    fn scroll_to(&mut self, top: f64);
}
