//! Renderable node tree.
//!
//! Components render into [`Node`] values. The tree is serialized to HTML
//! through [`maud::Render`] or mounted into a [`crate::host::Document`].

use crate::icon::{Icon, IconContext};
use indexmap::IndexMap;
use maud::Render;
use serde::Serialize;
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Inline style declarations, serialized in insertion order.
pub type StyleMap = IndexMap<String, String>;

// ============================================================================
// Node identity and references
// ============================================================================

/// Identifier of a mounted node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(pub(crate) u64);

impl NodeId {
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Mutable slot the host fills with the id of the element it is attached to.
///
/// Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct NodeRef(Rc<Cell<Option<NodeId>>>);

impl NodeRef {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently attached node, if mounted.
    pub fn get(&self) -> Option<NodeId> {
        self.0.get()
    }

    pub(crate) fn set(&self, id: Option<NodeId>) {
        self.0.set(id);
    }

    /// Whether two refs share the same slot.
    pub fn ptr_eq(&self, other: &NodeRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

// ============================================================================
// Events
// ============================================================================

/// Click dispatched by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickEvent {
    pub target: NodeId,
}

/// Shared click handler.
#[derive(Clone)]
pub struct Callback(Rc<dyn Fn(&ClickEvent)>);

impl Callback {
    pub fn new(f: impl Fn(&ClickEvent) + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn emit(&self, event: &ClickEvent) {
        (self.0)(event)
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback(..)")
    }
}

// ============================================================================
// Class lists
// ============================================================================

/// Ordered list of style tokens.
///
/// Entries are `None` where a theme did not supply a token; they keep their
/// position in the list but are left out of the serialized attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList(Vec<Option<String>>);

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, token: Option<&str>) {
        self.0.push(token.map(str::to_string));
    }

    pub fn push_if(&mut self, condition: bool, token: Option<&str>) {
        if condition {
            self.push(token);
        }
    }

    /// All entries including absent ones.
    pub fn tokens(&self) -> &[Option<String>] {
        &self.0
    }

    /// Present tokens in order.
    pub fn present(&self) -> impl Iterator<Item = &str> {
        self.0.iter().filter_map(|t| t.as_deref())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Space-separated `class` attribute value.
    pub fn to_attr(&self) -> String {
        self.present()
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<S: Into<String>> FromIterator<S> for ClassList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(|s| Some(s.into())).collect())
    }
}

// ============================================================================
// Elements
// ============================================================================

/// Attribute value. `Flag(true)` renders as a bare attribute, `Flag(false)`
/// is omitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    Text(String),
    Flag(bool),
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Flag(value)
    }
}

/// A tagged element with attributes and children.
#[derive(Debug, Clone)]
pub struct Element {
    pub tag: String,
    pub class: ClassList,
    pub style: Option<StyleMap>,
    pub attrs: IndexMap<String, AttrValue>,
    pub on_click: Option<Callback>,
    pub node_ref: Option<NodeRef>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            class: ClassList::new(),
            style: None,
            attrs: IndexMap::new(),
            on_click: None,
            node_ref: None,
            children: Vec::new(),
        }
    }

    pub fn class(mut self, class: ClassList) -> Self {
        self.class = class;
        self
    }

    pub fn style(mut self, style: Option<StyleMap>) -> Self {
        self.style = style;
        self
    }

    /// Set an attribute, replacing any earlier value for the same name.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Set an attribute only when a value is present.
    pub fn attr_opt(self, name: &str, value: Option<impl Into<AttrValue>>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    pub fn on_click(mut self, callback: Option<Callback>) -> Self {
        self.on_click = callback;
        self
    }

    pub fn node_ref(mut self, node_ref: NodeRef) -> Self {
        self.node_ref = Some(node_ref);
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Text attribute value, if set.
    pub fn attr_text(&self, name: &str) -> Option<&str> {
        match self.attrs.get(name) {
            Some(AttrValue::Text(value)) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Whether a flag attribute is set and true.
    pub fn has_flag(&self, name: &str) -> bool {
        matches!(self.attrs.get(name), Some(AttrValue::Flag(true)))
    }

    /// Serialized attributes in output order: class, style, then the rest.
    pub fn html_attrs(&self) -> Vec<(String, AttrValue)> {
        let mut attrs = Vec::with_capacity(self.attrs.len() + 2);
        let class = self.class.to_attr();
        if !class.is_empty() {
            attrs.push(("class".to_string(), AttrValue::Text(class)));
        }
        if let Some(style) = self.style.as_ref().filter(|s| !s.is_empty()) {
            attrs.push(("style".to_string(), AttrValue::Text(style_attr(style))));
        }
        attrs.extend(self.attrs.iter().map(|(k, v)| (k.clone(), v.clone())));
        attrs
    }
}

/// Serialize inline styles as `prop: value; prop: value`.
pub fn style_attr(style: &StyleMap) -> String {
    style
        .iter()
        .map(|(prop, value)| format!("{prop}: {value}"))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Whether `tag` can name an element: an ASCII letter followed by ASCII
/// alphanumerics or hyphens.
pub fn is_valid_tag(tag: &str) -> bool {
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
        }
        _ => false,
    }
}

/// Whether `name` can be written as an attribute name: non-empty, with no
/// whitespace, control characters, quotes, `>`, `/` or `=`.
pub fn is_valid_attr_name(name: &str) -> bool {
    !name.is_empty()
        && name.chars().all(|c| {
            !c.is_whitespace()
                && !c.is_control()
                && !matches!(c, '"' | '\'' | '<' | '>' | '/' | '=')
        })
}

// ============================================================================
// Nodes
// ============================================================================

/// Anything a component can render.
#[derive(Debug, Clone, Default)]
pub enum Node {
    Element(Element),
    Text(String),
    Icon(Icon),
    /// Provides an [`IconContext`] to the icons below it; renders no element.
    IconScope {
        context: IconContext,
        children: Vec<Node>,
    },
    Fragment(Vec<Node>),
    #[default]
    Empty,
}

impl Node {
    /// Whether the node renders nothing: `Empty`, empty text, or a fragment
    /// of such nodes.
    pub fn is_empty(&self) -> bool {
        match self {
            Node::Empty => true,
            Node::Text(text) => text.is_empty(),
            Node::Fragment(children) => children.iter().all(Node::is_empty),
            _ => false,
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Concatenated text content.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => element.children.iter().for_each(|c| c.collect_text(out)),
            Node::IconScope { children, .. } | Node::Fragment(children) => {
                children.iter().for_each(|c| c.collect_text(out))
            }
            Node::Icon(_) | Node::Empty => {}
        }
    }

    fn write_html(&self, context: Option<&IconContext>, buffer: &mut String) {
        match self {
            Node::Element(element) => {
                write_open_tag(buffer, &element.tag, &element.html_attrs());
                for child in &element.children {
                    child.write_html(context, buffer);
                }
                write_close_tag(buffer, &element.tag);
            }
            Node::Text(text) => text.as_str().render_to(buffer),
            Node::Icon(icon) => Node::Element(icon.to_element(context)).write_html(context, buffer),
            Node::IconScope { context, children } => {
                for child in children {
                    child.write_html(Some(context), buffer);
                }
            }
            Node::Fragment(children) => {
                for child in children {
                    child.write_html(context, buffer);
                }
            }
            Node::Empty => {}
        }
    }
}

impl Render for Node {
    fn render_to(&self, buffer: &mut String) {
        self.write_html(None, buffer);
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<Icon> for Node {
    fn from(icon: Icon) -> Self {
        Node::Icon(icon)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl From<Vec<Node>> for Node {
    fn from(children: Vec<Node>) -> Self {
        Node::Fragment(children)
    }
}

// ============================================================================
// HTML writing
// ============================================================================

pub(crate) fn write_open_tag(buffer: &mut String, tag: &str, attrs: &[(String, AttrValue)]) {
    buffer.push('<');
    buffer.push_str(tag);
    for (name, value) in attrs {
        match value {
            AttrValue::Text(text) => {
                buffer.push(' ');
                buffer.push_str(name);
                buffer.push_str("=\"");
                text.as_str().render_to(buffer);
                buffer.push('"');
            }
            AttrValue::Flag(true) => {
                buffer.push(' ');
                buffer.push_str(name);
            }
            AttrValue::Flag(false) => {}
        }
    }
    buffer.push('>');
}

pub(crate) fn write_close_tag(buffer: &mut String, tag: &str) {
    buffer.push_str("</");
    buffer.push_str(tag);
    buffer.push('>');
}
