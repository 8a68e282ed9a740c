//! Minimal retained host for mounting components.
//!
//! A [`Document`] turns rendered [`Node`] trees into identified nodes,
//! fills the [`NodeRef`]s attached to elements during commit and clears them
//! on unmount. Icons are lowered to `<svg>` elements using the nearest
//! [`IconContext`] scope.

use crate::icon::IconContext;
use crate::node::{
    write_close_tag, write_open_tag, AttrValue, Callback, ClickEvent, Element, Node, NodeId,
    NodeRef, StyleMap,
};
use crate::theme::StyleTokenSource;
use crate::{Error, Result};
use maud::Render;
use std::collections::HashMap;

/// Something the host can render and notify about its lifecycle.
pub trait Component {
    /// Produce the node tree for the current props.
    fn render(&self, source: &dyn StyleTokenSource) -> Node;

    /// Called after node refs of a mount or update are filled.
    fn committed(&self) {}

    /// Called after the component's nodes are removed.
    fn unmounted(&self) {}
}

/// Handle for one mounted component tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MountId(u64);

/// Content of a mounted node.
#[derive(Debug, Clone)]
pub enum MountedContent {
    Element {
        tag: String,
        classes: Vec<String>,
        style: Option<StyleMap>,
        attrs: Vec<(String, AttrValue)>,
        on_click: Option<Callback>,
        children: Vec<NodeId>,
    },
    Text(String),
}

/// A node living in a [`Document`].
#[derive(Debug, Clone)]
pub struct MountedNode {
    pub id: NodeId,
    pub parent: Option<NodeId>,
    pub content: MountedContent,
}

impl MountedNode {
    pub fn tag(&self) -> Option<&str> {
        match &self.content {
            MountedContent::Element { tag, .. } => Some(tag.as_str()),
            MountedContent::Text(_) => None,
        }
    }

    pub fn classes(&self) -> &[String] {
        match &self.content {
            MountedContent::Element { classes, .. } => classes.as_slice(),
            MountedContent::Text(_) => &[],
        }
    }

    pub fn children(&self) -> &[NodeId] {
        match &self.content {
            MountedContent::Element { children, .. } => children.as_slice(),
            MountedContent::Text(_) => &[],
        }
    }

    /// Attribute value. Flags read as `""` when set.
    pub fn attr(&self, name: &str) -> Option<&str> {
        match &self.content {
            MountedContent::Element { attrs, .. } => {
                attrs.iter().find(|(n, _)| n == name).and_then(|(_, v)| match v {
                    AttrValue::Text(text) => Some(text.as_str()),
                    AttrValue::Flag(true) => Some(""),
                    AttrValue::Flag(false) => None,
                })
            }
            MountedContent::Text(_) => None,
        }
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Whether a native control is disabled and therefore ignores clicks.
    pub fn is_disabled(&self) -> bool {
        self.tag() == Some("button") && self.has_attr("disabled")
    }
}

#[derive(Debug, Default)]
struct MountRecord {
    roots: Vec<NodeId>,
    refs: Vec<NodeRef>,
}

/// Retained node store.
#[derive(Debug, Default)]
pub struct Document {
    nodes: HashMap<NodeId, MountedNode>,
    mounts: HashMap<MountId, MountRecord>,
    next_node: u64,
    next_mount: u64,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render and mount a component, then commit its refs.
    ///
    /// A component instance lives in at most one mount. Mounting it again
    /// while an earlier mount still holds its node refs fails with
    /// [`Error::AlreadyMounted`]; use [`Document::update`] to re-render it.
    pub fn mount(
        &mut self,
        component: &dyn Component,
        source: &dyn StyleTokenSource,
    ) -> Result<MountId> {
        let node = component.render(source);

        let mut refs = Vec::new();
        collect_refs(&node, &mut refs);
        if let Some(existing) = self.owner_of(&refs) {
            tracing::warn!("Refusing second mount of a component held by {:?}", existing);
            return Err(Error::AlreadyMounted(existing.0));
        }

        let id = MountId(self.next_mount);
        self.next_mount += 1;

        let record = self.insert_tree(node);
        tracing::debug!("Mounted {:?} with {} root node(s)", id, record.roots.len());
        self.mounts.insert(id, record);
        component.committed();
        Ok(id)
    }

    /// Re-render a mounted component, replacing its nodes.
    ///
    /// Refs from the previous tree are cleared before the new tree's refs are
    /// filled, so a ref the new tree no longer carries reads `None`.
    pub fn update(
        &mut self,
        mount: MountId,
        component: &dyn Component,
        source: &dyn StyleTokenSource,
    ) -> Result<()> {
        let old = self.mounts.remove(&mount).ok_or(Error::UnknownMount(mount.0))?;
        self.release(old);

        let record = self.insert_tree(component.render(source));
        tracing::debug!("Updated {:?} with {} root node(s)", mount, record.roots.len());
        self.mounts.insert(mount, record);
        component.committed();
        Ok(())
    }

    /// Remove a mounted component and clear its refs.
    pub fn unmount(&mut self, mount: MountId, component: &dyn Component) -> Result<()> {
        let record = self.mounts.remove(&mount).ok_or(Error::UnknownMount(mount.0))?;
        self.release(record);
        tracing::debug!("Unmounted {:?}", mount);
        component.unmounted();
        Ok(())
    }

    pub fn node(&self, id: NodeId) -> Option<&MountedNode> {
        self.nodes.get(&id)
    }

    /// Root nodes of a mount.
    pub fn roots(&self, mount: MountId) -> Option<&[NodeId]> {
        self.mounts.get(&mount).map(|r| r.roots.as_slice())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Dispatch a click to a node. Returns whether a handler ran.
    pub fn click(&self, id: NodeId) -> bool {
        let Some(node) = self.nodes.get(&id) else {
            return false;
        };
        if node.is_disabled() {
            tracing::debug!("Click on disabled control {} ignored", id);
            return false;
        }
        match &node.content {
            MountedContent::Element {
                on_click: Some(callback),
                ..
            } => {
                callback.clone().emit(&ClickEvent { target: id });
                true
            }
            _ => false,
        }
    }

    /// Serialize a mounted tree.
    pub fn to_html(&self, mount: MountId) -> Result<String> {
        let record = self.mounts.get(&mount).ok_or(Error::UnknownMount(mount.0))?;
        let mut buffer = String::new();
        for root in &record.roots {
            self.write_node(*root, &mut buffer);
        }
        Ok(buffer)
    }

    fn write_node(&self, id: NodeId, buffer: &mut String) {
        let Some(node) = self.nodes.get(&id) else {
            return;
        };
        match &node.content {
            MountedContent::Element {
                tag,
                classes,
                style,
                attrs,
                children,
                ..
            } => {
                let mut html_attrs = Vec::with_capacity(attrs.len() + 2);
                if !classes.is_empty() {
                    html_attrs.push(("class".to_string(), AttrValue::Text(classes.join(" "))));
                }
                if let Some(style) = style.as_ref().filter(|s| !s.is_empty()) {
                    html_attrs.push((
                        "style".to_string(),
                        AttrValue::Text(crate::node::style_attr(style)),
                    ));
                }
                html_attrs.extend(attrs.iter().cloned());

                write_open_tag(buffer, tag, &html_attrs);
                for child in children {
                    self.write_node(*child, buffer);
                }
                write_close_tag(buffer, tag);
            }
            MountedContent::Text(text) => text.as_str().render_to(buffer),
        }
    }

    /// Live mount already holding any of `refs`.
    fn owner_of(&self, refs: &[NodeRef]) -> Option<MountId> {
        self.mounts.iter().find_map(|(id, record)| {
            record
                .refs
                .iter()
                .any(|held| refs.iter().any(|r| r.ptr_eq(held)))
                .then_some(*id)
        })
    }

    fn insert_tree(&mut self, node: Node) -> MountRecord {
        let mut record = MountRecord::default();
        let mut commits = Vec::new();
        record.roots = self.insert(node, None, None, &mut commits);

        for (node_ref, id) in commits {
            node_ref.set(Some(id));
            record.refs.push(node_ref);
        }
        record
    }

    fn insert(
        &mut self,
        node: Node,
        parent: Option<NodeId>,
        context: Option<IconContext>,
        commits: &mut Vec<(NodeRef, NodeId)>,
    ) -> Vec<NodeId> {
        match node {
            Node::Element(element) => vec![self.insert_element(element, parent, context, commits)],
            Node::Icon(icon) => {
                vec![self.insert_element(icon.to_element(context.as_ref()), parent, context, commits)]
            }
            Node::Text(text) => {
                let id = self.allocate();
                self.nodes.insert(
                    id,
                    MountedNode {
                        id,
                        parent,
                        content: MountedContent::Text(text),
                    },
                );
                vec![id]
            }
            Node::IconScope {
                context: scoped,
                children,
            } => children
                .into_iter()
                .flat_map(|child| self.insert(child, parent, Some(scoped), commits))
                .collect(),
            Node::Fragment(children) => children
                .into_iter()
                .flat_map(|child| self.insert(child, parent, context, commits))
                .collect(),
            Node::Empty => Vec::new(),
        }
    }

    fn insert_element(
        &mut self,
        element: Element,
        parent: Option<NodeId>,
        context: Option<IconContext>,
        commits: &mut Vec<(NodeRef, NodeId)>,
    ) -> NodeId {
        let id = self.allocate();
        let mut children = Vec::new();
        for child in element.children {
            children.extend(self.insert(child, Some(id), context, commits));
        }

        if let Some(node_ref) = element.node_ref {
            commits.push((node_ref, id));
        }

        let classes = element
            .class
            .present()
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();

        self.nodes.insert(
            id,
            MountedNode {
                id,
                parent,
                content: MountedContent::Element {
                    tag: element.tag,
                    classes,
                    style: element.style,
                    attrs: element.attrs.into_iter().collect(),
                    on_click: element.on_click,
                    children,
                },
            },
        );
        id
    }

    fn allocate(&mut self) -> NodeId {
        let id = NodeId(self.next_node);
        self.next_node += 1;
        id
    }

    fn release(&mut self, record: MountRecord) {
        for node_ref in &record.refs {
            node_ref.set(None);
        }
        let mut stack = record.roots;
        while let Some(id) = stack.pop() {
            if let Some(node) = self.nodes.remove(&id) {
                stack.extend_from_slice(node.children());
            }
        }
    }
}

fn collect_refs(node: &Node, out: &mut Vec<NodeRef>) {
    match node {
        Node::Element(element) => {
            if let Some(node_ref) = &element.node_ref {
                out.push(node_ref.clone());
            }
            element.children.iter().for_each(|c| collect_refs(c, out));
        }
        Node::IconScope { children, .. } | Node::Fragment(children) => {
            children.iter().for_each(|c| collect_refs(c, out))
        }
        Node::Text(_) | Node::Icon(_) | Node::Empty => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::button::{Button, ButtonProps, HandleRef};
    use crate::icon::Icon;
    use crate::theme::{sbui, Theme};
    use crate::types::ButtonSize;
    use std::cell::Cell;
    use std::rc::Rc;

    fn theme() -> Theme {
        sbui()
    }

    #[test]
    fn test_handle_empty_until_mounted() {
        let handle_ref = HandleRef::new();
        let button = Button::new(ButtonProps::new().handle_ref(handle_ref.clone()));
        assert!(handle_ref.current().is_none());

        let mut document = Document::new();
        document.mount(&button, &theme()).unwrap();

        let handle = handle_ref.current().unwrap();
        let container = document.node(handle.container().unwrap()).unwrap();
        let control = document.node(handle.button().unwrap()).unwrap();
        assert_eq!(container.tag(), Some("span"));
        assert_eq!(control.tag(), Some("button"));
        assert_eq!(control.parent, Some(container.id));
    }

    #[test]
    fn test_custom_tag_never_populates_button() {
        let handle_ref = HandleRef::new();
        let button = Button::new(ButtonProps::new().as_tag("a").handle_ref(handle_ref.clone()));

        let mut document = Document::new();
        document.mount(&button, &theme()).unwrap();

        let handle = handle_ref.current().unwrap();
        assert!(handle.container().is_some());
        assert!(handle.button().is_none());
    }

    #[test]
    fn test_handle_follows_updates() {
        let handle_ref = HandleRef::new();
        let mut button = Button::new(ButtonProps::new().handle_ref(handle_ref.clone()));
        let mut document = Document::new();
        let mount = document.mount(&button, &theme()).unwrap();

        let handle = handle_ref.current().unwrap();
        let first = handle.button().unwrap();

        button.set_props(ButtonProps::new().loading(true).handle_ref(handle_ref.clone()));
        document.update(mount, &button, &theme()).unwrap();

        let second = handle.button().unwrap();
        assert_ne!(first, second);
        assert!(document.node(first).is_none());
        assert!(document.node(second).unwrap().is_disabled());

        button.set_props(ButtonProps::new().as_tag("div").handle_ref(handle_ref.clone()));
        document.update(mount, &button, &theme()).unwrap();
        assert!(handle.button().is_none());
        assert!(handle.container().is_some());
    }

    #[test]
    fn test_unmount_clears_refs_and_handle() {
        let handle_ref = HandleRef::new();
        let button = Button::new(ButtonProps::new().handle_ref(handle_ref.clone()));
        let mut document = Document::new();
        let mount = document.mount(&button, &theme()).unwrap();
        let handle = handle_ref.current().unwrap();

        document.unmount(mount, &button).unwrap();

        assert!(handle.container().is_none());
        assert!(handle.button().is_none());
        assert!(handle_ref.current().is_none());
        assert!(document.is_empty());
    }

    #[test]
    fn test_unknown_mount() {
        let button = Button::new(ButtonProps::new());
        let mut document = Document::new();
        let mount = document.mount(&button, &theme()).unwrap();
        document.unmount(mount, &button).unwrap();

        assert!(matches!(
            document.unmount(mount, &button),
            Err(Error::UnknownMount(_))
        ));
        assert!(document.to_html(mount).is_err());
    }

    #[test]
    fn test_click_dispatch() {
        let clicks = Rc::new(Cell::new(0));
        let counter = clicks.clone();
        let handle_ref = HandleRef::new();
        let button = Button::new(
            ButtonProps::new()
                .on_click(move |_| counter.set(counter.get() + 1))
                .handle_ref(handle_ref.clone()),
        );
        let mut document = Document::new();
        document.mount(&button, &theme()).unwrap();
        let handle = handle_ref.current().unwrap();

        assert!(document.click(handle.button().unwrap()));
        assert!(!document.click(handle.container().unwrap()));
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn test_disabled_native_swallows_clicks_custom_tag_does_not() {
        let clicks = Rc::new(Cell::new(0));
        let mut document = Document::new();

        let native_ref = HandleRef::new();
        let counter = clicks.clone();
        let native = Button::new(
            ButtonProps::new()
                .loading(true)
                .on_click(move |_| counter.set(counter.get() + 1))
                .handle_ref(native_ref.clone()),
        );
        document.mount(&native, &theme()).unwrap();
        assert!(!document.click(native_ref.current().unwrap().button().unwrap()));

        let counter = clicks.clone();
        let custom = Button::new(
            ButtonProps::new()
                .as_tag("a")
                .loading(true)
                .on_click(move |_| counter.set(counter.get() + 1)),
        );
        let mount = document.mount(&custom, &theme()).unwrap();
        let container = document.roots(mount).unwrap()[0];
        let anchor = document.node(container).unwrap().children()[0];
        assert!(document.click(anchor));
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn test_icons_sized_by_scope_when_mounted() {
        let handle_ref = HandleRef::new();
        let button = Button::new(
            ButtonProps::new()
                .size(ButtonSize::Xlarge)
                .icon(Icon::new("plus"))
                .handle_ref(handle_ref.clone()),
        );
        let mut document = Document::new();
        document.mount(&button, &theme()).unwrap();

        let control = document.node(handle_ref.current().unwrap().button().unwrap()).unwrap();
        let svg = document.node(control.children()[0]).unwrap();
        assert_eq!(svg.tag(), Some("svg"));
        assert_eq!(svg.attr("width"), Some("24"));
    }

    #[test]
    fn test_mounted_html_matches_direct_render() {
        let button = Button::new(
            ButtonProps::new()
                .icon(Icon::new("plus"))
                .children("Add & save")
                .danger(true),
        );
        let mut document = Document::new();
        let mount = document.mount(&button, &theme()).unwrap();

        let direct = button.render(&theme()).render().into_string();
        assert_eq!(document.to_html(mount).unwrap(), direct);
    }

    #[test]
    fn test_instances_are_isolated() {
        let first_ref = HandleRef::new();
        let second_ref = HandleRef::new();
        let first = Button::new(ButtonProps::new().handle_ref(first_ref.clone()));
        let second = Button::new(ButtonProps::new().handle_ref(second_ref.clone()));

        let mut document = Document::new();
        let first_mount = document.mount(&first, &theme()).unwrap();
        document.mount(&second, &theme()).unwrap();
        document.unmount(first_mount, &first).unwrap();

        assert!(first_ref.current().is_none());
        assert!(second_ref.current().unwrap().button().is_some());
    }

    #[test]
    fn test_dropping_handle_ref_empties_it() {
        let handle_ref = HandleRef::new();
        let mut button = Button::new(ButtonProps::new().handle_ref(handle_ref.clone()));
        let mut document = Document::new();
        let mount = document.mount(&button, &theme()).unwrap();
        assert!(handle_ref.current().is_some());

        button.set_props(ButtonProps::new());
        document.update(mount, &button, &theme()).unwrap();

        assert!(handle_ref.current().is_none());
    }

    #[test]
    fn test_swapping_handle_ref_moves_handle() {
        let first = HandleRef::new();
        let second = HandleRef::new();
        let mut button = Button::new(ButtonProps::new().handle_ref(first.clone()));
        let mut document = Document::new();
        let mount = document.mount(&button, &theme()).unwrap();

        button.set_props(ButtonProps::new().handle_ref(second.clone()));
        document.update(mount, &button, &theme()).unwrap();

        assert!(first.current().is_none());
        assert!(second.current().unwrap().button().is_some());
    }

    #[test]
    fn test_second_mount_of_same_button_rejected() {
        let handle_ref = HandleRef::new();
        let button = Button::new(ButtonProps::new().handle_ref(handle_ref.clone()));
        let mut document = Document::new();
        let first = document.mount(&button, &theme()).unwrap();
        let nodes = document.len();

        let result = document.mount(&button, &theme());

        assert!(matches!(result, Err(Error::AlreadyMounted(id)) if id == first.0));
        assert_eq!(document.len(), nodes);
        let handle = handle_ref.current().unwrap();
        assert_eq!(handle.container(), Some(document.roots(first).unwrap()[0]));
    }

    #[test]
    fn test_remount_after_unmount() {
        let handle_ref = HandleRef::new();
        let button = Button::new(ButtonProps::new().handle_ref(handle_ref.clone()));
        let mut document = Document::new();
        let first = document.mount(&button, &theme()).unwrap();
        document.unmount(first, &button).unwrap();

        let second = document.mount(&button, &theme()).unwrap();

        assert_ne!(first, second);
        assert!(handle_ref.current().unwrap().button().is_some());
    }
}
