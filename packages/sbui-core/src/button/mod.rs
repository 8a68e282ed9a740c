//! Button component
//!
//! Renders a native `<button>` or a caller-chosen tag inside a `<span>`
//! container, with theme tokens composed from its props, a loading
//! indicator or icons around the label, and a [`RefHandle`] for imperative
//! access to the mounted nodes.

mod classes;
mod handle;
mod icon_slot;
mod variant;

pub use classes::{compose, ComposedClasses};
pub use handle::{HandleRef, RefHandle};
pub use icon_slot::{resolve as resolve_icon_slots, IconSlots};
pub use variant::{CustomTagProps, NativeControlProps, RenderedButton};

use crate::host::Component;
use crate::node::{Callback, ClickEvent, Element, Node, NodeRef, StyleMap};
use crate::theme::{StyleTokenSource, TokenSet, BUTTON_COMPONENT};
use crate::types::{ButtonSize, ButtonType, HtmlType, TabIndex};
use indexmap::IndexMap;

// ============================================================================
// Props
// ============================================================================

/// Button configuration for one render.
#[derive(Debug, Clone)]
pub struct ButtonProps {
    pub variant_type: ButtonType,
    pub size: ButtonSize,
    pub block: bool,
    pub danger: bool,
    pub shadow: bool,
    pub disabled: bool,
    pub loading: bool,
    /// Accepted for compatibility; currently has no visual effect.
    pub loading_centered: bool,
    pub icon: Option<Node>,
    pub icon_right: Option<Node>,
    pub children: Option<Node>,
    pub class_name: Option<String>,
    pub style: Option<StyleMap>,
    /// Render this tag instead of a native button.
    pub as_tag: Option<String>,
    pub html_type: Option<HtmlType>,
    pub aria_selected: Option<bool>,
    pub aria_controls: Option<String>,
    pub tab_index: Option<TabIndex>,
    pub role: Option<String>,
    /// Passthrough attributes for the native control.
    pub attrs: IndexMap<String, String>,
    pub on_click: Option<Callback>,
    pub handle_ref: Option<HandleRef>,
}

impl Default for ButtonProps {
    fn default() -> Self {
        Self {
            variant_type: ButtonType::Primary,
            size: ButtonSize::Tiny,
            block: false,
            danger: false,
            shadow: true,
            disabled: false,
            loading: false,
            loading_centered: false,
            icon: None,
            icon_right: None,
            children: None,
            class_name: None,
            style: None,
            as_tag: None,
            html_type: None,
            aria_selected: None,
            aria_controls: None,
            tab_index: None,
            role: None,
            attrs: IndexMap::new(),
            on_click: None,
            handle_ref: None,
        }
    }
}

impl ButtonProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variant_type(mut self, variant_type: ButtonType) -> Self {
        self.variant_type = variant_type;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn block(mut self, block: bool) -> Self {
        self.block = block;
        self
    }

    pub fn danger(mut self, danger: bool) -> Self {
        self.danger = danger;
        self
    }

    pub fn shadow(mut self, shadow: bool) -> Self {
        self.shadow = shadow;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn loading_centered(mut self, loading_centered: bool) -> Self {
        self.loading_centered = loading_centered;
        self
    }

    pub fn icon(mut self, icon: impl Into<Node>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn icon_right(mut self, icon: impl Into<Node>) -> Self {
        self.icon_right = Some(icon.into());
        self
    }

    pub fn children(mut self, children: impl Into<Node>) -> Self {
        self.children = Some(children.into());
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn style(mut self, style: StyleMap) -> Self {
        self.style = Some(style);
        self
    }

    pub fn as_tag(mut self, tag: impl Into<String>) -> Self {
        self.as_tag = Some(tag.into());
        self
    }

    pub fn html_type(mut self, html_type: HtmlType) -> Self {
        self.html_type = Some(html_type);
        self
    }

    pub fn aria_selected(mut self, selected: bool) -> Self {
        self.aria_selected = Some(selected);
        self
    }

    pub fn aria_controls(mut self, controls: impl Into<String>) -> Self {
        self.aria_controls = Some(controls.into());
        self
    }

    pub fn tab_index(mut self, tab_index: TabIndex) -> Self {
        self.tab_index = Some(tab_index);
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Add a passthrough attribute for the native control.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn on_click(mut self, handler: impl Fn(&ClickEvent) + 'static) -> Self {
        self.on_click = Some(Callback::new(handler));
        self
    }

    /// Ask the button to publish its [`RefHandle`] into `handle_ref`.
    pub fn handle_ref(mut self, handle_ref: HandleRef) -> Self {
        self.handle_ref = Some(handle_ref);
        self
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Render the full button tree: container, chosen element, icon slots and
/// label.
pub fn render(
    props: &ButtonProps,
    tokens: &TokenSet,
    container_ref: &NodeRef,
    button_ref: &NodeRef,
) -> Node {
    let classes = compose(props, tokens);
    let slots = resolve_icon_slots(props, tokens);

    let mut children = Vec::with_capacity(3);
    children.extend(slots.left);
    if let Some(label) = props.children.as_ref().filter(|c| !c.is_empty()) {
        children.push(Element::new("span").child(label.clone()).into());
    }
    children.extend(slots.right);

    let rendered = RenderedButton::select(props, classes.button, button_ref, children);

    Element::new("span")
        .class(classes.container)
        .node_ref(container_ref.clone())
        .child(rendered.into_node())
        .into()
}

// ============================================================================
// Component
// ============================================================================

/// A button instance.
///
/// Owns the node refs its handle reads, so the handle published to a
/// [`HandleRef`] stays valid across prop updates and re-mounts.
#[derive(Debug)]
pub struct Button {
    props: ButtonProps,
    container_ref: NodeRef,
    button_ref: NodeRef,
}

impl Button {
    pub fn new(props: ButtonProps) -> Self {
        Self {
            props,
            container_ref: NodeRef::new(),
            button_ref: NodeRef::new(),
        }
    }

    pub fn props(&self) -> &ButtonProps {
        &self.props
    }

    /// Replace the props; takes effect on the next render.
    ///
    /// A previously attached [`HandleRef`] that the new props drop or replace
    /// is emptied immediately.
    pub fn set_props(&mut self, props: ButtonProps) {
        if let Some(old) = &self.props.handle_ref {
            let kept = props.handle_ref.as_ref().is_some_and(|new| new.ptr_eq(old));
            if !kept {
                old.detach();
            }
        }
        self.props = props;
    }

    fn handle(&self) -> RefHandle {
        RefHandle::new(self.container_ref.clone(), self.button_ref.clone())
    }
}

impl Component for Button {
    fn render(&self, source: &dyn StyleTokenSource) -> Node {
        let tokens = source.resolve(BUTTON_COMPONENT);
        render(&self.props, &tokens, &self.container_ref, &self.button_ref)
    }

    fn committed(&self) {
        if let Some(handle_ref) = &self.props.handle_ref {
            handle_ref.attach(self.handle());
        }
    }

    fn unmounted(&self) {
        if let Some(handle_ref) = &self.props.handle_ref {
            handle_ref.detach();
        }
    }
}
