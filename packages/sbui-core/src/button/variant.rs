//! The two element variants a button can render as.

use super::ButtonProps;
use crate::node::{
    is_valid_attr_name, is_valid_tag, Callback, ClassList, Element, Node, NodeRef, StyleMap,
};
use crate::types::{HtmlType, TabIndex};
use indexmap::IndexMap;

/// Attributes the native control sets itself. Passthrough values for these
/// names are dropped, even when the explicit prop is unset.
const CONTROLLED_ATTRS: [&str; 8] = [
    "class",
    "style",
    "disabled",
    "type",
    "aria-selected",
    "aria-controls",
    "tabindex",
    "role",
];

/// Props honored when the caller supplies its own tag.
///
/// Only class, click handler, style and children survive; native-button
/// semantics are forfeited.
#[derive(Debug, Clone)]
pub struct CustomTagProps {
    pub tag: String,
    pub class: ClassList,
    pub on_click: Option<Callback>,
    pub style: Option<StyleMap>,
    pub children: Vec<Node>,
}

/// Props of the native `<button>` control.
#[derive(Debug, Clone)]
pub struct NativeControlProps {
    pub attrs: IndexMap<String, String>,
    pub class: ClassList,
    pub disabled: bool,
    pub on_click: Option<Callback>,
    pub style: Option<StyleMap>,
    pub html_type: Option<HtmlType>,
    pub aria_selected: Option<bool>,
    pub aria_controls: Option<String>,
    pub tab_index: Option<TabIndex>,
    pub role: Option<String>,
    pub node_ref: NodeRef,
    pub children: Vec<Node>,
}

/// The element chosen for one render pass.
#[derive(Debug, Clone)]
pub enum RenderedButton {
    CustomTag(CustomTagProps),
    NativeControl(NativeControlProps),
}

impl RenderedButton {
    /// Pick the variant: a custom tag iff `as_tag` is set.
    pub fn select(
        props: &ButtonProps,
        class: ClassList,
        button_ref: &NodeRef,
        children: Vec<Node>,
    ) -> Self {
        match &props.as_tag {
            Some(tag) => RenderedButton::CustomTag(CustomTagProps {
                tag: tag.clone(),
                class,
                on_click: props.on_click.clone(),
                style: props.style.clone(),
                children,
            }),
            None => RenderedButton::NativeControl(NativeControlProps {
                attrs: props.attrs.clone(),
                class,
                disabled: props.loading || props.disabled,
                on_click: props.on_click.clone(),
                style: props.style.clone(),
                html_type: props.html_type,
                aria_selected: props.aria_selected,
                aria_controls: props.aria_controls.clone(),
                tab_index: props.tab_index,
                role: props.role.clone(),
                node_ref: button_ref.clone(),
                children,
            }),
        }
    }

    pub fn is_native(&self) -> bool {
        matches!(self, RenderedButton::NativeControl(_))
    }

    /// Build the element. A custom tag that cannot name an element renders
    /// nothing.
    pub fn into_node(self) -> Node {
        match self {
            RenderedButton::CustomTag(props) => {
                if !is_valid_tag(&props.tag) {
                    tracing::warn!("Ignoring button with invalid tag: {:?}", props.tag);
                    return Node::Empty;
                }
                Element::new(props.tag)
                    .class(props.class)
                    .on_click(props.on_click)
                    .style(props.style)
                    .children(props.children)
                    .into()
            }
            RenderedButton::NativeControl(props) => {
                let mut element = Element::new("button");
                for (name, value) in props.attrs {
                    if CONTROLLED_ATTRS.contains(&name.as_str()) {
                        continue;
                    }
                    if !is_valid_attr_name(&name) {
                        tracing::warn!("Dropping attribute with invalid name: {:?}", name);
                        continue;
                    }
                    element = element.attr(name, value);
                }
                element
                    .class(props.class)
                    .attr("disabled", props.disabled)
                    .on_click(props.on_click)
                    .style(props.style)
                    .attr_opt("type", props.html_type.map(|t| t.to_string()))
                    .attr_opt("aria-selected", props.aria_selected.map(|s| s.to_string()))
                    .attr_opt("aria-controls", props.aria_controls)
                    .attr_opt("tabindex", props.tab_index.map(|t| t.as_str()))
                    .attr_opt("role", props.role)
                    .node_ref(props.node_ref)
                    .children(props.children)
                    .into()
            }
        }
    }
}
