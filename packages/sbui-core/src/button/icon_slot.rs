//! Leading/trailing icon slot resolution.

use super::ButtonProps;
use crate::icon::{icon_loader, with_icon_context};
use crate::node::{ClassList, Node};
use crate::theme::TokenSet;

/// Content of the two icon slots around the label.
#[derive(Debug, Clone, Default)]
pub struct IconSlots {
    pub left: Option<Node>,
    pub right: Option<Node>,
}

/// Resolve the icon slots. Loading takes the left slot over `icon` and
/// suppresses `icon_right` entirely.
pub fn resolve(props: &ButtonProps, tokens: &TokenSet) -> IconSlots {
    let left = if props.loading {
        let mut class = ClassList::new();
        class.push(tokens.loading.as_deref());
        Some(icon_loader(props.size, class))
    } else {
        props
            .icon
            .clone()
            .map(|icon| with_icon_context(props.size, icon))
    };

    let right = match &props.icon_right {
        Some(icon) if !props.loading => Some(with_icon_context(props.size, icon.clone())),
        _ => None,
    };

    IconSlots { left, right }
}
