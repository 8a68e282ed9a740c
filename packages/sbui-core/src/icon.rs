//! Icons and the icon sizing context.
//!
//! Icons without an explicit size take their size from the nearest
//! [`IconContext`] scope, so icons placed in a button match its size.

use crate::node::{ClassList, Element, Node};
use crate::types::ButtonSize;

/// Base class applied to every rendered icon.
pub const ICON_CLASS: &str = "sbui-icon";

/// Name of the glyph used by the loading indicator.
pub const LOADER_GLYPH: &str = "loader";

/// Edge length used when neither the icon nor a scope sets a size.
pub const DEFAULT_ICON_PIXELS: u32 = 21;

/// Sizing value provided to icons below an [`Node::IconScope`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconContext {
    pub context_size: ButtonSize,
}

/// A named glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    pub name: String,
    pub size: Option<ButtonSize>,
    pub class: Option<String>,
}

impl Icon {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: None,
            class: None,
        }
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Pixel size after applying the explicit size, then the context.
    pub fn resolved_pixels(&self, context: Option<&IconContext>) -> u32 {
        self.size
            .or(context.map(|c| c.context_size))
            .map(|s| s.icon_pixels())
            .unwrap_or(DEFAULT_ICON_PIXELS)
    }

    /// Lower the icon to an `<svg>` element.
    pub fn to_element(&self, context: Option<&IconContext>) -> Element {
        let pixels = self.resolved_pixels(context).to_string();
        let mut class = ClassList::new();
        class.push(Some(ICON_CLASS));
        if let Some(extra) = &self.class {
            class.push(Some(extra));
        }

        Element::new("svg")
            .class(class)
            .attr("data-icon", self.name.as_str())
            .attr("width", pixels.as_str())
            .attr("height", pixels)
            .attr("viewBox", "0 0 24 24")
            .attr("aria-hidden", "true")
    }
}

/// Loading indicator sized like the button that hosts it.
pub fn icon_loader(size: ButtonSize, class: ClassList) -> Node {
    let icon = Icon::new(LOADER_GLYPH).size(size);
    let class = class.to_attr();
    if class.is_empty() {
        icon.into()
    } else {
        icon.class(class).into()
    }
}

/// Wrap content in an icon sizing scope.
pub fn with_icon_context(size: ButtonSize, content: Node) -> Node {
    Node::IconScope {
        context: IconContext { context_size: size },
        children: vec![content],
    }
}
