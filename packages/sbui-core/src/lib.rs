//! sbui Core - Themeable button component library.
//!
//! This crate provides the button component of the sbui toolkit:
//!
//! - **Class composition**: Ordered style tokens derived from button props
//! - **Polymorphic rendering**: Native `<button>` or a caller-chosen tag
//! - **Icon slots**: Loading indicator / icon precedence with sizing context
//! - **Ref handles**: Imperative access to the mounted container and control
//! - **Themes**: Token registry with built-in and file-loaded themes
//!
//! # Example
//!
//! ```rust
//! use sbui_core::{
//!     Button, ButtonProps, ButtonSize, ButtonType, Document, HandleRef, ThemeRegistry,
//! };
//!
//! let registry = ThemeRegistry::new();
//! let handle_ref = HandleRef::new();
//!
//! let button = Button::new(
//!     ButtonProps::new()
//!         .variant_type(ButtonType::Outline)
//!         .size(ButtonSize::Medium)
//!         .children("Save")
//!         .handle_ref(handle_ref.clone()),
//! );
//!
//! let mut document = Document::new();
//! let mount = document.mount(&button, &registry).unwrap();
//!
//! let handle = handle_ref.current().expect("handle is published on mount");
//! assert!(handle.button().is_some());
//! println!("{}", document.to_html(mount).unwrap());
//! ```

pub mod button;
pub mod host;
pub mod icon;
pub mod node;
pub mod theme;
pub mod types;

// Re-export commonly used types
pub use types::{ApiResponse, ButtonSize, ButtonType, HtmlType, TabIndex};

// Re-export main functionality
pub use button::{
    Button, ButtonProps, ComposedClasses, HandleRef, IconSlots, RefHandle, RenderedButton,
};
pub use host::{Component, Document, MountId, MountedNode};
pub use icon::{Icon, IconContext};
pub use node::{Callback, ClassList, ClickEvent, Element, Node, NodeId, NodeRef, StyleMap};
pub use theme::{StyleTokenSource, Theme, ThemeInfo, ThemeRegistry, TokenSet};

/// Error types for sbui-core operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unknown {kind}: {value}")]
    UnknownVariant { kind: &'static str, value: String },

    #[error("Theme not found: {0}")]
    ThemeNotFound(String),

    #[error("Unsupported theme file: {0}")]
    UnsupportedThemeFormat(String),

    #[error("Unknown mount: {0}")]
    UnknownMount(u64),

    #[error("Component is already mounted as mount {0}")]
    AlreadyMounted(u64),
}

/// Result type for sbui-core operations.
pub type Result<T> = std::result::Result<T, Error>;
