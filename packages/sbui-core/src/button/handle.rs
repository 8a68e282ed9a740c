//! Imperative handle over a mounted button's nodes.

use crate::node::{NodeId, NodeRef};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Read-only accessors for the container and native control of a button.
///
/// Both accessors read shared node refs, so a handle obtained once keeps
/// reporting the latest nodes across re-renders.
#[derive(Clone)]
pub struct RefHandle {
    container: NodeRef,
    button: NodeRef,
}

impl RefHandle {
    pub(crate) fn new(container: NodeRef, button: NodeRef) -> Self {
        Self { container, button }
    }

    /// The outer wrapper, or `None` when not mounted.
    pub fn container(&self) -> Option<NodeId> {
        self.container.get()
    }

    /// The native control, or `None` when not mounted or when the button
    /// renders a custom tag.
    pub fn button(&self) -> Option<NodeId> {
        self.button.get()
    }
}

impl fmt::Debug for RefHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RefHandle")
            .field("container", &self.container())
            .field("button", &self.button())
            .finish()
    }
}

/// Caller-owned slot the button publishes its [`RefHandle`] into.
///
/// Empty until the button is first committed and again after unmount.
#[derive(Debug, Clone, Default)]
pub struct HandleRef(Rc<RefCell<Option<RefHandle>>>);

impl HandleRef {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<RefHandle> {
        self.0.borrow().clone()
    }

    pub(crate) fn attach(&self, handle: RefHandle) {
        *self.0.borrow_mut() = Some(handle);
    }

    pub(crate) fn detach(&self) {
        *self.0.borrow_mut() = None;
    }

    /// Whether two refs share the same slot.
    pub fn ptr_eq(&self, other: &HandleRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
