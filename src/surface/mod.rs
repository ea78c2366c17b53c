//! Retained-mode node tree the list editor renders into.
//!
//! The editor never holds nodes directly. It talks to a [`Surface`] through
//! [`NodeId`] handles, which are generational: once a node is removed its
//! handle is stale forever, even if the underlying slot is reused by a node
//! created later. Every primitive that takes a stale handle fails with
//! [`SurfaceError::StaleNode`] or returns `None`.
//!
//! [`Tree`] is the in-memory implementation shipped with the crate. Hosts with
//! their own widget toolkit can implement [`Surface`] over it instead.
//!
//! ```rust
//! use bubbletea_list_editor::surface::{Surface, Tag, Tree};
//!
//! let mut tree = Tree::new();
//! let mount = tree.create_node(Tag::Div);
//! let button = tree.create_node(Tag::Button);
//! tree.set_text(button, "Add").unwrap();
//! tree.append_child(mount, button).unwrap();
//!
//! tree.clear_children(mount).unwrap();
//! assert!(!tree.contains(button));
//! ```

mod tree;

pub use tree::Tree;

use std::fmt;
use thiserror::Error;

/// Handle to a node in a [`Surface`].
///
/// `slot` locates the node, `serial` tells it apart from every other node
/// that ever occupied that slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub(crate) slot: usize,
    pub(crate) serial: u64,
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}v{}", self.slot, self.serial)
    }
}

/// Element kinds the editor creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// Generic block container.
    Div,
    /// Unordered list.
    Ul,
    /// List entry.
    Li,
    /// Text field or checkbox, depending on its `type` attribute.
    Input,
    /// Clickable button.
    Button,
    /// Inline text.
    Span,
}

impl Tag {
    /// Lower-case element name.
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Div => "div",
            Tag::Ul => "ul",
            Tag::Li => "li",
            Tag::Input => "input",
            Tag::Button => "button",
            Tag::Span => "span",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised by surface primitives.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    /// The handle refers to a node that has been removed.
    #[error("node {0} is not part of the surface")]
    StaleNode(NodeId),
    /// A value was written to something other than an input.
    #[error("node {0} is not an input")]
    NotAnInput(NodeId),
    /// Attaching the node would make it its own ancestor.
    #[error("cannot attach {child} under its descendant {parent}")]
    Cycle {
        /// Intended parent.
        parent: NodeId,
        /// Node being attached.
        child: NodeId,
    },
}

/// Primitive operations of a retained-mode visual tree.
pub trait Surface {
    /// Creates a detached node.
    fn create_node(&mut self, tag: Tag) -> NodeId;

    /// Reports whether `node` is live.
    fn contains(&self, node: NodeId) -> bool;

    /// The node's element kind.
    fn tag(&self, node: NodeId) -> Option<Tag>;

    /// Replaces the node's presentation class string.
    fn set_class(&mut self, node: NodeId, class: &str) -> Result<(), SurfaceError>;

    /// The node's class string.
    fn class(&self, node: NodeId) -> Option<&str>;

    /// Replaces the node's text content.
    fn set_text(&mut self, node: NodeId, text: &str) -> Result<(), SurfaceError>;

    /// The node's text content.
    fn text(&self, node: NodeId) -> Option<&str>;

    /// Sets or replaces an attribute.
    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str)
        -> Result<(), SurfaceError>;

    /// Reads an attribute.
    fn attribute(&self, node: NodeId, name: &str) -> Option<&str>;

    /// Sets the current value of an input node.
    fn set_value(&mut self, node: NodeId, value: &str) -> Result<(), SurfaceError>;

    /// Current value of an input node.
    fn value(&self, node: NodeId) -> Option<&str>;

    /// Appends `child` as the last child of `parent`, detaching it from any
    /// previous parent first.
    fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), SurfaceError>;

    /// Detaches `node` and frees it along with all its descendants.
    fn remove(&mut self, node: NodeId) -> Result<(), SurfaceError>;

    /// Frees every child subtree of `node`.
    fn clear_children(&mut self, node: NodeId) -> Result<(), SurfaceError>;

    /// The node's parent, if attached.
    fn parent(&self, node: NodeId) -> Option<NodeId>;

    /// The node's children in order. Empty for stale nodes.
    fn children(&self, node: NodeId) -> &[NodeId];
}

/// `node` followed by each of its ancestors up to the root.
pub fn ancestors<S: Surface + ?Sized>(
    surface: &S,
    node: NodeId,
) -> impl Iterator<Item = NodeId> + '_ {
    std::iter::successors(surface.contains(node).then_some(node), move |n| {
        surface.parent(*n)
    })
}

/// All nodes under `root` (inclusive) in document order.
pub fn descendants<S: Surface + ?Sized>(surface: &S, root: NodeId) -> Vec<NodeId> {
    let mut out = Vec::new();
    if !surface.contains(root) {
        return out;
    }
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        out.push(node);
        stack.extend(surface.children(node).iter().rev().copied());
    }
    out
}

/// Reports whether `node` is an input of type `checkbox`.
pub fn is_checkbox<S: Surface + ?Sized>(surface: &S, node: NodeId) -> bool {
    surface.tag(node) == Some(Tag::Input) && surface.attribute(node, "type") == Some("checkbox")
}
