//! In-memory [`Surface`] backed by a slab.

use super::{NodeId, Surface, SurfaceError, Tag};
use slab::Slab;

#[derive(Debug, Clone)]
struct Node {
    serial: u64,
    tag: Tag,
    class: String,
    text: String,
    value: String,
    attributes: Vec<(String, String)>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    fn new(tag: Tag, serial: u64) -> Self {
        Self {
            serial,
            tag,
            class: String::new(),
            text: String::new(),
            value: String::new(),
            attributes: Vec::new(),
            parent: None,
            children: Vec::new(),
        }
    }
}

/// A retained node tree held in memory.
///
/// Freed slots are recycled, but every node gets a fresh serial, so old
/// [`NodeId`]s never alias new nodes.
#[derive(Debug, Clone, Default)]
pub struct Tree {
    nodes: Slab<Node>,
    next_serial: u64,
}

impl Tree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live nodes, attached or not.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.slot).filter(|n| n.serial == id.serial)
    }

    fn get_mut(&mut self, id: NodeId) -> Result<&mut Node, SurfaceError> {
        self.nodes
            .get_mut(id.slot)
            .filter(|n| n.serial == id.serial)
            .ok_or(SurfaceError::StaleNode(id))
    }

    fn detach(&mut self, id: NodeId) {
        let parent = self.get(id).and_then(|n| n.parent);
        if let Some(parent) = parent {
            if let Ok(p) = self.get_mut(parent) {
                p.children.retain(|c| *c != id);
            }
        }
        if let Ok(node) = self.get_mut(id) {
            node.parent = None;
        }
    }

    fn free_subtree(&mut self, root: NodeId) {
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            if self.get(id).is_some() {
                let node = self.nodes.remove(id.slot);
                stack.extend(node.children);
            }
        }
    }

    fn is_ancestor_of(&self, candidate: NodeId, node: NodeId) -> bool {
        super::ancestors(self, node).any(|n| n == candidate)
    }
}

impl Surface for Tree {
    fn create_node(&mut self, tag: Tag) -> NodeId {
        let serial = self.next_serial;
        self.next_serial += 1;
        let slot = self.nodes.insert(Node::new(tag, serial));
        NodeId { slot, serial }
    }

    fn contains(&self, node: NodeId) -> bool {
        self.get(node).is_some()
    }

    fn tag(&self, node: NodeId) -> Option<Tag> {
        self.get(node).map(|n| n.tag)
    }

    fn set_class(&mut self, node: NodeId, class: &str) -> Result<(), SurfaceError> {
        let n = self.get_mut(node)?;
        n.class.clear();
        n.class.push_str(class);
        Ok(())
    }

    fn class(&self, node: NodeId) -> Option<&str> {
        self.get(node).map(|n| n.class.as_str())
    }

    fn set_text(&mut self, node: NodeId, text: &str) -> Result<(), SurfaceError> {
        let n = self.get_mut(node)?;
        n.text.clear();
        n.text.push_str(text);
        Ok(())
    }

    fn text(&self, node: NodeId) -> Option<&str> {
        self.get(node).map(|n| n.text.as_str())
    }

    fn set_attribute(
        &mut self,
        node: NodeId,
        name: &str,
        value: &str,
    ) -> Result<(), SurfaceError> {
        let n = self.get_mut(node)?;
        match n.attributes.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => *v = value.to_string(),
            None => n.attributes.push((name.to_string(), value.to_string())),
        }
        Ok(())
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.get(node)?
            .attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    fn set_value(&mut self, node: NodeId, value: &str) -> Result<(), SurfaceError> {
        let n = self.get_mut(node)?;
        if n.tag != Tag::Input {
            return Err(SurfaceError::NotAnInput(node));
        }
        n.value.clear();
        n.value.push_str(value);
        Ok(())
    }

    fn value(&self, node: NodeId) -> Option<&str> {
        self.get(node)
            .filter(|n| n.tag == Tag::Input)
            .map(|n| n.value.as_str())
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), SurfaceError> {
        if !self.contains(parent) {
            return Err(SurfaceError::StaleNode(parent));
        }
        if !self.contains(child) {
            return Err(SurfaceError::StaleNode(child));
        }
        if self.is_ancestor_of(child, parent) {
            return Err(SurfaceError::Cycle { parent, child });
        }
        self.detach(child);
        self.get_mut(parent)?.children.push(child);
        self.get_mut(child)?.parent = Some(parent);
        Ok(())
    }

    fn remove(&mut self, node: NodeId) -> Result<(), SurfaceError> {
        if !self.contains(node) {
            return Err(SurfaceError::StaleNode(node));
        }
        self.detach(node);
        self.free_subtree(node);
        Ok(())
    }

    fn clear_children(&mut self, node: NodeId) -> Result<(), SurfaceError> {
        let children = std::mem::take(&mut self.get_mut(node)?.children);
        for child in children {
            self.free_subtree(child);
        }
        Ok(())
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.get(node).and_then(|n| n.parent)
    }

    fn children(&self, node: NodeId) -> &[NodeId] {
        self.get(node).map(|n| n.children.as_slice()).unwrap_or(&[])
    }
}
