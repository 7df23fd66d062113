//! DOM Tree (arena-based allocation)
//!
//! Node factory and mutation engine: appendChild, insertBefore,
//! removeChild, replaceChild, cloneNode. All structural state lives
//! on the nodes; the child list is derived from the sibling chain, so
//! the all-children and element-children views share one backing
//! sequence and cannot diverge.

use crate::NodeId;
use crate::attributes::Attr;
use crate::node::{Node, NodeType};
use thiserror::Error;
use tracing::trace;

/// Result type for DOM operations
pub type DomResult<T> = Result<T, DomError>;

/// DOM operation errors. Mutations fail loudly and uniformly; there
/// are no silent no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomError {
    /// Handle does not refer to a node of this tree
    #[error("node not found in this document")]
    NotFound,
    /// Reference/old child is not a child of the given parent
    #[error("node is not a child of the given parent")]
    NotAChild,
    /// Insertion would make a node its own descendant
    #[error("cannot insert a node into itself or its descendants")]
    HierarchyRequest,
    /// Target node kind cannot take part in the operation
    #[error("invalid node type for this operation")]
    InvalidNodeType,
}

/// Arena-based DOM tree
///
/// Slot 0 always holds the document node. Slots are never reclaimed;
/// a removed node stays allocated and can be re-attached, so handles
/// stay stable for the lifetime of the tree.
#[derive(Debug)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a tree holding only its document node
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::document()],
        }
    }

    /// The document node
    pub fn root(&self) -> NodeId {
        NodeId::DOCUMENT
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Number of allocated nodes (attached or not)
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn node(&self, id: NodeId) -> DomResult<&Node> {
        self.nodes.get(id.index()).ok_or(DomError::NotFound)
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    // ---- Node factory ----------------------------------------------------

    /// Create a detached element. `tag` is uppercased for the tag
    /// name and lowercased for the local name.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.alloc(Node::element(tag))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, data: &str) -> NodeId {
        self.alloc(Node::text(data))
    }

    /// Create a detached comment node
    pub fn create_comment(&mut self, data: &str) -> NodeId {
        self.alloc(Node::comment(data))
    }

    /// Create a detached document fragment
    pub fn create_fragment(&mut self) -> NodeId {
        self.alloc(Node::fragment())
    }

    // ---- Traversal -------------------------------------------------------

    /// Numeric node type, if the handle is valid
    pub fn node_type(&self, id: NodeId) -> Option<NodeType> {
        self.get(id).map(Node::node_type)
    }

    /// Parent of a node, `None` while detached
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).map(|n| n.parent).filter(|p| p.is_valid())
    }

    /// First entry of the child list
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).map(|n| n.first_child).filter(|c| c.is_valid())
    }

    /// Last entry of the child list
    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).map(|n| n.last_child).filter(|c| c.is_valid())
    }

    /// Previous sibling within the parent's child list
    pub fn previous_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).map(|n| n.prev_sibling).filter(|s| s.is_valid())
    }

    /// Next sibling within the parent's child list
    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).map(|n| n.next_sibling).filter(|s| s.is_valid())
    }

    /// All immediate children, in order
    pub fn child_nodes(&self, id: NodeId) -> ChildNodes<'_> {
        ChildNodes {
            tree: self,
            next: self.get(id).map_or(NodeId::NONE, |n| n.first_child),
        }
    }

    /// Element-only projection of [`child_nodes`](Self::child_nodes)
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.child_nodes(id)
            .filter(|&c| self.nodes[c.index()].is_element())
    }

    /// First element child
    pub fn first_element_child(&self, id: NodeId) -> Option<NodeId> {
        self.children(id).next()
    }

    /// Last element child
    pub fn last_element_child(&self, id: NodeId) -> Option<NodeId> {
        let mut cur = self.get(id)?.last_child;
        while cur.is_valid() {
            let node = &self.nodes[cur.index()];
            if node.is_element() {
                return Some(cur);
            }
            cur = node.prev_sibling;
        }
        None
    }

    /// Concatenated text descendants of a node
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        let Some(node) = self.get(id) else { return };
        if let Some(text) = node.as_text() {
            out.push_str(text);
        }
        let mut cur = node.first_child;
        while cur.is_valid() {
            self.collect_text(cur, out);
            cur = self.nodes[cur.index()].next_sibling;
        }
    }

    // ---- Attribute convenience -------------------------------------------

    /// Set an attribute on an element node
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> DomResult<()> {
        let elem = self
            .get_mut(id)
            .ok_or(DomError::NotFound)?
            .as_element_mut()
            .ok_or(DomError::InvalidNodeType)?;
        elem.set_attribute(name, value);
        Ok(())
    }

    /// Get an attribute value; `None` for non-elements too
    pub fn get_attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.get(id)?.as_element()?.get_attribute(name)
    }

    /// Remove an attribute from an element node
    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> DomResult<Option<Attr>> {
        let elem = self
            .get_mut(id)
            .ok_or(DomError::NotFound)?
            .as_element_mut()
            .ok_or(DomError::InvalidNodeType)?;
        Ok(elem.remove_attribute(name))
    }

    /// Check if an element node carries an attribute
    pub fn has_attribute(&self, id: NodeId, name: &str) -> bool {
        self.get(id)
            .and_then(Node::as_element)
            .is_some_and(|e| e.has_attribute(name))
    }

    // ---- Mutation engine -------------------------------------------------

    /// Whether `candidate` is `of` or one of its ancestors
    fn is_same_or_ancestor(&self, candidate: NodeId, of: NodeId) -> bool {
        let mut cur = of;
        while cur.is_valid() {
            if cur == candidate {
                return true;
            }
            cur = self.nodes[cur.index()].parent;
        }
        false
    }

    /// Unlink a node from its current parent, if any. Sibling and
    /// endpoint links of the former neighbors are rewired to skip it.
    fn detach(&mut self, id: NodeId) {
        let (parent, prev, next) = {
            let node = &self.nodes[id.index()];
            (node.parent, node.prev_sibling, node.next_sibling)
        };
        if !parent.is_valid() {
            return;
        }

        if prev.is_valid() {
            self.nodes[prev.index()].next_sibling = next;
        } else {
            self.nodes[parent.index()].first_child = next;
        }
        if next.is_valid() {
            self.nodes[next.index()].prev_sibling = prev;
        } else {
            self.nodes[parent.index()].last_child = prev;
        }

        let node = &mut self.nodes[id.index()];
        node.parent = NodeId::NONE;
        node.prev_sibling = NodeId::NONE;
        node.next_sibling = NodeId::NONE;
    }

    /// Append `child` as the last child of `parent`. A child that is
    /// already attached somewhere is detached first.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        if !self.node(parent)?.can_have_children() {
            return Err(DomError::InvalidNodeType);
        }
        self.node(child)?;
        if self.is_same_or_ancestor(child, parent) {
            return Err(DomError::HierarchyRequest);
        }
        self.detach(child);

        let old_last = self.nodes[parent.index()].last_child;
        if old_last.is_valid() {
            self.nodes[old_last.index()].next_sibling = child;
        } else {
            self.nodes[parent.index()].first_child = child;
        }
        {
            let node = &mut self.nodes[child.index()];
            node.parent = parent;
            node.prev_sibling = old_last;
            node.next_sibling = NodeId::NONE;
        }
        self.nodes[parent.index()].last_child = child;

        trace!(parent = parent.0, child = child.0, "append_child");
        Ok(child)
    }

    /// Insert `new_child` before `reference` under `parent`. A `None`
    /// reference appends. Inserting a node before itself is a no-op.
    pub fn insert_before(
        &mut self,
        parent: NodeId,
        new_child: NodeId,
        reference: Option<NodeId>,
    ) -> DomResult<NodeId> {
        let Some(reference) = reference else {
            return self.append_child(parent, new_child);
        };
        if !self.node(parent)?.can_have_children() {
            return Err(DomError::InvalidNodeType);
        }
        self.node(new_child)?;
        if self.node(reference)?.parent != parent {
            return Err(DomError::NotAChild);
        }
        if new_child == reference {
            return Ok(new_child);
        }
        if self.is_same_or_ancestor(new_child, parent) {
            return Err(DomError::HierarchyRequest);
        }
        self.detach(new_child);

        // Reference links may have changed when the detach removed an
        // adjacent sibling, so read them only now.
        let prev = self.nodes[reference.index()].prev_sibling;
        if prev.is_valid() {
            self.nodes[prev.index()].next_sibling = new_child;
        } else {
            self.nodes[parent.index()].first_child = new_child;
        }
        self.nodes[reference.index()].prev_sibling = new_child;
        {
            let node = &mut self.nodes[new_child.index()];
            node.parent = parent;
            node.prev_sibling = prev;
            node.next_sibling = reference;
        }

        trace!(
            parent = parent.0,
            new_child = new_child.0,
            reference = reference.0,
            "insert_before"
        );
        Ok(new_child)
    }

    /// Remove `child` from `parent` and return it detached
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        self.node(parent)?;
        if self.node(child)?.parent != parent {
            return Err(DomError::NotAChild);
        }
        self.detach(child);

        trace!(parent = parent.0, child = child.0, "remove_child");
        Ok(child)
    }

    /// Replace `old_child` with `new_child` under `parent`, returning
    /// the replaced node (the standard DOM contract).
    pub fn replace_child(
        &mut self,
        parent: NodeId,
        new_child: NodeId,
        old_child: NodeId,
    ) -> DomResult<NodeId> {
        if self.node(old_child)?.parent != parent {
            return Err(DomError::NotAChild);
        }
        if new_child == old_child {
            return Ok(old_child);
        }
        self.insert_before(parent, new_child, Some(old_child))?;
        self.remove_child(parent, old_child)?;
        Ok(old_child)
    }

    // ---- Cloning ---------------------------------------------------------

    /// Shallow clone: same variant data (tag, full attribute map,
    /// character data), no children, detached.
    pub fn clone_node(&mut self, id: NodeId) -> DomResult<NodeId> {
        let data = self.node(id)?.data.clone();
        Ok(self.alloc(Node::detached(data)))
    }

    /// Recursive clone of a whole subtree, returning its detached root
    pub fn clone_subtree(&mut self, id: NodeId) -> DomResult<NodeId> {
        let root = self.clone_node(id)?;
        let kids: Vec<NodeId> = self.child_nodes(id).collect();
        for kid in kids {
            let copy = self.clone_subtree(kid)?;
            self.append_child(root, copy)?;
        }
        Ok(root)
    }

    /// Copy a subtree out of another tree into this one, returning
    /// the detached root of the copy. Used by document adoption.
    pub fn import_subtree(&mut self, source: &DomTree, id: NodeId) -> DomResult<NodeId> {
        let data = source.node(id)?.data.clone();
        let root = self.alloc(Node::detached(data));
        let mut cur = source.node(id)?.first_child;
        while cur.is_valid() {
            let copy = self.import_subtree(source, cur)?;
            self.append_child(root, copy)?;
            cur = source.nodes[cur.index()].next_sibling;
        }
        Ok(root)
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over a node's child list, front to back
pub struct ChildNodes<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl Iterator for ChildNodes<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        if !self.next.is_valid() {
            return None;
        }
        let id = self.next;
        self.next = self.tree.nodes[id.index()].next_sibling;
        Some(id)
    }
}
