//! Document - High-level document API
//!
//! Owns a [`DomTree`] and exposes the factory and query surface the
//! window layer hands to hosted code. One `Document` per tree: a
//! handle is only meaningful against the document that issued it, so
//! cross-document mutation cannot happen by accident; moving nodes
//! between documents goes through [`Document::adopt_node`].

use crate::attributes::Attr;
use crate::tree::{DomResult, DomTree};
use crate::{Node, NodeId};
use tracing::debug;

/// Synthetic HTML document
pub struct Document {
    /// The DOM tree
    tree: DomTree,
    /// Document URL
    url: String,
    /// Cached reference to the html element
    html_element: NodeId,
    /// Cached reference to the head element
    head_element: NodeId,
    /// Cached reference to the body element
    body_element: NodeId,
}

impl Document {
    /// Create a document with the html/head/body skeleton
    pub fn new(url: &str) -> Self {
        let mut tree = DomTree::new();
        let root = tree.root();

        let html = tree.create_element("html");
        let head = tree.create_element("head");
        let body = tree.create_element("body");

        tree.append_child(root, html)
            .expect("fresh document skeleton");
        tree.append_child(html, head)
            .expect("fresh document skeleton");
        tree.append_child(html, body)
            .expect("fresh document skeleton");

        Self {
            tree,
            url: url.to_string(),
            html_element: html,
            head_element: head,
            body_element: body,
        }
    }

    /// Create an empty document (no skeleton)
    pub fn empty(url: &str) -> Self {
        Self {
            tree: DomTree::new(),
            url: url.to_string(),
            html_element: NodeId::NONE,
            head_element: NodeId::NONE,
            body_element: NodeId::NONE,
        }
    }

    /// Document URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Text of the first title element under head
    pub fn title(&self) -> String {
        if !self.head_element.is_valid() {
            return String::new();
        }
        for id in self.tree.children(self.head_element) {
            let is_title = self
                .tree
                .get(id)
                .and_then(Node::as_element)
                .is_some_and(|e| e.local_name == "title");
            if is_title {
                return self.tree.text_content(id);
            }
        }
        String::new()
    }

    /// The html element
    pub fn document_element(&self) -> NodeId {
        self.html_element
    }

    /// The head element
    pub fn head(&self) -> NodeId {
        self.head_element
    }

    /// The body element
    pub fn body(&self) -> NodeId {
        self.body_element
    }

    // ---- Node factory ----------------------------------------------------

    /// Create a detached element owned by this document
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.tree.create_element(tag)
    }

    /// Create a detached text node owned by this document
    pub fn create_text_node(&mut self, data: &str) -> NodeId {
        self.tree.create_text(data)
    }

    /// Create a detached comment node owned by this document
    pub fn create_comment(&mut self, data: &str) -> NodeId {
        self.tree.create_comment(data)
    }

    /// Create a detached document fragment owned by this document
    pub fn create_document_fragment(&mut self) -> NodeId {
        self.tree.create_fragment()
    }

    /// Create a free-standing attribute record with an empty value
    pub fn create_attribute(&self, name: &str) -> Attr {
        Attr::new(name, "")
    }

    // ---- Queries ---------------------------------------------------------

    /// First element (document order) whose id shadow field matches
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        if id.is_empty() {
            return None;
        }
        self.walk(self.tree.root(), &mut |node_id| {
            self.tree
                .get(node_id)
                .and_then(Node::as_element)
                .is_some_and(|e| e.id == id)
        })
    }

    /// All elements with a matching tag name; `"*"` matches every element
    pub fn get_elements_by_tag_name(&self, tag: &str) -> Vec<NodeId> {
        let wanted = tag.to_ascii_lowercase();
        let mut out = Vec::new();
        let _ = self.walk(self.tree.root(), &mut |id| {
            let matched = self
                .tree
                .get(id)
                .and_then(Node::as_element)
                .is_some_and(|e| wanted == "*" || e.local_name == wanted);
            if matched {
                out.push(id);
            }
            false
        });
        out
    }

    /// All elements whose class attribute contains the given class
    pub fn get_elements_by_class_name(&self, class: &str) -> Vec<NodeId> {
        let mut out = Vec::new();
        let _ = self.walk(self.tree.root(), &mut |id| {
            let matched = self
                .tree
                .get(id)
                .and_then(Node::as_element)
                .is_some_and(|e| e.class_list().contains(&class));
            if matched {
                out.push(id);
            }
            false
        });
        out
    }

    /// Selector matching is out of scope: always `None`
    pub fn query_selector(&self, selector: &str) -> Option<NodeId> {
        debug!(selector, "query_selector is a stub; returning None");
        None
    }

    /// Selector matching is out of scope: always empty
    pub fn query_selector_all(&self, selector: &str) -> Vec<NodeId> {
        debug!(selector, "query_selector_all is a stub; returning []");
        Vec::new()
    }

    /// Depth-first walk; stops at the first node the predicate accepts
    fn walk(&self, start: NodeId, accept: &mut impl FnMut(NodeId) -> bool) -> Option<NodeId> {
        let mut cur = self.tree.first_child(start);
        while let Some(id) = cur {
            if accept(id) {
                return Some(id);
            }
            if let Some(found) = self.walk(id, accept) {
                return Some(found);
            }
            cur = self.tree.next_sibling(id);
        }
        None
    }

    // ---- Adoption --------------------------------------------------------

    /// Move a subtree out of another document into this one. The
    /// subtree is copied node by node (handles are not portable
    /// between arenas), detached from the source, and the detached
    /// root of the copy is returned.
    pub fn adopt_node(&mut self, source: &mut Document, id: NodeId) -> DomResult<NodeId> {
        let copy = self.tree.import_subtree(source.tree(), id)?;
        if let Some(parent) = source.tree.parent(id) {
            source.tree.remove_child(parent, id)?;
        }
        debug!(node = id.0, "adopt_node");
        Ok(copy)
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("about:blank")
    }
}
