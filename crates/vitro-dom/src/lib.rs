//! vitro DOM - Synthetic Document Object Model
//!
//! An arena-backed DOM tree for running DOM-consuming code inside a
//! non-browser host. Each [`Document`] owns its own [`DomTree`]; nodes
//! are addressed by [`NodeId`] handles, so parent and sibling
//! back-references are non-owning by construction.

mod attributes;
mod document;
mod node;
mod tree;

pub use attributes::{Attr, NamedNodeMap};
pub use document::Document;
pub use node::{ElementData, Node, NodeData, NodeType, TextData};
pub use tree::{ChildNodes, DomError, DomResult, DomTree};

/// Node identifier (index into the owning tree's arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// The document node always occupies slot 0
    pub const DOCUMENT: NodeId = NodeId(0);

    /// Whether this handle refers to a node at all
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}
