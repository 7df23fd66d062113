//! DOM Node records
//!
//! One struct for the structural links, one tagged union for the
//! per-variant payload. The enum discriminant drives every
//! type-specific branch; no node kind carries optional fields that
//! only apply to another kind.

use crate::NodeId;
use crate::attributes::{Attr, NamedNodeMap};

/// DOM node type, with the numeric discriminants of the standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum NodeType {
    Element = 1,
    Attribute = 2,
    Text = 3,
    Comment = 8,
    Document = 9,
    DocumentFragment = 11,
}

/// DOM Node - Core structure
///
/// Structural links are plain [`NodeId`] handles into the owning
/// tree's arena; `NodeId::NONE` stands for null. The child list is
/// not stored: it is derived from `first_child` and the sibling
/// chain, so the "all children" and "element children" views cannot
/// drift apart.
#[derive(Debug, Clone)]
pub struct Node {
    /// Parent node (NONE while detached)
    pub parent: NodeId,
    /// First child
    pub first_child: NodeId,
    /// Last child (for O(1) append)
    pub last_child: NodeId,
    /// Previous sibling
    pub prev_sibling: NodeId,
    /// Next sibling
    pub next_sibling: NodeId,
    /// Node-specific data
    pub data: NodeData,
}

impl Node {
    pub(crate) fn detached(data: NodeData) -> Self {
        Self {
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
            data,
        }
    }

    /// Create a new element node
    pub fn element(tag: &str) -> Self {
        Self::detached(NodeData::Element(ElementData::new(tag)))
    }

    /// Create a new text node
    pub fn text(data: impl Into<String>) -> Self {
        Self::detached(NodeData::Text(TextData::new(data)))
    }

    /// Create a new comment node
    pub fn comment(data: impl Into<String>) -> Self {
        Self::detached(NodeData::Comment(data.into()))
    }

    /// Create a document node
    pub fn document() -> Self {
        Self::detached(NodeData::Document)
    }

    /// Create a document fragment node
    pub fn fragment() -> Self {
        Self::detached(NodeData::Fragment)
    }

    /// Numeric node type of this node
    pub fn node_type(&self) -> NodeType {
        match &self.data {
            NodeData::Document => NodeType::Document,
            NodeData::Element(_) => NodeType::Element,
            NodeData::Text(_) => NodeType::Text,
            NodeData::Comment(_) => NodeType::Comment,
            NodeData::Fragment => NodeType::DocumentFragment,
        }
    }

    /// Node name: the tag name for elements, `#text`/`#comment`/
    /// `#document`/`#document-fragment` otherwise.
    pub fn node_name(&self) -> &str {
        match &self.data {
            NodeData::Document => "#document",
            NodeData::Element(e) => &e.tag_name,
            NodeData::Text(_) => "#text",
            NodeData::Comment(_) => "#comment",
            NodeData::Fragment => "#document-fragment",
        }
    }

    /// Node value: the character data for text and comment nodes,
    /// `None` for everything else.
    pub fn node_value(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(t) => Some(&t.content),
            NodeData::Comment(c) => Some(c),
            _ => None,
        }
    }

    /// Check if this is an element
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    /// Check if this is text
    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self.data, NodeData::Text(_))
    }

    /// Whether this node kind may hold children
    #[inline]
    pub fn can_have_children(&self) -> bool {
        matches!(
            self.data,
            NodeData::Document | NodeData::Element(_) | NodeData::Fragment
        )
    }

    /// Get element data if this is an element
    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get mutable element data
    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get text content if this is a text node
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(t) => Some(&t.content),
            _ => None,
        }
    }
}

/// Node-specific data
#[derive(Debug, Clone)]
pub enum NodeData {
    /// Document root
    Document,
    /// Element
    Element(ElementData),
    /// Text content
    Text(TextData),
    /// Comment
    Comment(String),
    /// Document fragment
    Fragment,
}

/// Element-specific data
#[derive(Debug, Clone)]
pub struct ElementData {
    /// Tag name, uppercased
    pub tag_name: String,
    /// Tag name, lowercased
    pub local_name: String,
    /// Shadow of the `id` attribute
    pub id: String,
    /// Shadow of the `class` attribute
    pub class_name: String,
    /// Attribute store
    pub attributes: NamedNodeMap,
}

impl ElementData {
    pub fn new(tag: &str) -> Self {
        Self {
            tag_name: tag.to_ascii_uppercase(),
            local_name: tag.to_ascii_lowercase(),
            id: String::new(),
            class_name: String::new(),
            attributes: NamedNodeMap::new(),
        }
    }

    /// Set an attribute, updating the `id`/`class_name` shadow fields.
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.set_named_item(Attr::new(name, value));
        match name {
            "id" => self.id = value.to_string(),
            "class" => self.class_name = value.to_string(),
            _ => {}
        }
    }

    /// Get an attribute value
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get_attribute(name)
    }

    /// Remove an attribute. The `id`/`class_name` shadow fields reset
    /// to the empty string even when the attribute was absent.
    pub fn remove_attribute(&mut self, name: &str) -> Option<Attr> {
        match name {
            "id" => self.id.clear(),
            "class" => self.class_name.clear(),
            _ => {}
        }
        self.attributes.remove_named_item(name)
    }

    /// Check if attribute exists
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.has_attribute(name)
    }

    /// Toggle an attribute, keeping the shadow fields in sync
    pub fn toggle_attribute(&mut self, name: &str, force: Option<bool>) -> bool {
        let target = force.unwrap_or(!self.has_attribute(name));
        if target {
            if !self.has_attribute(name) {
                self.set_attribute(name, "");
            }
        } else {
            let _ = self.remove_attribute(name);
        }
        target
    }

    /// Attribute names in insertion order
    pub fn get_attribute_names(&self) -> Vec<&str> {
        self.attributes.get_attribute_names()
    }

    /// Class attribute split on ASCII whitespace
    pub fn class_list(&self) -> Vec<&str> {
        self.class_name.split_ascii_whitespace().collect()
    }
}

/// Text node data
#[derive(Debug, Clone)]
pub struct TextData {
    /// Character data, also exposed as `node_value`
    pub content: String,
}

impl TextData {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Length in characters, like `CharacterData.length`
    pub fn len(&self) -> usize {
        self.content.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_type_discriminants() {
        assert_eq!(NodeType::Element as u16, 1);
        assert_eq!(NodeType::Attribute as u16, 2);
        assert_eq!(NodeType::Text as u16, 3);
        assert_eq!(NodeType::Comment as u16, 8);
        assert_eq!(NodeType::Document as u16, 9);
        assert_eq!(NodeType::DocumentFragment as u16, 11);
    }

    #[test]
    fn test_element_name_normalization() {
        let node = Node::element("DiV");
        let elem = node.as_element().unwrap();

        assert_eq!(elem.tag_name, "DIV");
        assert_eq!(elem.local_name, "div");
        assert_eq!(node.node_name(), "DIV");
    }

    #[test]
    fn test_node_names_and_values() {
        assert_eq!(Node::document().node_name(), "#document");
        assert_eq!(Node::fragment().node_name(), "#document-fragment");

        let text = Node::text("hi");
        assert_eq!(text.node_name(), "#text");
        assert_eq!(text.node_value(), Some("hi"));

        let comment = Node::comment("note");
        assert_eq!(comment.node_name(), "#comment");
        assert_eq!(comment.node_value(), Some("note"));

        assert_eq!(Node::element("p").node_value(), None);
    }

    #[test]
    fn test_shadow_field_sync() {
        let mut elem = ElementData::new("div");

        elem.set_attribute("id", "main");
        elem.set_attribute("class", "box wide");
        assert_eq!(elem.id, "main");
        assert_eq!(elem.class_name, "box wide");
        assert_eq!(elem.class_list(), vec!["box", "wide"]);

        elem.remove_attribute("id");
        assert_eq!(elem.id, "");
        assert_eq!(elem.get_attribute("id"), None);

        // class survives an unrelated removal
        elem.remove_attribute("data-x");
        assert_eq!(elem.class_name, "box wide");
    }

    #[test]
    fn test_toggle_attribute_shadow_sync() {
        let mut elem = ElementData::new("input");

        assert!(elem.toggle_attribute("disabled", None));
        assert!(elem.has_attribute("disabled"));

        assert!(!elem.toggle_attribute("disabled", None));
        assert!(!elem.has_attribute("disabled"));

        elem.set_attribute("class", "a");
        assert!(!elem.toggle_attribute("class", Some(false)));
        assert_eq!(elem.class_name, "");
    }
}
