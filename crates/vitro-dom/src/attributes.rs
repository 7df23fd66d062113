//! Element Attributes
//!
//! NamedNodeMap-style storage: unique by name, insertion order
//! preserved, replace-in-place keeps the original position.

use std::collections::HashMap;

/// Single attribute record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    pub name: String,
    pub value: String,
}

impl Attr {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Named node map (attribute collection)
#[derive(Debug, Clone, Default)]
pub struct NamedNodeMap {
    attributes: Vec<Attr>,
    by_name: HashMap<String, usize>,
}

impl NamedNodeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get number of attributes
    pub fn length(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Get attribute by index (insertion order)
    pub fn item(&self, index: usize) -> Option<&Attr> {
        self.attributes.get(index)
    }

    /// Get attribute by name
    pub fn get_named_item(&self, name: &str) -> Option<&Attr> {
        self.by_name.get(name).and_then(|&i| self.attributes.get(i))
    }

    /// Get attribute value
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.get_named_item(name).map(|a| a.value.as_str())
    }

    /// Insert or replace the entry keyed by `attr.name`. A replaced
    /// entry keeps its original position and the old record is
    /// returned.
    pub fn set_named_item(&mut self, attr: Attr) -> Option<Attr> {
        if let Some(&index) = self.by_name.get(&attr.name) {
            Some(std::mem::replace(&mut self.attributes[index], attr))
        } else {
            self.by_name.insert(attr.name.clone(), self.attributes.len());
            self.attributes.push(attr);
            None
        }
    }

    /// Set attribute by name/value
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        let _ = self.set_named_item(Attr::new(name, value));
    }

    /// Remove attribute by name. Absent names are not an error.
    pub fn remove_named_item(&mut self, name: &str) -> Option<Attr> {
        let index = self.by_name.remove(name)?;
        // Entries after the removed one shift down by one
        for idx in self.by_name.values_mut() {
            if *idx > index {
                *idx -= 1;
            }
        }
        Some(self.attributes.remove(index))
    }

    /// Check if attribute exists
    pub fn has_attribute(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Attribute names in insertion order
    pub fn get_attribute_names(&self) -> Vec<&str> {
        self.attributes.iter().map(|a| a.name.as_str()).collect()
    }

    /// Iterate over attributes in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Attr> {
        self.attributes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_attribute() {
        let mut attrs = NamedNodeMap::new();
        attrs.set_attribute("class", "btn");
        attrs.set_attribute("id", "submit");

        assert_eq!(attrs.length(), 2);
        assert_eq!(attrs.get_attribute("class"), Some("btn"));
        assert_eq!(attrs.get_attribute("id"), Some("submit"));
        assert_eq!(attrs.get_attribute("missing"), None);
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut attrs = NamedNodeMap::new();
        attrs.set_attribute("a", "1");
        attrs.set_attribute("b", "2");
        attrs.set_attribute("a", "3");

        assert_eq!(attrs.length(), 2);
        assert_eq!(attrs.item(0).map(|a| a.name.as_str()), Some("a"));
        assert_eq!(attrs.get_attribute("a"), Some("3"));
    }

    #[test]
    fn test_set_named_item_returns_old() {
        let mut attrs = NamedNodeMap::new();
        assert_eq!(attrs.set_named_item(Attr::new("k", "v1")), None);

        let old = attrs.set_named_item(Attr::new("k", "v2"));
        assert_eq!(old, Some(Attr::new("k", "v1")));
    }

    #[test]
    fn test_remove_attribute() {
        let mut attrs = NamedNodeMap::new();
        attrs.set_attribute("foo", "bar");

        assert!(attrs.has_attribute("foo"));
        let removed = attrs.remove_named_item("foo");
        assert_eq!(removed, Some(Attr::new("foo", "bar")));
        assert!(!attrs.has_attribute("foo"));
        assert_eq!(attrs.remove_named_item("foo"), None);
    }

    #[test]
    fn test_remove_reindexes_later_entries() {
        let mut attrs = NamedNodeMap::new();
        attrs.set_attribute("a", "1");
        attrs.set_attribute("b", "2");
        attrs.set_attribute("c", "3");

        attrs.remove_named_item("a");
        assert_eq!(attrs.get_attribute("b"), Some("2"));
        assert_eq!(attrs.get_attribute("c"), Some("3"));
        assert_eq!(attrs.item(0).map(|a| a.name.as_str()), Some("b"));
        assert_eq!(attrs.get_attribute_names(), vec!["b", "c"]);
    }

    #[test]
    fn test_item_positional_access() {
        let mut attrs = NamedNodeMap::new();
        attrs.set_attribute("x", "1");
        attrs.set_attribute("y", "2");

        assert_eq!(attrs.item(1).map(|a| a.value.as_str()), Some("2"));
        assert_eq!(attrs.item(2), None);
    }
}
