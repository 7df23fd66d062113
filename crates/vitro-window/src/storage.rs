//! Storage APIs
//!
//! localStorage and sessionStorage. Entries keep insertion order so
//! `key(index)` is stable across runs; localStorage persists as
//! tab-separated pairs, one per line, with tabs, newlines and
//! backslashes escaped so arbitrary strings round-trip.

use std::fs;
use std::path::PathBuf;
use tracing::warn;

/// Storage backend
#[derive(Debug, Default)]
pub struct Storage {
    entries: Vec<(String, String)>,
    path: Option<PathBuf>,
}

impl Storage {
    /// Create in-memory storage (sessionStorage)
    pub fn session() -> Self {
        Self::default()
    }

    /// Create persistent storage (localStorage), loading any existing
    /// data at `path`
    pub fn local(path: PathBuf) -> Self {
        let mut storage = Self {
            entries: Vec::new(),
            path: Some(path.clone()),
        };

        if path.exists() {
            if let Ok(contents) = fs::read_to_string(&path) {
                for line in contents.lines() {
                    if let Some((key, value)) = line.split_once('\t') {
                        storage.entries.push((unescape(key), unescape(value)));
                    }
                }
            }
        }

        storage
    }

    /// Get item
    pub fn get_item(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set item; an existing key keeps its position
    pub fn set_item(&mut self, key: &str, value: &str) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value.to_string(),
            None => self.entries.push((key.to_string(), value.to_string())),
        }
        self.persist();
    }

    /// Remove item; absent keys are fine
    pub fn remove_item(&mut self, key: &str) {
        self.entries.retain(|(k, _)| k != key);
        self.persist();
    }

    /// Clear all items
    pub fn clear(&mut self) {
        self.entries.clear();
        self.persist();
    }

    /// Key at index, in insertion order
    pub fn key(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|(k, _)| k.as_str())
    }

    /// Number of items
    pub fn length(&self) -> usize {
        self.entries.len()
    }

    fn persist(&self) {
        let Some(path) = &self.path else { return };
        let contents: String = self
            .entries
            .iter()
            .map(|(k, v)| format!("{}\t{}", escape(k), escape(v)))
            .collect::<Vec<_>>()
            .join("\n");
        if let Err(err) = fs::write(path, contents) {
            warn!(path = %path.display(), %err, "storage persist failed");
        }
    }
}

/// Escape the characters the file format reserves: the tab that
/// separates key from value, the newline that separates entries, and
/// the backslash that introduces escapes.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}

fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('\\') => out.push('\\'),
            // not one of ours: keep the backslash as written
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let mut storage = Storage::session();
        storage.set_item("theme", "dark");
        storage.set_item("lang", "en");

        assert_eq!(storage.length(), 2);
        assert_eq!(storage.get_item("theme"), Some("dark"));

        storage.remove_item("theme");
        assert_eq!(storage.get_item("theme"), None);
        storage.remove_item("theme"); // absent key is a no-op
        assert_eq!(storage.length(), 1);
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut storage = Storage::session();
        storage.set_item("a", "1");
        storage.set_item("b", "2");
        storage.set_item("a", "3");

        assert_eq!(storage.length(), 2);
        assert_eq!(storage.key(0), Some("a"));
        assert_eq!(storage.key(1), Some("b"));
        assert_eq!(storage.key(2), None);
        assert_eq!(storage.get_item("a"), Some("3"));
    }

    #[test]
    fn test_clear() {
        let mut storage = Storage::session();
        storage.set_item("x", "y");
        storage.clear();
        assert_eq!(storage.length(), 0);
    }

    #[test]
    fn test_local_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "vitro-storage-test-{}.tsv",
            std::process::id()
        ));
        let _ = fs::remove_file(&path);

        {
            let mut storage = Storage::local(path.clone());
            storage.set_item("k1", "v1");
            storage.set_item("k2", "v with spaces");
        }

        let reloaded = Storage::local(path.clone());
        assert_eq!(reloaded.get_item("k1"), Some("v1"));
        assert_eq!(reloaded.get_item("k2"), Some("v with spaces"));
        assert_eq!(reloaded.key(0), Some("k1"));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_local_round_trip_control_characters() {
        let path = std::env::temp_dir().join(format!(
            "vitro-storage-escape-test-{}.tsv",
            std::process::id()
        ));
        let _ = fs::remove_file(&path);

        {
            let mut storage = Storage::local(path.clone());
            storage.set_item("multiline", "line1\nline2");
            storage.set_item("tabbed", "a\tb");
            storage.set_item("backslashes", "c:\\temp\\n");
            storage.set_item("odd\nkey", "v");
        }

        let reloaded = Storage::local(path.clone());
        assert_eq!(reloaded.get_item("multiline"), Some("line1\nline2"));
        assert_eq!(reloaded.get_item("tabbed"), Some("a\tb"));
        assert_eq!(reloaded.get_item("backslashes"), Some("c:\\temp\\n"));
        assert_eq!(reloaded.get_item("odd\nkey"), Some("v"));
        assert_eq!(reloaded.length(), 4);

        let _ = fs::remove_file(&path);
    }
}
