//! History API
//!
//! history.pushState, replaceState, back, forward, go.

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// History entry
#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    pub url: String,
    pub title: String,
    /// JSON state payload handed to pushState/replaceState
    pub state: Option<Value>,
}

/// History manager
#[derive(Debug)]
pub struct History {
    entries: Vec<HistoryEntry>,
    current: usize,
}

impl History {
    pub fn new(initial_url: &str) -> Self {
        Self {
            entries: vec![HistoryEntry {
                url: initial_url.to_string(),
                title: String::new(),
                state: None,
            }],
            current: 0,
        }
    }

    /// Push a new entry, truncating any forward history
    pub fn push_state(&mut self, state: Option<Value>, title: impl Into<String>, url: impl Into<String>) {
        self.entries.truncate(self.current + 1);
        self.entries.push(HistoryEntry {
            url: url.into(),
            title: title.into(),
            state,
        });
        self.current = self.entries.len() - 1;
        debug!(url = %self.entries[self.current].url, "history.pushState");
    }

    /// Replace the current entry in place
    pub fn replace_state(&mut self, state: Option<Value>, title: impl Into<String>, url: impl Into<String>) {
        if let Some(entry) = self.entries.get_mut(self.current) {
            entry.url = url.into();
            entry.title = title.into();
            entry.state = state;
        }
    }

    /// Go back one entry, `None` at the oldest entry
    pub fn back(&mut self) -> Option<&HistoryEntry> {
        self.go(-1)
    }

    /// Go forward one entry, `None` at the newest entry
    pub fn forward(&mut self) -> Option<&HistoryEntry> {
        self.go(1)
    }

    /// Move the cursor by a signed offset
    pub fn go(&mut self, delta: i32) -> Option<&HistoryEntry> {
        let target = self.current as i64 + i64::from(delta);
        if target < 0 || target as usize >= self.entries.len() {
            debug!(delta, "history.go out of range");
            return None;
        }
        self.current = target as usize;
        Some(&self.entries[self.current])
    }

    /// Current entry
    pub fn current(&self) -> &HistoryEntry {
        &self.entries[self.current]
    }

    /// Number of entries
    pub fn length(&self) -> usize {
        self.entries.len()
    }
}
