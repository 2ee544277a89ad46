//! Query-parameter abstraction the lightbox reads and writes through.

use std::collections::BTreeMap;

/// How a query rewrite lands in session history.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryMode {
    /// Add a new history entry; Back returns to the previous query
    Push,
    /// Rewrite the newest entry in place
    Replace,
}

/// The slice of the URL the lightbox owns: reading query parameters and
/// rewriting them with explicit history behavior.
///
/// Hosts back this with the real location bar; tests use [`MemoryQuery`].
/// Values cross this boundary untrusted in both directions, so resolving
/// validates everything read back out.
pub trait QueryPairs {
    /// Current value of `key`, if present.
    fn get(&self, key: &str) -> Option<String>;

    /// Apply every change as one rewrite: `Some` sets a key, `None` removes
    /// it. Untouched keys keep their values.
    fn update(&mut self, changes: &[(&str, Option<String>)], mode: HistoryMode);
}

/// In-memory [`QueryPairs`] with a real history stack.
#[derive(Clone, Debug)]
pub struct MemoryQuery {
    history: Vec<BTreeMap<String, String>>,
}

impl Default for MemoryQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryQuery {
    /// An empty query, as on a fresh page load.
    pub fn new() -> Self {
        Self {
            history: vec![BTreeMap::new()],
        }
    }

    /// Start from existing pairs, as if the page loaded with them.
    pub fn with_pairs(pairs: &[(&str, &str)]) -> Self {
        let mut entry = BTreeMap::new();
        for (key, value) in pairs {
            entry.insert((*key).to_string(), (*value).to_string());
        }
        Self {
            history: vec![entry],
        }
    }

    /// Number of history entries accumulated so far.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Drop the newest entry, like the browser Back button. The initial
    /// entry always survives.
    pub fn back(&mut self) {
        if self.history.len() > 1 {
            self.history.pop();
        }
    }
}

impl QueryPairs for MemoryQuery {
    fn get(&self, key: &str) -> Option<String> {
        self.history.last().and_then(|entry| entry.get(key).cloned())
    }

    fn update(&mut self, changes: &[(&str, Option<String>)], mode: HistoryMode) {
        let mut entry = self.history.last().cloned().unwrap_or_default();
        for (key, value) in changes {
            match value {
                Some(value) => {
                    entry.insert((*key).to_string(), value.clone());
                }
                None => {
                    entry.remove(*key);
                }
            }
        }
        match mode {
            HistoryMode::Push => self.history.push(entry),
            HistoryMode::Replace => match self.history.last_mut() {
                Some(newest) => *newest = entry,
                None => self.history.push(entry),
            },
        }
    }
}
