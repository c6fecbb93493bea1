//! Bounded most-recent-first list of generated sounds.

use std::collections::VecDeque;

use crate::SoundParams;

/// One remembered sound: a display label and its full parameter set.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    /// Human-readable label, e.g. the preset category that produced it.
    pub label: String,
    /// Owned copy of the parameters, independent of the editor's live state.
    pub params: SoundParams,
}

/// A fixed-capacity, most-recent-first list of generated sounds.
///
/// New entries are prepended; once [`History::MAX_SIZE`] entries exist, the
/// oldest is evicted to make room. Index 0 is always the most recent entry.
///
/// # Examples
///
/// ```
/// use rfxr::{History, SoundParams};
///
/// let mut history = History::new();
/// history.push("blip", SoundParams::default());
/// history.push("zap", SoundParams::default());
/// assert_eq!(history.get(0).unwrap().label, "zap");
/// assert_eq!(history.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct History {
    items: VecDeque<HistoryEntry>,
}

impl History {
    /// Maximum number of remembered sounds.
    pub const MAX_SIZE: usize = 30;

    /// Creates an empty history.
    pub fn new() -> Self {
        Self {
            items: VecDeque::with_capacity(Self::MAX_SIZE),
        }
    }

    /// Prepends an entry, evicting the oldest one when the list is full.
    pub fn push(&mut self, label: impl Into<String>, params: SoundParams) {
        if self.items.len() == Self::MAX_SIZE {
            self.items.pop_back();
        }
        self.items.push_front(HistoryEntry {
            label: label.into(),
            params,
        });
    }

    /// Returns the entry at `index`, where 0 is the most recent.
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.items.get(index)
    }

    /// Number of remembered sounds.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if nothing has been remembered yet.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates entries from most recent to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.items.iter()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let history = History::new();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
        assert!(history.get(0).is_none());
    }

    #[test]
    fn test_most_recent_first() {
        let mut history = History::new();
        history.push("first", SoundParams::default());
        history.push("second", SoundParams::default());
        history.push("third", SoundParams::default());
        assert_eq!(history.get(0).unwrap().label, "third");
        assert_eq!(history.get(2).unwrap().label, "first");
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut history = History::new();
        for i in 0..History::MAX_SIZE + 5 {
            history.push(format!("sound {i}"), SoundParams::default());
        }
        assert_eq!(history.len(), History::MAX_SIZE);
        // The five oldest entries are gone.
        assert_eq!(history.get(0).unwrap().label, "sound 34");
        assert_eq!(
            history.get(History::MAX_SIZE - 1).unwrap().label,
            "sound 5"
        );
    }

    #[test]
    fn test_iter_order_matches_get() {
        let mut history = History::new();
        history.push("a", SoundParams::default());
        history.push("b", SoundParams::default());
        let labels: Vec<&str> = history.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["b", "a"]);
    }

    #[test]
    fn test_entries_own_their_params() {
        let mut history = History::new();
        let mut params = SoundParams::default();
        history.push("kept", params);
        params.base_frequency = 0.9;
        assert_eq!(history.get(0).unwrap().params.base_frequency, 0.3);
    }
}
