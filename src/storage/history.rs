//! Download history for the current session
//!
//! Lives in memory only and is gone when the process exits.

use crate::types::HistoryEntry;
use chrono::Local;

/// Append-only list of downloaded URLs
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a downloaded URL
    pub fn append(&mut self, url: &str) {
        self.entries.push(HistoryEntry {
            url: url.to_string(),
            downloaded_at: Local::now(),
        });
    }

    /// Entries, newest first
    pub fn list_most_recent_first(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(history: &History) -> Vec<&str> {
        history.list_most_recent_first().map(|e| e.url.as_str()).collect()
    }

    #[test]
    fn test_most_recent_first() {
        let mut history = History::new();
        history.append("https://x/1");
        history.append("https://x/2");
        assert_eq!(urls(&history), vec!["https://x/2", "https://x/1"]);
    }

    #[test]
    fn test_keeps_duplicates() {
        let mut history = History::new();
        history.append("https://x/1");
        history.append("https://x/1");
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_starts_empty() {
        let history = History::new();
        assert!(history.is_empty());
        assert_eq!(history.list_most_recent_first().count(), 0);
    }
}
