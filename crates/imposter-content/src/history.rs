//! Per-category history of issued secret words.

use std::collections::HashMap;

/// How many recent entries per category are handed to the provider for
/// duplicate avoidance. Stored history keeps growing past this; only the
/// window ever leaves the crate.
pub const DEDUP_WINDOW: usize = 50;

/// The words each category has already produced this session.
///
/// Append-only: entries are added when a round is generated and never
/// removed or reordered. Keyed by category label rather than the typed
/// enum because the fallback round files under its own `"System"` label,
/// which is not a playable category.
#[derive(Debug, Clone, Default)]
pub struct RoundHistory {
    words: HashMap<String, Vec<String>>,
}

impl RoundHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a round's secret word under its category label.
    pub fn record(&mut self, category: &str, word: impl Into<String>) {
        self.words
            .entry(category.to_string())
            .or_default()
            .push(word.into());
    }

    /// The most recent (at most [`DEDUP_WINDOW`]) words issued for a
    /// category, oldest first. Older entries are simply not returned.
    pub fn recent(&self, category: &str) -> &[String] {
        match self.words.get(category) {
            Some(words) => &words[words.len().saturating_sub(DEDUP_WINDOW)..],
            None => &[],
        }
    }

    /// Total words ever recorded for a category — may exceed the window.
    pub fn recorded(&self, category: &str) -> usize {
        self.words.get(category).map_or(0, Vec::len)
    }
}
