//! Per-round content and stats records.

use serde::{Deserialize, Serialize};

/// Category label carried by the fallback round.
pub const FALLBACK_CATEGORY: &str = "System";

/// The secret word, category, and hint for one round.
///
/// Produced once per round and immutable once set; a replay replaces the
/// whole value. `category` holds the display label of the category that was
/// selected locally — never whatever the provider claimed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundContent {
    /// The word (or concept) everyone except the imposters must describe.
    pub secret_word: String,

    /// Display label of the round's category.
    pub category: String,

    /// A subtle 1–2 word hint, shown to imposters when settings allow.
    pub hint: String,
}

impl RoundContent {
    /// The sentinel round used when content generation fails.
    ///
    /// Play proceeds with this placeholder instead of blocking on provider
    /// flakiness — the group sees it immediately and can just deal again.
    pub fn fallback() -> Self {
        Self {
            secret_word: "Error Generating Word".into(),
            category: FALLBACK_CATEGORY.into(),
            hint: "Try Again".into(),
        }
    }

    /// Returns `true` if this is the generation-failed sentinel.
    pub fn is_fallback(&self) -> bool {
        self.category == FALLBACK_CATEGORY
    }
}

/// Timing captured for the round that just ended.
///
/// Computed once at reveal time from the wall-clock discussion window and
/// overwritten by the next round's reveal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    /// Whole seconds between entering Discussion and calling reveal.
    pub discussion_duration_seconds: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_sentinels() {
        let fallback = RoundContent::fallback();
        assert_eq!(fallback.secret_word, "Error Generating Word");
        assert_eq!(fallback.category, "System");
        assert_eq!(fallback.hint, "Try Again");
        assert!(fallback.is_fallback());
    }

    #[test]
    fn test_generated_round_is_not_fallback() {
        let round = RoundContent {
            secret_word: "Basketball".into(),
            category: "Sports".into(),
            hint: "Orange bounce".into(),
        };
        assert!(!round.is_fallback());
    }

    #[test]
    fn test_stats_default_to_zero() {
        assert_eq!(SessionStats::default().discussion_duration_seconds, 0);
    }
}
