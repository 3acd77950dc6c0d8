//! Game settings and the hint-difficulty contract.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::Category;

/// Settings a group chooses at setup.
///
/// Supplied with `start_game`, retained across replays of the same roster,
/// and only editable from the Setup phase. The session keeps the value even
/// when it returns to Setup, so the settings screen reopens pre-filled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Categories the secret word may be drawn from. Must be non-empty for
    /// a round to start.
    pub enabled_categories: BTreeSet<Category>,

    /// How many imposters to deal. Clamped at assignment time so at least
    /// one player always knows the word.
    pub imposter_count: usize,

    /// Whether imposters get to see the round's category.
    pub reveal_category_to_imposter: bool,

    /// Whether imposters get to see the round's hint.
    pub reveal_hint_to_imposter: bool,

    /// Hint obscurity, 1 (helpful) through 10 (extremely abstract).
    pub hint_difficulty: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enabled_categories: Category::ALL.into_iter().collect(),
            imposter_count: 1,
            reveal_category_to_imposter: false,
            reveal_hint_to_imposter: false,
            hint_difficulty: 1,
        }
    }
}

/// The three-band hint-style directive sent to the content provider.
///
/// The exact prompt wording is the provider's concern; the session's
/// obligation is only to pass the correct band (plus the raw level, which
/// the medium band's wording interpolates).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DifficultyBand {
    /// Levels 1–3: vague but definitely connected.
    Easy,
    /// Levels 4–7: moderately vague, scaled to the exact level.
    Medium,
    /// Levels 8–10: extremely abstract.
    Hard,
}

impl DifficultyBand {
    /// Maps a 1–10 difficulty level onto its band.
    pub fn from_level(level: u8) -> Self {
        match level {
            0..=3 => Self::Easy,
            4..=7 => Self::Medium,
            _ => Self::Hard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_enables_every_category() {
        let settings = Settings::default();
        assert_eq!(settings.enabled_categories.len(), Category::ALL.len());
        assert_eq!(settings.imposter_count, 1);
        assert!(!settings.reveal_category_to_imposter);
        assert!(!settings.reveal_hint_to_imposter);
        assert_eq!(settings.hint_difficulty, 1);
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(DifficultyBand::from_level(1), DifficultyBand::Easy);
        assert_eq!(DifficultyBand::from_level(3), DifficultyBand::Easy);
        assert_eq!(DifficultyBand::from_level(4), DifficultyBand::Medium);
        assert_eq!(DifficultyBand::from_level(7), DifficultyBand::Medium);
        assert_eq!(DifficultyBand::from_level(8), DifficultyBand::Hard);
        assert_eq!(DifficultyBand::from_level(10), DifficultyBand::Hard);
    }

    #[test]
    fn test_settings_survive_a_serde_round_trip() {
        let settings = Settings {
            hint_difficulty: 9,
            imposter_count: 2,
            ..Settings::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }
}
