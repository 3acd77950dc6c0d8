//! Word categories players can enable for a session.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A secret-word category.
///
/// The closed set of categories the game offers. Serialized (and displayed)
/// as the human-readable label, which is also the key used in the round
/// history — `Category::HistoricalEvents` travels as `"Historical Events"`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Category {
    Sports,
    Locations,
    Foods,
    Animals,
    #[serde(rename = "Historical Events")]
    HistoricalEvents,
    People,
    Professions,
    Brands,
    Vehicles,
    Tools,
    Games,
    Cities,
    Holidays,
    Objects,
}

impl Category {
    /// Every category, in menu order. Handy for "enable everything"
    /// defaults and for settings screens.
    pub const ALL: [Category; 14] = [
        Category::Sports,
        Category::Locations,
        Category::Foods,
        Category::Animals,
        Category::HistoricalEvents,
        Category::People,
        Category::Professions,
        Category::Brands,
        Category::Vehicles,
        Category::Tools,
        Category::Games,
        Category::Cities,
        Category::Holidays,
        Category::Objects,
    ];

    /// The human-readable label, used for display, serialization, and as
    /// the round-history key.
    pub fn label(self) -> &'static str {
        match self {
            Category::Sports => "Sports",
            Category::Locations => "Locations",
            Category::Foods => "Foods",
            Category::Animals => "Animals",
            Category::HistoricalEvents => "Historical Events",
            Category::People => "People",
            Category::Professions => "Professions",
            Category::Brands => "Brands",
            Category::Vehicles => "Vehicles",
            Category::Tools => "Tools",
            Category::Games => "Games",
            Category::Cities => "Cities",
            Category::Holidays => "Holidays",
            Category::Objects => "Objects",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_lists_every_category_once() {
        let mut seen = std::collections::BTreeSet::new();
        for cat in Category::ALL {
            assert!(seen.insert(cat), "{cat} listed twice");
        }
        assert_eq!(seen.len(), 14);
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&Category::HistoricalEvents).unwrap();
        assert_eq!(json, "\"Historical Events\"");
        let json = serde_json::to_string(&Category::Foods).unwrap();
        assert_eq!(json, "\"Foods\"");
    }

    #[test]
    fn test_deserializes_from_label() {
        let cat: Category = serde_json::from_str("\"Historical Events\"").unwrap();
        assert_eq!(cat, Category::HistoricalEvents);
    }

    #[test]
    fn test_display_matches_label() {
        for cat in Category::ALL {
            assert_eq!(cat.to_string(), cat.label());
        }
    }
}
