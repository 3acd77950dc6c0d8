//! The round lifecycle state machine.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The phase a game session is currently in.
///
/// Forward edges run left to right; the only backward edges leave `Reveal`
/// (replay with the same roster, or back to setup for new settings), plus
/// the bail-out from `Loading` when the settings have no enabled category:
///
/// ```text
///        ┌─────────────────(change settings)──────────────────┐
///        ▼                                                     │
///      Setup ──▶ Loading ──▶ Distribution ──▶ Discussion ──▶ Reveal
///        ▲          │  ▲                                       │
///        └──────────┘  └─────────────(play again)──────────────┘
/// ```
///
/// - **Setup**: collecting names and settings; nothing generated yet.
/// - **Loading**: the content-generation request is in flight. No other
///   transition is accepted until it settles.
/// - **Distribution**: each player privately views their role card.
/// - **Discussion**: everyone has viewed; the wall-clock timer is running.
/// - **Reveal**: roles and the secret word are on the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Setup,
    Loading,
    Distribution,
    Discussion,
    Reveal,
}

impl GamePhase {
    /// Returns `true` if a new round may be started from this phase.
    ///
    /// Starting is legal from `Setup` (first round) and `Reveal` (replay);
    /// everywhere else a round is already underway.
    pub fn can_start(self) -> bool {
        matches!(self, Self::Setup | Self::Reveal)
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Setup => write!(f, "Setup"),
            Self::Loading => write!(f, "Loading"),
            Self::Distribution => write!(f, "Distribution"),
            Self::Discussion => write!(f, "Discussion"),
            Self::Reveal => write!(f, "Reveal"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_start_only_from_setup_and_reveal() {
        assert!(GamePhase::Setup.can_start());
        assert!(GamePhase::Reveal.can_start());
        assert!(!GamePhase::Loading.can_start());
        assert!(!GamePhase::Distribution.can_start());
        assert!(!GamePhase::Discussion.can_start());
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(GamePhase::Setup.to_string(), "Setup");
        assert_eq!(GamePhase::Distribution.to_string(), "Distribution");
    }

    #[test]
    fn test_phase_serializes_as_string() {
        let json = serde_json::to_string(&GamePhase::Discussion).unwrap();
        assert_eq!(json, "\"Discussion\"");
    }
}
