//! Player identity and the per-round player record.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// A unique identifier for a player.
///
/// This is a newtype wrapper over `u64` — a `PlayerId` can't be confused
/// with any other number in a signature, even though it's just an integer
/// underneath. `#[serde(transparent)]` makes it serialize as that plain
/// integer, so `PlayerId(42)` becomes `42` in a session snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u64);

/// Counter backing [`PlayerId::fresh`]. Process-wide, so every round's
/// players get ids that were never issued before — a replay with the same
/// names still produces distinguishable players.
static NEXT_PLAYER_ID: AtomicU64 = AtomicU64::new(1);

impl PlayerId {
    /// Allocates a fresh, never-before-issued id.
    pub fn fresh() -> Self {
        Self(NEXT_PLAYER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P-{}", self.0)
    }
}

/// One seat at the table for the current round.
///
/// Players are created by role assignment when a round starts and owned by
/// the session for the life of that round. `has_viewed` only ever flips
/// `false → true` (the distribution-gating operation is idempotent), and no
/// field mutates after the reveal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Fresh per round — replays produce new ids even for the same roster.
    pub id: PlayerId,

    /// Display name as entered at setup. Duplicates are allowed; two
    /// players named "Sam" are still distinct players by position.
    pub name: String,

    /// Whether this player bluffs this round instead of knowing the word.
    pub is_imposter: bool,

    /// Whether this player has privately viewed their role card.
    pub has_viewed: bool,
}
