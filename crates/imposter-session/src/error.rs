//! Error types for the session layer.

use imposter_content::ContentError;
use imposter_types::{GamePhase, PlayerId};

use crate::MIN_PLAYERS;

/// Errors a session transition can report.
///
/// Phase misuse never mutates state. The configuration cases
/// (`TooFewPlayers`, `Content`) additionally leave a dismissible,
/// user-visible message on the session itself, because those are the
/// failures a player is expected to see and fix.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The requested transition is not legal in the current phase.
    /// For example, calling reveal while roles are still being viewed.
    #[error("cannot {action} during the {phase} phase")]
    InvalidPhase {
        /// What the caller tried to do, for the message.
        action: &'static str,
        /// The phase the session was (and still is) in.
        phase: GamePhase,
    },

    /// Fewer than the minimum number of usable player names were supplied
    /// (after trimming whitespace and dropping empties).
    #[error("at least {min} players are required, got {0}", min = MIN_PLAYERS)]
    TooFewPlayers(usize),

    /// No player with this id is at the table this round.
    #[error("no player {0} in this round")]
    UnknownPlayer(PlayerId),

    /// Content generation refused to run — in practice, no enabled
    /// categories. Provider flakiness never surfaces here; it is absorbed
    /// into the fallback round.
    #[error(transparent)]
    Content(#[from] ContentError),

    /// The session task is gone; its command channel is closed.
    #[error("session is no longer running")]
    Closed,
}
