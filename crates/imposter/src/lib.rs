//! # Imposter
//!
//! Session controller for the "find the imposter" social-deduction party
//! game. One session drives one table through setup, secret-role
//! distribution, timed discussion, and reveal, with round content coming
//! from a pluggable [`RoundSource`] (Gemini in production, anything you
//! like in tests and demos).
//!
//! The presentation layer — screens, timers, widgets — is yours. This crate
//! owns the rules: exclusive role assignment, per-player view gating,
//! wall-clock discussion timing, per-category word deduplication, and the
//! keep-playing fallback when the content provider misbehaves.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use imposter::prelude::*;
//!
//! # async fn run() -> Result<(), imposter::SessionError> {
//! let handle = spawn_session(GeminiRoundSource::new("api-key"));
//!
//! handle
//!     .start_game(
//!         vec!["Ann".into(), "Bo".into(), "Cy".into()],
//!         Settings::default(),
//!     )
//!     .await?;
//!
//! let view = handle.view().await?;
//! for player in &view.players {
//!     // show player.name their card, then:
//!     handle.mark_player_viewed(player.id).await?;
//! }
//! // ...discussion happens around the table...
//! let stats = handle.reveal().await?;
//! println!("talked for {}s", stats.discussion_duration_seconds);
//! # Ok(())
//! # }
//! ```

pub use imposter_content::{
    ContentError, DEDUP_WINDOW, GeminiRoundSource, GeneratedRound, RoundClient, RoundHistory,
    RoundRequest, RoundSource, SourceError,
};
pub use imposter_roles::assign;
pub use imposter_session::{
    GameSession, MIN_PLAYERS, SessionError, SessionHandle, SessionView, spawn_session,
    spawn_session_with_rng,
};
pub use imposter_types::{
    Category, DifficultyBand, GamePhase, Player, PlayerId, RoundContent, SessionStats, Settings,
};

/// The handful of types most hosts need, in one import.
pub mod prelude {
    pub use crate::{
        Category, GamePhase, GeminiRoundSource, Player, PlayerId, RoundContent, RoundSource,
        SessionHandle, SessionStats, SessionView, Settings, spawn_session,
    };
}
