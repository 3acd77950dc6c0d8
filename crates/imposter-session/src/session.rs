//! The game session: phase machine, roster, timing, and history.

use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use imposter_content::{RoundClient, RoundHistory, RoundSource};
use imposter_types::{GamePhase, Player, PlayerId, RoundContent, SessionStats, Settings};

use crate::SessionError;

/// The smallest roster the game can be played with.
pub const MIN_PLAYERS: usize = 3;

/// One table's session, from setup through reveal.
///
/// Owns every piece of shared state — phase, players, round content, word
/// history, timing — exclusively, and mutates it only inside the transition
/// methods. Hosts that trigger transitions from concurrent event handlers
/// should not share a `GameSession` directly; they wrap it in the actor
/// from [`spawn_session`](crate::spawn_session), which serializes all
/// commands through one queue.
///
/// ```text
///        ┌─────────────────(change settings)──────────────────┐
///        ▼                                                     │
///      Setup ──▶ Loading ──▶ Distribution ──▶ Discussion ──▶ Reveal
///        ▲          │  ▲                                       │
///        └──────────┘  └─────────────(play again)──────────────┘
/// ```
pub struct GameSession<S: RoundSource> {
    phase: GamePhase,
    settings: Settings,
    players: Vec<Player>,
    round: Option<RoundContent>,
    history: RoundHistory,
    stats: SessionStats,
    error: Option<String>,
    /// Set exactly when the phase becomes `Discussion`.
    discussion_started: Option<Instant>,
    client: RoundClient<S>,
    rng: StdRng,
}

impl<S: RoundSource> GameSession<S> {
    /// Creates a session in the Setup phase with default settings.
    pub fn new(source: S) -> Self {
        Self::with_rng(source, StdRng::from_os_rng())
    }

    /// Deterministic construction: every random decision (category pick,
    /// imposter positions) flows from `rng`. This is how tests pin
    /// outcomes; `new` seeds from the OS.
    pub fn with_rng(source: S, rng: StdRng) -> Self {
        Self {
            phase: GamePhase::Setup,
            settings: Settings::default(),
            players: Vec::new(),
            round: None,
            history: RoundHistory::new(),
            stats: SessionStats::default(),
            error: None,
            discussion_started: None,
            client: RoundClient::new(source),
            rng,
        }
    }

    // -- transitions --------------------------------------------------------

    /// Starts a round: generates content, deals roles, enters Distribution.
    ///
    /// Legal from Setup and Reveal. Names are trimmed and empties dropped;
    /// a roster under [`MIN_PLAYERS`] is refused with a recorded error.
    /// While the content request is in flight the session is in `Loading`
    /// and accepts no transition.
    ///
    /// Provider failures do not fail this call — the round proceeds with
    /// the fallback content (see [`RoundClient::request_round`]). The only
    /// post-validation failure is an empty enabled-category set, which
    /// returns the session to Setup with a user-visible message.
    pub async fn start_game(
        &mut self,
        names: &[String],
        settings: Settings,
    ) -> Result<(), SessionError> {
        if !self.phase.can_start() {
            return Err(SessionError::InvalidPhase {
                action: "start a round",
                phase: self.phase,
            });
        }

        let roster: Vec<String> = names
            .iter()
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect();

        if roster.len() < MIN_PLAYERS {
            // The setup screen owns name validation, but the session still
            // refuses to deal a round it knows cannot be played.
            let error = SessionError::TooFewPlayers(roster.len());
            self.error = Some(error.to_string());
            self.phase = GamePhase::Setup;
            return Err(error);
        }

        self.settings = settings;
        self.error = None;
        self.phase = GamePhase::Loading;
        tracing::info!(players = roster.len(), "round requested");

        let generated = self
            .client
            .request_round(
                &self.settings.enabled_categories,
                &self.history,
                self.settings.hint_difficulty,
                &mut self.rng,
            )
            .await;

        match generated {
            Ok(content) => {
                self.history
                    .record(&content.category, content.secret_word.clone());
                self.players =
                    imposter_roles::assign(&roster, self.settings.imposter_count, &mut self.rng);
                tracing::info!(
                    category = %content.category,
                    players = self.players.len(),
                    fallback = content.is_fallback(),
                    "round ready"
                );
                self.round = Some(content);
                self.discussion_started = None;
                self.phase = GamePhase::Distribution;
                Ok(())
            }
            Err(error) => {
                self.error = Some(error.to_string());
                self.phase = GamePhase::Setup;
                Err(error.into())
            }
        }
    }

    /// Records that a player has privately viewed their role card.
    ///
    /// Legal only in Distribution, and idempotent per player — a second
    /// call for the same id changes nothing. When the last unviewed player
    /// flips, the session captures the discussion start time and advances
    /// to Discussion on its own; there is no separate trigger for that
    /// edge.
    pub fn mark_player_viewed(&mut self, player: PlayerId) -> Result<(), SessionError> {
        if self.phase != GamePhase::Distribution {
            return Err(SessionError::InvalidPhase {
                action: "record a viewed role",
                phase: self.phase,
            });
        }

        let seat = self
            .players
            .iter_mut()
            .find(|p| p.id == player)
            .ok_or(SessionError::UnknownPlayer(player))?;

        if !seat.has_viewed {
            seat.has_viewed = true;
            tracing::debug!(%player, "role viewed");
        }

        if self.players.iter().all(|p| p.has_viewed) {
            self.discussion_started = Some(Instant::now());
            self.phase = GamePhase::Discussion;
            tracing::info!("all roles viewed, discussion started");
        }

        Ok(())
    }

    /// Ends the discussion: captures its duration and enters Reveal.
    pub fn reveal(&mut self) -> Result<SessionStats, SessionError> {
        if self.phase != GamePhase::Discussion {
            return Err(SessionError::InvalidPhase {
                action: "reveal the round",
                phase: self.phase,
            });
        }

        // Safe: Discussion is only ever entered together with setting the
        // start instant in `mark_player_viewed`.
        let started = self
            .discussion_started
            .expect("Discussion phase always has a start instant");

        self.stats = SessionStats {
            discussion_duration_seconds: started.elapsed().as_secs(),
        };
        self.phase = GamePhase::Reveal;
        tracing::info!(
            seconds = self.stats.discussion_duration_seconds,
            "round revealed"
        );
        Ok(self.stats)
    }

    /// Replays with the same roster and settings: fresh content, fresh
    /// roles, fresh player ids. Legal only from Reveal.
    pub async fn play_again(&mut self) -> Result<(), SessionError> {
        if self.phase != GamePhase::Reveal {
            return Err(SessionError::InvalidPhase {
                action: "replay the round",
                phase: self.phase,
            });
        }

        let names: Vec<String> = self.players.iter().map(|p| p.name.clone()).collect();
        let settings = self.settings.clone();
        self.start_game(&names, settings).await
    }

    /// Returns to Setup for new settings, discarding the finished round's
    /// players and content. The settings value itself is kept so the setup
    /// screen reopens pre-filled. Legal only from Reveal.
    pub fn change_settings(&mut self) -> Result<(), SessionError> {
        if self.phase != GamePhase::Reveal {
            return Err(SessionError::InvalidPhase {
                action: "reopen setup",
                phase: self.phase,
            });
        }

        self.players.clear();
        self.round = None;
        self.phase = GamePhase::Setup;
        Ok(())
    }

    /// Dismisses the current user-visible error message, if any.
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    // -- observable state ---------------------------------------------------

    /// The current phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// The current roster. Empty before the first round.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The current round's content, if a round has been generated.
    pub fn round(&self) -> Option<&RoundContent> {
        self.round.as_ref()
    }

    /// Timing of the most recently revealed round.
    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// The settings in effect (or being edited).
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The current user-visible error message, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The per-category word history accumulated this session.
    pub fn history(&self) -> &RoundHistory {
        &self.history
    }

    /// A serializable snapshot of everything presentation adapters observe.
    pub fn snapshot(&self) -> SessionView {
        SessionView {
            phase: self.phase,
            players: self.players.clone(),
            settings: self.settings.clone(),
            round: self.round.clone(),
            stats: self.stats,
            error: self.error.clone(),
        }
    }
}

/// A point-in-time copy of the session's observable surface.
///
/// Cheap to ship across a channel or serialize for a UI layer; holds no
/// references into the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionView {
    /// Current phase.
    pub phase: GamePhase,
    /// Roster with per-player role and viewed flags.
    pub players: Vec<Player>,
    /// Settings in effect.
    pub settings: Settings,
    /// Current round content, if generated.
    pub round: Option<RoundContent>,
    /// Timing of the last revealed round.
    pub stats: SessionStats,
    /// Dismissible user-visible error, if any.
    pub error: Option<String>,
}
