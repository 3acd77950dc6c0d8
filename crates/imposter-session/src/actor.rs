//! Session actor: an isolated Tokio task that owns the game session.
//!
//! Event-driven hosts fire transitions from wherever their callbacks run.
//! Rather than hand them a shared mutable session, the actor owns the
//! [`GameSession`] outright and processes commands strictly one at a time
//! from an mpsc channel. The content-generation await happens *inside* the
//! start-game handler, so while a round is Loading no other transition can
//! interleave — triggers sent meanwhile just queue and are phase-checked
//! when their turn comes.

use rand::rngs::StdRng;
use tokio::sync::{mpsc, oneshot};

use imposter_content::RoundSource;
use imposter_types::{PlayerId, SessionStats, Settings};

use crate::{GameSession, SessionError, SessionView};

/// Command channel size. Transitions are user-paced, so a small buffer is
/// plenty; if it ever fills, senders wait.
const CHANNEL_SIZE: usize = 16;

/// Commands sent to the session actor through its channel.
///
/// Each variant carries a `oneshot` reply channel where the caller waits
/// for the transition's result.
enum SessionCommand {
    StartGame {
        names: Vec<String>,
        settings: Settings,
        reply: oneshot::Sender<Result<(), SessionError>>,
    },
    MarkViewed {
        player: PlayerId,
        reply: oneshot::Sender<Result<(), SessionError>>,
    },
    Reveal {
        reply: oneshot::Sender<Result<SessionStats, SessionError>>,
    },
    PlayAgain {
        reply: oneshot::Sender<Result<(), SessionError>>,
    },
    ChangeSettings {
        reply: oneshot::Sender<Result<(), SessionError>>,
    },
    ClearError,
    GetView {
        reply: oneshot::Sender<SessionView>,
    },
    Shutdown,
}

/// Handle to a running session actor.
///
/// Cheap to clone — it's just an `mpsc::Sender` wrapper — so every screen
/// or callback can hold its own. Dropping all handles ends the actor.
#[derive(Clone)]
pub struct SessionHandle {
    sender: mpsc::Sender<SessionCommand>,
}

impl SessionHandle {
    /// Starts a round with the given roster and settings.
    pub async fn start_game(
        &self,
        names: Vec<String>,
        settings: Settings,
    ) -> Result<(), SessionError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.sender
            .send(SessionCommand::StartGame {
                names,
                settings,
                reply: reply_tx,
            })
            .await
            .map_err(|_| SessionError::Closed)?;
        reply_rx.await.map_err(|_| SessionError::Closed)?
    }

    /// Records that a player viewed their role.
    pub async fn mark_player_viewed(&self, player: PlayerId) -> Result<(), SessionError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.sender
            .send(SessionCommand::MarkViewed {
                player,
                reply: reply_tx,
            })
            .await
            .map_err(|_| SessionError::Closed)?;
        reply_rx.await.map_err(|_| SessionError::Closed)?
    }

    /// Ends the discussion and returns the captured stats.
    pub async fn reveal(&self) -> Result<SessionStats, SessionError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.sender
            .send(SessionCommand::Reveal { reply: reply_tx })
            .await
            .map_err(|_| SessionError::Closed)?;
        reply_rx.await.map_err(|_| SessionError::Closed)?
    }

    /// Replays with the same roster and settings.
    pub async fn play_again(&self) -> Result<(), SessionError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.sender
            .send(SessionCommand::PlayAgain { reply: reply_tx })
            .await
            .map_err(|_| SessionError::Closed)?;
        reply_rx.await.map_err(|_| SessionError::Closed)?
    }

    /// Returns to Setup for new settings.
    pub async fn change_settings(&self) -> Result<(), SessionError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.sender
            .send(SessionCommand::ChangeSettings { reply: reply_tx })
            .await
            .map_err(|_| SessionError::Closed)?;
        reply_rx.await.map_err(|_| SessionError::Closed)?
    }

    /// Dismisses the current error message (fire-and-forget).
    pub async fn clear_error(&self) -> Result<(), SessionError> {
        self.sender
            .send(SessionCommand::ClearError)
            .await
            .map_err(|_| SessionError::Closed)
    }

    /// Takes a snapshot of the observable session state.
    pub async fn view(&self) -> Result<SessionView, SessionError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.sender
            .send(SessionCommand::GetView { reply: reply_tx })
            .await
            .map_err(|_| SessionError::Closed)?;
        reply_rx.await.map_err(|_| SessionError::Closed)
    }

    /// Tells the actor to stop. Pending queued commands are dropped.
    pub async fn shutdown(&self) -> Result<(), SessionError> {
        self.sender
            .send(SessionCommand::Shutdown)
            .await
            .map_err(|_| SessionError::Closed)
    }
}

/// The actor: owns the session, drains the command queue.
struct SessionActor<S: RoundSource> {
    session: GameSession<S>,
    receiver: mpsc::Receiver<SessionCommand>,
}

impl<S: RoundSource> SessionActor<S> {
    async fn run(mut self) {
        tracing::info!("session actor started");

        while let Some(cmd) = self.receiver.recv().await {
            match cmd {
                SessionCommand::StartGame {
                    names,
                    settings,
                    reply,
                } => {
                    let result = self.session.start_game(&names, settings).await;
                    let _ = reply.send(result);
                }
                SessionCommand::MarkViewed { player, reply } => {
                    let _ = reply.send(self.session.mark_player_viewed(player));
                }
                SessionCommand::Reveal { reply } => {
                    let _ = reply.send(self.session.reveal());
                }
                SessionCommand::PlayAgain { reply } => {
                    let result = self.session.play_again().await;
                    let _ = reply.send(result);
                }
                SessionCommand::ChangeSettings { reply } => {
                    let _ = reply.send(self.session.change_settings());
                }
                SessionCommand::ClearError => {
                    self.session.clear_error();
                }
                SessionCommand::GetView { reply } => {
                    let _ = reply.send(self.session.snapshot());
                }
                SessionCommand::Shutdown => {
                    tracing::info!("session shutting down");
                    break;
                }
            }
        }

        tracing::info!("session actor stopped");
    }
}

/// Spawns a session actor and returns a handle to it.
pub fn spawn_session<S: RoundSource>(source: S) -> SessionHandle {
    spawn(GameSession::new(source))
}

/// Spawns a session actor with an injected rng, for deterministic runs.
pub fn spawn_session_with_rng<S: RoundSource>(source: S, rng: StdRng) -> SessionHandle {
    spawn(GameSession::with_rng(source, rng))
}

fn spawn<S: RoundSource>(session: GameSession<S>) -> SessionHandle {
    let (tx, rx) = mpsc::channel(CHANNEL_SIZE);

    let actor = SessionActor {
        session,
        receiver: rx,
    };
    tokio::spawn(actor.run());

    SessionHandle { sender: tx }
}
