//! The Imposter round/session state machine.
//!
//! One [`GameSession`] drives one table through
//! `Setup → Loading → Distribution → Discussion → Reveal`, owning the
//! roster, the round content, the per-category word history, and the
//! discussion timer. For hosts that want transitions serialized through a
//! single queue (any event-driven UI), [`spawn_session`] wraps the session
//! in a Tokio actor task behind a cheap-clone [`SessionHandle`].
//!
//! # Key types
//!
//! - [`GameSession`] — the state machine itself
//! - [`SessionView`] — serializable snapshot for presentation adapters
//! - [`SessionHandle`] / [`spawn_session`] — the actor wrapper
//! - [`SessionError`] — typed transition failures

mod actor;
mod error;
mod session;

pub use actor::{SessionHandle, spawn_session, spawn_session_with_rng};
pub use error::SessionError;
pub use session::{GameSession, MIN_PLAYERS, SessionView};
