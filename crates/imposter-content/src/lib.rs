//! Round-content generation for Imposter.
//!
//! The session never talks to a content provider directly. It goes through
//! [`RoundClient`], which owns everything the game actually guarantees:
//! uniform local category selection, the 50-entry deduplication window,
//! normalization of the provider's answer, and the fallback round that keeps
//! play moving when the provider fails.
//!
//! # Key types
//!
//! - [`RoundSource`] — the trait a content provider implements
//! - [`RoundClient`] — requests one round, enforcing the game's contract
//! - [`RoundHistory`] — per-category log of previously issued words
//! - [`GeminiRoundSource`] — the production provider (Gemini over HTTP)

mod client;
mod error;
mod gemini;
mod history;
mod source;

pub use client::RoundClient;
pub use error::{ContentError, SourceError};
pub use gemini::GeminiRoundSource;
pub use history::{DEDUP_WINDOW, RoundHistory};
pub use source::{GeneratedRound, RoundRequest, RoundSource};
