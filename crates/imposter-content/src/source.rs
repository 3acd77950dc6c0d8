//! The content-provider seam.
//!
//! The game does not care where round content comes from — Gemini in
//! production, a canned list in a demo, a script in tests. It cares that
//! the provider is told exactly which category to use, which words are
//! burned, and how obscure the hint should be. [`RoundSource`] is that
//! contract; everything else in this crate is built against it.

use imposter_types::{Category, DifficultyBand};
use serde::{Deserialize, Serialize};

/// Everything a provider needs to produce one round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRequest {
    /// The category the provider must use. Selected locally and uniformly,
    /// so fairness across categories never depends on provider behavior.
    pub category: Category,

    /// The most recently issued words for that category, oldest first, at
    /// most [`DEDUP_WINDOW`](crate::DEDUP_WINDOW) of them. The provider
    /// must not pick any of these.
    pub recent_words: Vec<String>,

    /// Which of the three hint-style bands to apply.
    pub band: DifficultyBand,

    /// The raw 1–10 difficulty level. The medium band's wording
    /// interpolates the exact number.
    pub difficulty: u8,
}

/// A provider's raw answer, before normalization.
///
/// Field names follow the provider-side JSON contract (`secretWord`), so a
/// conforming payload deserializes directly into this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedRound {
    /// The secret word or concept.
    pub secret_word: String,

    /// The category the provider claims it used. Ignored downstream — the
    /// locally selected category always wins.
    pub category: String,

    /// A subtle hint, contractually 1–2 words. Not re-validated here; a
    /// chattier hint is a quality issue, not a failure.
    pub hint: String,
}

/// An external collaborator that can produce round content.
///
/// Implementations are free to fail however they like — the associated
/// `Error` only ever reaches logs, because [`RoundClient`](crate::RoundClient)
/// replaces any failure with the fallback round. `Send + Sync + 'static`
/// because the source lives inside the long-running session task.
pub trait RoundSource: Send + Sync + 'static {
    /// The error type this provider reports.
    type Error: std::error::Error + Send + Sync;

    /// Produces one round for the given request.
    fn generate(
        &self,
        request: &RoundRequest,
    ) -> impl std::future::Future<Output = Result<GeneratedRound, Self::Error>> + Send;
}
