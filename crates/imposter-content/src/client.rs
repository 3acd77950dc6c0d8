//! Requesting one round: selection, dedup, normalization, fallback.

use std::collections::BTreeSet;

use imposter_types::{Category, RoundContent};
use rand::Rng;
use rand::seq::IteratorRandom;

use crate::{ContentError, GeneratedRound, RoundHistory, RoundRequest, RoundSource};

/// Requests round content from a provider while enforcing the game's side
/// of the contract.
///
/// The client — not the provider — picks the category, trims the dedup
/// list, and overwrites the category on the way back in. Providers are
/// treated as useful but untrusted.
pub struct RoundClient<S: RoundSource> {
    source: S,
}

impl<S: RoundSource> RoundClient<S> {
    /// Wraps a provider.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Requests the next round's content.
    ///
    /// Picks one category uniformly from `enabled`, sends the provider that
    /// category, the recent-word dedup list, and the difficulty band, and
    /// normalizes the answer so its category is the locally selected one.
    ///
    /// Provider failures of any kind (transport, status, empty, malformed)
    /// are logged and converted to [`RoundContent::fallback`] — play never
    /// blocks on provider flakiness. That absorption is a product decision,
    /// not an oversight; do not surface those errors to callers. The only
    /// `Err` is [`ContentError::NoCategories`], raised before any provider
    /// interaction.
    pub async fn request_round(
        &self,
        enabled: &BTreeSet<Category>,
        history: &RoundHistory,
        difficulty: u8,
        rng: &mut impl Rng,
    ) -> Result<RoundContent, ContentError> {
        // Every random decision happens up front, before the provider call.
        let category = enabled
            .iter()
            .copied()
            .choose(rng)
            .ok_or(ContentError::NoCategories)?;

        let request = RoundRequest {
            category,
            recent_words: history.recent(category.label()).to_vec(),
            band: imposter_types::DifficultyBand::from_level(difficulty),
            difficulty,
        };

        match self.source.generate(&request).await {
            Ok(raw) => Ok(normalize(raw, category)),
            Err(error) => {
                tracing::warn!(%category, %error, "round generation failed, dealing the fallback round");
                Ok(RoundContent::fallback())
            }
        }
    }
}

/// Forces the locally selected category onto the provider's answer.
fn normalize(raw: GeneratedRound, category: Category) -> RoundContent {
    RoundContent {
        secret_word: raw.secret_word,
        category: category.label().to_string(),
        hint: raw.hint,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::DEDUP_WINDOW;

    /// Scripted provider: always answers with the same round, remembers
    /// every request, and counts calls.
    #[derive(Default)]
    struct ScriptedSource {
        calls: AtomicUsize,
        last_request: Mutex<Option<RoundRequest>>,
    }

    impl RoundSource for ScriptedSource {
        type Error = std::convert::Infallible;

        async fn generate(&self, request: &RoundRequest) -> Result<GeneratedRound, Self::Error> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_request.lock().unwrap() = Some(request.clone());
            Ok(GeneratedRound {
                secret_word: "Basketball".into(),
                category: "Whatever The Provider Claims".into(),
                hint: "Orange bounce".into(),
            })
        }
    }

    /// Provider that fails every request.
    struct BrokenSource;

    impl RoundSource for BrokenSource {
        type Error = std::io::Error;

        async fn generate(&self, _request: &RoundRequest) -> Result<GeneratedRound, Self::Error> {
            Err(std::io::Error::other("provider exploded"))
        }
    }

    fn only(category: Category) -> BTreeSet<Category> {
        BTreeSet::from([category])
    }

    #[tokio::test]
    async fn test_empty_category_set_fails_before_calling_the_provider() {
        let client = RoundClient::new(ScriptedSource::default());
        let mut rng = StdRng::seed_from_u64(1);

        let result = client
            .request_round(&BTreeSet::new(), &RoundHistory::new(), 1, &mut rng)
            .await;

        assert!(matches!(result, Err(ContentError::NoCategories)));
        assert_eq!(client.source.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_provider_category_is_overwritten_with_the_local_pick() {
        let client = RoundClient::new(ScriptedSource::default());
        let mut rng = StdRng::seed_from_u64(2);

        let round = client
            .request_round(&only(Category::Sports), &RoundHistory::new(), 1, &mut rng)
            .await
            .unwrap();

        assert_eq!(round.category, "Sports");
        assert_eq!(round.secret_word, "Basketball");
    }

    #[tokio::test]
    async fn test_selected_category_is_always_an_enabled_one() {
        let client = RoundClient::new(ScriptedSource::default());
        let mut rng = StdRng::seed_from_u64(3);
        let enabled = BTreeSet::from([Category::Foods, Category::Animals]);

        for _ in 0..50 {
            client
                .request_round(&enabled, &RoundHistory::new(), 1, &mut rng)
                .await
                .unwrap();
            let request = client.source.last_request.lock().unwrap().clone().unwrap();
            assert!(enabled.contains(&request.category));
        }
    }

    #[tokio::test]
    async fn test_dedup_list_holds_only_the_recent_window() {
        let client = RoundClient::new(ScriptedSource::default());
        let mut rng = StdRng::seed_from_u64(4);

        let mut history = RoundHistory::new();
        for i in 0..DEDUP_WINDOW + 25 {
            history.record("Sports", format!("word-{i}"));
        }

        client
            .request_round(&only(Category::Sports), &history, 1, &mut rng)
            .await
            .unwrap();

        let request = client.source.last_request.lock().unwrap().clone().unwrap();
        assert_eq!(request.recent_words.len(), DEDUP_WINDOW);
        assert_eq!(request.recent_words.first().unwrap(), "word-25");
        assert_eq!(request.recent_words.last().unwrap(), "word-74");
    }

    #[tokio::test]
    async fn test_difficulty_band_travels_with_the_request() {
        let client = RoundClient::new(ScriptedSource::default());
        let mut rng = StdRng::seed_from_u64(5);

        client
            .request_round(&only(Category::Cities), &RoundHistory::new(), 9, &mut rng)
            .await
            .unwrap();

        let request = client.source.last_request.lock().unwrap().clone().unwrap();
        assert_eq!(request.band, imposter_types::DifficultyBand::Hard);
        assert_eq!(request.difficulty, 9);
    }

    #[tokio::test]
    async fn test_provider_failure_becomes_the_fallback_round() {
        let client = RoundClient::new(BrokenSource);
        let mut rng = StdRng::seed_from_u64(6);

        let round = client
            .request_round(&only(Category::Sports), &RoundHistory::new(), 1, &mut rng)
            .await
            .unwrap();

        assert!(round.is_fallback());
        assert_eq!(round.category, "System");
    }
}
