//! Role assignment for Imposter rounds.
//!
//! One job: given the roster's names and the requested imposter count, deal
//! out a randomized, exclusive role assignment. Imposter positions are drawn
//! uniformly without replacement, so every seat is equally suspect and no
//! seat is picked twice.

use imposter_types::{Player, PlayerId};
use rand::Rng;

/// Deals roles for one round.
///
/// Produces one [`Player`] per input name, in input order, each with a fresh
/// id and `has_viewed = false`. Duplicate names are fine — they are distinct
/// players by position.
///
/// The effective imposter count is `imposter_count.min(names.len() - 1)`:
/// however greedy the settings, at least one player always knows the word.
/// Imposter positions are sampled uniformly without replacement
/// (`rand::seq::index::sample`), which is the whole fairness contract —
/// every set of positions of that size is equally likely.
///
/// Callers are expected to have validated the roster size already (the
/// session refuses rosters under three players); this function itself has
/// no failure mode.
pub fn assign(names: &[String], imposter_count: usize, rng: &mut impl Rng) -> Vec<Player> {
    let effective = imposter_count.min(names.len().saturating_sub(1));
    let imposters: std::collections::HashSet<usize> =
        rand::seq::index::sample(rng, names.len(), effective)
            .iter()
            .collect();

    names
        .iter()
        .enumerate()
        .map(|(position, name)| Player {
            id: PlayerId::fresh(),
            name: name.clone(),
            is_imposter: imposters.contains(&position),
            has_viewed: false,
        })
        .collect()
}
