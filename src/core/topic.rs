/// Topic selection — rarity ranking and anchor leader lookup.
///
/// The premise: the least familiar word of an incoming sentence is the most
/// topical one, so unseen words are tried before rare ones and rare ones
/// before common ones.
use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::EngineConfig;
use crate::core::chain::Chain;

/// Score each whitespace token of `sentence` by its corpus frequency, in
/// input order. Unseen words score 0.
pub fn score_words(chain: &Chain, sentence: &str) -> Vec<(String, u64)> {
    sentence
        .split_whitespace()
        .map(|word| (word.to_string(), chain.word_score(word)))
        .collect()
}

/// The words of `sentence` sorted ascending by frequency. The sort is
/// stable, so ties keep input order and unseen words come first.
pub fn rank_by_rarity(chain: &Chain, sentence: &str) -> Vec<String> {
    let mut scored = score_words(chain, sentence);
    scored.sort_by_key(|(_, score)| *score);
    scored.into_iter().map(|(word, _)| word).collect()
}

/// Pick a leader containing `word` to seed bidirectional generation.
///
/// Scans every forward key — linear in the number of distinct leaders, the
/// accepted scaling limit for large models. Candidates are keys holding
/// `word` as a whole token; when `config.reject_bare_anchor` is set, keys
/// that trim down to the word itself are excluded as degenerate. An empty
/// candidate set falls back to the bare word, which yields a minimal
/// continuation downstream. Candidates are sorted before the random pick so
/// seeded runs do not depend on hash-map iteration order.
pub fn find_anchor_leader<R: Rng>(
    chain: &Chain,
    word: &str,
    config: &EngineConfig,
    rng: &mut R,
) -> String {
    let mut candidates: Vec<&str> = chain
        .forward_keys()
        .filter(|key| key.split(' ').any(|tok| tok == word))
        .filter(|key| !(config.reject_bare_anchor && key.trim() == word))
        .collect();

    if candidates.is_empty() {
        return word.to_string();
    }
    if candidates.len() == 1 {
        return candidates[0].to_string();
    }

    candidates.sort_unstable();
    match candidates.choose(rng) {
        Some(key) => key.to_string(),
        None => word.to_string(),
    }
}
