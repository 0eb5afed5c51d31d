/// Sentence assembly — stitches a backward and a forward walk around an
/// anchor leader, with a rarity-ranked retry loop across topic words.
use log::debug;
use rand::Rng;

use crate::config::EngineConfig;
use crate::core::chain::Chain;
use crate::core::topic::{find_anchor_leader, rank_by_rarity};
use crate::core::walk::{walk, Direction};

/// Join words with single spaces, dropping boundary placeholders.
fn join_words(words: &[String]) -> String {
    words
        .iter()
        .filter(|word| !word.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Unconditioned continuation from the line-boundary leader.
pub fn generate<R: Rng>(
    chain: &Chain,
    config: &EngineConfig,
    rng: &mut R,
    max_words: usize,
) -> String {
    let words = walk(chain, Direction::Forward, "", max_words, config, rng);
    join_words(&words)
}

/// Build one sentence around the anchor leader chosen for `word`.
///
/// The backward walk supplies everything up to and including the anchor; the
/// forward walk re-emits the anchor's words, so its leading `leader_len`
/// words are dropped before stitching. A forward walk that produced nothing
/// beyond the anchor contributes nothing.
pub fn generate_from_anchor<R: Rng>(
    chain: &Chain,
    config: &EngineConfig,
    rng: &mut R,
    max_words: usize,
    word: &str,
) -> String {
    let anchor = find_anchor_leader(chain, word, config, rng);
    debug!("anchor for {:?}: {:?}", word, anchor);

    let mut words = walk(chain, Direction::Backward, &anchor, max_words, config, rng);
    let forward = walk(chain, Direction::Forward, &anchor, max_words, config, rng);
    if forward.len() > chain.leader_len() {
        words.extend(forward.into_iter().skip(chain.leader_len()));
    }

    join_words(&words)
}

/// Rarity-ranked retry: try each candidate topic word of `sentence` until
/// one yields an acceptable reply.
///
/// A reply is accepted when it is not character-identical to the input and
/// contains at least one space. When every candidate is exhausted the last
/// computed result is returned verbatim — degrade gracefully, never fail.
/// With `config.require_novel_output` off, the first computed result wins
/// unconditionally.
pub fn generate_on_topic<R: Rng>(
    chain: &Chain,
    config: &EngineConfig,
    rng: &mut R,
    max_words: usize,
    sentence: &str,
) -> String {
    let mut last = String::new();
    for word in rank_by_rarity(chain, sentence) {
        debug!("topic candidate: {:?}", word);
        last = generate_from_anchor(chain, config, rng, max_words, &word);
        if !config.require_novel_output {
            return last;
        }
        if last != sentence && last.contains(' ') {
            return last;
        }
    }
    last
}
