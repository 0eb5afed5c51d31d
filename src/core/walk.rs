/// Bounded randomized walk over the chain in either direction.
use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::EngineConfig;
use crate::core::chain::{Chain, Leader};

/// Characters that end a sentence when walking forward.
const SENTENCE_ENDERS: &[char] = &['.', '!', '?'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Walk the chain from `start`, choosing successors (or predecessors)
/// uniformly at random, for at most `max_words` steps.
///
/// `start` is a canonical leader key; when empty, the walk begins from the
/// all-placeholder line-boundary leader. The returned words are in sentence
/// order for both directions and still include the starting leader's tokens,
/// placeholders and all — callers trim those when an unprefixed result is
/// wanted.
///
/// Stops when the current leader has no recorded candidates, when a backward
/// walk draws the line-start placeholder, or — once the output exceeds
/// `config.early_stop_min_words` — when the just-added word looks like a
/// sentence boundary. Cycles in the tables cannot extend the walk past
/// `max_words` steps.
pub fn walk<R: Rng>(
    chain: &Chain,
    direction: Direction,
    start: &str,
    max_words: usize,
    config: &EngineConfig,
    rng: &mut R,
) -> Vec<String> {
    let mut leader = if start.is_empty() {
        Leader::placeholder(chain.leader_len())
    } else {
        Leader::parse(start)
    };
    let mut words: Vec<String> = leader.words().to_vec();

    for _ in 0..max_words {
        let candidates = match direction {
            Direction::Forward => chain.forward_candidates(&leader.key()),
            Direction::Backward => chain.backward_candidates(&leader.key()),
        };
        let next = match candidates.and_then(|c| c.choose(rng)) {
            Some(word) => word.clone(),
            None => break,
        };

        match direction {
            Direction::Forward => {
                leader.shift(&next);
                words.push(next.clone());
            }
            Direction::Backward => {
                // An empty predecessor is the recorded start of a line.
                if next.is_empty() {
                    break;
                }
                leader.unshift(&next);
                words.insert(0, next.clone());
            }
        }

        if words.len() > config.early_stop_min_words && looks_terminal(direction, &next) {
            break;
        }
    }

    words
}

/// Early-stop heuristic: forward stops on sentence-final punctuation,
/// backward stops on a capitalized word (looks like a sentence start).
fn looks_terminal(direction: Direction, word: &str) -> bool {
    match direction {
        Direction::Forward => word
            .chars()
            .last()
            .map_or(false, |c| SENTENCE_ENDERS.contains(&c)),
        Direction::Backward => word.chars().next().map_or(false, char::is_uppercase),
    }
}
