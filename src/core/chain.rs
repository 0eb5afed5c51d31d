/// Bidirectional Markov chain model — leaders, line/word filters, ingestion.
///
/// The chain maps a leader (a fixed-length tuple of consecutive words, keyed
/// by joining with single spaces) to the words observed immediately after it
/// (forward table) and immediately before it (backward table), and tracks
/// per-word occurrence counts for topic ranking.
///
/// The line-boundary placeholder is the empty string. With a leader length
/// of 2, the first word of a line is recorded under the key `" "` (two empty
/// tokens joined) and the second under `" the"`-style keys with one leading
/// space. An empty-string predecessor in the backward table marks the
/// recorded start of a line.
use rustc_hash::FxHashMap;
use std::io::BufRead;

/// A Markov chain prefix of a fixed number of consecutive words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leader(Vec<String>);

impl Leader {
    /// An all-placeholder leader of `len` empty tokens (the line boundary).
    pub fn placeholder(len: usize) -> Self {
        Self(vec![String::new(); len])
    }

    /// Parse a canonical leader key. Splits on single spaces rather than
    /// whitespace runs so placeholder tokens survive the round-trip.
    pub fn parse(key: &str) -> Self {
        Self(key.split(' ').map(str::to_string).collect())
    }

    /// Canonical string key: tokens joined with single spaces.
    pub fn key(&self) -> String {
        self.0.join(" ")
    }

    pub fn words(&self) -> &[String] {
        &self.0
    }

    /// Drop the first word and append `word` at the tail.
    pub fn shift(&mut self, word: &str) {
        self.0.remove(0);
        self.0.push(word.to_string());
    }

    /// Drop the last word and insert `word` at the head.
    pub fn unshift(&mut self, word: &str) {
        self.0.pop();
        self.0.insert(0, word.to_string());
    }
}

/// Lines skipped entirely: comments and lines too short to matter.
fn bad_line(line: &str) -> bool {
    line.starts_with('#') || line.len() < 5
}

/// Words dropped from ingestion: unbalanced quoting and partial
/// parentheticals. Dropping a word does not reset the sliding window.
fn bad_word(word: &str) -> bool {
    if word.matches('"').count() % 2 == 1 {
        return true;
    }
    if (word.contains('(') || word.contains(')'))
        && !(word.starts_with('(') && word.ends_with(')'))
    {
        return true;
    }
    false
}

/// The Markov model: forward and backward transition tables plus word
/// frequencies. Tables are append-only and counts only increase; the leader
/// length is fixed at construction.
#[derive(Debug, Clone)]
pub struct Chain {
    forward: FxHashMap<String, Vec<String>>,
    backward: FxHashMap<String, Vec<String>>,
    frequency: FxHashMap<String, u64>,
    leader_len: usize,
}

impl Chain {
    pub fn new(leader_len: usize) -> Self {
        assert!(leader_len >= 1, "leader length must be at least 1");
        Self {
            forward: FxHashMap::default(),
            backward: FxHashMap::default(),
            frequency: FxHashMap::default(),
            leader_len,
        }
    }

    pub fn leader_len(&self) -> usize {
        self.leader_len
    }

    /// Number of distinct forward leaders recorded.
    pub fn leader_count(&self) -> usize {
        self.forward.len()
    }

    /// Number of distinct words recorded.
    pub fn word_count(&self) -> usize {
        self.frequency.len()
    }

    /// True if no line has been ingested yet.
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Words observed immediately after the given leader key.
    pub fn forward_candidates(&self, key: &str) -> Option<&[String]> {
        self.forward.get(key).map(Vec::as_slice)
    }

    /// Words observed immediately before the given leader key.
    pub fn backward_candidates(&self, key: &str) -> Option<&[String]> {
        self.backward.get(key).map(Vec::as_slice)
    }

    /// Occurrence count for `word`, 0 if never seen.
    pub fn word_score(&self, word: &str) -> u64 {
        self.frequency.get(word).copied().unwrap_or(0)
    }

    /// Iterate over all forward leader keys. Order is hash-map defined.
    pub fn forward_keys(&self) -> impl Iterator<Item = &str> {
        self.forward.keys().map(String::as_str)
    }

    /// Record one observed line.
    ///
    /// Comment lines and lines shorter than 5 bytes are ignored wholesale.
    /// Otherwise the line is split on whitespace and fed through a sliding
    /// window one admitted word at a time; words failing the filter are
    /// dropped without resetting the window.
    pub fn add_line(&mut self, line: &str) {
        if bad_line(line) {
            return;
        }

        // window[..leader_len] is the leader preceding the newest word,
        // window[1..] the leader ending at it.
        let mut window: Vec<String> = vec![String::new(); self.leader_len + 1];
        for word in line.split_whitespace() {
            if bad_word(word) {
                continue;
            }
            *self.frequency.entry(word.to_string()).or_insert(0) += 1;

            window.remove(0);
            window.push(word.to_string());

            let forward_key = window[..self.leader_len].join(" ");
            let backward_key = window[1..].join(" ");
            self.forward
                .entry(forward_key)
                .or_default()
                .push(word.to_string());
            self.backward
                .entry(backward_key)
                .or_default()
                .push(window[0].clone());
        }
    }

    /// Read newline-delimited text from `reader`, adding each line.
    /// Stops silently at end of input or on the first read error.
    pub fn build<R: BufRead>(&mut self, reader: R) {
        for line in reader.lines() {
            match line {
                Ok(line) => self.add_line(&line),
                Err(_) => break,
            }
        }
    }
}
