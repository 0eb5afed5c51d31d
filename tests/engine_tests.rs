/// Engine integration tests — corpus loading through reply generation.
use std::collections::HashSet;

use chatter_engine::config::EngineConfig;
use chatter_engine::core::chain::Chain;
use chatter_engine::core::corpus::load_corpus_dir;
use chatter_engine::core::engine::{Engine, SharedEngine};

const FIXTURES: &str = "tests/fixtures";

/// Every word an admitted fixture line could have contributed to the model.
fn fixture_vocabulary() -> HashSet<String> {
    let text = std::fs::read_to_string("tests/fixtures/chat.txt").unwrap();
    let mut words = HashSet::new();
    for line in text.lines() {
        if line.starts_with('#') || line.len() < 5 {
            continue;
        }
        for word in line.split_whitespace() {
            words.insert(word.to_string());
        }
    }
    words
}

#[test]
fn corpus_dir_seeds_the_model() {
    let mut chain = Chain::new(2);
    load_corpus_dir(&mut chain, std::path::Path::new(FIXTURES)).unwrap();

    assert!(chain.leader_count() > 0);
    // The comment line contributes nothing.
    assert_eq!(chain.word_score("archived"), 0);
    // "ok" is shorter than five bytes and is dropped wholesale.
    assert_eq!(chain.word_score("ok"), 0);
    // Recurring fixture words accumulate counts.
    assert!(chain.word_score("the") > 5);
    assert_eq!(chain.word_score("haunted"), 1);
}

#[test]
fn known_line_produces_documented_keys() {
    let mut chain = Chain::new(2);
    chain.add_line("the quick brown fox jumps");

    assert_eq!(chain.word_score("the"), 1);
    // Boundary placeholders are empty strings, so the leader preceding
    // "quick" keys as " the" (one leading space).
    assert!(chain
        .forward_candidates(" the")
        .unwrap()
        .contains(&"quick".to_string()));
    assert!(chain
        .backward_candidates("quick brown")
        .unwrap()
        .contains(&"the".to_string()));
}

#[test]
fn generated_words_come_from_the_corpus() {
    let vocabulary = fixture_vocabulary();
    let mut engine = Engine::builder()
        .seed(42)
        .corpus_dir(FIXTURES)
        .build()
        .unwrap();

    for _ in 0..20 {
        let output = engine.generate(15);
        assert!(output.split_whitespace().count() <= 15);
        for word in output.split_whitespace() {
            assert!(vocabulary.contains(word), "unknown word: {:?}", word);
        }
    }
}

#[test]
fn single_line_corpus_generates_within_bounds() {
    let mut engine = Engine::builder().seed(3).build().unwrap();
    engine.add_line("I am not a number I am a free man");

    let corpus: HashSet<&str> = "I am not a number I am a free man"
        .split_whitespace()
        .collect();
    let output = engine.generate(15);
    let words: Vec<&str> = output.split_whitespace().collect();

    assert!(!words.is_empty());
    assert!(words.len() <= 15);
    for word in words {
        assert!(corpus.contains(word), "unknown word: {:?}", word);
    }
}

#[test]
fn topic_replies_are_novel_multi_word_sentences() {
    let mut engine = Engine::builder()
        .seed(42)
        .corpus_dir(FIXTURES)
        .build()
        .unwrap();

    let prompts = [
        "what happened to the coffee machine",
        "is the staging box alive",
        "tell me about the deploy script",
    ];
    for prompt in prompts {
        let reply = engine.generate_on_topic(15, prompt);
        assert_ne!(reply, prompt);
        assert!(reply.contains(' '), "degenerate reply to {:?}: {:?}", prompt, reply);
    }
}

#[test]
fn same_seed_same_transcript() {
    let run = || {
        let mut engine = Engine::builder()
            .seed(1234)
            .corpus_dir(FIXTURES)
            .build()
            .unwrap();
        let mut transcript = Vec::new();
        transcript.push(engine.generate(15));
        transcript.push(engine.generate_on_topic(15, "coffee for the haunted box"));
        engine.add_line("the kitchen now has a kettle as well");
        transcript.push(engine.generate_on_topic(15, "what about the kettle"));
        transcript
    };
    assert_eq!(run(), run());
}

#[test]
fn live_ingestion_feeds_later_replies() {
    let engine = SharedEngine::new(Engine::builder().seed(9).build().unwrap());

    engine.add_line("the quarterly report is due on friday afternoon");
    engine.add_line("nobody has started the quarterly report yet");
    assert!(engine.leader_count() > 0);

    let reply = engine.generate_on_topic(15, "how is the quarterly report going");
    assert!(reply.contains(' '));
    assert!(reply.contains("quarterly") || reply.contains("report"));
}

#[test]
fn configured_leader_len_changes_key_shape() {
    let config = EngineConfig {
        leader_len: 3,
        ..EngineConfig::default()
    };
    let mut chain = Chain::new(config.leader_len);
    chain.add_line("one two three four five six");

    assert_eq!(chain.leader_len(), 3);
    assert!(chain
        .forward_candidates("one two three")
        .unwrap()
        .contains(&"four".to_string()));
    assert!(chain
        .backward_candidates("two three four")
        .unwrap()
        .contains(&"one".to_string()));
}
