/// Babble — emits unconditioned sentences from a corpus directory.
///
/// Usage: babble --corpus <dir> [--count <n>] [--max-words <n>] [--seed <n>]
use std::env;
use std::process;

use chatter_engine::core::engine::Engine;

const USAGE: &str = "Usage: babble --corpus <dir> [--count <n>] [--max-words <n>] [--seed <n>]";

/// The value following a flag, or a usage error if the flag was last.
fn flag_value<'a>(args: &'a [String], i: usize, flag: &str) -> &'a str {
    match args.get(i) {
        Some(value) => value,
        None => {
            eprintln!("Error: {} requires a value", flag);
            eprintln!("{}", USAGE);
            process::exit(1);
        }
    }
}

fn main() {
    env_logger::init();
    let args: Vec<String> = env::args().collect();

    let mut corpus = None;
    let mut count = 10usize;
    let mut max_words = 15usize;
    let mut seed = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--corpus" => {
                i += 1;
                corpus = Some(flag_value(&args, i, "--corpus").to_string());
            }
            "--count" => {
                i += 1;
                count = flag_value(&args, i, "--count").parse().unwrap_or_else(|_| {
                    eprintln!("Error: --count must be a number");
                    process::exit(1);
                });
            }
            "--max-words" => {
                i += 1;
                max_words = flag_value(&args, i, "--max-words").parse().unwrap_or_else(|_| {
                    eprintln!("Error: --max-words must be a number");
                    process::exit(1);
                });
            }
            "--seed" => {
                i += 1;
                seed = Some(flag_value(&args, i, "--seed").parse().unwrap_or_else(|_| {
                    eprintln!("Error: --seed must be a number");
                    process::exit(1);
                }));
            }
            "--help" | "-h" => {
                println!("{}", USAGE);
                process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                process::exit(1);
            }
        }
        i += 1;
    }

    let corpus = corpus.unwrap_or_else(|| {
        eprintln!("Error: --corpus is required");
        eprintln!("{}", USAGE);
        process::exit(1);
    });

    let mut builder = Engine::builder().corpus_dir(&corpus);
    if let Some(seed) = seed {
        builder = builder.seed(seed);
    }

    let mut engine = builder.build().unwrap_or_else(|e| {
        eprintln!("Error loading corpus '{}': {}", corpus, e);
        process::exit(1);
    });

    eprintln!(
        "Model: {} leaders, {} distinct words",
        engine.leader_count(),
        engine.word_count()
    );

    for _ in 0..count {
        println!("{}", engine.generate(max_words));
    }
}
