/// Reply — interactive topic-anchored generation over stdin.
///
/// Usage: reply --corpus <dir> [--max-words <n>] [--seed <n>]
///
/// Every stdin line is ingested into the model and answered with a sentence
/// anchored on its rarest word, simulating the message loop of a chat bot.
/// A generated "ACTION " prefix is rendered as "* ..." the way chat clients
/// render emotes; the engine itself never inspects its output.
use std::env;
use std::io::BufRead;
use std::process;

use chatter_engine::core::engine::{Engine, SharedEngine};

const USAGE: &str = "Usage: reply --corpus <dir> [--max-words <n>] [--seed <n>]";

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
    let mut max_words = 15usize;
    let mut seed = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--corpus" => {
                i += 1;
                corpus = Some(flag_value(&args, i, "--corpus").to_string());
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

    let engine = builder.build().unwrap_or_else(|e| {
        eprintln!("Error loading corpus '{}': {}", corpus, e);
        process::exit(1);
    });
    let engine = SharedEngine::new(engine);

    eprintln!(
        "Model: {} leaders, {} distinct words. Type a line, get a reply.",
        engine.leader_count(),
        engine.word_count()
    );

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };

        engine.add_line(&line);
        let output = engine.generate_on_topic(max_words, &line);

        match output.strip_prefix("ACTION ") {
            Some(action) => println!("* {}", action),
            None => println!("{}", output),
        }
    }
}
