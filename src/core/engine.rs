/// The top-level engine: one chain, one config, one RNG, behind a builder.
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;

use crate::config::{ConfigError, EngineConfig};
use crate::core::chain::Chain;
use crate::core::compose;
use crate::core::corpus::{load_corpus_dir, CorpusError};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("corpus error: {0}")]
    Corpus(#[from] CorpusError),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// A chain plus the configuration and randomness used to generate from it.
/// Built via [`Engine::builder`].
pub struct Engine {
    chain: Chain,
    config: EngineConfig,
    rng: StdRng,
}

/// Builder for constructing an [`Engine`].
pub struct EngineBuilder {
    config: EngineConfig,
    config_path: Option<PathBuf>,
    corpus_dir: Option<PathBuf>,
    seed: Option<u64>,
}

impl Engine {
    pub fn builder() -> EngineBuilder {
        EngineBuilder {
            config: EngineConfig::default(),
            config_path: None,
            corpus_dir: None,
            seed: None,
        }
    }

    /// Record one observed line in the model.
    pub fn add_line(&mut self, line: &str) {
        self.chain.add_line(line);
    }

    /// Unconditioned generation from the line-boundary leader.
    pub fn generate(&mut self, max_words: usize) -> String {
        compose::generate(&self.chain, &self.config, &mut self.rng, max_words)
    }

    /// Generation anchored on the rarest usable word of `sentence`.
    pub fn generate_on_topic(&mut self, max_words: usize, sentence: &str) -> String {
        compose::generate_on_topic(&self.chain, &self.config, &mut self.rng, max_words, sentence)
    }

    pub fn leader_count(&self) -> usize {
        self.chain.leader_count()
    }

    pub fn word_count(&self) -> usize {
        self.chain.word_count()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl EngineBuilder {
    /// Use the given configuration directly.
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Load the configuration from a RON file at build time.
    pub fn config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Seed the model from a directory of `.txt` corpus files at build time.
    /// Read failures make `build` fail; the caller should treat that as
    /// fatal at startup.
    pub fn corpus_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.corpus_dir = Some(dir.into());
        self
    }

    /// Fix the RNG seed for reproducible generation.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn build(self) -> Result<Engine, EngineError> {
        let config = match self.config_path {
            Some(ref path) => EngineConfig::load_from_ron(path)?,
            None => self.config,
        };
        config.validate()?;

        let mut chain = Chain::new(config.leader_len);
        if let Some(ref dir) = self.corpus_dir {
            load_corpus_dir(&mut chain, dir)?;
            info!(
                "seeded model from {}: {} leaders, {} distinct words",
                dir.display(),
                chain.leader_count(),
                chain.word_count()
            );
        }

        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Engine { chain, config, rng })
    }
}

/// A cloneable handle serializing all model access behind one lock.
///
/// Ingestion and generation touch the same append-only tables, so a reader
/// must never observe a half-appended candidate list; every call here holds
/// the lock for its full duration.
#[derive(Clone)]
pub struct SharedEngine {
    inner: Arc<Mutex<Engine>>,
}

impl SharedEngine {
    pub fn new(engine: Engine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    pub fn add_line(&self, line: &str) {
        self.lock().add_line(line);
    }

    pub fn generate(&self, max_words: usize) -> String {
        self.lock().generate(max_words)
    }

    pub fn generate_on_topic(&self, max_words: usize, sentence: &str) -> String {
        self.lock().generate_on_topic(max_words, sentence)
    }

    pub fn leader_count(&self) -> usize {
        self.lock().leader_count()
    }

    pub fn word_count(&self) -> usize {
        self.lock().word_count()
    }

    fn lock(&self) -> MutexGuard<'_, Engine> {
        // A panic mid-append invalidates the model; propagate rather than
        // generate from a half-written table.
        self.inner.lock().expect("engine lock poisoned")
    }
}
