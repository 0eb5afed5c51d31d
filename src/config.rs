/// Engine configuration — the named knobs that shape generation behavior.
///
/// The two historical bot variants diverged on the early-stop threshold, the
/// anchor exclusion rule, and the novelty-retry predicate; all three are
/// exposed here as configuration rather than embedded literals.
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("leader_len must be at least 1, got {0}")]
    InvalidLeaderLen(usize),
}

/// Tunable parameters for a chain and its generation passes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Words per leader. Fixed for the lifetime of a chain.
    #[serde(default = "default_leader_len")]
    pub leader_len: usize,
    /// Minimum output length before the sentence-boundary early stop applies.
    #[serde(default = "default_early_stop")]
    pub early_stop_min_words: usize,
    /// Reject anchor leaders that collapse to the topic word itself.
    #[serde(default = "default_true")]
    pub reject_bare_anchor: bool,
    /// Keep retrying ranked topic words until the output differs from the
    /// input sentence and spans more than one token.
    #[serde(default = "default_true")]
    pub require_novel_output: bool,
}

fn default_leader_len() -> usize {
    2
}

fn default_early_stop() -> usize {
    10
}

fn default_true() -> bool {
    true
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            leader_len: default_leader_len(),
            early_stop_min_words: default_early_stop(),
            reject_bare_anchor: true,
            require_novel_output: true,
        }
    }
}

impl EngineConfig {
    /// Load a config from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = ron::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants serde cannot express. A chain cannot be built
    /// from zero-length leaders.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.leader_len < 1 {
            return Err(ConfigError::InvalidLeaderLen(self.leader_len));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.leader_len, 2);
        assert_eq!(config.early_stop_min_words, 10);
        assert!(config.reject_bare_anchor);
        assert!(config.require_novel_output);
    }

    #[test]
    fn partial_ron_fills_defaults() {
        let config: EngineConfig = ron::from_str("(leader_len: 3)").unwrap();
        assert_eq!(config.leader_len, 3);
        assert_eq!(config.early_stop_min_words, 10);
        assert!(config.require_novel_output);
    }

    #[test]
    fn ron_round_trip() {
        let config = EngineConfig {
            leader_len: 3,
            early_stop_min_words: 7,
            reject_bare_anchor: false,
            require_novel_output: false,
        };
        let serialized = ron::to_string(&config).unwrap();
        let deserialized: EngineConfig = ron::from_str(&serialized).unwrap();
        assert_eq!(deserialized.leader_len, 3);
        assert_eq!(deserialized.early_stop_min_words, 7);
        assert!(!deserialized.reject_bare_anchor);
        assert!(!deserialized.require_novel_output);
    }

    #[test]
    fn save_and_load_config() {
        let config = EngineConfig {
            leader_len: 4,
            ..EngineConfig::default()
        };
        let serialized =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::default()).unwrap();
        let path = std::path::PathBuf::from("target/test_engine_config.ron");
        std::fs::write(&path, serialized).unwrap();

        let loaded = EngineConfig::load_from_ron(&path).unwrap();
        assert_eq!(loaded.leader_len, 4);
        assert_eq!(loaded.early_stop_min_words, 10);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn zero_leader_len_is_rejected() {
        let config = EngineConfig {
            leader_len: 0,
            ..EngineConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidLeaderLen(0))
        ));
    }

    #[test]
    fn load_rejects_zero_leader_len() {
        let path = std::path::PathBuf::from("target/test_zero_leader_config.ron");
        std::fs::write(&path, "(leader_len: 0)").unwrap();

        let result = EngineConfig::load_from_ron(&path);
        assert!(matches!(result, Err(ConfigError::InvalidLeaderLen(0))));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn load_missing_file_errors() {
        let result = EngineConfig::load_from_ron(Path::new("target/no_such_config.ron"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
