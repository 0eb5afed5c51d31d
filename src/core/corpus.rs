/// Startup corpus loading — seeds a chain from a directory of `.txt` files.
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;

use crate::core::chain::Chain;

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Feed every `.txt` file in `dir` through [`Chain::build`].
///
/// Enumeration order is filesystem-defined. Failure to read the directory or
/// to open an enumerated file is surfaced to the caller, which should treat
/// it as fatal at startup — a partial model cannot meaningfully generate.
/// Malformed lines inside a readable file are silently skipped as usual.
pub fn load_corpus_dir(chain: &mut Chain, dir: &Path) -> Result<(), CorpusError> {
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) != Some("txt") {
            continue;
        }
        let file = File::open(&path)?;
        chain.build(BufReader::new(file));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> std::path::PathBuf {
        let dir = std::path::PathBuf::from("target").join(name);
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn loads_only_txt_files() {
        let dir = scratch_dir("test_corpus_dir");
        std::fs::write(dir.join("a.txt"), "the cat sat here\n").unwrap();
        std::fs::write(dir.join("b.txt"), "the dog ran there\n").unwrap();
        std::fs::write(dir.join("notes.log"), "ignore this entirely\n").unwrap();

        let mut chain = Chain::new(2);
        load_corpus_dir(&mut chain, &dir).unwrap();

        assert_eq!(chain.word_score("the"), 2);
        assert_eq!(chain.word_score("cat"), 1);
        assert_eq!(chain.word_score("ignore"), 0);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_directory_errors() {
        let mut chain = Chain::new(2);
        let result = load_corpus_dir(&mut chain, Path::new("target/no_such_corpus_dir"));
        assert!(matches!(result, Err(CorpusError::Io(_))));
    }

    #[test]
    fn empty_directory_is_fine() {
        let dir = scratch_dir("test_corpus_empty");
        let mut chain = Chain::new(2);
        load_corpus_dir(&mut chain, &dir).unwrap();
        assert!(chain.is_empty());
        let _ = std::fs::remove_dir_all(&dir);
    }
}
