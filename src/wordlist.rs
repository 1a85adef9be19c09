//! Passphrase wordlist.
//!
//! The bundled list is the EFF large diceware wordlist, about 12.9 bits per
//! word. `PWD_WORDLIST_PATH` points to a replacement.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::corpus::{self, CorpusError};

const WORDLIST_VAR: &str = "PWD_WORDLIST_PATH";

static BUNDLED_WORDLIST: &str = include_str!("../assets/eff-large-wordlist.txt");

static WORDLIST: OnceLock<Wordlist> = OnceLock::new();

/// Deduplicated list of words in file order.
#[derive(Debug, Clone)]
pub struct Wordlist {
    words: Vec<String>,
}

impl Wordlist {
    pub fn from_list(content: &str) -> Result<Self, CorpusError> {
        let mut seen = HashSet::new();
        let words: Vec<String> = corpus::entries(content)
            .map(str::trim)
            .filter(|w| seen.insert(*w))
            .map(str::to_string)
            .collect();

        if words.is_empty() {
            return Err(CorpusError::EmptyFile);
        }
        Ok(Self { words })
    }

    pub fn bundled() -> Self {
        Self {
            words: corpus::entries(BUNDLED_WORDLIST)
                .map(|w| w.trim().to_string())
                .collect(),
        }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CorpusError> {
        let content = corpus::read_list_file(path.as_ref())?;
        Self::from_list(&content)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

pub fn get_wordlist_path() -> Option<PathBuf> {
    corpus::path_from_env(WORDLIST_VAR)
}

/// Initializes the process-wide wordlist.
///
/// Uses `PWD_WORDLIST_PATH` when set, the bundled list otherwise.
pub fn init_wordlist() -> Result<usize, CorpusError> {
    match get_wordlist_path() {
        Some(path) => init_wordlist_from_path(path),
        None => Ok(wordlist().len()),
    }
}

/// Initializes the process-wide wordlist from a file.
///
/// Fails with [`CorpusError::AlreadyInitialized`] once a wordlist is in
/// place, including the bundled one installed by passphrase generation.
pub fn init_wordlist_from_path<P: AsRef<Path>>(path: P) -> Result<usize, CorpusError> {
    let path = path.as_ref();
    if WORDLIST.get().is_some() {
        return Err(already_initialized(path));
    }

    let loaded = Wordlist::from_path(path)?;
    let count = loaded.len();

    if WORDLIST.set(loaded).is_err() {
        return Err(already_initialized(path));
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Wordlist initialized: {} words from {:?}", count, path);

    Ok(count)
}

fn already_initialized(_path: &Path) -> CorpusError {
    #[cfg(feature = "tracing")]
    tracing::warn!("Wordlist already initialized, not loading {:?}", _path);
    CorpusError::AlreadyInitialized
}

/// The process-wide wordlist, falling back to the bundled one.
pub fn wordlist() -> &'static Wordlist {
    WORDLIST.get_or_init(Wordlist::bundled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_bundled_wordlist() {
        let list = Wordlist::bundled();
        assert_eq!(list.len(), BUNDLED_WORDLIST.lines().count());
        assert!(list.len() > 7_700);
        assert_eq!(list.words().first().map(String::as_str), Some("abacus"));
        assert_eq!(list.words().last().map(String::as_str), Some("zoom"));
        assert!(list.contains("drop-down"));
        assert!(list.words().iter().all(|w| (3..=9).contains(&w.len())));
        assert!(list.words().windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_from_list_dedups() {
        let list = Wordlist::from_list("apple\nbanana\napple\n\ncherry\n").expect("Should parse");
        assert_eq!(list.words(), &["apple", "banana", "cherry"]);
    }

    #[test]
    fn test_from_list_empty() {
        assert!(matches!(Wordlist::from_list("\n \n"), Err(CorpusError::EmptyFile)));
    }

    #[test]
    fn test_from_path() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "correct\nhorse\nbattery\nstaple").expect("Failed to write");

        let list = Wordlist::from_path(temp_file.path()).expect("Should load");
        assert_eq!(list.len(), 4);
        assert!(list.contains("staple"));
    }

    #[test]
    fn test_init_after_use_is_rejected() {
        assert!(wordlist().contains("abacus"));

        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "onlyoverride").expect("Failed to write");

        let result = init_wordlist_from_path(temp_file.path());
        assert!(matches!(result, Err(CorpusError::AlreadyInitialized)));
        assert!(!wordlist().contains("onlyoverride"));
        assert_eq!(wordlist().len(), Wordlist::bundled().len());
    }
}
