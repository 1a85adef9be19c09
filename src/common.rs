//! Common password corpus
//!
//! Loads a frequency-ordered list of known-weak passwords once and answers
//! exact, case-sensitive lookups against it.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::corpus::{self, CorpusError};
use crate::types::CommonMatch;

const COMMON_PASSWORDS_VAR: &str = "PWD_COMMON_PASSWORDS_PATH";

static BUNDLED_COMMON_PASSWORDS: &str = include_str!("../assets/common-passwords.txt");

static COMMON_PASSWORDS: OnceLock<CommonCorpus> = OnceLock::new();

/// Read-only set of common passwords keyed by their frequency rank.
#[derive(Debug, Clone, Default)]
pub struct CommonCorpus {
    ranks: HashMap<String, usize>,
}

impl CommonCorpus {
    /// Builds a corpus from newline-delimited content.
    ///
    /// Rank is the 1-based position of the first occurrence; later
    /// duplicates are ignored.
    pub fn from_list(content: &str) -> Self {
        let mut ranks = HashMap::new();
        for (idx, entry) in corpus::entries(content).enumerate() {
            ranks.entry(entry.to_string()).or_insert(idx + 1);
        }
        Self { ranks }
    }

    /// The corpus shipped with the crate.
    pub fn bundled() -> Self {
        Self::from_list(BUNDLED_COMMON_PASSWORDS)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CorpusError> {
        let content = corpus::read_list_file(path.as_ref())?;
        Ok(Self::from_list(&content))
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Exact lookup; no case folding and no fuzzy matching.
    pub fn check(&self, password: &str) -> CommonMatch {
        match self.ranks.get(password) {
            Some(&rank) => CommonMatch::ranked(rank),
            None => CommonMatch::not_common(),
        }
    }
}

/// Returns the override path for the corpus.
///
/// Set `PWD_COMMON_PASSWORDS_PATH` to replace the bundled list.
pub fn get_common_passwords_path() -> Option<PathBuf> {
    corpus::path_from_env(COMMON_PASSWORDS_VAR)
}

/// Initializes the process-wide corpus.
///
/// Uses `PWD_COMMON_PASSWORDS_PATH` when set, the bundled list otherwise.
/// Returns the number of distinct entries.
pub fn init_common_passwords() -> Result<usize, CorpusError> {
    match get_common_passwords_path() {
        Some(path) => init_common_passwords_from_path(path),
        None => Ok(common_corpus().len()),
    }
}

/// Initializes the process-wide corpus from a specific file.
///
/// Must run before the first lookup: any lookup installs the bundled list,
/// after which this returns [`CorpusError::AlreadyInitialized`].
pub fn init_common_passwords_from_path<P: AsRef<Path>>(path: P) -> Result<usize, CorpusError> {
    let path = path.as_ref();
    if COMMON_PASSWORDS.get().is_some() {
        return Err(already_initialized(path));
    }

    let loaded = CommonCorpus::from_path(path)?;
    let count = loaded.len();

    if COMMON_PASSWORDS.set(loaded).is_err() {
        return Err(already_initialized(path));
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Common password corpus initialized: {} passwords from {:?}", count, path);

    Ok(count)
}

fn already_initialized(_path: &Path) -> CorpusError {
    #[cfg(feature = "tracing")]
    tracing::warn!("Common password corpus already initialized, not loading {:?}", _path);
    CorpusError::AlreadyInitialized
}

/// The process-wide corpus, falling back to the bundled list.
pub fn common_corpus() -> &'static CommonCorpus {
    COMMON_PASSWORDS.get_or_init(|| {
        let bundled = CommonCorpus::bundled();

        #[cfg(feature = "tracing")]
        tracing::info!("Common password corpus initialized: {} bundled passwords", bundled.len());

        bundled
    })
}

/// Checks a password against the process-wide corpus.
pub fn check_common_password(password: &str) -> CommonMatch {
    common_corpus().check(password)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn setup_with_tempfile(passwords: &[&str]) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        for pwd in passwords {
            writeln!(temp_file, "{}", pwd).expect("Failed to write");
        }
        temp_file
    }

    #[test]
    fn test_rank_follows_file_order() {
        let corpus = CommonCorpus::from_list("123456\npassword\nqwerty\n");
        assert_eq!(corpus.check("123456"), CommonMatch::ranked(1));
        assert_eq!(corpus.check("qwerty"), CommonMatch::ranked(3));
    }

    #[test]
    fn test_duplicates_keep_first_rank() {
        let corpus = CommonCorpus::from_list("dragon\nmonkey\ndragon\n");
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.check("dragon").rank, Some(1));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let corpus = CommonCorpus::from_list("password\n");
        assert!(corpus.check("password").is_common);
        assert_eq!(corpus.check("Password"), CommonMatch::not_common());
    }

    #[test]
    fn test_no_substring_match() {
        let corpus = CommonCorpus::from_list("password\n");
        assert!(!corpus.check("password1x").is_common);
        assert!(!corpus.check("passwor").is_common);
        assert!(!corpus.check("").is_common);
    }

    #[test]
    fn test_from_path() {
        let temp_file = setup_with_tempfile(&["letmein", "trustno1"]);
        let corpus = CommonCorpus::from_path(temp_file.path()).expect("Should load");
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.check("trustno1").rank, Some(2));
    }

    #[test]
    fn test_from_path_not_found() {
        let result = CommonCorpus::from_path("/nonexistent/path/common.txt");
        assert!(matches!(result, Err(CorpusError::FileNotFound(_))));
    }

    #[test]
    fn test_bundled_contains_password() {
        let corpus = CommonCorpus::bundled();
        assert!(!corpus.is_empty());
        let found = corpus.check("password");
        assert!(found.is_common);
        assert!(found.rank.is_some());
    }

    #[test]
    fn test_bundled_corpus_size() {
        let corpus = CommonCorpus::bundled();
        assert_eq!(corpus.len(), 10_000);
        assert_eq!(corpus.check("123456"), CommonMatch::ranked(1));
        assert_eq!(corpus.check("password"), CommonMatch::ranked(2));
        assert!(corpus.check("Password1").is_common);
        assert!(corpus.check("1990").is_common);
    }

    #[test]
    fn test_init_after_lookup_is_rejected() {
        assert!(check_common_password("password").is_common);

        let temp_file = setup_with_tempfile(&["onlyoverride"]);
        let result = init_common_passwords_from_path(temp_file.path());
        assert!(matches!(result, Err(CorpusError::AlreadyInitialized)));
        assert!(!check_common_password("onlyoverride").is_common);
    }

    #[test]
    fn test_global_lookup_is_stable() {
        let first = check_common_password("password");
        let second = check_common_password("password");
        assert!(first.is_common);
        assert_eq!(first, second);
        assert!(!check_common_password("Xk9#vT2!pQ7&").is_common);
    }
}
