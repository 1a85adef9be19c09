//! Loading of newline-delimited word lists.
//!
//! Shared by the common-password corpus and the passphrase wordlist.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("List file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read list file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("List file is empty")]
    EmptyFile,
    #[error("List already initialized")]
    AlreadyInitialized,
}

/// Returns the override path stored in `var`, if any.
pub(crate) fn path_from_env(var: &str) -> Option<PathBuf> {
    std::env::var(var)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
}

/// Splits list content into entries, in file order.
///
/// Trailing `\r` is stripped and blank lines are skipped. Other whitespace is
/// kept since it can be part of a password.
pub(crate) fn entries(content: &str) -> impl Iterator<Item = &str> {
    content
        .lines()
        .map(|l| l.trim_end_matches('\r'))
        .filter(|l| !l.trim().is_empty())
}

/// Reads a list file, rejecting missing or blank files.
pub(crate) fn read_list_file(path: &Path) -> Result<String, CorpusError> {
    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("List load FAILED: FileNotFound {:?}", path);
        return Err(CorpusError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("List load FAILED: Empty file {:?}", path);
        return Err(CorpusError::EmptyFile);
    }

    Ok(content)
}
