//! Random password and passphrase generation.
//!
//! All draws go through `rand::distr::Uniform`, which rejects the biased
//! tail of each sample, so every pool character (or word) has exactly the
//! same probability. The default source is `rand::rng()`, a thread-local
//! ChaCha CSPRNG seeded from the operating system.

use rand::distr::Uniform;
use rand::{CryptoRng, Rng};
use thiserror::Error;

use crate::types::{GenerateOptions, PassphraseOptions};
use crate::wordlist::{Wordlist, wordlist};

pub const LOWERCASE_CHARS: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const NUMBER_CHARS: &str = "0123456789";
pub const SYMBOL_CHARS: &str = "!@#$%^&*()-_=+[]{}|;:,.<>?/~";

/// Removed when `exclude_ambiguous` is set.
pub const AMBIGUOUS_CHARS: &str = "0O1lI";

/// Removed when `exclude_similar` is set. Overlaps nothing in
/// `AMBIGUOUS_CHARS`, so the two flags compose.
pub const SIMILAR_CHARS: &str = "|!`'\";:,.iLoS5Z2B8";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Invalid generation policy: {0}")]
    InvalidPolicy(String),
}

/// Builds the deduplicated set of characters eligible for selection.
///
/// Order is stable: built-in sets first, then custom characters in the
/// order they were given.
pub fn effective_pool(options: &GenerateOptions) -> Result<Vec<char>, GeneratorError> {
    let enabled = [
        (options.lowercase, LOWERCASE_CHARS),
        (options.uppercase, UPPERCASE_CHARS),
        (options.numbers, NUMBER_CHARS),
        (options.symbols, SYMBOL_CHARS),
    ];

    let mut pool: Vec<char> = Vec::new();
    let candidates = enabled
        .iter()
        .filter(|(on, _)| *on)
        .flat_map(|(_, set)| set.chars())
        .chain(options.custom_chars.chars());

    for c in candidates {
        if options.exclude_ambiguous && AMBIGUOUS_CHARS.contains(c) {
            continue;
        }
        if options.exclude_similar && SIMILAR_CHARS.contains(c) {
            continue;
        }
        if !pool.contains(&c) {
            pool.push(c);
        }
    }

    if pool.is_empty() {
        return Err(GeneratorError::InvalidPolicy(
            "no characters left to choose from".to_string(),
        ));
    }
    Ok(pool)
}

fn uniform_index(len: usize) -> Result<Uniform<usize>, GeneratorError> {
    Uniform::new(0, len).map_err(|e| GeneratorError::InvalidPolicy(e.to_string()))
}

/// Generates one password from the thread-local CSPRNG.
pub fn generate_password(options: &GenerateOptions) -> Result<String, GeneratorError> {
    generate_password_with_rng(options, &mut rand::rng())
}

/// Generates one password using the supplied cryptographic RNG.
pub fn generate_password_with_rng<R>(
    options: &GenerateOptions,
    rng: &mut R,
) -> Result<String, GeneratorError>
where
    R: Rng + CryptoRng + ?Sized,
{
    if options.length == 0 {
        return Err(GeneratorError::InvalidPolicy(
            "length must be at least 1".to_string(),
        ));
    }

    let pool = effective_pool(options)?;
    let index = uniform_index(pool.len())?;

    Ok((0..options.length)
        .map(|_| pool[rng.sample(&index)])
        .collect())
}

/// Generates `count` independent passwords.
pub fn generate_passwords(
    options: &GenerateOptions,
    count: usize,
) -> Result<Vec<String>, GeneratorError> {
    if count == 0 {
        return Err(GeneratorError::InvalidPolicy(
            "count must be at least 1".to_string(),
        ));
    }

    let mut rng = rand::rng();
    (0..count)
        .map(|_| generate_password_with_rng(options, &mut rng))
        .collect()
}

/// Generates passphrases from the process-wide wordlist.
pub fn generate_passphrases(options: &PassphraseOptions) -> Result<Vec<String>, GeneratorError> {
    generate_passphrases_with_rng(options, wordlist(), &mut rand::rng())
}

/// Generates passphrases from `words` using the supplied cryptographic RNG.
///
/// Words are drawn with replacement, so a word may repeat within one
/// passphrase.
pub fn generate_passphrases_with_rng<R>(
    options: &PassphraseOptions,
    words: &Wordlist,
    rng: &mut R,
) -> Result<Vec<String>, GeneratorError>
where
    R: Rng + CryptoRng + ?Sized,
{
    if options.count == 0 {
        return Err(GeneratorError::InvalidPolicy(
            "count must be at least 1".to_string(),
        ));
    }
    if options.words == 0 {
        return Err(GeneratorError::InvalidPolicy(
            "words must be at least 1".to_string(),
        ));
    }

    let list = words.words();
    let index = uniform_index(list.len())?;

    let passphrases = (0..options.count)
        .map(|_| {
            (0..options.words)
                .map(|_| list[rng.sample(&index)].as_str())
                .collect::<Vec<_>>()
                .join(&options.separator)
        })
        .collect();

    Ok(passphrases)
}
