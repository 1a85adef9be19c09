//! Password analysis and generation library
//!
//! This library estimates password strength (entropy, crack time, risky
//! patterns, common-password matches), generates random passwords and
//! passphrases, and checks passwords against a breach corpus without
//! disclosing them.
//!
//! # Features
//!
//! - `async` (default): Enables async report delivery with cancellation
//! - `breach` (default): Enables the k-anonymity breach checker
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_COMMON_PASSWORDS_PATH`: replaces the bundled common-password list
//! - `PWD_WORDLIST_PATH`: replaces the bundled passphrase wordlist
//! - `PWD_MIN_LENGTH`, `PWD_GUESSES_PER_SECOND`: see [`AnalyzerConfig`]
//! - `PWD_HIBP_BASE_URL`: breach range endpoint
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_toolkit::{
//!     AnalyzerConfig, GenerateOptions, evaluate_password, generate_password,
//!     init_common_passwords,
//! };
//! use secrecy::SecretString;
//!
//! // Load an override corpus if configured (once, before any lookup)
//! init_common_passwords().expect("Failed to load common passwords");
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let report = evaluate_password(&password, &AnalyzerConfig::from_env());
//!
//! println!("Strength: {} ({:.1} bits)", report.strength, report.analysis.entropy_bits);
//! println!("Crack time: {}", report.crack_time);
//!
//! let fresh = generate_password(&GenerateOptions::default()).expect("Invalid policy");
//! println!("Generated: {}", fresh);
//! ```

// Internal modules
mod classifier;
mod common;
mod config;
mod corpus;
mod entropy;
mod evaluator;
mod generator;
mod sections;
mod types;
mod wordlist;

#[cfg(feature = "breach")]
mod breach;

// Public API
pub use classifier::{Classification, Finding, FindingKind, classify, classify_with};
pub use common::{
    CommonCorpus, check_common_password, common_corpus, get_common_passwords_path,
    init_common_passwords, init_common_passwords_from_path,
};
pub use config::{AnalyzerConfig, DEFAULT_MIN_LENGTH};
pub use corpus::CorpusError;
pub use entropy::{
    DEFAULT_GUESSES_PER_SECOND, FAIR_BELOW, GOOD_BELOW, STRONG_BELOW, VERY_WEAK_BELOW, WEAK_BELOW,
    apply_deductions, estimate_brute_force_time, estimate_brute_force_time_at, estimate_entropy,
    penalty_bits, strength_label_from_entropy,
};
pub use evaluator::{analyze_password, analyze_password_with, evaluate_password};
pub use generator::{
    AMBIGUOUS_CHARS, GeneratorError, SIMILAR_CHARS, effective_pool, generate_passphrases,
    generate_passphrases_with_rng, generate_password, generate_password_with_rng,
    generate_passwords,
};
pub use types::{
    AnalysisResult, BreachQueryResult, Charset, Charsets, CommonMatch, GenerateOptions,
    PassphraseOptions, PasswordReport, StrengthBucket,
};
pub use wordlist::{Wordlist, get_wordlist_path, init_wordlist, init_wordlist_from_path, wordlist};

#[cfg(feature = "async")]
pub use evaluator::evaluate_password_tx;

#[cfg(feature = "breach")]
pub use breach::{
    BreachChecker, BreachError, DEFAULT_HIBP_BASE_URL, HashedPassword, HibpClient, RangeSource,
    hash_password, hibp_check_password, parse_range_response,
};

#[cfg(feature = "breach")]
pub use tokio_util::sync::CancellationToken;
