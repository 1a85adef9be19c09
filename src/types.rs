//! Value types shared by the analysis, generation and breach modules.

use std::collections::BTreeSet;
use std::fmt;

/// Character class a single password character falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Charset {
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
    /// Anything outside printable ASCII.
    Unicode,
}

/// Set of character classes observed in a password.
pub type Charsets = BTreeSet<Charset>;

impl Charset {
    /// Built-in categories a password is expected to mix.
    pub const BUILT_IN: [Charset; 4] = [
        Charset::Lowercase,
        Charset::Uppercase,
        Charset::Digit,
        Charset::Symbol,
    ];

    /// Classifies a single character.
    pub fn of(c: char) -> Charset {
        match c {
            'a'..='z' => Charset::Lowercase,
            'A'..='Z' => Charset::Uppercase,
            '0'..='9' => Charset::Digit,
            ' ' => Charset::Symbol,
            c if c.is_ascii_punctuation() => Charset::Symbol,
            _ => Charset::Unicode,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Charset::Lowercase => "lowercase",
            Charset::Uppercase => "uppercase",
            Charset::Digit => "digits",
            Charset::Symbol => "symbols",
            Charset::Unicode => "unicode",
        }
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of analyzing a single password.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    /// Length in characters, not bytes.
    pub length: usize,
    pub charsets: Charsets,
    pub entropy_bits: f64,
    pub findings: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Qualitative strength derived from entropy.
///
/// Variants are ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthBucket {
    VeryWeak,
    Weak,
    Fair,
    Good,
    Strong,
    VeryStrong,
}

impl StrengthBucket {
    /// Human readable label.
    pub fn label(self) -> &'static str {
        match self {
            StrengthBucket::VeryWeak => "Very Weak",
            StrengthBucket::Weak => "Weak",
            StrengthBucket::Fair => "Fair",
            StrengthBucket::Good => "Good",
            StrengthBucket::Strong => "Strong",
            StrengthBucket::VeryStrong => "Very Strong",
        }
    }

    /// Style tag for the embedding UI.
    pub fn class_name(self) -> &'static str {
        match self {
            StrengthBucket::VeryWeak => "very-weak",
            StrengthBucket::Weak => "weak",
            StrengthBucket::Fair => "fair",
            StrengthBucket::Good => "good",
            StrengthBucket::Strong => "strong",
            StrengthBucket::VeryStrong => "very-strong",
        }
    }
}

impl fmt::Display for StrengthBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of a common-password lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CommonMatch {
    pub is_common: bool,
    /// 1-based position in the frequency-ordered corpus.
    pub rank: Option<usize>,
}

impl CommonMatch {
    pub fn not_common() -> Self {
        Self::default()
    }

    pub fn ranked(rank: usize) -> Self {
        Self {
            is_common: true,
            rank: Some(rank),
        }
    }
}

/// Policy for random password generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    pub length: usize,
    pub lowercase: bool,
    pub uppercase: bool,
    pub numbers: bool,
    pub symbols: bool,
    pub exclude_ambiguous: bool,
    pub exclude_similar: bool,
    pub custom_chars: String,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            length: 16,
            lowercase: true,
            uppercase: true,
            numbers: true,
            symbols: true,
            exclude_ambiguous: true,
            exclude_similar: false,
            custom_chars: String::new(),
        }
    }
}

/// Policy for passphrase generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassphraseOptions {
    pub count: usize,
    pub words: usize,
    pub separator: String,
}

impl Default for PassphraseOptions {
    fn default() -> Self {
        Self {
            count: 5,
            words: 4,
            separator: "-".to_string(),
        }
    }
}

/// Number of times a password was seen in the breach corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BreachQueryResult {
    /// `0` means the password was not found.
    pub count: u64,
}

impl BreachQueryResult {
    pub fn is_breached(&self) -> bool {
        self.count > 0
    }
}

/// Combined analysis surfaced to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct PasswordReport {
    pub analysis: AnalysisResult,
    pub strength: StrengthBucket,
    pub crack_time: String,
    pub common: CommonMatch,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charset_of() {
        assert_eq!(Charset::of('q'), Charset::Lowercase);
        assert_eq!(Charset::of('Q'), Charset::Uppercase);
        assert_eq!(Charset::of('7'), Charset::Digit);
        assert_eq!(Charset::of('#'), Charset::Symbol);
        assert_eq!(Charset::of(' '), Charset::Symbol);
        assert_eq!(Charset::of('é'), Charset::Unicode);
        assert_eq!(Charset::of('密'), Charset::Unicode);
    }

    #[test]
    fn test_strength_bucket_ordering() {
        assert!(StrengthBucket::VeryWeak < StrengthBucket::Weak);
        assert!(StrengthBucket::Strong < StrengthBucket::VeryStrong);
        assert_eq!(StrengthBucket::VeryStrong.class_name(), "very-strong");
        assert_eq!(StrengthBucket::Fair.to_string(), "Fair");
    }

    #[test]
    fn test_breach_result() {
        assert!(!BreachQueryResult { count: 0 }.is_breached());
        assert!(BreachQueryResult { count: 3 }.is_breached());
    }
}
