//! Sequence section - detects alphabetic and numeric runs like "abc" or "321".

use super::SectionResult;
use crate::classifier::{Finding, FindingKind};
use crate::config::AnalyzerConfig;

/// Shortest monotonic run that counts as a sequence.
pub const MIN_SEQUENCE_RUN: usize = 3;

/// Position of a character in its ordered alphabet, if it has one.
///
/// Letters compare case-insensitively; letters and digits never chain.
fn ordinal(c: char) -> Option<(bool, i32)> {
    if c.is_ascii_alphabetic() {
        Some((true, c.to_ascii_lowercase() as i32))
    } else if c.is_ascii_digit() {
        Some((false, c as i32))
    } else {
        None
    }
}

/// Step between two characters when both belong to the same alphabet.
fn step(a: char, b: char) -> Option<i32> {
    match (ordinal(a), ordinal(b)) {
        (Some((alpha_a, a)), Some((alpha_b, b))) if alpha_a == alpha_b => Some(b - a),
        _ => None,
    }
}

/// Flags ascending or descending runs of `MIN_SEQUENCE_RUN` characters.
pub fn sequence_section(chars: &[char], _config: &AnalyzerConfig) -> SectionResult {
    let mut run = 1;
    let mut direction = 0;

    for pair in chars.windows(2) {
        match step(pair[0], pair[1]) {
            Some(d @ (1 | -1)) if d == direction => run += 1,
            Some(d @ (1 | -1)) => {
                direction = d;
                run = 2;
            }
            _ => {
                direction = 0;
                run = 1;
            }
        }

        if run >= MIN_SEQUENCE_RUN {
            return Some(Finding::new(
                FindingKind::Sequence,
                "Contains sequential characters (e.g. \"abc\", \"321\")",
                "Avoid sequential characters",
            ));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(pwd: &str) -> SectionResult {
        let chars: Vec<char> = pwd.chars().collect();
        sequence_section(&chars, &AnalyzerConfig::default())
    }

    #[test]
    fn test_sequence_letters() {
        let result = check("abcdefgh");
        assert!(matches!(result, Some(ref f) if f.kind == FindingKind::Sequence));
    }

    #[test]
    fn test_sequence_descending_digits() {
        assert!(check("xx321yy").is_some());
    }

    #[test]
    fn test_sequence_mixed_case() {
        assert!(check("aBc").is_some());
        assert!(check("ZyX").is_some());
    }

    #[test]
    fn test_sequence_direction_change_is_not_a_run() {
        assert_eq!(check("aba"), None);
        assert_eq!(check("1213"), None);
    }

    #[test]
    fn test_sequence_does_not_cross_classes() {
        // '9' (57) and ':' (58) are adjacent in ASCII but ':' has no alphabet
        assert_eq!(check("89:"), None);
        assert_eq!(check("yz0"), None);
    }

    #[test]
    fn test_sequence_none() {
        assert_eq!(check("aaaa1111"), None);
        assert_eq!(check("Kq7#mZ2p"), None);
        assert_eq!(check(""), None);
    }
}
