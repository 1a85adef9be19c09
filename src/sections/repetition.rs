//! Repetition section - detects runs of the same character.

use super::SectionResult;
use crate::classifier::{Finding, FindingKind};
use crate::config::AnalyzerConfig;

/// Shortest run of identical characters that counts as a repetition.
pub const MIN_REPEAT_RUN: usize = 3;

/// Flags runs of `MIN_REPEAT_RUN` or more identical consecutive characters.
pub fn repetition_section(chars: &[char], _config: &AnalyzerConfig) -> SectionResult {
    let mut run = 1;
    for pair in chars.windows(2) {
        if pair[0] == pair[1] {
            run += 1;
            if run >= MIN_REPEAT_RUN {
                return Some(Finding::new(
                    FindingKind::Repetition,
                    "Contains repeated characters (e.g. \"aaa\")",
                    "Avoid repeating the same character",
                ));
            }
        } else {
            run = 1;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(pwd: &str) -> SectionResult {
        let chars: Vec<char> = pwd.chars().collect();
        repetition_section(&chars, &AnalyzerConfig::default())
    }

    #[test]
    fn test_repetition_detected() {
        let result = check("aaaa1111");
        assert!(matches!(result, Some(ref f) if f.kind == FindingKind::Repetition));
    }

    #[test]
    fn test_repetition_exactly_three() {
        assert!(check("xy###z").is_some());
    }

    #[test]
    fn test_repetition_two_is_fine() {
        assert_eq!(check("aabbccdd"), None);
    }

    #[test]
    fn test_repetition_short_and_empty() {
        assert_eq!(check(""), None);
        assert_eq!(check("zz"), None);
    }
}
