//! Keyboard section - detects common keyboard walks.

use super::SectionResult;
use crate::classifier::{Finding, FindingKind};
use crate::config::AnalyzerConfig;

/// Keyboard walks matched as case-insensitive substrings.
pub const KEYBOARD_PATTERNS: &[&str] = &[
    "qwerty", "qwertz", "azerty", "asdf", "zxcv", "yxcv", "uiop", "hjkl", "vbnm",
    "poiu", "lkjh", "mnbv", "fdsa", "ytrewq", "1qaz", "2wsx", "3edc", "zaq1",
    "xsw2", "qazwsx", "1q2w3e", "q1w2e3",
];

/// Flags passwords containing a known keyboard walk.
pub fn keyboard_section(chars: &[char], _config: &AnalyzerConfig) -> SectionResult {
    let lowered: String = chars.iter().map(|c| c.to_ascii_lowercase()).collect();

    KEYBOARD_PATTERNS
        .iter()
        .find(|pattern| lowered.contains(*pattern))
        .map(|pattern| {
            Finding::new(
                FindingKind::KeyboardPattern,
                format!("Contains keyboard pattern \"{}\"", pattern),
                "Avoid keyboard patterns like \"qwerty\" or \"asdf\"",
            )
        })
}
