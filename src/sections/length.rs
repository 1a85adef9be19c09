//! Length section - checks password minimum length.

use super::SectionResult;
use crate::classifier::{Finding, FindingKind};
use crate::config::AnalyzerConfig;

/// Checks if the password meets the configured minimum length.
///
/// Empty input is not flagged.
pub fn length_section(chars: &[char], config: &AnalyzerConfig) -> SectionResult {
    let len = chars.len();
    if len > 0 && len < config.min_length {
        return Some(Finding::new(
            FindingKind::TooShort,
            format!("Too short ({} characters, minimum {})", len, config.min_length),
            format!("Use at least {} characters", config.min_length),
        ));
    }
    None
}
