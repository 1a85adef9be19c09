//! Character classification and pattern detection.

use crate::config::AnalyzerConfig;
use crate::sections::{
    Section, date_section, keyboard_section, length_section, missing_charset_recommendations,
    repetition_section, sequence_section,
};
use crate::types::{Charset, Charsets};

/// Kind of structural weakness found in a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FindingKind {
    Repetition,
    Sequence,
    KeyboardPattern,
    DateLike,
    TooShort,
}

/// A detected weakness with the advice that goes with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub kind: FindingKind,
    pub message: String,
    pub recommendation: String,
}

impl Finding {
    pub fn new(
        kind: FindingKind,
        message: impl Into<String>,
        recommendation: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            recommendation: recommendation.into(),
        }
    }
}

/// Output of [`classify`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Classification {
    pub length: usize,
    pub charsets: Charsets,
    pub findings: Vec<Finding>,
    /// Pattern advice in detector order, then missing-category advice.
    pub recommendations: Vec<String>,
}

/// Detectors in reporting order.
const SECTIONS: [(&str, Section); 5] = [
    ("repetition", repetition_section),
    ("sequence", sequence_section),
    ("keyboard", keyboard_section),
    ("date", date_section),
    ("length", length_section),
];

/// Classifies a password with the default configuration.
pub fn classify(password: &str) -> Classification {
    classify_with(password, &AnalyzerConfig::default())
}

/// Classifies characters and runs every pattern detector.
///
/// Total over all inputs; an empty password yields an empty classification.
pub fn classify_with(password: &str, config: &AnalyzerConfig) -> Classification {
    let chars: Vec<char> = password.chars().collect();
    if chars.is_empty() {
        return Classification::default();
    }

    let charsets: Charsets = chars.iter().copied().map(Charset::of).collect();

    let mut findings = Vec::new();
    for (_section_name, section_fn) in SECTIONS {
        if let Some(finding) = section_fn(&chars, config) {
            #[cfg(feature = "tracing")]
            tracing::trace!("Section {} flagged {:?}", _section_name, finding.kind);
            findings.push(finding);
        }
    }

    let mut recommendations: Vec<String> =
        findings.iter().map(|f| f.recommendation.clone()).collect();
    recommendations.extend(missing_charset_recommendations(&charsets));

    Classification {
        length: chars.len(),
        charsets,
        findings,
        recommendations,
    }
}
