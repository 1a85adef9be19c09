//! Pattern detectors
//!
//! Each section inspects the password for one structural weakness and
//! reports at most one finding.

mod date;
mod keyboard;
mod length;
mod repetition;
mod sequence;
mod variety;

pub use date::date_section;
pub use keyboard::keyboard_section;
pub use length::length_section;
pub use repetition::repetition_section;
pub use sequence::sequence_section;
pub use variety::missing_charset_recommendations;

use crate::classifier::Finding;
use crate::config::AnalyzerConfig;

/// Result type for section functions.
/// - `Some(finding)` - weakness detected
/// - `None` - section passed
pub type SectionResult = Option<Finding>;

/// Signature shared by all detectors.
pub type Section = fn(&[char], &AnalyzerConfig) -> SectionResult;
