//! Date section - detects years and date-like digit groups.

use super::SectionResult;
use crate::classifier::{Finding, FindingKind};
use crate::config::AnalyzerConfig;

pub const YEAR_RANGE: std::ops::RangeInclusive<u32> = 1900..=2099;

const DATE_SEPARATORS: &[char] = &['/', '-', '.'];

/// Maximal runs of ASCII digits as `(start, end)` index pairs.
fn digit_runs(chars: &[char]) -> Vec<(usize, usize)> {
    let mut runs = Vec::new();
    let mut start = None;

    for (i, c) in chars.iter().enumerate() {
        match (c.is_ascii_digit(), start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                runs.push((s, i));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        runs.push((s, chars.len()));
    }
    runs
}

fn value(digits: &[char]) -> u32 {
    digits
        .iter()
        .filter_map(|c| c.to_digit(10))
        .fold(0, |acc, d| acc * 10 + d)
}

fn is_day_month(a: u32, b: u32) -> bool {
    let day = 1..=31;
    let month = 1..=12;
    (day.contains(&a) && month.contains(&b)) || (month.contains(&a) && day.contains(&b))
}

fn contains_year(run: &[char]) -> bool {
    run.windows(4).any(|w| YEAR_RANGE.contains(&value(w)))
}

/// DDMMYY or MMDDYY written without separators.
fn is_compact_date(run: &[char]) -> bool {
    run.len() == 6 && is_day_month(value(&run[0..2]), value(&run[2..4]))
}

/// Flags years (1900-2099), "dd/mm" style groups and compact 6-digit dates.
pub fn date_section(chars: &[char], _config: &AnalyzerConfig) -> SectionResult {
    let runs = digit_runs(chars);

    let has_year = runs
        .iter()
        .any(|&(s, e)| contains_year(&chars[s..e]) || is_compact_date(&chars[s..e]));

    let has_group = runs.windows(2).any(|pair| {
        let (s1, e1) = pair[0];
        let (s2, e2) = pair[1];
        s2 == e1 + 1
            && DATE_SEPARATORS.contains(&chars[e1])
            && (1..=2).contains(&(e1 - s1))
            && (1..=2).contains(&(e2 - s2))
            && is_day_month(value(&chars[s1..e1]), value(&chars[s2..e2]))
    });

    if has_year || has_group {
        return Some(Finding::new(
            FindingKind::DateLike,
            "Contains a date or year",
            "Avoid dates and years, especially birthdays",
        ));
    }
    None
}
