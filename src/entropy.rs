//! Entropy estimation, strength buckets and crack-time estimates.

use crate::classifier::{Finding, FindingKind};
use crate::types::{Charset, Charsets, StrengthBucket};

/// Pool sizes per observed character class.
pub const LOWERCASE_POOL_SIZE: u32 = 26;
pub const UPPERCASE_POOL_SIZE: u32 = 26;
pub const DIGIT_POOL_SIZE: u32 = 10;
pub const SYMBOL_POOL_SIZE: u32 = 32;
pub const OTHER_UNICODE_POOL_SIZE: u32 = 100;

/// Bits removed per finding kind.
pub const REPETITION_PENALTY_BITS: f64 = 8.0;
pub const SEQUENCE_PENALTY_BITS: f64 = 8.0;
pub const KEYBOARD_PENALTY_BITS: f64 = 10.0;
pub const DATE_PENALTY_BITS: f64 = 6.0;
pub const TOO_SHORT_PENALTY_BITS: f64 = 0.0;

/// Upper (exclusive) entropy bounds of each bucket.
pub const VERY_WEAK_BELOW: f64 = 28.0;
pub const WEAK_BELOW: f64 = 36.0;
pub const FAIR_BELOW: f64 = 60.0;
pub const GOOD_BELOW: f64 = 80.0;
pub const STRONG_BELOW: f64 = 100.0;

/// Offline attack against a fast unsalted hash.
pub const DEFAULT_GUESSES_PER_SECOND: f64 = 1e10;

/// Estimates past this many centuries are reported as "effectively never".
pub const NEVER_AFTER_CENTURIES: f64 = 1e6;

const SECONDS_PER_MINUTE: f64 = 60.0;
const SECONDS_PER_HOUR: f64 = 3_600.0;
const SECONDS_PER_DAY: f64 = 86_400.0;
const SECONDS_PER_YEAR: f64 = 31_557_600.0;
const SECONDS_PER_CENTURY: f64 = SECONDS_PER_YEAR * 100.0;

fn pool_size(charset: Charset) -> u32 {
    match charset {
        Charset::Lowercase => LOWERCASE_POOL_SIZE,
        Charset::Uppercase => UPPERCASE_POOL_SIZE,
        Charset::Digit => DIGIT_POOL_SIZE,
        Charset::Symbol => SYMBOL_POOL_SIZE,
        Charset::Unicode => OTHER_UNICODE_POOL_SIZE,
    }
}

/// Raw entropy: `length × log2(pool)` over the observed classes.
pub fn estimate_entropy(password: &str, charsets: &Charsets) -> f64 {
    let pool: u32 = charsets.iter().map(|&c| pool_size(c)).sum();
    if pool == 0 {
        return 0.0;
    }
    password.chars().count() as f64 * f64::from(pool).log2()
}

pub fn penalty_bits(kind: FindingKind) -> f64 {
    match kind {
        FindingKind::Repetition => REPETITION_PENALTY_BITS,
        FindingKind::Sequence => SEQUENCE_PENALTY_BITS,
        FindingKind::KeyboardPattern => KEYBOARD_PENALTY_BITS,
        FindingKind::DateLike => DATE_PENALTY_BITS,
        FindingKind::TooShort => TOO_SHORT_PENALTY_BITS,
    }
}

/// Subtracts the penalty of every finding, never going below zero.
pub fn apply_deductions(bits: f64, findings: &[Finding]) -> f64 {
    let penalty: f64 = findings.iter().map(|f| penalty_bits(f.kind)).sum();
    (bits - penalty).max(0.0)
}

/// Maps entropy to a strength bucket.
pub fn strength_label_from_entropy(bits: f64) -> StrengthBucket {
    if bits.is_nan() || bits < VERY_WEAK_BELOW {
        StrengthBucket::VeryWeak
    } else if bits < WEAK_BELOW {
        StrengthBucket::Weak
    } else if bits < FAIR_BELOW {
        StrengthBucket::Fair
    } else if bits < GOOD_BELOW {
        StrengthBucket::Good
    } else if bits < STRONG_BELOW {
        StrengthBucket::Strong
    } else {
        StrengthBucket::VeryStrong
    }
}

/// Crack time at [`DEFAULT_GUESSES_PER_SECOND`].
pub fn estimate_brute_force_time(bits: f64) -> String {
    estimate_brute_force_time_at(bits, DEFAULT_GUESSES_PER_SECOND)
}

/// Time to exhaust `2^bits` guesses at `guesses_per_second`.
///
/// Computed in `f64`, which stays finite for any realistic entropy; anything
/// past [`NEVER_AFTER_CENTURIES`] saturates to "effectively never".
pub fn estimate_brute_force_time_at(bits: f64, guesses_per_second: f64) -> String {
    let bits = if bits.is_nan() { 0.0 } else { bits.max(0.0) };
    let rate = if guesses_per_second.is_finite() && guesses_per_second > 0.0 {
        guesses_per_second
    } else {
        DEFAULT_GUESSES_PER_SECOND
    };

    let seconds = bits.exp2() / rate;
    format_duration(seconds)
}

fn plural(n: f64, one: &str, many: &str) -> String {
    let n = n.floor();
    if n == 1.0 {
        format!("1 {}", one)
    } else {
        format!("{} {}", n, many)
    }
}

fn format_duration(seconds: f64) -> String {
    if !seconds.is_finite() || seconds / SECONDS_PER_CENTURY >= NEVER_AFTER_CENTURIES {
        "effectively never".to_string()
    } else if seconds < 1.0 {
        "less than a second".to_string()
    } else if seconds < SECONDS_PER_MINUTE {
        plural(seconds, "second", "seconds")
    } else if seconds < SECONDS_PER_HOUR {
        plural(seconds / SECONDS_PER_MINUTE, "minute", "minutes")
    } else if seconds < SECONDS_PER_DAY {
        plural(seconds / SECONDS_PER_HOUR, "hour", "hours")
    } else if seconds < SECONDS_PER_YEAR {
        plural(seconds / SECONDS_PER_DAY, "day", "days")
    } else if seconds < SECONDS_PER_CENTURY {
        plural(seconds / SECONDS_PER_YEAR, "year", "years")
    } else {
        plural(seconds / SECONDS_PER_CENTURY, "century", "centuries")
    }
}
