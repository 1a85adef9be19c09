//! Analyzer configuration.
//!
//! Values come from environment variables with fallback defaults:
//!
//! - `PWD_MIN_LENGTH`: minimum acceptable length (default: 8)
//! - `PWD_GUESSES_PER_SECOND`: attacker guess rate for crack-time estimates
//!   (default: 1e10, an offline attack on a fast hash)

use std::str::FromStr;

use crate::entropy::DEFAULT_GUESSES_PER_SECOND;

pub const DEFAULT_MIN_LENGTH: usize = 8;

const MIN_LENGTH_VAR: &str = "PWD_MIN_LENGTH";
const GUESS_RATE_VAR: &str = "PWD_GUESSES_PER_SECOND";

/// Tunables for password analysis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalyzerConfig {
    /// Passwords shorter than this get a "too short" finding.
    pub min_length: usize,
    /// Guess rate used by [`crate::estimate_brute_force_time_at`].
    pub guesses_per_second: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            guesses_per_second: DEFAULT_GUESSES_PER_SECOND,
        }
    }
}

impl AnalyzerConfig {
    /// Reads the configuration from the environment.
    ///
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let min_length = parse_var(MIN_LENGTH_VAR, |n: &usize| *n > 0)
            .unwrap_or(defaults.min_length);

        let guesses_per_second = parse_var(GUESS_RATE_VAR, |r: &f64| r.is_finite() && *r > 0.0)
            .unwrap_or(defaults.guesses_per_second);

        Self {
            min_length,
            guesses_per_second,
        }
    }
}

fn parse_var<T: FromStr>(key: &str, valid: impl Fn(&T) -> bool) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    match raw.parse::<T>() {
        Ok(value) if valid(&value) => Some(value),
        _ => {
            #[cfg(feature = "tracing")]
            tracing::warn!("Ignoring invalid {} value {:?}, using default", key, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn set_env(key: &str, value: &str) {
        unsafe { std::env::set_var(key, value); }
    }

    fn remove_env(key: &str) {
        unsafe { std::env::remove_var(key); }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        remove_env(MIN_LENGTH_VAR);
        remove_env(GUESS_RATE_VAR);

        assert_eq!(AnalyzerConfig::from_env(), AnalyzerConfig::default());
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        set_env(MIN_LENGTH_VAR, "12");
        set_env(GUESS_RATE_VAR, "1e4");

        let config = AnalyzerConfig::from_env();
        assert_eq!(config.min_length, 12);
        assert_eq!(config.guesses_per_second, 1e4);

        remove_env(MIN_LENGTH_VAR);
        remove_env(GUESS_RATE_VAR);
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_falls_back() {
        set_env(MIN_LENGTH_VAR, "zero");
        set_env(GUESS_RATE_VAR, "-5");

        let config = AnalyzerConfig::from_env();
        assert_eq!(config.min_length, DEFAULT_MIN_LENGTH);
        assert_eq!(config.guesses_per_second, DEFAULT_GUESSES_PER_SECOND);

        remove_env(MIN_LENGTH_VAR);
        remove_env(GUESS_RATE_VAR);
    }
}
