//! Password evaluator - combines classification, entropy and corpus lookup.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::classifier::classify_with;
use crate::common::check_common_password;
use crate::config::AnalyzerConfig;
use crate::entropy::{
    apply_deductions, estimate_brute_force_time_at, estimate_entropy, strength_label_from_entropy,
};
use crate::types::{AnalysisResult, PasswordReport};

/// Analyzes a password with the default configuration.
pub fn analyze_password(password: &str) -> AnalysisResult {
    analyze_password_with(password, &AnalyzerConfig::default())
}

/// Classifies the password and estimates its entropy after deductions.
pub fn analyze_password_with(password: &str, config: &AnalyzerConfig) -> AnalysisResult {
    let classification = classify_with(password, config);

    let raw_bits = estimate_entropy(password, &classification.charsets);
    let entropy_bits = apply_deductions(raw_bits, &classification.findings);

    AnalysisResult {
        length: classification.length,
        charsets: classification.charsets,
        entropy_bits,
        findings: classification
            .findings
            .into_iter()
            .map(|f| f.message)
            .collect(),
        recommendations: classification.recommendations,
    }
}

/// Evaluates a password and returns the combined report.
///
/// # Arguments
/// * `password` - The password to evaluate
/// * `config` - Minimum length and attacker guess rate
pub fn evaluate_password(password: &SecretString, config: &AnalyzerConfig) -> PasswordReport {
    let pwd = password.expose_secret();

    let analysis = analyze_password_with(pwd, config);
    let strength = strength_label_from_entropy(analysis.entropy_bits);
    let crack_time = estimate_brute_force_time_at(analysis.entropy_bits, config.guesses_per_second);
    let common = check_common_password(pwd);

    PasswordReport {
        analysis,
        strength,
        crack_time,
        common,
    }
}

/// Async version that sends the report via channel.
///
/// Nothing is sent if `token` is cancelled before the report is ready, so a
/// caller re-evaluating on every keystroke can drop stale results.
#[cfg(feature = "async")]
pub async fn evaluate_password_tx(
    password: &SecretString,
    config: &AnalyzerConfig,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordReport>,
) {
    #[cfg(feature = "tracing")]
    tracing::debug!("evaluation is about to start...");

    let report = evaluate_password(password, config);

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("Evaluation cancelled, dropping report");
        return;
    }

    if let Err(_e) = tx.send(report).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password report: {}", _e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Charset, StrengthBucket};

    fn secret(pwd: &str) -> SecretString {
        SecretString::new(pwd.to_string().into())
    }

    #[test]
    fn test_analyze_empty_password() {
        let analysis = analyze_password("");
        assert_eq!(analysis.length, 0);
        assert!(analysis.charsets.is_empty());
        assert_eq!(analysis.entropy_bits, 0.0);
        assert!(analysis.findings.is_empty());
        assert!(analysis.recommendations.is_empty());
    }

    #[test]
    fn test_analyze_deducts_for_findings() {
        let raw = 8.0 * 26f64.log2();
        let analysis = analyze_password("abcdefgh");
        assert!(analysis.entropy_bits < raw);
        assert!(analysis.entropy_bits >= 0.0);
        assert!(analysis.findings.iter().any(|f| f.contains("sequential")));
    }

    #[test]
    fn test_analyze_clean_password_keeps_raw_entropy() {
        let analysis = analyze_password("Kq7#mZ2p!Wx");
        let pool = 26.0 + 26.0 + 10.0 + 32.0;
        assert!((analysis.entropy_bits - 11.0 * f64::log2(pool)).abs() < 1e-9);
        assert_eq!(analysis.charsets.len(), 4);
        assert!(analysis.charsets.contains(&Charset::Symbol));
    }

    #[test]
    fn test_entropy_never_negative() {
        for pwd in ["", "a", "aaa", "abc", "qwerty", "1990", "aaaa1111", "zzz123qwerty"] {
            assert!(analyze_password(pwd).entropy_bits >= 0.0, "negative for {:?}", pwd);
        }
    }

    #[test]
    fn test_analyze_is_idempotent() {
        assert_eq!(analyze_password("Tr0ub4dor&3"), analyze_password("Tr0ub4dor&3"));
    }

    #[test]
    fn test_evaluate_common_password() {
        let report = evaluate_password(&secret("password"), &AnalyzerConfig::default());
        assert!(report.common.is_common);
        assert!(report.common.rank.is_some());
        assert_eq!(report.strength, StrengthBucket::Fair);
    }

    #[test]
    fn test_evaluate_weak_short_password() {
        let report = evaluate_password(&secret("abc"), &AnalyzerConfig::default());
        assert_eq!(report.strength, StrengthBucket::VeryWeak);
        assert_eq!(report.crack_time, "less than a second");
        assert!(!report.analysis.findings.is_empty());
    }

    #[test]
    fn test_evaluate_strong_password() {
        let report = evaluate_password(
            &secret("VeryStrongPassword!#Kz7&Lw"),
            &AnalyzerConfig::default(),
        );
        assert!(matches!(
            report.strength,
            StrengthBucket::Strong | StrengthBucket::VeryStrong
        ));
        assert!(!report.common.is_common);
    }

    #[test]
    fn test_evaluate_uses_configured_guess_rate() {
        let slow = AnalyzerConfig {
            guesses_per_second: 1.0,
            ..AnalyzerConfig::default()
        };
        let fast = evaluate_password(&secret("Kq7#"), &AnalyzerConfig::default());
        let slow = evaluate_password(&secret("Kq7#"), &slow);
        assert_eq!(fast.crack_time, "less than a second");
        assert_ne!(slow.crack_time, fast.crack_time);
    }
}
