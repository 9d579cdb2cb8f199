//! Password scoring: folds the individual rules into a weighted total.

use secrecy::{ExposeSecret, SecretString};

use crate::config::{Rule, ScoringConfig};
use crate::report::{RuleResults, StrengthReport};
use crate::rules;

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

/// Delay before a debounced evaluation runs.
#[cfg(feature = "async")]
const DEBOUNCE: Duration = Duration::from_millis(300);

/// Scores a password against the configured rules.
///
/// Pure and deterministic: the same input always yields the same report,
/// nothing is retained between calls, and no input is an error. Weak input
/// earns low sub-scores instead.
///
/// The total is the length ramp plus the matched class weights plus the
/// weighted continuous complexity sub-score. It stays in `[0, 100]` by
/// construction: weights sum to 100 and every term is capped at its rule's
/// weight.
pub fn score_password(password: &SecretString, config: &ScoringConfig) -> StrengthReport {
    let pwd = password.expose_secret();
    let len = pwd.chars().count();

    let complexity = rules::complexity_subscore(pwd);

    let per_rule = RuleResults {
        length: rules::meets_min_length(len),
        lowercase: rules::has_lowercase(pwd),
        uppercase: rules::has_uppercase(pwd),
        number: rules::has_number(pwd),
        special: rules::has_special(pwd),
        complexity: rules::complexity_matched(complexity),
    };

    let mut total = rules::length_fraction(len) * config.weight(Rule::Length);
    if per_rule.lowercase {
        total += config.weight(Rule::Lowercase);
    }
    if per_rule.uppercase {
        total += config.weight(Rule::Uppercase);
    }
    if per_rule.number {
        total += config.weight(Rule::Number);
    }
    if per_rule.special {
        total += config.weight(Rule::Special);
    }
    total += complexity * config.weight(Rule::Complexity);

    StrengthReport {
        total,
        per_rule,
        complexity,
    }
}

/// Debounced scoring for keystroke-driven callers.
///
/// Sleeps for a fixed debounce interval, then scores and sends the report
/// over `tx`, unless `token` was cancelled first, in which case nothing is
/// sent and dropping the sender closes the channel. Cancellation never
/// reaches the scorer itself; [`score_password`] stays pure.
#[cfg(feature = "async")]
pub async fn score_password_tx(
    password: &SecretString,
    config: &ScoringConfig,
    token: CancellationToken,
    tx: mpsc::Sender<StrengthReport>,
) {
    #[cfg(feature = "tracing")]
    tracing::debug!("debounced evaluation scheduled");

    tokio::time::sleep(DEBOUNCE).await;

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("evaluation cancelled before scoring");
        return;
    }

    let report = score_password(password, config);

    if let Err(e) = tx.send(report).await {
        #[cfg(feature = "tracing")]
        tracing::error!("failed to send strength report: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::StrengthBand;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_total_stays_in_bounds_for_all_inputs() {
        let config = ScoringConfig::default();
        let inputs = [
            String::new(),
            "a".to_string(),
            "password".to_string(),
            "Tr0ub4dour&3xyz".to_string(),
            "!@#$%^&*()".to_string(),
            "héllo wörld …".to_string(),
            "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa".to_string(),
            "A1b2C3d4!".repeat(500),
        ];

        for input in inputs {
            let report = score_password(&secret(&input), &config);
            assert!(
                (0.0..=100.0).contains(&report.total),
                "total {} out of bounds for input of length {}",
                report.total,
                input.len()
            );
            assert!((0.0..=1.0).contains(&report.complexity));
        }
    }

    #[test]
    fn test_empty_password() {
        let config = ScoringConfig::default();
        let report = score_password(&secret(""), &config);

        assert_eq!(report.per_rule, RuleResults::default());
        // Baseline complexity with no triggers, and the flag stays false
        // because the threshold is strict.
        assert_eq!(report.complexity, 0.7);
        // Nothing contributes beyond the (zero) length ramp and the
        // baseline complexity term.
        assert!(close(
            report.total,
            report.complexity * config.weight(Rule::Complexity)
        ));
        assert_eq!(report.strength(), StrengthBand::Weak);
    }

    #[test]
    fn test_twelve_repeated_lowercase_letters() {
        let config = ScoringConfig::default();
        let report = score_password(&secret("aaaaaaaaaaaa"), &config);

        assert!(report.per_rule.length);
        assert!(report.per_rule.lowercase);
        assert!(!report.per_rule.uppercase);
        assert!(!report.per_rule.number);
        assert!(!report.per_rule.special);
        // Repetition penalty and length bonus both land on the sub-score.
        assert!(report.complexity > 0.0 && report.complexity < 1.0);
        assert!(close(report.complexity, 0.8));
        assert!(report.per_rule.complexity);
    }

    #[test]
    fn test_passw0rd_is_not_a_denylist_hit() {
        let config = ScoringConfig::default();
        let report = score_password(&secret("Passw0rd!"), &config);

        assert!(report.per_rule.length, "9 characters meets the minimum");
        assert!(report.per_rule.lowercase);
        assert!(report.per_rule.uppercase);
        assert!(report.per_rule.number);
        assert!(report.per_rule.special);
        // The literal substring check must not treat `passw0rd` as
        // `password`, so no penalty fires and the bonuses clamp to 1.
        assert_eq!(report.complexity, 1.0);
        // 9/12 of the length weight plus everything else.
        assert!(close(report.total, 93.75));
    }

    #[test]
    fn test_long_mixed_password_lands_high() {
        let config = ScoringConfig::default();
        let report = score_password(&secret("Tr0ub4dour&3xyz"), &config);

        // Sequential penalty (xyz) fires, but the bonuses saturate the
        // sub-score anyway.
        assert_eq!(report.complexity, 1.0);
        assert!(report.total >= 70.0);
        assert!(matches!(
            report.strength(),
            StrengthBand::Good | StrengthBand::Excellent
        ));
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let config = ScoringConfig::default();
        let password = secret("S0me-M3nu_Pass!");

        let first = score_password(&password, &config);
        let second = score_password(&password, &config);
        assert_eq!(first, second);
    }

    #[test]
    fn test_adding_a_missing_class_never_decreases_total() {
        let config = ScoringConfig::default();

        let before = score_password(&secret("abcdefgh"), &config);
        let after = score_password(&secret("abcdefgh1"), &config);
        assert!(after.total >= before.total);
        assert!(after.per_rule.number && !before.per_rule.number);
    }

    #[test]
    fn test_class_adding_append_survives_new_penalties() {
        let config = ScoringConfig::default();

        // Appending `c` introduces lowercase, but also newly fires the
        // denylist and sequential penalties. The class weight outweighs
        // the sub-score drop.
        let before = score_password(&secret("QXZVQXZVQXAB"), &config);
        let after = score_password(&secret("QXZVQXZVQXABc"), &config);
        assert!(after.per_rule.lowercase && !before.per_rule.lowercase);
        assert!(after.complexity < before.complexity);
        assert!(after.total >= before.total);
    }

    #[test]
    fn test_custom_weights_shift_the_total() {
        let heavy_complexity = ScoringConfig::new([10.0, 5.0, 5.0, 5.0, 5.0, 70.0]).unwrap();
        let default_config = ScoringConfig::default();

        let password = secret("aaabcaaabc");
        let heavy = score_password(&password, &heavy_complexity);
        let default = score_password(&password, &default_config);
        // Sub-score is clamped to zero here, so the heavier complexity
        // weight can only lower the total.
        assert!(heavy.total < default.total);
        assert_eq!(heavy.complexity, default.complexity);
    }

    #[test]
    fn test_per_rule_flags_match_reported_classes() {
        let config = ScoringConfig::default();
        let report = score_password(&secret("onlylower"), &config);

        assert!(report.per_rule.lowercase);
        assert!(!report.per_rule.uppercase);
        assert!(!report.per_rule.number);
        assert!(!report.per_rule.special);
        assert_eq!(report.per_rule.matched_count(), 2);
    }
}
