//! Scoring configuration: rule weights and checklist descriptions.

use std::fmt;

use thiserror::Error;

/// The six rules a password is scored against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Length,
    Lowercase,
    Uppercase,
    Number,
    Special,
    Complexity,
}

impl Rule {
    /// All rules, in scoring order.
    pub const ALL: [Rule; 6] = [
        Rule::Length,
        Rule::Lowercase,
        Rule::Uppercase,
        Rule::Number,
        Rule::Special,
        Rule::Complexity,
    ];

    /// Stable lowercase name, as used in rule breakdowns.
    pub fn name(self) -> &'static str {
        match self {
            Rule::Length => "length",
            Rule::Lowercase => "lowercase",
            Rule::Uppercase => "uppercase",
            Rule::Number => "number",
            Rule::Special => "special",
            Rule::Complexity => "complexity",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Weight and user-facing description for a single rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleSpec {
    /// Points (out of 100) this rule can contribute to the total.
    pub weight: f64,
    /// Checklist text shown next to the rule.
    pub description: &'static str,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("rule weights must sum to 100, got {0}")]
    WeightSum(f64),
    #[error("rule weight for {0} must not be negative")]
    NegativeWeight(Rule),
}

/// Immutable scoring configuration.
///
/// Holds the weight and description for each rule. Weights always sum to
/// 100, which is what bounds the total score at 100 by construction. Build
/// one at startup and pass it to [`score_password`](crate::score_password);
/// nothing here is mutable after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    length: RuleSpec,
    lowercase: RuleSpec,
    uppercase: RuleSpec,
    number: RuleSpec,
    special: RuleSpec,
    complexity: RuleSpec,
}

/// Canonical weights, in [`Rule::ALL`] order.
const DEFAULT_WEIGHTS: [f64; 6] = [25.0, 10.0, 10.0, 10.0, 15.0, 30.0];

fn description_for(rule: Rule) -> &'static str {
    match rule {
        Rule::Length => "At least 8 characters",
        Rule::Lowercase => "Contains a lowercase letter",
        Rule::Uppercase => "Contains an uppercase letter",
        Rule::Number => "Contains a number",
        Rule::Special => "Contains a special character",
        Rule::Complexity => "Avoids common words and patterns",
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self::from_weights(DEFAULT_WEIGHTS)
    }
}

impl ScoringConfig {
    /// Builds a configuration from custom weights, given in [`Rule::ALL`]
    /// order. Descriptions stay canonical.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NegativeWeight`] if any weight is below zero,
    /// or [`ConfigError::WeightSum`] if the weights do not sum to 100. A NaN
    /// weight makes the sum NaN and fails the sum check.
    pub fn new(weights: [f64; 6]) -> Result<Self, ConfigError> {
        for (rule, weight) in Rule::ALL.into_iter().zip(weights) {
            if weight < 0.0 {
                return Err(ConfigError::NegativeWeight(rule));
            }
        }

        // Inverted comparison: a NaN sum fails `<=`, while it would slip
        // through a `>` check.
        let sum: f64 = weights.iter().sum();
        if !((sum - 100.0).abs() <= 1e-9) {
            return Err(ConfigError::WeightSum(sum));
        }

        Ok(Self::from_weights(weights))
    }

    fn from_weights(weights: [f64; 6]) -> Self {
        let spec = |rule: Rule, weight: f64| RuleSpec {
            weight,
            description: description_for(rule),
        };

        Self {
            length: spec(Rule::Length, weights[0]),
            lowercase: spec(Rule::Lowercase, weights[1]),
            uppercase: spec(Rule::Uppercase, weights[2]),
            number: spec(Rule::Number, weights[3]),
            special: spec(Rule::Special, weights[4]),
            complexity: spec(Rule::Complexity, weights[5]),
        }
    }

    /// Weight and description for one rule.
    pub fn spec(&self, rule: Rule) -> RuleSpec {
        match rule {
            Rule::Length => self.length,
            Rule::Lowercase => self.lowercase,
            Rule::Uppercase => self.uppercase,
            Rule::Number => self.number,
            Rule::Special => self.special,
            Rule::Complexity => self.complexity,
        }
    }

    pub fn weight(&self, rule: Rule) -> f64 {
        self.spec(rule).weight
    }

    pub fn description(&self, rule: Rule) -> &'static str {
        self.spec(rule).description
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_100() {
        let config = ScoringConfig::default();
        let sum: f64 = Rule::ALL.iter().map(|&r| config.weight(r)).sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_default_has_all_descriptions() {
        let config = ScoringConfig::default();
        for rule in Rule::ALL {
            assert!(!config.description(rule).is_empty());
        }
    }

    #[test]
    fn test_custom_weights_accepted() {
        let config = ScoringConfig::new([20.0, 10.0, 10.0, 10.0, 10.0, 40.0]);
        assert!(config.is_ok());
        assert_eq!(config.unwrap().weight(Rule::Complexity), 40.0);
    }

    #[test]
    fn test_bad_weight_sum_rejected() {
        let result = ScoringConfig::new([25.0, 10.0, 10.0, 10.0, 15.0, 40.0]);
        assert_eq!(result, Err(ConfigError::WeightSum(110.0)));
    }

    #[test]
    fn test_negative_weight_rejected() {
        let result = ScoringConfig::new([25.0, -10.0, 10.0, 10.0, 15.0, 50.0]);
        assert_eq!(result, Err(ConfigError::NegativeWeight(Rule::Lowercase)));
    }

    #[test]
    fn test_non_finite_weights_rejected() {
        // NaN compares false against everything, so it can only be caught by
        // an inverted sum check. Matched structurally: WeightSum(NaN) is not
        // equal to itself.
        let nan = ScoringConfig::new([f64::NAN, 10.0, 10.0, 10.0, 15.0, 30.0]);
        assert!(matches!(nan, Err(ConfigError::WeightSum(_))));

        let inf = ScoringConfig::new([25.0, 10.0, 10.0, 10.0, 15.0, f64::INFINITY]);
        assert!(matches!(inf, Err(ConfigError::WeightSum(_))));
    }

    #[test]
    fn test_rule_names_are_stable() {
        let names: Vec<&str> = Rule::ALL.iter().map(|r| r.name()).collect();
        assert_eq!(
            names,
            ["length", "lowercase", "uppercase", "number", "special", "complexity"]
        );
    }

    #[test]
    fn test_rule_display_matches_name() {
        assert_eq!(Rule::Complexity.to_string(), "complexity");
    }
}
