//! Scoring output types: per-rule breakdown, strength report, display band.

use crate::config::Rule;

/// Which rules matched for one password.
///
/// Rebuilt from scratch on every scoring call; one field per rule, so the
/// breakdown always covers all six rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuleResults {
    pub length: bool,
    pub lowercase: bool,
    pub uppercase: bool,
    pub number: bool,
    pub special: bool,
    /// Display flag derived from the continuous sub-score; true when the
    /// value strictly exceeds the 0.7 baseline.
    pub complexity: bool,
}

impl RuleResults {
    pub fn matched(&self, rule: Rule) -> bool {
        match rule {
            Rule::Length => self.length,
            Rule::Lowercase => self.lowercase,
            Rule::Uppercase => self.uppercase,
            Rule::Number => self.number,
            Rule::Special => self.special,
            Rule::Complexity => self.complexity,
        }
    }

    /// Number of matched rules, out of six.
    pub fn matched_count(&self) -> usize {
        Rule::ALL.iter().filter(|&&rule| self.matched(rule)).count()
    }
}

/// Coarse strength band derived from the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthBand {
    Weak,
    Fair,
    Good,
    Excellent,
}

impl StrengthBand {
    /// Bands the total: below 40 Weak, below 60 Fair, below 80 Good,
    /// otherwise Excellent.
    pub fn from_total(total: f64) -> Self {
        if total >= 80.0 {
            StrengthBand::Excellent
        } else if total >= 60.0 {
            StrengthBand::Good
        } else if total >= 40.0 {
            StrengthBand::Fair
        } else {
            StrengthBand::Weak
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StrengthBand::Weak => "Weak",
            StrengthBand::Fair => "Fair",
            StrengthBand::Good => "Good",
            StrengthBand::Excellent => "Excellent",
        }
    }
}

/// Full scoring result for one password.
///
/// `total` and `complexity` are the primary outputs; the boolean breakdown
/// is derived for display and never feeds back into the arithmetic.
#[derive(Debug, Clone, PartialEq)]
pub struct StrengthReport {
    /// Weighted total in `[0, 100]`.
    pub total: f64,
    /// Boolean breakdown over all six rules.
    pub per_rule: RuleResults,
    /// Continuous complexity sub-score in `[0, 1]`.
    pub complexity: f64,
}

impl StrengthReport {
    /// Display band for the total score.
    pub fn strength(&self) -> StrengthBand {
        StrengthBand::from_total(self.total)
    }
}
