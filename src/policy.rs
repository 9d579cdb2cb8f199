//! Submission policy: caller-side acceptance checks on top of a report.
//!
//! The scorer never rejects anything. Length floors, score thresholds,
//! required rules, and the common-password list all live here, expressed as
//! comparisons against the scorer output. The common list belongs to the
//! policy value; nothing is global or mutable after construction.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::config::Rule;
use crate::report::StrengthReport;

/// Default total a password must reach to be accepted.
pub const DEFAULT_MIN_TOTAL: f64 = 60.0;

/// Default minimum length, matching the `length` rule.
pub const DEFAULT_MIN_LENGTH: usize = 8;

#[derive(Error, Debug)]
pub enum PolicyError {
    #[error("common password list not found: {0}")]
    FileNotFound(PathBuf),
    #[error("failed to read common password list: {0}")]
    Read(#[from] std::io::Error),
    #[error("common password list is empty")]
    EmptyList,
}

/// A reason a password was rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PolicyViolation {
    #[error("password must be at least {0} characters")]
    TooShort(usize),
    #[error("password scored {got:.0}, needs at least {min:.0}")]
    BelowThreshold { got: f64, min: f64 },
    #[error("password is missing: {0}")]
    MissingRule(Rule),
    #[error("password is too common")]
    CommonPassword,
}

/// Returns the common password list path.
///
/// Priority:
/// 1. Environment variable `PWD_METER_COMMON_PATH`
/// 2. Default path `./assets/common-passwords.txt`
pub fn common_list_path() -> PathBuf {
    std::env::var("PWD_METER_COMMON_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/common-passwords.txt"))
}

/// Acceptance policy evaluated against a scored password.
#[derive(Debug, Clone)]
pub struct SubmissionPolicy {
    min_length: usize,
    min_total: f64,
    required: Vec<Rule>,
    common: Option<HashSet<String>>,
}

impl Default for SubmissionPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionPolicy {
    /// Policy with the canonical defaults: 8-character minimum, total of at
    /// least 60, no required rules, no common-password list.
    pub fn new() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            min_total: DEFAULT_MIN_TOTAL,
            required: Vec::new(),
            common: None,
        }
    }

    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = min;
        self
    }

    pub fn min_total(mut self, min: f64) -> Self {
        self.min_total = min;
        self
    }

    /// Rules that must be matched regardless of the total.
    pub fn require(mut self, rules: &[Rule]) -> Self {
        self.required = rules.to_vec();
        self
    }

    /// Loads a newline-delimited common-password list from `path`.
    ///
    /// Entries are lowercased; matching in [`violations`](Self::violations)
    /// is exact and case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist, cannot be read, or
    /// contains no entries.
    pub fn with_common_list<P: AsRef<Path>>(mut self, path: P) -> Result<Self, PolicyError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("common password list not found: {}", path.display());
            return Err(PolicyError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        if content.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("common password list is empty: {}", path.display());
            return Err(PolicyError::EmptyList);
        }

        let set: HashSet<String> = content
            .lines()
            .map(|line| line.trim().to_lowercase())
            .filter(|line| !line.is_empty())
            .collect();

        #[cfg(feature = "tracing")]
        tracing::info!("loaded {} common passwords from {}", set.len(), path.display());

        self.common = Some(set);
        Ok(self)
    }

    /// Loads the common list from [`common_list_path`].
    pub fn with_default_common_list(self) -> Result<Self, PolicyError> {
        let path = common_list_path();
        self.with_common_list(path)
    }

    /// Number of loaded common passwords, zero when no list is loaded.
    pub fn common_list_len(&self) -> usize {
        self.common.as_ref().map_or(0, HashSet::len)
    }

    /// Whether the password appears on the loaded common list.
    ///
    /// Always false when no list is loaded.
    pub fn is_common(&self, password: &str) -> bool {
        self.common
            .as_ref()
            .is_some_and(|set| set.contains(&password.to_lowercase()))
    }

    /// Every reason the password fails this policy; empty means accepted.
    pub fn violations(
        &self,
        password: &SecretString,
        report: &StrengthReport,
    ) -> Vec<PolicyViolation> {
        let pwd = password.expose_secret();
        let mut violations = Vec::new();

        if pwd.chars().count() < self.min_length {
            violations.push(PolicyViolation::TooShort(self.min_length));
        }
        if self.is_common(pwd) {
            violations.push(PolicyViolation::CommonPassword);
        }
        for &rule in &self.required {
            if !report.per_rule.matched(rule) {
                violations.push(PolicyViolation::MissingRule(rule));
            }
        }
        if report.total < self.min_total {
            violations.push(PolicyViolation::BelowThreshold {
                got: report.total,
                min: self.min_total,
            });
        }

        violations
    }

    /// Boolean shorthand for an empty violation list.
    pub fn allows(&self, password: &SecretString, report: &StrengthReport) -> bool {
        self.violations(password, report).is_empty()
    }
}
