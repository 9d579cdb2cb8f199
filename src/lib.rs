//! Weighted password strength scoring.
//!
//! Scores a password against six fixed rules (a continuous length ramp,
//! four character classes, and a pattern-based complexity heuristic) and
//! returns the weighted total, the per-rule breakdown, and the continuous
//! complexity sub-score. Scoring is pure and total: any string, including
//! the empty one, yields a well-formed report.
//!
//! Acceptance decisions (length floors, score thresholds, required rules,
//! common-password lists) are the caller's business and live in
//! [`SubmissionPolicy`], layered on top of the report.
//!
//! # Features
//!
//! - `async` (default): debounced evaluation with cancellation support
//! - `tracing`: enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_METER_COMMON_PATH`: custom path to the common password list
//!   (default: `./assets/common-passwords.txt`)
//!
//! # Example
//!
//! ```rust
//! use pwd_meter::{score_password, ScoringConfig, StrengthBand};
//! use secrecy::SecretString;
//!
//! let config = ScoringConfig::default();
//! let password = SecretString::new("Tr0ub4dour&3xyz".to_string().into());
//!
//! let report = score_password(&password, &config);
//!
//! assert!(report.total >= 70.0);
//! assert!(report.per_rule.special);
//! assert_eq!(report.strength(), StrengthBand::Excellent);
//! ```
//!
//! Gating a form submission:
//!
//! ```rust,no_run
//! use pwd_meter::{score_password, ScoringConfig, SubmissionPolicy};
//! use secrecy::SecretString;
//!
//! # fn main() -> Result<(), pwd_meter::PolicyError> {
//! let config = ScoringConfig::default();
//! let policy = SubmissionPolicy::new().with_default_common_list()?;
//!
//! let password = SecretString::new("dinner-at-8!".to_string().into());
//! let report = score_password(&password, &config);
//!
//! for violation in policy.violations(&password, &report) {
//!     println!("{}", violation);
//! }
//! # Ok(())
//! # }
//! ```

// Internal modules
mod config;
mod policy;
mod report;
mod rules;
mod scorer;

// Public API
pub use config::{ConfigError, Rule, RuleSpec, ScoringConfig};
pub use policy::{
    common_list_path, PolicyError, PolicyViolation, SubmissionPolicy, DEFAULT_MIN_LENGTH,
    DEFAULT_MIN_TOTAL,
};
pub use report::{RuleResults, StrengthBand, StrengthReport};
pub use scorer::score_password;

#[cfg(feature = "async")]
pub use scorer::score_password_tx;
