//! Character-class rules: lowercase, uppercase, number, special.
//!
//! All checks are ASCII. The special set is fixed ASCII punctuation, so
//! whitespace and non-ASCII symbols count toward no class (they still count
//! toward length). Each rule is binary: one matching character is enough.

pub fn has_lowercase(pwd: &str) -> bool {
    pwd.chars().any(|c| c.is_ascii_lowercase())
}

pub fn has_uppercase(pwd: &str) -> bool {
    pwd.chars().any(|c| c.is_ascii_uppercase())
}

pub fn has_number(pwd: &str) -> bool {
    pwd.chars().any(|c| c.is_ascii_digit())
}

pub fn has_special(pwd: &str) -> bool {
    pwd.chars().any(|c| c.is_ascii_punctuation())
}
