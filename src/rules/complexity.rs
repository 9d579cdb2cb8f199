//! Complexity heuristic: a `[0, 1]` sub-score built from common-pattern
//! penalties and diversity/length bonuses.
//!
//! Every adjustment applies independently; overlaps are allowed and the
//! running value is clamped once at the end, so stacked adjustments saturate
//! at the boundaries rather than excluding one another.

use super::classes::{has_lowercase, has_number, has_uppercase};

/// Substrings that mark a password as following a common pattern. Checked
/// against the lowercase form with a literal substring search.
const DENYLIST: [&str; 6] = ["123", "abc", "qwerty", "password", "admin", "user"];

/// Ascending three-character runs, alphabetic and numeric, as char triples
/// for direct window comparison. Checked over the lowercase form; descending
/// runs are deliberately absent.
const SEQUENTIAL_RUNS: [[char; 3]; 32] = [
    ['a', 'b', 'c'], ['b', 'c', 'd'], ['c', 'd', 'e'], ['d', 'e', 'f'], ['e', 'f', 'g'],
    ['f', 'g', 'h'], ['g', 'h', 'i'], ['h', 'i', 'j'], ['i', 'j', 'k'], ['j', 'k', 'l'],
    ['k', 'l', 'm'], ['l', 'm', 'n'], ['m', 'n', 'o'], ['n', 'o', 'p'], ['o', 'p', 'q'],
    ['p', 'q', 'r'], ['q', 'r', 's'], ['r', 's', 't'], ['s', 't', 'u'], ['t', 'u', 'v'],
    ['u', 'v', 'w'], ['v', 'w', 'x'], ['w', 'x', 'y'], ['x', 'y', 'z'], ['0', '1', '2'],
    ['1', '2', '3'], ['2', '3', '4'], ['3', '4', '5'], ['4', '5', '6'], ['5', '6', '7'],
    ['6', '7', '8'], ['7', '8', '9'],
];

const BASELINE: f64 = 0.7;
const DENYLIST_PENALTY: f64 = 0.3;
const REPEAT_PENALTY: f64 = 0.2;
const SEQUENCE_PENALTY: f64 = 0.2;
const CASE_MIX_BONUS: f64 = 0.2;
const DIGIT_LETTER_BONUS: f64 = 0.2;
const LONG_BONUS: f64 = 0.3;
const VERY_LONG_BONUS: f64 = 0.2;
const LONG_LEN: usize = 12;
const VERY_LONG_LEN: usize = 16;

/// Sub-scores above this mark the `complexity` rule as matched in the
/// per-rule breakdown. Display threshold only; the continuous value is the
/// primary output.
pub const COMPLEXITY_MATCH_THRESHOLD: f64 = 0.7;

/// Computes the complexity sub-score for a password.
///
/// Starts from the neutral baseline, applies each penalty and bonus that
/// triggers, and clamps the result to `[0, 1]`.
pub fn complexity_subscore(pwd: &str) -> f64 {
    let lower = pwd.to_lowercase();
    let len = pwd.chars().count();

    let mut value = BASELINE;

    if hits_denylist(&lower) {
        value -= DENYLIST_PENALTY;
    }
    if has_repeated_char(pwd) {
        value -= REPEAT_PENALTY;
    }
    if has_sequential_run(&lower) {
        value -= SEQUENCE_PENALTY;
    }

    if has_lowercase(pwd) && has_uppercase(pwd) {
        value += CASE_MIX_BONUS;
    }
    if has_number(pwd) && pwd.chars().any(|c| c.is_ascii_alphabetic()) {
        value += DIGIT_LETTER_BONUS;
    }
    if len >= LONG_LEN {
        value += LONG_BONUS;
    }
    if len >= VERY_LONG_LEN {
        value += VERY_LONG_BONUS;
    }

    value.clamp(0.0, 1.0)
}

/// Display flag for a computed sub-score: strictly above the threshold.
pub fn complexity_matched(value: f64) -> bool {
    value > COMPLEXITY_MATCH_THRESHOLD
}

fn hits_denylist(lower: &str) -> bool {
    DENYLIST.iter().any(|word| lower.contains(word))
}

/// True when any character appears three or more times in a row.
/// Case-sensitive: `aaA` is not a repeat.
fn has_repeated_char(pwd: &str) -> bool {
    let chars: Vec<char> = pwd.chars().collect();
    chars.windows(3).any(|w| w[0] == w[1] && w[1] == w[2])
}

fn has_sequential_run(lower: &str) -> bool {
    let chars: Vec<char> = lower.chars().collect();
    chars.windows(3).any(|w| SEQUENTIAL_RUNS.iter().any(|run| w == run))
}
