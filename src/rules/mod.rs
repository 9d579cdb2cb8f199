//! Individual scoring rules.
//!
//! Each file covers one aspect of the password; the scorer folds their
//! outputs into the weighted total. All helpers are total functions over
//! arbitrary strings.

mod classes;
mod complexity;
mod length;

pub use classes::{has_lowercase, has_number, has_special, has_uppercase};
pub use complexity::{complexity_matched, complexity_subscore};
pub use length::{length_fraction, meets_min_length};
