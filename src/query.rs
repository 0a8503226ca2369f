//! Query normalization
//!
//! The displayed query keeps the user's casing and whitespace; only the
//! text sent over the wire is canonicalized.

mod normalize;

pub use normalize::{normalize, normalize_submission, same_word};
