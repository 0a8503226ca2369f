//! Tests for query normalization

use super::*;
use proptest::prelude::*;

#[test]
fn test_normalize_lowercases() {
    assert_eq!(normalize("CaT"), "cat");
}

#[test]
fn test_normalize_keeps_whitespace() {
    assert_eq!(normalize("  Ice Cream "), "  ice cream ");
}

#[test]
fn test_normalize_empty() {
    assert_eq!(normalize(""), "");
}

#[test]
fn test_normalize_unicode() {
    assert_eq!(normalize("ÉCOLE"), "école");
}

#[test]
fn test_submission_trims_and_lowercases() {
    assert_eq!(normalize_submission("  Alpha\t"), "alpha");
}

#[test]
fn test_submission_whitespace_only_is_empty() {
    assert_eq!(normalize_submission("   "), "");
}

#[test]
fn test_same_word_ignores_case() {
    assert!(same_word("Beta", "bETA"));
    assert!(!same_word("beta", "betamax"));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_normalize_is_idempotent(input in "[a-zA-Z0-9 À-Ö]{0,20}") {
        let once = normalize(&input);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn prop_submission_has_no_outer_whitespace(input in "[ \\ta-zA-Z]{0,20}") {
        let submitted = normalize_submission(&input);
        prop_assert_eq!(submitted.trim(), submitted.as_str());
    }
}
