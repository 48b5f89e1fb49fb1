//! Tests for review score parsing.

use journal_workflow_api::models::parse_score;

#[test]
fn test_in_range_scores_pass_through() {
    for raw in ["1", "2", "3", "4", "5"] {
        assert_eq!(parse_score(raw), Some(raw.parse().unwrap()));
    }
}

#[test]
fn test_out_of_range_scores_are_clamped() {
    assert_eq!(parse_score("0"), Some(1));
    assert_eq!(parse_score("-3"), Some(1));
    assert_eq!(parse_score("7"), Some(5));
    assert_eq!(parse_score("100"), Some(5));
}

#[test]
fn test_unparsable_scores_store_nothing() {
    assert_eq!(parse_score("abc"), None);
    assert_eq!(parse_score(""), None);
    assert_eq!(parse_score("3.5"), None);
    assert_eq!(parse_score("four"), None);
}

#[test]
fn test_whitespace_is_trimmed() {
    assert_eq!(parse_score(" 4 "), Some(4));
    assert_eq!(parse_score("\t2\n"), Some(2));
}
