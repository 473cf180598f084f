use super::*;

#[test]
fn optional_text_maps_empty_to_none() {
    assert_eq!(optional_text(""), None);
    assert_eq!(optional_text("OE-1"), Some("OE-1".to_owned()));
}

#[test]
fn optional_text_keeps_whitespace_only_input() {
    // Only the exact empty string is treated as absent.
    assert_eq!(optional_text(" "), Some(" ".to_owned()));
}

#[test]
fn text_or_empty_round_trips_optional_text() {
    assert_eq!(text_or_empty(None), "");
    assert_eq!(text_or_empty(Some("note")), "note");
    assert_eq!(optional_text(&text_or_empty(Some("note"))), Some("note".to_owned()));
}

#[test]
fn split_list_trims_and_drops_blank_entries() {
    assert_eq!(split_list("a, b ,,c ,  "), vec!["a", "b", "c"]);
    assert!(split_list("").is_empty());
    assert!(split_list(" , ,").is_empty());
}

#[test]
fn join_list_uses_comma_space() {
    assert_eq!(join_list(&["SUS-1".to_owned(), "SUS-2".to_owned()]), "SUS-1, SUS-2");
    assert_eq!(join_list(&[]), "");
}

#[test]
fn split_after_join_is_identity() {
    let items = vec!["x".to_owned(), "y".to_owned()];
    assert_eq!(split_list(&join_list(&items)), items);
}

#[test]
fn parse_decimal_accepts_numbers_and_rejects_garbage() {
    assert_eq!(parse_decimal("12.50"), Some(12.5));
    assert_eq!(parse_decimal(" 7 "), Some(7.0));
    assert_eq!(parse_decimal(""), None);
    assert_eq!(parse_decimal("twelve"), None);
    assert_eq!(parse_decimal("NaN"), None);
    assert_eq!(parse_decimal("inf"), None);
}

#[test]
fn parse_leading_int_handles_signs_and_garbage() {
    assert_eq!(parse_leading_int::<i32>("2024"), Some(2024));
    assert_eq!(parse_leading_int::<i64>("-3"), Some(-3));
    assert_eq!(parse_leading_int::<i64>("+4"), Some(4));
    assert_eq!(parse_leading_int::<i32>(""), None);
    assert_eq!(parse_leading_int::<i32>("-"), None);
    assert_eq!(parse_leading_int::<i32>("abc"), None);
}

#[test]
fn parse_leading_int_drops_fraction_and_trailing_text() {
    assert_eq!(parse_leading_int::<i32>("20.5"), Some(20));
    assert_eq!(parse_leading_int::<i64>("-2.7"), Some(-2));
    assert_eq!(parse_leading_int::<i64>(" 12abc "), Some(12));
    assert_eq!(parse_leading_int::<i64>(".5"), None);
}

#[test]
fn number_text_renders_absent_as_empty() {
    assert_eq!(number_text::<f64>(None), "");
    assert_eq!(number_text(Some(12.5)), "12.5");
    assert_eq!(number_text(Some(2030)), "2030");
}
