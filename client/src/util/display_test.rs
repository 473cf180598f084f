use super::*;

#[test]
fn price_label_formats_two_decimals() {
    assert_eq!(price_label(Some(19.9)), "$19.90");
    assert_eq!(price_label(Some(0.0)), "$0.00");
    assert_eq!(price_label(None), "N/A");
}

#[test]
fn or_placeholder_treats_empty_as_missing() {
    assert_eq!(or_placeholder(Some("OE-1"), "N/A"), "OE-1");
    assert_eq!(or_placeholder(Some(""), "N/A"), "N/A");
    assert_eq!(or_placeholder(None, "Unknown"), "Unknown");
}

#[test]
fn joined_skips_missing_parts() {
    assert_eq!(joined(&[Some("Long Range"), None, Some("AWD")]), "Long Range AWD");
    assert_eq!(joined(&[None, Some("")]), "");
}
