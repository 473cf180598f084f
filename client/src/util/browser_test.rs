#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn confirm_declines_without_a_browser() {
    assert!(!confirm(&delete_prompt("part")));
}

#[test]
fn current_year_falls_back_without_a_browser() {
    assert_eq!(current_year(), FALLBACK_YEAR);
}

#[test]
fn delete_prompt_names_the_entity() {
    assert_eq!(delete_prompt("vehicle"), "Are you sure you want to delete this vehicle?");
    assert_eq!(delete_prompt("location"), "Are you sure you want to delete this location?");
}
