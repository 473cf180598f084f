use super::*;
use crate::state::test_fixtures::location;

#[test]
fn default_draft_is_not_submittable() {
    assert!(!LocationDraft::default().is_submittable());
}

#[test]
fn to_payload_nulls_empty_contact_fields() {
    let draft = LocationDraft { name: "Depot".into(), address: "1 Dock Road".into(), ..LocationDraft::default() };
    assert!(draft.is_submittable());
    let payload = draft.to_payload();
    assert_eq!(payload.telephone, None);
    assert_eq!(payload.email, None);
    assert_eq!(payload.notes, None);
}

#[test]
fn from_location_round_trips() {
    let mut source = location("l-1", "Main Warehouse");
    source.email = Some("stores@example.com".into());
    let draft = LocationDraft::from_location(&source);
    assert_eq!(draft.email, "stores@example.com");
    assert_eq!(draft.telephone, "");

    let payload = draft.to_payload();
    assert_eq!(payload.name, "Main Warehouse");
    assert_eq!(payload.address, source.address);
    assert_eq!(payload.email, source.email);
    assert_eq!(payload.telephone, None);
}
