use super::*;
use crate::state::collection::{Placement, apply_saved};
use crate::state::editor::Editor;
use crate::state::test_fixtures::vehicle;

#[test]
fn new_seeds_current_year_and_defaults() {
    let draft = VehicleDraft::new(2031);
    assert_eq!(draft.from_year, "2031");
    assert_eq!(draft.to_year, "");
    assert_eq!(draft.power_type, "EV");
    assert_eq!(draft.drive_type, "RWD");
    assert_eq!(draft.body_style, "Saloon");
}

#[test]
fn to_payload_empty_to_year_is_null() {
    let draft = VehicleDraft { make: "Tesla".into(), model: "Model 3".into(), ..VehicleDraft::new(2020) };
    let payload = draft.to_payload().unwrap();
    assert_eq!(payload.from_year, 2020);
    assert_eq!(payload.to_year, None);
    assert_eq!(payload.variant, None);
    assert_eq!(payload.trim_level, None);

    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json["to_year"], serde_json::Value::Null);
}

#[test]
fn to_payload_parses_to_year() {
    let draft = VehicleDraft { to_year: "2024".into(), ..VehicleDraft::new(2020) };
    assert_eq!(draft.to_payload().unwrap().to_year, Some(2024));
}

#[test]
fn non_numeric_from_year_blocks_payload() {
    let draft = VehicleDraft { make: "Kia".into(), model: "EV6".into(), from_year: "soon".into(), ..VehicleDraft::default() };
    assert!(draft.to_payload().is_none());
    assert!(!draft.is_submittable());
}

#[test]
fn fractional_years_keep_integer_part() {
    let draft = VehicleDraft {
        make: "Kia".into(),
        model: "EV6".into(),
        from_year: "2020.5".into(),
        to_year: "2024.9".into(),
        ..VehicleDraft::default()
    };
    assert!(draft.is_submittable());
    let payload = draft.to_payload().unwrap();
    assert_eq!(payload.from_year, 2020);
    assert_eq!(payload.to_year, Some(2024));
}

#[test]
fn from_vehicle_round_trips() {
    let mut source = vehicle("v-1", "Tesla", "Model 3");
    source.to_year = Some(2023);
    source.variant = Some("Long Range".into());
    let draft = VehicleDraft::from_vehicle(&source);
    assert_eq!(draft.from_year, "2020");
    assert_eq!(draft.to_year, "2023");
    assert_eq!(draft.variant, "Long Range");
    assert_eq!(draft.trim_level, "");

    let payload = draft.to_payload().unwrap();
    assert_eq!(payload.to_year, Some(2023));
    assert_eq!(payload.variant.as_deref(), Some("Long Range"));
    assert_eq!(payload.trim_level, None);
}

#[test]
fn year_range_formats_open_and_closed() {
    let mut v = vehicle("v-1", "Tesla", "Model 3");
    assert_eq!(year_range(&v), "2020 (Ongoing)");
    v.to_year = Some(2024);
    assert_eq!(year_range(&v), "2020 - 2024");
}

#[test]
fn created_vehicle_is_appended() {
    let mut vehicles = vec![vehicle("v-1", "Tesla", "Model 3")];
    let mut editor: Editor<Vehicle, VehicleDraft> = Editor::default();
    editor.open_create(VehicleDraft::new(2022));
    editor.draft.make = "Kia".into();
    editor.draft.model = "EV6".into();
    assert!(editor.draft.is_submittable());

    apply_saved(&mut vehicles, vehicle("v-2", "Kia", "EV6"), editor.target().is_update(), Placement::Back);
    editor.finish(VehicleDraft::new(2022));
    assert_eq!(vehicles.last().map(|v| v.id.as_str()), Some("v-2"));
    assert!(!editor.open);
}
