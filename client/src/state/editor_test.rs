use super::*;
use crate::state::test_fixtures::{location, vehicle};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct Text(String);

#[test]
fn default_editor_is_closed() {
    let editor: Editor<crate::net::types::Vehicle, Text> = Editor::default();
    assert!(!editor.open);
    assert!(!editor.is_editing());
    assert_eq!(editor.target(), SubmitTarget::Create);
}

#[test]
fn open_create_resets_previous_edit() {
    let mut editor = Editor::default();
    editor.open_edit(vehicle("v-1", "Tesla", "Model 3"), Text("Tesla".into()));
    editor.dismiss();
    editor.open_create(Text::default());
    assert!(editor.open);
    assert!(!editor.is_editing());
    assert_eq!(editor.draft, Text::default());
    assert_eq!(editor.target(), SubmitTarget::Create);
}

#[test]
fn open_edit_targets_entity_id() {
    let mut editor = Editor::default();
    editor.open_edit(location("l-9", "Main Warehouse"), Text("Main Warehouse".into()));
    assert!(editor.open);
    assert_eq!(editor.target(), SubmitTarget::Update("l-9".into()));
    assert!(editor.target().is_update());
}

#[test]
fn dismiss_keeps_typed_draft() {
    let mut editor: Editor<crate::net::types::Location, Text> = Editor::default();
    editor.open_create(Text::default());
    editor.draft = Text("half typed".into());
    editor.dismiss();
    assert!(!editor.open);
    assert_eq!(editor.draft, Text("half typed".into()));
}

#[test]
fn finish_closes_and_resets() {
    let mut editor = Editor::default();
    editor.open_edit(location("l-1", "Depot"), Text("Depot".into()));
    editor.finish(Text::default());
    assert!(!editor.open);
    assert!(!editor.is_editing());
    assert_eq!(editor.draft, Text::default());
}
