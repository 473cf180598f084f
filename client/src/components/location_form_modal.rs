//! Create/edit form for stock locations.

use leptos::prelude::*;

use super::field::{TextField, bind_draft};
use super::modal::FormModal;
use crate::net::types::Location;
use crate::state::editor::Editor;
use crate::state::location_draft::LocationDraft;

pub type LocationEditor = Editor<Location, LocationDraft>;

#[component]
pub fn LocationFormModal(editor: RwSignal<LocationEditor>, on_submit: Callback<()>, on_close: Callback<()>) -> impl IntoView {
    let editing = move || editor.with(LocationEditor::is_editing);
    let title = Signal::derive(move || if editing() { "Edit Location" } else { "Add New Location" }.to_owned());
    let submit_label = Signal::derive(move || if editing() { "Update Location" } else { "Create Location" }.to_owned());

    view! {
        <FormModal title=title submit_id="submit-location" submit_label=submit_label on_submit=on_submit on_close=on_close>
            <TextField id="name" label="Name" binding={bind_draft!(editor, name)} required=true />
            <TextField id="address" label="Address" binding={bind_draft!(editor, address)} required=true />
            <div class="dialog__grid">
                <TextField id="telephone" label="Telephone" binding={bind_draft!(editor, telephone)} input_type="tel" />
                <TextField id="email" label="Email" binding={bind_draft!(editor, email)} input_type="email" />
            </div>
            <TextField id="notes" label="Notes" binding={bind_draft!(editor, notes)} multiline=true />
        </FormModal>
    }
}
