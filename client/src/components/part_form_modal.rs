//! Create/edit form for parts.

use leptos::prelude::*;

use super::field::{SelectField, TextField, bind_draft};
use super::modal::FormModal;
use crate::net::types::{Availability, Part, PartSystem};
use crate::state::editor::Editor;
use crate::state::part_draft::PartDraft;

pub type PartEditor = Editor<Part, PartDraft>;

#[component]
pub fn PartFormModal(editor: RwSignal<PartEditor>, on_submit: Callback<()>, on_close: Callback<()>) -> impl IntoView {
    let editing = move || editor.with(PartEditor::is_editing);
    let title = Signal::derive(move || if editing() { "Edit Part" } else { "Add New Part" }.to_owned());
    let submit_label = Signal::derive(move || if editing() { "Update Part" } else { "Create Part" }.to_owned());

    view! {
        <FormModal title=title submit_id="submit-part" submit_label=submit_label on_submit=on_submit on_close=on_close>
            <div class="dialog__grid">
                <TextField id="mpn" label="Manufacturer Part Number" binding={bind_draft!(editor, manufacturer_part_number)} required=true />
                <TextField id="type" label="Part Type" binding={bind_draft!(editor, part_type)} required=true placeholder="e.g. Bushing" />
                <SelectField id="system" label="System" binding={bind_draft!(editor, system)} options={PartSystem::labels().collect()} />
                <SelectField id="availability" label="Availability" binding={bind_draft!(editor, availability)} options={Availability::labels().collect()} />
                <TextField id="oe-number" label="OE Part Number" binding={bind_draft!(editor, oe_part_number)} />
                <TextField id="price" label="Last Known Price" binding={bind_draft!(editor, last_known_price)} input_type="number" />
                <TextField id="supplier" label="Last Known Supplier" binding={bind_draft!(editor, last_known_supplier)} />
                <TextField id="url" label="Purchase URL" binding={bind_draft!(editor, purchase_url)} input_type="url" />
                <TextField id="image" label="Image URL" binding={bind_draft!(editor, image_url)} input_type="url" />
            </div>
            <TextField id="description" label="Description" binding={bind_draft!(editor, description)} required=true />
            <TextField id="oe-description" label="OE Description" binding={bind_draft!(editor, oe_description)} />
            <TextField id="alternatives" label="Alternatives" binding={bind_draft!(editor, alternatives)} placeholder="Comma separated part numbers" />
            <TextField id="notes" label="Notes" binding={bind_draft!(editor, notes)} multiline=true />
        </FormModal>
    }
}
