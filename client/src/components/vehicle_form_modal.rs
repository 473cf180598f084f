//! Create/edit form for vehicles.

use leptos::prelude::*;

use super::field::{SelectField, TextField, bind_draft};
use super::modal::FormModal;
use crate::net::types::{BodyStyle, DriveType, PowerType, Vehicle};
use crate::state::editor::Editor;
use crate::state::vehicle_draft::VehicleDraft;

pub type VehicleEditor = Editor<Vehicle, VehicleDraft>;

#[component]
pub fn VehicleFormModal(editor: RwSignal<VehicleEditor>, on_submit: Callback<()>, on_close: Callback<()>) -> impl IntoView {
    let editing = move || editor.with(VehicleEditor::is_editing);
    let title = Signal::derive(move || if editing() { "Edit Vehicle" } else { "Add New Vehicle" }.to_owned());
    let submit_label = Signal::derive(move || if editing() { "Update Vehicle" } else { "Create Vehicle" }.to_owned());

    view! {
        <FormModal title=title submit_id="submit-vehicle" submit_label=submit_label on_submit=on_submit on_close=on_close>
            <div class="dialog__grid">
                <TextField id="make" label="Make" binding={bind_draft!(editor, make)} required=true />
                <TextField id="model" label="Model" binding={bind_draft!(editor, model)} required=true />
                <TextField id="from_year" label="From Year" binding={bind_draft!(editor, from_year)} input_type="number" required=true />
                <TextField id="to_year" label="To Year" binding={bind_draft!(editor, to_year)} input_type="number" placeholder="Ongoing" />
                <SelectField id="power_type" label="Power Type" binding={bind_draft!(editor, power_type)} options={PowerType::labels().collect()} />
                <SelectField id="drive_type" label="Drive Type" binding={bind_draft!(editor, drive_type)} options={DriveType::labels().collect()} />
                <SelectField id="body_style" label="Body Style" binding={bind_draft!(editor, body_style)} options={BodyStyle::labels().collect()} />
                <TextField id="variant" label="Variant" binding={bind_draft!(editor, variant)} />
                <TextField id="trim_level" label="Trim Level" binding={bind_draft!(editor, trim_level)} />
            </div>
        </FormModal>
    }
}
