//! Vehicles catalog with create/edit/delete.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::vehicle_form_modal::{VehicleEditor, VehicleFormModal};
use crate::net::api;
use crate::net::types::Vehicle;
use crate::state::collection::{Placement, apply_saved, remove_by_id};
use crate::state::editor::SubmitTarget;
use crate::state::vehicle_draft::{VehicleDraft, year_range};
use crate::util::browser::{confirm, current_year, delete_prompt};
use crate::util::display::joined;

#[component]
pub fn VehiclesPage() -> impl IntoView {
    let vehicles = RwSignal::new(Vec::<Vehicle>::new());
    let editor = RwSignal::new(VehicleEditor::default());

    Effect::new(move || {
        spawn_local(async move {
            match api::list_vehicles().await {
                Ok(items) => vehicles.set(items),
                Err(err) => api::log_failure("load vehicles", &err),
            }
        });
    });

    let on_submit = Callback::new(move |()| {
        let (target, payload) = editor.with_untracked(|e| {
            let payload = if e.draft.is_submittable() { e.draft.to_payload() } else { None };
            (e.target(), payload)
        });
        // Missing required fields or an unparseable from_year: nothing to send.
        let Some(payload) = payload else {
            return;
        };
        spawn_local(async move {
            let result = match &target {
                SubmitTarget::Create => api::create_vehicle(&payload).await,
                SubmitTarget::Update(id) => api::update_vehicle(id, &payload).await,
            };
            match result {
                Ok(saved) => {
                    vehicles.update(|items| apply_saved(items, saved, target.is_update(), Placement::Back));
                    editor.update(|e| e.finish(VehicleDraft::new(current_year())));
                }
                Err(err) => api::log_failure("save vehicle", &err),
            }
        });
    });
    let on_close = Callback::new(move |()| editor.update(VehicleEditor::dismiss));

    let on_delete = move |id: String| {
        if !confirm(&delete_prompt("vehicle")) {
            return;
        }
        spawn_local(async move {
            match api::delete_vehicle(&id).await {
                Ok(()) => {
                    vehicles.update(|items| {
                        remove_by_id(items, &id);
                    });
                }
                Err(err) => api::log_failure("delete vehicle", &err),
            }
        });
    };

    view! {
        <div class="list-page vehicles-page">
            <header class="list-page__header">
                <h1>"Vehicles"</h1>
                <button
                    class="btn btn--primary"
                    id="add-vehicle"
                    on:click=move |_| editor.update(|e| e.open_create(VehicleDraft::new(current_year())))
                >
                    "Add New Vehicle"
                </button>
            </header>

            <table class="list-page__table">
                <thead>
                    <tr>
                        <th>"Vehicle"</th>
                        <th>"Variant / Trim"</th>
                        <th>"Years"</th>
                        <th>"Power"</th>
                        <th>"Body"</th>
                        <th>"Drive"</th>
                        <th class="list-page__actions">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <Show
                        when=move || vehicles.with(|items| !items.is_empty())
                        fallback=|| view! { <tr><td class="list-page__empty" colspan="7">"No vehicles found"</td></tr> }
                    >
                        {move || {
                            vehicles
                                .get()
                                .into_iter()
                                .map(|vehicle| {
                                    let edit_vehicle = vehicle.clone();
                                    let delete_id = vehicle.id.clone();
                                    view! {
                                        <tr>
                                            <td class="list-page__primary">{format!("{} {}", vehicle.make, vehicle.model)}</td>
                                            <td>{joined(&[vehicle.variant.as_deref(), vehicle.trim_level.as_deref()])}</td>
                                            <td>{year_range(&vehicle)}</td>
                                            <td>{vehicle.power_type.clone()}</td>
                                            <td>{vehicle.body_style.clone()}</td>
                                            <td>{vehicle.drive_type.clone()}</td>
                                            <td class="list-page__actions">
                                                <button
                                                    class="btn edit-vehicle"
                                                    title="Edit vehicle"
                                                    on:click=move |_| {
                                                        let draft = VehicleDraft::from_vehicle(&edit_vehicle);
                                                        editor.update(|e| e.open_edit(edit_vehicle.clone(), draft));
                                                    }
                                                >
                                                    "Edit"
                                                </button>
                                                <button
                                                    class="btn btn--danger delete-vehicle"
                                                    title="Delete vehicle"
                                                    on:click=move |_| on_delete(delete_id.clone())
                                                >
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </Show>
                </tbody>
            </table>

            <Show when=move || editor.with(|e| e.open)>
                <VehicleFormModal editor=editor on_submit=on_submit on_close=on_close />
            </Show>
        </div>
    }
}
