//! Stock locations with create/edit/delete.
//!
//! Saves re-fetch the whole list rather than splicing the response in, so
//! the table always reflects the backend's ordering.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::location_form_modal::{LocationEditor, LocationFormModal};
use crate::net::api;
use crate::net::types::Location;
use crate::state::collection::remove_by_id;
use crate::state::editor::SubmitTarget;
use crate::state::location_draft::LocationDraft;
use crate::util::browser::{confirm, delete_prompt};
use crate::util::display::or_placeholder;

#[component]
pub fn LocationsPage() -> impl IntoView {
    let locations = RwSignal::new(Vec::<Location>::new());
    let editor = RwSignal::new(LocationEditor::default());

    let reload = move || async move {
        match api::list_locations().await {
            Ok(items) => locations.set(items),
            Err(err) => api::log_failure("load locations", &err),
        }
    };

    Effect::new(move || spawn_local(reload()));

    let on_submit = Callback::new(move |()| {
        let (target, payload, ready) = editor.with_untracked(|e| (e.target(), e.draft.to_payload(), e.draft.is_submittable()));
        if !ready {
            return;
        }
        spawn_local(async move {
            let result = match &target {
                SubmitTarget::Create => api::create_location(&payload).await,
                SubmitTarget::Update(id) => api::update_location(id, &payload).await,
            };
            match result {
                Ok(_) => {
                    editor.update(|e| e.finish(LocationDraft::default()));
                    reload().await;
                }
                Err(err) => api::log_failure("save location", &err),
            }
        });
    });
    let on_close = Callback::new(move |()| editor.update(LocationEditor::dismiss));

    let on_delete = move |id: String| {
        if !confirm(&delete_prompt("location")) {
            return;
        }
        spawn_local(async move {
            match api::delete_location(&id).await {
                Ok(()) => {
                    locations.update(|items| {
                        remove_by_id(items, &id);
                    });
                }
                Err(err) => api::log_failure("delete location", &err),
            }
        });
    };

    view! {
        <div class="list-page locations-page">
            <header class="list-page__header">
                <h1>"Locations"</h1>
                <button
                    class="btn btn--primary"
                    id="add-location"
                    on:click=move |_| editor.update(|e| e.open_create(LocationDraft::default()))
                >
                    "Add New Location"
                </button>
            </header>

            <table class="list-page__table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Address"</th>
                        <th>"Telephone"</th>
                        <th>"Email"</th>
                        <th class="list-page__actions">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <Show
                        when=move || locations.with(|items| !items.is_empty())
                        fallback=|| view! { <tr><td class="list-page__empty" colspan="5">"No locations found"</td></tr> }
                    >
                        {move || {
                            locations
                                .get()
                                .into_iter()
                                .map(|location| {
                                    let edit_location = location.clone();
                                    let delete_id = location.id.clone();
                                    view! {
                                        <tr>
                                            <td class="list-page__primary">{location.name.clone()}</td>
                                            <td>{location.address.clone()}</td>
                                            <td>{or_placeholder(location.telephone.as_deref(), "-")}</td>
                                            <td>{or_placeholder(location.email.as_deref(), "-")}</td>
                                            <td class="list-page__actions">
                                                <button
                                                    class="btn edit-location"
                                                    title="Edit location"
                                                    on:click=move |_| {
                                                        let draft = LocationDraft::from_location(&edit_location);
                                                        editor.update(|e| e.open_edit(edit_location.clone(), draft));
                                                    }
                                                >
                                                    "Edit"
                                                </button>
                                                <button
                                                    class="btn btn--danger delete-location"
                                                    title="Delete location"
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
                <LocationFormModal editor=editor on_submit=on_submit on_close=on_close />
            </Show>
        </div>
    }
}
