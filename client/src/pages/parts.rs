//! Parts dashboard: searchable parts table with create/edit/delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! Landing route (`/`). Loads all parts on mount; typing in the search box
//! re-queries after 300 ms of inactivity. An empty query lists every part,
//! anything else goes through the search endpoint and keeps only its parts.
//!
//! TRADE-OFFS
//! ==========
//! Responses are applied as they arrive. A slow response for an older query
//! can still overwrite a newer one once its request has been issued; only
//! requests that have not started yet are superseded.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::components::part_form_modal::{PartEditor, PartFormModal};
use crate::net::api;
use crate::net::types::Part;
use crate::state::collection::{Placement, apply_saved, remove_by_id};
use crate::state::editor::SubmitTarget;
use crate::state::part_draft::PartDraft;
use crate::util::browser::{confirm, delete_prompt};
use crate::util::debounce::Debouncer;
use crate::util::nav::part_details_path;

/// Quiet period before a search is issued.
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

#[component]
pub fn PartsPage() -> impl IntoView {
    let parts = RwSignal::new(Vec::<Part>::new());
    let query = RwSignal::new(String::new());
    let searching = RwSignal::new(false);
    let editor = RwSignal::new(PartEditor::default());
    let debouncer = Debouncer::new(SEARCH_DEBOUNCE_MS);

    let load = move |q: String| async move {
        searching.set(true);
        match api::parts_for_query(&q).await {
            Ok(items) => parts.set(items),
            Err(err) => api::log_failure("load parts", &err),
        }
        searching.set(false);
    };

    Effect::new(move || spawn_local(load(String::new())));
    on_cleanup(move || debouncer.cancel());

    let on_submit = Callback::new(move |()| {
        let (target, payload, ready) = editor.with_untracked(|e| (e.target(), e.draft.to_payload(), e.draft.is_submittable()));
        if !ready {
            return;
        }
        spawn_local(async move {
            let result = match &target {
                SubmitTarget::Create => api::create_part(&payload).await,
                SubmitTarget::Update(id) => api::update_part(id, &payload).await,
            };
            match result {
                Ok(saved) => {
                    parts.update(|items| apply_saved(items, saved, target.is_update(), Placement::Front));
                    editor.update(|e| e.finish(PartDraft::default()));
                }
                Err(err) => api::log_failure("save part", &err),
            }
        });
    });
    let on_close = Callback::new(move |()| editor.update(PartEditor::dismiss));

    let on_delete = move |id: String| {
        if !confirm(&delete_prompt("part")) {
            return;
        }
        spawn_local(async move {
            match api::delete_part(&id).await {
                Ok(()) => {
                    parts.update(|items| {
                        remove_by_id(items, &id);
                    });
                }
                Err(err) => api::log_failure("delete part", &err),
            }
        });
    };

    view! {
        <div class="list-page parts-page">
            <header class="list-page__header">
                <h1>"Parts Dashboard"</h1>
                <button class="btn btn--primary" id="add-new-part" on:click=move |_| editor.update(|e| e.open_create(PartDraft::default()))>
                    "Add New Part"
                </button>
            </header>

            <div class="list-page__search">
                <input
                    id="search"
                    class="list-page__search-input"
                    type="search"
                    placeholder="Search parts, numbers, descriptions..."
                    prop:value=move || query.get()
                    on:input=move |ev| {
                        let q = event_target_value(&ev);
                        query.set(q.clone());
                        debouncer.schedule(move || load(q));
                    }
                />
                <Show when=move || searching.get()>
                    <span class="list-page__searching">"Searching..."</span>
                </Show>
            </div>

            <table class="list-page__table">
                <thead>
                    <tr>
                        <th>"Internal Code"</th>
                        <th>"MPN"</th>
                        <th>"Description"</th>
                        <th>"Type"</th>
                        <th class="list-page__actions">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <Show
                        when=move || parts.with(|items| !items.is_empty())
                        fallback=|| view! { <tr><td class="list-page__empty" colspan="5">"No parts found"</td></tr> }
                    >
                        {move || {
                            parts
                                .get()
                                .into_iter()
                                .map(|part| {
                                    let edit_part = part.clone();
                                    let delete_id = part.id.clone();
                                    view! {
                                        <tr>
                                            <td>
                                                <A href=part_details_path(&part.id)>{part.internal_part_code.clone()}</A>
                                            </td>
                                            <td>{part.manufacturer_part_number.clone()}</td>
                                            <td>{part.description.clone()}</td>
                                            <td>{part.part_type.clone()}</td>
                                            <td class="list-page__actions">
                                                <button
                                                    class="btn edit-part"
                                                    title="Edit part"
                                                    on:click=move |_| {
                                                        let draft = PartDraft::from_part(&edit_part);
                                                        editor.update(|e| e.open_edit(edit_part.clone(), draft));
                                                    }
                                                >
                                                    "Edit"
                                                </button>
                                                <button
                                                    class="btn btn--danger delete-part"
                                                    title="Delete part"
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
                <PartFormModal editor=editor on_submit=on_submit on_close=on_close />
            </Show>
        </div>
    }
}
