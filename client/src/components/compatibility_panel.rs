//! Vehicle compatibility list with link picker for one part.
//!
//! ERROR HANDLING
//! ==============
//! Failed link/unlink calls are logged and leave the list untouched; the
//! picker stays open so the user can retry.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::net::api;
use crate::net::types::Vehicle;
use crate::state::compatibility::{linkable, picker_label, unlink_local};
use crate::state::vehicle_draft::year_range;

#[component]
pub fn CompatibilityPanel(
    #[prop(into)] part_id: Signal<String>,
    linked: RwSignal<Vec<Vehicle>>,
    catalog: RwSignal<Vec<Vehicle>>,
) -> impl IntoView {
    let picker_open = RwSignal::new(false);
    let selected = RwSignal::new(String::new());

    let options = Memo::new(move |_| catalog.with(|all| linked.with(|l| linkable(all, l))));

    let on_link = move |_| {
        let vehicle_id = selected.get_untracked();
        if vehicle_id.is_empty() {
            return;
        }
        let id = part_id.get_untracked();
        spawn_local(async move {
            if let Err(err) = api::link_vehicle(&id, &vehicle_id).await {
                api::log_failure("link vehicle", &err);
                return;
            }
            match api::list_part_vehicles(&id).await {
                Ok(items) => linked.set(items),
                Err(err) => api::log_failure("reload linked vehicles", &err),
            }
            picker_open.set(false);
            selected.set(String::new());
        });
    };

    let on_unlink = move |vehicle_id: String| {
        let id = part_id.get_untracked();
        spawn_local(async move {
            match api::unlink_vehicle(&id, &vehicle_id).await {
                Ok(()) => linked.update(|items| unlink_local(items, &vehicle_id)),
                Err(err) => api::log_failure("unlink vehicle", &err),
            }
        });
    };

    view! {
        <section class="panel compatibility-panel">
            <header class="panel__header">
                <h2>"Vehicle Compatibility"</h2>
                <button class="btn" id="link-vehicle" on:click=move |_| picker_open.update(|open| *open = !*open)>
                    {move || if picker_open.get() { "Cancel" } else { "Link Vehicle" }}
                </button>
            </header>

            <Show when=move || picker_open.get()>
                <div class="compatibility-panel__picker">
                    <select
                        id="vehicle-picker"
                        class="dialog__input"
                        prop:value=move || selected.get()
                        on:change=move |ev| selected.set(event_target_value(&ev))
                    >
                        <option value="">"Select a vehicle..."</option>
                        {move || {
                            options
                                .get()
                                .into_iter()
                                .map(|v| view! { <option value=v.id.clone()>{picker_label(&v)}</option> })
                                .collect_view()
                        }}
                    </select>
                    <button class="btn btn--primary" id="confirm-link" on:click=on_link>
                        "Link"
                    </button>
                </div>
            </Show>

            <Show
                when=move || linked.with(|items| !items.is_empty())
                fallback=|| view! { <p class="panel__empty">"No compatibility records"</p> }
            >
                <ul class="compatibility-panel__list">
                    {move || {
                        linked
                            .get()
                            .into_iter()
                            .map(|v| {
                                let vehicle_id = v.id.clone();
                                view! {
                                    <li class="compatibility-panel__item">
                                        <span class="compatibility-panel__name">{format!("{} {}", v.make, v.model)}</span>
                                        <span class="compatibility-panel__years">{year_range(&v)}</span>
                                        <button
                                            class="btn btn--danger unlink-vehicle"
                                            title="Unlink vehicle"
                                            on:click=move |_| on_unlink(vehicle_id.clone())
                                        >
                                            "Unlink"
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </Show>
        </section>
    }
}
