//! Per-location stock levels for one part, with stepper and "Add Stock".
//!
//! DESIGN
//! ======
//! Every change is an upsert keyed by location followed by a re-fetch of the
//! part's stock rows, so the panel always shows what the backend stored.
//! The stepper sends `quantity ± 1` with no client-side floor.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::net::api;
use crate::net::types::{Location, StockLevel, StockUpsert};
use crate::state::stock::{SAVE_STOCK_LABEL, StockDraft, add_stock_toggle_label, location_label, stepped};

#[component]
pub fn StockPanel(
    #[prop(into)] part_id: Signal<String>,
    stock: RwSignal<Vec<StockLevel>>,
    locations: RwSignal<Vec<Location>>,
) -> impl IntoView {
    let adding = RwSignal::new(false);
    let draft = RwSignal::new(StockDraft::default());

    let step = move |body: StockUpsert| {
        let id = part_id.get_untracked();
        spawn_local(async move {
            save_and_reload(&id, &body, stock).await;
        });
    };

    let on_save = move |_| {
        let Some(body) = draft.with_untracked(StockDraft::to_upsert) else {
            return;
        };
        let id = part_id.get_untracked();
        spawn_local(async move {
            if save_and_reload(&id, &body, stock).await {
                adding.set(false);
                draft.set(StockDraft::default());
            }
        });
    };

    view! {
        <section class="panel stock-panel">
            <header class="panel__header">
                <h2>"Stock Levels"</h2>
                <button class="btn" id="add-stock" on:click=move |_| adding.update(|open| *open = !*open)>
                    {move || add_stock_toggle_label(adding.get())}
                </button>
            </header>

            <Show when=move || adding.get()>
                <div class="stock-panel__form">
                    <label class="dialog__label">
                        "Location"
                        <select
                            id="location"
                            class="dialog__input"
                            prop:value=move || draft.with(|d| d.location_id.clone())
                            on:change=move |ev| draft.update(|d| d.location_id = event_target_value(&ev))
                        >
                            <option value="">"Select a location..."</option>
                            {move || {
                                locations
                                    .get()
                                    .into_iter()
                                    .map(|loc| view! { <option value=loc.id>{loc.name}</option> })
                                    .collect_view()
                            }}
                        </select>
                    </label>
                    <label class="dialog__label">
                        "Quantity"
                        <input
                            id="quantity"
                            class="dialog__input"
                            type="number"
                            prop:value=move || draft.with(|d| d.quantity.clone())
                            on:input=move |ev| draft.update(|d| d.quantity = event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" id="save-stock" on:click=on_save>
                        {SAVE_STOCK_LABEL}
                    </button>
                </div>
            </Show>

            <Show
                when=move || stock.with(|rows| !rows.is_empty())
                fallback=|| view! { <p class="panel__empty">"No stock assigned to locations"</p> }
            >
                <ul class="stock-panel__list">
                    {move || {
                        let all_locations = locations.get();
                        stock
                            .get()
                            .into_iter()
                            .map(|row| {
                                let label = location_label(&row, &all_locations);
                                let in_stock = row.quantity > 0;
                                let badge_class = if in_stock {
                                    "stock-panel__badge stock-panel__badge--in"
                                } else {
                                    "stock-panel__badge stock-panel__badge--out"
                                };
                                let down = stepped(&row, -1);
                                let up = stepped(&row, 1);
                                view! {
                                    <li class="stock-panel__row stock-item">
                                        <span class="stock-panel__location">{label}</span>
                                        <span class=badge_class>{if in_stock { "In stock" } else { "Out of stock" }}</span>
                                        <div class="stock-panel__stepper">
                                            <button class="btn stock-decrement" title="Decrease" on:click=move |_| step(down.clone())>
                                                "-"
                                            </button>
                                            <span class="stock-panel__quantity">{row.quantity}</span>
                                            <button class="btn stock-increment" title="Increase" on:click=move |_| step(up.clone())>
                                                "+"
                                            </button>
                                        </div>
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

/// Upsert one location's quantity, then replace the rows with the stored
/// state. `false` if the upsert failed.
async fn save_and_reload(part_id: &str, body: &StockUpsert, stock: RwSignal<Vec<StockLevel>>) -> bool {
    if let Err(err) = api::upsert_stock(part_id, body).await {
        api::log_failure("save stock", &err);
        return false;
    }
    match api::list_part_stock(part_id).await {
        Ok(rows) => stock.set(rows),
        Err(err) => api::log_failure("reload stock", &err),
    }
    true
}
