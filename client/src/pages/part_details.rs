//! Part details: summary card, compatibility links and stock levels.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route `/parts/:id`. On mount and whenever `id` changes, five reads run
//! concurrently: the part, its linked vehicles, its stock rows, and the full
//! vehicle and location catalogs. Each result is applied independently as
//! soon as the join completes; a failed read leaves its section as it was.
//!
//! TRADE-OFFS
//! ==========
//! Results are not checked against the id that is current when they land.
//! Navigating between parts quickly can briefly show the earlier part's data.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

use crate::components::compatibility_panel::CompatibilityPanel;
use crate::components::stock_panel::StockPanel;
use crate::net::api;
use crate::net::types::{Location, Part, StockLevel, Vehicle};
use crate::util::display::{or_placeholder, price_label};

#[component]
pub fn PartDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let part_id = Signal::derive(move || params.with(|p| p.get("id").unwrap_or_default()));

    let part = RwSignal::new(None::<Part>);
    let linked = RwSignal::new(Vec::<Vehicle>::new());
    let stock = RwSignal::new(Vec::<StockLevel>::new());
    let catalog = RwSignal::new(Vec::<Vehicle>::new());
    let locations = RwSignal::new(Vec::<Location>::new());

    Effect::new(move || {
        let id = part_id.get();
        if id.is_empty() {
            return;
        }
        spawn_local(async move {
            let (part_res, linked_res, stock_res, catalog_res, locations_res) = futures::join!(
                api::get_part(&id),
                api::list_part_vehicles(&id),
                api::list_part_stock(&id),
                api::list_vehicles(),
                api::list_locations(),
            );
            match part_res {
                Ok(p) => part.set(Some(p)),
                Err(err) => api::log_failure("load part", &err),
            }
            match linked_res {
                Ok(items) => linked.set(items),
                Err(err) => api::log_failure("load linked vehicles", &err),
            }
            match stock_res {
                Ok(items) => stock.set(items),
                Err(err) => api::log_failure("load stock", &err),
            }
            match catalog_res {
                Ok(items) => catalog.set(items),
                Err(err) => api::log_failure("load vehicle catalog", &err),
            }
            match locations_res {
                Ok(items) => locations.set(items),
                Err(err) => api::log_failure("load locations", &err),
            }
        });
    });

    view! {
        <Show
            when=move || part.with(Option::is_some)
            fallback=|| view! { <div class="part-details part-details--loading">"Synchronizing Part Data..."</div> }
        >
            {move || part.get().map(|p| view! { <PartSummary part=p /> })}
            <div class="part-details__panels">
                <CompatibilityPanel part_id=part_id linked=linked catalog=catalog />
                <StockPanel part_id=part_id stock=stock locations=locations />
            </div>
        </Show>
    }
}

/// Headline, badges and attribute table for one part.
#[component]
fn PartSummary(part: Part) -> impl IntoView {
    let media = match part.image_url.clone().filter(|url| !url.is_empty()) {
        Some(url) => view! { <img class="part-details__image" src=url alt=part.description.clone() /> }.into_any(),
        None => view! {
            <div class="part-details__estimate">
                <span class="part-details__estimate-label">"Price Estimate"</span>
                <span class="part-details__estimate-value">{price_label(part.last_known_price)}</span>
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="part-details">
            <a href="/" class="part-details__back">"← Back to Parts"</a>
            <header class="part-details__header">
                <div class="part-details__badges">
                    <span class="badge badge--type">{part.part_type.clone()}</span>
                    <span class="badge badge--availability">{part.availability.clone()}</span>
                </div>
                <h1 class="part-details__mpn">{part.manufacturer_part_number.clone()}</h1>
                <p class="part-details__ref">"Internal Ref: " {part.internal_part_code.clone()}</p>
            </header>

            <div class="part-details__body">
                {media}
                <dl class="part-details__spec">
                    <dt>"System"</dt>
                    <dd>{part.system.clone()}</dd>
                    <dt>"OE Number"</dt>
                    <dd>{or_placeholder(part.oe_part_number.as_deref(), "N/A")}</dd>
                    <dt>"Supplier"</dt>
                    <dd>{or_placeholder(part.last_known_supplier.as_deref(), "Unknown")}</dd>
                    <dt>"Last Price"</dt>
                    <dd>{price_label(part.last_known_price)}</dd>
                </dl>
            </div>

            <section class="part-details__text">
                <h2>"Description"</h2>
                <p>{part.description.clone()}</p>
                {part.oe_description.clone().filter(|s| !s.is_empty()).map(|text| view! {
                    <h3>"OE Description"</h3>
                    <p>{text}</p>
                })}
                {part.notes.clone().filter(|s| !s.is_empty()).map(|text| view! {
                    <h3>"Notes"</h3>
                    <p class="part-details__notes">{text}</p>
                })}
                {part.purchase_url.clone().filter(|s| !s.is_empty()).map(|url| view! {
                    <a class="btn btn--primary part-details__buy" href=url target="_blank" rel="noopener noreferrer">
                        "Purchase Link"
                    </a>
                })}
            </section>
        </div>
    }
}
